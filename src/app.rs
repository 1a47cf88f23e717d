use crate::controller::{SearchController, SearchState};
use crate::search::{SearchClient, SearchError, SearchResult};
use std::sync::Arc;
use tokio::sync::mpsc;

type Outcome = Result<SearchResult, SearchError>;

/// One UI session: the controller, the input draft and the in-flight call
pub struct App {
    /// Search backend, built once at startup
    client: Arc<dyn SearchClient>,
    controller: SearchController,
    /// Text currently in the input box. Kept after submit.
    draft: String,
    /// Receives the outcome of the in-flight search
    outcome_receiver: Option<mpsc::UnboundedReceiver<Outcome>>,
}

impl App {
    pub fn new(client: Arc<dyn SearchClient>) -> Self {
        Self {
            client,
            controller: SearchController::new(),
            draft: String::new(),
            outcome_receiver: None,
        }
    }

    pub fn state(&self) -> &SearchState {
        self.controller.state()
    }

    pub fn has_searched(&self) -> bool {
        self.controller.has_searched()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Submit the input text and, when accepted, start the search on a
    /// background task. Returns whether a search was started.
    pub fn submit(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.controller.state().is_loading() {
            return false;
        }
        self.draft = text;

        let Some(query) = self.controller.submit(&self.draft) else {
            return false;
        };

        let (tx, rx) = mpsc::unbounded_channel();
        self.outcome_receiver = Some(rx);

        let client = self.client.clone();
        tokio::spawn(async move {
            let outcome = client.search(query.as_str()).await;
            // Receiver dropped means the session is gone
            let _ = tx.send(outcome);
        });
        true
    }

    /// Apply the outcome if the search has finished. Never blocks.
    pub fn poll_outcome(&mut self) -> bool {
        let Some(receiver) = &mut self.outcome_receiver else {
            return false;
        };
        match receiver.try_recv() {
            Ok(outcome) => {
                self.outcome_receiver = None;
                self.controller.complete(outcome)
            }
            Err(mpsc::error::TryRecvError::Empty) => false,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                self.outcome_receiver = None;
                self.fail_lost_task()
            }
        }
    }

    /// Wait for the in-flight search, if any, and apply its outcome
    pub async fn wait_for_outcome(&mut self) -> bool {
        let Some(mut receiver) = self.outcome_receiver.take() else {
            return false;
        };
        match receiver.recv().await {
            Some(outcome) => self.controller.complete(outcome),
            None => self.fail_lost_task(),
        }
    }

    // The task panicked before reporting
    fn fail_lost_task(&mut self) -> bool {
        tracing::error!("search task ended without reporting an outcome");
        self.controller
            .complete(Err(SearchError::new("The search was interrupted.")))
    }
}
