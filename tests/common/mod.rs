//! Shared search clients for driving the controller and server in tests

#![allow(dead_code)]

use start341::search::{SearchClient, SearchError, SearchResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

/// Answers every query with the same outcome and records what it was asked
pub struct ScriptedClient {
    outcome: Result<SearchResult, SearchError>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn answering(result: SearchResult) -> Self {
        Self::new(Ok(result))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(Err(SearchError::new(message)))
    }

    fn new(outcome: Result<SearchResult, SearchError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SearchClient for ScriptedClient {
    async fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        self.outcome.clone()
    }
}

/// Holds every search until `release` is called
pub struct GatedClient {
    inner: ScriptedClient,
    gate: Notify,
    entered: AtomicUsize,
}

impl GatedClient {
    pub fn answering(result: SearchResult) -> Self {
        Self {
            inner: ScriptedClient::answering(result),
            gate: Notify::new(),
            entered: AtomicUsize::new(0),
        }
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    /// Searches started, including ones still held at the gate
    pub fn calls(&self) -> usize {
        self.entered.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SearchClient for GatedClient {
    async fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        self.entered.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        self.inner.search(query).await
    }
}
