//! Submit → Loading → Success/Error, driven through the session

mod common;

use common::{GatedClient, ScriptedClient};
use start341::app::App;
use start341::controller::{Query, SearchState, APOLOGY_PREFIX};
use start341::search::SearchResult;
use std::sync::Arc;

#[tokio::test]
async fn search_reaches_success_paired_with_query() {
    let client = Arc::new(ScriptedClient::answering(SearchResult::new("Paris")));
    let mut app = App::new(client.clone());

    assert!(app.submit("capital of france"));
    assert!(app.wait_for_outcome().await);

    assert_eq!(
        app.state(),
        &SearchState::Success {
            result: SearchResult::new("Paris"),
            query: Query::parse("capital of france").unwrap(),
        }
    );
    assert_eq!(client.queries(), vec!["capital of france".to_string()]);
}

#[tokio::test]
async fn search_failure_reaches_error_with_apology() {
    let mut app = App::new(Arc::new(ScriptedClient::failing("quota exceeded")));

    assert!(app.submit("anything"));
    assert!(app.wait_for_outcome().await);

    assert_eq!(
        app.state(),
        &SearchState::Error {
            message: format!("{APOLOGY_PREFIX}quota exceeded"),
        }
    );
}

#[tokio::test]
async fn blank_query_never_reaches_the_client() {
    let client = Arc::new(ScriptedClient::answering(SearchResult::new("unused")));
    let mut app = App::new(client.clone());

    assert!(!app.submit("   "));
    assert!(!app.poll_outcome());

    assert_eq!(app.state(), &SearchState::Idle);
    assert!(!app.has_searched());
    tokio::task::yield_now().await;
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn app_submit_runs_in_background_and_keeps_draft() {
    let client = Arc::new(ScriptedClient::answering(SearchResult::new("Paris")));
    let mut app = App::new(client.clone());

    assert!(app.submit("capital of france "));
    assert!(app.state().is_loading());
    assert!(app.has_searched());

    assert!(app.wait_for_outcome().await);
    assert!(matches!(app.state(), SearchState::Success { .. }));
    assert_eq!(app.draft(), "capital of france ");
    assert_eq!(client.queries(), vec!["capital of france".to_string()]);
}

#[tokio::test]
async fn resubmission_while_loading_is_dropped() {
    let client = Arc::new(GatedClient::answering(SearchResult::new("first answer")));
    let mut app = App::new(client.clone());

    assert!(app.submit("first"));
    assert!(!app.submit("second"));
    assert_eq!(app.draft(), "first");

    client.release();
    assert!(app.wait_for_outcome().await);

    assert_eq!(client.calls(), 1);
    match app.state() {
        SearchState::Success { result, query } => {
            assert_eq!(result.answer, "first answer");
            assert_eq!(query.as_str(), "first");
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[tokio::test]
async fn poll_outcome_is_non_blocking() {
    let client = Arc::new(GatedClient::answering(SearchResult::new("later")));
    let mut app = App::new(client.clone());

    app.submit("query");
    assert!(!app.poll_outcome());
    assert!(app.state().is_loading());

    client.release();
    assert!(app.wait_for_outcome().await);
    assert!(!app.poll_outcome());
}

#[tokio::test]
async fn failure_then_new_search_replaces_error() {
    let failing = Arc::new(ScriptedClient::failing("network down"));
    let mut app = App::new(failing);
    app.submit("one");
    app.wait_for_outcome().await;
    assert!(matches!(app.state(), SearchState::Error { .. }));

    // A later submit from the error state goes straight back to loading
    assert!(app.submit("two"));
    assert_eq!(
        app.state(),
        &SearchState::Loading {
            query: Query::parse("two").unwrap()
        }
    );
}
