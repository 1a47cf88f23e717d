//! HTTP surface: the page, the search form target and a health probe.

use crate::app::App;
use crate::ui::{render_page, PageView};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Page path.
pub const INDEX_PATH: &str = "/";
/// Search form target.
pub const SEARCH_PATH: &str = "/search";
/// Health endpoint path.
pub const HEALTH_PATH: &str = "/health";

/// Shared handler state: the single UI session
#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Mutex<App>>,
}

impl AppState {
    pub fn new(app: App) -> Self {
        Self {
            app: Arc::new(Mutex::new(app)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(INDEX_PATH, get(index))
        .route(SEARCH_PATH, post(submit_search))
        .route(HEALTH_PATH, get(health))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
}

async fn index(State(st): State<AppState>) -> Html<String> {
    let mut app = st.app.lock().await;
    app.poll_outcome();
    Html(render_page(&PageView::from_app(&app)))
}

// Rejected submissions (blank, or a search already running) still land back
// on the page, which then shows the unchanged state.
async fn submit_search(State(st): State<AppState>, Form(form): Form<SearchForm>) -> Redirect {
    let started = st.app.lock().await.submit(form.query);
    tracing::debug!(started, "search form submitted");
    Redirect::to(INDEX_PATH)
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}
