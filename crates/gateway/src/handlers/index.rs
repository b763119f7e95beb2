//! Root greeting

use axum::extract::State;

use crate::AppState;

/// `GET /` plain-text greeting
pub async fn index(State(state): State<AppState>) -> String {
    format!("Hello, {}", state.config.server.title)
}
