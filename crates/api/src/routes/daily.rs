//! Route definitions for the `/daily-rewards` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::daily;
use crate::state::AppState;

/// Routes mounted at `/daily-rewards`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(daily::status))
        .route("/claim", post(daily::claim))
}
