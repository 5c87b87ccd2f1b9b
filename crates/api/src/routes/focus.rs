//! Route definitions for the `/focus-sessions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::focus;
use crate::state::AppState;

/// Routes mounted at `/focus-sessions`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(focus::list_sessions).post(focus::create_session))
}
