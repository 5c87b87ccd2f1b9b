//! Route definitions for the `/plants` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::plants;
use crate::state::AppState;

/// Routes mounted at `/plants`.
///
/// ```text
/// GET  /               -> list
/// POST /               -> plant a seed (engine)
/// POST /{id}/booster   -> apply a booster (engine)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(plants::list_plants).post(plants::plant))
        .route("/{id}/booster", post(plants::apply_booster))
}
