//! Route definitions for the `/shop` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::shop;
use crate::state::AppState;

/// Routes mounted at `/shop`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(shop::catalog))
        .route("/purchase", post(shop::purchase))
}
