//! Handlers for the `/shop` resource.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use spriggly_db::models::template::{BoosterTemplate, PlantTemplate};
use spriggly_db::repositories::TemplateRepo;

use crate::engine::shop::{purchase as engine_purchase, Purchase, PurchaseOutcome};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for `GET /shop/catalog`.
///
/// Prices here are the authoritative ones the purchase path charges.
#[derive(Debug, Serialize)]
pub struct Catalog {
    pub boosters: Vec<BoosterTemplate>,
    pub plants: Vec<PlantTemplate>,
}

/// GET /api/v1/shop/catalog
///
/// List every purchasable booster and plant template.
pub async fn catalog(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Catalog>>> {
    let boosters = TemplateRepo::list_boosters(&state.pool).await?;
    let plants = TemplateRepo::list_plants(&state.pool).await?;
    Ok(Json(DataResponse {
        data: Catalog { boosters, plants },
    }))
}

/// POST /api/v1/shop/purchase
///
/// Buy one item at catalog price through the engine.
pub async fn purchase(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<Purchase>,
) -> AppResult<Json<DataResponse<PurchaseOutcome>>> {
    let outcome = engine_purchase(&state, auth.user_id, input).await?;
    Ok(Json(DataResponse { data: outcome }))
}
