//! Handlers for the `/plants` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use spriggly_core::types::DbId;
use spriggly_db::models::plant::UserPlant;
use spriggly_db::repositories::PlantRepo;

use crate::engine::boosters::{use_booster, BoosterUseOutcome, UseBooster};
use crate::engine::planting::{plant_seed, PlantSeed, PlantSeedOutcome};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/plants
///
/// List the authenticated user's plants in planting order.
pub async fn list_plants(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<UserPlant>>>> {
    let plants = PlantRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: plants }))
}

/// POST /api/v1/plants
///
/// Plant a seed from inventory through the engine.
pub async fn plant(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<PlantSeed>,
) -> AppResult<(StatusCode, Json<DataResponse<PlantSeedOutcome>>)> {
    let outcome = plant_seed(&state, auth.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: outcome })))
}

/// POST /api/v1/plants/{id}/booster
///
/// Apply a booster from inventory to one of the caller's plants.
pub async fn apply_booster(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(plant_id): Path<DbId>,
    Json(input): Json<UseBooster>,
) -> AppResult<Json<DataResponse<BoosterUseOutcome>>> {
    let outcome = use_booster(&state, auth.user_id, plant_id, input).await?;
    Ok(Json(DataResponse { data: outcome }))
}
