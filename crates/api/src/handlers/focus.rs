//! Handlers for the `/focus-sessions` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use spriggly_db::models::focus_session::FocusSession;
use spriggly_db::repositories::FocusSessionRepo;

use crate::engine::focus::{complete_focus_session, CompleteFocusSession, FocusCompletionOutcome};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum page size for session listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for session listing.
const DEFAULT_LIMIT: i64 = 50;

/// POST /api/v1/focus-sessions
///
/// Finalize a focus session through the engine. Sessions arrive complete;
/// there is no start/stop lifecycle on the server.
pub async fn create_session(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CompleteFocusSession>,
) -> AppResult<(StatusCode, Json<DataResponse<FocusCompletionOutcome>>)> {
    let outcome = complete_focus_session(&state, auth.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: outcome })))
}

/// GET /api/v1/focus-sessions
///
/// List the authenticated user's sessions, most recent first.
pub async fn list_sessions(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<FocusSession>>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let sessions = FocusSessionRepo::list_for_user(&state.pool, auth.user_id, limit, offset).await?;
    Ok(Json(DataResponse { data: sessions }))
}
