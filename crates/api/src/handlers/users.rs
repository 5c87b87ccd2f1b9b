//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::Json;
use spriggly_core::error::CoreError;
use spriggly_db::models::user::UserResponse;
use spriggly_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users/me
///
/// Return the authenticated user's profile and progression stats.
pub async fn me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "user",
            id: auth.user_id,
        })?;

    Ok(Json(DataResponse { data: user.into() }))
}
