pub mod auth;
pub mod daily;
pub mod focus;
pub mod health;
pub mod notification;
pub mod plants;
pub mod shop;
pub mod tasks;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
/// /auth/refresh                  refresh (public)
/// /auth/logout                   logout (requires auth)
///
/// /users/me                      profile + progression stats
///
/// /tasks                         list, create
/// /tasks/{id}                    get, update, delete (pending only)
/// /tasks/{id}/complete           complete and credit rewards (POST)
///
/// /focus-sessions                list, finalize (POST)
///
/// /daily-rewards/status          cycle position, claimed-today flag (GET)
/// /daily-rewards/claim           claim today's reward (POST)
///
/// /plants                        list, plant a seed (POST)
/// /plants/{id}/booster           apply a booster (POST)
///
/// /shop/catalog                  purchasable templates with prices (GET)
/// /shop/purchase                 buy one item at catalog price (POST)
///
/// /notifications                 list (?unread_only=&limit=&offset=)
/// /notifications/unread-count    unread count (GET)
/// /notifications/read-all        mark all read (POST)
/// /notifications/{id}/read       mark one read (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/tasks", tasks::router())
        .nest("/focus-sessions", focus::router())
        .nest("/daily-rewards", daily::router())
        .nest("/plants", plants::router())
        .nest("/shop", shop::router())
        .nest("/notifications", notification::router())
}
