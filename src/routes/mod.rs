pub mod favorites;
pub mod health;
pub mod list;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// Builds the router. The favorites feature flag is evaluated exactly once,
/// at startup; when it is off the favorites routes are never registered and
/// only /health remains reachable.
pub fn create_routes(favorites_enabled: bool) -> Router<AppState> {
    let router = Router::new().route("/health", get(health::health));

    if !favorites_enabled {
        return router;
    }

    router
        .route("/favorites/get", get(favorites::get_favorites))
        .route("/favorites/set", put(favorites::set_favorites))
        .route("/favorites/add", put(favorites::add_favorite))
        .route("/favorites/remove", put(favorites::remove_favorite))
        .route("/favorites", get(list::list_latest))
        .route("/favorites/{filter}", get(list::list_filtered))
}
