pub mod auth;
pub mod favorites;
pub mod health;
pub mod history;
pub mod ingredients;
pub mod profile;
pub mod search;

use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

pub use auth::{oauth_callback, refresh, session, sign_in, sign_out, sign_up, start_google_oauth};
pub use favorites::{add_favorite, list_favorites, remove_favorite};
pub use health::health_check;
pub use history::{list_history, record_cooked};
pub use ingredients::{add_ingredient, list_ingredients, remove_ingredient};
pub use profile::get_profile;
pub use search::{get_recipe, pantry_suggestions, search_recipes_get, search_recipes_post};

/// Body returned by delete endpoints
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/recipes/search",
            get(search_recipes_get).post(search_recipes_post),
        )
        .route("/api/recipes/suggestions", get(pantry_suggestions))
        .route("/api/recipes/:id", get(get_recipe))
        .route("/api/auth/signin", post(sign_in))
        .route("/api/auth/signup", post(sign_up))
        .route("/api/auth/signout", post(sign_out))
        .route("/api/auth/refresh", post(refresh))
        .route("/api/auth/session", get(session))
        .route("/api/auth/oauth/google", get(start_google_oauth))
        .route("/api/auth/callback", get(oauth_callback))
        .route("/api/profile", get(get_profile))
        .route(
            "/api/ingredients",
            get(list_ingredients).post(add_ingredient),
        )
        .route("/api/ingredients/:id", delete(remove_ingredient))
        .route("/api/favorites", get(list_favorites).post(add_favorite))
        .route("/api/favorites/:recipe_id", delete(remove_favorite))
        .route("/api/history", get(list_history).post(record_cooked))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
