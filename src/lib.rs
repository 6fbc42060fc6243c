//! QuickRecipes Server Library
//!
//! Recipe search by owned ingredients, backed by the Spoonacular API with a
//! static fallback, plus session plumbing and per-user rows on a hosted
//! auth/database provider.

pub mod auth;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod recipes;
pub mod routes;

pub use config::Config;
pub use error::{AppError, Result};
pub use routes::build_router;

use sqlx::PgPool;

use auth::{AuthEvents, AuthService};
use recipes::RecipeClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: Option<PgPool>,
    pub recipes: RecipeClient,
    pub auth: AuthService,
}

impl AppState {
    /// Create a new AppState; `db` is `None` when no database is configured
    pub fn new(config: Config, db: Option<PgPool>) -> std::result::Result<Self, reqwest::Error> {
        let recipes = RecipeClient::new(&config)?;
        let auth = AuthService::new(&config, AuthEvents::default())?;
        Ok(Self {
            config,
            db,
            recipes,
            auth,
        })
    }

    /// Database pool, or an error for routes that need one
    pub fn db(&self) -> Result<&PgPool> {
        self.db.as_ref().ok_or(AppError::DatabaseNotConfigured)
    }
}
