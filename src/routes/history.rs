use axum::{extract::State, http::StatusCode, Json};

use crate::auth::Authenticated;
use crate::db;
use crate::error::{AppError, Result};
use crate::models::{NewRecipeHistory, RecipeHistory};
use crate::AppState;

/// Recipes the caller has cooked, newest first
///
/// GET /api/history
pub async fn list_history(
    State(state): State<AppState>,
    auth: Authenticated,
) -> Result<Json<Vec<RecipeHistory>>> {
    let rows = db::history::list(state.db()?, auth.user.id).await?;
    Ok(Json(rows))
}

/// POST /api/history
pub async fn record_cooked(
    State(state): State<AppState>,
    auth: Authenticated,
    Json(payload): Json<NewRecipeHistory>,
) -> Result<(StatusCode, Json<RecipeHistory>)> {
    if payload.recipe_id.trim().is_empty() {
        return Err(AppError::InvalidInput("recipe_id is required".to_string()));
    }

    let row = db::history::record(state.db()?, auth.user.id, &payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}
