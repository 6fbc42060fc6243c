use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::DeleteResponse;
use crate::auth::Authenticated;
use crate::db;
use crate::error::{AppError, Result};
use crate::models::{FavoriteRecipe, NewFavoriteRecipe};
use crate::AppState;

/// GET /api/favorites
pub async fn list_favorites(
    State(state): State<AppState>,
    auth: Authenticated,
) -> Result<Json<Vec<FavoriteRecipe>>> {
    let rows = db::favorites::list(state.db()?, auth.user.id).await?;
    Ok(Json(rows))
}

/// POST /api/favorites
pub async fn add_favorite(
    State(state): State<AppState>,
    auth: Authenticated,
    Json(payload): Json<NewFavoriteRecipe>,
) -> Result<(StatusCode, Json<FavoriteRecipe>)> {
    if payload.recipe_id.trim().is_empty() || payload.recipe_title.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "recipe_id and recipe_title are required".to_string(),
        ));
    }

    let row = db::favorites::insert(state.db()?, auth.user.id, &payload).await?;
    tracing::info!("User {} favorited recipe {}", auth.user.id, row.recipe_id);
    Ok((StatusCode::CREATED, Json(row)))
}

/// DELETE /api/favorites/:recipe_id
pub async fn remove_favorite(
    State(state): State<AppState>,
    auth: Authenticated,
    Path(recipe_id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    db::favorites::delete(state.db()?, auth.user.id, &recipe_id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
