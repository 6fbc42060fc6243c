use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::DeleteResponse;
use crate::auth::Authenticated;
use crate::db;
use crate::error::Result;
use crate::models::{NewUserIngredient, UserIngredient};
use crate::AppState;

/// GET /api/ingredients
pub async fn list_ingredients(
    State(state): State<AppState>,
    auth: Authenticated,
) -> Result<Json<Vec<UserIngredient>>> {
    let rows = db::ingredients::list(state.db()?, auth.user.id).await?;
    Ok(Json(rows))
}

/// Add an ingredient to the caller's pantry
///
/// The name is trimmed; blank names are rejected and the same name twice is
/// a conflict.
///
/// POST /api/ingredients
pub async fn add_ingredient(
    State(state): State<AppState>,
    auth: Authenticated,
    Json(payload): Json<NewUserIngredient>,
) -> Result<(StatusCode, Json<UserIngredient>)> {
    let ingredient = payload.normalized()?;
    let row = db::ingredients::insert(state.db()?, auth.user.id, &ingredient).await?;

    tracing::info!(
        "User {} added ingredient {}",
        auth.user.id,
        row.ingredient_name
    );
    Ok((StatusCode::CREATED, Json(row)))
}

/// DELETE /api/ingredients/:id
pub async fn remove_ingredient(
    State(state): State<AppState>,
    auth: Authenticated,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>> {
    db::ingredients::delete(state.db()?, auth.user.id, id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
