use sqlx::PgPool;
use uuid::Uuid;

use super::is_unique_violation;
use crate::error::{AppError, Result};
use crate::models::{FavoriteRecipe, NewFavoriteRecipe};

pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<FavoriteRecipe>> {
    let rows = sqlx::query_as::<_, FavoriteRecipe>(
        "SELECT id, user_id, recipe_id, recipe_title, recipe_image, created_at \
         FROM favorite_recipes WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn insert(
    pool: &PgPool,
    user_id: Uuid,
    favorite: &NewFavoriteRecipe,
) -> Result<FavoriteRecipe> {
    sqlx::query_as::<_, FavoriteRecipe>(
        "INSERT INTO favorite_recipes (id, user_id, recipe_id, recipe_title, recipe_image) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, user_id, recipe_id, recipe_title, recipe_image, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&favorite.recipe_id)
    .bind(&favorite.recipe_title)
    .bind(&favorite.recipe_image)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::FavoriteAlreadyExists
        } else {
            e.into()
        }
    })
}

/// Remove a favorite by the recipe it points at
pub async fn delete(pool: &PgPool, user_id: Uuid, recipe_id: &str) -> Result<()> {
    let result =
        sqlx::query("DELETE FROM favorite_recipes WHERE user_id = $1 AND recipe_id = $2")
            .bind(user_id)
            .bind(recipe_id)
            .execute(pool)
            .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::FavoriteNotFound);
    }
    Ok(())
}
