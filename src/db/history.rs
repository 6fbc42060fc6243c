use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{NewRecipeHistory, RecipeHistory};

/// Most recent first
pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<RecipeHistory>> {
    let rows = sqlx::query_as::<_, RecipeHistory>(
        "SELECT id, user_id, recipe_id, recipe_title, cooked_at \
         FROM recipe_history WHERE user_id = $1 ORDER BY cooked_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn record(
    pool: &PgPool,
    user_id: Uuid,
    entry: &NewRecipeHistory,
) -> Result<RecipeHistory> {
    let row = sqlx::query_as::<_, RecipeHistory>(
        "INSERT INTO recipe_history (id, user_id, recipe_id, recipe_title, cooked_at) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, user_id, recipe_id, recipe_title, cooked_at",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&entry.recipe_id)
    .bind(&entry.recipe_title)
    .bind(entry.cooked_at.unwrap_or_else(Utc::now))
    .fetch_one(pool)
    .await?;
    Ok(row)
}
