use sqlx::PgPool;
use uuid::Uuid;

use super::is_unique_violation;
use crate::error::{AppError, Result};
use crate::models::{NewUserIngredient, UserIngredient};

pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<UserIngredient>> {
    let rows = sqlx::query_as::<_, UserIngredient>(
        "SELECT id, user_id, ingredient_name, quantity, expiry_date, created_at \
         FROM user_ingredients WHERE user_id = $1 ORDER BY created_at",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Names only, in pantry order
pub async fn names(pool: &PgPool, user_id: Uuid) -> Result<Vec<String>> {
    let names = sqlx::query_scalar::<_, String>(
        "SELECT ingredient_name FROM user_ingredients WHERE user_id = $1 ORDER BY created_at",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(names)
}

/// Add a pantry entry; the same name twice for one user is a conflict
pub async fn insert(
    pool: &PgPool,
    user_id: Uuid,
    ingredient: &NewUserIngredient,
) -> Result<UserIngredient> {
    sqlx::query_as::<_, UserIngredient>(
        "INSERT INTO user_ingredients (id, user_id, ingredient_name, quantity, expiry_date) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, user_id, ingredient_name, quantity, expiry_date, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&ingredient.ingredient_name)
    .bind(&ingredient.quantity)
    .bind(ingredient.expiry_date)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::IngredientAlreadyExists
        } else {
            e.into()
        }
    })
}

pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<()> {
    let result = sqlx::query("DELETE FROM user_ingredients WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::IngredientNotFound);
    }
    Ok(())
}
