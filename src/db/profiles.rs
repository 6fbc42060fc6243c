use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{NewProfile, Profile};

pub async fn find(pool: &PgPool, user_id: Uuid) -> Result<Option<Profile>> {
    let profile = sqlx::query_as::<_, Profile>(
        "SELECT id, username, avatar_url, created_at FROM profiles WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(profile)
}

/// Insert the profile unless one already exists; returns whether a row was created
pub async fn ensure(pool: &PgPool, profile: &NewProfile) -> Result<bool> {
    let result = sqlx::query(
        "INSERT INTO profiles (id, username, avatar_url) VALUES ($1, $2, $3) \
         ON CONFLICT (id) DO NOTHING",
    )
    .bind(profile.id)
    .bind(&profile.username)
    .bind(&profile.avatar_url)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
