use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recipe bookmarked by a user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FavoriteRecipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_id: String,
    pub recipe_title: String,
    pub recipe_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewFavoriteRecipe {
    pub recipe_id: String,
    pub recipe_title: String,
    pub recipe_image: Option<String>,
}
