use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recipe the user reported cooking
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RecipeHistory {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_id: String,
    pub recipe_title: String,
    pub cooked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewRecipeHistory {
    pub recipe_id: String,
    pub recipe_title: String,
    /// Defaults to the time of the request
    pub cooked_at: Option<DateTime<Utc>>,
}
