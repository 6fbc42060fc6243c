use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthUser;

/// Profile row, keyed by the auth provider's user id
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Values for a profile created on first sign-in
#[derive(Debug, Clone, PartialEq)]
pub struct NewProfile {
    pub id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
}

impl NewProfile {
    /// Derive the initial profile from the signed-in identity.
    ///
    /// Username is the local part of the email, or `user` when there is none.
    pub fn for_user(user: &AuthUser) -> Self {
        let username = user
            .email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or("user")
            .to_string();

        let avatar_url = user
            .user_metadata
            .get("avatar_url")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        Self {
            id: user.id,
            username,
            avatar_url,
        }
    }
}
