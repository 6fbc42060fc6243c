use axum::{extract::State, Json};

use crate::auth::Authenticated;
use crate::db::profiles;
use crate::error::{AppError, Result};
use crate::models::{NewProfile, Profile};
use crate::AppState;

/// Profile of the signed-in user
///
/// Users who signed in before the provisioner saw them get their profile
/// created here.
///
/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: Authenticated,
) -> Result<Json<Profile>> {
    let pool = state.db()?;

    if let Some(profile) = profiles::find(pool, auth.user.id).await? {
        return Ok(Json(profile));
    }

    profiles::ensure(pool, &NewProfile::for_user(&auth.user)).await?;
    tracing::info!("Created missing profile for user {}", auth.user.id);

    profiles::find(pool, auth.user.id)
        .await?
        .map(Json)
        .ok_or(AppError::ProfileNotFound)
}
