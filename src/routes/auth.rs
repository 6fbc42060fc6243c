use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{AuthUser, Authenticated, Session, SignUpOutcome};
use crate::error::{AppError, Result};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SignUpResponse {
    pub user: AuthUser,
    /// Absent while the email address awaits confirmation
    pub session: Option<Session>,
    #[serde(rename = "confirmationRequired")]
    pub confirmation_required: bool,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: AuthUser,
}

#[derive(Debug, Serialize)]
pub struct SignOutResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct OAuthStartResponse {
    pub url: String,
}

/// Parameters the provider appends to the OAuth redirect
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackParams {
    pub flow: Option<Uuid>,
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

fn require_credentials(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::InvalidInput(
            "Email and password are required".to_string(),
        ));
    }
    Ok(())
}

/// Password sign-in
///
/// POST /api/auth/signin
pub async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInRequest>,
) -> Result<Json<Session>> {
    require_credentials(&payload.email, &payload.password)?;
    let session = state
        .auth
        .sign_in(payload.email.trim(), &payload.password)
        .await?;
    Ok(Json(session))
}

/// Password sign-up
///
/// POST /api/auth/signup
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpRequest>,
) -> Result<Json<SignUpResponse>> {
    require_credentials(&payload.email, &payload.password)?;
    let outcome = state
        .auth
        .sign_up(
            payload.email.trim(),
            &payload.password,
            payload.username.as_deref(),
        )
        .await?;

    let response = match outcome {
        SignUpOutcome::Session(session) => SignUpResponse {
            user: session.user.clone(),
            session: Some(session),
            confirmation_required: false,
        },
        SignUpOutcome::PendingConfirmation(user) => SignUpResponse {
            user,
            session: None,
            confirmation_required: true,
        },
    };
    Ok(Json(response))
}

/// POST /api/auth/signout
pub async fn sign_out(
    State(state): State<AppState>,
    auth: Authenticated,
) -> Result<Json<SignOutResponse>> {
    state.auth.sign_out(&auth.user, &auth.access_token).await?;
    Ok(Json(SignOutResponse { success: true }))
}

/// Exchange a refresh token for a new session
///
/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<Session>> {
    if payload.refresh_token.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "refresh_token is required".to_string(),
        ));
    }
    Ok(Json(state.auth.refresh(payload.refresh_token.trim()).await?))
}

/// Current user for the presented access token
///
/// GET /api/auth/session
pub async fn session(auth: Authenticated) -> Json<SessionResponse> {
    Json(SessionResponse { user: auth.user })
}

/// Begin Google sign-in; the client navigates to the returned URL
///
/// GET /api/auth/oauth/google
pub async fn start_google_oauth(State(state): State<AppState>) -> Result<Json<OAuthStartResponse>> {
    let url = state.auth.start_oauth("google")?;
    Ok(Json(OAuthStartResponse { url }))
}

/// Provider redirect target; completes the PKCE exchange
///
/// GET /api/auth/callback?flow=<id>&code=<auth code>
pub async fn oauth_callback(
    State(state): State<AppState>,
    Query(params): Query<OAuthCallbackParams>,
) -> Result<Json<Session>> {
    if let Some(error) = params.error {
        let message = params.error_description.unwrap_or(error);
        tracing::warn!("OAuth sign-in failed at provider: {}", message);
        return Err(AppError::AuthRejected {
            status: 400,
            message,
        });
    }

    let flow = params.flow.ok_or(AppError::OAuthFlowNotFound)?;
    let code = params
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::InvalidInput("Missing authorization code".to_string()))?;

    state
        .auth
        .complete_oauth(flow, &code)
        .await?
        .map(Json)
        .ok_or(AppError::OAuthFlowNotFound)
}
