//! Session plumbing around the hosted auth provider.
//!
//! The provider owns credentials and tokens. This module forwards
//! sign-in/sign-up/sign-out, drives the OAuth redirect flow, resolves bearer
//! tokens for protected routes and publishes session changes on an event bus.

pub mod events;
pub mod extract;
pub mod flows;
pub mod gotrue;
pub mod pkce;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::Config;

pub use events::{spawn_profile_provisioner, AuthEvent, AuthEvents};
pub use extract::Authenticated;
pub use flows::OAuthFlows;
pub use gotrue::{GoTrueClient, SignUpOutcome};

/// Identity as reported by the auth provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

/// Token set issued by the auth provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    pub refresh_token: String,
    pub user: AuthUser,
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("authentication not configured")]
    NotConfigured,

    #[error("auth provider unreachable: {0}")]
    Unavailable(#[from] reqwest::Error),

    #[error("auth provider rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Auth operations plus the state that outlives a single request
#[derive(Debug, Clone)]
pub struct AuthService {
    client: Option<GoTrueClient>,
    events: AuthEvents,
    flows: OAuthFlows,
    site_url: String,
}

impl AuthService {
    /// Build the service; without provider credentials it runs in demo mode
    pub fn new(config: &Config, events: AuthEvents) -> Result<Self, reqwest::Error> {
        let client = match config.supabase_credentials() {
            Some((url, key)) => Some(GoTrueClient::new(
                url,
                key,
                std::time::Duration::from_secs(config.http_timeout_secs),
            )?),
            None => {
                tracing::warn!("Auth provider not configured, running in demo mode");
                None
            }
        };

        Ok(Self {
            client,
            events,
            flows: OAuthFlows::default(),
            site_url: config.site_url.clone(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn events(&self) -> &AuthEvents {
        &self.events
    }

    fn client(&self) -> Result<&GoTrueClient, AuthError> {
        self.client.as_ref().ok_or(AuthError::NotConfigured)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = self.client()?.sign_in_with_password(email, password).await?;
        tracing::info!("User {} signed in", session.user.id);
        self.events.publish(AuthEvent::SignedIn(session.user.clone()));
        Ok(session)
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: Option<&str>,
    ) -> Result<SignUpOutcome, AuthError> {
        let outcome = self.client()?.sign_up(email, password, username).await?;
        match &outcome {
            SignUpOutcome::Session(session) => {
                tracing::info!("User {} signed up", session.user.id);
                self.events.publish(AuthEvent::SignedIn(session.user.clone()));
            }
            SignUpOutcome::PendingConfirmation(user) => {
                tracing::info!("User {} signed up, confirmation pending", user.id);
            }
        }
        Ok(outcome)
    }

    /// Revoke the session. Provider failures are logged, never surfaced.
    pub async fn sign_out(&self, user: &AuthUser, access_token: &str) -> Result<(), AuthError> {
        if let Err(e) = self.client()?.sign_out(access_token).await {
            tracing::error!("Error signing out: {}", e);
        }
        self.events.publish(AuthEvent::SignedOut(user.id));
        Ok(())
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        self.client()?.refresh_session(refresh_token).await
    }

    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        self.client()?.get_user(access_token).await
    }

    /// Start an OAuth sign-in; returns the provider URL to redirect to
    pub fn start_oauth(&self, provider: &str) -> Result<String, AuthError> {
        let client = self.client()?;
        let (flow_id, pkce) = self.flows.start();
        let redirect_to = format!("{}/api/auth/callback?flow={}", self.site_url, flow_id);
        client.authorize_url(provider, &redirect_to, &pkce.challenge)
    }

    /// Finish an OAuth sign-in. `None` when the flow is unknown or expired.
    pub async fn complete_oauth(
        &self,
        flow_id: Uuid,
        auth_code: &str,
    ) -> Result<Option<Session>, AuthError> {
        let client = self.client()?;
        let Some(verifier) = self.flows.take(flow_id) else {
            return Ok(None);
        };
        let session = client.exchange_code(auth_code, &verifier).await?;
        tracing::info!("User {} signed in via OAuth", session.user.id);
        self.events.publish(AuthEvent::SignedIn(session.user.clone()));
        Ok(Some(session))
    }
}
