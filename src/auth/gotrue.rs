use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{AuthError, AuthUser, Session};

/// Outcome of a sign-up request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignUpOutcome {
    /// Email confirmation disabled: the user is signed in right away
    Session(Session),
    /// Email confirmation pending
    PendingConfirmation(AuthUser),
}

/// Error payloads differ between provider endpoints
#[derive(Debug, Default, Deserialize)]
struct ProviderError {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ProviderError {
    fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
    }
}

/// Client for the hosted auth provider (`{project}/auth/v1`)
#[derive(Debug, Clone)]
pub struct GoTrueClient {
    http: reqwest::Client,
    auth_url: String,
    anon_key: String,
}

impl GoTrueClient {
    pub fn new(project_url: &str, anon_key: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(format!("quickrecipes-server/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            http,
            auth_url: format!("{}/auth/v1", project_url.trim_end_matches('/')),
            anon_key: anon_key.to_string(),
        })
    }

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let req = self
            .post("/token")
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }));
        Self::parse(req.send().await?).await
    }

    /// Register a user; `username` defaults to the local part of the email
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: Option<&str>,
    ) -> Result<SignUpOutcome, AuthError> {
        let username = username
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| email.split('@').next().unwrap_or(email));

        let req = self.post("/signup").json(&json!({
            "email": email,
            "password": password,
            "data": { "username": username },
        }));
        Self::parse(req.send().await?).await
    }

    pub async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let resp = self.post("/logout").bearer_auth(access_token).send().await?;
        Self::check(resp).await.map(|_| ())
    }

    /// Resolve an access token to the user it was issued for
    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        let resp = self
            .http
            .get(format!("{}/user", self.auth_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;
        Self::parse(resp).await
    }

    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let req = self
            .post("/token")
            .query(&[("grant_type", "refresh_token")])
            .json(&json!({ "refresh_token": refresh_token }));
        Self::parse(req.send().await?).await
    }

    /// Exchange an OAuth authorization code for a session (PKCE grant)
    pub async fn exchange_code(
        &self,
        auth_code: &str,
        code_verifier: &str,
    ) -> Result<Session, AuthError> {
        let req = self
            .post("/token")
            .query(&[("grant_type", "pkce")])
            .json(&json!({ "auth_code": auth_code, "code_verifier": code_verifier }));
        Self::parse(req.send().await?).await
    }

    /// Provider URL the browser is redirected to for OAuth sign-in
    pub fn authorize_url(
        &self,
        provider: &str,
        redirect_to: &str,
        code_challenge: &str,
    ) -> Result<String, AuthError> {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/authorize", self.auth_url),
            &[
                ("provider", provider),
                ("redirect_to", redirect_to),
                ("code_challenge", code_challenge),
                ("code_challenge_method", "s256"),
            ],
        )
        .map_err(|e| AuthError::Rejected {
            status: 400,
            message: format!("Invalid authorize URL: {e}"),
        })?;
        Ok(url.into())
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.http
            .post(format!("{}{}", self.auth_url, path))
            .header("apikey", &self.anon_key)
    }

    async fn check(resp: Response) -> Result<Response, AuthError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body: ProviderError = resp.json().await.unwrap_or_default();
        let message = body
            .into_message()
            .unwrap_or_else(|| format!("Authentication failed ({status})"));
        tracing::warn!("Auth provider rejected request: {} {}", status, message);

        Err(AuthError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, AuthError> {
        Ok(Self::check(resp).await?.json().await?)
    }
}
