use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use super::{AuthError, AuthUser};
use crate::error::AppError;
use crate::AppState;

/// Caller identity resolved from `Authorization: Bearer <token>`
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub user: AuthUser,
    pub access_token: String,
}

#[async_trait]
impl FromRequestParts<AppState> for Authenticated {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        if !state.auth.is_configured() {
            return Err(AppError::AuthNotConfigured);
        }

        let token = bearer_token(&parts.headers).ok_or(AppError::Unauthorized)?;

        let user = state.auth.get_user(token).await.map_err(|e| match e {
            AuthError::Rejected {
                status: 401 | 403, ..
            } => AppError::Unauthorized,
            other => other.into(),
        })?;

        Ok(Self {
            user,
            access_token: token.to_string(),
        })
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Some("abc.def"));
        assert_eq!(bearer_token(&headers("bearer  xyz ")), Some("xyz"));
        assert_eq!(bearer_token(&headers("Basic abc")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
