use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;
use crate::constants::{ERR_AUTH_NOT_CONFIGURED, ERR_AUTH_UNAVAILABLE};

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database not configured")]
    DatabaseNotConfigured,

    #[error("{}", ERR_AUTH_NOT_CONFIGURED)]
    AuthNotConfigured,

    #[error("{}", ERR_AUTH_UNAVAILABLE)]
    AuthUnavailable,

    #[error("{message}")]
    AuthRejected { status: u16, message: String },

    #[error("Missing or invalid access token")]
    Unauthorized,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Recipe not found")]
    RecipeNotFound,

    #[error("Ingredient not found")]
    IngredientNotFound,

    #[error("Ingredient already in pantry")]
    IngredientAlreadyExists,

    #[error("Favorite not found")]
    FavoriteNotFound,

    #[error("Recipe already in favorites")]
    FavoriteAlreadyExists,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Unknown or expired sign-in flow")]
    OAuthFlowNotFound,
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotConfigured => AppError::AuthNotConfigured,
            AuthError::Unavailable(e) => {
                tracing::error!("Auth provider unreachable: {:?}", e);
                AppError::AuthUnavailable
            }
            AuthError::Rejected { status, message } if status >= 500 => {
                tracing::error!("Auth provider failed ({}): {}", status, message);
                AppError::AuthUnavailable
            }
            AuthError::Rejected { status, message } => AppError::AuthRejected { status, message },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::DatabaseNotConfigured
            | AppError::AuthNotConfigured
            | AppError::AuthUnavailable => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            AppError::AuthRejected { status, message } => (
                StatusCode::from_u16(status)
                    .ok()
                    .filter(|s| s.is_client_error())
                    .unwrap_or(StatusCode::BAD_REQUEST),
                message,
            ),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::RecipeNotFound
            | AppError::IngredientNotFound
            | AppError::FavoriteNotFound
            | AppError::ProfileNotFound
            | AppError::OAuthFlowNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::IngredientAlreadyExists | AppError::FavoriteAlreadyExists => {
                (StatusCode::CONFLICT, self.to_string())
            }
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::DatabaseNotConfigured, StatusCode::SERVICE_UNAVAILABLE),
            (AppError::AuthNotConfigured, StatusCode::SERVICE_UNAVAILABLE),
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
            (AppError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (AppError::RecipeNotFound, StatusCode::NOT_FOUND),
            (AppError::FavoriteAlreadyExists, StatusCode::CONFLICT),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_auth_rejected_keeps_client_status() {
        let err = AppError::AuthRejected {
            status: 422,
            message: "User already registered".into(),
        };
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);

        // Server-side failures from the provider never leak as 5xx rejections
        let err = AppError::AuthRejected {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_provider_server_error_is_unavailable() {
        let err: AppError = AuthError::Rejected {
            status: 502,
            message: "bad gateway".into(),
        }
        .into();
        assert!(matches!(err, AppError::AuthUnavailable));

        let err: AppError = AuthError::Rejected {
            status: 400,
            message: "Invalid login credentials".into(),
        }
        .into();
        assert!(matches!(err, AppError::AuthRejected { status: 400, .. }));
    }

    #[test]
    fn test_demo_mode_message() {
        assert_eq!(
            AppError::AuthNotConfigured.to_string(),
            "Authentication not configured. Running in demo mode."
        );
    }
}
