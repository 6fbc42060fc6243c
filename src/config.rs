use std::env;

use crate::constants::{DEFAULT_SPOONACULAR_BASE_URL, PLACEHOLDER_SUPABASE_URL};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub allowed_origins: Vec<String>,
    pub environment: String,
    /// Public origin of the web app, used to build OAuth redirect targets
    pub site_url: String,
    pub database_url: Option<String>,
    pub run_migrations: bool,
    pub spoonacular_api_key: Option<String>,
    pub spoonacular_base_url: String,
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let site_url = env::var("SITE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let database_url = optional_var("DATABASE_URL");

        let run_migrations = env::var("RUN_MIGRATIONS")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .map_err(|_| "Invalid RUN_MIGRATIONS")?;

        let spoonacular_api_key = optional_var("SPOONACULAR_API_KEY");
        let spoonacular_base_url = env::var("SPOONACULAR_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_SPOONACULAR_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let supabase_url = optional_var("SUPABASE_URL").map(|s| s.trim_end_matches('/').to_string());
        let supabase_anon_key = optional_var("SUPABASE_ANON_KEY");

        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| "Invalid HTTP_TIMEOUT_SECS")?;

        Ok(Config {
            server_host,
            server_port,
            allowed_origins,
            environment,
            site_url,
            database_url,
            run_migrations,
            spoonacular_api_key,
            spoonacular_base_url,
            supabase_url,
            supabase_anon_key,
            http_timeout_secs,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Credentials for the hosted auth provider, if it is really configured.
    ///
    /// The placeholder project URL counts as unconfigured (demo mode).
    pub fn supabase_credentials(&self) -> Option<(&str, &str)> {
        match (&self.supabase_url, &self.supabase_anon_key) {
            (Some(url), Some(key)) if url != PLACEHOLDER_SUPABASE_URL => {
                Some((url.as_str(), key.as_str()))
            }
            _ => None,
        }
    }
}

/// Read an environment variable, treating empty values as unset
fn optional_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
