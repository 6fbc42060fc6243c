use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
///
/// Reports database connectivity and which upstream services are configured.
/// Used by load balancers and monitoring systems.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let db_status = match &state.db {
        None => "not_configured",
        Some(pool) => match sqlx::query("SELECT 1").execute(pool).await {
            Ok(_) => "connected",
            Err(e) => {
                tracing::error!("Database health check failed: {:?}", e);
                "disconnected"
            }
        },
    };

    Json(json!({
        "status": if db_status == "disconnected" { "unhealthy" } else { "healthy" },
        "database": db_status,
        "recipeApi": if state.recipes.is_configured() { "configured" } else { "fallback" },
        "auth": if state.auth.is_configured() { "configured" } else { "demo" },
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
