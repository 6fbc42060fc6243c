use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quickrecipes_server::{auth::spawn_profile_provisioner, build_router, db, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quickrecipes_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting QuickRecipes Server...");

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "Environment: {}, Server: {}",
        config.environment,
        config.server_address()
    );

    // Database is optional; without it user data routes answer 503
    let pool = match &config.database_url {
        Some(url) => {
            let pool = db::create_pool(url).await?;
            if config.run_migrations {
                db::run_migrations(&pool).await?;
            }
            Some(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, user data routes are disabled");
            None
        }
    };

    let state = AppState::new(config.clone(), pool.clone())?;

    if let Some(pool) = pool {
        spawn_profile_provisioner(state.auth.events(), pool);
    }

    let app = build_router(state);

    // Start server
    let addr: SocketAddr = config.server_address().parse()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
