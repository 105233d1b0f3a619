use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::{info, error, warn};

use gather_api::{build_router, state::AppState};
use gather_infrastructure::{create_pool, run_migrations, MemoryStore, Repositories};
use gather_security::SessionTokenService;
use gather_shared::config::{AppConfig, StorageBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry
    let _log_guard = gather_shared::telemetry::init_telemetry(&config.log);

    info!("{} starting ({})...", config.app.name, config.app.env);

    // Storage
    let repositories = match config.storage.backend {
        StorageBackend::Postgres => {
            info!("Connecting to database...");
            let pool = match create_pool(&config.database).await {
                Ok(pool) => pool,
                Err(e) => {
                    error!("Failed to connect to database: {}", e);
                    std::process::exit(1);
                }
            };
            run_migrations(&pool).await?;
            info!("Database connection established.");
            Repositories::postgres(pool)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data is lost on shutdown");
            Repositories::memory(&MemoryStore::new())
        }
    };

    // Create App State
    let service = repositories
        .group_service()
        .with_leader_guard(config.authorization.require_leader_for_mutations);
    let tokens = SessionTokenService::new(&config.auth.session_secret, config.auth.session_expiry);
    let state = AppState::new(service, tokens, config.auth.clone());

    // Build router
    let cors_origin: HeaderValue = config.app.cors_origin.parse()?;
    let app = build_router(state).layer(
        CorsLayer::new()
            .allow_origin(cors_origin)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .allow_credentials(true),
    );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
