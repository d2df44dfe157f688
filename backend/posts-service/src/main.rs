use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use db_pool::{create_pool, DbConfig};
use posts_service::config::{Config, StorageBackend};
use posts_service::db::{InMemoryPostStore, PgPostStore, PostStore};
use posts_service::middleware::MetricsMiddleware;
use posts_service::{handlers, routes, AppState};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

async fn build_store(config: &Config) -> io::Result<Arc<dyn PostStore>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            Ok(Arc::new(InMemoryPostStore::new()))
        }
        StorageBackend::Postgres => {
            let database_url = config.storage.database_url.as_deref().ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "DATABASE_URL is not set")
            })?;

            let db_cfg = DbConfig::new(
                "posts-service",
                database_url,
                config.storage.max_connections,
            );
            db_cfg.log_config();

            let pool = create_pool(db_cfg).await.map_err(|e| {
                io::Error::new(
                    io::ErrorKind::Other,
                    format!("Failed to create database pool: {e}"),
                )
            })?;

            let store = PgPostStore::new(pool);
            store.run_migrations().await.map_err(|e| {
                io::Error::new(
                    io::ErrorKind::Other,
                    format!("Failed to run database migrations: {e}"),
                )
            })?;

            tracing::info!("Connected to PostgreSQL via db-pool crate");
            Ok(Arc::new(store))
        }
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = terminate.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

/// Posts Service
///
/// Serves `/api/posts` (posts and nested comments) plus health, metrics and
/// OpenAPI endpoints. Storage is in-memory by default, PostgreSQL when
/// `STORAGE_BACKEND=postgres`.
#[actix_web::main]
async fn main() -> io::Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting posts-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let store = build_store(&config).await?;
    let state = web::Data::new(AppState::new(store));

    let bind_address = config.bind_address();
    let cors_config = config.cors.clone();
    tracing::info!("Starting HTTP server at {}", bind_address);

    let server = HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in cors_config.origins() {
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(MetricsMiddleware)
            .wrap(cors)
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(routes::configure_operational)
            .configure(routes::configure)
            .default_service(web::to(handlers::route_not_found))
    })
    .bind(&bind_address)?
    .workers(config.app.workers)
    .disable_signals()
    .run();

    let server_handle = server.handle();
    let mut server_task = tokio::spawn(server);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    let result = tokio::select! {
        joined = &mut server_task => {
            joined.map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?
        }
        _ = &mut shutdown => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
            server_task
                .await
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?
        }
    };

    tracing::info!("posts-service shutting down");
    result
}
