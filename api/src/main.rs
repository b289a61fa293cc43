use std::fs::OpenOptions;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use mf_api::{create_app, AppState};
use mf_core::repositories::{
    AccountRepository, CatalogRepository, InMemoryAccountRepository, InMemoryCatalogRepository,
};
use mf_core::services::{AccessService, BcryptHasher, CredentialHasher, TokenService, TokenServiceConfig};
use mf_infra::database::{DatabasePool, MySqlAccountRepository, MySqlCatalogRepository};
use mf_infra::seed::{load_catalog, seed_memory_catalog, seed_mysql_catalog};
use mf_shared::{AppConfig, LoggingConfig, StorageBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_logging(&config.logging)?;

    info!(
        "Starting myFlix API Server ({:?}, storage: {:?})",
        config.environment, config.storage.backend
    );
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT secret is the built-in default; set JWT_SECRET");
    }
    if config.cors.allows_any_origin() {
        info!("CORS: allowing any origin");
    } else {
        info!("CORS: allowed origins {:?}", config.cors.allowed_origins);
    }
    info!(
        "Security headers: {}",
        if config.environment.is_production() { "on" } else { "off" }
    );

    let tokens = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
    let hasher: Arc<dyn CredentialHasher> = Arc::new(BcryptHasher::new(config.auth.bcrypt_cost));

    match config.storage.backend {
        StorageBackend::Memory => {
            let accounts = Arc::new(InMemoryAccountRepository::new());
            let catalog = Arc::new(InMemoryCatalogRepository::new());

            if let Some(path) = &config.storage.seed_file {
                let movies = load_catalog(path)?;
                let seeded = seed_memory_catalog(&catalog, movies).await;
                info!("Seeded {} movies from {}", seeded, path.display());
            }

            serve(config, AccessService::new(accounts, catalog, tokens, hasher)).await
        }
        StorageBackend::Mysql => {
            let pool = DatabasePool::new(config.database.clone()).await?;
            if config.database.run_migrations {
                pool.run_migrations().await?;
            }

            let accounts = Arc::new(MySqlAccountRepository::new(pool.pool().clone()));
            let catalog = Arc::new(MySqlCatalogRepository::new(pool.pool().clone()));

            if let Some(path) = &config.storage.seed_file {
                let movies = load_catalog(path)?;
                let seeded = seed_mysql_catalog(&catalog, &movies).await?;
                info!("Seeded {} movies from {}", seeded, path.display());
            }

            let result = serve(config, AccessService::new(accounts, catalog, tokens, hasher)).await;
            pool.close().await;
            result
        }
    }
}

/// Run the HTTP server until shutdown
async fn serve<A, C>(config: AppConfig, access: AccessService<A, C>) -> anyhow::Result<()>
where
    A: AccountRepository + 'static,
    C: CatalogRepository + 'static,
{
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let keep_alive = Duration::from_secs(config.server.keep_alive);
    let app_state = web::Data::new(AppState::new(access));

    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone(), &config))
        .keep_alive(keep_alive);
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    info!("Server stopped");
    Ok(())
}

/// env_logger with `info` as the default filter; `RUST_LOG` wins when set.
/// With an access log file configured, records are appended there instead
/// of stderr.
fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::new().default_filter_or(&config.level));

    if let Some(path) = &config.access_log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
