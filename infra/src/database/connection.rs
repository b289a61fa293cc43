//! MySQL pool for the account and catalog tables

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{ConnectOptions, MySqlPool};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use mf_shared::DatabaseConfig;

use crate::InfrastructureError;

/// Statements slower than this are logged at warn.
const SLOW_STATEMENT: Duration = Duration::from_secs(1);

/// Shared handle on the MySQL pool backing both repositories.
///
/// ```no_run
/// use mf_shared::DatabaseConfig;
/// use mf_infra::database::DatabasePool;
///
/// async fn open() -> Result<DatabasePool, mf_infra::InfrastructureError> {
///     let pool = DatabasePool::new(DatabaseConfig::new("mysql://myflix:pw@localhost/myflix")).await?;
///     pool.run_migrations().await?;
///     Ok(pool)
/// }
/// ```
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Connect using the sizing and timeouts in `config`.
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let options = MySqlConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, SLOW_STATEMENT);

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_with(options)
            .await
            .map_err(|e| {
                tracing::error!("Could not open the account store: {}", e);
                InfrastructureError::Database(e)
            })?;

        tracing::info!(
            max_connections = config.max_connections,
            "Account store connected"
        );
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Create the `accounts`, `movies` and `account_favorites` tables if absent.
    pub async fn run_migrations(&self) -> Result<(), InfrastructureError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Account store schema is current");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Account store closed");
    }
}
