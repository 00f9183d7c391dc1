//! r2d2 connection pool for Diesel SQLite connections.
//!
//! Wraps `diesel::r2d2` to provide pooled SQLite connections for the
//! persistence layer, plus the run-once embedded migration bootstrap that
//! creates the schema at startup.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },

    /// Failed to apply the embedded schema migrations.
    #[error("failed to run embedded migrations: {message}")]
    Migration { message: String },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }

    /// Create a migration error with the given message.
    pub fn migration(message: impl Into<String>) -> Self {
        Self::Migration {
            message: message.into(),
        }
    }
}

/// Configuration for the database connection pool.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Create a new configuration with the given database path or URL.
    ///
    /// Defaults: `max_size` 10 connections, `connection_timeout` 30 seconds.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Override the maximum number of pooled connections.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Override the checkout timeout.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }
}

/// A pooled SQLite connection handed to Diesel queries.
pub type PooledSqliteConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Clonable handle to the SQLite connection pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<ConnectionManager<SqliteConnection>>,
}

impl DbPool {
    /// Build a pool from the given configuration.
    pub fn build(config: &PoolConfig) -> Result<Self, PoolError> {
        let manager = ConnectionManager::<SqliteConnection>::new(config.database_url.clone());
        let inner = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .connection_customizer(Box::new(SqlitePragmas))
            .build(manager)
            .map_err(|error| PoolError::build(error.to_string()))?;
        Ok(Self { inner })
    }

    /// Check out a connection, mapping pool failures to [`PoolError`].
    pub fn get(&self) -> Result<PooledSqliteConnection, PoolError> {
        self.inner
            .get()
            .map_err(|error| PoolError::checkout(error.to_string()))
    }

    /// Apply any pending embedded migrations.
    ///
    /// Run once at startup before the server accepts requests; the runtime
    /// contract assumes the schema already exists.
    pub fn run_migrations(&self) -> Result<(), PoolError> {
        let mut conn = self.get()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map(|versions| versions.len())
            .map_err(|error| PoolError::migration(error.to_string()))?;
        if applied > 0 {
            info!(count = applied, "applied schema migrations");
        }
        Ok(())
    }
}

/// Per-connection pragmas applied on checkout.
///
/// SQLite serialises writers; the busy timeout keeps concurrent requests
/// queueing instead of failing with `SQLITE_BUSY`.
#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000; PRAGMA foreign_keys = ON;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_pool_and_applies_migrations() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let url = dir.path().join("todos.db").to_string_lossy().into_owned();

        let pool = DbPool::build(&PoolConfig::new(url).with_max_size(1)).expect("build pool");
        pool.run_migrations().expect("run migrations");
        // Re-running is a no-op rather than an error.
        pool.run_migrations().expect("migrations are idempotent");
    }

    #[test]
    fn rejects_unusable_database_path() {
        let pool = DbPool::build(
            &PoolConfig::new("/nonexistent-dir/todos.db")
                .with_max_size(1)
                .with_connection_timeout(Duration::from_millis(100)),
        );
        // r2d2 may defer connection establishment to checkout; either stage
        // must report a pool error rather than panic.
        if let Ok(pool) = pool {
            assert!(matches!(pool.get(), Err(PoolError::Checkout { .. })));
        }
    }
}
