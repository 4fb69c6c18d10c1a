//! Database connection pool, migrations, and health check.
//!
//! The pool is the injected storage dependency for the catalog and the
//! claim coordinator; it is opened once at startup and dropped at shutdown.
//! No module-level singleton.

use crate::error::{Error, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

/// Database handle. Owns the connection pool; cheap to clone.
#[derive(Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    /// Connect to Postgres and create a connection pool.
    ///
    /// The acquire timeout bounds how long any operation waits for a
    /// connection; expiry surfaces as a storage error to the caller.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .acquire_timeout(Duration::from_secs(2))
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    /// Run all pending migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Other(format!("migration failed: {e}")))?;
        Ok(())
    }

    /// Simple health check — run a SELECT 1.
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// The underlying pool. Public so test harnesses and the external
    /// inventory loader can seed rows directly.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
