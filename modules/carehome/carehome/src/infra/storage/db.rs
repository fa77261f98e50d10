//! Lazily connected, shared database pool.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::{DatabaseConfig, DbEngine};
use crate::domain::error::DomainError;

/// Hands out the process-wide connection pool.
///
/// The pool is created on first use and memoized. A connection-level
/// failure clears it so the next request reconnects. In build phase no
/// connection is ever attempted.
pub struct DbAccessor {
    url: String,
    engine: DbEngine,
    max_connections: u32,
    connect_timeout: Duration,
    build_phase: bool,
    pool: Mutex<Option<DatabaseConnection>>,
    /// Set when a broken pool could not be dropped right away.
    stale: AtomicBool,
}

impl DbAccessor {
    #[must_use]
    pub fn new(cfg: &DatabaseConfig) -> Self {
        Self {
            url: cfg.connection_url(),
            engine: cfg.engine,
            max_connections: cfg.max_connections,
            connect_timeout: cfg.connect_timeout(),
            build_phase: cfg.build_phase,
            pool: Mutex::new(None),
            stale: AtomicBool::new(false),
        }
    }

    /// Wraps an already open connection (tests, embedding).
    #[must_use]
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self {
            url: String::new(),
            engine: DbEngine::Sqlite,
            max_connections: 1,
            connect_timeout: Duration::from_secs(1),
            build_phase: false,
            pool: Mutex::new(Some(conn)),
            stale: AtomicBool::new(false),
        }
    }

    pub async fn conn(&self) -> Result<DatabaseConnection, DomainError> {
        if self.build_phase {
            return Err(DomainError::Unavailable);
        }

        let mut pool = self.pool.lock().await;
        if self.stale.swap(false, Ordering::AcqRel) && pool.take().is_some() {
            debug!("Discarding broken database pool");
        }
        if let Some(conn) = pool.as_ref() {
            return Ok(conn.clone());
        }

        let conn = Database::connect(self.options()).await.map_err(|e| {
            warn!(engine = ?self.engine, error = %e, "Database connection failed");
            DomainError::Unavailable
        })?;
        info!(engine = ?self.engine, "Database pool created");
        *pool = Some(conn.clone());
        Ok(conn)
    }

    /// Converts a query error, dropping the pool when the connection broke.
    pub fn fail(&self, err: DbErr) -> DomainError {
        let err = DomainError::Database(err);
        if err.is_connection_failure() {
            match self.pool.try_lock() {
                Ok(mut pool) => {
                    debug!("Discarding broken database pool");
                    pool.take();
                }
                // Contended: the next `conn()` drops it.
                Err(_) => self.stale.store(true, Ordering::Release),
            }
        }
        err
    }

    #[must_use]
    pub fn is_build_phase(&self) -> bool {
        self.build_phase
    }

    fn options(&self) -> ConnectOptions {
        let mut opts = ConnectOptions::new(self.url.clone());
        // Every in-memory SQLite connection is its own database
        let max = if self.url.contains(":memory:") {
            1
        } else {
            self.max_connections
        };
        opts.max_connections(max)
            .min_connections(if max == 1 { 1 } else { 0 })
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.connect_timeout)
            .sqlx_logging(false);
        opts
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[tokio::test]
    async fn build_phase_never_connects() {
        let db = DbAccessor::new(&DatabaseConfig {
            build_phase: true,
            ..DatabaseConfig::default()
        });

        assert!(db.is_build_phase());
        assert!(matches!(db.conn().await, Err(DomainError::Unavailable)));
    }

    #[tokio::test]
    async fn unreachable_server_reports_unavailable() {
        let db = DbAccessor::new(&DatabaseConfig {
            engine: DbEngine::Sqlite,
            database: "/nonexistent-dir/for/sure/care.db".to_owned(),
            connect_timeout_secs: 1,
            ..DatabaseConfig::default()
        });

        assert!(matches!(db.conn().await, Err(DomainError::Unavailable)));
    }

    #[tokio::test]
    async fn memory_pool_is_memoized() {
        let db = DbAccessor::new(&DatabaseConfig {
            engine: DbEngine::Sqlite,
            database: ":memory:".to_owned(),
            ..DatabaseConfig::default()
        });

        db.conn().await.unwrap();
        assert!(db.pool.lock().await.is_some());

        let err = db.fail(DbErr::Conn(sea_orm::RuntimeErr::Internal("reset".to_owned())));
        assert!(err.is_connection_failure());
        assert!(db.pool.lock().await.is_none());
    }

    #[tokio::test]
    async fn contended_failure_drops_pool_on_next_acquire() {
        let db = DbAccessor::new(&DatabaseConfig {
            engine: DbEngine::Sqlite,
            database: ":memory:".to_owned(),
            ..DatabaseConfig::default()
        });
        db.conn().await.unwrap();

        {
            let held = db.pool.lock().await;
            let _ = db.fail(DbErr::Conn(sea_orm::RuntimeErr::Internal("reset".to_owned())));
            assert!(held.is_some());
        }
        assert!(db.stale.load(Ordering::Acquire));
        assert!(db.pool.lock().await.is_some());

        db.conn().await.unwrap();
        assert!(!db.stale.load(Ordering::Acquire));
        assert!(db.pool.lock().await.is_some());
    }
}
