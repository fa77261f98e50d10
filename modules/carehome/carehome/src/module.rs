use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use sea_orm_migration::MigratorTrait;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::api::rest::cookies::CookiePolicy;
use crate::api::rest::{RouterSettings, router};
use crate::config::CarehomeConfig;
use crate::domain::ports::SystemClock;
use crate::domain::service::{AppServices, Ports, Repositories, ServiceConfig};
use crate::infra::mail;
use crate::infra::memory::{InMemoryCodeStore, InMemorySessionStore};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{
    DbAccessor, SeaOrmAssessmentsRepository, SeaOrmAttendanceRepository,
    SeaOrmConsultationsRepository, SeaOrmContractsRepository, SeaOrmCredentialsRepository,
    SeaOrmEmployeesRepository, SeaOrmResidentsRepository,
};

/// The assembled module: services, router settings and the shared pool.
pub struct CarehomeModule {
    db: Arc<DbAccessor>,
    services: AppServices,
    settings: RouterSettings,
    sweep_interval: Duration,
}

impl CarehomeModule {
    /// Wires the production collaborators. The database is not contacted
    /// here unless `provision_schema` is set.
    pub async fn init(config: &CarehomeConfig) -> anyhow::Result<Self> {
        info!(environment = ?config.environment, "Initializing carehome module");

        let service_config = service_config(config);
        let db = Arc::new(DbAccessor::new(&config.database));
        let mailer = mail::from_config(&config.smtp, service_config.code_ttl)
            .context("failed to set up code delivery")?;

        let ports = Ports {
            clock: Arc::new(SystemClock),
            mailer,
            codes: Arc::new(InMemoryCodeStore::new()),
            sessions: Arc::new(InMemorySessionStore::new()),
        };
        let module = Self::with_parts(db, ports, config);

        if config.database.provision_schema && !module.db.is_build_phase() {
            module.migrate().await?;
        }

        info!("Carehome module initialized");
        Ok(module)
    }

    /// Assembles the module from explicit collaborators.
    #[must_use]
    pub fn with_parts(db: Arc<DbAccessor>, ports: Ports, config: &CarehomeConfig) -> Self {
        let service_config = service_config(config);
        let repos = Repositories {
            employees: Arc::new(SeaOrmEmployeesRepository::new(Arc::clone(&db))),
            residents: Arc::new(SeaOrmResidentsRepository::new(Arc::clone(&db))),
            attendance: Arc::new(SeaOrmAttendanceRepository::new(Arc::clone(&db))),
            contracts: Arc::new(SeaOrmContractsRepository::new(Arc::clone(&db))),
            consultations: Arc::new(SeaOrmConsultationsRepository::new(Arc::clone(&db))),
            assessments: Arc::new(SeaOrmAssessmentsRepository::new(Arc::clone(&db))),
            credentials: Arc::new(SeaOrmCredentialsRepository::new(Arc::clone(&db))),
        };

        let settings = RouterSettings {
            cookies: CookiePolicy {
                max_age_secs: service_config.session_ttl.num_seconds(),
                secure: config.environment.is_production(),
            },
            enforce_sessions: config.auth.enforce_sessions,
        };

        Self {
            db,
            services: AppServices::new(repos, ports, &service_config),
            settings,
            sweep_interval: Duration::from_secs(config.password_reset.sweep_interval_secs.max(1)),
        }
    }

    /// Creates the record tables if they are missing.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        info!("Provisioning carehome tables");
        let conn = self.db.conn().await.context("database not reachable")?;
        Migrator::up(&conn, None).await?;
        info!("Carehome tables provisioned");
        Ok(())
    }

    /// Connects and pings the database; a no-op in build phase.
    pub async fn check(&self) -> anyhow::Result<()> {
        if self.db.is_build_phase() {
            info!("Build phase: skipping database probe");
            return Ok(());
        }
        let conn = self.db.conn().await.context("database not reachable")?;
        conn.ping().await.context("database ping failed")?;
        info!("Database reachable");
        Ok(())
    }

    #[must_use]
    pub fn router(&self) -> Router {
        router(self.services.clone(), self.settings)
    }

    /// Periodically drops expired verification codes and sessions until
    /// `cancel` fires.
    pub fn spawn_sweeper(&self, cancel: CancellationToken) -> JoinHandle<()> {
        let services = self.services.clone();
        let period = self.sweep_interval;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    () = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        let codes = services.password_reset.purge_expired().await;
                        let sessions = services.auth.purge_expired().await;
                        if codes + sessions > 0 {
                            debug!(codes, sessions, "Swept expired entries");
                        }
                    }
                }
            }
            debug!("Sweeper stopped");
        })
    }
}

fn service_config(config: &CarehomeConfig) -> ServiceConfig {
    ServiceConfig {
        session_ttl: chrono::Duration::hours(config.auth.session_ttl_hours),
        code_ttl: chrono::Duration::seconds(config.password_reset.code_ttl_secs),
    }
}
