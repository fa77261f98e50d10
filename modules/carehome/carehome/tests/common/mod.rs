#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use carehome::CarehomeModule;
use carehome::config::CarehomeConfig;
use carehome::domain::error::DomainError;
use carehome::domain::ports::{Clock, CodeMailer};
use carehome::domain::service::Ports;
use carehome::infra::memory::{InMemoryCodeStore, InMemorySessionStore};
use carehome::infra::storage::DbAccessor;
use carehome::infra::storage::entity::credential;
use carehome::infra::storage::migrations::Migrator;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use tower::ServiceExt;

pub const ANCD: &str = "A001";
pub const UID: &str = "nurse1";
pub const PASSWORD: &str = "s3cret!";
pub const EMAIL: &str = "Nurse1@Example.org";

/// Clock that only moves when told to.
pub struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
    pub fn advance(&self, by: Duration) {
        let mut now = self.0.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// Keeps every delivered code instead of mailing it.
#[derive(Default)]
pub struct CapturingMailer {
    sent: Mutex<Vec<(String, String)>>,
}

impl CapturingMailer {
    pub fn last_code(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, code)| code.clone())
    }

    pub fn last_recipient(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(to, _)| to.clone())
    }
}

#[async_trait]
impl CodeMailer for CapturingMailer {
    async fn send_code(&self, to: &str, code: &str) -> Result<(), DomainError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_owned(), code.to_owned()));
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub conn: DatabaseConnection,
    pub clock: Arc<ManualClock>,
    pub mailer: Arc<CapturingMailer>,
}

pub struct Reply {
    pub status: StatusCode,
    pub cookies: Vec<String>,
    pub body: Value,
}

impl Reply {
    pub fn message(&self) -> &str {
        self.body["message"]
            .as_str()
            .or_else(|| self.body["error"].as_str())
            .unwrap_or_default()
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_with(CarehomeConfig::default()).await
}

pub async fn spawn_with(config: CarehomeConfig) -> TestApp {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let conn = Database::connect(opts).await.expect("in-memory sqlite");
    Migrator::up(&conn, None).await.expect("migrations");
    seed_account(&conn).await;

    let clock = Arc::new(ManualClock(Mutex::new(Utc::now())));
    let mailer = Arc::new(CapturingMailer::default());
    let ports = Ports {
        clock: clock.clone(),
        mailer: mailer.clone(),
        codes: Arc::new(InMemoryCodeStore::new()),
        sessions: Arc::new(InMemorySessionStore::new()),
    };

    let db = Arc::new(DbAccessor::from_connection(conn.clone()));
    let module = CarehomeModule::with_parts(db, ports, &config);

    TestApp {
        router: module.router(),
        conn,
        clock,
        mailer,
    }
}

async fn seed_account(conn: &DatabaseConnection) {
    credential::ActiveModel {
        ancd: Set(ANCD.to_owned()),
        uid: Set(UID.to_owned()),
        pwd: Set(PASSWORD.to_owned()),
        usrnm: Set(Some("김간호".to_owned())),
        empno: Set(Some("E01".to_owned())),
        email: Set(Some(EMAIL.to_owned())),
        usrlvl: Set(Some("1".to_owned())),
    }
    .insert(conn)
    .await
    .expect("seed account");
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> Reply {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        let req = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let cookies = resp
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_owned())
            .collect();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        Reply {
            status,
            cookies,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> Reply {
        self.request(Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> Reply {
        self.request(Method::POST, uri, Some(body), None).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> Reply {
        self.request(Method::PUT, uri, Some(body), None).await
    }

    pub async fn delete(&self, uri: &str) -> Reply {
        self.request(Method::DELETE, uri, None, None).await
    }

    /// Logs in with the seeded account and returns a `Cookie` header value.
    pub async fn login(&self) -> String {
        let reply = self
            .post(
                "/api/auth/login",
                serde_json::json!({"ancd": ANCD, "uid": UID, "password": PASSWORD}),
            )
            .await;
        assert_eq!(reply.status, StatusCode::OK, "{}", reply.body);
        reply
            .cookies
            .iter()
            .map(|c| c.split(';').next().unwrap().to_owned())
            .collect::<Vec<_>>()
            .join("; ")
    }
}
