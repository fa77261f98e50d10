//! Router assembly.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router, middleware};
use tower_http::trace::TraceLayer;

use super::cookies::CookiePolicy;
use super::extract::require_session;
use super::handlers::{
    self, assessments, attendance, auth, consultations, contracts, employees, password_reset,
    residents,
};
use crate::domain::service::AppServices;

#[derive(Debug, Clone, Copy)]
pub struct RouterSettings {
    pub cookies: CookiePolicy,
    /// Put record routes behind the session check.
    pub enforce_sessions: bool,
}

pub fn router(services: AppServices, settings: RouterSettings) -> Router {
    let mut records = Router::new()
        .route(
            "/api/employees",
            get(employees::list)
                .post(employees::create)
                .put(employees::update)
                .delete(employees::delete),
        )
        .route("/api/employees/detail", get(employees::detail))
        .route(
            "/api/residents",
            get(residents::list)
                .post(residents::create)
                .put(residents::update)
                .delete(residents::delete),
        )
        .route("/api/residents/detail", get(residents::detail))
        .route("/api/f10010/search", get(residents::search))
        .route(
            "/api/attendance",
            get(attendance::list)
                .post(attendance::upsert)
                .delete(attendance::delete),
        )
        .route(
            "/api/contracts",
            get(contracts::list)
                .post(contracts::create)
                .put(contracts::update)
                .delete(contracts::delete),
        )
        .route(
            "/api/consultations",
            get(consultations::list)
                .post(consultations::create)
                .put(consultations::update)
                .delete(consultations::delete),
        )
        .route(
            "/api/assessments",
            get(assessments::list)
                .post(assessments::upsert)
                .delete(assessments::delete),
        );

    if settings.enforce_sessions {
        records = records.route_layer(middleware::from_fn_with_state(
            Arc::clone(&services.auth),
            require_session,
        ));
    }

    let auth_routes = Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route(
            "/api/auth/forgot-password/send",
            post(password_reset::send_code),
        )
        .route(
            "/api/auth/forgot-password/verify",
            post(password_reset::verify_code),
        );

    Router::new()
        .route("/health", get(handlers::health))
        .merge(records)
        .merge(auth_routes)
        .layer(Extension(settings.cookies))
        .layer(Extension(services))
        .layer(TraceLayer::new_for_http())
}
