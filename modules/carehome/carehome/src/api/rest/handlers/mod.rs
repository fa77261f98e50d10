//! Route handlers, one module per resource.

use axum::Json;
use serde_json::{Value, json};

pub mod assessments;
pub mod attendance;
pub mod auth;
pub mod consultations;
pub mod contracts;
pub mod employees;
pub mod password_reset;
pub mod residents;

const CREATED: &str = "등록되었습니다";
const UPDATED: &str = "수정되었습니다";
const SAVED: &str = "저장되었습니다";
const DELETED: &str = "삭제되었습니다";

/// GET /health - liveness probe, never touches the database.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
