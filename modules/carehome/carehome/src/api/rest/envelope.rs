//! Response envelope shared by every route.

use axum::Json;
use serde::Serialize;

/// `{ success, data?, count?, message?, error?, details? }`
#[derive(Debug, Serialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl<T> ApiEnvelope<T> {
    fn empty(success: bool) -> Self {
        Self {
            success,
            data: None,
            count: None,
            message: None,
            error: None,
            details: None,
        }
    }
}

impl ApiEnvelope<()> {
    #[must_use]
    pub fn failure(error: String, details: Option<String>) -> Self {
        Self {
            error: Some(error),
            details,
            ..Self::empty(false)
        }
    }
}

pub type JsonEnvelope<T> = Json<ApiEnvelope<T>>;

pub fn ok<T>(data: T) -> JsonEnvelope<T> {
    Json(ApiEnvelope {
        data: Some(data),
        ..ApiEnvelope::empty(true)
    })
}

pub fn ok_with_message<T>(data: T, message: &str) -> JsonEnvelope<T> {
    Json(ApiEnvelope {
        data: Some(data),
        message: Some(message.to_owned()),
        ..ApiEnvelope::empty(true)
    })
}

/// Row list with `count`.
pub fn list<T>(rows: Vec<T>) -> JsonEnvelope<Vec<T>> {
    Json(ApiEnvelope {
        count: Some(rows.len()),
        data: Some(rows),
        ..ApiEnvelope::empty(true)
    })
}

pub fn done(message: &str) -> JsonEnvelope<()> {
    Json(ApiEnvelope {
        message: Some(message.to_owned()),
        ..ApiEnvelope::empty(true)
    })
}
