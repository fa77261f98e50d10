#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Login, session cookies and the forgot-password code flow.

mod common;

use axum::http::{Method, StatusCode};
use carehome::config::{AuthConfig, CarehomeConfig};
use chrono::Duration;
use common::{ANCD, EMAIL, PASSWORD, UID, spawn_app, spawn_with};
use serde_json::json;

#[tokio::test]
async fn login_sets_session_and_user_cookies() {
    let app = spawn_app().await;

    let reply = app
        .post(
            "/api/auth/login",
            json!({"ancd": ANCD, "uid": UID, "password": PASSWORD}),
        )
        .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.message(), "로그인 성공");
    assert_eq!(reply.body["data"]["UID"], UID);
    assert_eq!(reply.body["data"]["USRNM"], "김간호");
    assert!(reply.body["data"].get("PWD").is_none());

    let auth = reply
        .cookies
        .iter()
        .find(|c| c.starts_with("auth_token="))
        .unwrap();
    assert!(auth.contains("HttpOnly"));
    assert!(auth.contains("SameSite=Lax"));
    assert!(auth.contains("Max-Age=86400"));
    assert!(!auth.contains("Secure"));

    let user = reply
        .cookies
        .iter()
        .find(|c| c.starts_with("user_info="))
        .unwrap();
    let encoded = user
        .trim_start_matches("user_info=")
        .split(';')
        .next()
        .unwrap();
    let decoded: serde_json::Value =
        serde_json::from_str(&urlencoding::decode(encoded).unwrap()).unwrap();
    assert_eq!(decoded["ANCD"], ANCD);
}

#[tokio::test]
async fn login_failures_say_which_part_was_wrong() {
    let app = spawn_app().await;

    let unknown = app
        .post(
            "/api/auth/login",
            json!({"ancd": ANCD, "uid": "ghost", "password": PASSWORD}),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body["error"], "존재하지 않는 계정입니다");

    let wrong = app
        .post(
            "/api/auth/login",
            json!({"ancd": ANCD, "uid": UID, "password": "nope"}),
        )
        .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.body["error"], "비밀번호가 틀렸습니다");
    assert!(wrong.cookies.is_empty());

    let missing = app
        .post("/api/auth/login", json!({"ancd": ANCD, "uid": UID}))
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn session_lifecycle() {
    let app = spawn_app().await;
    let cookie = app.login().await;

    let me = app
        .request(Method::GET, "/api/auth/me", None, Some(&cookie))
        .await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["UID"], UID);

    let out = app
        .request(Method::POST, "/api/auth/logout", None, Some(&cookie))
        .await;
    assert_eq!(out.status, StatusCode::OK);
    assert_eq!(out.message(), "로그아웃되었습니다");
    assert!(out.cookies.iter().all(|c| c.contains("Max-Age=0")));

    let after = app
        .request(Method::GET, "/api/auth/me", None, Some(&cookie))
        .await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn sessions_expire() {
    let app = spawn_app().await;
    let cookie = app.login().await;

    app.clock.advance(Duration::hours(24));

    let me = app
        .request(Method::GET, "/api/auth/me", None, Some(&cookie))
        .await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn enforced_sessions_guard_record_routes() {
    let config = CarehomeConfig {
        auth: AuthConfig {
            enforce_sessions: true,
            ..AuthConfig::default()
        },
        ..CarehomeConfig::default()
    };
    let app = spawn_with(config).await;
    let uri = format!("/api/employees?ancd={ANCD}");

    let anonymous = app.get(&uri).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(anonymous.body["error"], "로그인이 필요합니다");

    let cookie = app.login().await;
    let signed_in = app.request(Method::GET, &uri, None, Some(&cookie)).await;
    assert_eq!(signed_in.status, StatusCode::OK);

    assert_eq!(app.get("/health").await.status, StatusCode::OK);
}

fn reset_body(email: &str) -> serde_json::Value {
    json!({"ancd": ANCD, "uid": UID, "email": email})
}

fn verify_body(code: &str) -> serde_json::Value {
    json!({"ancd": ANCD, "uid": UID, "email": EMAIL, "code": code})
}

#[tokio::test]
async fn reset_code_recovers_password_once() {
    let app = spawn_app().await;

    let sent = app
        .post(
            "/api/auth/forgot-password/send",
            reset_body("nurse1@example.org"),
        )
        .await;
    assert_eq!(sent.status, StatusCode::OK, "{}", sent.body);
    assert_eq!(sent.message(), "인증 코드가 이메일로 발송되었습니다");
    assert_eq!(
        app.mailer.last_recipient().as_deref(),
        Some("nurse1@example.org")
    );

    let code = app.mailer.last_code().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));

    let wrong = if code == "000000" { "111111" } else { "000000" };
    let mismatch = app
        .post("/api/auth/forgot-password/verify", verify_body(wrong))
        .await;
    assert_eq!(mismatch.status, StatusCode::UNAUTHORIZED);
    assert_eq!(mismatch.body["error"], "인증 코드가 일치하지 않습니다");

    let verified = app
        .post("/api/auth/forgot-password/verify", verify_body(&code))
        .await;
    assert_eq!(verified.status, StatusCode::OK);
    assert_eq!(verified.message(), "인증되었습니다");
    assert_eq!(verified.body["data"]["password"], PASSWORD);

    let replay = app
        .post("/api/auth/forgot-password/verify", verify_body(&code))
        .await;
    assert_eq!(replay.status, StatusCode::UNAUTHORIZED);
    assert_eq!(replay.body["error"], "인증 코드를 먼저 요청해 주세요");
}

#[tokio::test]
async fn reset_code_expires_after_ten_minutes() {
    let app = spawn_app().await;
    app.post("/api/auth/forgot-password/send", reset_body(EMAIL))
        .await;
    let code = app.mailer.last_code().unwrap();

    app.clock.advance(Duration::minutes(10));

    let reply = app
        .post("/api/auth/forgot-password/verify", verify_body(&code))
        .await;
    assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
    assert_eq!(reply.body["error"], "인증 코드가 만료되었습니다");
}

#[tokio::test]
async fn reset_requires_the_registered_email() {
    let app = spawn_app().await;

    let reply = app
        .post(
            "/api/auth/forgot-password/send",
            reset_body("someone@else.org"),
        )
        .await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.body["error"], "일치하는 계정 정보가 없습니다");
    assert!(app.mailer.last_code().is_none());

    let never_sent = app
        .post("/api/auth/forgot-password/verify", verify_body("123456"))
        .await;
    assert_eq!(never_sent.status, StatusCode::UNAUTHORIZED);
}
