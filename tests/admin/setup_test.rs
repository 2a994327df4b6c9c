use axum::http::StatusCode;
use futures::future::join_all;
use serde_json::json;
use std::future::IntoFuture;

use crate::common::{test_config, test_password, TestContext};
use law_office_backend::config::Config;
use law_office_backend::modules::admin::crud::AdminCrud;
use law_office_backend::modules::admin::interface::{AdminError, AdminIdentity};

#[tokio::test]
async fn check_setup_reports_missing_admin() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/api/admin/check-setup").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "has_admin": false }));
}

#[tokio::test]
async fn setup_creates_first_admin() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/admin/setup")
        .json(&json!({ "username": "  deniz  ", "password": test_password() }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Admin user created successfully" }));

    let username: String = sqlx::query_scalar("SELECT username FROM admin_users")
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    assert_eq!(username, "deniz");

    ctx.server
        .get("/api/admin/check-setup")
        .await
        .assert_json(&json!({ "has_admin": true }));
}

#[tokio::test]
async fn setup_never_stores_plaintext() {
    let ctx = TestContext::new().await;
    ctx.setup_admin("deniz", test_password()).await;

    let hash: String = sqlx::query_scalar("SELECT password_hash FROM admin_users")
        .fetch_one(&ctx.db)
        .await
        .unwrap();

    assert_ne!(hash, test_password());
    assert!(hash.starts_with("$argon2id$"));
}

#[tokio::test]
async fn second_setup_is_rejected() {
    let ctx = TestContext::new().await;
    ctx.setup_admin("deniz", test_password()).await;

    let response = ctx
        .server
        .post("/api/admin/setup")
        .json(&json!({ "username": "intruder", "password": "AnotherPass1" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(ctx.count("admin_users").await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_setups_create_exactly_one_admin() {
    let ctx = TestContext::file_backed().await;

    let requests = (0..8).map(|i| {
        ctx.server
            .post("/api/admin/setup")
            .json(&json!({ "username": format!("admin{}", i), "password": test_password() }))
            .into_future()
    });
    let responses = join_all(requests).await;

    let created = responses
        .iter()
        .filter(|r| r.status_code() == StatusCode::OK)
        .count();
    let rejected = responses
        .iter()
        .filter(|r| r.status_code() == StatusCode::BAD_REQUEST)
        .count();

    assert_eq!(created, 1);
    assert_eq!(rejected, 7);
    assert_eq!(ctx.count("admin_users").await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_setup_tasks_create_exactly_one_admin() {
    let ctx = TestContext::file_backed().await;

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let crud = AdminCrud::new(ctx.db.clone());
            tokio::spawn(async move {
                let username = format!("admin{}", i);
                crud.setup(&username, test_password()).await
            })
        })
        .collect();
    let results: Vec<_> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap())
        .collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter(|r| r.is_err())
        .all(|r| matches!(r, Err(AdminError::AlreadyExists))));
    assert_eq!(ctx.count("admin_users").await, 1);
}

#[tokio::test]
async fn setup_validates_input() {
    let ctx = TestContext::new().await;

    ctx.server
        .post("/api/admin/setup")
        .json(&json!({ "username": "deniz", "password": "short" }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    ctx.server
        .post("/api/admin/setup")
        .json(&json!({ "username": "  ab ", "password": test_password() }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(ctx.count("admin_users").await, 0);
}

#[tokio::test]
async fn reset_endpoint_purges_admins_and_tokens() {
    let ctx = TestContext::new().await;
    ctx.setup_admin("deniz", test_password()).await;
    ctx.request_reset_token("deniz").await;

    let response = ctx.server.delete("/api/admin/reset").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Admin users reset successfully", "deleted": 1 }));
    assert_eq!(ctx.count("admin_users").await, 0);
    assert_eq!(ctx.count("password_resets").await, 0);

    // Setup is possible again afterwards.
    ctx.setup_admin("deniz", test_password()).await;
}

#[tokio::test]
async fn reset_endpoint_is_not_mounted_by_default() {
    let ctx = TestContext::with_config(Config {
        allow_admin_reset: false,
        ..test_config()
    })
    .await;
    ctx.setup_admin("deniz", test_password()).await;

    let response = ctx.server.delete("/api/admin/reset").await;

    assert!(response.status_code().is_client_error());
    assert_eq!(ctx.count("admin_users").await, 1);
}
