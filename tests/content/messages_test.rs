use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{message_payload, TestContext};

async fn create_message(ctx: &TestContext, subject: &str) -> Value {
    let response = ctx.server.post("/api/messages").json(&message_payload(subject)).await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn create_message_returns_unread_record() {
    let ctx = TestContext::new().await;

    let body = create_message(&ctx, "Boşanma davası").await;

    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["subject"], "Boşanma davası");
    assert_eq!(body["legal_area"], "family_law");
    assert_eq!(body["urgency"], "high");
    assert_eq!(body["is_read"], false);
    assert_eq!(ctx.count("contact_messages").await, 1);
}

#[tokio::test]
async fn unknown_legal_area_is_rejected_before_storage() {
    let ctx = TestContext::new().await;
    let mut payload = message_payload("Vergi");
    payload["legal_area"] = "tax_law_and_more".into();

    let response = ctx.server.post("/api/messages").json(&payload).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid request body");
    assert!(body["message"].as_str().unwrap().contains("legal_area"));
    assert_eq!(ctx.count("contact_messages").await, 0);
}

#[tokio::test]
async fn syntactically_broken_json_is_unprocessable() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/messages")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid request body");
    assert!(body["message"].is_string());
    assert_eq!(ctx.count("contact_messages").await, 0);
}

#[tokio::test]
async fn unknown_urgency_is_rejected_before_storage() {
    let ctx = TestContext::new().await;
    let mut payload = message_payload("Acil");
    payload["urgency"] = "critical".into();

    ctx.server
        .post("/api/messages")
        .json(&payload)
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(ctx.count("contact_messages").await, 0);
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let ctx = TestContext::new().await;
    let mut payload = message_payload("İletişim");
    payload["email"] = "not-an-email".into();

    ctx.server
        .post("/api/messages")
        .json(&payload)
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(ctx.count("contact_messages").await, 0);
}

#[tokio::test]
async fn list_returns_newest_first() {
    let ctx = TestContext::new().await;
    for subject in ["birinci", "ikinci", "üçüncü"] {
        create_message(&ctx, subject).await;
    }

    let response = ctx.server.get("/api/messages").await;
    response.assert_status_ok();

    let body: Vec<Value> = response.json();
    let subjects: Vec<&str> = body.iter().map(|m| m["subject"].as_str().unwrap()).collect();
    assert_eq!(subjects, vec!["üçüncü", "ikinci", "birinci"]);
}

#[tokio::test]
async fn mark_read_flips_flag() {
    let ctx = TestContext::new().await;
    let created = create_message(&ctx, "Miras").await;
    let id = created["id"].as_str().unwrap();

    ctx.server
        .put(&format!("/api/messages/{}/read", id))
        .await
        .assert_status_ok();

    let body: Vec<Value> = ctx.server.get("/api/messages").await.json();
    assert_eq!(body[0]["is_read"], true);
}

#[tokio::test]
async fn mark_read_on_missing_message_is_not_found() {
    let ctx = TestContext::new().await;

    ctx.server
        .put("/api/messages/does-not-exist/read")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_message_once() {
    let ctx = TestContext::new().await;
    let created = create_message(&ctx, "Kira").await;
    let path = format!("/api/messages/{}", created["id"].as_str().unwrap());

    ctx.server.delete(&path).await.assert_status_ok();
    ctx.server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);

    assert_eq!(ctx.count("contact_messages").await, 0);
}
