use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::time::Duration;

use crate::common::{blog_payload, TestContext};

fn timestamp(value: &Value) -> DateTime<Utc> {
    serde_json::from_value(value.clone()).unwrap()
}

async fn create_post(ctx: &TestContext, payload: &Value) -> Value {
    let response = ctx.server.post("/api/blog").json(payload).await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn create_then_get_round_trips_all_fields() {
    let ctx = TestContext::new().await;
    let payload = blog_payload("Ticaret Hukuku Güncellemesi", "ticaret-hukuku");

    let created = create_post(&ctx, &payload).await;
    assert_eq!(timestamp(&created["created_at"]), timestamp(&created["updated_at"]));
    assert_eq!(created["published"], true);

    let id = created["id"].as_str().unwrap();
    let fetched: Value = ctx.server.get(&format!("/api/blog/{}", id)).await.json();

    for field in [
        "title_tr", "title_en", "title_de", "title_ru",
        "content_tr", "content_en", "content_de", "content_ru",
        "slug",
    ] {
        assert_eq!(fetched[field], payload[field], "field {}", field);
    }
    assert_eq!(timestamp(&fetched["created_at"]), timestamp(&fetched["updated_at"]));
}

#[tokio::test]
async fn get_accepts_slug() {
    let ctx = TestContext::new().await;
    let created = create_post(&ctx, &blog_payload("İş Hukuku", "is-hukuku")).await;

    let response = ctx.server.get("/api/blog/is-hukuku").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], created["id"]);
}

#[tokio::test]
async fn blank_slug_is_generated_from_turkish_title() {
    let ctx = TestContext::new().await;

    let created = create_post(&ctx, &blog_payload("Şirket Birleşmeleri ve Devralmalar", "")).await;

    assert_eq!(created["slug"], "sirket-birlesmeleri-ve-devralmalar");
}

#[tokio::test]
async fn duplicate_slug_is_rejected() {
    let ctx = TestContext::new().await;
    create_post(&ctx, &blog_payload("Birinci", "ayni-slug")).await;

    let response = ctx
        .server
        .post("/api/blog")
        .json(&blog_payload("İkinci", "ayni-slug"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(ctx.count("blog_posts").await, 1);

    let survivor: Value = ctx.server.get("/api/blog/ayni-slug").await.json();
    assert_eq!(survivor["title_tr"], "Birinci");
}

#[tokio::test]
async fn malformed_slug_is_rejected() {
    let ctx = TestContext::new().await;

    ctx.server
        .post("/api/blog")
        .json(&blog_payload("Başlık", "Büyük Harf"))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(ctx.count("blog_posts").await, 0);
}

#[tokio::test]
async fn missing_locale_is_rejected() {
    let ctx = TestContext::new().await;
    let mut payload = blog_payload("Başlık", "baslik");
    payload.as_object_mut().unwrap().remove("title_ru");

    ctx.server
        .post("/api/blog")
        .json(&payload)
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(ctx.count("blog_posts").await, 0);
}

#[tokio::test]
async fn update_replaces_post_and_advances_updated_at() {
    let ctx = TestContext::new().await;
    let created = create_post(&ctx, &blog_payload("Eski Başlık", "eski-baslik")).await;
    let id = created["id"].as_str().unwrap();

    let mut replacement = blog_payload("Yeni Başlık", "yeni-baslik");
    replacement["published"] = false.into();

    let response = ctx.server.put(&format!("/api/blog/{}", id)).json(&replacement).await;
    response.assert_status_ok();
    let updated: Value = response.json();

    assert_eq!(updated["title_tr"], "Yeni Başlık");
    assert_eq!(updated["slug"], "yeni-baslik");
    assert_eq!(updated["published"], false);
    assert_eq!(timestamp(&updated["created_at"]), timestamp(&created["created_at"]));
    assert!(timestamp(&updated["updated_at"]) > timestamp(&created["updated_at"]));

    let fetched: Value = ctx.server.get(&format!("/api/blog/{}", id)).await.json();
    assert_eq!(timestamp(&fetched["updated_at"]), timestamp(&updated["updated_at"]));
    ctx.server
        .get("/api/blog/eski-baslik")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_onto_another_posts_slug_is_rejected() {
    let ctx = TestContext::new().await;
    create_post(&ctx, &blog_payload("Birinci", "birinci")).await;
    let second = create_post(&ctx, &blog_payload("İkinci", "ikinci")).await;

    ctx.server
        .put(&format!("/api/blog/{}", second["id"].as_str().unwrap()))
        .json(&blog_payload("İkinci", "birinci"))
        .await
        .assert_status(StatusCode::CONFLICT);

    let unchanged: Value = ctx.server.get("/api/blog/ikinci").await.json();
    assert_eq!(unchanged["id"], second["id"]);
}

#[tokio::test]
async fn update_missing_post_is_not_found() {
    let ctx = TestContext::new().await;

    ctx.server
        .put("/api/blog/no-such-id")
        .json(&blog_payload("Başlık", "baslik"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_hides_drafts_unless_asked() {
    let ctx = TestContext::new().await;
    create_post(&ctx, &blog_payload("Yayında Eski", "yayinda-eski")).await;

    let mut draft = blog_payload("Taslak", "taslak");
    draft["published"] = false.into();
    create_post(&ctx, &draft).await;

    create_post(&ctx, &blog_payload("Yayında Yeni", "yayinda-yeni")).await;

    let published: Vec<Value> = ctx.server.get("/api/blog").await.json();
    let slugs: Vec<&str> = published.iter().map(|p| p["slug"].as_str().unwrap()).collect();
    assert_eq!(slugs, vec!["yayinda-yeni", "yayinda-eski"]);

    let all: Vec<Value> = ctx
        .server
        .get("/api/blog")
        .add_query_param("published_only", false)
        .await
        .json();
    let slugs: Vec<&str> = all.iter().map(|p| p["slug"].as_str().unwrap()).collect();
    assert_eq!(slugs, vec!["yayinda-yeni", "taslak", "yayinda-eski"]);
}

#[tokio::test]
async fn delete_removes_post() {
    let ctx = TestContext::new().await;
    let created = create_post(&ctx, &blog_payload("Silinecek", "silinecek")).await;
    let path = format!("/api/blog/{}", created["id"].as_str().unwrap());

    ctx.server.delete(&path).await.assert_status_ok();
    ctx.server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
    ctx.server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn update_waits_for_another_writer() {
    let ctx = TestContext::file_backed().await;
    let created = create_post(&ctx, &blog_payload("Kilitli Yazı", "kilitli-yazi")).await;

    // Another connection holds the write lock for a moment.
    let mut writer = ctx.db.acquire().await.unwrap();
    sqlx::query("BEGIN IMMEDIATE").execute(&mut *writer).await.unwrap();
    sqlx::query("UPDATE contact_messages SET is_read = 1")
        .execute(&mut *writer)
        .await
        .unwrap();
    let release = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        sqlx::query("COMMIT").execute(&mut *writer).await.unwrap();
    });

    let response = ctx
        .server
        .put(&format!("/api/blog/{}", created["id"].as_str().unwrap()))
        .json(&blog_payload("Kilitli Yazı Güncel", "kilitli-yazi"))
        .await;

    response.assert_status_ok();
    release.await.unwrap();

    let fetched: Value = ctx.server.get("/api/blog/kilitli-yazi").await.json();
    assert_eq!(fetched["title_tr"], "Kilitli Yazı Güncel");
}

#[tokio::test]
async fn malformed_json_uses_error_body() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/blog")
        .text("{\"title_tr\": ")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid request body");
    assert_eq!(ctx.count("blog_posts").await, 0);
}

#[tokio::test]
async fn bad_list_query_uses_error_body() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .get("/api/blog")
        .add_query_param("published_only", "sometimes")
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid query parameters");
}
