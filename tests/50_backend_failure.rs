mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::FailingStore;

#[tokio::test]
async fn toggle_status_hides_store_failure() -> Result<()> {
    let server = common::spawn_server_with(FailingStore).await?;

    let res = server
        .client
        .put(server.url("/api/admin/users/7/toggle-status"))
        .bearer_auth(server.token(1, "admin"))
        .json(&json!({ "is_active": false }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = res.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["code"], "INTERNAL_SERVER_ERROR");
    Ok(())
}

#[tokio::test]
async fn skill_delete_hides_store_failure() -> Result<()> {
    let server = common::spawn_server_with(FailingStore).await?;

    let res = server
        .client
        .delete(server.url("/api/skills/10"))
        .bearer_auth(server.token(1, "user"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["code"], "INTERNAL_SERVER_ERROR");
    Ok(())
}

#[tokio::test]
async fn guard_rejects_before_touching_store() -> Result<()> {
    let server = common::spawn_server_with(FailingStore).await?;

    let res = server
        .client
        .put(server.url("/api/admin/users/7/toggle-status"))
        .bearer_auth(server.token(2, "user"))
        .json(&json!({ "is_active": false }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn health_reports_degraded_store() -> Result<()> {
    let server = common::spawn_server_with(FailingStore).await?;

    let res = server.client.get(server.url("/health")).send().await?;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = res.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["data"]["status"], "degraded");
    assert!(body["data"]["timestamp"].is_string());
    Ok(())
}
