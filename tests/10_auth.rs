mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{admin_token, offline_app, send, user_token};

// Gates run before any body parsing or store access, so none of these
// need a database.

fn job_body() -> serde_json::Value {
    json!({ "title": "J-new", "salary": 10, "equity": "0.2", "companyHandle": "c1" })
}

#[tokio::test]
async fn anonymous_cannot_create_job() -> Result<()> {
    let app = offline_app();
    let (status, payload) = send(&app, Method::POST, "/jobs", None, Some(job_body())).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(payload["error"]["status"], 401);
    assert_eq!(payload["error"]["message"], "Unauthorized");
    Ok(())
}

#[tokio::test]
async fn non_admin_cannot_create_job() -> Result<()> {
    let app = offline_app();
    let token = user_token("u1");
    let (status, payload) =
        send(&app, Method::POST, "/jobs", Some(&token), Some(job_body())).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(payload["error"]["message"], "This activity is restricted to admin users");
    Ok(())
}

#[tokio::test]
async fn gate_runs_before_body_validation() -> Result<()> {
    let app = offline_app();
    let (status, _) =
        send(&app, Method::POST, "/companies", None, Some(json!({ "bogus": true }))).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn tampered_token_is_anonymous() -> Result<()> {
    let app = offline_app();
    let mut token = admin_token();
    token.push('x');

    let (status, payload) =
        send(&app, Method::DELETE, "/companies/c1", Some(&token), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(payload["error"]["message"], "Unauthorized");
    Ok(())
}

#[tokio::test]
async fn users_list_is_admin_only() -> Result<()> {
    let app = offline_app();
    let token = user_token("u1");
    let (status, _) = send(&app, Method::GET, "/users", Some(&token), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn other_users_are_off_limits() -> Result<()> {
    let app = offline_app();
    let token = user_token("u2");

    for (method, uri) in [
        (Method::GET, "/users/u1"),
        (Method::DELETE, "/users/u1"),
        (Method::POST, "/users/u1/jobs/1"),
        (Method::GET, "/technologies/user/u1"),
        (Method::GET, "/technologies/jobsfor/u1"),
    ] {
        let (status, payload) = send(&app, method, uri, Some(&token), None).await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(payload["error"]["message"], "You do not have permission to access that");
    }
    Ok(())
}

#[tokio::test]
async fn tagging_is_admin_only() -> Result<()> {
    let app = offline_app();
    let token = user_token("u1");
    let body = json!({ "technology": "rust", "username": "u1" });
    let (status, _) = send(&app, Method::POST, "/technologies", Some(&token), Some(body)).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_json_404() -> Result<()> {
    let app = offline_app();
    let (status, payload) = send(&app, Method::GET, "/nope", None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(payload["error"]["code"], "NOT_FOUND");
    Ok(())
}
