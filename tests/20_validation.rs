mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{admin_token, offline_app, send, user_token};

// Everything here is rejected before the store is reached.

#[tokio::test]
async fn job_with_out_of_range_equity() -> Result<()> {
    let app = offline_app();
    let token = admin_token();
    let body = json!({ "title": "J", "salary": -1, "equity": "1.5", "companyHandle": "c1" });

    let (status, payload) = send(&app, Method::POST, "/jobs", Some(&token), Some(body)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["error"]["code"], "VALIDATION_ERROR");
    assert!(payload["error"]["field_errors"]["equity"].is_string());
    assert!(payload["error"]["field_errors"]["salary"].is_string());
    Ok(())
}

#[tokio::test]
async fn register_with_bare_domain_email() -> Result<()> {
    let app = offline_app();
    let body = json!({
        "username": "new",
        "password": "password",
        "firstName": "F",
        "lastName": "L",
        "email": "@abcdef"
    });

    let (status, payload) = send(&app, Method::POST, "/auth/register", None, Some(body)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(payload["error"]["field_errors"]["email"], "must be an email address");
    Ok(())
}

#[tokio::test]
async fn company_with_extra_property() -> Result<()> {
    let app = offline_app();
    let token = admin_token();
    let body = json!({
        "handle": "new", "name": "New", "description": "D", "numEmployees": 10, "ceo": "x"
    });

    let (status, payload) =
        send(&app, Method::POST, "/companies", Some(&token), Some(body)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["error"]["code"], "INVALID_JSON");
    Ok(())
}

#[tokio::test]
async fn empty_patch_is_no_data() -> Result<()> {
    let app = offline_app();
    let token = admin_token();

    for uri in ["/companies/c1", "/jobs/1"] {
        let (status, payload) = send(&app, Method::PATCH, uri, Some(&token), Some(json!({}))).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(payload["error"]["message"], "No data");
    }

    // Owners may patch themselves, but still need something to change
    let own = user_token("u1");
    let (status, payload) =
        send(&app, Method::PATCH, "/users/u1", Some(&own), Some(json!({}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["error"]["message"], "No data");
    Ok(())
}

#[tokio::test]
async fn job_update_cannot_move_company() -> Result<()> {
    let app = offline_app();
    let token = admin_token();
    let body = json!({ "companyHandle": "c2" });
    let (status, _) = send(&app, Method::PATCH, "/jobs/1", Some(&token), Some(body)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn bad_company_filters() -> Result<()> {
    let app = offline_app();

    let (status, payload) =
        send(&app, Method::GET, "/companies?minEmployees=10&maxEmployees=1", None, None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        payload["error"]["message"],
        "minEmployees value cannot exceed maxEmployees value"
    );

    let (status, _) = send(&app, Method::GET, "/companies?minEmployees=lots", None, None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/companies?founded=1999", None, None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn bad_job_filters() -> Result<()> {
    let app = offline_app();

    let (status, payload) = send(&app, Method::GET, "/jobs?hasEquity=maybe", None, None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["error"]["message"], "hasEquity must be a boolean");

    let (status, _) = send(&app, Method::GET, "/jobs?minSalary=1k", None, None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn non_numeric_job_id() -> Result<()> {
    let app = offline_app();
    let (status, payload) = send(&app, Method::GET, "/technologies/job/abc", None, None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["error"]["code"], "BAD_REQUEST");
    Ok(())
}

#[tokio::test]
async fn register_rejects_admin_flag() -> Result<()> {
    let app = offline_app();
    let body = json!({
        "username": "new",
        "password": "password",
        "firstName": "F",
        "lastName": "L",
        "email": "new@email.com",
        "isAdmin": true
    });
    let (status, _) = send(&app, Method::POST, "/auth/register", None, Some(body)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn token_requires_both_fields() -> Result<()> {
    let app = offline_app();
    let body = json!({ "username": "u1" });
    let (status, _) = send(&app, Method::POST, "/auth/token", None, Some(body)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}
