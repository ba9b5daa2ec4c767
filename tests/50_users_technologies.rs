mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use common::{admin_token, database_app, send, unique};

// Store-backed; each test skips when DATABASE_URL is unset.

fn signup(username: &str) -> Value {
    json!({
        "username": username,
        "password": "password",
        "firstName": "First",
        "lastName": "Last",
        "email": format!("{}@email.com", username)
    })
}

#[tokio::test]
async fn register_login_and_self_service() -> Result<()> {
    let Some(app) = database_app().await? else { return Ok(()) };
    let username = unique("u");

    let (status, registered) =
        send(&app, Method::POST, "/auth/register", None, Some(signup(&username))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert!(registered["token"].is_string());

    let (status, _) =
        send(&app, Method::POST, "/auth/register", None, Some(signup(&username))).await?;
    assert_eq!(status, StatusCode::CONFLICT);

    let bad = json!({ "username": username, "password": "nope!" });
    let (status, payload) = send(&app, Method::POST, "/auth/token", None, Some(bad)).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(payload["error"]["message"], "Invalid username/password");

    let good = json!({ "username": username, "password": "password" });
    let (status, payload) = send(&app, Method::POST, "/auth/token", None, Some(good)).await?;
    assert_eq!(status, StatusCode::OK);
    let token = payload["token"].as_str().unwrap_or_default().to_string();

    let uri = format!("/users/{}", username);
    let (status, me) = send(&app, Method::GET, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["user"]["isAdmin"], false);
    assert_eq!(me["user"]["jobs"], json!([]));
    assert!(me["user"].get("password").is_none());

    // A changed password is hashed and usable for login
    let patch = json!({ "firstName": "Changed", "password": "new-password" });
    let (status, updated) = send(&app, Method::PATCH, &uri, Some(&token), Some(patch)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["user"]["firstName"], "Changed");

    let login = json!({ "username": username, "password": "new-password" });
    let (status, _) = send(&app, Method::POST, "/auth/token", None, Some(login)).await?;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&admin_token()), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn admin_creates_admin_users() -> Result<()> {
    let Some(app) = database_app().await? else { return Ok(()) };
    let admin = admin_token();
    let username = unique("adm");

    let mut body = signup(&username);
    body["isAdmin"] = json!(true);
    let (status, payload) = send(&app, Method::POST, "/users", Some(&admin), Some(body)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(payload["user"]["isAdmin"], true);
    assert!(payload["token"].is_string());

    let (status, listed) = send(&app, Method::GET, "/users", Some(&admin), None).await?;
    assert_eq!(status, StatusCode::OK);
    let found = listed["users"]
        .as_array()
        .map(|users| users.iter().any(|u| u["username"] == username.as_str()))
        .unwrap_or(false);
    assert!(found);

    send(&app, Method::DELETE, &format!("/users/{}", username), Some(&admin), None).await?;
    Ok(())
}

#[tokio::test]
async fn applications_and_technology_matching() -> Result<()> {
    let Some(app) = database_app().await? else { return Ok(()) };
    let admin = admin_token();
    let handle = unique("tc");
    let username = unique("tu");
    let tech = unique("Lang");

    let company = json!({
        "handle": handle, "name": format!("Tech {}", handle), "description": "", "numEmployees": 1
    });
    send(&app, Method::POST, "/companies", Some(&admin), Some(company)).await?;
    let (_, registered) =
        send(&app, Method::POST, "/auth/register", None, Some(signup(&username))).await?;
    let token = registered["token"].as_str().unwrap_or_default().to_string();

    let mut ids = Vec::new();
    for title in ["B tagged", "A tagged", "untagged"] {
        let body = json!({ "title": title, "companyHandle": handle });
        let (_, created) = send(&app, Method::POST, "/jobs", Some(&admin), Some(body)).await?;
        ids.push(created["job"]["id"].as_i64().unwrap_or_default());
    }

    // Untagged but existing job: empty list, not 404
    let (status, tags) =
        send(&app, Method::GET, &format!("/technologies/job/{}", ids[2]), None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tags["technologies"], json!([]));

    for id in &ids[..2] {
        let body = json!({ "technology": tech, "job_id": id });
        let (status, added) =
            send(&app, Method::POST, "/technologies", Some(&admin), Some(body)).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(added["added"]["job_id"], *id);
    }
    let body = json!({ "technology": tech.to_lowercase(), "username": username });
    send(&app, Method::POST, "/technologies", Some(&admin), Some(body)).await?;

    // Lookups list technology names only
    let (status, tags) =
        send(&app, Method::GET, &format!("/technologies/job/{}", ids[0]), None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tags["technologies"], json!([tech]));
    let uri = format!("/technologies/user/{}", username);
    let (_, tags) = send(&app, Method::GET, &uri, Some(&token), None).await?;
    assert_eq!(tags["technologies"], json!([tech.to_lowercase()]));

    // Unknown job is named, not the constraint
    let body = json!({ "technology": tech, "job_id": 0 });
    let (status, body) = send(&app, Method::POST, "/technologies", Some(&admin), Some(body)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "No job: 0");

    let uri = format!("/technologies/jobsby/{}", tech.to_uppercase());
    let (_, by_tech) = send(&app, Method::GET, &uri, None, None).await?;
    assert_eq!(by_tech["jobs"].as_array().map(Vec::len), Some(2));

    let uri = format!("/technologies/jobsfor/{}", username);
    let (status, matched) = send(&app, Method::GET, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = matched["jobs"]
        .as_array()
        .map(|jobs| jobs.iter().filter_map(|j| j["title"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(titles, vec!["A tagged", "B tagged"]);

    let uri = format!("/users/{}/jobs/{}", username, ids[0]);
    let (status, applied) = send(&app, Method::POST, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(applied["applied"], ids[0].to_string());

    let (_, me) = send(&app, Method::GET, &format!("/users/{}", username), Some(&token), None).await?;
    assert_eq!(me["user"]["jobs"], json!([ids[0]]));

    let (status, _) =
        send(&app, Method::POST, &format!("/users/{}/jobs/0", username), Some(&token), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) =
        send(&app, Method::GET, &format!("/technologies/jobsfor/{}", unique("nobody")), Some(&admin), None)
            .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    send(&app, Method::DELETE, &format!("/users/{}", username), Some(&admin), None).await?;
    send(&app, Method::DELETE, &format!("/companies/{}", handle), Some(&admin), None).await?;
    Ok(())
}
