//! Integration tests for portals, job descriptions, applicants, and health.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "memory: connected");
}

#[tokio::test]
async fn test_portal_crud() {
    let app = TestApp::new();
    let token = app.user_with_token("portals@example.com").await;

    let created = app
        .request(
            "POST",
            "/api/job/portals/",
            Some(json!({"name": "LinkedIn", "description": "Professional network"})),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_i64().unwrap();
    assert_eq!(
        created.body,
        json!({"id": id, "name": "LinkedIn", "description": "Professional network"})
    );

    let path = format!("/api/job/portals/{id}/");
    let patched = app
        .request("PATCH", &path, Some(json!({"description": "Jobs"})), Some(&token))
        .await;
    assert_eq!(patched.status, StatusCode::OK);
    assert_eq!(patched.body["name"], "LinkedIn");
    assert_eq!(patched.body["description"], "Jobs");

    let list = app.request("GET", "/api/job/portals/", None, Some(&token)).await;
    assert_eq!(list.body.as_array().unwrap().len(), 1);

    let deleted = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    let gone = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_portal_name_unique() {
    let app = TestApp::new();
    let first = app.user_with_token("first@example.com").await;
    let second = app.user_with_token("second@example.com").await;
    let body = json!({"name": "Indeed", "description": "Listings"});

    app.request("POST", "/api/job/portals/", Some(body.clone()), Some(&first))
        .await;
    let response = app
        .request("POST", "/api/job/portals/", Some(body), Some(&second))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.field_errors("name"),
        vec!["portal with this name already exists."]
    );
}

#[tokio::test]
async fn test_deleting_portal_removes_its_titles() {
    let app = TestApp::new();
    let token = app.user_with_token("cascade@example.com").await;
    let (portal, description) = app.job_links(&token, "Cascade").await;
    app.request(
        "POST",
        "/api/job/jobtitles/",
        Some(json!({"title": "Gone soon", "portal": portal, "job_description": description})),
        Some(&token),
    )
    .await;

    let path = format!("/api/job/portals/{portal}/");
    let deleted = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let titles = app.request("GET", "/api/job/jobtitles/", None, Some(&token)).await;
    assert_eq!(titles.body, json!([]));
}

#[tokio::test]
async fn test_description_fields() {
    let app = TestApp::new();
    let token = app.user_with_token("writer@example.com").await;

    let created = app
        .request(
            "POST",
            "/api/job/descriptions/",
            Some(json!({
                "role": "Data Engineer",
                "description_text": "Spark and Airflow",
                "published_date": "2024-06-01T09:00:00Z",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["role"], "Data Engineer");
    assert_eq!(created.body["description_text"], "Spark and Airflow");
    assert_eq!(created.body["published_date"], "2024-06-01T09:00:00Z");

    let missing = app
        .request(
            "POST",
            "/api/job/descriptions/",
            Some(json!({"description_text": "No role"})),
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.field_errors("role"), vec!["This field is required."]);
}

#[tokio::test]
async fn test_descriptions_scoped_to_owner() {
    let app = TestApp::new();
    let owner = app.user_with_token("owner@example.com").await;
    let other = app.user_with_token("other@example.com").await;
    let (_, description) = app.job_links(&owner, "Scoped").await;

    let path = format!("/api/job/descriptions/{description}/");
    let response = app
        .request("PATCH", &path, Some(json!({"role": "Hijacked"})), Some(&other))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let list = app.request("GET", "/api/job/descriptions/", None, Some(&other)).await;
    assert_eq!(list.body, json!([]));
}

#[tokio::test]
async fn test_applicant_profile_lifecycle() {
    let app = TestApp::new();
    let employer = app.user_with_token("hr@example.com").await;
    let candidate = app.user_with_token("dev@example.com").await;
    let (portal, description) = app.job_links(&employer, "Wellfound").await;
    let title = app
        .request(
            "POST",
            "/api/job/jobtitles/",
            Some(json!({"title": "SRE", "portal": portal, "job_description": description})),
            Some(&employer),
        )
        .await;
    let title_id = title.body["id"].as_i64().unwrap();

    let created = app
        .request(
            "POST",
            "/api/job/applicants/",
            Some(json!({"applied_for": title_id, "cover_letter": "On call veteran"})),
            Some(&candidate),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["email"], "dev@example.com");
    assert_eq!(created.body["is_applicant"], true);
    let id = created.body["id"].as_i64().unwrap();

    let duplicate = app
        .request(
            "POST",
            "/api/job/applicants/",
            Some(json!({"applied_for": title_id, "cover_letter": "Again"})),
            Some(&candidate),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);

    let path = format!("/api/job/applicants/{id}/");
    let foreign = app.request("GET", &path, None, Some(&employer)).await;
    assert_eq!(foreign.status, StatusCode::NOT_FOUND);

    let patched = app
        .request(
            "PATCH",
            &path,
            Some(json!({"cover_letter": "Updated letter"})),
            Some(&candidate),
        )
        .await;
    assert_eq!(patched.status, StatusCode::OK);
    assert_eq!(patched.body["cover_letter"], "Updated letter");

    let deleted = app.request("DELETE", &path, None, Some(&candidate)).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let list = app.request("GET", "/api/job/applicants/", None, Some(&candidate)).await;
    assert_eq!(list.body, json!([]));

    let me = app.request("GET", "/api/user/me/", None, Some(&candidate)).await;
    assert_eq!(me.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_id_segment_is_not_found() {
    let app = TestApp::new();
    let token = app.user_with_token("segments@example.com").await;

    let response = app
        .request("GET", "/api/job/portals/not-a-number/", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
