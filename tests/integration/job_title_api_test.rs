//! Integration tests for the job title endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_job_titles_require_authentication() {
    let app = TestApp::new();

    let list = app.request("GET", "/api/job/jobtitles/", None, None).await;
    assert_eq!(list.status, StatusCode::UNAUTHORIZED);

    let create = app
        .request(
            "POST",
            "/api/job/jobtitles/",
            Some(json!({"title": "Dev", "portal": 1, "job_description": 1})),
            None,
        )
        .await;
    assert_eq!(create.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_ignores_user_field() {
    let app = TestApp::new();
    let token = app.user_with_token("owner@example.com").await;
    let other = app.create_user("other@example.com", "testpass", "Other").await;
    assert_eq!(other.status, StatusCode::CREATED);
    let other_id = app
        .db
        .users
        .find_by_email("other@example.com")
        .await
        .unwrap()
        .unwrap()
        .id;
    let (portal, description) = app.job_links(&token, "LinkedIn").await;

    let response = app
        .request(
            "POST",
            "/api/job/jobtitles/",
            Some(json!({
                "title": "Backend Developer",
                "portal": portal,
                "job_description": description,
                "user": other_id,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_i64().unwrap();
    assert_eq!(
        response.body,
        json!({
            "id": id,
            "title": "Backend Developer",
            "job_description": description,
            "portal": portal,
        })
    );

    let stored = app.db.job_titles.find_by_id(id).await.unwrap().unwrap();
    assert_ne!(stored.user_id, other_id);
    let owner = app
        .db
        .users
        .find_by_email("owner@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.user_id, owner.id);
}

#[tokio::test]
async fn test_list_uses_summary_fields_newest_first() {
    let app = TestApp::new();
    let token = app.user_with_token("lister@example.com").await;

    let mut ids = Vec::new();
    for (portal_name, title) in [("P1", "First"), ("P2", "Second")] {
        let (portal, description) = app.job_links(&token, portal_name).await;
        let created = app
            .request(
                "POST",
                "/api/job/jobtitles/",
                Some(json!({"title": title, "portal": portal, "job_description": description})),
                Some(&token),
            )
            .await;
        ids.push(created.body["id"].as_i64().unwrap());
    }

    let response = app.request("GET", "/api/job/jobtitles/", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([
            {"id": ids[1], "title": "Second"},
            {"id": ids[0], "title": "First"},
        ])
    );
}

#[tokio::test]
async fn test_other_owner_gets_not_found() {
    let app = TestApp::new();
    let owner = app.user_with_token("a@example.com").await;
    let intruder = app.user_with_token("b@example.com").await;
    let (portal, description) = app.job_links(&owner, "Indeed").await;

    let created = app
        .request(
            "POST",
            "/api/job/jobtitles/",
            Some(json!({"title": "Private", "portal": portal, "job_description": description})),
            Some(&owner),
        )
        .await;
    let path = format!("/api/job/jobtitles/{}/", created.body["id"]);

    let get = app.request("GET", &path, None, Some(&intruder)).await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);

    let delete = app.request("DELETE", &path, None, Some(&intruder)).await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);

    let list = app.request("GET", "/api/job/jobtitles/", None, Some(&intruder)).await;
    assert_eq!(list.body, json!([]));
}

#[tokio::test]
async fn test_delete_removes_title() {
    let app = TestApp::new();
    let token = app.user_with_token("deleter@example.com").await;
    let (portal, description) = app.job_links(&token, "Monster").await;
    let created = app
        .request(
            "POST",
            "/api/job/jobtitles/",
            Some(json!({"title": "Temp", "portal": portal, "job_description": description})),
            Some(&token),
        )
        .await;
    let id = created.body["id"].as_i64().unwrap();
    let path = format!("/api/job/jobtitles/{id}/");

    let response = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(response.body, serde_json::Value::Null);

    assert!(app.db.job_titles.find_by_id(id).await.unwrap().is_none());
    let again = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_keeps_owner() {
    let app = TestApp::new();
    let token = app.user_with_token("editor@example.com").await;
    let (portal, description) = app.job_links(&token, "Naukri").await;
    let created = app
        .request(
            "POST",
            "/api/job/jobtitles/",
            Some(json!({"title": "Old", "portal": portal, "job_description": description})),
            Some(&token),
        )
        .await;
    let id = created.body["id"].as_i64().unwrap();
    let path = format!("/api/job/jobtitles/{id}/");

    let patched = app
        .request(
            "PATCH",
            &path,
            Some(json!({"title": "New", "user": 9999})),
            Some(&token),
        )
        .await;
    assert_eq!(patched.status, StatusCode::OK);
    assert_eq!(patched.body["title"], "New");
    assert_eq!(patched.body["portal"], portal);

    let put_missing = app
        .request("PUT", &path, Some(json!({"title": "Put"})), Some(&token))
        .await;
    assert_eq!(put_missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(put_missing.field_errors("portal"), vec!["This field is required."]);

    let put = app
        .request(
            "PUT",
            &path,
            Some(json!({"title": "Put", "portal": portal, "job_description": description})),
            Some(&token),
        )
        .await;
    assert_eq!(put.status, StatusCode::OK);

    let stored = app.db.job_titles.find_by_id(id).await.unwrap().unwrap();
    let owner = app
        .db
        .users
        .find_by_email("editor@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.user_id, owner.id);
    assert_eq!(stored.title, "Put");
}

#[tokio::test]
async fn test_invalid_references() {
    let app = TestApp::new();
    let token = app.user_with_token("refs@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/job/jobtitles/",
            Some(json!({"title": "Ghost", "portal": 404, "job_description": 405})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.field_errors("portal"),
        vec!["Invalid pk \"404\" - object does not exist."]
    );
    assert_eq!(
        response.field_errors("job_description"),
        vec!["Invalid pk \"405\" - object does not exist."]
    );
}

#[tokio::test]
async fn test_description_backs_one_title() {
    let app = TestApp::new();
    let token = app.user_with_token("unique@example.com").await;
    let (portal, description) = app.job_links(&token, "Glassdoor").await;
    let body = json!({"title": "One", "portal": portal, "job_description": description});

    let first = app
        .request("POST", "/api/job/jobtitles/", Some(body.clone()), Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", "/api/job/jobtitles/", Some(body), Some(&token))
        .await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        second.field_errors("job_description"),
        vec!["job title with this job description already exists."]
    );
}

#[tokio::test]
async fn test_title_length_limit() {
    let app = TestApp::new();
    let token = app.user_with_token("long@example.com").await;
    let (portal, description) = app.job_links(&token, "Dice").await;

    let response = app
        .request(
            "POST",
            "/api/job/jobtitles/",
            Some(json!({
                "title": "x".repeat(26),
                "portal": portal,
                "job_description": description,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.field_errors("title"),
        vec!["Ensure this field has no more than 25 characters."]
    );
}

#[tokio::test]
async fn test_title_applicants() {
    let app = TestApp::new();
    let employer = app.user_with_token("employer@example.com").await;
    let candidate = app.user_with_token("candidate@example.com").await;
    let (portal, description) = app.job_links(&employer, "AngelList").await;
    let title = app
        .request(
            "POST",
            "/api/job/jobtitles/",
            Some(json!({"title": "Engineer", "portal": portal, "job_description": description})),
            Some(&employer),
        )
        .await;
    let title_id = title.body["id"].as_i64().unwrap();

    let applied = app
        .request(
            "POST",
            "/api/job/applicants/",
            Some(json!({"applied_for": title_id, "cover_letter": "Hire me"})),
            Some(&candidate),
        )
        .await;
    assert_eq!(applied.status, StatusCode::CREATED);

    let path = format!("/api/job/jobtitles/{title_id}/applicants/");
    let response = app.request("GET", &path, None, Some(&employer)).await;
    assert_eq!(response.status, StatusCode::OK);
    let applicants = response.body.as_array().unwrap();
    assert_eq!(applicants.len(), 1);
    assert_eq!(applicants[0]["email"], "candidate@example.com");
    assert_eq!(applicants[0]["cover_letter"], "Hire me");

    let foreign = app.request("GET", &path, None, Some(&candidate)).await;
    assert_eq!(foreign.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_job_title_detail_requires_authentication() {
    let app = TestApp::new();
    let token = app.user_with_token("owner@example.com").await;
    let (portal, description) = app.job_links(&token, "Naukri").await;
    let created = app
        .request(
            "POST",
            "/api/job/jobtitles/",
            Some(json!({"title": "Dev", "portal": portal, "job_description": description})),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    let path = format!("/api/job/jobtitles/{}/", created.body["id"]);
    let body = json!({"title": "Lead", "portal": portal, "job_description": description});

    for (method, body) in [
        ("GET", None),
        ("PUT", Some(body.clone())),
        ("PATCH", Some(body)),
        ("DELETE", None),
    ] {
        let response = app.request(method, &path, body, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method}");
    }

    let still_there = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(still_there.status, StatusCode::OK);
    assert_eq!(still_there.body["title"], "Dev");
}

#[tokio::test]
async fn test_wrong_field_type_is_a_field_error() {
    let app = TestApp::new();
    let token = app.user_with_token("owner@example.com").await;
    let (_, description) = app.job_links(&token, "Naukri").await;

    let response = app
        .request(
            "POST",
            "/api/job/jobtitles/",
            Some(json!({"title": "Dev", "portal": "abc", "job_description": description})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.field_errors("portal"),
        vec!["A valid integer is required."]
    );
}

#[tokio::test]
async fn test_non_object_body_rejected() {
    let app = TestApp::new();
    let token = app.user_with_token("owner@example.com").await;

    let response = app
        .request("POST", "/api/job/jobtitles/", Some(json!(["Dev"])), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.field_errors("non_field_errors"),
        vec!["Invalid data. Expected a dictionary, but got list."]
    );
}
