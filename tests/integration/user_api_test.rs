//! Integration tests for sign-up, token issuance, and `/me`.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_create_user_hides_password() {
    let app = TestApp::new();
    let response = app.create_user("test@example.com", "testpass123", "Test name").await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body, json!({"email": "test@example.com", "name": "Test name"}));

    let user = app
        .db
        .users
        .find_by_email("test@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_ne!(user.password_hash, "testpass123");
}

#[tokio::test]
async fn test_create_user_normalizes_domain() {
    let app = TestApp::new();
    let response = app.create_user("ADMIN3@GMAIl.COM", "test123", "Admin").await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["email"], "ADMIN3@gmail.com");
}

#[tokio::test]
async fn test_create_user_requires_email() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/user/create/",
            Some(json!({"password": "test123", "name": "No email"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.field_errors("email"), vec!["This field is required."]);
}

#[tokio::test]
async fn test_create_user_rejects_empty_email() {
    let app = TestApp::new();
    let response = app.create_user("", "test123", "Empty").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!response.field_errors("email").is_empty());
    assert!(app.db.users.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_password_too_short() {
    let app = TestApp::new();
    let response = app.create_user("short@example.com", "pw", "Short").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.field_errors("password"),
        vec!["Ensure this field has at least 5 characters."]
    );
    assert!(
        app.db
            .users
            .find_by_email("short@example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let app = TestApp::new();
    app.create_user("dup@example.com", "testpass", "First").await;
    let response = app.create_user("dup@EXAMPLE.com", "testpass", "Second").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.field_errors("email"),
        vec!["user with this email already exists."]
    );
}

#[tokio::test]
async fn test_token_is_stable() {
    let app = TestApp::new();
    app.create_user("token@example.com", "testpass", "Token").await;

    let first = app.login("token@example.com", "testpass").await;
    let second = app.login("token@example.com", "testpass").await;

    assert_eq!(first, second);
    assert_eq!(first.len(), 40);
    assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn test_token_bad_credentials() {
    let app = TestApp::new();
    app.create_user("creds@example.com", "testpass", "Creds").await;

    for (email, password) in [
        ("creds@example.com", "wrongpass"),
        ("missing@example.com", "testpass"),
    ] {
        let response = app
            .request(
                "POST",
                "/api/user/token/",
                Some(json!({"email": email, "password": password})),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.field_errors("non_field_errors"),
            vec!["Unable to authenticate user with given credentials"]
        );
    }
}

#[tokio::test]
async fn test_token_requires_password() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/user/token/",
            Some(json!({"email": "someone@example.com", "password": ""})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.field_errors("password"),
        vec!["This field may not be blank."]
    );
}

#[tokio::test]
async fn test_me_requires_authentication() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/user/me/", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body["message"],
        "Authentication credentials were not provided."
    );
    assert_eq!(response.headers.get("www-authenticate").unwrap(), "Token");
}

#[tokio::test]
async fn test_malformed_token_headers() {
    let app = TestApp::new();

    let cases = [
        ("Token", "Invalid token header. No credentials provided."),
        (
            "Token abc def",
            "Invalid token header. Token string should not contain spaces.",
        ),
        ("Token not-a-real-key", "Invalid token."),
        ("Bearer abc", "Authentication credentials were not provided."),
    ];
    for (header, message) in cases {
        let response = app.send("GET", "/api/user/me/", None, Some(header)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{header}");
        assert_eq!(response.body["message"], message, "{header}");
    }
}

#[tokio::test]
async fn test_me_profile() {
    let app = TestApp::new();
    let token = app.user_with_token("me@example.com").await;

    let response = app.request("GET", "/api/user/me/", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"email": "me@example.com", "name": "Test User"}));
}

#[tokio::test]
async fn test_patch_me_updates_name_and_password() {
    let app = TestApp::new();
    let token = app.user_with_token("patch@example.com").await;

    let response = app
        .request(
            "PATCH",
            "/api/user/me/",
            Some(json!({"name": "New name", "password": "newpassword123"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "New name");

    let relogin = app.login("patch@example.com", "newpassword123").await;
    assert_eq!(relogin, token);
}

#[tokio::test]
async fn test_put_me_requires_all_fields() {
    let app = TestApp::new();
    let token = app.user_with_token("put@example.com").await;

    let response = app
        .request(
            "PUT",
            "/api/user/me/",
            Some(json!({"name": "Only name"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.field_errors("email"), vec!["This field is required."]);
    assert_eq!(response.field_errors("password"), vec!["This field is required."]);
}

#[tokio::test]
async fn test_post_me_not_allowed() {
    let app = TestApp::new();
    let token = app.user_with_token("post@example.com").await;

    let response = app
        .request("POST", "/api/user/me/", Some(json!({})), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);

    let anonymous = app.request("POST", "/api/user/me/", Some(json!({})), None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_inactive_user_token_rejected() {
    let app = TestApp::new();
    let token = app.user_with_token("inactive@example.com").await;
    let user = app
        .db
        .users
        .find_by_email("inactive@example.com")
        .await
        .unwrap()
        .unwrap();
    app.db
        .users
        .update(&jobboard_entity::user::UpdateUser {
            id: user.id,
            is_active: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();

    let response = app.request("GET", "/api/user/me/", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "User inactive or deleted.");
}

#[tokio::test]
async fn test_whitespace_password_rejected_at_sign_up() {
    let app = TestApp::new();
    let response = app
        .create_user("space@example.com", "      ", "Space")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.field_errors("password"),
        vec!["This field may not be blank."]
    );
    assert!(
        app.db
            .users
            .find_by_email("space@example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_padded_password_round_trips_through_token() {
    let app = TestApp::new();
    let response = app
        .create_user("padded@example.com", "  secret99  ", "Padded")
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);

    let token = app.login("padded@example.com", "  secret99  ").await;
    assert_eq!(token.len(), 40);

    let trimmed = app
        .request(
            "POST",
            "/api/user/token/",
            Some(json!({"email": "padded@example.com", "password": "secret99"})),
            None,
        )
        .await;
    assert_eq!(trimmed.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_me_rejects_whitespace_password() {
    let app = TestApp::new();
    let token = app.user_with_token("blank@example.com").await;

    let response = app
        .request(
            "PATCH",
            "/api/user/me/",
            Some(json!({"password": "        "})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.field_errors("password"),
        vec!["This field may not be blank."]
    );
}

#[tokio::test]
async fn test_me_writes_require_authentication() {
    let app = TestApp::new();
    let body = json!({"email": "me@example.com", "name": "Me", "password": "testpass123"});

    for method in ["PUT", "PATCH", "POST"] {
        let response = app
            .request(method, "/api/user/me/", Some(body.clone()), None)
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method}");
        assert_eq!(response.headers.get("www-authenticate").unwrap(), "Token");
    }
}
