use serde::Deserialize;
use serde_json::json;

use crate::helpers::{TestApp, random_email, read_body};

#[derive(Deserialize)]
struct TokenBody {
    #[serde(rename = "accessToken")]
    access_token: String,
}

#[tokio::test]
async fn register_returns_the_new_user() {
    let app = TestApp::new().await;
    let email = random_email();

    let response = app
        .post_json(
            "/auth/register",
            &json!({
                "email": email,
                "password": "hunter2!",
                "firstName": "Amira",
                "lastName": "Haddad",
                "age": 28,
                "image": "https://example.com/amira.png",
            }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body = read_body(response).await;
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["user"]["email"], email.as_str());
    assert_eq!(body["user"]["firstName"], "Amira");
    assert!(body["user"]["id"].as_i64().is_some());
}

#[tokio::test]
async fn register_never_returns_password_material() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/auth/register",
            &json!({
                "email": random_email(),
                "password": "hunter2!",
                "firstName": "Amira",
                "lastName": "Haddad",
                "age": 28,
                "image": "https://example.com/amira.png",
            }),
        )
        .await;

    let body = read_body(response).await;
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn register_with_duplicate_email_returns_409() {
    let app = TestApp::new().await;
    let email = random_email();
    app.register_user(&email, "hunter2!").await;

    let response = app
        .post_json(
            "/auth/register",
            &json!({
                "email": email,
                "password": "other-password",
                "firstName": "Amira",
                "lastName": "Haddad",
                "age": 28,
                "image": "https://example.com/amira.png",
            }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(read_body(response).await["error"], "User already exists");

    // The rejected attempt must not have touched the existing record.
    let original_login = app
        .post_json(
            "/auth/login",
            &json!({ "email": email, "password": "hunter2!" }),
        )
        .await;
    assert_eq!(original_login.status().as_u16(), 200);

    let attempted_login = app
        .post_json(
            "/auth/login",
            &json!({ "email": email, "password": "other-password" }),
        )
        .await;
    assert_eq!(attempted_login.status().as_u16(), 401);
}

#[tokio::test]
async fn register_with_malformed_email_returns_400() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/auth/register",
            &json!({
                "email": "not-an-email",
                "password": "hunter2!",
                "firstName": "Amira",
                "lastName": "Haddad",
                "age": 28,
                "image": "https://example.com/amira.png",
            }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn register_with_missing_fields_returns_400() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/auth/register", &json!({ "email": random_email() }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn register_accepts_a_short_password() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/auth/register",
            &json!({
                "email": random_email(),
                "password": "1",
                "firstName": "Amira",
                "lastName": "Haddad",
                "age": 28,
                "image": "https://example.com/amira.png",
            }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn register_with_empty_password_returns_400() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/auth/register",
            &json!({
                "email": random_email(),
                "password": "",
                "firstName": "Amira",
                "lastName": "Haddad",
                "age": 28,
                "image": "https://example.com/amira.png",
            }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn login_returns_a_token_and_the_user() {
    let app = TestApp::new().await;
    let email = random_email();
    let user_id = app.register_user(&email, "hunter2!").await;

    let response = app
        .post_json(
            "/auth/login",
            &json!({ "email": email, "password": "hunter2!" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = read_body(response).await;
    assert!(!body["accessToken"].as_str().unwrap_or_default().is_empty());
    assert_eq!(body["user"]["id"].as_i64(), Some(user_id));
    assert_eq!(body["user"]["email"], email.as_str());
}

#[tokio::test]
async fn login_with_wrong_password_returns_401() {
    let app = TestApp::new().await;
    let email = random_email();
    app.register_user(&email, "hunter2!").await;

    let response = app
        .post_json(
            "/auth/login",
            &json!({ "email": email, "password": "wrong-password" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(read_body(response).await["error"], "Invalid credentials");
}

#[tokio::test]
async fn login_with_unknown_email_reports_the_same_error_as_a_wrong_password() {
    let app = TestApp::new().await;
    let email = random_email();
    app.register_user(&email, "hunter2!").await;

    let wrong_password = app
        .post_json(
            "/auth/login",
            &json!({ "email": email, "password": "wrong-password" }),
        )
        .await;
    let unknown_email = app
        .post_json(
            "/auth/login",
            &json!({ "email": random_email(), "password": "hunter2!" }),
        )
        .await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_email.status().as_u16(), 401);

    let wrong_password_body = read_body(wrong_password).await;
    let unknown_email_body = read_body(unknown_email).await;
    assert_eq!(wrong_password_body["error"], unknown_email_body["error"]);
}

#[tokio::test]
async fn logout_acknowledges_the_authenticated_user() {
    let app = TestApp::new().await;
    let email = random_email();
    let user_id = app.register_user(&email, "hunter2!").await;

    let login = app
        .post_json(
            "/auth/login",
            &json!({ "email": email, "password": "hunter2!" }),
        )
        .await;
    let token = login
        .json::<TokenBody>()
        .await
        .expect("Failed to parse login response")
        .access_token;

    let response = app.post_logout(&token).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        read_body(response).await["message"],
        format!("User with ID {user_id} has been logged out successfully")
    );
}

#[tokio::test]
async fn logout_without_a_token_returns_401() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/auth/logout", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn logout_with_an_invalid_token_returns_401() {
    let app = TestApp::new().await;

    let response = app.post_logout("not-a-real-token").await;

    assert_eq!(response.status().as_u16(), 401);
    // The body never echoes the validation failure detail.
    assert_eq!(read_body(response).await["error"], "Invalid token");
}

#[tokio::test]
async fn reset_password_invalidates_the_old_password() {
    let app = TestApp::new().await;
    let email = random_email();
    app.register_user(&email, "old-password").await;

    let reset = app
        .post_json(
            "/auth/reset-password",
            &json!({ "email": email, "newPassword": "new-password" }),
        )
        .await;
    assert_eq!(reset.status().as_u16(), 200);
    assert_eq!(
        read_body(reset).await["message"],
        "Password reset successfully"
    );

    let old_login = app
        .post_json(
            "/auth/login",
            &json!({ "email": email, "password": "old-password" }),
        )
        .await;
    assert_eq!(old_login.status().as_u16(), 401);

    let new_login = app
        .post_json(
            "/auth/login",
            &json!({ "email": email, "password": "new-password" }),
        )
        .await;
    assert_eq!(new_login.status().as_u16(), 200);
}

#[tokio::test]
async fn reset_password_for_an_unknown_email_returns_404() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/auth/reset-password",
            &json!({ "email": random_email(), "newPassword": "new-password" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(read_body(response).await["error"], "User not found");
}
