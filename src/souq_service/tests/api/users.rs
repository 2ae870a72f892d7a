use crate::helpers::{TestApp, random_email, read_body};

#[tokio::test]
async fn get_user_returns_the_stored_user() {
    let app = TestApp::new().await;
    let email = random_email();
    let user_id = app.register_user(&email, "hunter2!").await;

    let response = app.get(&format!("/users/{user_id}")).await;

    assert_eq!(response.status().as_u16(), 200);
    let body = read_body(response).await;
    assert_eq!(body["id"].as_i64(), Some(user_id));
    assert_eq!(body["email"], email.as_str());
    assert_eq!(body["firstName"], "Test");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn get_user_with_unknown_id_returns_404() {
    let app = TestApp::new().await;

    let response = app.get("/users/999").await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(read_body(response).await["error"], "User not found");
}
