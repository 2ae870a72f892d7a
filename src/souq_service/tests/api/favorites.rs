use serde_json::json;

use crate::helpers::{TestApp, random_email, read_body};

#[tokio::test]
async fn add_favorite_returns_the_new_entry() {
    let app = TestApp::new().await;
    let user_id = app.register_user(&random_email(), "hunter2!").await;
    let product_id = app.create_product("Keyboard", "99.90").await;

    let response = app
        .post_json(
            "/favorites/add",
            &json!({ "userId": user_id, "productId": product_id }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body = read_body(response).await;
    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["userId"].as_i64(), Some(user_id));
    assert_eq!(body["productId"].as_i64(), Some(product_id));
}

#[tokio::test]
async fn favoriting_the_same_product_twice_returns_409() {
    let app = TestApp::new().await;
    let user_id = app.register_user(&random_email(), "hunter2!").await;
    let product_id = app.create_product("Keyboard", "99.90").await;

    let first = app
        .post_json(
            "/favorites/add",
            &json!({ "userId": user_id, "productId": product_id }),
        )
        .await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app
        .post_json(
            "/favorites/add",
            &json!({ "userId": user_id, "productId": product_id }),
        )
        .await;

    assert_eq!(second.status().as_u16(), 409);
    assert_eq!(
        read_body(second).await["error"],
        "Product is already in favorites"
    );
}

#[tokio::test]
async fn add_favorite_with_unknown_user_returns_404() {
    let app = TestApp::new().await;
    let product_id = app.create_product("Keyboard", "99.90").await;

    let response = app
        .post_json(
            "/favorites/add",
            &json!({ "userId": 999, "productId": product_id }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(
        read_body(response).await["error"],
        "User or product not found"
    );
}

#[tokio::test]
async fn add_favorite_with_unknown_product_returns_404() {
    let app = TestApp::new().await;
    let user_id = app.register_user(&random_email(), "hunter2!").await;

    let response = app
        .post_json(
            "/favorites/add",
            &json!({ "userId": user_id, "productId": 999 }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(
        read_body(response).await["error"],
        "User or product not found"
    );
}

#[tokio::test]
async fn list_favorites_returns_entries_joined_with_their_products() {
    let app = TestApp::new().await;
    let user_id = app.register_user(&random_email(), "hunter2!").await;
    let keyboard = app.create_product("Keyboard", "99.90").await;
    let mouse = app.create_product("Mouse", "19.99").await;

    app.post_json(
        "/favorites/add",
        &json!({ "userId": user_id, "productId": keyboard }),
    )
    .await;
    app.post_json(
        "/favorites/add",
        &json!({ "userId": user_id, "productId": mouse }),
    )
    .await;

    let response = app.get(&format!("/favorites/{user_id}")).await;

    assert_eq!(response.status().as_u16(), 200);
    let body = read_body(response).await;
    let favorites = body.as_array().expect("Expected a JSON array");
    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites[0]["product"]["name"], "Keyboard");
    assert_eq!(favorites[1]["product"]["name"], "Mouse");
}

#[tokio::test]
async fn list_favorites_for_a_user_without_favorites_returns_an_empty_array() {
    let app = TestApp::new().await;
    let user_id = app.register_user(&random_email(), "hunter2!").await;

    let response = app.get(&format!("/favorites/{user_id}")).await;

    assert_eq!(response.status().as_u16(), 200);
    let body = read_body(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn remove_favorite_returns_the_removed_entry() {
    let app = TestApp::new().await;
    let user_id = app.register_user(&random_email(), "hunter2!").await;
    let product_id = app.create_product("Keyboard", "99.90").await;

    app.post_json(
        "/favorites/add",
        &json!({ "userId": user_id, "productId": product_id }),
    )
    .await;

    let response = app
        .delete(&format!("/favorites/remove/{user_id}/{product_id}"))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = read_body(response).await;
    assert_eq!(body["productId"].as_i64(), Some(product_id));

    let favorites = read_body(app.get(&format!("/favorites/{user_id}")).await).await;
    assert_eq!(favorites.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn remove_favorite_for_a_missing_entry_returns_404() {
    let app = TestApp::new().await;
    let user_id = app.register_user(&random_email(), "hunter2!").await;
    let product_id = app.create_product("Keyboard", "99.90").await;

    let response = app
        .delete(&format!("/favorites/remove/{user_id}/{product_id}"))
        .await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(
        read_body(response).await["error"],
        "Product not found in favorites"
    );
}
