use serde_json::json;

use crate::helpers::{TestApp, random_email, read_body};

#[tokio::test]
async fn add_to_cart_creates_a_line_with_the_requested_quantity() {
    let app = TestApp::new().await;
    let user_id = app.register_user(&random_email(), "hunter2!").await;
    let product_id = app.create_product("Keyboard", "99.90").await;

    let response = app
        .post_json(
            "/cart/add",
            &json!({ "userId": user_id, "productId": product_id, "quantity": 3 }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body = read_body(response).await;
    assert_eq!(body["userId"].as_i64(), Some(user_id));
    assert_eq!(body["productId"].as_i64(), Some(product_id));
    assert_eq!(body["quantity"].as_i64(), Some(3));
}

#[tokio::test]
async fn adding_the_same_product_again_accumulates_the_quantity() {
    let app = TestApp::new().await;
    let user_id = app.register_user(&random_email(), "hunter2!").await;
    let product_id = app.create_product("Keyboard", "99.90").await;

    let first = app
        .post_json(
            "/cart/add",
            &json!({ "userId": user_id, "productId": product_id, "quantity": 3 }),
        )
        .await;
    let first_body = read_body(first).await;

    let second = app
        .post_json(
            "/cart/add",
            &json!({ "userId": user_id, "productId": product_id, "quantity": 2 }),
        )
        .await;

    assert_eq!(second.status().as_u16(), 201);
    let second_body = read_body(second).await;
    assert_eq!(second_body["quantity"].as_i64(), Some(5));
    assert_eq!(second_body["id"], first_body["id"]);
}

#[tokio::test]
async fn add_to_cart_with_unknown_product_returns_404() {
    let app = TestApp::new().await;
    let user_id = app.register_user(&random_email(), "hunter2!").await;

    let response = app
        .post_json(
            "/cart/add",
            &json!({ "userId": user_id, "productId": 999, "quantity": 1 }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(read_body(response).await["error"], "Product not found");
}

#[tokio::test]
async fn add_to_cart_with_unknown_user_returns_404() {
    let app = TestApp::new().await;
    let product_id = app.create_product("Keyboard", "99.90").await;

    let response = app
        .post_json(
            "/cart/add",
            &json!({ "userId": 999, "productId": product_id, "quantity": 1 }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(
        read_body(response).await["error"],
        "User or product not found"
    );
}

#[tokio::test]
async fn add_to_cart_with_a_non_positive_quantity_returns_400() {
    let app = TestApp::new().await;
    let user_id = app.register_user(&random_email(), "hunter2!").await;
    let product_id = app.create_product("Keyboard", "99.90").await;

    let zero = app
        .post_json(
            "/cart/add",
            &json!({ "userId": user_id, "productId": product_id, "quantity": 0 }),
        )
        .await;
    assert_eq!(zero.status().as_u16(), 400);

    let negative = app
        .post_json(
            "/cart/add",
            &json!({ "userId": user_id, "productId": product_id, "quantity": -2 }),
        )
        .await;
    assert_eq!(negative.status().as_u16(), 400);
}

#[tokio::test]
async fn get_cart_returns_lines_joined_with_their_products() {
    let app = TestApp::new().await;
    let user_id = app.register_user(&random_email(), "hunter2!").await;
    let keyboard = app.create_product("Keyboard", "99.90").await;
    let mouse = app.create_product("Mouse", "19.99").await;

    app.post_json(
        "/cart/add",
        &json!({ "userId": user_id, "productId": keyboard, "quantity": 1 }),
    )
    .await;
    app.post_json(
        "/cart/add",
        &json!({ "userId": user_id, "productId": mouse, "quantity": 2 }),
    )
    .await;

    let response = app.get(&format!("/cart/{user_id}")).await;

    assert_eq!(response.status().as_u16(), 200);
    let body = read_body(response).await;
    let lines = body.as_array().expect("Expected a JSON array");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["productId"].as_i64(), Some(keyboard));
    assert_eq!(lines[0]["product"]["name"], "Keyboard");
    assert_eq!(lines[1]["product"]["name"], "Mouse");
    assert_eq!(lines[1]["quantity"].as_i64(), Some(2));
}

#[tokio::test]
async fn get_cart_only_returns_the_requested_users_lines() {
    let app = TestApp::new().await;
    let first_user = app.register_user(&random_email(), "hunter2!").await;
    let second_user = app.register_user(&random_email(), "hunter2!").await;
    let product_id = app.create_product("Keyboard", "99.90").await;

    app.post_json(
        "/cart/add",
        &json!({ "userId": first_user, "productId": product_id, "quantity": 1 }),
    )
    .await;

    let response = app.get(&format!("/cart/{second_user}")).await;

    assert_eq!(response.status().as_u16(), 200);
    let body = read_body(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn remove_from_cart_returns_the_removed_line() {
    let app = TestApp::new().await;
    let user_id = app.register_user(&random_email(), "hunter2!").await;
    let product_id = app.create_product("Keyboard", "99.90").await;

    app.post_json(
        "/cart/add",
        &json!({ "userId": user_id, "productId": product_id, "quantity": 2 }),
    )
    .await;

    let response = app
        .delete(&format!("/cart/remove/{user_id}/{product_id}"))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = read_body(response).await;
    assert_eq!(body["productId"].as_i64(), Some(product_id));
    assert_eq!(body["quantity"].as_i64(), Some(2));

    let cart = read_body(app.get(&format!("/cart/{user_id}")).await).await;
    assert_eq!(cart.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn remove_from_cart_for_a_missing_line_returns_404() {
    let app = TestApp::new().await;
    let user_id = app.register_user(&random_email(), "hunter2!").await;
    let product_id = app.create_product("Keyboard", "99.90").await;

    let response = app
        .delete(&format!("/cart/remove/{user_id}/{product_id}"))
        .await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(
        read_body(response).await["error"],
        "Product not found in cart"
    );
}
