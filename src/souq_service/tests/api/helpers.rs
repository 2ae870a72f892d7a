use secrecy::Secret;
use serde_json::{Value, json};
use souq_adapters::{
    auth::JwtAuthConfig,
    config::test,
    persistence::{HashMapCartStore, HashMapFavoriteStore, HashMapProductStore, HashMapUserStore},
};
use souq_service::ShopService;
use uuid::Uuid;

/// A shop service running on an ephemeral port, backed by in-memory stores.
pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let user_store = HashMapUserStore::default();
        let product_store = HashMapProductStore::default();
        let cart_store = HashMapCartStore::new(&user_store, &product_store);
        let favorite_store = HashMapFavoriteStore::new(&product_store);

        let auth_config = JwtAuthConfig {
            jwt_secret: Secret::new("test-jwt-secret".to_string()),
            token_ttl_in_seconds: 600,
        };

        let service = ShopService::new(
            user_store,
            product_store,
            cart_store,
            favorite_store,
            auth_config,
        );

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind to test address");
        let address = format!(
            "http://{}",
            listener.local_addr().expect("Failed to read local address")
        );

        tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.http_client
            .put(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.http_client
            .delete(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_logout(&self, token: &str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/auth/logout", self.address))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Registers a user through the API and returns their id.
    pub async fn register_user(&self, email: &str, password: &str) -> i64 {
        let response = self
            .post_json(
                "/auth/register",
                &json!({
                    "email": email,
                    "password": password,
                    "firstName": "Test",
                    "lastName": "User",
                    "age": 30,
                    "image": "https://example.com/avatar.png",
                }),
            )
            .await;
        assert_eq!(response.status().as_u16(), 201);

        read_body(response).await["user"]["id"]
            .as_i64()
            .expect("Registration response carried no user id")
    }

    /// Creates a product through the API and returns its id.
    pub async fn create_product(&self, name: &str, price: &str) -> i64 {
        let response = self
            .post_json(
                "/products",
                &json!({
                    "name": name,
                    "description": format!("{name} description"),
                    "price": price,
                    "imageUrl": "https://example.com/product.png",
                }),
            )
            .await;
        assert_eq!(response.status().as_u16(), 201);

        read_body(response).await["id"]
            .as_i64()
            .expect("Product response carried no id")
    }
}

pub fn random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

pub async fn read_body(response: reqwest::Response) -> Value {
    response
        .json::<Value>()
        .await
        .expect("Failed to parse response body as JSON")
}
