use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{delete, get, post},
};
use souq_adapters::{
    auth::JwtAuthConfig,
    config::AllowedOrigins,
    http::routes::{
        add_favorite, add_to_cart, create_product, delete_product, get_cart, get_product, get_user,
        list_favorites, list_products, login, logout, register, remove_favorite, remove_from_cart,
        reset_password, update_product,
    },
};
use souq_core::{CartStore, FavoriteStore, ProductStore, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Main shop service that provides the user, product, cart and favorite routes
pub struct ShopService {
    router: Router,
}

impl ShopService {
    /// Create a new ShopService with the provided stores and JWT configuration
    ///
    /// # Arguments
    /// * `user_store` - Store for user accounts (must be Clone)
    /// * `product_store` - Store for the product catalog (must be Clone)
    /// * `cart_store` - Store for cart lines (must be Clone)
    /// * `favorite_store` - Store for favorite entries (must be Clone)
    /// * `auth_config` - Secret and lifetime for issued access tokens
    ///
    /// # Note on Architecture
    /// Stores implement Clone via internal Arc or pool handles for thread-safe
    /// sharing. Each route is given its specific state requirements, avoiding
    /// unnecessary cloning.
    pub fn new<U, P, C, F>(
        user_store: U,
        product_store: P,
        cart_store: C,
        favorite_store: F,
        auth_config: JwtAuthConfig,
    ) -> Self
    where
        U: UserStore + Clone + 'static,
        P: ProductStore + Clone + 'static,
        C: CartStore + Clone + 'static,
        F: FavoriteStore + Clone + 'static,
    {
        let router = Router::new()
            // Register only needs the user store
            .route("/auth/register", post(register::<U>))
            .with_state(user_store.clone())
            // Login needs the user store and the token configuration
            .route("/auth/login", post(login::<U>))
            .with_state((user_store.clone(), auth_config.clone()))
            // Logout only validates the presented token
            .route("/auth/logout", post(logout))
            .with_state(auth_config)
            // Reset password only needs the user store
            .route("/auth/reset-password", post(reset_password::<U>))
            .with_state(user_store.clone())
            .route("/users/{user_id}", get(get_user::<U>))
            .with_state(user_store.clone())
            .route(
                "/products",
                post(create_product::<P>).get(list_products::<P>),
            )
            .with_state(product_store.clone())
            .route(
                "/products/{product_id}",
                get(get_product::<P>)
                    .put(update_product::<P>)
                    .delete(delete_product::<P>),
            )
            .with_state(product_store.clone())
            // Adding to the cart checks the product before writing the line
            .route("/cart/add", post(add_to_cart::<P, C>))
            .with_state((product_store.clone(), cart_store.clone()))
            .route(
                "/cart/remove/{user_id}/{product_id}",
                delete(remove_from_cart::<C>),
            )
            .with_state(cart_store.clone())
            .route("/cart/{user_id}", get(get_cart::<C>))
            .with_state(cart_store)
            // Favoriting checks both the user and the product
            .route("/favorites/add", post(add_favorite::<U, P, F>))
            .with_state((user_store, product_store, favorite_store.clone()))
            .route(
                "/favorites/remove/{user_id}/{product_id}",
                delete(remove_favorite::<F>),
            )
            .with_state(favorite_store.clone())
            .route("/favorites/{user_id}", get(list_favorites::<F>))
            .with_state(favorite_store);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the ShopService into a nested router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    ///
    /// # Returns
    /// An Axum Router that can be nested into another application
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the shop service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    ///
    /// # Returns
    /// Result indicating success or error
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Shop service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
