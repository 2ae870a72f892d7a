pub mod jwt;

pub use jwt::{
    Claims, JwtAuthConfig, TokenAuthError, extract_bearer_token, generate_auth_token,
    validate_auth_token,
};
