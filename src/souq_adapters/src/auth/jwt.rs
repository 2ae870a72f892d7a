use axum::http::{HeaderMap, header};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize, ser::SerializeStruct};
use souq_core::User;
use thiserror::Error;

use crate::config::settings::JwtSettings;

#[derive(Clone)]
pub struct JwtAuthConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtAuthConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

impl From<JwtSettings> for JwtAuthConfig {
    fn from(settings: JwtSettings) -> Self {
        Self {
            jwt_secret: settings.secret,
            token_ttl_in_seconds: settings.time_to_live,
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenAuthError {
    #[error("Missing token")]
    MissingToken,
    #[error("Token error: {0}")]
    TokenError(jsonwebtoken::errors::Error),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

// Create JWT access token for an authenticated user
pub fn generate_auth_token(user: &User, config: &JwtAuthConfig) -> Result<String, TokenAuthError> {
    let delta = chrono::Duration::try_seconds(config.token_ttl_in_seconds).ok_or(
        TokenAuthError::UnexpectedError("Failed to create auth token duration".to_string()),
    )?;

    // Create JWT expiration time
    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(TokenAuthError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    // Cast exp to a usize, which is what Claims expects
    let exp: usize = exp
        .try_into()
        .map_err(|_| TokenAuthError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;

    let claims = Claims {
        sub: user.id,
        email: user.email.as_ref().clone(),
        exp,
    };

    encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(config.as_bytes()),
    )
    .map_err(TokenAuthError::TokenError)
}

// Check if a JWT access token is valid by decoding it using the JWT secret
pub fn validate_auth_token(token: &str, config: &JwtAuthConfig) -> Result<Claims, TokenAuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(TokenAuthError::TokenError)
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, TokenAuthError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or(TokenAuthError::MissingToken)?;
    let value = header.to_str().map_err(|_| TokenAuthError::MissingToken)?;
    value
        .strip_prefix("Bearer ")
        .ok_or(TokenAuthError::MissingToken)
}

#[derive(Debug, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    pub email: Secret<String>,
    pub exp: usize,
}

impl Serialize for Claims {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Claims", 3)?;
        state.serialize_field("sub", &self.sub)?;
        state.serialize_field("email", &self.email.expose_secret())?;
        state.serialize_field("exp", &self.exp)?;
        state.end()
    }
}
