use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

use super::email::Email;
use super::password::Password;

#[derive(Debug, Error, PartialEq)]
pub enum UserError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password cannot be empty")]
    EmptyPassword,
}

/// A registered user as stored and returned by the API.
///
/// The password hash lives in the user store and never appears here.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Manual impl because the email is a Secret and must be exposed explicitly.
impl Serialize for User {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("User", 8)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("email", self.email.as_ref().expose_secret())?;
        state.serialize_field("firstName", &self.first_name)?;
        state.serialize_field("lastName", &self.last_name)?;
        state.serialize_field("age", &self.age)?;
        state.serialize_field("image", &self.image)?;
        state.serialize_field("createdAt", &self.created_at)?;
        state.serialize_field("updatedAt", &self.updated_at)?;
        state.end()
    }
}

/// A validated registration, ready to be persisted by a user store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password: Password,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub image: String,
}
