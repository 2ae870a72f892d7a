use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// A plaintext password on its way into a store, where it gets hashed.
///
/// Any non-empty password is accepted. Never logged or serialized.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(password: Secret<String>) -> Result<Self, UserError> {
        if password.expose_secret().is_empty() {
            Err(UserError::EmptyPassword)
        } else {
            Ok(Self(password))
        }
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(password: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(password)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}
