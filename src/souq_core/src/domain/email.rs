use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

/// A validated email address.
///
/// Wrapped in [`Secret`] so it is redacted from `Debug` output and logs.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn parse(email: Secret<String>) -> Result<Self, UserError> {
        if EMAIL_REGEX.is_match(email.expose_secret()) {
            Ok(Self(email))
        } else {
            Err(UserError::InvalidEmail)
        }
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = UserError;

    fn try_from(email: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(email)
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
