use souq_core::{Email, Password, User, UserStore, UserStoreError};

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Login use case - handles user authentication
pub struct LoginUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> LoginUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `email` - User's email address
    /// * `password` - User's password
    ///
    /// # Returns
    /// The authenticated user, or LoginError when the credentials do not match
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<User, LoginError> {
        let user = self.user_store.authenticate_user(&email, &password).await?;

        Ok(user)
    }
}
