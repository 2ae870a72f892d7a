use souq_core::{Email, Password, UserStore, UserStoreError};

/// Reset password use case - replaces a user's password
pub struct ResetPasswordUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> ResetPasswordUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    /// Execute the reset password use case
    ///
    /// # Arguments
    /// * `email` - Email of the account to reset
    /// * `new_password` - The new password to set
    ///
    /// # Returns
    /// Ok(()) on success, or UserStoreError if no account has this email
    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip(self, new_password))]
    pub async fn execute(&self, email: Email, new_password: Password) -> Result<(), UserStoreError> {
        self.user_store.set_new_password(&email, new_password).await
    }
}
