use souq_core::{NewUser, User, UserStore, UserStoreError};

/// Register use case - creates a new user account
pub struct RegisterUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> RegisterUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    /// Execute the register use case
    ///
    /// # Arguments
    /// * `new_user` - Validated registration data
    ///
    /// # Returns
    /// The stored user, or UserStoreError if the email is already taken
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        self.user_store.add_user(new_user).await
    }
}
