use souq_core::{User, UserStore, UserStoreError};

/// Get user use case - looks up a user's public profile by id
pub struct GetUserUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> GetUserUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "GetUserUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: i64) -> Result<User, UserStoreError> {
        self.user_store.get_user_by_id(user_id).await
    }
}
