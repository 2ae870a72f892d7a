use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use souq_core::{Email, NewUser, Password, User, UserStore, UserStoreError};
use tokio::sync::RwLock;

/// A user as held in memory. Passwords stay plaintext here, this store
/// exists for tests and local runs only.
#[derive(Debug, Clone)]
pub(crate) struct StoredUser {
    pub(crate) user: User,
    pub(crate) password: Password,
}

/// In-memory user store. [`super::HashMapCartStore`] shares the user map so
/// a cart write can see which users exist, the way the database foreign
/// keys do.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    pub(crate) users: Arc<RwLock<HashMap<Email, StoredUser>>>,
    next_id: Arc<AtomicI64>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&new_user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let now = Utc::now();
        let user = User {
            id: self.next_id(),
            email: new_user.email.clone(),
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            age: new_user.age,
            image: new_user.image,
            created_at: now,
            updated_at: now,
        };
        users.insert(
            new_user.email,
            StoredUser {
                user: user.clone(),
                password: new_user.password,
            },
        );

        Ok(user)
    }

    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .get(email)
            .map(|stored| stored.user.clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_user_by_id(&self, user_id: i64) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .values()
            .find(|stored| stored.user.id == user_id)
            .map(|stored| stored.user.clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn authenticate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        let stored = users.get(email).ok_or(UserStoreError::UserNotFound)?;

        if &stored.password != password {
            return Err(UserStoreError::IncorrectPassword);
        }

        Ok(stored.user.clone())
    }

    async fn set_new_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let stored = users.get_mut(email).ok_or(UserStoreError::UserNotFound)?;

        stored.password = new_password;
        stored.user.updated_at = Utc::now();
        Ok(())
    }
}
