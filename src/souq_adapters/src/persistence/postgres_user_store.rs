use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use souq_core::{Email, NewUser, Password, User, UserStore, UserStoreError};
use sqlx::{Pool, Postgres};

/// Internal row type for `users` queries. The password hash never leaves
/// this module.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    age: i32,
    image: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::try_from(Secret::from(row.email))
            .map_err(|e| UserStoreError::UnexpectedError(format!("Invalid email in database: {e}")))?;

        Ok(User {
            id: row.id,
            email,
            first_name: row.first_name,
            last_name: row.last_name,
            age: row.age,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: sqlx::PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let password_hash = compute_password_hash(new_user.password)
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let query = sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO users (email, password_hash, first_name, last_name, age, image)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, email, password_hash, first_name, last_name, age, image,
                          created_at, updated_at
            "#,
        )
        .bind(new_user.email.as_ref().expose_secret())
        .bind(password_hash.expose_secret())
        .bind(new_user.first_name)
        .bind(new_user.last_name)
        .bind(new_user.age)
        .bind(new_user.image);

        let row = query.fetch_one(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        row.try_into()
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        let query = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, email, password_hash, first_name, last_name, age, image,
                       created_at, updated_at
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret());

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        row.try_into()
    }

    #[tracing::instrument(name = "Retrieving user by id from PostgreSQL", skip_all)]
    async fn get_user_by_id(&self, user_id: i64) -> Result<User, UserStoreError> {
        let query = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, email, password_hash, first_name, last_name, age, image,
                       created_at, updated_at
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(user_id);

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        row.try_into()
    }

    #[tracing::instrument(name = "Validating user credentials in PostgreSQL", skip_all)]
    async fn authenticate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        let query = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, email, password_hash, first_name, last_name, age, image,
                       created_at, updated_at
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret());

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        verify_password_hash(Secret::from(row.password_hash.clone()), password.clone())
            .await
            .map_err(|_| UserStoreError::IncorrectPassword)?;

        row.try_into()
    }

    #[tracing::instrument(name = "Set new password", skip_all)]
    async fn set_new_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), UserStoreError> {
        let password_hash = compute_password_hash(new_password)
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let query = sqlx::query(
            r#"
                UPDATE users
                SET password_hash = $1, updated_at = now()
                WHERE email = $2
            "#,
        )
        .bind(password_hash.expose_secret())
        .bind(email.as_ref().expose_secret());

        let result = query
            .execute(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }
}

#[tracing::instrument(name = "Verify password hash", skip_all)]
async fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Password,
) -> Result<(), String> {
    let current_span: tracing::Span = tracing::Span::current();
    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash: PasswordHash<'_> =
                PasswordHash::new(expected_password_hash.expose_secret())
                    .map_err(|e| e.to_string())?;

            Argon2::new(
                Algorithm::Argon2id,
                Version::V0x13,
                Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
            )
            .verify_password(
                password_candidate.as_ref().expose_secret().as_bytes(),
                &expected_password_hash,
            )
            .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}

#[tracing::instrument(name = "Computing password hash", skip_all)]
async fn compute_password_hash(password: Password) -> Result<Secret<String>, String> {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            let hasher = Argon2::new(
                Algorithm::Argon2id,
                Version::V0x13,
                Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
            );
            hasher
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|h| Secret::from(h.to_string()))
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}
