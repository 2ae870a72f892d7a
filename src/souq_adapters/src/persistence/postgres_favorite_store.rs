use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use souq_core::{FavoriteEntry, FavoriteStore, FavoriteStoreError, FavoriteWithProduct, Price, Product};
use sqlx::{Pool, Postgres};

/// Internal row type for `favorite_entries` queries.
#[derive(Debug, sqlx::FromRow)]
struct FavoriteRow {
    id: i64,
    user_id: i64,
    product_id: i64,
    created_at: DateTime<Utc>,
}

impl From<FavoriteRow> for FavoriteEntry {
    fn from(row: FavoriteRow) -> Self {
        FavoriteEntry {
            id: row.id,
            user_id: row.user_id,
            product_id: row.product_id,
            created_at: row.created_at,
        }
    }
}

/// Internal row type for favorites joined with their product.
#[derive(Debug, sqlx::FromRow)]
struct FavoriteWithProductRow {
    id: i64,
    user_id: i64,
    product_id: i64,
    created_at: DateTime<Utc>,
    product_name: String,
    product_description: String,
    product_price: Decimal,
    product_image_url: String,
    product_created_at: DateTime<Utc>,
    product_updated_at: DateTime<Utc>,
}

impl TryFrom<FavoriteWithProductRow> for FavoriteWithProduct {
    type Error = FavoriteStoreError;

    fn try_from(row: FavoriteWithProductRow) -> Result<Self, Self::Error> {
        let price = Price::try_from(row.product_price).map_err(|e| {
            FavoriteStoreError::UnexpectedError(format!("Invalid price in database: {e}"))
        })?;

        Ok(FavoriteWithProduct {
            entry: FavoriteEntry {
                id: row.id,
                user_id: row.user_id,
                product_id: row.product_id,
                created_at: row.created_at,
            },
            product: Product {
                id: row.product_id,
                name: row.product_name,
                description: row.product_description,
                price,
                image_url: row.product_image_url,
                created_at: row.product_created_at,
                updated_at: row.product_updated_at,
            },
        })
    }
}

#[derive(Clone)]
pub struct PostgresFavoriteStore {
    pool: sqlx::PgPool,
}

impl PostgresFavoriteStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresFavoriteStore { pool }
    }
}

#[async_trait::async_trait]
impl FavoriteStore for PostgresFavoriteStore {
    #[tracing::instrument(name = "Adding favorite to PostgreSQL", skip_all)]
    async fn add_favorite(
        &self,
        user_id: i64,
        product_id: i64,
    ) -> Result<FavoriteEntry, FavoriteStoreError> {
        let query = sqlx::query_as::<_, FavoriteRow>(
            r#"
                INSERT INTO favorite_entries (user_id, product_id)
                VALUES ($1, $2)
                RETURNING id, user_id, product_id, created_at
            "#,
        )
        .bind(user_id)
        .bind(product_id);

        let row = query.fetch_one(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return FavoriteStoreError::AlreadyFavorite;
                }
                if db_err.is_foreign_key_violation() {
                    return FavoriteStoreError::UserOrProductNotFound;
                }
            }
            FavoriteStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(row.into())
    }

    #[tracing::instrument(name = "Removing favorite from PostgreSQL", skip_all)]
    async fn remove_favorite(
        &self,
        user_id: i64,
        product_id: i64,
    ) -> Result<FavoriteEntry, FavoriteStoreError> {
        let query = sqlx::query_as::<_, FavoriteRow>(
            r#"
                DELETE FROM favorite_entries
                WHERE user_id = $1 AND product_id = $2
                RETURNING id, user_id, product_id, created_at
            "#,
        )
        .bind(user_id)
        .bind(product_id);

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| FavoriteStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(FavoriteStoreError::EntryNotFound);
        };

        Ok(row.into())
    }

    #[tracing::instrument(name = "Retrieving favorites from PostgreSQL", skip_all)]
    async fn get_favorites(
        &self,
        user_id: i64,
    ) -> Result<Vec<FavoriteWithProduct>, FavoriteStoreError> {
        let query = sqlx::query_as::<_, FavoriteWithProductRow>(
            r#"
                SELECT f.id, f.user_id, f.product_id, f.created_at,
                       p.name AS product_name,
                       p.description AS product_description,
                       p.price AS product_price,
                       p.image_url AS product_image_url,
                       p.created_at AS product_created_at,
                       p.updated_at AS product_updated_at
                FROM favorite_entries f
                JOIN products p ON p.id = f.product_id
                WHERE f.user_id = $1
                ORDER BY f.id
            "#,
        )
        .bind(user_id);

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| FavoriteStoreError::UnexpectedError(e.to_string()))?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
