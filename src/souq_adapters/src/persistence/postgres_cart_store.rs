use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use souq_core::{CartLine, CartLineWithProduct, CartStore, CartStoreError, Price, Product, Quantity};
use sqlx::{Pool, Postgres};

/// Internal row type for `cart_lines` queries.
#[derive(Debug, sqlx::FromRow)]
struct CartLineRow {
    id: i64,
    user_id: i64,
    product_id: i64,
    quantity: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CartLineRow> for CartLine {
    fn from(row: CartLineRow) -> Self {
        CartLine {
            id: row.id,
            user_id: row.user_id,
            product_id: row.product_id,
            quantity: row.quantity,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Internal row type for cart lines joined with their product.
#[derive(Debug, sqlx::FromRow)]
struct CartLineWithProductRow {
    id: i64,
    user_id: i64,
    product_id: i64,
    quantity: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    product_name: String,
    product_description: String,
    product_price: Decimal,
    product_image_url: String,
    product_created_at: DateTime<Utc>,
    product_updated_at: DateTime<Utc>,
}

impl TryFrom<CartLineWithProductRow> for CartLineWithProduct {
    type Error = CartStoreError;

    fn try_from(row: CartLineWithProductRow) -> Result<Self, Self::Error> {
        let price = Price::try_from(row.product_price)
            .map_err(|e| CartStoreError::UnexpectedError(format!("Invalid price in database: {e}")))?;

        Ok(CartLineWithProduct {
            line: CartLine {
                id: row.id,
                user_id: row.user_id,
                product_id: row.product_id,
                quantity: row.quantity,
                created_at: row.created_at,
                updated_at: row.updated_at,
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
pub struct PostgresCartStore {
    pool: sqlx::PgPool,
}

impl PostgresCartStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresCartStore { pool }
    }
}

#[async_trait::async_trait]
impl CartStore for PostgresCartStore {
    #[tracing::instrument(name = "Upserting cart line in PostgreSQL", skip_all)]
    async fn upsert_line(
        &self,
        user_id: i64,
        product_id: i64,
        quantity: Quantity,
    ) -> Result<CartLine, CartStoreError> {
        // Single statement so concurrent adds for the same (user, product)
        // cannot lose an increment.
        let query = sqlx::query_as::<_, CartLineRow>(
            r#"
                INSERT INTO cart_lines (user_id, product_id, quantity)
                VALUES ($1, $2, $3)
                ON CONFLICT (user_id, product_id)
                DO UPDATE SET quantity = cart_lines.quantity + EXCLUDED.quantity,
                              updated_at = now()
                RETURNING id, user_id, product_id, quantity, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .bind(quantity.get());

        let row = query.fetch_one(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return CartStoreError::UserOrProductNotFound;
                }
            }
            CartStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(row.into())
    }

    #[tracing::instrument(name = "Removing cart line from PostgreSQL", skip_all)]
    async fn remove_line(
        &self,
        user_id: i64,
        product_id: i64,
    ) -> Result<CartLine, CartStoreError> {
        let query = sqlx::query_as::<_, CartLineRow>(
            r#"
                DELETE FROM cart_lines
                WHERE user_id = $1 AND product_id = $2
                RETURNING id, user_id, product_id, quantity, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(product_id);

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CartStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(CartStoreError::LineNotFound);
        };

        Ok(row.into())
    }

    #[tracing::instrument(name = "Retrieving cart from PostgreSQL", skip_all)]
    async fn get_cart(&self, user_id: i64) -> Result<Vec<CartLineWithProduct>, CartStoreError> {
        let query = sqlx::query_as::<_, CartLineWithProductRow>(
            r#"
                SELECT c.id, c.user_id, c.product_id, c.quantity, c.created_at, c.updated_at,
                       p.name AS product_name,
                       p.description AS product_description,
                       p.price AS product_price,
                       p.image_url AS product_image_url,
                       p.created_at AS product_created_at,
                       p.updated_at AS product_updated_at
                FROM cart_lines c
                JOIN products p ON p.id = c.product_id
                WHERE c.user_id = $1
                ORDER BY c.id
            "#,
        )
        .bind(user_id);

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CartStoreError::UnexpectedError(e.to_string()))?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
