use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use souq_core::{NewProduct, Price, Product, ProductPatch, ProductStore, ProductStoreError};
use sqlx::{Pool, Postgres};

/// Internal row type for `products` queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: Decimal,
    image_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = ProductStoreError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let price = Price::try_from(row.price)
            .map_err(|e| ProductStoreError::UnexpectedError(format!("Invalid price in database: {e}")))?;

        Ok(Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price,
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Clone)]
pub struct PostgresProductStore {
    pool: sqlx::PgPool,
}

impl PostgresProductStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresProductStore { pool }
    }
}

#[async_trait::async_trait]
impl ProductStore for PostgresProductStore {
    #[tracing::instrument(name = "Adding product to PostgreSQL", skip_all)]
    async fn add_product(&self, new_product: NewProduct) -> Result<Product, ProductStoreError> {
        let query = sqlx::query_as::<_, ProductRow>(
            r#"
                INSERT INTO products (name, description, price, image_url)
                VALUES ($1, $2, $3, $4)
                RETURNING id, name, description, price, image_url, created_at, updated_at
            "#,
        )
        .bind(new_product.name)
        .bind(new_product.description)
        .bind(new_product.price.as_decimal())
        .bind(new_product.image_url);

        let row = query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ProductStoreError::UnexpectedError(e.to_string()))?;

        row.try_into()
    }

    #[tracing::instrument(name = "Listing products from PostgreSQL", skip_all)]
    async fn get_all_products(&self) -> Result<Vec<Product>, ProductStoreError> {
        let query = sqlx::query_as::<_, ProductRow>(
            r#"
                SELECT id, name, description, price, image_url, created_at, updated_at
                FROM products
                ORDER BY id
            "#,
        );

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ProductStoreError::UnexpectedError(e.to_string()))?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    #[tracing::instrument(name = "Retrieving product from PostgreSQL", skip_all)]
    async fn get_product(&self, product_id: i64) -> Result<Product, ProductStoreError> {
        let query = sqlx::query_as::<_, ProductRow>(
            r#"
                SELECT id, name, description, price, image_url, created_at, updated_at
                FROM products
                WHERE id = $1
            "#,
        )
        .bind(product_id);

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ProductStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(ProductStoreError::ProductNotFound);
        };

        row.try_into()
    }

    #[tracing::instrument(name = "Updating product in PostgreSQL", skip_all)]
    async fn update_product(
        &self,
        product_id: i64,
        patch: ProductPatch,
    ) -> Result<Product, ProductStoreError> {
        let query = sqlx::query_as::<_, ProductRow>(
            r#"
                UPDATE products
                SET name = COALESCE($2, name),
                    description = COALESCE($3, description),
                    price = COALESCE($4, price),
                    image_url = COALESCE($5, image_url),
                    updated_at = now()
                WHERE id = $1
                RETURNING id, name, description, price, image_url, created_at, updated_at
            "#,
        )
        .bind(product_id)
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.price.map(|p| p.as_decimal()))
        .bind(patch.image_url);

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ProductStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(ProductStoreError::ProductNotFound);
        };

        row.try_into()
    }

    #[tracing::instrument(name = "Deleting product from PostgreSQL", skip_all)]
    async fn delete_product(&self, product_id: i64) -> Result<(), ProductStoreError> {
        let query = sqlx::query(
            r#"
                DELETE FROM products
                WHERE id = $1
            "#,
        )
        .bind(product_id);

        let result = query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return ProductStoreError::ProductInUse;
                }
            }
            ProductStoreError::UnexpectedError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(ProductStoreError::ProductNotFound);
        }

        Ok(())
    }
}
