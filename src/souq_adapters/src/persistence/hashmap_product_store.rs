use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use souq_core::{
    CartLine, FavoriteEntry, NewProduct, Product, ProductPatch, ProductStore, ProductStoreError,
};
use tokio::sync::RwLock;

/// In-memory product store.
///
/// Also owns the cart line and favorite maps. [`super::HashMapCartStore`] and
/// [`super::HashMapFavoriteStore`] are constructed from this store and share
/// them, so product deletion sees live references the same way the database
/// foreign keys do. Lock order across the stores is products, then cart
/// lines, then favorites.
#[derive(Default, Clone)]
pub struct HashMapProductStore {
    pub(crate) products: Arc<RwLock<HashMap<i64, Product>>>,
    pub(crate) cart_lines: Arc<RwLock<HashMap<(i64, i64), CartLine>>>,
    pub(crate) favorites: Arc<RwLock<HashMap<(i64, i64), FavoriteEntry>>>,
    next_id: Arc<AtomicI64>,
}

impl HashMapProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[async_trait::async_trait]
impl ProductStore for HashMapProductStore {
    async fn add_product(&self, new_product: NewProduct) -> Result<Product, ProductStoreError> {
        let mut products = self.products.write().await;

        let now = Utc::now();
        let product = Product {
            id: self.next_id(),
            name: new_product.name,
            description: new_product.description,
            price: new_product.price,
            image_url: new_product.image_url,
            created_at: now,
            updated_at: now,
        };
        products.insert(product.id, product.clone());

        Ok(product)
    }

    async fn get_all_products(&self) -> Result<Vec<Product>, ProductStoreError> {
        let products = self.products.read().await;
        let mut all: Vec<Product> = products.values().cloned().collect();
        all.sort_by_key(|product| product.id);
        Ok(all)
    }

    async fn get_product(&self, product_id: i64) -> Result<Product, ProductStoreError> {
        let products = self.products.read().await;
        products
            .get(&product_id)
            .cloned()
            .ok_or(ProductStoreError::ProductNotFound)
    }

    async fn update_product(
        &self,
        product_id: i64,
        patch: ProductPatch,
    ) -> Result<Product, ProductStoreError> {
        let mut products = self.products.write().await;
        let product = products
            .get_mut(&product_id)
            .ok_or(ProductStoreError::ProductNotFound)?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(image_url) = patch.image_url {
            product.image_url = image_url;
        }
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    async fn delete_product(&self, product_id: i64) -> Result<(), ProductStoreError> {
        let mut products = self.products.write().await;
        if !products.contains_key(&product_id) {
            return Err(ProductStoreError::ProductNotFound);
        }

        let cart_lines = self.cart_lines.read().await;
        let referenced_by_cart = cart_lines.keys().any(|(_, id)| *id == product_id);
        drop(cart_lines);

        let favorites = self.favorites.read().await;
        let referenced_by_favorite = favorites.keys().any(|(_, id)| *id == product_id);
        drop(favorites);

        if referenced_by_cart || referenced_by_favorite {
            return Err(ProductStoreError::ProductInUse);
        }

        products.remove(&product_id);
        Ok(())
    }
}
