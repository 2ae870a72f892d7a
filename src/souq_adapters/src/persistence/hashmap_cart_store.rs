use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use souq_core::{CartLine, CartLineWithProduct, CartStore, CartStoreError, Email, Product, Quantity};
use tokio::sync::RwLock;

use super::hashmap_user_store::StoredUser;
use super::{HashMapProductStore, HashMapUserStore};

/// In-memory cart store. Shares its maps with the user and product stores
/// it is built from, so a write sees the same users and products the rest
/// of the app does. Lock order is users, then products, then cart lines.
#[derive(Clone)]
pub struct HashMapCartStore {
    lines: Arc<RwLock<HashMap<(i64, i64), CartLine>>>,
    users: Arc<RwLock<HashMap<Email, StoredUser>>>,
    products: Arc<RwLock<HashMap<i64, Product>>>,
    next_id: Arc<AtomicI64>,
}

impl HashMapCartStore {
    pub fn new(user_store: &HashMapUserStore, product_store: &HashMapProductStore) -> Self {
        Self {
            lines: product_store.cart_lines.clone(),
            users: user_store.users.clone(),
            products: product_store.products.clone(),
            next_id: Arc::default(),
        }
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[async_trait::async_trait]
impl CartStore for HashMapCartStore {
    async fn upsert_line(
        &self,
        user_id: i64,
        product_id: i64,
        quantity: Quantity,
    ) -> Result<CartLine, CartStoreError> {
        let users = self.users.read().await;
        let user_exists = users.values().any(|stored| stored.user.id == user_id);
        drop(users);

        let products = self.products.read().await;
        if !user_exists || !products.contains_key(&product_id) {
            return Err(CartStoreError::UserOrProductNotFound);
        }

        // Keep the products lock so a concurrent delete cannot slip in
        // between the check and the insert.
        let mut lines = self.lines.write().await;
        let now = Utc::now();
        match lines.entry((user_id, product_id)) {
            Entry::Occupied(mut entry) => {
                let line = entry.get_mut();
                line.quantity += quantity.get();
                line.updated_at = now;
                Ok(line.clone())
            }
            Entry::Vacant(entry) => {
                let line = CartLine {
                    id: self.next_id(),
                    user_id,
                    product_id,
                    quantity: quantity.get(),
                    created_at: now,
                    updated_at: now,
                };
                Ok(entry.insert(line).clone())
            }
        }
    }

    async fn remove_line(
        &self,
        user_id: i64,
        product_id: i64,
    ) -> Result<CartLine, CartStoreError> {
        let mut lines = self.lines.write().await;
        lines
            .remove(&(user_id, product_id))
            .ok_or(CartStoreError::LineNotFound)
    }

    async fn get_cart(&self, user_id: i64) -> Result<Vec<CartLineWithProduct>, CartStoreError> {
        let products = self.products.read().await;
        let lines = self.lines.read().await;

        let mut cart = lines
            .values()
            .filter(|line| line.user_id == user_id)
            .map(|line| {
                let product = products.get(&line.product_id).cloned().ok_or_else(|| {
                    CartStoreError::UnexpectedError(format!(
                        "Cart references missing product {}",
                        line.product_id
                    ))
                })?;
                Ok(CartLineWithProduct {
                    line: line.clone(),
                    product,
                })
            })
            .collect::<Result<Vec<_>, CartStoreError>>()?;

        cart.sort_by_key(|entry| entry.line.id);
        Ok(cart)
    }
}
