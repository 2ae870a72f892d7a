use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use souq_core::{FavoriteEntry, FavoriteStore, FavoriteStoreError, FavoriteWithProduct, Product};
use tokio::sync::RwLock;

use super::HashMapProductStore;

/// In-memory favorite store. Shares its maps with the product store it is
/// built from, see [`HashMapProductStore`].
#[derive(Clone)]
pub struct HashMapFavoriteStore {
    favorites: Arc<RwLock<HashMap<(i64, i64), FavoriteEntry>>>,
    products: Arc<RwLock<HashMap<i64, Product>>>,
    next_id: Arc<AtomicI64>,
}

impl HashMapFavoriteStore {
    pub fn new(product_store: &HashMapProductStore) -> Self {
        Self {
            favorites: product_store.favorites.clone(),
            products: product_store.products.clone(),
            next_id: Arc::default(),
        }
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[async_trait::async_trait]
impl FavoriteStore for HashMapFavoriteStore {
    async fn add_favorite(
        &self,
        user_id: i64,
        product_id: i64,
    ) -> Result<FavoriteEntry, FavoriteStoreError> {
        let products = self.products.read().await;
        if !products.contains_key(&product_id) {
            return Err(FavoriteStoreError::UserOrProductNotFound);
        }

        let mut favorites = self.favorites.write().await;
        match favorites.entry((user_id, product_id)) {
            Entry::Occupied(_) => Err(FavoriteStoreError::AlreadyFavorite),
            Entry::Vacant(entry) => {
                let favorite = FavoriteEntry {
                    id: self.next_id(),
                    user_id,
                    product_id,
                    created_at: Utc::now(),
                };
                Ok(entry.insert(favorite).clone())
            }
        }
    }

    async fn remove_favorite(
        &self,
        user_id: i64,
        product_id: i64,
    ) -> Result<FavoriteEntry, FavoriteStoreError> {
        let mut favorites = self.favorites.write().await;
        favorites
            .remove(&(user_id, product_id))
            .ok_or(FavoriteStoreError::EntryNotFound)
    }

    async fn get_favorites(
        &self,
        user_id: i64,
    ) -> Result<Vec<FavoriteWithProduct>, FavoriteStoreError> {
        let products = self.products.read().await;
        let favorites = self.favorites.read().await;

        let mut entries = favorites
            .values()
            .filter(|favorite| favorite.user_id == user_id)
            .map(|favorite| {
                let product = products.get(&favorite.product_id).cloned().ok_or_else(|| {
                    FavoriteStoreError::UnexpectedError(format!(
                        "Favorite references missing product {}",
                        favorite.product_id
                    ))
                })?;
                Ok(FavoriteWithProduct {
                    entry: favorite.clone(),
                    product,
                })
            })
            .collect::<Result<Vec<_>, FavoriteStoreError>>()?;

        entries.sort_by_key(|entry| entry.entry.id);
        Ok(entries)
    }
}
