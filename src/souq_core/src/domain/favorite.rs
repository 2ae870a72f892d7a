use chrono::{DateTime, Utc};
use serde::Serialize;

use super::product::Product;

/// Marks a product as one of a user's favorites.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub created_at: DateTime<Utc>,
}

/// A favorite entry joined with its product, as returned when listing favorites.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoriteWithProduct {
    #[serde(flatten)]
    pub entry: FavoriteEntry,
    pub product: Product,
}
