use chrono::{DateTime, Utc};
use serde::Serialize;

use super::product::Product;

/// One line in a user's cart: how many units of a product they hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A cart line joined with its product, as returned when listing a cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineWithProduct {
    #[serde(flatten)]
    pub line: CartLine,
    pub product: Product,
}
