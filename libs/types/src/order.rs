//! Order lifecycle types

use crate::ids::{OrderId, ProductId, UserId};
use crate::product::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status, closed set
///
/// Only `Pending` is producible by the current flow; the remaining variants
/// are a declared extension point with no transition operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

/// Buyer contact details captured at order time
///
/// A snapshot copy, independent of later edits to the User record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// An order transaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub product_id: ProductId,
    pub buyer_id: UserId,
    /// Copied from the product at creation time, for audit stability
    pub seller_id: UserId,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub buyer_info: BuyerInfo,
}

impl Order {
    /// Create a new pending order against a product
    ///
    /// The seller id is copied from the product, not supplied by the caller.
    pub fn new(
        product: &Product,
        buyer_id: UserId,
        buyer_info: BuyerInfo,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: OrderId::new(),
            product_id: product.id,
            buyer_id,
            seller_id: product.seller_id,
            status: OrderStatus::Pending,
            created_at: timestamp,
            buyer_info,
        }
    }
}
