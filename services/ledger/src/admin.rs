//! Admin moderation and read-only aggregate views

use crate::store::Ledger;
use serde::{Deserialize, Serialize};
use types::errors::CatalogError;
use types::ids::{ProductId, UserId};
use types::order::OrderStatus;
use types::product::{Product, ProductChanges, ProductStatus};
use types::user::Role;

/// Aggregate counts over the ledger collections
///
/// A pure projection, recomputed on demand; nothing here is stored state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub total_products: usize,
    pub available_products: usize,
    pub sold_products: usize,
    pub pending_products: usize,
    pub total_users: usize,
    pub member_users: usize,
    pub admin_users: usize,
    pub total_orders: usize,
    pub pending_orders: usize,
}

impl Ledger {
    /// Unconditional admin status override
    ///
    /// Bypasses the availability invariant: an admin may move a sold
    /// product back to available regardless of existing orders. This is an
    /// intentional escape hatch and is not itself invariant-checked.
    pub fn set_product_status(
        &mut self,
        product_id: ProductId,
        status: ProductStatus,
    ) -> Result<&Product, CatalogError> {
        tracing::warn!(%product_id, ?status, "admin status override");
        self.update_product(product_id, ProductChanges::status(status))
    }

    /// Aggregate counts for the admin dashboard
    pub fn stats(&self) -> LedgerStats {
        LedgerStats {
            total_products: self.products.len(),
            available_products: self.products_with_status(ProductStatus::Available),
            sold_products: self.products_with_status(ProductStatus::Sold),
            pending_products: self.products_with_status(ProductStatus::Pending),
            total_users: self.users.len(),
            member_users: self.users_with_role(Role::User),
            admin_users: self.users_with_role(Role::Admin),
            total_orders: self.orders.len(),
            pending_orders: self.orders_with_status(OrderStatus::Pending),
        }
    }

    /// Count of products in a given status
    pub fn products_with_status(&self, status: ProductStatus) -> usize {
        self.products.values().filter(|p| p.status == status).count()
    }

    /// Count of users with a given role
    pub fn users_with_role(&self, role: Role) -> usize {
        self.users.values().filter(|u| u.role == role).count()
    }

    /// Count of orders in a given status
    pub fn orders_with_status(&self, status: OrderStatus) -> usize {
        self.orders.values().filter(|o| o.status == status).count()
    }

    /// Products in a given status, creation order (moderation filter view)
    pub fn products_by_status(&self, status: ProductStatus) -> impl Iterator<Item = &Product> {
        self.products.values().filter(move |p| p.status == status)
    }

    /// Products listed by a given seller, creation order
    pub fn products_by_seller(&self, seller_id: UserId) -> impl Iterator<Item = &Product> {
        self.products
            .values()
            .filter(move |p| p.seller_id == seller_id)
    }

    /// Number of listings a seller has ever created that still exist
    pub fn listing_count(&self, seller_id: UserId) -> usize {
        self.products_by_seller(seller_id).count()
    }
}
