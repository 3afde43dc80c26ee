//! Order placement
//!
//! The one invariant-bearing operation in the marketplace: placing an order
//! takes a product out of the catalog, and under any call ordering at most
//! one order may transition a given product out of available.

use crate::store::Ledger;
use types::errors::OrderError;
use types::ids::{OrderId, ProductId, UserId};
use types::order::{BuyerInfo, Order};
use types::product::ProductStatus;

impl Ledger {
    /// Place an order against an available product
    ///
    /// The availability check and the flip to sold happen inside one
    /// exclusive borrow of the store, so no intermediate state is
    /// observable where the order exists but the product is still
    /// available. A concurrent host wrapping the ledger in a lock keeps
    /// the at-most-one-order-per-product invariant for free.
    ///
    /// The caller is responsible for supplying a `buyer_id` only when a
    /// session is active; the session gate enforces that upstream.
    pub fn place_order(
        &mut self,
        product_id: ProductId,
        buyer_id: UserId,
        buyer_info: BuyerInfo,
    ) -> Result<Order, OrderError> {
        let now = self.now();

        // Check-and-set: reject unless available, then flip to sold before
        // anything else can observe the product.
        let product = self
            .products
            .get_mut(&product_id)
            .filter(|p| p.status == ProductStatus::Available)
            .ok_or(OrderError::ProductUnavailable { product_id })?;
        product.status = ProductStatus::Sold;

        let order = Order::new(product, buyer_id, buyer_info, now);
        tracing::info!(
            order_id = %order.id,
            %product_id,
            %buyer_id,
            seller_id = %order.seller_id,
            "order placed, product sold"
        );
        self.orders.insert(order.id, order.clone());
        Ok(order)
    }

    /// Look up an order, with a typed miss
    pub fn find_order(&self, order_id: OrderId) -> Result<&Order, OrderError> {
        self.orders
            .get(&order_id)
            .ok_or(OrderError::NotFound { order_id })
    }
}
