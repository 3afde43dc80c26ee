//! The ledger store
//!
//! Collections are `BTreeMap`s keyed by UUID v7 ids, so iteration order is
//! creation order and serialization is deterministic.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use types::ids::{OrderId, ProductId, UserId};
use types::order::Order;
use types::product::Product;
use types::user::{RegisterProfile, User};

/// The authoritative in-memory marketplace store
///
/// Ids are unique within their collection for the ledger's lifetime; users
/// are never destroyed.
#[derive(Debug, Default)]
pub struct Ledger {
    pub(crate) users: BTreeMap<UserId, User>,
    pub(crate) products: BTreeMap<ProductId, Product>,
    pub(crate) orders: BTreeMap<OrderId, Order>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Current timestamp used for stamping new records
    pub(crate) fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    // ── Users ───────────────────────────────────────────────────────

    /// Append a new user with a fresh unique id
    ///
    /// Email uniqueness is intentionally not checked; duplicate emails
    /// resolve to the oldest account (see `find_by_email`).
    pub fn register_user(&mut self, profile: RegisterProfile) -> &User {
        let user = profile.into_user(self.now());
        let id = user.id;
        tracing::info!(user_id = %id, email = %user.email, "user registered");
        self.users.entry(id).or_insert(user)
    }

    /// Look up a user by id
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// All users in creation order
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// First user (in creation order) with the given email, exact match
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|u| u.email == email)
    }

    /// First user matching email and password exactly (case-sensitive)
    pub fn find_by_credentials(&self, email: &str, password: &str) -> Option<&User> {
        self.users
            .values()
            .find(|u| u.email == email && u.password == password)
    }

    // ── Products ────────────────────────────────────────────────────

    /// Look up a product by id
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// All products in creation order, regardless of status
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    // ── Orders ──────────────────────────────────────────────────────

    /// Look up an order by id
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// All orders in creation order
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    // ── Counts ──────────────────────────────────────────────────────

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}
