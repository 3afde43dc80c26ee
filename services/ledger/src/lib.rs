//! Marketplace ledger
//!
//! The authoritative in-memory store for users, product listings and orders.
//! All mutation goes through explicit methods on [`Ledger`]; collaborators
//! (UI sections, the session layer) hold no independent authority over data.
//!
//! The store is constructed at startup, passed by reference to its
//! collaborators, and torn down at process exit. No ambient singletons.

mod admin;
mod catalog;
mod orders;
mod seed;
mod store;

pub use admin::LedgerStats;
pub use store::Ledger;
