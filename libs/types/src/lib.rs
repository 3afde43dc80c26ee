//! Types library for the marketplace ledger
//!
//! Core type definitions shared by the ledger and session services.
//!
//! # Modules
//! - `ids`: Unique identifiers (UserId, ProductId, OrderId)
//! - `numeric`: Decimal price type
//! - `user`: User identity and roles
//! - `product`: Listings, drafts, validation
//! - `order`: Order lifecycle types
//! - `errors`: Error taxonomy

pub mod errors;
pub mod ids;
pub mod numeric;
pub mod order;
pub mod product;
pub mod user;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::product::*;
    pub use crate::user::*;
}
