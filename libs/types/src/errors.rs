//! Error types for the marketplace ledger
//!
//! All conditions here are recoverable and user-facing; none are fatal to
//! the process and there is no transient-failure class to retry against.

use crate::ids::{OrderId, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Top-level ledger error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}

/// Session and authorization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No user matches the supplied email+password exactly
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The section requires an active session
    #[error("Sign in to access the {section} section")]
    NotAuthenticated { section: String },

    /// The section requires a role the active user lacks
    #[error("The {section} section requires an admin account")]
    NotAuthorized { section: String },
}

/// Catalog errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Product not found: {product_id}")]
    NotFound { product_id: ProductId },

    #[error("Listing validation failed: {0}")]
    Validation(#[from] ValidationFailed),
}

/// Order placement and lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The product is absent or not in status available
    #[error("Product is not available for purchase: {product_id}")]
    ProductUnavailable { product_id: ProductId },

    #[error("Order not found: {order_id}")]
    NotFound { order_id: OrderId },
}

/// A single failed field in a listing draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Listing draft validation failure with per-field messages
///
/// Raised at the collaborator boundary, before anything reaches the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailed {
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ValidationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.iter().map(|e| e.field.as_str()).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationFailed {}
