//! Product listing types
//!
//! A `ListingDraft` is what a seller submits; it is validated at the
//! collaborator boundary into a `Listing`, which the ledger turns into a
//! `Product`. The ledger itself does not re-validate.

use crate::errors::{FieldError, ValidationFailed};
use crate::ids::{ProductId, UserId};
use crate::numeric::Price;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of images per listing
pub const MAX_LISTING_IMAGES: usize = 5;

/// Product status, closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Listed and orderable
    Available,
    /// An order has been recorded against it
    Sold,
    /// Held back from the catalog (admin-set only)
    Pending,
}

/// A product listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: Price,
    /// Opaque image reference (the listing's main image)
    pub image: String,
    pub category: String,
    pub size: String,
    pub condition: String,
    pub brand: String,
    pub seller_id: UserId,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn is_available(&self) -> bool {
        self.status == ProductStatus::Available
    }
}

/// Listing payload ready for the ledger, normally produced by
/// `ListingDraft::validate`
///
/// The fields are plain data; nothing stops a caller from building one by
/// hand, so accessors stay total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub description: String,
    pub price: Price,
    pub images: Vec<String>,
    pub category: String,
    pub size: String,
    pub condition: String,
    pub brand: String,
}

impl Listing {
    /// The listing's main image (first uploaded), if any
    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Raw seller form input, not yet validated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub price: Option<Price>,
    pub images: Vec<String>,
    pub category: String,
    pub size: String,
    pub condition: String,
    pub brand: String,
}

impl ListingDraft {
    /// Validate the draft into a `Listing`
    ///
    /// Rules: title, description and brand must be non-blank; category, size
    /// and condition must be selected; price must be present and strictly
    /// positive; between 1 and `MAX_LISTING_IMAGES` images.
    pub fn validate(self) -> Result<Listing, ValidationFailed> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(FieldError::new("title", "Title is required"));
        }
        if self.description.trim().is_empty() {
            errors.push(FieldError::new("description", "Description is required"));
        }
        match self.price {
            Some(p) if p.is_positive() => {}
            _ => errors.push(FieldError::new("price", "Valid price is required")),
        }
        if self.category.is_empty() {
            errors.push(FieldError::new("category", "Category is required"));
        }
        if self.size.is_empty() {
            errors.push(FieldError::new("size", "Size is required"));
        }
        if self.condition.is_empty() {
            errors.push(FieldError::new("condition", "Condition is required"));
        }
        if self.brand.trim().is_empty() {
            errors.push(FieldError::new("brand", "Brand is required"));
        }
        if self.images.is_empty() {
            errors.push(FieldError::new("images", "At least one image is required"));
        } else if self.images.len() > MAX_LISTING_IMAGES {
            errors.push(FieldError::new("images", "At most five images are allowed"));
        }

        if !errors.is_empty() {
            return Err(ValidationFailed { errors });
        }

        Ok(Listing {
            title: self.title,
            description: self.description,
            price: self.price.expect("price checked above"),
            images: self.images,
            category: self.category,
            size: self.size,
            condition: self.condition,
            brand: self.brand,
        })
    }
}

/// Typed field-level changes for `Ledger::update_product`
///
/// Replaces free-form merges from the UI layer: only the fields moderation
/// actually edits are expressible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub status: Option<ProductStatus>,
}

impl ProductChanges {
    /// Change only the status
    pub fn status(status: ProductStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Apply the changes to a product in place
    pub fn apply(&self, product: &mut Product) {
        if let Some(title) = &self.title {
            product.title = title.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(status) = self.status {
            product.status = status;
        }
    }
}
