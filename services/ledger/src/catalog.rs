//! Product catalog operations
//!
//! Listings arrive here already validated (the seller boundary runs
//! `ListingDraft::validate`); the ledger does not re-validate.

use crate::store::Ledger;
use types::errors::CatalogError;
use types::ids::{ProductId, UserId};
use types::product::{Listing, Product, ProductChanges, ProductStatus};

impl Ledger {
    /// All available products in creation order
    ///
    /// Backs both the Home and Buy views.
    pub fn list_available(&self) -> impl Iterator<Item = &Product> {
        self.products.values().filter(|p| p.is_available())
    }

    /// Append a new listing for a seller
    ///
    /// Assigns a fresh unique id, sets status available and stamps the
    /// creation time.
    pub fn create_listing(&mut self, listing: Listing, seller_id: UserId) -> &Product {
        let image = listing.main_image().unwrap_or_default().to_string();
        let product = Product {
            id: ProductId::new(),
            title: listing.title,
            description: listing.description,
            price: listing.price,
            image,
            category: listing.category,
            size: listing.size,
            condition: listing.condition,
            brand: listing.brand,
            seller_id,
            status: ProductStatus::Available,
            created_at: self.now(),
        };
        let id = product.id;
        tracing::info!(product_id = %id, %seller_id, title = %product.title, "listing created");
        self.products.entry(id).or_insert(product)
    }

    /// Merge typed field changes into an existing product
    pub fn update_product(
        &mut self,
        product_id: ProductId,
        changes: ProductChanges,
    ) -> Result<&Product, CatalogError> {
        let product = self
            .products
            .get_mut(&product_id)
            .ok_or(CatalogError::NotFound { product_id })?;
        changes.apply(product);
        tracing::info!(%product_id, "product updated");
        Ok(product)
    }

    /// Remove a product unconditionally
    ///
    /// No dependent-order cleanup: orders referencing the product keep
    /// their snapshot. Deleting a missing id is `NotFound` and leaves the
    /// collection unchanged.
    pub fn delete_product(&mut self, product_id: ProductId) -> Result<(), CatalogError> {
        match self.products.remove(&product_id) {
            Some(_) => {
                tracing::info!(%product_id, "product deleted");
                Ok(())
            }
            None => Err(CatalogError::NotFound { product_id }),
        }
    }
}
