//! Demo seed dataset
//!
//! The demo ledger: one admin, one regular member, and six apparel listings
//! owned by the member. Built through the ledger's own operations so every
//! invariant holds from the start.

use crate::store::Ledger;
use types::numeric::Price;
use types::product::Listing;
use types::user::{RegisterProfile, Role};

impl Ledger {
    /// Construct the seeded demo ledger
    pub fn seed() -> Self {
        let mut ledger = Ledger::new();

        ledger.register_user(RegisterProfile {
            email: "admin@example.com".to_string(),
            password: "admin123".to_string(),
            name: "Admin User".to_string(),
            role: Role::Admin,
            phone: None,
            address: None,
        });

        let member = ledger
            .register_user(RegisterProfile {
                email: "user@example.com".to_string(),
                password: "user123".to_string(),
                name: "John Doe".to_string(),
                role: Role::User,
                phone: Some("+1-234-567-8900".to_string()),
                address: Some("123 Main St, City, State 12345".to_string()),
            })
            .id;

        for listing in demo_listings() {
            ledger.create_listing(listing, member);
        }

        ledger
    }
}

fn demo_listings() -> Vec<Listing> {
    let raw: [(&str, &str, u64, &str, &str, &str, &str, &str); 6] = [
        (
            "Vintage Denim Jacket",
            "Classic blue denim jacket in excellent condition. Perfect for casual outings.",
            45,
            "https://images.pexels.com/photos/1043474/pexels-photo-1043474.jpeg",
            "Outerwear",
            "M",
            "Good",
            "Levi's",
        ),
        (
            "Designer Silk Blouse",
            "Elegant silk blouse with floral pattern. Great for office or special occasions.",
            65,
            "https://images.pexels.com/photos/4473864/pexels-photo-4473864.jpeg",
            "Tops",
            "S",
            "Excellent",
            "Zara",
        ),
        (
            "Leather Ankle Boots",
            "Stylish black leather boots with low heel. Comfortable for everyday wear.",
            80,
            "https://images.pexels.com/photos/1464625/pexels-photo-1464625.jpeg",
            "Shoes",
            "8",
            "Very Good",
            "Steve Madden",
        ),
        (
            "Casual Cotton Dress",
            "Comfortable summer dress in mint green. Perfect for warm weather.",
            35,
            "https://images.pexels.com/photos/1536619/pexels-photo-1536619.jpeg",
            "Dresses",
            "L",
            "Good",
            "H&M",
        ),
        (
            "Classic Wool Sweater",
            "Cozy wool sweater in burgundy. Perfect for fall and winter.",
            55,
            "https://images.pexels.com/photos/2735037/pexels-photo-2735037.jpeg",
            "Sweaters",
            "M",
            "Excellent",
            "Gap",
        ),
        (
            "Running Sneakers",
            "Comfortable athletic shoes for running and gym workouts.",
            70,
            "https://images.pexels.com/photos/1598505/pexels-photo-1598505.jpeg",
            "Shoes",
            "9",
            "Good",
            "Nike",
        ),
    ];

    raw.into_iter()
        .map(
            |(title, description, price, image, category, size, condition, brand)| Listing {
                title: title.to_string(),
                description: description.to_string(),
                price: Price::from_u64(price),
                images: vec![image.to_string()],
                category: category.to_string(),
                size: size.to_string(),
                condition: condition.to_string(),
                brand: brand.to_string(),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::product::ProductStatus;

    #[test]
    fn test_seed_shape() {
        let ledger = Ledger::seed();
        assert_eq!(ledger.user_count(), 2);
        assert_eq!(ledger.product_count(), 6);
        assert_eq!(ledger.order_count(), 0);
        assert!(ledger
            .products()
            .all(|p| p.status == ProductStatus::Available));
    }

    #[test]
    fn test_seed_accounts_authenticate() {
        let ledger = Ledger::seed();
        let admin = ledger
            .find_by_credentials("admin@example.com", "admin123")
            .unwrap();
        assert!(admin.is_admin());

        let member = ledger
            .find_by_credentials("user@example.com", "user123")
            .unwrap();
        assert!(!member.is_admin());
        assert_eq!(member.name, "John Doe");
    }

    #[test]
    fn test_seed_listings_belong_to_member() {
        let ledger = Ledger::seed();
        let member = ledger.find_by_email("user@example.com").unwrap().id;
        assert_eq!(ledger.listing_count(member), 6);
        assert_eq!(ledger.list_available().count(), 6);
    }
}
