//! Product store: seed catalog and category lookups.

use crate::models::product::Product;

use super::store::{EntityStore, StoreEntity};

pub type ProductStore = EntityStore<Product>;

impl StoreEntity for Product {
    fn id(&self) -> u32 {
        self.id
    }

    fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

impl EntityStore<Product> {
    pub fn with_seed_catalog() -> Self {
        let store = Self::with_seed(seed_products());
        tracing::info!(
            products = store.len(),
            categories = store.categories().len(),
            "product store initialized"
        );
        store
    }

    /// Distinct category names, lexicographically ordered.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.get_all().into_iter().map(|p| p.category).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Products whose category matches case-insensitively, ascending by id.
    pub fn by_category(&self, category: &str) -> Vec<Product> {
        self.get_all()
            .into_iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect()
    }
}

fn product(
    id: u32,
    title: &str,
    price: f64,
    description: &str,
    image: &str,
    category: &str,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        description: description.to_string(),
        image: image.to_string(),
        category: category.to_string(),
    }
}

/// Fixed demo catalog: ids 1..=20, five products per category.
fn seed_products() -> Vec<Product> {
    vec![
        product(1, "Laptop", 799.99, "High-performance laptop with 16GB RAM", "https://example.com/laptop.jpg", "electronics"),
        product(2, "Smartphone", 699.99, "Latest model smartphone with 128GB storage", "https://example.com/phone.jpg", "electronics"),
        product(3, "Wireless Headphones", 149.99, "Noise-cancelling wireless headphones", "https://example.com/headphones.jpg", "electronics"),
        product(4, "Tablet", 449.99, "10-inch tablet with stylus support", "https://example.com/tablet.jpg", "electronics"),
        product(5, "Smart Watch", 299.99, "Fitness tracking smart watch", "https://example.com/watch.jpg", "electronics"),
        product(6, "T-Shirt", 19.99, "Cotton t-shirt in various colors", "https://example.com/tshirt.jpg", "clothing"),
        product(7, "Jeans", 49.99, "Classic fit denim jeans", "https://example.com/jeans.jpg", "clothing"),
        product(8, "Jacket", 89.99, "All-weather jacket with hood", "https://example.com/jacket.jpg", "clothing"),
        product(9, "Sneakers", 79.99, "Comfortable running sneakers", "https://example.com/sneakers.jpg", "clothing"),
        product(10, "Hat", 24.99, "Adjustable baseball cap", "https://example.com/hat.jpg", "clothing"),
        product(11, "Coffee Maker", 89.99, "Programmable coffee maker with timer", "https://example.com/coffee.jpg", "home"),
        product(12, "Blender", 59.99, "High-speed blender for smoothies", "https://example.com/blender.jpg", "home"),
        product(13, "Vacuum Cleaner", 199.99, "Cordless vacuum with HEPA filter", "https://example.com/vacuum.jpg", "home"),
        product(14, "Garden Tools Set", 49.99, "Complete set of gardening tools", "https://example.com/tools.jpg", "home"),
        product(15, "Throw Pillow", 29.99, "Decorative throw pillow", "https://example.com/pillow.jpg", "home"),
        product(16, "Yoga Mat", 34.99, "Non-slip yoga mat with carrying strap", "https://example.com/yoga.jpg", "sports"),
        product(17, "Dumbbell Set", 99.99, "Adjustable dumbbell set 5-50 lbs", "https://example.com/dumbbells.jpg", "sports"),
        product(18, "Camping Tent", 149.99, "4-person waterproof camping tent", "https://example.com/tent.jpg", "sports"),
        product(19, "Bicycle", 399.99, "Mountain bike with 21 speeds", "https://example.com/bike.jpg", "sports"),
        product(20, "Soccer Ball", 24.99, "Official size soccer ball", "https://example.com/soccer.jpg", "sports"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_has_twenty_products_and_four_categories() {
        let store = ProductStore::with_seed_catalog();
        assert_eq!(store.len(), 20);
        assert_eq!(
            store.categories(),
            vec!["clothing", "electronics", "home", "sports"]
        );
    }

    #[test]
    fn category_lookup_is_case_insensitive() {
        let store = ProductStore::with_seed_catalog();
        let lower = store.by_category("electronics");
        let mixed = store.by_category("Electronics");
        assert_eq!(lower.len(), 5);
        let lower_ids: Vec<u32> = lower.iter().map(|p| p.id).collect();
        let mixed_ids: Vec<u32> = mixed.iter().map(|p| p.id).collect();
        assert_eq!(lower_ids, mixed_ids);
        assert_eq!(lower_ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn unknown_category_yields_empty() {
        let store = ProductStore::with_seed_catalog();
        assert!(store.by_category("groceries").is_empty());
    }

    #[test]
    fn runtime_products_start_at_id_21() {
        let store = ProductStore::with_seed_catalog();
        let added = store.add(Product {
            id: 0,
            title: "Desk Lamp".to_string(),
            price: 39.99,
            description: "LED desk lamp".to_string(),
            image: "https://example.com/lamp.jpg".to_string(),
            category: "home".to_string(),
        });
        assert_eq!(added.id, 21);
    }
}
