//! Cart store: seed carts plus user and date-range lookups.

use chrono::{DateTime, Duration, Utc};

use crate::models::cart::{Cart, CartProduct};

use super::store::{EntityStore, StoreEntity};

pub type CartStore = EntityStore<Cart>;

impl StoreEntity for Cart {
    fn id(&self) -> u32 {
        self.id
    }

    fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

impl EntityStore<Cart> {
    pub fn with_seed_carts() -> Self {
        let store = Self::with_seed(seed_carts());
        tracing::info!(carts = store.len(), "cart store initialized");
        store
    }

    /// Carts belonging to `user_id`, ascending by date.
    pub fn by_user(&self, user_id: &str) -> Vec<Cart> {
        let mut carts: Vec<Cart> = self
            .get_all()
            .into_iter()
            .filter(|c| c.user_id == user_id)
            .collect();
        carts.sort_by_key(|c| c.date);
        carts
    }

    /// Carts whose date falls within the inclusive bounds; a missing bound
    /// is unbounded on that side. Ascending by id.
    pub fn by_date_range(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Vec<Cart> {
        self.get_all()
            .into_iter()
            .filter(|c| start.is_none_or(|s| c.date >= s) && end.is_none_or(|e| c.date <= e))
            .collect()
    }
}

fn cart(id: u32, user_id: &str, days_ago: i64, products: Vec<(u32, u32)>) -> Cart {
    Cart {
        id,
        user_id: user_id.to_string(),
        date: Utc::now() - Duration::days(days_ago),
        products: products
            .into_iter()
            .map(|(product_id, quantity)| CartProduct {
                product_id,
                quantity,
            })
            .collect(),
    }
}

/// Fixed demo carts: ids 1..=10 spread across the three seeded users.
fn seed_carts() -> Vec<Cart> {
    vec![
        cart(1, "user-001", 5, vec![(1, 1), (3, 1)]),
        cart(2, "user-001", 3, vec![(6, 2), (7, 1)]),
        cart(3, "user-002", 7, vec![(11, 1), (12, 1)]),
        cart(4, "user-002", 2, vec![(16, 1), (17, 1)]),
        cart(5, "user-003", 10, vec![(2, 1), (5, 1)]),
        cart(6, "user-003", 1, vec![(19, 1), (20, 2)]),
        cart(7, "user-001", 15, vec![(4, 1), (15, 2)]),
        cart(8, "user-002", 20, vec![(8, 1), (9, 1)]),
        cart(9, "user-003", 12, vec![(13, 1), (14, 1)]),
        cart(10, "user-001", 0, vec![(10, 1), (18, 1)]),
    ]
}
