//! # Product Generator
//!
//! Products come straight from the fixed catalog, ids `1..=20` in catalog
//! order. Only the stock quantity is random, and stock is cosmetic — orders
//! never reserve or deplete it.

use rand::Rng;

use crate::catalog::{PRODUCT_CATALOG, STOCK_RANGE};
use crate::model::{round2, Product};

/// Generate one product per catalog entry.
pub fn generate(rng: &mut impl Rng) -> Vec<Product> {
    PRODUCT_CATALOG
        .iter()
        .enumerate()
        .map(|(idx, &(product_name, category, price))| Product {
            product_id: idx as u32 + 1,
            product_name,
            category,
            price: round2(price),
            stock_qty: rng.random_range(STOCK_RANGE.0..=STOCK_RANGE.1),
        })
        .collect()
}
