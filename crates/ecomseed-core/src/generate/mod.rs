//! # Generation Pipeline
//!
//! Runs the generators in dependency order — customers and products first,
//! then orders, then line items (which finalize order totals), then payments
//! — so every foreign key is drawn from an already-populated collection.
//!
//! All randomness flows through one `StdRng` seeded from
//! [`GenerationSpec::seed`] and threaded `&mut` through each step in a fixed
//! call order, so a given seed and counts reproduce the dataset exactly.

pub mod customers;
pub mod items;
pub mod orders;
pub mod payments;
pub mod products;

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{EcomSeedError, Result};
use crate::model::{Customer, Order, OrderItem, Payment, Product};

/// Input knobs for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSpec {
    /// Number of customers to generate.
    pub customers: usize,
    /// Number of orders to generate.
    pub orders: usize,
    /// Seed for the single pseudorandom source.
    pub seed: u64,
    /// Upper bound (inclusive) on line items per order. Must not exceed the
    /// product catalog size, since products within an order are distinct.
    pub max_items_per_order: usize,
}

impl Default for GenerationSpec {
    fn default() -> Self {
        Self {
            customers: 50,
            orders: 100,
            seed: 42,
            max_items_per_order: 4,
        }
    }
}

impl GenerationSpec {
    /// Reject impossible inputs before any generation begins.
    pub fn validate(&self) -> Result<()> {
        if self.max_items_per_order == 0 {
            return Err(EcomSeedError::InvalidInput {
                message: "max_items_per_order must be at least 1".to_string(),
            });
        }
        if self.orders > 0 && self.customers == 0 {
            return Err(EcomSeedError::EmptyReferencePool {
                dependent: "orders",
                referenced: "customers",
            });
        }
        Ok(())
    }
}

/// A complete, internally consistent generated dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
}

/// Generate the full dataset for a spec.
///
/// Generation order is the topological order of the entity dependency graph:
/// the order collection is the only shared state, and it is written exactly
/// once per record (draft finalization in [`items::generate`]) between its
/// creation and its consumption by the payment generator.
pub fn generate_dataset(spec: &GenerationSpec) -> Result<Dataset> {
    spec.validate()?;

    let mut rng = StdRng::seed_from_u64(spec.seed);

    let customers = customers::generate(spec.customers, &mut rng);
    let products = products::generate(&mut rng);
    let drafts = orders::generate(&customers, spec.orders, &mut rng)?;
    let (orders, order_items) =
        items::generate(drafts, &products, spec.max_items_per_order, &mut rng)?;
    let payments = payments::generate(&orders, &mut rng);

    debug!(
        customers = customers.len(),
        products = products.len(),
        orders = orders.len(),
        order_items = order_items.len(),
        payments = payments.len(),
        seed = spec.seed,
        "dataset generated"
    );

    Ok(Dataset {
        customers,
        products,
        orders,
        order_items,
        payments,
    })
}

/// Return a random date between `start` and `end` (inclusive).
pub(crate) fn random_date(rng: &mut impl Rng, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days().max(0);
    start + Duration::days(rng.random_range(0..=span))
}

/// Weighted random selection via cumulative distribution.
///
/// Weights are assumed positive and matched in length to `values`; the
/// floating-point edge where the roll lands past the last cumulative bound
/// returns the last value.
pub(crate) fn weighted_pick<T: Copy>(values: &[T], weights: &[f64], rng: &mut impl Rng) -> T {
    let total: f64 = weights.iter().sum();
    let roll: f64 = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (value, weight) in values.iter().zip(weights) {
        cumulative += weight;
        if roll < cumulative {
            return *value;
        }
    }
    values[values.len() - 1]
}
