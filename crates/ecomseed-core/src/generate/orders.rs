//! # Order Generator
//!
//! Orders reference customers. The owning customer is a uniform random draw
//! WITH replacement over the whole customer slice, so per-customer order
//! counts follow a distribution rather than a fixed fan-out. (Customers cycle
//! their pools deterministically; orders pick customers randomly — that
//! asymmetry is deliberate and must not be "fixed" toward either extreme.)
//!
//! The output is [`OrderDraft`]s, not orders: totals do not exist yet and are
//! only written when the item generator finalizes each draft.

use rand::Rng;

use crate::catalog::{order_window, ORDER_ID_BASE};
use crate::error::{EcomSeedError, Result};
use crate::generate::random_date;
use crate::model::{Customer, OrderDraft, OrderStatus};

/// Generate `count` order drafts with ids `ORDER_ID_BASE + 1 ..`.
pub fn generate(
    customers: &[Customer],
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<OrderDraft>> {
    if count > 0 && customers.is_empty() {
        return Err(EcomSeedError::EmptyReferencePool {
            dependent: "orders",
            referenced: "customers",
        });
    }

    let (start, end) = order_window();
    let mut drafts = Vec::with_capacity(count);

    for n in 1..=count as u32 {
        let customer = &customers[rng.random_range(0..customers.len())];
        drafts.push(OrderDraft {
            order_id: ORDER_ID_BASE + n,
            customer_id: customer.customer_id,
            order_date: random_date(rng, start, end),
            status: OrderStatus::ALL[rng.random_range(0..OrderStatus::ALL.len())],
            // Copied from the drawn customer, never sampled on its own.
            shipping_city: customer.city,
        });
    }

    Ok(drafts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::customers;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    fn fixture(customer_count: usize, order_count: usize) -> (Vec<Customer>, Vec<OrderDraft>) {
        let mut rng = StdRng::seed_from_u64(42);
        let customers = customers::generate(customer_count, &mut rng);
        let drafts = generate(&customers, order_count, &mut rng).unwrap();
        (customers, drafts)
    }

    #[test]
    fn test_ids_offset_by_base() {
        let (_, drafts) = fixture(5, 10);
        let ids: Vec<u32> = drafts.iter().map(|o| o.order_id).collect();
        assert_eq!(ids, (5001..=5010).collect::<Vec<u32>>());
    }

    #[test]
    fn test_customer_references_resolve() {
        let (customers, drafts) = fixture(8, 50);
        let known: HashSet<u32> = customers.iter().map(|c| c.customer_id).collect();
        for o in &drafts {
            assert!(known.contains(&o.customer_id));
        }
    }

    #[test]
    fn test_shipping_city_matches_customer() {
        let (customers, drafts) = fixture(20, 100);
        let cities: HashMap<u32, &str> = customers
            .iter()
            .map(|c| (c.customer_id, c.city))
            .collect();
        for o in &drafts {
            assert_eq!(o.shipping_city, cities[&o.customer_id]);
        }
    }

    #[test]
    fn test_draw_is_with_replacement() {
        // More orders than customers forces at least one shared customer.
        let (_, drafts) = fixture(3, 30);
        let distinct: HashSet<u32> = drafts.iter().map(|o| o.customer_id).collect();
        assert!(distinct.len() <= 3);
        assert_eq!(drafts.len(), 30);
    }

    #[test]
    fn test_dates_within_order_window() {
        let (start, end) = order_window();
        let (_, drafts) = fixture(5, 200);
        for o in &drafts {
            assert!(o.order_date >= start && o.order_date <= end);
        }
    }

    #[test]
    fn test_empty_customer_pool_is_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = generate(&[], 1, &mut rng).unwrap_err();
        assert!(matches!(err, EcomSeedError::EmptyReferencePool { .. }));
    }

    #[test]
    fn test_zero_orders_with_no_customers_is_fine() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(generate(&[], 0, &mut rng).unwrap().is_empty());
    }
}
