//! # Order Item Generator
//!
//! Generates line items and finalizes order totals in the same pass. Each
//! draft order gets 1..=max items over DISTINCT products (sampled without
//! replacement); the accumulated line total is rounded to cents and sealed
//! into the order via [`OrderDraft::finalize`]. Item ids are sequential
//! across the whole run, not per order.
//!
//! `unit_price` is copied out of the product at generation time — a frozen
//! snapshot, so a later catalog price change cannot retroactively alter an
//! item or the order total derived from it.

use rand::seq::index;
use rand::Rng;

use crate::error::{EcomSeedError, Result};
use crate::model::{round2, Order, OrderDraft, OrderItem, Product};

/// Generate items for every draft and finalize each draft into an [`Order`].
///
/// Orders are processed in creation sequence and each order's items are
/// appended contiguously; no reordering is applied afterwards.
///
/// Fails with `CatalogExhausted` if `max_items` exceeds the product count —
/// distinct sampling could never satisfy such a draw, and clamping silently
/// would hide a misconfigured catalog.
pub fn generate(
    drafts: Vec<OrderDraft>,
    products: &[Product],
    max_items: usize,
    rng: &mut impl Rng,
) -> Result<(Vec<Order>, Vec<OrderItem>)> {
    if max_items > products.len() {
        return Err(EcomSeedError::CatalogExhausted {
            requested: max_items,
            available: products.len(),
        });
    }

    let mut orders = Vec::with_capacity(drafts.len());
    let mut order_items: Vec<OrderItem> = Vec::new();

    for draft in drafts {
        let item_count = rng.random_range(1..=max_items);
        let mut order_total = 0.0;

        for product_idx in index::sample(rng, products.len(), item_count) {
            let product = &products[product_idx];
            let quantity = rng.random_range(1..=3u32);
            let unit_price = round2(product.price);
            order_total += quantity as f64 * unit_price;

            order_items.push(OrderItem {
                order_item_id: order_items.len() as u32 + 1,
                order_id: draft.order_id,
                product_id: product.product_id,
                quantity,
                unit_price,
            });
        }

        orders.push(draft.finalize(order_total));
    }

    Ok((orders, order_items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{customers, orders, products};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn fixture() -> (Vec<Product>, Vec<Order>, Vec<OrderItem>) {
        let mut rng = StdRng::seed_from_u64(42);
        let custs = customers::generate(10, &mut rng);
        let prods = products::generate(&mut rng);
        let drafts = orders::generate(&custs, 80, &mut rng).unwrap();
        let (finalized, items) = generate(drafts, &prods, 4, &mut rng).unwrap();
        (prods, finalized, items)
    }

    #[test]
    fn test_item_ids_sequential_across_orders() {
        let (_, _, items) = fixture();
        for (idx, item) in items.iter().enumerate() {
            assert_eq!(item.order_item_id, idx as u32 + 1);
        }
    }

    #[test]
    fn test_one_to_four_items_per_order() {
        let (_, finalized, items) = fixture();
        for order in &finalized {
            let n = items.iter().filter(|i| i.order_id == order.order_id).count();
            assert!((1..=4).contains(&n), "order {} has {} items", order.order_id, n);
        }
    }

    #[test]
    fn test_products_distinct_within_order() {
        let (_, finalized, items) = fixture();
        for order in &finalized {
            let pids: Vec<u32> = items
                .iter()
                .filter(|i| i.order_id == order.order_id)
                .map(|i| i.product_id)
                .collect();
            let distinct: HashSet<u32> = pids.iter().copied().collect();
            assert_eq!(distinct.len(), pids.len());
        }
    }

    #[test]
    fn test_quantities_in_range() {
        let (_, _, items) = fixture();
        for item in &items {
            assert!((1..=3).contains(&item.quantity));
        }
    }

    #[test]
    fn test_unit_price_is_a_product_snapshot() {
        let (prods, _, items) = fixture();
        for item in &items {
            let product = prods
                .iter()
                .find(|p| p.product_id == item.product_id)
                .expect("item references a known product");
            assert_eq!(item.unit_price, round2(product.price));
        }
    }

    #[test]
    fn test_totals_equal_rounded_item_sum() {
        let (_, finalized, items) = fixture();
        for order in &finalized {
            let sum: f64 = items
                .iter()
                .filter(|i| i.order_id == order.order_id)
                .map(|i| i.quantity as f64 * i.unit_price)
                .sum();
            assert!(
                (order.total_amount - round2(sum)).abs() < 0.01,
                "order {}: total {} vs item sum {}",
                order.order_id,
                order.total_amount,
                sum
            );
        }
    }

    #[test]
    fn test_items_appended_in_order_sequence() {
        let (_, finalized, items) = fixture();
        // Walking the item list yields order ids in the orders' creation
        // sequence, each block contiguous.
        let mut seen: Vec<u32> = Vec::new();
        for item in &items {
            if seen.last() != Some(&item.order_id) {
                seen.push(item.order_id);
            }
        }
        let expected: Vec<u32> = finalized.iter().map(|o| o.order_id).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_item_bound_above_catalog_is_fatal() {
        let mut rng = StdRng::seed_from_u64(42);
        let custs = customers::generate(2, &mut rng);
        let prods = products::generate(&mut rng);
        let drafts = orders::generate(&custs, 5, &mut rng).unwrap();
        let err = generate(drafts, &prods, prods.len() + 1, &mut rng).unwrap_err();
        assert!(matches!(err, EcomSeedError::CatalogExhausted { .. }));
    }

    #[test]
    fn test_no_drafts_no_items() {
        let mut rng = StdRng::seed_from_u64(42);
        let prods = products::generate(&mut rng);
        let (finalized, items) = generate(Vec::new(), &prods, 4, &mut rng).unwrap();
        assert!(finalized.is_empty());
        assert!(items.is_empty());
    }
}
