//! # Payment Generator
//!
//! Exactly one payment per order, emitted in the orders' creation sequence.
//! Amount and date are copied verbatim from the finalized order — never
//! sampled or recomputed — so this generator must run strictly after item
//! generation has sealed every total.

use rand::Rng;

use crate::catalog::PAYMENT_ID_BASE;
use crate::generate::weighted_pick;
use crate::model::{Order, Payment, PaymentMethod, PaymentStatus};

/// Generate one payment per order, ids `PAYMENT_ID_BASE + 1 ..`.
pub fn generate(orders: &[Order], rng: &mut impl Rng) -> Vec<Payment> {
    orders
        .iter()
        .enumerate()
        .map(|(idx, order)| Payment {
            payment_id: PAYMENT_ID_BASE + idx as u32 + 1,
            order_id: order.order_id,
            payment_date: order.order_date,
            amount: order.total_amount,
            payment_method: PaymentMethod::ALL[rng.random_range(0..PaymentMethod::ALL.len())],
            payment_status: weighted_pick(&PaymentStatus::ALL, &PaymentStatus::WEIGHTS, rng),
        })
        .collect()
}
