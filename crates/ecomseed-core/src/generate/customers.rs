//! # Customer Generator
//!
//! Customers are a root entity: no foreign keys, identities `1..=N`.
//!
//! Name and city/state assignment cycles deterministically through the pools
//! by `(id - 1) % pool_len`, so names repeat predictably once N exceeds a
//! pool — intentional reuse, not a collision bug. Only the signup date is
//! random. Email derives from name + id, which makes it unique as long as
//! ids are.

use rand::Rng;

use crate::catalog::{signup_window, CITY_STATES, EMAIL_DOMAIN, FIRST_NAMES, LAST_NAMES};
use crate::generate::random_date;
use crate::model::Customer;

/// Generate `count` customers with sequential ids starting at 1.
pub fn generate(count: usize, rng: &mut impl Rng) -> Vec<Customer> {
    let (start, end) = signup_window();
    let mut customers = Vec::with_capacity(count);

    for customer_id in 1..=count as u32 {
        let idx = (customer_id - 1) as usize;
        let first_name = FIRST_NAMES[idx % FIRST_NAMES.len()];
        let last_name = LAST_NAMES[idx % LAST_NAMES.len()];
        // City and state are one atomic draw from the paired pool.
        let (city, state) = CITY_STATES[idx % CITY_STATES.len()];

        customers.push(Customer {
            customer_id,
            first_name,
            last_name,
            email: format!(
                "{}.{}{}@{}",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                customer_id,
                EMAIL_DOMAIN
            ),
            phone: format!("555-{:04}", 1000 + customer_id),
            city,
            state,
            signup_date: random_date(rng, start, end),
        });
    }

    customers
}
