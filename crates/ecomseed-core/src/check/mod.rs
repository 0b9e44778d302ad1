//! # Integrity Checking
//!
//! Validates the invariants a generated dataset promises its downstream
//! relational store: unique identities, resolvable foreign keys, copied
//! fields that actually match their source, and order totals that equal the
//! rounded sum of their line items. The store's own constraints are a
//! backstop; this module is the primary validator.
//!
//! Two entry points: [`check_dataset`] runs over an in-memory dataset,
//! [`check_files`] re-parses the written CSV files and validates those, which
//! also exercises the serialization round trip.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::{EcomSeedError, Result};
use crate::generate::Dataset;
use crate::model::round2;
use crate::output::csv::{read_table, CsvTable};

/// Order totals may differ from their item sum by at most this much.
const TOTAL_TOLERANCE: f64 = 0.01;

/// Result of an integrity check.
#[derive(Debug, Clone, Default)]
pub struct IntegrityReport {
    pub violations: Vec<Violation>,
}

/// A single broken invariant, tied to the table it was found in.
#[derive(Debug, Clone)]
pub struct Violation {
    pub table: &'static str,
    pub message: String,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Human-readable summary for terminal output.
    pub fn summary(&self) -> String {
        if self.is_clean() {
            return "No integrity violations detected.".to_string();
        }

        let mut lines = vec![format!(
            "{} integrity violation(s) detected:",
            self.violations.len()
        )];
        for v in &self.violations {
            lines.push(format!("  [{}] {}", v.table, v.message));
        }
        lines.join("\n")
    }

    fn push(&mut self, table: &'static str, message: String) {
        self.violations.push(Violation { table, message });
    }
}

/// Validate an in-memory dataset.
pub fn check_dataset(data: &Dataset) -> IntegrityReport {
    let mut report = IntegrityReport::default();

    let customer_ids = unique_ids(
        data.customers.iter().map(|c| c.customer_id),
        "customers",
        &mut report,
    );
    let product_ids = unique_ids(
        data.products.iter().map(|p| p.product_id),
        "products",
        &mut report,
    );
    let order_ids = unique_ids(data.orders.iter().map(|o| o.order_id), "orders", &mut report);
    unique_ids(
        data.order_items.iter().map(|i| i.order_item_id),
        "order_items",
        &mut report,
    );
    unique_ids(
        data.payments.iter().map(|p| p.payment_id),
        "payments",
        &mut report,
    );

    let customer_city: HashMap<u32, &str> = data
        .customers
        .iter()
        .map(|c| (c.customer_id, c.city))
        .collect();

    for order in &data.orders {
        if !customer_ids.contains(&order.customer_id) {
            report.push(
                "orders",
                format!(
                    "order {} references missing customer {}",
                    order.order_id, order.customer_id
                ),
            );
        } else if customer_city[&order.customer_id] != order.shipping_city {
            report.push(
                "orders",
                format!(
                    "order {} ships to '{}' but customer {} lives in '{}'",
                    order.order_id,
                    order.shipping_city,
                    order.customer_id,
                    customer_city[&order.customer_id]
                ),
            );
        }
    }

    let mut items_by_order: HashMap<u32, Vec<&crate::model::OrderItem>> = HashMap::new();
    for item in &data.order_items {
        if !order_ids.contains(&item.order_id) {
            report.push(
                "order_items",
                format!(
                    "item {} references missing order {}",
                    item.order_item_id, item.order_id
                ),
            );
        }
        if !product_ids.contains(&item.product_id) {
            report.push(
                "order_items",
                format!(
                    "item {} references missing product {}",
                    item.order_item_id, item.product_id
                ),
            );
        }
        if !(1..=3).contains(&item.quantity) {
            report.push(
                "order_items",
                format!(
                    "item {} has out-of-range quantity {}",
                    item.order_item_id, item.quantity
                ),
            );
        }
        items_by_order.entry(item.order_id).or_default().push(item);
    }

    for order in &data.orders {
        let items = items_by_order.remove(&order.order_id).unwrap_or_default();

        if !(1..=4).contains(&items.len()) {
            report.push(
                "order_items",
                format!(
                    "order {} has {} line items, expected 1 to 4",
                    order.order_id,
                    items.len()
                ),
            );
        }

        let distinct: HashSet<u32> = items.iter().map(|i| i.product_id).collect();
        if distinct.len() != items.len() {
            report.push(
                "order_items",
                format!("order {} contains a repeated product", order.order_id),
            );
        }

        let sum: f64 = items
            .iter()
            .map(|i| i.quantity as f64 * i.unit_price)
            .sum();
        if (order.total_amount - round2(sum)).abs() > TOTAL_TOLERANCE {
            report.push(
                "orders",
                format!(
                    "order {} total {} does not match item sum {}",
                    order.order_id,
                    order.total_amount,
                    round2(sum)
                ),
            );
        }
    }

    let order_by_id: HashMap<u32, &crate::model::Order> =
        data.orders.iter().map(|o| (o.order_id, o)).collect();
    let mut paid_orders: HashSet<u32> = HashSet::new();
    for payment in &data.payments {
        match order_by_id.get(&payment.order_id) {
            None => report.push(
                "payments",
                format!(
                    "payment {} references missing order {}",
                    payment.payment_id, payment.order_id
                ),
            ),
            Some(order) => {
                if payment.amount != order.total_amount {
                    report.push(
                        "payments",
                        format!(
                            "payment {} amount {} differs from order total {}",
                            payment.payment_id, payment.amount, order.total_amount
                        ),
                    );
                }
                if payment.payment_date != order.order_date {
                    report.push(
                        "payments",
                        format!(
                            "payment {} date {} differs from order date {}",
                            payment.payment_id, payment.payment_date, order.order_date
                        ),
                    );
                }
                if !paid_orders.insert(payment.order_id) {
                    report.push(
                        "payments",
                        format!("order {} is paid more than once", payment.order_id),
                    );
                }
            }
        }
    }
    for order in &data.orders {
        if !paid_orders.contains(&order.order_id) {
            report.push(
                "payments",
                format!("order {} has no payment", order.order_id),
            );
        }
    }

    report
}

fn unique_ids(
    ids: impl Iterator<Item = u32>,
    table: &'static str,
    report: &mut IntegrityReport,
) -> HashSet<u32> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            report.push(table, format!("duplicate identity {}", id));
        }
    }
    seen
}

/// Validate the five CSV files in `dir` against the same invariants.
///
/// Works on the parsed string cells directly; a malformed file (missing,
/// unparsable, wrong header) is an error rather than a violation.
pub fn check_files(dir: &Path) -> Result<IntegrityReport> {
    let mut report = IntegrityReport::default();

    let customers = read_named(dir, "customers.csv")?;
    let products = read_named(dir, "products.csv")?;
    let orders = read_named(dir, "orders.csv")?;
    let order_items = read_named(dir, "order_items.csv")?;
    let payments = read_named(dir, "payments.csv")?;

    let customer_ids = file_id_set(&customers, "customers", "customer_id", &mut report)?;
    let product_ids = file_id_set(&products, "products", "product_id", &mut report)?;
    let order_ids = file_id_set(&orders, "orders", "order_id", &mut report)?;
    file_id_set(&order_items, "order_items", "order_item_id", &mut report)?;
    file_id_set(&payments, "payments", "payment_id", &mut report)?;

    // orders → customers
    let fk_col = orders.1.column_index(&orders.0, "customer_id")?;
    for row in &orders.1.rows {
        if !customer_ids.contains(&row[fk_col]) {
            report.push(
                "orders",
                format!("customer_id {} does not resolve", row[fk_col]),
            );
        }
    }

    // order_items → orders, products; totals and distinctness
    let item_order = order_items.1.column_index(&order_items.0, "order_id")?;
    let item_product = order_items.1.column_index(&order_items.0, "product_id")?;
    let item_qty = order_items.1.column_index(&order_items.0, "quantity")?;
    let item_price = order_items.1.column_index(&order_items.0, "unit_price")?;

    let mut sums: HashMap<String, f64> = HashMap::new();
    let mut item_counts: HashMap<String, usize> = HashMap::new();
    let mut products_per_order: HashMap<String, HashSet<String>> = HashMap::new();
    for (idx, row) in order_items.1.rows.iter().enumerate() {
        if !order_ids.contains(&row[item_order]) {
            report.push(
                "order_items",
                format!("order_id {} does not resolve", row[item_order]),
            );
        }
        if !product_ids.contains(&row[item_product]) {
            report.push(
                "order_items",
                format!("product_id {} does not resolve", row[item_product]),
            );
        }
        let qty = parse_number(&order_items.0, idx, &row[item_qty])?;
        let price = parse_number(&order_items.0, idx, &row[item_price])?;
        if !(1.0..=3.0).contains(&qty) || qty.fract() != 0.0 {
            report.push(
                "order_items",
                format!(
                    "item {} has out-of-range quantity {}",
                    row[item_order], row[item_qty]
                ),
            );
        }
        *sums.entry(row[item_order].clone()).or_default() += qty * price;
        *item_counts.entry(row[item_order].clone()).or_default() += 1;

        if !products_per_order
            .entry(row[item_order].clone())
            .or_default()
            .insert(row[item_product].clone())
        {
            report.push(
                "order_items",
                format!("order {} contains a repeated product", row[item_order]),
            );
        }
    }

    let order_id_col = orders.1.column_index(&orders.0, "order_id")?;
    let order_total = orders.1.column_index(&orders.0, "total_amount")?;
    let order_date = orders.1.column_index(&orders.0, "order_date")?;
    let mut order_fields: HashMap<&str, (f64, &str)> = HashMap::new();
    for (idx, row) in orders.1.rows.iter().enumerate() {
        let total = parse_number(&orders.0, idx, &row[order_total])?;
        order_fields.insert(row[order_id_col].as_str(), (total, row[order_date].as_str()));

        let sum = sums.get(&row[order_id_col]).copied().unwrap_or(0.0);
        if (total - round2(sum)).abs() > TOTAL_TOLERANCE {
            report.push(
                "orders",
                format!(
                    "order {} total {} does not match item sum {}",
                    row[order_id_col],
                    total,
                    round2(sum)
                ),
            );
        }

        let count = item_counts.get(&row[order_id_col]).copied().unwrap_or(0);
        if !(1..=4).contains(&count) {
            report.push(
                "order_items",
                format!(
                    "order {} has {} line items, expected 1 to 4",
                    row[order_id_col], count
                ),
            );
        }
    }

    // payments → orders, copied fields
    let pay_order = payments.1.column_index(&payments.0, "order_id")?;
    let pay_amount = payments.1.column_index(&payments.0, "amount")?;
    let pay_date = payments.1.column_index(&payments.0, "payment_date")?;
    let mut paid: HashSet<&str> = HashSet::new();
    for (idx, row) in payments.1.rows.iter().enumerate() {
        match order_fields.get(row[pay_order].as_str()) {
            None => report.push(
                "payments",
                format!("order_id {} does not resolve", row[pay_order]),
            ),
            Some(&(total, date)) => {
                let amount = parse_number(&payments.0, idx, &row[pay_amount])?;
                if (amount - total).abs() > TOTAL_TOLERANCE {
                    report.push(
                        "payments",
                        format!(
                            "payment for order {} amount {} differs from order total {}",
                            row[pay_order], amount, total
                        ),
                    );
                }
                if row[pay_date] != date {
                    report.push(
                        "payments",
                        format!(
                            "payment for order {} date {} differs from order date {}",
                            row[pay_order], row[pay_date], date
                        ),
                    );
                }
                if !paid.insert(row[pay_order].as_str()) {
                    report.push(
                        "payments",
                        format!("order {} is paid more than once", row[pay_order]),
                    );
                }
            }
        }
    }
    if paid.len() != orders.1.rows.len() {
        report.push(
            "payments",
            format!(
                "{} orders but {} paid orders",
                orders.1.rows.len(),
                paid.len()
            ),
        );
    }

    Ok(report)
}

fn read_named(dir: &Path, name: &str) -> Result<(std::path::PathBuf, CsvTable)> {
    let path = dir.join(name);
    let table = read_table(&path)?;
    Ok((path, table))
}

fn file_id_set(
    (path, table): &(std::path::PathBuf, CsvTable),
    name: &'static str,
    id_column: &str,
    report: &mut IntegrityReport,
) -> Result<HashSet<String>> {
    let idx = table.column_index(path, id_column)?;
    let mut seen = HashSet::new();
    for row in &table.rows {
        if !seen.insert(row[idx].clone()) {
            report.push(name, format!("duplicate identity {}", row[idx]));
        }
    }
    Ok(seen)
}

fn parse_number(path: &Path, row_index: usize, cell: &str) -> Result<f64> {
    cell.parse::<f64>().map_err(|_| EcomSeedError::Parse {
        path: path.display().to_string(),
        // +2: one for the header row, one for 1-based line numbers.
        line: row_index + 2,
        message: format!("'{}' is not a number", cell),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{generate_dataset, GenerationSpec};

    #[test]
    fn test_generated_dataset_is_clean() {
        let data = generate_dataset(&GenerationSpec::default()).unwrap();
        let report = check_dataset(&data);
        assert!(report.is_clean(), "{}", report.summary());
    }

    #[test]
    fn test_tampered_payment_amount_is_flagged() {
        let mut data = generate_dataset(&GenerationSpec::default()).unwrap();
        data.payments[0].amount += 1.0;
        let report = check_dataset(&data);
        assert!(!report.is_clean());
        assert!(report.summary().contains("differs from order total"));
    }

    #[test]
    fn test_dangling_order_reference_is_flagged() {
        let mut data = generate_dataset(&GenerationSpec::default()).unwrap();
        data.orders[0].customer_id = 9999;
        let report = check_dataset(&data);
        assert!(report
            .violations
            .iter()
            .any(|v| v.table == "orders" && v.message.contains("missing customer 9999")));
    }

    #[test]
    fn test_repeated_product_is_flagged() {
        let mut data = generate_dataset(&GenerationSpec::default()).unwrap();
        // Force a duplicate product inside the first order's item block.
        let first_order = data.order_items[0].order_id;
        let dup = data.order_items[0].product_id;
        let second_idx = data
            .order_items
            .iter()
            .position(|i| i.order_id == first_order && i.product_id != dup);
        if let Some(idx) = second_idx {
            data.order_items[idx].product_id = dup;
            let report = check_dataset(&data);
            assert!(report.summary().contains("repeated product"));
        }
    }

    #[test]
    fn test_duplicate_identity_is_flagged() {
        let mut data = generate_dataset(&GenerationSpec::default()).unwrap();
        data.customers[1].customer_id = data.customers[0].customer_id;
        let report = check_dataset(&data);
        assert!(report.summary().contains("duplicate identity"));
    }

    #[test]
    fn test_order_without_items_is_flagged() {
        let mut data = generate_dataset(&GenerationSpec::default()).unwrap();
        let empty_order = data.orders[0].order_id;
        data.order_items.retain(|i| i.order_id != empty_order);
        data.orders[0].total_amount = 0.0;
        data.payments[0].amount = 0.0;
        let report = check_dataset(&data);
        assert!(report.violations.iter().any(|v| {
            v.table == "order_items"
                && v.message == format!("order {} has 0 line items, expected 1 to 4", empty_order)
        }));
    }

    #[test]
    fn test_oversized_order_is_flagged() {
        let mut data = generate_dataset(&GenerationSpec::default()).unwrap();
        // Pile five distinct products onto the first order, total kept honest.
        let order_id = data.orders[0].order_id;
        data.order_items.retain(|i| i.order_id != order_id);
        let next_id = data
            .order_items
            .iter()
            .map(|i| i.order_item_id)
            .max()
            .unwrap();
        for n in 0..5u32 {
            data.order_items.push(crate::model::OrderItem {
                order_item_id: next_id + n + 1,
                order_id,
                product_id: n + 1,
                quantity: 1,
                unit_price: data.products[n as usize].price,
            });
        }
        let total = round2(data.products[..5].iter().map(|p| p.price).sum());
        data.orders[0].total_amount = total;
        data.payments[0].amount = total;
        let report = check_dataset(&data);
        assert!(report
            .summary()
            .contains(&format!("order {} has 5 line items", order_id)));
    }

    #[test]
    fn test_file_checker_flags_empty_order_and_bad_quantity() {
        let dir = tempfile::tempdir().unwrap();
        // Order 5001 carries no line items and a self-consistent 0.00 total;
        // order 5002's single item has quantity 7 with a matching total.
        let write = |name: &str, content: &str| {
            std::fs::write(dir.path().join(name), content).unwrap();
        };
        write(
            "customers.csv",
            "customer_id,first_name,last_name,email,phone,city,state,signup_date\n\
             1,Alice,Smith,alice.smith1@example.com,555-1001,Austin,TX,2024-01-05\n",
        );
        write(
            "products.csv",
            "product_id,product_name,category,price,stock_qty\n\
             1,Laptop,Electronics,10.00,100\n",
        );
        write(
            "orders.csv",
            "order_id,customer_id,order_date,status,total_amount,shipping_city\n\
             5001,1,2024-02-01,shipped,0.00,Austin\n\
             5002,1,2024-02-02,shipped,70.00,Austin\n",
        );
        write(
            "order_items.csv",
            "order_item_id,order_id,product_id,quantity,unit_price\n\
             1,5002,1,7,10.00\n",
        );
        write(
            "payments.csv",
            "payment_id,order_id,payment_date,amount,payment_method,payment_status\n\
             9001,5001,2024-02-01,0.00,credit_card,completed\n\
             9002,5002,2024-02-02,70.00,credit_card,completed\n",
        );

        let report = check_files(dir.path()).unwrap();
        assert!(!report.is_clean());
        assert!(report
            .summary()
            .contains("order 5001 has 0 line items, expected 1 to 4"));
        assert!(report
            .summary()
            .contains("item 5002 has out-of-range quantity 7"));
    }
}
