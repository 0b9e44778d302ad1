//! # Serialization Sinks
//!
//! Turns generated entities into tabular rows and writes them out. Each
//! entity type declares its table name and fixed column order through
//! [`TableRecord`]; the sinks emit columns strictly in that declared order
//! and fail loudly if a row is missing one (`MissingColumn`), rather than
//! truncating or reordering.

pub mod csv;
pub mod json;
pub mod value;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::{EcomSeedError, Result};
use crate::generate::Dataset;
use crate::model::{Customer, Order, OrderItem, Payment, Product};
pub use value::Value;

/// A record that serializes into a fixed-contract table row.
///
/// Rows are `IndexMap`s (not `HashMap`s) so column insertion order is
/// preserved and output is deterministic.
pub trait TableRecord {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn to_row(&self) -> IndexMap<String, Value>;
}

impl TableRecord for Customer {
    const TABLE: &'static str = "customers";
    const COLUMNS: &'static [&'static str] = &[
        "customer_id",
        "first_name",
        "last_name",
        "email",
        "phone",
        "city",
        "state",
        "signup_date",
    ];

    fn to_row(&self) -> IndexMap<String, Value> {
        IndexMap::from([
            ("customer_id".to_string(), Value::Int(self.customer_id as i64)),
            ("first_name".to_string(), Value::String(self.first_name.into())),
            ("last_name".to_string(), Value::String(self.last_name.into())),
            ("email".to_string(), Value::String(self.email.clone().into())),
            ("phone".to_string(), Value::String(self.phone.clone().into())),
            ("city".to_string(), Value::String(self.city.into())),
            ("state".to_string(), Value::String(self.state.into())),
            ("signup_date".to_string(), Value::Date(self.signup_date)),
        ])
    }
}

impl TableRecord for Product {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] =
        &["product_id", "product_name", "category", "price", "stock_qty"];

    fn to_row(&self) -> IndexMap<String, Value> {
        IndexMap::from([
            ("product_id".to_string(), Value::Int(self.product_id as i64)),
            ("product_name".to_string(), Value::String(self.product_name.into())),
            ("category".to_string(), Value::String(self.category.into())),
            ("price".to_string(), Value::Money(self.price)),
            ("stock_qty".to_string(), Value::Int(self.stock_qty as i64)),
        ])
    }
}

impl TableRecord for Order {
    const TABLE: &'static str = "orders";
    const COLUMNS: &'static [&'static str] = &[
        "order_id",
        "customer_id",
        "order_date",
        "status",
        "total_amount",
        "shipping_city",
    ];

    fn to_row(&self) -> IndexMap<String, Value> {
        IndexMap::from([
            ("order_id".to_string(), Value::Int(self.order_id as i64)),
            ("customer_id".to_string(), Value::Int(self.customer_id as i64)),
            ("order_date".to_string(), Value::Date(self.order_date)),
            ("status".to_string(), Value::String(self.status.as_str().into())),
            ("total_amount".to_string(), Value::Money(self.total_amount)),
            ("shipping_city".to_string(), Value::String(self.shipping_city.into())),
        ])
    }
}

impl TableRecord for OrderItem {
    const TABLE: &'static str = "order_items";
    const COLUMNS: &'static [&'static str] =
        &["order_item_id", "order_id", "product_id", "quantity", "unit_price"];

    fn to_row(&self) -> IndexMap<String, Value> {
        IndexMap::from([
            ("order_item_id".to_string(), Value::Int(self.order_item_id as i64)),
            ("order_id".to_string(), Value::Int(self.order_id as i64)),
            ("product_id".to_string(), Value::Int(self.product_id as i64)),
            ("quantity".to_string(), Value::Int(self.quantity as i64)),
            ("unit_price".to_string(), Value::Money(self.unit_price)),
        ])
    }
}

impl TableRecord for Payment {
    const TABLE: &'static str = "payments";
    const COLUMNS: &'static [&'static str] = &[
        "payment_id",
        "order_id",
        "payment_date",
        "amount",
        "payment_method",
        "payment_status",
    ];

    fn to_row(&self) -> IndexMap<String, Value> {
        IndexMap::from([
            ("payment_id".to_string(), Value::Int(self.payment_id as i64)),
            ("order_id".to_string(), Value::Int(self.order_id as i64)),
            ("payment_date".to_string(), Value::Date(self.payment_date)),
            ("amount".to_string(), Value::Money(self.amount)),
            (
                "payment_method".to_string(),
                Value::String(self.payment_method.as_str().into()),
            ),
            (
                "payment_status".to_string(),
                Value::String(self.payment_status.as_str().into()),
            ),
        ])
    }
}

/// File names of the five dataset tables, in generation order.
pub const TABLE_FILES: &[&str] = &[
    "customers.csv",
    "products.csv",
    "orders.csv",
    "order_items.csv",
    "payments.csv",
];

/// Write one CSV file per table into `dir`, creating it if needed.
/// Returns the written paths in generation order.
pub fn write_dataset_csv(dir: &Path, data: &Dataset) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| EcomSeedError::Output {
        message: format!("creating output directory {}", dir.display()),
        source: e,
    })?;

    let mut written = Vec::with_capacity(TABLE_FILES.len());
    written.push(write_table_file(dir, &data.customers)?);
    written.push(write_table_file(dir, &data.products)?);
    written.push(write_table_file(dir, &data.orders)?);
    written.push(write_table_file(dir, &data.order_items)?);
    written.push(write_table_file(dir, &data.payments)?);
    Ok(written)
}

fn write_table_file<R: TableRecord>(dir: &Path, records: &[R]) -> Result<PathBuf> {
    let path = dir.join(format!("{}.csv", R::TABLE));
    let file = File::create(&path).map_err(|e| EcomSeedError::Output {
        message: format!("creating {}", path.display()),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    csv::write_records(&mut writer, records)?;
    Ok(path)
}
