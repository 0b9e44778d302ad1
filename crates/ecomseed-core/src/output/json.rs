//! JSON sink: one streamed document keyed by table name.
//!
//! Writes table-by-table and row-by-row instead of building the whole tree
//! in memory first. Keys and values go through serde_json for RFC 8259
//! escaping.

use std::io::Write;

use indexmap::IndexMap;

use crate::error::{EcomSeedError, Result};
use crate::generate::Dataset;
use crate::output::{TableRecord, Value};

/// Write the whole dataset as a single JSON object, tables in generation
/// order.
pub fn write_dataset_json<W: Write>(writer: &mut W, data: &Dataset) -> Result<()> {
    write_str(writer, "{\n")?;
    write_table(writer, &data.customers, false)?;
    write_table(writer, &data.products, false)?;
    write_table(writer, &data.orders, false)?;
    write_table(writer, &data.order_items, false)?;
    write_table(writer, &data.payments, true)?;
    write_str(writer, "}\n")?;
    Ok(())
}

fn write_table<W: Write, R: TableRecord>(writer: &mut W, records: &[R], last: bool) -> Result<()> {
    write_str(writer, &format!("  {}: [\n", json_string(R::TABLE)))?;

    for (row_idx, record) in records.iter().enumerate() {
        let row = record.to_row();
        write_str(writer, "    {")?;
        write_row(writer, &row)?;
        write_str(writer, "}")?;
        if row_idx < records.len() - 1 {
            write_str(writer, ",")?;
        }
        write_str(writer, "\n")?;
    }

    write_str(writer, "  ]")?;
    if !last {
        write_str(writer, ",")?;
    }
    write_str(writer, "\n")
}

fn write_row<W: Write>(writer: &mut W, row: &IndexMap<String, Value>) -> Result<()> {
    for (col_idx, (col_name, value)) in row.iter().enumerate() {
        if col_idx > 0 {
            write_str(writer, ", ")?;
        }
        write_str(
            writer,
            &format!("{}: {}", json_string(col_name), json_value(value)?),
        )?;
    }
    Ok(())
}

fn json_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

fn json_value(value: &Value) -> Result<String> {
    serde_json::to_string(&value.to_json()).map_err(|e| EcomSeedError::Config {
        message: format!("JSON serialization error: {}", e),
    })
}

/// Helper to write a string slice and map IO errors.
fn write_str<W: Write>(writer: &mut W, s: &str) -> Result<()> {
    writer
        .write_all(s.as_bytes())
        .map_err(|e| EcomSeedError::Output {
            message: "writing JSON".to_string(),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{generate_dataset, GenerationSpec};

    #[test]
    fn test_output_is_valid_json_with_all_tables() {
        let spec = GenerationSpec {
            customers: 3,
            orders: 5,
            ..GenerationSpec::default()
        };
        let data = generate_dataset(&spec).unwrap();

        let mut buf = Vec::new();
        write_dataset_json(&mut buf, &data).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let obj = parsed.as_object().unwrap();
        for table in ["customers", "products", "orders", "order_items", "payments"] {
            assert!(obj.contains_key(table), "missing table {}", table);
        }
        assert_eq!(obj["customers"].as_array().unwrap().len(), 3);
        assert_eq!(obj["orders"].as_array().unwrap().len(), 5);
        assert_eq!(obj["products"].as_array().unwrap().len(), 20);

        // Quoted product names survive escaping.
        let names: Vec<&str> = obj["products"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["product_name"].as_str().unwrap())
            .collect();
        assert!(names.contains(&"Laptop 15\""));
    }

    #[test]
    fn test_empty_collections_serialize_as_empty_arrays() {
        let spec = GenerationSpec {
            customers: 0,
            orders: 0,
            ..GenerationSpec::default()
        };
        let data = generate_dataset(&spec).unwrap();

        let mut buf = Vec::new();
        write_dataset_json(&mut buf, &data).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["customers"].as_array().unwrap().len(), 0);
        assert_eq!(parsed["payments"].as_array().unwrap().len(), 0);
    }
}
