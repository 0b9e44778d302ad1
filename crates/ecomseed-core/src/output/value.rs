use std::borrow::Cow;

use chrono::NaiveDate;

/// A cell value in a serialized table row.
///
/// The `String` variant uses `Cow<'static, str>` so values drawn from the
/// static catalogs (names, cities, statuses, methods) are zero-cost borrows,
/// while derived values (emails, phone numbers) are owned. `Money` is kept
/// separate from a general float so every currency cell serializes with
/// exactly two decimal places.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Money(f64),
    String(Cow<'static, str>),
    Date(NaiveDate),
}

impl Value {
    /// Convert to a CSV-friendly string (unescaped; the writer escapes).
    pub fn to_csv_string(&self) -> String {
        match self {
            Value::Int(i) => i.to_string(),
            Value::Money(m) => format!("{:.2}", m),
            Value::String(s) => s.to_string(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    /// Convert to a JSON value. Money keeps its numeric type.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Money(m) => serde_json::Number::from_f64(*m)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::from(s.as_ref()),
            Value::Date(d) => serde_json::Value::from(d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// `Display` matches the CSV rendering so previews and files agree.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Money(m) => write!(f, "{:.2}", m),
            Value::String(s) => write!(f, "{}", s),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}
