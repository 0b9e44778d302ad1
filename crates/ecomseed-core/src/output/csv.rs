//! CSV sink and reader for dataset tables.
//!
//! The writer emits a header row first, then one row per record with cells in
//! the declared column order. A row missing a declared column is a
//! `MissingColumn` error, never a silently empty cell. The reader exists for
//! the integrity checker and round-trip tests; it is line-based and does not
//! support embedded newlines (the generators never produce them).

use std::io::Write;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{EcomSeedError, Result};
use crate::output::{TableRecord, Value};

/// Write a full table (header + records) as CSV.
pub fn write_records<W: Write, R: TableRecord>(writer: &mut W, records: &[R]) -> Result<()> {
    let rows: Vec<IndexMap<String, Value>> = records.iter().map(|r| r.to_row()).collect();
    write_rows(writer, R::TABLE, R::COLUMNS, &rows)
}

/// Write rows against an explicit column contract.
///
/// The header is written even when `rows` is empty: an empty table is still a
/// valid table.
pub fn write_rows<W: Write>(
    writer: &mut W,
    table_name: &str,
    columns: &[&str],
    rows: &[IndexMap<String, Value>],
) -> Result<()> {
    writeln!(
        writer,
        "{}",
        columns
            .iter()
            .map(|c| csv_escape(c))
            .collect::<Vec<_>>()
            .join(",")
    )
    .map_err(|e| EcomSeedError::Output {
        message: format!("writing CSV header for {}", table_name),
        source: e,
    })?;

    for (row_index, row) in rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(columns.len());
        for col in columns {
            let value = row.get(*col).ok_or_else(|| EcomSeedError::MissingColumn {
                table: table_name.to_string(),
                column: col.to_string(),
                row_index,
            })?;
            cells.push(csv_escape(&value.to_csv_string()));
        }

        writeln!(writer, "{}", cells.join(",")).map_err(|e| EcomSeedError::Output {
            message: format!("writing CSV row for {}", table_name),
            source: e,
        })?;
    }

    Ok(())
}

/// A parsed CSV table: header plus string cells, one `Vec` per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of a named column, or a parse-style error naming the file.
    pub fn column_index(&self, path: &Path, column: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| EcomSeedError::Parse {
                path: path.display().to_string(),
                line: 1,
                message: format!("header is missing column '{}'", column),
            })
    }
}

/// Read a CSV file written by [`write_rows`] back into string cells.
pub fn read_table(path: &Path) -> Result<CsvTable> {
    let content = std::fs::read_to_string(path).map_err(|e| EcomSeedError::Output {
        message: format!("reading {}", path.display()),
        source: e,
    })?;

    let mut lines = content.lines().enumerate();
    let (_, header) = lines.next().ok_or_else(|| EcomSeedError::Parse {
        path: path.display().to_string(),
        line: 1,
        message: "file is empty, expected a header row".to_string(),
    })?;
    let columns = parse_line(path, 1, header)?;

    let mut rows = Vec::new();
    for (idx, line) in lines {
        if line.is_empty() {
            continue;
        }
        let cells = parse_line(path, idx + 1, line)?;
        if cells.len() != columns.len() {
            return Err(EcomSeedError::Parse {
                path: path.display().to_string(),
                line: idx + 1,
                message: format!("expected {} cells, found {}", columns.len(), cells.len()),
            });
        }
        rows.push(cells);
    }

    Ok(CsvTable { columns, rows })
}

/// Split one CSV line into cells, honoring quoted fields and doubled quotes.
fn parse_line(path: &Path, line_no: usize, line: &str) -> Result<Vec<String>> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    cell.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if cell.is_empty() => in_quotes = true,
            ',' if !in_quotes => {
                cells.push(std::mem::take(&mut cell));
            }
            _ => cell.push(ch),
        }
    }

    if in_quotes {
        return Err(EcomSeedError::Parse {
            path: path.display().to_string(),
            line: line_no,
            message: "unterminated quoted field".to_string(),
        });
    }

    cells.push(cell);
    Ok(cells)
}

/// Escape a string for CSV: quote if it contains comma, quote, or newline.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("hello"), "hello");
        assert_eq!(csv_escape("hello,world"), "\"hello,world\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_header_written_for_empty_table() {
        let mut buf = Vec::new();
        write_rows(&mut buf, "orders", &["order_id", "status"], &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "order_id,status\n");
    }

    #[test]
    fn test_missing_column_fails_loudly() {
        let mut buf = Vec::new();
        let row = IndexMap::from([("order_id".to_string(), Value::Int(5001))]);
        let err = write_rows(&mut buf, "orders", &["order_id", "status"], &[row]).unwrap_err();
        match err {
            EcomSeedError::MissingColumn { table, column, row_index } => {
                assert_eq!(table, "orders");
                assert_eq!(column, "status");
                assert_eq!(row_index, 0);
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_columns_emitted_in_declared_order() {
        let mut buf = Vec::new();
        // Row insertion order deliberately scrambled relative to the contract.
        let row = IndexMap::from([
            ("status".to_string(), Value::String("shipped".into())),
            ("order_id".to_string(), Value::Int(5001)),
        ]);
        write_rows(&mut buf, "orders", &["order_id", "status"], &[row]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "order_id,status\n5001,shipped\n"
        );
    }

    #[test]
    fn test_parse_line_handles_quotes() {
        let path = PathBuf::from("test.csv");
        let cells = parse_line(&path, 1, "1,\"Laptop 15\"\"\",999.99").unwrap();
        assert_eq!(cells, vec!["1", "Laptop 15\"", "999.99"]);
    }

    #[test]
    fn test_parse_line_rejects_unterminated_quote() {
        let path = PathBuf::from("test.csv");
        assert!(matches!(
            parse_line(&path, 3, "1,\"oops"),
            Err(EcomSeedError::Parse { line: 3, .. })
        ));
    }

    #[test]
    fn test_escape_then_parse_round_trip() {
        let path = PathBuf::from("test.csv");
        let fields = ["plain", "with,comma", "with \"quote\"", ""];
        let line = fields
            .iter()
            .map(|f| csv_escape(f))
            .collect::<Vec<_>>()
            .join(",");
        let parsed = parse_line(&path, 1, &line).unwrap();
        assert_eq!(parsed, fields);
    }
}
