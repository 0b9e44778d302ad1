use anyhow::Result;
use comfy_table::Table as ComfyTable;

use ecomseed_core::generate::{generate_dataset, GenerationSpec};
use ecomseed_core::model::{Customer, Order, OrderItem, Payment, Product};
use ecomseed_core::output::TableRecord;

use crate::args::PreviewArgs;

pub fn run(args: &PreviewArgs) -> Result<()> {
    let spec = GenerationSpec {
        seed: args.seed,
        ..GenerationSpec::default()
    };
    let data = generate_dataset(&spec)?;

    print_table::<Customer>(&data.customers, args.rows);
    print_table::<Product>(&data.products, args.rows);
    print_table::<Order>(&data.orders, args.rows);
    print_table::<OrderItem>(&data.order_items, args.rows);
    print_table::<Payment>(&data.payments, args.rows);

    Ok(())
}

fn print_table<R: TableRecord>(records: &[R], sample: usize) {
    println!("━━━ {} ({} rows) ━━━", R::TABLE, records.len());

    let mut t = ComfyTable::new();
    t.set_header(R::COLUMNS.to_vec());

    for record in records.iter().take(sample) {
        let row = record.to_row();
        let values: Vec<String> = R::COLUMNS
            .iter()
            .map(|col| {
                row.get(*col)
                    .map(|v| truncate_cell(format!("{}", v)))
                    .unwrap_or_default()
            })
            .collect();
        t.add_row(values);
    }

    println!("{}\n", t);
}

/// Clip long cells to 40 characters, counting chars so multi-byte text never
/// splits mid-codepoint.
fn truncate_cell(s: String) -> String {
    if s.chars().count() > 40 {
        format!("{}...", s.chars().take(37).collect::<String>())
    } else {
        s
    }
}
