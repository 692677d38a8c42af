//! End-to-end walkthrough: ingest placement records, sort, print the rows.
//!
//! Run with logging enabled to watch the model's trace output:
//!
//! ```text
//! RUST_LOG=mapforge_outline=trace cargo run --example placement_outline
//! ```

use mapforge_outline::{OutlineColumn, OutlineError, OutlineTree, PlacementRecord, SortKey};

fn record(name: &str, category: &str, numeric_id: u32) -> PlacementRecord<()> {
    PlacementRecord {
        name: name.to_string(),
        source_tag: "Rust".to_string(),
        category: category.to_string(),
        numeric_id,
        payload: (),
    }
}

fn main() -> Result<(), OutlineError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut tree = OutlineTree::from_records(vec![
        record("water_tower", "Industrial", 182340471),
        record("barricade", "Military", 2057881102),
        record("pumpjack", "Industrial", 1599225199),
        record("watchtower", "Military", 2322641),
    ])?;

    tree.signals()
        .layout_changed
        .connect(|_| println!("(layout changed, re-flattening)"));

    // The user clicked Category, then shift-clicked ID descending.
    tree.sort(&[
        SortKey::ascending(OutlineColumn::Category.index()),
        SortKey::descending(OutlineColumn::Id.index()),
    ])?;

    for column in OutlineColumn::ALL {
        print!("{:<14}", column.title());
    }
    println!();

    for element in tree.flatten_elements() {
        for column in OutlineColumn::ALL {
            print!("{:<14}", element.cell(column).to_string());
        }
        println!();
    }

    Ok(())
}
