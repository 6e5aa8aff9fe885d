// Copyright 2025 the TableSort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `tablesort_core`.
//!
//! Drives the sort rules against an in-memory table, standing in for the DOM,
//! and prints the row order after each simulated header click.

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use tablesort_core::{
    CodepointCollator, ColumnOrdinal, ColumnStates, NumericColumns, RowSnapshot, WidgetRegistry,
    attrs, locate_parts,
};

/// A row as the host toolkit would own it: identity, attributes, cells.
#[derive(Debug)]
struct Row {
    id: &'static str,
    class: &'static str,
    cells: [&'static str; 3],
}

const HEADERS: [&str; 3] = ["Name", "Age", "City"];

fn main() {
    if let Err(err) = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("debug logging disabled: {err}");
    }

    let mut registry = WidgetRegistry::new();
    for _ in 0..2 {
        println!("define <{}>: {:?}", attrs::DEFAULT_TAG, registry.register(attrs::DEFAULT_TAG));
    }

    let missing_body = locate_parts(Some("table"), |_| Some("thead"), |_| None::<&str>);
    println!("mount without tbody: {missing_body:?}");

    let numeric = NumericColumns::from_attribute(Some("2"));
    let mut states = ColumnStates::new(HEADERS.len(), &numeric);
    let mut rows = RowSnapshot::new(vec![
        Row { id: "r1", class: "vip", cells: ["grace", "85", "Arlington"] },
        Row { id: "r2", class: "", cells: ["Ada", "36", "London"] },
        Row { id: "r3", class: "", cells: ["linus", "unknown", "Helsinki"] },
        Row { id: "r4", class: "new", cells: ["Barbara", "9", "boston"] },
    ]);
    print_table("initial", &states, &rows);

    for ordinal in [1, 1, 2, 2, 3] {
        let Some(ordinal) = ColumnOrdinal::new(ordinal) else {
            continue;
        };
        let Some(request) = states.click(ordinal) else {
            continue;
        };
        rows.sort(
            &request,
            &|row: &Row, ord: ColumnOrdinal| row.cells.get(ord.index()).map(|s| s.to_string()),
            CodepointCollator,
        );
        let label = format!("click {} ({})", HEADERS[ordinal.index()], ordinal);
        print_table(&label, &states, &rows);
    }
}

fn print_table(label: &str, states: &ColumnStates, rows: &RowSnapshot<Row>) {
    println!("{label}:");
    let header: Vec<String> = HEADERS
        .iter()
        .zip(states.columns())
        .map(|(name, column)| {
            let numeric = if column.is_numeric() { " #" } else { "" };
            format!("{name}{numeric} [{}]", column.order().attribute_value())
        })
        .collect();
    println!("  {}", header.join(" | "));
    for row in rows.rows() {
        println!("  {} {:<4} {}", row.id, row.class, row.cells.join(" | "));
    }
}
