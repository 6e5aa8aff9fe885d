// Copyright 2025 the TableSort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{
    CodepointCollator, ColumnOrdinal, ColumnStates, NumericColumns, RowSnapshot, SortOrder,
};

/// An in-memory row standing in for a DOM `<tr>`.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Row {
    id: u32,
    class: &'static str,
    cells: Vec<&'static str>,
}

fn cell(row: &Row, ordinal: ColumnOrdinal) -> Option<String> {
    row.cells.get(ordinal.index()).map(|s| s.to_string())
}

struct Table {
    states: ColumnStates,
    rows: RowSnapshot<Row>,
}

impl Table {
    fn new(numeric: &str, rows: &[&[&'static str]]) -> Self {
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let numeric = NumericColumns::parse(numeric).unwrap();
        let rows = rows
            .iter()
            .zip(0_u32..)
            .map(|(cells, id)| Row {
                id,
                class: if id % 2 == 0 { "even" } else { "odd" },
                cells: cells.to_vec(),
            })
            .collect();
        Self {
            states: ColumnStates::new(width, &numeric),
            rows,
        }
    }

    fn click(&mut self, ordinal: u32) {
        let ordinal = ColumnOrdinal::new(ordinal).unwrap();
        let request = self.states.click(ordinal).unwrap();
        self.rows.sort(&request, &cell, CodepointCollator);
    }

    fn column(&self, ordinal: u32) -> Vec<&'static str> {
        let i = ordinal as usize - 1;
        self.rows.rows().iter().map(|r| r.cells[i]).collect()
    }

    fn order(&self, ordinal: u32) -> SortOrder {
        let ordinal = ColumnOrdinal::new(ordinal).unwrap();
        self.states.get(ordinal).unwrap().order()
    }
}

fn fruit() -> Table {
    Table::new(
        "2",
        &[
            &["banana", "10"],
            &["Apple", "9"],
            &["cherry", "2"],
            &["apricot", "31"],
        ],
    )
}

#[test]
fn first_click_sorts_text_non_decreasing_ignoring_case() {
    let mut t = fruit();
    t.click(1);
    assert_eq!(t.column(1), ["Apple", "apricot", "banana", "cherry"]);
    assert_eq!(t.order(1), SortOrder::Ascending);
}

#[test]
fn repeated_clicks_alternate_and_never_unsort() {
    let mut t = fruit();
    t.click(1);
    t.click(1);
    assert_eq!(t.column(1), ["cherry", "banana", "apricot", "Apple"]);
    assert_eq!(t.order(1), SortOrder::Descending);

    t.click(1);
    assert_eq!(t.column(1), ["Apple", "apricot", "banana", "cherry"]);
    assert_eq!(t.order(1), SortOrder::Ascending);
}

#[test]
fn clicking_another_header_resets_the_previous_one() {
    let mut t = fruit();
    t.click(1);
    t.click(2);
    assert_eq!(t.order(1), SortOrder::Unset);
    assert_eq!(t.order(2), SortOrder::Ascending);
    let flagged = t
        .states
        .columns()
        .iter()
        .filter(|c| c.order() != SortOrder::Unset)
        .count();
    assert_eq!(flagged, 1);
}

#[test]
fn sorting_only_moves_rows() {
    let mut t = fruit();
    let mut before = t.rows.rows().to_vec();
    t.click(1);
    t.click(2);
    let mut after = t.rows.rows().to_vec();

    before.sort_by_key(|r| r.id);
    after.sort_by_key(|r| r.id);
    assert_eq!(before, after, "row contents or attributes changed");
    for row in &after {
        let class = if row.id % 2 == 0 { "even" } else { "odd" };
        assert_eq!(row.class, class, "row {} lost its class", row.id);
    }
}

#[test]
fn numeric_column_sorts_by_value() {
    let mut t = Table::new("1", &[&["10"], &["9"], &["2"]]);
    t.click(1);
    assert_eq!(t.column(1), ["2", "9", "10"]);
}

#[test]
fn non_numeric_column_sorts_lexicographically() {
    let mut t = Table::new("", &[&["10"], &["9"], &["2"]]);
    t.click(1);
    assert_eq!(t.column(1), ["10", "2", "9"]);
}

// Unparsable values lead in both directions. This mirrors the widget's
// long-standing behavior rather than a "nulls last" policy.
#[test]
fn unparsable_numeric_values_lead_in_both_directions() {
    let mut t = Table::new("1", &[&["10"], &["abc"], &["2"]]);
    t.click(1);
    assert_eq!(t.column(1), ["abc", "2", "10"]);
    t.click(1);
    assert_eq!(t.column(1), ["abc", "10", "2"]);
}

#[test]
fn unparsable_values_keep_their_relative_order() {
    let mut t = Table::new("1", &[&["x"], &["5"], &["-"], &["1"], &["n/a"]]);
    t.click(1);
    assert_eq!(t.column(1), ["x", "-", "n/a", "1", "5"]);
}

#[test]
fn resorting_in_the_same_direction_is_idempotent() {
    let mut t = fruit();
    let ordinal = ColumnOrdinal::new(1).unwrap();
    let request = t.states.click(ordinal).unwrap();
    assert!(t.rows.sort(&request, &cell, CodepointCollator));
    let once = t.rows.clone();
    assert!(!t.rows.sort(&request, &cell, CodepointCollator));
    assert_eq!(t.rows, once);
}

#[test]
fn equal_keys_keep_document_order() {
    let mut t = Table::new("", &[&["b", "first"], &["a", "x"], &["B", "second"]]);
    t.click(1);
    assert_eq!(t.column(2), ["x", "first", "second"]);
    t.click(1);
    assert_eq!(t.column(2), ["first", "second", "x"]);
}

#[test]
fn missing_cells_compare_as_empty_text() {
    let mut t = Table::new("", &[&["b", "2"], &["a"], &["c", "1"]]);
    t.click(2);
    let ids: Vec<u32> = t.rows.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, [1, 2, 0]);
    t.click(2);
    let ids: Vec<u32> = t.rows.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, [0, 2, 1]);
}

#[test]
fn missing_cells_in_numeric_columns_lead() {
    let mut t = Table::new("2", &[&["b", "2"], &["a"], &["c", "1"]]);
    t.click(2);
    t.click(2);
    let ids: Vec<u32> = t.rows.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, [1, 0, 2]);
}

#[test]
fn empty_body_sorts_to_nothing() {
    let mut t = Table::new("", &[]);
    t.states = ColumnStates::new(2, &NumericColumns::default());
    t.click(2);
    assert!(t.rows.is_empty());
}
