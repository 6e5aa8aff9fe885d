// Copyright 2025 the TableSort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-to-sort rules for existing tables.
//!
//! `tablesort` enhances a table that is already rendered (for example an HTML
//! `<table>`) by reordering its rows in place when a header is clicked. No data
//! model is built: rows stay opaque handles owned by the host toolkit, and the
//! only thing a sort ever changes is their relative position.
//!
//! This crate holds the toolkit-independent part:
//! - [`NumericColumns`]: the parsed `numeric="2,4"` configuration,
//! - [`ColumnStates`]: the per-column `unset → up → down → up` state machine,
//! - [`CellComparator`] and [`Collator`]: text/integer ordering of cell text,
//! - [`RowSnapshot`] and [`CellProjection`]: a stable sort over opaque rows,
//! - [`WidgetRegistry`]: define-once registration of the widget type,
//! - [`locate_parts`]: the structural precondition check run at mount.
//!
//! Binding these to a real DOM is done by adapter crates such as
//! `tablesort_web`.
//!
//! ```
//! use tablesort_core::{CodepointCollator, ColumnOrdinal, ColumnStates, NumericColumns, RowSnapshot};
//!
//! let numeric = NumericColumns::parse("2").unwrap();
//! let mut states = ColumnStates::new(2, &numeric);
//! let mut rows = RowSnapshot::new(vec![["b", "10"], ["a", "9"], ["c", "2"]]);
//!
//! let second = ColumnOrdinal::new(2).unwrap();
//! let request = states.click(second).unwrap();
//! rows.sort(&request, &|row: &[&'static str; 2], ord: ColumnOrdinal| {
//!     row.get(ord.index()).map(|s| s.to_string())
//! }, &CodepointCollator);
//!
//! let order: Vec<_> = rows.rows().iter().map(|r| r[1]).collect();
//! assert_eq!(order, ["2", "9", "10"]);
//! ```

#![no_std]

extern crate alloc;

pub mod attrs;
mod column;
mod compare;
mod config;
mod mount;
mod order;
mod registry;
mod snapshot;
#[cfg(test)]
mod sort_tests;

pub use column::{Column, ColumnOrdinal, ColumnStates, SortRequest};
pub use compare::{CellComparator, CodepointCollator, Collator, parse_leading_int};
pub use config::{ConfigError, NumericColumns};
pub use mount::{MountError, TableParts, locate_parts};
pub use order::{Direction, SortOrder};
pub use registry::{Registration, RegistryError, WidgetRegistry, validate_tag_name};
pub use snapshot::{CellProjection, RowSnapshot};
