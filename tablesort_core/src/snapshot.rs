// Copyright 2025 the TableSort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row snapshots.
//!
//! The host toolkit stays the only store of row data. A [`RowSnapshot`] holds
//! opaque row handles captured at click time, and a [`CellProjection`] reads
//! the text of one cell from a handle. Sorting only permutes the handles, so
//! reinserting them keeps every row's identity, attributes and markup.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::attrs;
use crate::column::{ColumnOrdinal, SortRequest};
use crate::compare::{CellComparator, Collator, SortKey};

/// Reads the rendered text of a cell.
pub trait CellProjection<R: ?Sized> {
    /// Text of the cell at `ordinal` in `row`, or `None` if the row has no such cell.
    fn cell_text(&self, row: &R, ordinal: ColumnOrdinal) -> Option<String>;
}

impl<R: ?Sized, F> CellProjection<R> for F
where
    F: Fn(&R, ColumnOrdinal) -> Option<String>,
{
    fn cell_text(&self, row: &R, ordinal: ColumnOrdinal) -> Option<String> {
        self(row, ordinal)
    }
}

/// An ordered list of opaque row handles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowSnapshot<R> {
    rows: Vec<R>,
}

impl<R> RowSnapshot<R> {
    /// Captures `rows` in their current order.
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    /// Rows in snapshot order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Stably sorts the rows for `request`.
    ///
    /// Each row's cell text is read once. A row without a cell at the requested
    /// ordinal is compared as the empty string. Returns `true` if the order
    /// changed.
    pub fn sort<P, C>(&mut self, request: &SortRequest, projection: &P, collator: C) -> bool
    where
        P: CellProjection<R> + ?Sized,
        C: Collator,
    {
        let comparator = CellComparator::new(request, collator);
        let mut missing = 0_usize;
        let keys: Vec<SortKey> = self
            .rows
            .iter()
            .map(|row| match projection.cell_text(row, request.ordinal) {
                Some(text) => comparator.key(&text),
                None => {
                    missing += 1;
                    comparator.key("")
                }
            })
            .collect();
        if missing > 0 {
            log::debug!(
                "{}: {missing} row(s) have no cell {}",
                attrs::LOG_PREFIX,
                request.ordinal
            );
        }

        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        order.sort_by(|&a, &b| comparator.compare_keys(&keys[a], &keys[b]));
        if order.iter().enumerate().all(|(i, &j)| i == j) {
            return false;
        }

        let mut slots: Vec<Option<R>> = core::mem::take(&mut self.rows)
            .into_iter()
            .map(Some)
            .collect();
        self.rows = order.into_iter().filter_map(|i| slots[i].take()).collect();
        log::debug!(
            "{}: sorted {} row(s) on column {} {:?}",
            attrs::LOG_PREFIX,
            self.rows.len(),
            request.ordinal,
            request.direction
        );
        true
    }
}

impl<R> FromIterator<R> for RowSnapshot<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
