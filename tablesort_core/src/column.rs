// Copyright 2025 the TableSort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column descriptors and the per-column sort state machine.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroU32;

use crate::attrs;
use crate::config::NumericColumns;
use crate::order::{Direction, SortOrder};

/// A 1-based column position, matching the body cell position it sorts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnOrdinal(NonZeroU32);

impl ColumnOrdinal {
    /// The leftmost column.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates an ordinal from a 1-based column number; `0` is rejected.
    #[must_use]
    pub fn new(ordinal: u32) -> Option<Self> {
        NonZeroU32::new(ordinal).map(Self)
    }

    /// Creates an ordinal from a 0-based header index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        let ordinal = u32::try_from(index).ok()?.checked_add(1)?;
        Self::new(ordinal)
    }

    /// The 1-based column number.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The 0-based index of this column.
    #[must_use]
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Display for ColumnOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything a click on one header produces: which column to sort on, and how.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortRequest {
    /// Column whose cell text is compared.
    pub ordinal: ColumnOrdinal,
    /// Resolved direction after the toggle.
    pub direction: Direction,
    /// Whether cells are compared as leading integers instead of text.
    pub numeric: bool,
}

/// One header cell's bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    ordinal: ColumnOrdinal,
    numeric: bool,
    order: SortOrder,
}

impl Column {
    /// Position of the column.
    #[must_use]
    pub fn ordinal(&self) -> ColumnOrdinal {
        self.ordinal
    }

    /// Whether the column compares by integer value.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.numeric
    }

    /// Current sort indicator.
    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// The `(name, value)` pairs reflecting this column's order on its header.
    ///
    /// The numeric marker is not included; it is set once at mount.
    #[must_use]
    pub fn order_attributes(&self) -> [(&'static str, &'static str); 2] {
        [
            (attrs::SORT_ORDER, self.order.attribute_value()),
            (attrs::ARIA_SORT, self.order.aria_sort()),
        ]
    }
}

/// Sort state for every column of one mounted table.
///
/// At most one column carries a non-[`SortOrder::Unset`] order at any time.
#[derive(Clone, Debug, Default)]
pub struct ColumnStates {
    columns: Vec<Column>,
}

impl ColumnStates {
    /// Creates `count` unset columns, flagging those listed in `numeric`.
    ///
    /// Numeric entries beyond `count` are ignored.
    pub fn new(count: usize, numeric: &NumericColumns) -> Self {
        let columns = (0..count)
            .map_while(ColumnOrdinal::from_index)
            .map(|ordinal| Column {
                ordinal,
                numeric: numeric.contains(ordinal),
                order: SortOrder::Unset,
            })
            .collect();
        Self { columns }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` when the table has no header cells.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All columns, left to right.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Gets a column by ordinal.
    pub fn get(&self, ordinal: ColumnOrdinal) -> Option<&Column> {
        self.columns.get(ordinal.index())
    }

    /// The column currently sorted on, if any.
    pub fn active(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.order != SortOrder::Unset)
    }

    /// Handles a click on the header at `ordinal`.
    ///
    /// Every other column is reset to `Unset` and the clicked one is toggled.
    /// Returns `None`, leaving all state untouched, if `ordinal` is out of range.
    pub fn click(&mut self, ordinal: ColumnOrdinal) -> Option<SortRequest> {
        let index = ordinal.index();
        if index >= self.columns.len() {
            return None;
        }

        for (i, column) in self.columns.iter_mut().enumerate() {
            if i != index {
                column.order = SortOrder::Unset;
            }
        }

        let column = &mut self.columns[index];
        column.order = column.order.toggled();
        let direction = column.order.direction()?;
        log::debug!(
            "{}: column {} now {:?}",
            attrs::LOG_PREFIX,
            ordinal,
            column.order
        );
        Some(SortRequest {
            ordinal,
            direction,
            numeric: column.numeric,
        })
    }

    /// Returns every column to `Unset`.
    pub fn reset(&mut self) {
        for column in &mut self.columns {
            column.order = SortOrder::Unset;
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn ord(n: u32) -> ColumnOrdinal {
        ColumnOrdinal::new(n).unwrap()
    }

    #[test]
    fn ordinal_zero_is_rejected() {
        assert_eq!(ColumnOrdinal::new(0), None);
        assert_eq!(ColumnOrdinal::from_index(0), Some(ColumnOrdinal::FIRST));
        assert_eq!(ord(3).index(), 2);
    }

    #[test]
    fn new_states_are_unset_and_flag_numeric_columns() {
        let numeric = NumericColumns::parse("2,9").unwrap();
        let states = ColumnStates::new(3, &numeric);
        assert_eq!(states.len(), 3);
        assert!(states.active().is_none());
        let flags: std::vec::Vec<bool> = states.columns().iter().map(Column::is_numeric).collect();
        assert_eq!(flags, [false, true, false]);
    }

    #[test]
    fn click_resets_other_columns() {
        let mut states = ColumnStates::new(3, &NumericColumns::default());
        states.click(ord(1)).unwrap();
        states.click(ord(1)).unwrap();
        let request = states.click(ord(3)).unwrap();

        assert_eq!(request.direction, Direction::Ascending);
        assert_eq!(states.get(ord(1)).unwrap().order(), SortOrder::Unset);
        assert_eq!(states.get(ord(3)).unwrap().order(), SortOrder::Ascending);
        let flagged = states
            .columns()
            .iter()
            .filter(|c| c.order() != SortOrder::Unset)
            .count();
        assert_eq!(flagged, 1);
    }

    #[test]
    fn out_of_range_click_changes_nothing() {
        let mut states = ColumnStates::new(2, &NumericColumns::default());
        states.click(ord(2)).unwrap();
        assert_eq!(states.click(ord(5)), None);
        assert_eq!(states.active().unwrap().ordinal(), ord(2));
    }

    #[test]
    fn order_attributes_follow_state() {
        let mut states = ColumnStates::new(1, &NumericColumns::default());
        let column = states.get(ord(1)).unwrap();
        assert_eq!(
            column.order_attributes(),
            [("data-sort-order", ""), ("aria-sort", "none")]
        );
        states.click(ord(1));
        states.click(ord(1));
        let column = states.get(ord(1)).unwrap();
        assert_eq!(
            column.order_attributes(),
            [("data-sort-order", "down"), ("aria-sort", "descending")]
        );
    }
}
