// Copyright 2025 the TableSort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sort indicators.

use core::cmp::Ordering;

/// Tri-state sort indicator carried by every column.
///
/// A column starts [`SortOrder::Unset`] and only a header click moves it out of
/// that state. Once clicked it alternates between ascending and descending; it
/// never returns to `Unset` unless another column is clicked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// The column is not the sort key.
    #[default]
    Unset,
    /// Non-decreasing order (`data-sort-order="up"`).
    Ascending,
    /// Non-increasing order (`data-sort-order="down"`).
    Descending,
}

impl SortOrder {
    /// Returns the order a click on this column's header moves it to.
    ///
    /// `Unset → Ascending`, `Ascending → Descending`, `Descending → Ascending`.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Unset | Self::Descending => Self::Ascending,
            Self::Ascending => Self::Descending,
        }
    }

    /// The resolved direction, or `None` for [`SortOrder::Unset`].
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Unset => None,
            Self::Ascending => Some(Direction::Ascending),
            Self::Descending => Some(Direction::Descending),
        }
    }

    /// Value of the `data-sort-order` header attribute.
    #[must_use]
    pub fn attribute_value(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Ascending => "up",
            Self::Descending => "down",
        }
    }

    /// Value of the `aria-sort` header attribute.
    #[must_use]
    pub fn aria_sort(self) -> &'static str {
        match self {
            Self::Unset => "none",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// A resolved sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Natural order.
    Ascending,
    /// Reversed natural order.
    Descending,
}

impl Direction {
    /// Applies this direction to a natural-order comparison result.
    #[must_use]
    pub fn apply(self, natural: Ordering) -> Ordering {
        match self {
            Self::Ascending => natural,
            Self::Descending => natural.reverse(),
        }
    }
}
