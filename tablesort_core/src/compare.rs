// Copyright 2025 the TableSort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell comparison.
//!
//! Text columns compare lowercased cell text through a [`Collator`]; numeric
//! columns compare the leading integer of each cell. A numeric cell with no
//! leading integer sorts before every parsable one in *both* directions. That
//! asymmetry is long-standing observable behavior of the widget and is kept
//! as-is.

extern crate alloc;

use alloc::string::String;
use core::cmp::Ordering;

use crate::column::SortRequest;
use crate::order::Direction;

/// Orders two already-lowercased strings.
///
/// Implementations can be:
/// - code point order ([`CodepointCollator`]), or
/// - backed by a platform collation service (e.g. `localeCompare` in the browser).
pub trait Collator {
    /// Compares `a` to `b` in natural (ascending) order.
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<C: Collator + ?Sized> Collator for &C {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        (**self).compare(a, b)
    }
}

/// Orders strings by Unicode code point.
#[derive(Clone, Copy, Debug, Default)]
pub struct CodepointCollator;

impl Collator for CodepointCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

/// Parses the leading base-10 integer of `text`.
///
/// Leading whitespace and one sign are accepted; anything after the digits is
/// ignored, so `"12px"` is `12`. Returns `None` when no digit follows.
/// Values outside `i64` saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    let mut any = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        any = true;
        let digit = i64::from(b - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    any.then_some(value)
}

/// A precomputed per-row comparison key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SortKey {
    Text(String),
    Number(Option<i64>),
}

/// Compares cell text according to a [`SortRequest`].
#[derive(Clone, Copy, Debug)]
pub struct CellComparator<C> {
    direction: Direction,
    numeric: bool,
    collator: C,
}

impl<C: Collator> CellComparator<C> {
    /// Builds a comparator for the given request.
    pub fn new(request: &SortRequest, collator: C) -> Self {
        Self {
            direction: request.direction,
            numeric: request.numeric,
            collator,
        }
    }

    /// Compares two cell texts.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.compare_keys(&self.key(a), &self.key(b))
    }

    pub(crate) fn key(&self, text: &str) -> SortKey {
        if self.numeric {
            SortKey::Number(parse_leading_int(text))
        } else {
            SortKey::Text(text.to_lowercase())
        }
    }

    pub(crate) fn compare_keys(&self, a: &SortKey, b: &SortKey) -> Ordering {
        match (a, b) {
            (SortKey::Number(a), SortKey::Number(b)) => match (a, b) {
                // Unparsable first, regardless of direction.
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(a), Some(b)) => self.direction.apply(a.cmp(b)),
            },
            (SortKey::Text(a), SortKey::Text(b)) => {
                self.direction.apply(self.collator.compare(a, b))
            }
            // Keys always come from the same comparator.
            _ => Ordering::Equal,
        }
    }
}
