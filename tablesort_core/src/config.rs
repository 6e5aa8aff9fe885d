// Copyright 2025 the TableSort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount-time configuration.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;

use smallvec::SmallVec;

use crate::attrs;
use crate::column::ColumnOrdinal;

/// Errors returned when parsing the `numeric` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An entry is not a base-10 unsigned integer.
    InvalidEntry(String),
    /// An entry is `0`; column numbers start at 1.
    ZeroColumn,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEntry(entry) => write!(f, "{entry:?} is not a column number"),
            Self::ZeroColumn => f.write_str("column numbers start at 1"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// The set of columns compared by integer value.
///
/// Parsed once from the mount tag's `numeric` attribute, e.g. `numeric="2,4"`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumericColumns {
    ordinals: SmallVec<[ColumnOrdinal; 4]>,
}

impl NumericColumns {
    /// Parses a comma-separated list of 1-based column numbers.
    ///
    /// Whitespace around entries and empty entries (`"2,,4,"`) are ignored.
    /// Duplicates collapse.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let mut ordinals = SmallVec::new();
        for entry in value.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let n: u32 = entry
                .parse()
                .map_err(|_| ConfigError::InvalidEntry(entry.to_string()))?;
            let ordinal = ColumnOrdinal::new(n).ok_or(ConfigError::ZeroColumn)?;
            if !ordinals.contains(&ordinal) {
                ordinals.push(ordinal);
            }
        }
        Ok(Self { ordinals })
    }

    /// Parses an optional attribute value, falling back to no numeric columns.
    ///
    /// A missing attribute is not an error. A malformed one is logged and
    /// ignored as a whole.
    pub fn from_attribute(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::default();
        };
        Self::parse(value).unwrap_or_else(|err| {
            log::warn!(
                "{}: ignoring {}={value:?}: {err}",
                attrs::LOG_PREFIX,
                attrs::NUMERIC_COLUMNS
            );
            Self::default()
        })
    }

    /// Returns `true` if `ordinal` is configured as numeric.
    pub fn contains(&self, ordinal: ColumnOrdinal) -> bool {
        self.ordinals.contains(&ordinal)
    }

    /// Returns `true` when no column is numeric.
    pub fn is_empty(&self) -> bool {
        self.ordinals.is_empty()
    }

    /// Configured ordinals in attribute order.
    pub fn iter(&self) -> impl Iterator<Item = ColumnOrdinal> + '_ {
        self.ordinals.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    #[test]
    fn parses_comma_separated_ordinals() {
        let cols = NumericColumns::parse(" 2, 4 ,2,").unwrap();
        let got: Vec<u32> = cols.iter().map(ColumnOrdinal::get).collect();
        assert_eq!(got, [2, 4]);
    }

    #[test]
    fn empty_value_means_no_numeric_columns() {
        assert!(NumericColumns::parse("").unwrap().is_empty());
        assert!(NumericColumns::from_attribute(None).is_empty());
    }

    #[test]
    fn malformed_entries_are_rejected() {
        assert_eq!(
            NumericColumns::parse("2,x"),
            Err(ConfigError::InvalidEntry("x".into()))
        );
        assert_eq!(NumericColumns::parse("0"), Err(ConfigError::ZeroColumn));
        assert_eq!(
            NumericColumns::parse("-1"),
            Err(ConfigError::InvalidEntry("-1".into()))
        );
    }

    #[test]
    fn malformed_attribute_falls_back_to_empty_set() {
        let cols = NumericColumns::from_attribute(Some("1,two"));
        assert!(cols.is_empty());
    }
}
