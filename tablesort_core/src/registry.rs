// Copyright 2025 the TableSort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Define-once registration of the widget type.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;

use hashbrown::HashSet;

/// Names the platform reserves even though they look like custom element names.
const RESERVED: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// Outcome of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The name was registered by this call.
    Defined,
    /// The name was already registered; nothing changed.
    AlreadyDefined,
}

/// Errors returned by [`WidgetRegistry::register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The name is not a valid custom element name.
    InvalidTagName(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTagName(name) => write!(f, "{name:?} is not a valid custom element name"),
        }
    }
}

impl core::error::Error for RegistryError {}

/// Checks `name` against the custom element naming rules.
///
/// A valid name starts with an ASCII lowercase letter, contains a hyphen, has
/// no ASCII uppercase letters and is not one of the reserved SVG/MathML names.
pub fn validate_tag_name(name: &str) -> Result<(), RegistryError> {
    let starts_lower = name.bytes().next().is_some_and(|b| b.is_ascii_lowercase());
    let chars_ok = name.chars().all(|c| {
        !c.is_ascii() || c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_')
    });
    if starts_lower && chars_ok && name.contains('-') && !RESERVED.contains(&name) {
        Ok(())
    } else {
        Err(RegistryError::InvalidTagName(name.to_string()))
    }
}

/// Process-wide record of defined widget types.
///
/// Registering a name twice is a no-op, not an error.
#[derive(Clone, Debug, Default)]
pub struct WidgetRegistry {
    defined: HashSet<String>,
}

impl WidgetRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `name` has been registered.
    pub fn is_defined(&self, name: &str) -> bool {
        self.defined.contains(name)
    }

    /// Registers `name`, once.
    pub fn register(&mut self, name: &str) -> Result<Registration, RegistryError> {
        validate_tag_name(name)?;
        if self.defined.contains(name) {
            return Ok(Registration::AlreadyDefined);
        }
        self.defined.insert(name.to_string());
        Ok(Registration::Defined)
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.defined.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.defined.is_empty()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn registering_twice_is_a_no_op() {
        let mut registry = WidgetRegistry::new();
        assert_eq!(registry.register("table-sort"), Ok(Registration::Defined));
        assert_eq!(
            registry.register("table-sort"),
            Ok(Registration::AlreadyDefined)
        );
        assert_eq!(registry.len(), 1);
        assert!(registry.is_defined("table-sort"));
    }

    #[test]
    fn invalid_names_are_rejected() {
        for name in ["tablesort", "Table-sort", "1-table", "-table", "font-face", "table sort"] {
            assert!(validate_tag_name(name).is_err(), "{name} should be rejected");
        }
        for name in ["table-sort", "x-1", "data-grid.v2", "mes-données"] {
            assert!(validate_tag_name(name).is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn rejected_names_are_not_recorded() {
        let mut registry = WidgetRegistry::new();
        assert!(registry.register("Nope").is_err());
        assert!(registry.is_empty());
    }
}
