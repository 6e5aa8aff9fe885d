// Copyright 2025 the TableSort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Names of the attributes the widget reads and writes.
//!
//! Header cells expose their state through attributes so stylesheets can draw
//! sort icons without the widget shipping any styling.

/// Tag name the widget is defined under by default.
pub const DEFAULT_TAG: &str = "table-sort";

/// Attribute on the mount tag listing 1-based numeric column numbers.
pub const NUMERIC_COLUMNS: &str = "numeric";

/// Header attribute carrying `""`, `up` or `down`.
pub const SORT_ORDER: &str = "data-sort-order";

/// Presence-only header attribute marking a numeric column.
pub const NUMERIC: &str = "data-numeric";

/// Header attribute mirroring the sort order for assistive technology.
pub const ARIA_SORT: &str = "aria-sort";

/// Prefix for every diagnostic the widget emits.
pub const LOG_PREFIX: &str = "table-sort";
