// Copyright 2025 the TableSort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural preconditions checked when the widget is mounted.

use core::fmt;

/// Why a host could not be enhanced.
///
/// None of these are fatal: the widget logs the error and stays inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountError {
    /// The host contains no table.
    MissingTable,
    /// The table has no header section.
    MissingHead,
    /// The table has no body section.
    MissingBody,
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingTable => "no table found",
            Self::MissingHead => "no thead found",
            Self::MissingBody => "no tbody found",
        })
    }
}

impl core::error::Error for MountError {}

/// The sections of a table the widget needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableParts<T, H, B> {
    /// The table itself.
    pub table: T,
    /// Header section holding the clickable header cells.
    pub head: H,
    /// Body section whose rows are reordered.
    pub body: B,
}

/// Checks that a located table has both a header and a body section.
///
/// `head` and `body` are only consulted once a table was found.
pub fn locate_parts<T, H, B>(
    table: Option<T>,
    head: impl FnOnce(&T) -> Option<H>,
    body: impl FnOnce(&T) -> Option<B>,
) -> Result<TableParts<T, H, B>, MountError> {
    let table = table.ok_or(MountError::MissingTable)?;
    let head = head(&table).ok_or(MountError::MissingHead)?;
    let body = body(&table).ok_or(MountError::MissingBody)?;
    Ok(TableParts { table, head, body })
}
