// Copyright 2025 the TableSort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser adapter for `tablesort`.
//!
//! Loading the generated module defines a `<table-sort>` custom element. Wrap
//! any server-rendered table in it and its header cells become sort toggles:
//!
//! ```html
//! <table-sort numeric="2">
//!   <table>
//!     <thead><tr><th>Name</th><th>Age</th></tr></thead>
//!     <tbody>
//!       <tr class="vip"><td>Ada</td><td>36</td></tr>
//!       <tr><td>Grace</td><td>85</td></tr>
//!     </tbody>
//!   </table>
//! </table-sort>
//! ```
//!
//! Rows are moved, never rebuilt, so their attributes, markup and event
//! listeners survive a sort. Header cells expose `data-sort-order`
//! (`""`, `up`, `down`), `aria-sort` and, for numeric columns, `data-numeric`
//! for stylesheets to hook into.
//!
//! Notes:
//! - This uses `web-sys`/`wasm-bindgen` only on `wasm32` targets.
//! - Non-`wasm32` builds only provide [`LocaleCollator`], which falls back to
//!   code point order.

#![cfg_attr(
    target_arch = "wasm32",
    allow(unsafe_code, reason = "wasm-bindgen exports expand to unsafe ABI glue")
)]

mod collator;
#[cfg(target_arch = "wasm32")]
mod element;
#[cfg(target_arch = "wasm32")]
mod logger;
#[cfg(target_arch = "wasm32")]
mod widget;

pub use collator::LocaleCollator;
#[cfg(target_arch = "wasm32")]
pub use element::{define, define_with_tag, start};
#[cfg(target_arch = "wasm32")]
pub use logger::set_log_level;
#[cfg(target_arch = "wasm32")]
pub use widget::{TableSorter, mount};
