// Copyright 2025 the TableSort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mounted widget: header listeners, state reflection and row reinsertion.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tablesort_core::{
    Column, ColumnOrdinal, ColumnStates, MountError, NumericColumns, RowSnapshot, attrs,
    locate_parts,
};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{
    Element, Event, HtmlElement, HtmlTableElement, HtmlTableRowElement, HtmlTableSectionElement,
};

use crate::collator::LocaleCollator;

type ClickListener = Closure<dyn FnMut(Event)>;

/// A table enhanced with click-to-sort headers.
///
/// Listeners only hold weak references to the widget; dropping the last
/// handle (or calling [`TableSorter::detach`]) removes them from the headers.
#[wasm_bindgen]
pub struct TableSorter {
    inner: Rc<Inner>,
}

struct Inner {
    body: HtmlTableSectionElement,
    headers: Vec<Element>,
    listeners: RefCell<Vec<ClickListener>>,
    states: RefCell<ColumnStates>,
    collator: LocaleCollator,
}

impl fmt::Debug for TableSorter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableSorter")
            .field("columns", &self.inner.headers.len())
            .field("states", &self.inner.states.borrow())
            .finish_non_exhaustive()
    }
}

impl TableSorter {
    /// Attaches to the first table inside `host`.
    ///
    /// The table needs a `thead` and a `tbody`. Every `th` in the header gets a
    /// pointer cursor, `data-sort-order=""`, `aria-sort="none"`, `data-numeric`
    /// when listed in the host's `numeric` attribute, and a click listener.
    /// Body rows are left alone until the first click.
    pub fn mount(host: &Element) -> Result<Self, MountError> {
        let table = host
            .query_selector("table")
            .ok()
            .flatten()
            .and_then(|t| t.dyn_into::<HtmlTableElement>().ok());
        let parts = locate_parts(table, HtmlTableElement::t_head, |t| {
            t.t_bodies()
                .item(0)
                .and_then(|b| b.dyn_into::<HtmlTableSectionElement>().ok())
        })?;

        let headers = header_cells(&parts.head);
        let numeric =
            NumericColumns::from_attribute(host.get_attribute(attrs::NUMERIC_COLUMNS).as_deref());
        let states = ColumnStates::new(headers.len(), &numeric);

        for (cell, column) in headers.iter().zip(states.columns()) {
            if let Some(cell) = cell.dyn_ref::<HtmlElement>() {
                set_style(cell, "cursor", "pointer");
            }
            if column.is_numeric() {
                set_attribute(cell, attrs::NUMERIC, "");
            } else if let Err(err) = cell.remove_attribute(attrs::NUMERIC) {
                log::warn!("{}: could not clear {}: {err:?}", attrs::LOG_PREFIX, attrs::NUMERIC);
            }
            reflect(cell, column);
        }

        let inner = Rc::new_cyclic(|weak: &Weak<Inner>| {
            let listeners = headers
                .iter()
                .zip(states.columns())
                .map(|(cell, column)| listen(cell, weak.clone(), column.ordinal()))
                .collect();
            Inner {
                body: parts.body,
                headers,
                listeners: RefCell::new(listeners),
                states: RefCell::new(states),
                collator: LocaleCollator::new(),
            }
        });
        log::debug!(
            "{}: mounted with {} column(s)",
            attrs::LOG_PREFIX,
            inner.headers.len()
        );
        Ok(Self { inner })
    }
}

#[wasm_bindgen]
impl TableSorter {
    /// Sorts on the 1-based column `ordinal` as if its header was clicked.
    ///
    /// Returns `false` if there is no such column.
    #[wasm_bindgen(js_name = "sortColumn")]
    pub fn sort_column(&self, ordinal: u32) -> bool {
        ColumnOrdinal::new(ordinal).is_some_and(|ordinal| self.inner.sort_column(ordinal))
    }

    /// Removes the header listeners and forgets all sort state.
    ///
    /// Header attributes keep their last values; rows stay where they are.
    pub fn detach(&self) {
        self.inner.remove_listeners();
        self.inner.states.borrow_mut().reset();
    }

    /// Number of sortable columns.
    #[wasm_bindgen(getter, js_name = "columnCount")]
    pub fn column_count(&self) -> usize {
        self.inner.headers.len()
    }
}

impl Inner {
    fn sort_column(&self, ordinal: ColumnOrdinal) -> bool {
        let request = {
            let mut states = self.states.borrow_mut();
            let Some(request) = states.click(ordinal) else {
                return false;
            };
            for (cell, column) in self.headers.iter().zip(states.columns()) {
                reflect(cell, column);
            }
            request
        };

        let mut rows = self.body_rows();
        if rows.sort(&request, &cell_text, &self.collator) {
            // One `append` call moves every row or none of them.
            let rows: js_sys::Array = rows.rows().iter().collect();
            if let Err(err) = self.body.append_with_node(&rows) {
                log::warn!("{}: could not move rows: {err:?}", attrs::LOG_PREFIX);
            }
        }
        true
    }

    fn body_rows(&self) -> RowSnapshot<HtmlTableRowElement> {
        let rows = self.body.rows();
        (0..rows.length())
            .filter_map(|i| rows.item(i))
            .filter_map(|row| row.dyn_into::<HtmlTableRowElement>().ok())
            .collect()
    }

    fn remove_listeners(&self) {
        let listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        for (cell, listener) in self.headers.iter().zip(&listeners) {
            let _ = cell
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.remove_listeners();
    }
}

/// Mounts a widget on `host`, logging a warning and returning `undefined` if
/// the table structure is incomplete.
#[wasm_bindgen]
pub fn mount(host: &Element) -> Option<TableSorter> {
    match TableSorter::mount(host) {
        Ok(sorter) => Some(sorter),
        Err(err) => {
            log::warn!("{}: {err}. Exiting.", attrs::LOG_PREFIX);
            None
        }
    }
}

fn header_cells(head: &HtmlTableSectionElement) -> Vec<Element> {
    let Ok(cells) = head.query_selector_all("th") else {
        return Vec::new();
    };
    (0..cells.length())
        .filter_map(|i| cells.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn listen(cell: &Element, widget: Weak<Inner>, ordinal: ColumnOrdinal) -> ClickListener {
    let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Some(widget) = widget.upgrade() {
            widget.sort_column(ordinal);
        }
    });
    if let Err(err) =
        cell.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
    {
        log::warn!(
            "{}: could not listen on column {ordinal}: {err:?}",
            attrs::LOG_PREFIX
        );
    }
    listener
}

fn cell_text(row: &HtmlTableRowElement, ordinal: ColumnOrdinal) -> Option<String> {
    row.cells().item(ordinal.get() - 1)?.text_content()
}

fn reflect(cell: &Element, column: &Column) {
    for (name, value) in column.order_attributes() {
        set_attribute(cell, name, value);
    }
}

fn set_attribute(cell: &Element, name: &str, value: &str) {
    if let Err(err) = cell.set_attribute(name, value) {
        log::warn!("{}: could not set {name}: {err:?}", attrs::LOG_PREFIX);
    }
}

fn set_style(cell: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = cell.style().set_property(property, value) {
        log::warn!("{}: could not set {property}: {err:?}", attrs::LOG_PREFIX);
    }
}
