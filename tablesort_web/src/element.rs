// Copyright 2025 the TableSort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Custom element definition.

use std::cell::RefCell;

use log::LevelFilter;
use tablesort_core::{Registration, WidgetRegistry, attrs, validate_tag_name};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::logger;

thread_local! {
    static REGISTRY: RefCell<WidgetRegistry> = RefCell::new(WidgetRegistry::new());
}

// The class keeps the mounted widget on the element so a disconnect can
// release it; a later reconnect mounts afresh. Shipped as a module snippet so
// pages without `'unsafe-eval'` in their CSP can still load it.
#[wasm_bindgen(inline_js = r#"
export function elementClass(connect) {
    return class extends HTMLElement {
        connectedCallback() {
            if (this.__tableSort === undefined) {
                this.__tableSort = connect(this);
            }
        }
        disconnectedCallback() {
            const sorter = this.__tableSort;
            this.__tableSort = undefined;
            if (sorter) {
                sorter.detach();
                sorter.free();
            }
        }
    };
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = "elementClass")]
    fn element_class_for(connect: &JsValue) -> js_sys::Function;
}

/// Module entry point: installs panic/log forwarding and defines `<table-sort>`.
///
/// A failed definition is logged, not thrown, so the host page keeps working.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Warn);
    if let Err(err) = define() {
        log::warn!(
            "{}: could not define <{}>: {err:?}",
            attrs::LOG_PREFIX,
            attrs::DEFAULT_TAG
        );
    }
}

/// Defines `<table-sort>`. Returns `false` if it was already defined.
#[wasm_bindgen]
pub fn define() -> Result<bool, JsValue> {
    define_with_tag(attrs::DEFAULT_TAG)
}

/// Defines the widget under a custom tag name. Returns `false` if that name
/// was already defined.
///
/// Defining an already-defined name is a no-op, whoever defined it.
#[wasm_bindgen(js_name = "defineWithTag")]
pub fn define_with_tag(tag: &str) -> Result<bool, JsValue> {
    Ok(register(tag)? == Registration::Defined)
}

fn register(tag: &str) -> Result<Registration, JsValue> {
    validate_tag_name(tag).map_err(|err| js_error(&err))?;
    if REGISTRY.with_borrow(|registry| registry.is_defined(tag)) {
        return Ok(Registration::AlreadyDefined);
    }

    let window = web_sys::window().ok_or_else(|| js_error(&"missing window"))?;
    let elements = window.custom_elements();
    let outcome = if elements.get(tag).is_undefined() {
        elements.define(tag, &element_class())?;
        log::debug!("{}: defined <{tag}>", attrs::LOG_PREFIX);
        Registration::Defined
    } else {
        log::debug!("{}: <{tag}> is already defined", attrs::LOG_PREFIX);
        Registration::AlreadyDefined
    };

    REGISTRY
        .with_borrow_mut(|registry| registry.register(tag))
        .map_err(|err| js_error(&err))?;
    Ok(outcome)
}

fn element_class() -> js_sys::Function {
    let connect = Closure::<dyn Fn(Element) -> JsValue>::new(|host: Element| {
        crate::widget::mount(&host).map_or(JsValue::UNDEFINED, JsValue::from)
    });
    let class = element_class_for(connect.as_ref());
    // Element classes live as long as the page.
    connect.forget();
    class
}

fn js_error(err: &dyn std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {err}", attrs::LOG_PREFIX))
}
