// Copyright 2025 the TableSort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cmp::Ordering;

#[cfg(not(target_arch = "wasm32"))]
use tablesort_core::CodepointCollator;
use tablesort_core::Collator;

/// A [`Collator`] backed by `String.prototype.localeCompare`.
///
/// On non-`wasm32` targets this type is still available but always falls back
/// to [`tablesort_core::CodepointCollator`].
#[derive(Clone, Debug)]
pub struct LocaleCollator {
    #[cfg(target_arch = "wasm32")]
    locales: js_sys::Array,
    #[cfg(target_arch = "wasm32")]
    options: js_sys::Object,
}

impl LocaleCollator {
    /// Creates a collator using the page's default locale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            locales: js_sys::Array::new(),
            #[cfg(target_arch = "wasm32")]
            options: js_sys::Object::new(),
        }
    }
}

impl Default for LocaleCollator {
    fn default() -> Self {
        Self::new()
    }
}

impl Collator for LocaleCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::JsString::from(a)
                .locale_compare(b, &self.locales, &self.options)
                .cmp(&0)
        }

        #[cfg(not(target_arch = "wasm32"))]
        CodepointCollator.compare(a, b)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_fallback_orders_by_code_point() {
        let collator = LocaleCollator::new();
        assert_eq!(collator.compare("apple", "banana"), Ordering::Less);
        assert_eq!(collator.compare("b", "b"), Ordering::Equal);
    }
}
