// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timestamp and one-shot timer bindings.
//!
//! Activation timing is sequenced with `performance.now()` timestamps and
//! `setTimeout` callbacks. Enter styles are scheduled with a zero delay so
//! they land one task after the overlay is attached, which is what makes
//! the CSS transition actually animate.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods — avoids
// fetching (and unwrapping) the Window object on every press.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(callback: &JsValue, delay_ms: i32) -> i32;
}

/// The current `performance.now()` timestamp in milliseconds.
#[must_use]
pub fn now_ms() -> f64 {
    performance_now()
}

/// Runs `callback` once after `delay_ms` milliseconds.
///
/// The closure hands itself to the JS garbage collector after firing, so
/// one-shot timers never accumulate.
pub(crate) fn schedule(delay_ms: f64, callback: impl FnOnce() + 'static) {
    let closure = Closure::once_into_js(callback);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "timer delays are small positive millisecond counts"
    )]
    let _ = set_timeout(&closure, delay_ms as i32);
}
