// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: auto-bound ripple buttons.
//!
//! Builds a row of buttons carrying `data-ripple` markers with different
//! option attributes, then starts a [`RippleObserver`] to bind them all.
//! One extra button is added after a short delay to show the observer
//! picking up late arrivals.
//!
//! Build with: `wasm-pack build --target web demos/web_buttons`
//!
//! Then serve `demos/web_buttons/` and open `index.html` in a browser.
//!
//! [`RippleObserver`]: ripple_backend_web::RippleObserver

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::format;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use ripple_backend_web::RippleObserver;
use ripple_core::options::{MARKER_ATTRIBUTE, RippleOverrides};

const BUTTON_STYLE: &str = "margin: 12px; padding: 14px 28px; border: none; \
     border-radius: 4px; font: 15px sans-serif; color: #fff;";

/// Label, background, and extra `data-ripple-*` attributes per button.
const BUTTONS: [(&str, &str, &[(&str, &str)]); 4] = [
    ("Default", "#2196f3", &[]),
    ("Slow", "#4db050", &[("data-ripple-enter-duration", "1500")]),
    (
        "Centered",
        "#f24336",
        &[
            ("data-ripple-disable-centering", "true"),
            ("data-ripple-color", "rgba(255, 255, 255, 0.4)"),
        ],
    ),
    ("Tap", "#ffc208", &[("data-ripple-fade-out-on-click", "")]),
];

fn make_button(document: &Document, label: &str, background: &str, attrs: &[(&str, &str)]) -> HtmlElement {
    let button: HtmlElement = document
        .create_element("button")
        .expect("create_element failed")
        .unchecked_into();
    button.set_text_content(Some(label));
    let _ = button.set_attribute("style", &format!("{BUTTON_STYLE} background: {background};"));
    let _ = button.set_attribute(MARKER_ATTRIBUTE, "true");
    for (name, value) in attrs {
        let _ = button.set_attribute(name, value);
    }
    button
}

/// Demo entry point.
#[wasm_bindgen(start)]
pub fn main() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    for (label, background, attrs) in BUTTONS {
        let _ = body.append_child(&make_button(&document, label, background, attrs));
    }

    let observer = RippleObserver::new(RippleOverrides::default());
    observer.start();

    // A late arrival: the observer binds it when the mutation lands.
    let late = make_button(&document, "Added later", "#607d8b", &[]);
    let _ = body.append_child(&late);

    // Keep the observer alive for the page's lifetime.
    core::mem::forget(observer);
}
