// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM adapters for the core types.
//!
//! Everything here is a thin translation layer: reading a live element into
//! the core's [`OptionSource`] / [`RootStyleSnapshot`] views, writing a
//! [`StyleMap`] back as an inline-style append, and extracting press
//! geometry from a `MouseEvent`. Style writes never rewrite the existing
//! `style` attribute; they append, so application styling survives.

use alloc::string::String;

use kurbo::{Point, Rect};
use wasm_bindgen::JsCast as _;
use web_sys::{CssStyleDeclaration, Event, HtmlElement, MouseEvent, TouchEvent};

use ripple_core::options::{OptionKey, OptionSource};
use ripple_core::style::{RootStyleSnapshot, StyleMap, merged_inline, root_style_deltas};

/// Appends `styles` to the element's inline `style` attribute.
pub(crate) fn apply_styles(element: &HtmlElement, styles: &StyleMap) {
    let existing = element.get_attribute("style").unwrap_or_default();
    let _ = element.set_attribute("style", &merged_inline(&existing, styles));
}

/// The element's computed style, if a window is available.
#[must_use]
pub(crate) fn computed_style(element: &HtmlElement) -> Option<CssStyleDeclaration> {
    web_sys::window()?.get_computed_style(element).ok().flatten()
}

/// Reads the computed styles that decide which root deltas are needed.
#[must_use]
pub(crate) fn root_style_snapshot(element: &HtmlElement) -> RootStyleSnapshot {
    let Some(computed) = computed_style(element) else {
        return RootStyleSnapshot::default();
    };
    let value = |name: &str| computed.get_property_value(name).unwrap_or_default();
    RootStyleSnapshot {
        position: value("position"),
        overflow: value("overflow"),
        cursor: value("cursor"),
    }
}

/// Installs the root-element deltas a ripple host needs (containment,
/// positioning context, pointer cursor). A root whose computed styles
/// already satisfy all three is left untouched.
pub(crate) fn install_root_styles(element: &HtmlElement) {
    let deltas = root_style_deltas(&root_style_snapshot(element));
    if !deltas.is_empty() {
        apply_styles(element, &deltas);
    }
}

/// The element's bounding rectangle in viewport coordinates.
#[must_use]
pub(crate) fn bounding_rect(element: &HtmlElement) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom())
}

/// The event's pointer position in viewport coordinates.
#[must_use]
pub(crate) fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// The press position of a mouse or touch event, in viewport coordinates.
///
/// For touch events this is the first active touch point; a `touchstart`
/// with an empty touch list yields `None` and the press is skipped.
#[must_use]
pub(crate) fn press_point(event: &Event) -> Option<Point> {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return Some(client_point(mouse));
    }
    let touch = event.dyn_ref::<TouchEvent>()?.touches().item(0)?;
    Some(Point::new(
        f64::from(touch.client_x()),
        f64::from(touch.client_y()),
    ))
}

/// The element an activation should attach to.
///
/// Prefers `currentTarget` (the element the handler was registered on) and
/// falls back to `target`. Returns `None` when neither is an `HtmlElement`,
/// so callers skip the press instead of guessing.
#[must_use]
pub fn effective_target(event: &MouseEvent) -> Option<HtmlElement> {
    event
        .current_target()
        .and_then(|t| t.dyn_into::<HtmlElement>().ok())
        .or_else(|| event.target().and_then(|t| t.dyn_into::<HtmlElement>().ok()))
}

/// [`OptionSource`] over a live element: `data-ripple-*` attributes plus the
/// computed background color.
#[derive(Clone, Copy, Debug)]
pub struct ElementSource<'a>(pub &'a HtmlElement);

impl OptionSource for ElementSource<'_> {
    fn attribute(&self, key: OptionKey) -> Option<String> {
        self.0.get_attribute(key.attribute_name())
    }

    fn background_color(&self) -> Option<String> {
        computed_style(self.0)?
            .get_property_value("background-color")
            .ok()
    }
}
