// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered style maps and the fixed ripple style vocabulary.
//!
//! Styles are applied by appending to an element's existing inline `style`
//! attribute, never by rewriting it: prior declarations are preserved and
//! later same-property declarations win by the normal CSS cascade. This
//! keeps the engine from clobbering application styling on shared roots.
//!
//! The vocabulary is deliberately small — the overlay base look, the two
//! transitions, per-activation paint, and the root-element deltas.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// An ordered mapping of CSS property → value.
///
/// Serialization preserves insertion order, so pushing the same property
/// twice produces two declarations with the later one winning.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleMap(Vec<(&'static str, String)>);

impl StyleMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a property.
    pub fn push(&mut self, property: &'static str, value: impl Into<String>) {
        self.0.push((property, value.into()));
    }

    /// Appends a pixel-valued property.
    pub fn push_px(&mut self, property: &'static str, value: f64) {
        self.push(property, format!("{value}px"));
    }

    /// Appends every entry of `other`.
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the map holds no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(property, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// Serializes as concatenated `"prop: value;"` segments.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (property, value) in &self.0 {
            out.push_str(property);
            out.push_str(": ");
            out.push_str(value);
            out.push(';');
        }
        out
    }
}

/// Appends `styles` to an existing inline style string.
///
/// The previous content is kept verbatim and separated from the new
/// declarations by `"; "`. Nothing is ever removed or rewritten.
#[must_use]
pub fn merged_inline(existing: &str, styles: &StyleMap) -> String {
    format!("{existing}; {}", styles.to_css())
}

/// Base overlay styles: an invisible circle awaiting its enter transition.
#[must_use]
pub fn overlay_base_styles() -> StyleMap {
    let mut styles = StyleMap::new();
    styles.push("position", "absolute");
    styles.push("border-radius", "50%");
    styles.push("transform", "scale(0)");
    styles
}

/// Per-activation paint: resolved opacity and fill color.
#[must_use]
pub fn overlay_paint_styles(color: &str, opacity: f64) -> StyleMap {
    let mut styles = StyleMap::new();
    styles.push("opacity", format!("{opacity}"));
    styles.push("background", color);
    styles
}

/// Enter-transition styles: scale up to full size.
#[must_use]
pub fn enter_styles(duration_ms: f64, timing_function: &str) -> StyleMap {
    let mut styles = StyleMap::new();
    styles.push("transform", "scale(1)");
    styles.push("transition", format!("all {duration_ms}ms {timing_function}"));
    styles.push("will-change", "transform, opacity");
    styles
}

/// Exit-transition styles: fade to transparent.
#[must_use]
pub fn exit_styles(duration_ms: f64, timing_function: &str) -> StyleMap {
    let mut styles = StyleMap::new();
    styles.push("opacity", "0");
    styles.push("transition", format!("all {duration_ms}ms {timing_function}"));
    styles
}

/// Computed style values of a prospective root element that decide which
/// root deltas are needed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RootStyleSnapshot {
    /// Computed `position`.
    pub position: String,
    /// Computed `overflow`.
    pub overflow: String,
    /// Computed `cursor`.
    pub cursor: String,
}

/// Styles a root element needs before it can host overlays.
///
/// Only the missing pieces are emitted: containment (`overflow: hidden`),
/// a positioning context (`position: relative`) unless the root is already
/// relatively or absolutely positioned, and a pointer cursor unless one was
/// set explicitly. A root that already satisfies all three yields an empty
/// map and is left untouched.
#[must_use]
pub fn root_style_deltas(snapshot: &RootStyleSnapshot) -> StyleMap {
    let mut styles = StyleMap::new();
    if snapshot.overflow != "hidden" {
        styles.push("overflow", "hidden !important");
    }
    if snapshot.position != "relative" && snapshot.position != "absolute" {
        styles.push("position", "relative !important");
    }
    if matches!(snapshot.cursor.as_str(), "" | "auto" | "default" | "unset") {
        styles.push("cursor", "pointer");
    }
    styles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_segments_match_entries() {
        let mut styles = StyleMap::new();
        styles.push("top", "1px");
        styles.push("left", "2px");
        styles.push("background", "red");
        let css = styles.to_css();
        assert_eq!(css, "top: 1px;left: 2px;background: red;");
        assert_eq!(css.matches(';').count(), styles.len(), "one ; per entry");
    }

    #[test]
    fn merge_preserves_existing_content() {
        let mut styles = StyleMap::new();
        styles.push("opacity", "0");
        let merged = merged_inline("color: blue;", &styles);
        assert_eq!(merged, "color: blue;; opacity: 0;");
        assert!(merged.starts_with("color: blue;"), "prior content kept");
    }

    #[test]
    fn merge_into_empty_style() {
        let mut styles = StyleMap::new();
        styles.push("top", "4px");
        assert_eq!(merged_inline("", &styles), "; top: 4px;");
    }

    #[test]
    fn repeated_merges_accumulate() {
        let mut first = StyleMap::new();
        first.push("transform", "scale(0)");
        let mut second = StyleMap::new();
        second.push("transform", "scale(1)");

        let inline = merged_inline("", &first);
        let inline = merged_inline(&inline, &second);
        // Both declarations survive; the later one wins by cascade order.
        assert_eq!(inline, "; transform: scale(0); transform: scale(1);");
    }

    #[test]
    fn transition_strings_carry_duration_and_easing() {
        let styles = enter_styles(550.0, "cubic-bezier(0.4, 0, 0.2, 1)");
        let css = styles.to_css();
        assert!(
            css.contains("transition: all 550ms cubic-bezier(0.4, 0, 0.2, 1);"),
            "got {css}"
        );
        assert!(css.contains("transform: scale(1);"), "got {css}");

        let css = exit_styles(400.0, "linear").to_css();
        assert!(css.contains("opacity: 0;"), "got {css}");
        assert!(css.contains("transition: all 400ms linear;"), "got {css}");
    }

    #[test]
    fn root_deltas_for_unstyled_element() {
        let snapshot = RootStyleSnapshot {
            position: "static".into(),
            overflow: "visible".into(),
            cursor: "auto".into(),
        };
        let css = root_style_deltas(&snapshot).to_css();
        assert_eq!(
            css,
            "overflow: hidden !important;position: relative !important;cursor: pointer;"
        );
    }

    #[test]
    fn root_deltas_respect_compatible_styles() {
        let snapshot = RootStyleSnapshot {
            position: "absolute".into(),
            overflow: "hidden".into(),
            cursor: "grab".into(),
        };
        assert!(root_style_deltas(&snapshot).is_empty(), "nothing to add");

        let relative = RootStyleSnapshot {
            position: "relative".into(),
            overflow: "visible".into(),
            cursor: "default".into(),
        };
        let css = root_style_deltas(&relative).to_css();
        assert_eq!(css, "overflow: hidden !important;cursor: pointer;");
    }
}
