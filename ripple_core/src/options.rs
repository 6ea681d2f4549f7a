// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Option model and per-activation resolution.
//!
//! Every activation resolves one [`RippleOptions`] record from three layers,
//! highest precedence first:
//!
//! 1. the root element's `data-ripple-*` attributes,
//! 2. the per-call / per-engine [`RippleOverrides`],
//! 3. library defaults.
//!
//! Attribute strings are coerced by the target field's type. Numeric fields
//! require the parsed value to format back to the exact attribute string, so
//! partial parses like `"3px"` fall through to the next layer. Boolean
//! fields treat `"true"` and the empty string (bare attribute) as `true` and
//! anything else as `false`. String fields take non-empty attributes
//! verbatim.
//!
//! If no layer supplies a color, the fallback is derived from the root's
//! computed background: the black/white contrast pick at ratio threshold
//! [`defaults::CONTRAST_THRESHOLD`], faded to
//! [`defaults::FALLBACK_COLOR_ALPHA`].
//!
//! The resolver reads the element only through the [`OptionSource`] trait,
//! keeping it a pure function of its inputs; the web backend implements the
//! trait over a live element, tests over a map.

use alloc::format;
use alloc::string::String;

use crate::color::{self, Rgba};

/// The marker attribute that opts an element into auto-binding.
///
/// Present with the value `"true"` or the empty string means eligible.
pub const MARKER_ATTRIBUTE: &str = "data-ripple";

/// The eight recognized option keys.
///
/// The key → attribute-name mapping is a static enumeration resolved at
/// compile time; there is no runtime name table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionKey {
    /// Overlay fill color.
    Color,
    /// CSS easing identifier used verbatim in transition strings.
    TimingFunction,
    /// Overlay opacity.
    Opacity,
    /// Enter-transition duration in milliseconds.
    EnterDuration,
    /// Exit-transition duration in milliseconds.
    ExitDuration,
    /// Multiplier applied to the corner-distance radius.
    SizeModifier,
    /// Originate at the root's center instead of the pointer.
    DisableCentering,
    /// Begin the fade-out immediately after the fade-in is scheduled.
    FadeOutOnClick,
}

impl OptionKey {
    /// All keys, in resolution order.
    pub const ALL: [Self; 8] = [
        Self::Color,
        Self::TimingFunction,
        Self::Opacity,
        Self::EnterDuration,
        Self::ExitDuration,
        Self::SizeModifier,
        Self::DisableCentering,
        Self::FadeOutOnClick,
    ];

    /// The data-attribute carrying this option.
    #[must_use]
    pub const fn attribute_name(self) -> &'static str {
        match self {
            Self::Color => "data-ripple-color",
            Self::TimingFunction => "data-ripple-timing-function",
            Self::Opacity => "data-ripple-opacity",
            Self::EnterDuration => "data-ripple-enter-duration",
            Self::ExitDuration => "data-ripple-exit-duration",
            Self::SizeModifier => "data-ripple-size-modifier",
            Self::DisableCentering => "data-ripple-disable-centering",
            Self::FadeOutOnClick => "data-ripple-fade-out-on-click",
        }
    }
}

/// Library defaults, shared by the resolver and its callers.
pub mod defaults {
    /// Default enter-transition duration.
    pub const ENTER_DURATION_MS: f64 = 550.0;
    /// Default exit-transition duration.
    pub const EXIT_DURATION_MS: f64 = 400.0;
    /// Default easing curve.
    pub const TIMING_FUNCTION: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
    /// Default radius multiplier.
    pub const SIZE_MODIFIER: f64 = 1.0;
    /// Default overlay opacity.
    pub const OPACITY: f64 = 1.0;
    /// Contrast-ratio threshold for the black/white fallback-color pick.
    pub const CONTRAST_THRESHOLD: f64 = 10.0;
    /// Alpha applied to the contrast-derived fallback color.
    pub const FALLBACK_COLOR_ALPHA: f64 = 0.15;
}

/// A fully resolved option record. Immutable per activation.
///
/// Every field is populated: `color` is filled from the contrast-derived
/// fallback when no layer supplies one. Values are not range-validated —
/// out-of-range opacities and negative durations pass through to the
/// rendering layer, which clamps or ignores them per CSS rules.
#[derive(Clone, Debug, PartialEq)]
pub struct RippleOptions {
    /// Overlay fill color.
    pub color: String,
    /// CSS easing identifier.
    pub timing_function: String,
    /// Overlay opacity.
    pub opacity: f64,
    /// Enter-transition duration in milliseconds.
    pub enter_duration: f64,
    /// Exit-transition duration in milliseconds.
    pub exit_duration: f64,
    /// Multiplier applied to the corner-distance radius.
    pub size_modifier: f64,
    /// Originate at the root's center instead of the pointer.
    pub disable_centering: bool,
    /// Begin the fade-out immediately after the fade-in is scheduled.
    pub fade_out_on_click: bool,
}

/// Per-call or per-engine overrides. Unset fields defer to the defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RippleOverrides {
    /// Overlay fill color.
    pub color: Option<String>,
    /// CSS easing identifier.
    pub timing_function: Option<String>,
    /// Overlay opacity.
    pub opacity: Option<f64>,
    /// Enter-transition duration in milliseconds.
    pub enter_duration: Option<f64>,
    /// Exit-transition duration in milliseconds.
    pub exit_duration: Option<f64>,
    /// Multiplier applied to the corner-distance radius.
    pub size_modifier: Option<f64>,
    /// Originate at the root's center instead of the pointer.
    pub disable_centering: Option<bool>,
    /// Begin the fade-out immediately after the fade-in is scheduled.
    pub fade_out_on_click: Option<bool>,
}

/// The resolver's read-only view of a root element.
pub trait OptionSource {
    /// The raw attribute string for `key`, if the attribute is present.
    fn attribute(&self, key: OptionKey) -> Option<String>;

    /// The element's computed background color, if one can be read.
    fn background_color(&self) -> Option<String>;
}

/// Parses an attribute as a number, requiring an exact round-trip.
///
/// `"42"` → `42.0`; `"42px"` and `"42.50"` are rejected because the parsed
/// value does not format back to the original string.
#[must_use]
pub fn coerce_number(raw: &str) -> Option<f64> {
    let value: f64 = raw.parse().ok()?;
    if format!("{value}") == raw { Some(value) } else { None }
}

/// Boolean attribute coercion: `"true"` or a bare attribute mean `true`.
#[must_use]
pub fn coerce_bool(raw: &str) -> bool {
    raw == "true" || raw.is_empty()
}

fn attr_string(source: &impl OptionSource, key: OptionKey) -> Option<String> {
    source.attribute(key).filter(|value| !value.is_empty())
}

fn attr_number(source: &impl OptionSource, key: OptionKey) -> Option<f64> {
    source.attribute(key).and_then(|value| coerce_number(&value))
}

fn attr_bool(source: &impl OptionSource, key: OptionKey) -> Option<bool> {
    source.attribute(key).map(|value| coerce_bool(&value))
}

/// Resolves the effective options for one activation.
///
/// Pure: reads `source` and `overrides`, mutates nothing.
#[must_use]
pub fn resolve(source: &impl OptionSource, overrides: &RippleOverrides) -> RippleOptions {
    let color = attr_string(source, OptionKey::Color)
        .or_else(|| overrides.color.clone())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| fallback_color(source));

    let timing_function = attr_string(source, OptionKey::TimingFunction)
        .or_else(|| overrides.timing_function.clone())
        .unwrap_or_else(|| String::from(defaults::TIMING_FUNCTION));

    RippleOptions {
        color,
        timing_function,
        opacity: attr_number(source, OptionKey::Opacity)
            .or(overrides.opacity)
            .unwrap_or(defaults::OPACITY),
        enter_duration: attr_number(source, OptionKey::EnterDuration)
            .or(overrides.enter_duration)
            .unwrap_or(defaults::ENTER_DURATION_MS),
        exit_duration: attr_number(source, OptionKey::ExitDuration)
            .or(overrides.exit_duration)
            .unwrap_or(defaults::EXIT_DURATION_MS),
        size_modifier: attr_number(source, OptionKey::SizeModifier)
            .or(overrides.size_modifier)
            .unwrap_or(defaults::SIZE_MODIFIER),
        disable_centering: attr_bool(source, OptionKey::DisableCentering)
            .or(overrides.disable_centering)
            .unwrap_or(false),
        fade_out_on_click: attr_bool(source, OptionKey::FadeOutOnClick)
            .or(overrides.fade_out_on_click)
            .unwrap_or(false),
    }
}

/// Contrast-derived fallback color for roots with no explicit color.
///
/// Unparseable or missing backgrounds are treated as luminance zero, which
/// degrades to the faded white pick.
fn fallback_color(source: &impl OptionSource) -> String {
    let background = source
        .background_color()
        .and_then(|raw| color::parse(&raw))
        .unwrap_or(Rgba::BLACK);
    let pick = color::contrast_black_or_white(background, defaults::CONTRAST_THRESHOLD);
    color::fade(pick, defaults::FALLBACK_COLOR_ALPHA)
}
