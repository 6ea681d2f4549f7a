// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-activation state and exit timing.
//!
//! An [`Activation`] is an immutable snapshot taken at pointer-down: the
//! resolved options, the computed overlay frame, and the start timestamp.
//! Concurrent activations on the same root never share state, so overlapping
//! ripples animate independently even when attributes change between
//! presses.
//!
//! The exit timing rule makes quick taps still read as ripples: releasing
//! early does not cut the animation short. The fade-out is delayed until
//! roughly two thirds of the enter transition has played:
//!
//! ```text
//!   delay = max(enter − exit/3 − round(elapsed), 0)
//! ```
//!
//! A release after the enter transition has settled fades out immediately.

use crate::geometry::{OverlayFrame, Press};
use crate::options::RippleOptions;
use crate::style::{self, StyleMap};

/// Where an activation is in its lifecycle.
///
/// Purely informational; transitions are driven by the backend's timers and
/// the styles below, not by storing a phase anywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Enter transition scheduled or playing.
    Entering,
    /// Enter settled, no exit requested yet.
    Holding,
    /// Exit transition playing.
    Exiting,
    /// Overlay removed from its root.
    Removed,
}

/// When to apply the exit styles and when to remove the overlay, both
/// relative to the moment the exit was requested.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExitPlan {
    /// Wait this long before applying the exit styles.
    pub delay_ms: f64,
    /// After applying them, wait this long before removing the overlay.
    pub remove_delay_ms: f64,
}

/// One ripple activation: the immutable snapshot taken at pointer-down.
#[derive(Clone, Debug, PartialEq)]
pub struct Activation {
    options: RippleOptions,
    frame: OverlayFrame,
    start_ms: f64,
}

impl Activation {
    /// Snapshots an activation from a press.
    #[must_use]
    pub fn begin(options: RippleOptions, press: &Press, now_ms: f64) -> Self {
        let frame = OverlayFrame::for_press(press, options.disable_centering, options.size_modifier);
        Self {
            options,
            frame,
            start_ms: now_ms,
        }
    }

    /// The options this activation was resolved with.
    #[must_use]
    pub fn options(&self) -> &RippleOptions {
        &self.options
    }

    /// The overlay's frame inside the root.
    #[must_use]
    pub fn frame(&self) -> &OverlayFrame {
        &self.frame
    }

    /// The timestamp the activation began at.
    #[must_use]
    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    /// Styles for a freshly created overlay: base look, paint, and frame.
    ///
    /// The overlay starts at `scale(0)`; [`Self::enter_styles`] grows it one
    /// tick later so the transition actually animates.
    #[must_use]
    pub fn overlay_styles(&self) -> StyleMap {
        let mut styles = style::overlay_base_styles();
        styles.extend(style::overlay_paint_styles(
            &self.options.color,
            self.options.opacity,
        ));
        styles.extend(self.frame.styles());
        styles
    }

    /// Enter-transition styles for this activation.
    #[must_use]
    pub fn enter_styles(&self) -> StyleMap {
        style::enter_styles(self.options.enter_duration, &self.options.timing_function)
    }

    /// Exit-transition styles for this activation.
    #[must_use]
    pub fn exit_styles(&self) -> StyleMap {
        style::exit_styles(self.options.exit_duration, &self.options.timing_function)
    }

    /// Milliseconds to wait before fading out, given the current time.
    ///
    /// `max(enter − exit/3 − round(elapsed), 0)`: early releases wait for
    /// the bulk of the enter transition, late ones fade immediately.
    #[must_use]
    pub fn fade_out_delay(&self, now_ms: f64) -> f64 {
        let elapsed = libm::round(now_ms - self.start_ms);
        (self.options.enter_duration - self.options.exit_duration / 3.0 - elapsed).max(0.0)
    }

    /// The full exit schedule for a release at `now_ms`.
    #[must_use]
    pub fn exit_plan(&self, now_ms: f64) -> ExitPlan {
        ExitPlan {
            delay_ms: self.fade_out_delay(now_ms),
            remove_delay_ms: self.options.exit_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{RippleOverrides, defaults, resolve};
    use alloc::string::String;
    use kurbo::{Point, Rect};

    struct NoAttributes;

    impl crate::options::OptionSource for NoAttributes {
        fn attribute(&self, _key: crate::options::OptionKey) -> Option<String> {
            None
        }

        fn background_color(&self) -> Option<String> {
            None
        }
    }

    fn default_options() -> RippleOptions {
        resolve(&NoAttributes, &RippleOverrides::default())
    }

    fn press() -> Press {
        Press {
            pointer: Point::new(30.0, 40.0),
            rect: Rect::new(10.0, 20.0, 110.0, 70.0),
        }
    }

    #[test]
    fn immediate_release_waits_for_the_enter_transition() {
        let activation = Activation::begin(default_options(), &press(), 1000.0);
        let delay = activation.fade_out_delay(1000.0);
        // 550 − 400/3 − 0.
        assert!((delay - 416.6666666666667).abs() < 1e-6, "got {delay}");
    }

    #[test]
    fn late_release_fades_out_immediately() {
        let activation = Activation::begin(default_options(), &press(), 1000.0);
        assert_eq!(activation.fade_out_delay(1600.0), 0.0);
    }

    #[test]
    fn elapsed_time_is_rounded_before_subtraction() {
        let activation = Activation::begin(default_options(), &press(), 0.0);
        let a = activation.fade_out_delay(100.4);
        let b = activation.fade_out_delay(100.0);
        assert_eq!(a, b, "sub-millisecond elapsed time must not matter");
        let c = activation.fade_out_delay(100.6);
        assert!((c - (b - 1.0)).abs() < 1e-9, "100.6 rounds up to 101");
    }

    #[test]
    fn exit_plan_removal_matches_exit_duration() {
        let mut options = default_options();
        options.exit_duration = 250.0;
        let activation = Activation::begin(options, &press(), 0.0);
        let plan = activation.exit_plan(9999.0);
        assert_eq!(plan.delay_ms, 0.0);
        assert_eq!(plan.remove_delay_ms, 250.0);
    }

    #[test]
    fn overlay_styles_order_base_paint_frame() {
        let activation = Activation::begin(default_options(), &press(), 0.0);
        let css = activation.overlay_styles().to_css();
        let base = css.find("transform: scale(0);").expect("base styles");
        let paint = css.find("background:").expect("paint styles");
        let frame = css.find("top:").expect("frame styles");
        assert!(base < paint && paint < frame, "got {css}");
    }

    #[test]
    fn snapshots_are_independent() {
        let first = Activation::begin(default_options(), &press(), 0.0);
        let mut changed = default_options();
        changed.enter_duration = 100.0;
        let second = Activation::begin(changed, &press(), 50.0);

        // The first activation keeps its original timing.
        assert_eq!(first.options().enter_duration, defaults::ENTER_DURATION_MS);
        assert_eq!(second.options().enter_duration, 100.0);
        assert!(
            first.fade_out_delay(50.0) > second.fade_out_delay(50.0),
            "each snapshot schedules from its own options and start"
        );
    }

    #[test]
    fn no_range_validation_on_inputs() {
        let mut options = default_options();
        options.opacity = 3.5;
        options.enter_duration = -100.0;
        let activation = Activation::begin(options, &press(), 0.0);
        // Out-of-range values flow through untouched.
        assert!(activation.overlay_styles().to_css().contains("opacity: 3.5;"));
        assert_eq!(activation.fade_out_delay(0.0), 0.0);
    }
}
