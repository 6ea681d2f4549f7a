// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic timeline simulation for ripple activations.
//!
//! The web backend sequences an activation through real browser timers,
//! which makes its timing rules awkward to test. This crate replays the
//! same sequencing against a simulated clock: feed it resolved options, a
//! press, and an optional release, and it returns the ordered list of
//! timeline events the backend would produce, with exact timestamps.
//!
//! The simulation mirrors the backend step for step: overlay attached at
//! the press, enter styles one (zero-delay) tick later, exit requested at
//! the release (or at the press itself for `fade_out_on_click`), exit
//! styles after the activation's fade-out delay, removal one exit duration
//! after that.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use ripple_core::effect::Activation;
use ripple_core::geometry::Press;
use ripple_core::options::RippleOptions;
use ripple_core::trace::{
    ActivationStarted, EnterApplied, ExitScheduled, OverlayRemoved, Tracer,
};

/// What happened at one point of a simulated activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineEventKind {
    /// The overlay element was created and appended to the root.
    OverlayAttached,
    /// The enter-transition styles were applied.
    EnterApplied,
    /// A release (or the press itself) requested the fade-out.
    ExitRequested,
    /// The exit-transition styles were applied.
    ExitApplied,
    /// The overlay was removed from the root.
    OverlayRemoved,
}

/// One entry of a simulated activation timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineEvent {
    /// Simulated timestamp in milliseconds.
    pub at_ms: f64,
    /// What happened.
    pub kind: TimelineEventKind,
}

/// Replays one activation and returns its timeline in chronological order.
///
/// `release_at_ms` is the pointer-up time; `None` means the pointer was
/// never released, which leaves the overlay attached unless the options
/// request `fade_out_on_click`. Lifecycle milestones are also reported to
/// `tracer`.
#[must_use]
pub fn simulate(
    options: RippleOptions,
    press: &Press,
    press_at_ms: f64,
    release_at_ms: Option<f64>,
    tracer: &mut Tracer<'_>,
) -> Vec<TimelineEvent> {
    let activation = Activation::begin(options, press, press_at_ms);
    let mut timeline = Vec::new();

    timeline.push(TimelineEvent {
        at_ms: press_at_ms,
        kind: TimelineEventKind::OverlayAttached,
    });
    tracer.activation_started(ActivationStarted {
        at_ms: press_at_ms,
        fade_out_on_click: activation.options().fade_out_on_click,
    });

    // The zero-delay timer fires on the next tick, at the same timestamp.
    timeline.push(TimelineEvent {
        at_ms: press_at_ms,
        kind: TimelineEventKind::EnterApplied,
    });
    tracer.enter_applied(EnterApplied {
        at_ms: press_at_ms,
        duration_ms: activation.options().enter_duration,
    });

    let exit_at = if activation.options().fade_out_on_click {
        Some(press_at_ms)
    } else {
        release_at_ms
    };
    let Some(exit_at) = exit_at else {
        return timeline;
    };

    timeline.push(TimelineEvent {
        at_ms: exit_at,
        kind: TimelineEventKind::ExitRequested,
    });
    let plan = activation.exit_plan(exit_at);
    tracer.exit_scheduled(ExitScheduled {
        at_ms: exit_at,
        delay_ms: plan.delay_ms,
    });

    let exit_applied_at = exit_at + plan.delay_ms;
    timeline.push(TimelineEvent {
        at_ms: exit_applied_at,
        kind: TimelineEventKind::ExitApplied,
    });

    let removed_at = exit_applied_at + plan.remove_delay_ms;
    timeline.push(TimelineEvent {
        at_ms: removed_at,
        kind: TimelineEventKind::OverlayRemoved,
    });
    tracer.overlay_removed(OverlayRemoved { at_ms: removed_at });

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use kurbo::{Point, Rect};
    use ripple_core::options::{OptionKey, OptionSource, RippleOverrides, resolve};
    use ripple_core::trace::TraceSink;

    struct NoAttributes;

    impl OptionSource for NoAttributes {
        fn attribute(&self, _key: OptionKey) -> Option<String> {
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
            rect: Rect::new(0.0, 0.0, 100.0, 50.0),
        }
    }

    fn kinds(timeline: &[TimelineEvent]) -> Vec<TimelineEventKind> {
        timeline.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn quick_tap_plays_the_full_sequence() {
        let timeline = simulate(
            default_options(),
            &press(),
            1000.0,
            Some(1000.0),
            &mut Tracer::none(),
        );
        assert_eq!(
            kinds(&timeline),
            [
                TimelineEventKind::OverlayAttached,
                TimelineEventKind::EnterApplied,
                TimelineEventKind::ExitRequested,
                TimelineEventKind::ExitApplied,
                TimelineEventKind::OverlayRemoved,
            ]
        );
        // Release at press time: delay = 550 − 400/3.
        let exit_applied = timeline[3].at_ms;
        assert!((exit_applied - 1416.6666666666667).abs() < 1e-6);
        assert!((timeline[4].at_ms - (exit_applied + 400.0)).abs() < 1e-6);
    }

    #[test]
    fn late_release_fades_out_at_the_release() {
        let timeline = simulate(
            default_options(),
            &press(),
            0.0,
            Some(800.0),
            &mut Tracer::none(),
        );
        assert_eq!(timeline[2].at_ms, 800.0, "exit requested at release");
        assert_eq!(timeline[3].at_ms, 800.0, "no extra delay after enter settles");
        assert_eq!(timeline[4].at_ms, 1200.0, "removed one exit duration later");
    }

    #[test]
    fn no_release_leaves_the_overlay_attached() {
        let timeline = simulate(default_options(), &press(), 0.0, None, &mut Tracer::none());
        assert_eq!(
            kinds(&timeline),
            [
                TimelineEventKind::OverlayAttached,
                TimelineEventKind::EnterApplied,
            ]
        );
    }

    #[test]
    fn fade_out_on_click_exits_from_the_press() {
        let mut options = default_options();
        options.fade_out_on_click = true;
        // A much later release must not matter.
        let timeline = simulate(options, &press(), 100.0, Some(5000.0), &mut Tracer::none());
        assert_eq!(timeline[2].at_ms, 100.0, "exit requested at the press");
        assert!((timeline[3].at_ms - 516.6666666666667).abs() < 1e-6);
    }

    #[test]
    fn overlapping_activations_are_independent() {
        let first = simulate(
            default_options(),
            &press(),
            0.0,
            Some(0.0),
            &mut Tracer::none(),
        );
        // Second press lands while the first overlay is still entering, with
        // different timing attributes in effect.
        let mut changed = default_options();
        changed.enter_duration = 100.0;
        changed.exit_duration = 100.0;
        let second = simulate(changed, &press(), 200.0, Some(200.0), &mut Tracer::none());

        assert!((first[4].at_ms - 816.6666666666667).abs() < 1e-6);
        // 200 + (100 − 100/3) + 100.
        assert!((second[4].at_ms - 366.6666666666667).abs() < 1e-6);
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<&'static str>,
    }

    impl TraceSink for Recorder {
        fn activation_started(&mut self, _event: ripple_core::trace::ActivationStarted) {
            self.events.push("started");
        }

        fn enter_applied(&mut self, _event: ripple_core::trace::EnterApplied) {
            self.events.push("enter");
        }

        fn exit_scheduled(&mut self, _event: ripple_core::trace::ExitScheduled) {
            self.events.push("exit");
        }

        fn overlay_removed(&mut self, _event: ripple_core::trace::OverlayRemoved) {
            self.events.push("removed");
        }
    }

    #[test]
    fn tracer_sees_every_milestone() {
        let mut recorder = Recorder::default();
        let _ = simulate(
            default_options(),
            &press(),
            0.0,
            Some(10.0),
            &mut Tracer::new(&mut recorder),
        );
        assert_eq!(recorder.events, ["started", "enter", "exit", "removed"]);
    }
}
