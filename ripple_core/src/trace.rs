// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activation-lifecycle instrumentation.
//!
//! Backends report the four milestones of an activation to an optional
//! [`TraceSink`]. Every method has a no-op default, so a sink implements
//! only what it cares about; [`Tracer::none`] costs nothing on the hot
//! path beyond an `Option` check.

/// A snapshot of when and how an activation started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivationStarted {
    /// Timestamp of the pointer-down.
    pub at_ms: f64,
    /// Whether the activation will fade out on its own press.
    pub fade_out_on_click: bool,
}

/// The enter transition was applied to the overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnterApplied {
    /// Timestamp the enter styles were written.
    pub at_ms: f64,
    /// Enter-transition duration.
    pub duration_ms: f64,
}

/// An exit was requested and scheduled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExitScheduled {
    /// Timestamp of the release (or of the press, for fade-out-on-click).
    pub at_ms: f64,
    /// Delay before the exit styles apply.
    pub delay_ms: f64,
}

/// The overlay was removed from its root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayRemoved {
    /// Timestamp of the removal.
    pub at_ms: f64,
}

/// Receiver for activation-lifecycle events.
pub trait TraceSink {
    /// A press produced a new activation.
    fn activation_started(&mut self, event: ActivationStarted) {
        let _ = event;
    }

    /// The enter transition was applied.
    fn enter_applied(&mut self, event: EnterApplied) {
        let _ = event;
    }

    /// An exit was requested and its delay computed.
    fn exit_scheduled(&mut self, event: ExitScheduled) {
        let _ = event;
    }

    /// The overlay left the document.
    fn overlay_removed(&mut self, event: OverlayRemoved) {
        let _ = event;
    }
}

/// An optional borrowed sink, threaded through backend sequencing.
pub struct Tracer<'a> {
    sink: Option<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer")
            .field("attached", &self.sink.is_some())
            .finish()
    }
}

impl<'a> Tracer<'a> {
    /// A tracer that discards everything.
    #[must_use]
    pub fn none() -> Self {
        Self { sink: None }
    }

    /// A tracer forwarding to `sink`.
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        Self { sink: Some(sink) }
    }

    /// Reports [`TraceSink::activation_started`].
    pub fn activation_started(&mut self, event: ActivationStarted) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.activation_started(event);
        }
    }

    /// Reports [`TraceSink::enter_applied`].
    pub fn enter_applied(&mut self, event: EnterApplied) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.enter_applied(event);
        }
    }

    /// Reports [`TraceSink::exit_scheduled`].
    pub fn exit_scheduled(&mut self, event: ExitScheduled) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.exit_scheduled(event);
        }
    }

    /// Reports [`TraceSink::overlay_removed`].
    pub fn overlay_removed(&mut self, event: OverlayRemoved) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.overlay_removed(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Recorder {
        milestones: Vec<(&'static str, f64)>,
    }

    impl TraceSink for Recorder {
        fn activation_started(&mut self, event: ActivationStarted) {
            self.milestones.push(("started", event.at_ms));
        }

        fn overlay_removed(&mut self, event: OverlayRemoved) {
            self.milestones.push(("removed", event.at_ms));
        }
    }

    #[test]
    fn sink_sees_only_what_it_implements() {
        let mut recorder = Recorder::default();
        let mut tracer = Tracer::new(&mut recorder);
        tracer.activation_started(ActivationStarted {
            at_ms: 10.0,
            fade_out_on_click: false,
        });
        tracer.enter_applied(EnterApplied {
            at_ms: 10.0,
            duration_ms: 550.0,
        });
        tracer.overlay_removed(OverlayRemoved { at_ms: 900.0 });
        assert_eq!(
            recorder.milestones,
            [("started", 10.0), ("removed", 900.0)]
        );
    }

    #[test]
    fn none_tracer_discards() {
        let mut tracer = Tracer::none();
        tracer.exit_scheduled(ExitScheduled {
            at_ms: 0.0,
            delay_ms: 416.0,
        });
    }
}
