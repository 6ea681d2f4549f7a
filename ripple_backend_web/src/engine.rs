// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-root ripple engine.
//!
//! A [`Ripple`] binds one root element: it installs the root style deltas
//! once, then turns every `mousedown`/`touchstart` into an activation. Each
//! activation resolves its options fresh from the root's attributes,
//! snapshots them into an immutable [`Activation`], and sequences its own
//! overlay through fade-in, fade-out, and removal. Overlapping presses
//! therefore animate independently, each on its own snapshot.
//!
//! Exit handlers are a single slot per root: a new press replaces the
//! previous activation's `mouseup`/`mouseleave`/`touchend` handler. An
//! overlay whose handler was replaced stays attached until its own timers
//! (if any were scheduled) run out; only future trigger events are routed
//! to the newest overlay.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, MouseEvent};

use ripple_core::effect::Activation;
use ripple_core::geometry::Press;
use ripple_core::options::{RippleOverrides, resolve};

use crate::dom;
use crate::timer;

type EventClosure = Closure<dyn FnMut(Event)>;

/// A ripple engine bound to one root element.
///
/// The engine stays alive as long as its root does: the `mousedown` handler
/// keeps the engine state reachable from the element, so dropping the
/// `Ripple` handle does not unbind it.
pub struct Ripple {
    inner: Rc<RippleInner>,
}

struct RippleInner {
    root: HtmlElement,
    overrides: RippleOverrides,

    /// The `mousedown` handler. Holds an `Rc` back to this struct, which is
    /// what ties the engine's lifetime to the root element's.
    enter_closure: RefCell<Option<EventClosure>>,

    /// The current activation's exit handler (`mouseup`/`mouseleave`/
    /// `touchend`). One slot: each press replaces the previous activation's
    /// handler.
    exit_closure: RefCell<Option<EventClosure>>,
}

impl Ripple {
    /// Binds a new engine to `root`.
    ///
    /// Installs the root style deltas immediately and registers the
    /// `mousedown`/`touchstart` handlers.
    #[must_use]
    pub fn new(root: HtmlElement, overrides: RippleOverrides) -> Self {
        dom::install_root_styles(&root);
        let ripple = Self {
            inner: Rc::new(RippleInner {
                root,
                overrides,
                enter_closure: RefCell::new(None),
                exit_closure: RefCell::new(None),
            }),
        };

        let inner = Rc::clone(&ripple.inner);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            fade_in(&inner, &event);
        }) as Box<dyn FnMut(Event)>);
        let handler = closure.as_ref().unchecked_ref();
        ripple.inner.root.set_onmousedown(Some(handler));
        ripple.inner.root.set_ontouchstart(Some(handler));
        *ripple.inner.enter_closure.borrow_mut() = Some(closure);
        ripple
    }

    /// The root element this engine is bound to.
    #[must_use]
    pub fn root(&self) -> &HtmlElement {
        &self.inner.root
    }
}

impl core::fmt::Debug for Ripple {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ripple")
            .field("root", &"HtmlElement")
            .field("armed", &self.inner.exit_closure.borrow().is_some())
            .finish()
    }
}

/// Starts one activation: overlay, exit handlers, enter transition.
fn fade_in(inner: &Rc<RippleInner>, event: &Event) {
    let Some(pointer) = dom::press_point(event) else {
        return;
    };
    let options = resolve(&dom::ElementSource(&inner.root), &inner.overrides);
    let press = Press {
        pointer,
        rect: dom::bounding_rect(&inner.root),
    };
    let activation = Rc::new(Activation::begin(options, &press, timer::now_ms()));

    let overlay = create_overlay(&inner.root, &activation);

    // Arm the exit for this activation, replacing the previous one.
    let exit_activation = Rc::clone(&activation);
    let exit_overlay = overlay.clone();
    let exit = Closure::wrap(Box::new(move |_event: Event| {
        fade_out(&exit_activation, &exit_overlay);
    }) as Box<dyn FnMut(Event)>);
    let handler = exit.as_ref().unchecked_ref();
    inner.root.set_onmouseup(Some(handler));
    inner.root.set_onmouseleave(Some(handler));
    inner.root.set_ontouchend(Some(handler));
    *inner.exit_closure.borrow_mut() = Some(exit);

    schedule_enter(&activation, &overlay);

    if activation.options().fade_out_on_click {
        fade_out(&activation, &overlay);
    }
}

/// Creates the overlay element at `scale(0)` and appends it to `root`.
fn create_overlay(root: &HtmlElement, activation: &Activation) -> HtmlElement {
    let document = root.owner_document().expect("no owner document");
    let overlay: HtmlElement = document
        .create_element("div")
        .expect("create_element failed")
        .unchecked_into();
    dom::apply_styles(&overlay, &activation.overlay_styles());
    let _ = root.append_child(&overlay);
    overlay
}

/// Applies the enter styles one task later, so the transition animates from
/// the overlay's initial `scale(0)`.
fn schedule_enter(activation: &Rc<Activation>, overlay: &HtmlElement) {
    let activation = Rc::clone(activation);
    let overlay = overlay.clone();
    timer::schedule(0.0, move || {
        dom::apply_styles(&overlay, &activation.enter_styles());
    });
}

/// Schedules the fade-out and removal for one activation.
fn fade_out(activation: &Rc<Activation>, overlay: &HtmlElement) {
    let plan = activation.exit_plan(timer::now_ms());
    let activation = Rc::clone(activation);
    let overlay = overlay.clone();
    timer::schedule(plan.delay_ms, move || {
        dom::apply_styles(&overlay, &activation.exit_styles());
        timer::schedule(plan.remove_delay_ms, move || overlay.remove());
    });
}

/// Runs a single ripple activation from a raw event, without a bound engine.
///
/// The activation attaches to the event's effective target (`currentTarget`
/// if it is an `HtmlElement`, else `target`); events with neither are
/// ignored. The exit handler is handed to the element's exit slots and
/// replaced, not reclaimed, by the next call.
pub fn ripple_effect(event: &MouseEvent, overrides: &RippleOverrides) {
    let Some(root) = dom::effective_target(event) else {
        return;
    };
    dom::install_root_styles(&root);
    let options = resolve(&dom::ElementSource(&root), overrides);
    let press = Press {
        pointer: dom::client_point(event),
        rect: dom::bounding_rect(&root),
    };
    let activation = Rc::new(Activation::begin(options, &press, timer::now_ms()));

    let overlay = create_overlay(&root, &activation);

    let exit_activation = Rc::clone(&activation);
    let exit_overlay = overlay.clone();
    let exit = Closure::wrap(Box::new(move |_event: Event| {
        fade_out(&exit_activation, &exit_overlay);
    }) as Box<dyn FnMut(Event)>);
    let handler = exit.as_ref().unchecked_ref();
    root.set_onmouseup(Some(handler));
    root.set_onmouseleave(Some(handler));
    root.set_ontouchend(Some(handler));
    exit.forget();

    schedule_enter(&activation, &overlay);

    if activation.options().fade_out_on_click {
        fade_out(&activation, &overlay);
    }
}
