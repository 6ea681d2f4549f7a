// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mutation-observer auto-binding.
//!
//! [`RippleObserver`] watches the document for elements carrying the
//! `data-ripple` marker attribute and binds a [`Ripple`] engine to each one
//! it finds: existing elements on [`start`](RippleObserver::start), added
//! subtrees and newly marked elements as they appear. The observer has an
//! explicit lifecycle — nothing is installed until `start` is called, and
//! [`stop`](RippleObserver::stop) disconnects it.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, MutationObserver, MutationObserverInit, MutationRecord};

use ripple_core::options::{MARKER_ATTRIBUTE, RippleOverrides, coerce_bool};

use crate::engine::Ripple;

type ObserverClosure = Closure<dyn FnMut(js_sys::Array, MutationObserver)>;

/// Binds ripple engines to marked elements as they appear in the document.
///
/// Create with [`RippleObserver::new`], then call [`start`](Self::start).
/// Engines bound by the observer outlive it; stopping only ends the watch
/// for new elements.
pub struct RippleObserver {
    observer: MutationObserver,
    /// The JS callback registered with the `MutationObserver`. Kept so the
    /// observer can fire for as long as this struct lives.
    _closure: ObserverClosure,
    state: Rc<ObserverState>,
    running: Cell<bool>,
}

struct ObserverState {
    overrides: RippleOverrides,
    /// Elements already bound, so re-observed mutations don't double-bind.
    bound: RefCell<Vec<HtmlElement>>,
}

impl RippleObserver {
    /// Creates an observer that is **not yet watching**.
    ///
    /// `overrides` are passed to every engine the observer binds; element
    /// attributes still take precedence per activation.
    #[must_use]
    pub fn new(overrides: RippleOverrides) -> Self {
        let state = Rc::new(ObserverState {
            overrides,
            bound: RefCell::new(Vec::new()),
        });

        let callback_state = Rc::clone(&state);
        let closure = Closure::wrap(Box::new(
            move |records: js_sys::Array, _observer: MutationObserver| {
                for record in records.iter() {
                    let record: MutationRecord = record.unchecked_into();
                    handle_record(&callback_state, &record);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

        let observer = MutationObserver::new(closure.as_ref().unchecked_ref())
            .expect("MutationObserver constructor failed");

        Self {
            observer,
            _closure: closure,
            state,
            running: Cell::new(false),
        }
    }

    /// Starts watching the document.
    ///
    /// Scans for already-present marked elements first, then observes child
    /// and attribute mutations on the whole document. If already running,
    /// this is a no-op.
    pub fn start(&self) {
        if self.running.get() {
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        self.running.set(true);

        if let Ok(list) = document.query_selector_all(&alloc::format!("[{MARKER_ATTRIBUTE}]")) {
            for i in 0..list.length() {
                if let Some(element) = list.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok())
                {
                    bind_if_marked(&self.state, &element);
                }
            }
        }

        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        init.set_attributes(true);
        let _ = self.observer.observe_with_options(&document, &init);
    }

    /// Stops watching. Already-bound engines keep working.
    pub fn stop(&self) {
        if !self.running.get() {
            return;
        }
        self.running.set(false);
        self.observer.disconnect();
    }

    /// Returns `true` if the observer is currently watching.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Number of elements bound so far.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.state.bound.borrow().len()
    }
}

impl Drop for RippleObserver {
    fn drop(&mut self) {
        self.stop();
    }
}

impl core::fmt::Debug for RippleObserver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RippleObserver")
            .field("running", &self.running.get())
            .field("bound", &self.state.bound.borrow().len())
            .finish()
    }
}

/// Routes one mutation record: added subtrees and marker-attribute edits.
fn handle_record(state: &Rc<ObserverState>, record: &MutationRecord) {
    match record.type_().as_str() {
        "childList" => {
            let added = record.added_nodes();
            for i in 0..added.length() {
                let Some(element) = added.item(i).and_then(|n| n.dyn_into::<Element>().ok())
                else {
                    continue;
                };
                if let Ok(root) = element.clone().dyn_into::<HtmlElement>() {
                    bind_if_marked(state, &root);
                }
                // An added subtree arrives as one record for its root.
                if let Ok(list) =
                    element.query_selector_all(&alloc::format!("[{MARKER_ATTRIBUTE}]"))
                {
                    for j in 0..list.length() {
                        if let Some(descendant) =
                            list.item(j).and_then(|n| n.dyn_into::<HtmlElement>().ok())
                        {
                            bind_if_marked(state, &descendant);
                        }
                    }
                }
            }
        }
        "attributes" => {
            if record.attribute_name().as_deref() == Some(MARKER_ATTRIBUTE)
                && let Some(element) = record
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            {
                bind_if_marked(state, &element);
            }
        }
        _ => {}
    }
}

/// Binds an engine to `element` if it carries an affirmative marker and is
/// not already bound.
fn bind_if_marked(state: &Rc<ObserverState>, element: &HtmlElement) {
    let Some(marker) = element.get_attribute(MARKER_ATTRIBUTE) else {
        return;
    };
    if !coerce_bool(&marker) {
        return;
    }
    if state.bound.borrow().iter().any(|bound| bound == element) {
        return;
    }
    // The engine ties itself to the element; only the element is recorded.
    let _ = Ripple::new(element.clone(), state.overrides.clone());
    state.bound.borrow_mut().push(element.clone());
}
