// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for ripple.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`Ripple`]: per-root engine (root styles, press handling, overlay
//!   sequencing)
//! - [`ripple_effect`]: single activation from a raw event
//! - [`RippleObserver`]: `MutationObserver`-driven auto-binding of
//!   `data-ripple` elements
//!
//! All timing runs on `performance.now()` and `setTimeout`; all geometry
//! and option resolution comes from [`ripple_core`].

#![no_std]

extern crate alloc;

mod dom;
mod engine;
mod observer;
mod timer;

pub use dom::{ElementSource, effective_target};
pub use engine::{Ripple, ripple_effect};
pub use observer::RippleObserver;
pub use ripple_core::options::{RippleOptions, RippleOverrides};
pub use timer::now_ms;
