// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types and sequencing for pointer ripple effects.
//!
//! `ripple_core` owns everything about the ripple effect that does not touch
//! a browser: the option model and its resolution rules, overlay geometry,
//! the fixed style vocabulary, and the per-activation state machine that
//! sequences fade-in → hold → fade-out → removal. It is `no_std` compatible
//! (with `alloc`) and has no DOM or timer dependencies; backend crates supply
//! those.
//!
//! # Architecture
//!
//! A pointer press flows through the crate like this:
//!
//! ```text
//!   Backend (pointer-down on a bound root)
//!       │
//!       ▼
//!   options::resolve() ──► RippleOptions        (attributes > overrides > defaults)
//!       │
//!       ▼
//!   Activation::begin() ──► overlay_styles()    (geometry + paint, scale(0))
//!       │                    enter_styles()     (applied one tick later)
//!       ▼
//!   Activation::exit_plan() ──► ExitPlan        (delay, fade-out, removal)
//! ```
//!
//! **[`options`]** — The resolved [`RippleOptions`](options::RippleOptions)
//! record, per-call [`RippleOverrides`](options::RippleOverrides), the static
//! key → data-attribute mapping, and the precedence/coercion rules.
//!
//! **[`geometry`]** — Corner-distance radius computation and the overlay
//! frame derived from a pointer press.
//!
//! **[`style`]** — Ordered style maps, append-only inline-style merging, and
//! the fixed overlay/root style vocabulary.
//!
//! **[`color`]** — CSS color parsing plus the WCAG luminance/contrast math
//! used to derive the fallback overlay color from a root's background.
//!
//! **[`effect`]** — The [`Activation`](effect::Activation) snapshot and the
//! fade-out delay calculation.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! activation-lifecycle instrumentation.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod color;
pub mod effect;
pub mod geometry;
pub mod options;
pub mod style;
pub mod trace;
