// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay geometry.
//!
//! A ripple overlay is a circle positioned inside the root element. Its
//! radius is the distance from the press point to the furthest corner of
//! the root's bounding rectangle (so the circle always covers the whole
//! root), scaled by the `size_modifier` option. Its origin is the press
//! point, or the rectangle's center when `disable_centering` is set.
//!
//! All coordinates are viewport-relative (the values a `mousedown` event
//! and `getBoundingClientRect` report); the computed [`OverlayFrame`] is
//! root-relative, ready to be applied as `top`/`left`/`width`/`height`.

use kurbo::{Point, Rect, Vec2};

use crate::style::StyleMap;

/// One pointer-down observation in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Press {
    /// The pointer position.
    pub pointer: Point,
    /// The root element's bounding rectangle.
    pub rect: Rect,
}

/// Radius needed for a circle at `point` to cover every corner of `rect`.
///
/// Takes the larger horizontal and vertical edge distances independently and
/// combines them by Pythagorean sum. The result is an upper bound: it is at
/// least the true distance to each of the four actual corners.
#[must_use]
pub fn distance_to_furthest_corner(point: Point, rect: &Rect) -> f64 {
    let dx = libm::fabs(point.x - rect.x0).max(libm::fabs(point.x - rect.x1));
    let dy = libm::fabs(point.y - rect.y0).max(libm::fabs(point.y - rect.y1));
    Vec2::new(dx, dy).hypot()
}

/// The overlay's position and size, relative to the root element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayFrame {
    /// Offset of the overlay's left edge from the root's left edge, in px.
    pub left: f64,
    /// Offset of the overlay's top edge from the root's top edge, in px.
    pub top: f64,
    /// Overlay width in px (twice the radius).
    pub width: f64,
    /// Overlay height in px (twice the radius).
    pub height: f64,
}

impl OverlayFrame {
    /// Computes the frame for a press.
    ///
    /// The radius is always measured from the pointer position, even when
    /// `disable_centering` moves the origin to the rectangle's center.
    #[must_use]
    pub fn for_press(press: &Press, disable_centering: bool, size_modifier: f64) -> Self {
        let radius = distance_to_furthest_corner(press.pointer, &press.rect) * size_modifier;
        let origin = if disable_centering {
            press.rect.center()
        } else {
            press.pointer
        };
        let offset = origin - press.rect.origin();
        Self {
            left: offset.x - radius,
            top: offset.y - radius,
            width: radius * 2.0,
            height: radius * 2.0,
        }
    }

    /// The frame as positioning styles.
    #[must_use]
    pub fn styles(&self) -> StyleMap {
        let mut styles = StyleMap::new();
        styles.push_px("top", self.top);
        styles.push_px("left", self.left);
        styles.push_px("width", self.width);
        styles.push_px("height", self.height);
        styles
    }

    /// The center of the frame, relative to the root element.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}
