// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS color parsing and contrast math.
//!
//! The fallback overlay color is derived from the root element's computed
//! background: pick black or white by WCAG contrast ratio, then fade to a
//! low alpha. This module implements the minimum color support that
//! requires — the hex and `rgb()`/`rgba()` forms `getComputedStyle`
//! produces, relative luminance and contrast ratio per WCAG 2.x, the
//! black/white contrast pick, hue complement, and `#rrggbbaa` output.
//!
//! Unparseable input is not an error anywhere in this crate: callers treat
//! it as a color of luminance zero, which degrades to the white fallback.

use alloc::string::String;
use alloc::vec::Vec;

use alloc::format;

/// An 8-bit-per-channel RGB color with a fractional alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel, 0–255.
    pub r: u8,
    /// Green channel, 0–255.
    pub g: u8,
    /// Blue channel, 0–255.
    pub b: u8,
    /// Alpha, 0.0–1.0.
    pub a: f64,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Creates a fully opaque color.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Returns this color with its alpha replaced.
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Serializes as `#rrggbbaa` (alpha rounded to the nearest byte).
    #[must_use]
    pub fn to_hex8(self) -> String {
        let alpha = clamp_channel(libm::round(self.a * 255.0));
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, alpha)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to the 0–255 channel range first"
)]
fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Parses a CSS color string.
///
/// Supports `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, and the `rgb()` /
/// `rgba()` functional forms (comma- or space-separated, integer or
/// percentage channels). Returns `None` for anything else.
#[must_use]
pub fn parse(input: &str) -> Option<Rgba> {
    let input = input.trim();
    if let Some(hex) = input.strip_prefix('#') {
        return parse_hex(hex);
    }
    let lower = input.to_ascii_lowercase();
    if let Some(body) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
    {
        return parse_rgb_body(body.strip_suffix(')')?);
    }
    None
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    let nibble = |i: usize| -> Option<u8> {
        let c = hex.as_bytes().get(i)?;
        (*c as char).to_digit(16).and_then(|d| u8::try_from(d).ok())
    };
    let byte = |i: usize| -> Option<u8> { Some(nibble(i)? << 4 | nibble(i + 1)?) };
    match hex.len() {
        // Shorthand digits expand by repetition: #abc → #aabbcc.
        3 | 4 => {
            let expand = |i: usize| -> Option<u8> { nibble(i).map(|d| d << 4 | d) };
            let mut color = Rgba::opaque(expand(0)?, expand(1)?, expand(2)?);
            if hex.len() == 4 {
                color.a = f64::from(expand(3)?) / 255.0;
            }
            Some(color)
        }
        6 | 8 => {
            let mut color = Rgba::opaque(byte(0)?, byte(2)?, byte(4)?);
            if hex.len() == 8 {
                color.a = f64::from(byte(6)?) / 255.0;
            }
            Some(color)
        }
        _ => None,
    }
}

fn parse_rgb_body(body: &str) -> Option<Rgba> {
    let parts: Vec<&str> = body
        .split(|c: char| c == ',' || c == '/' || c.is_ascii_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let channel = |raw: &str| -> Option<u8> {
        if let Some(percent) = raw.strip_suffix('%') {
            let value: f64 = percent.parse().ok()?;
            Some(clamp_channel(libm::round(value * 255.0 / 100.0)))
        } else {
            let value: f64 = raw.parse().ok()?;
            Some(clamp_channel(libm::round(value)))
        }
    };
    let mut color = Rgba::opaque(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
    if let Some(raw) = parts.get(3) {
        let alpha: f64 = if let Some(percent) = raw.strip_suffix('%') {
            percent.parse::<f64>().ok()? / 100.0
        } else {
            raw.parse().ok()?
        };
        color.a = alpha.clamp(0.0, 1.0);
    }
    Some(color)
}

/// Converts an sRGB channel to linear light.
fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        libm::pow((v + 0.055) / 1.055, 2.4)
    }
}

/// Relative luminance per WCAG 2.x (alpha is ignored).
#[must_use]
pub fn relative_luminance(color: Rgba) -> f64 {
    0.2126 * srgb_to_linear(color.r)
        + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b)
}

/// WCAG contrast ratio between two colors, in the range 1–21.
#[must_use]
pub fn contrast_ratio(foreground: Rgba, background: Rgba) -> f64 {
    let lum_a = relative_luminance(foreground);
    let lum_b = relative_luminance(background);
    (lum_a.max(lum_b) + 0.05) / (lum_a.min(lum_b) + 0.05)
}

/// Picks black or white as the contrasting color for `color`.
///
/// Returns black when the contrast ratio of `color` against black reaches
/// `threshold` (i.e. `color` is light enough to carry a dark overlay),
/// white otherwise.
#[must_use]
pub fn contrast_black_or_white(color: Rgba, threshold: f64) -> Rgba {
    if contrast_ratio(color, Rgba::BLACK) >= threshold {
        Rgba::BLACK
    } else {
        Rgba::WHITE
    }
}

/// Returns the hue complement of `color` (180° rotation in HSL space).
#[must_use]
pub fn complement(color: Rgba) -> Rgba {
    let (h, s, l) = rgb_to_hsl(color);
    let rotated = (h + 180.0) % 360.0;
    let mut out = hsl_to_rgb(rotated, s, l);
    out.a = color.a;
    out
}

/// Fades `color` to the given alpha and serializes as `#rrggbbaa`.
#[must_use]
pub fn fade(color: Rgba, alpha: f64) -> String {
    color.with_alpha(alpha).to_hex8()
}

fn rgb_to_hsl(color: Rgba) -> (f64, f64, f64) {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    if max == min {
        return (0.0, 0.0, l);
    }
    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };
    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    (h * 60.0, s, l)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgba {
    if s == 0.0 {
        let v = clamp_channel(libm::round(l * 255.0));
        return Rgba::opaque(v, v, v);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |offset: f64| -> u8 {
        let mut t = h / 360.0 + offset;
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        clamp_channel(libm::round(v * 255.0))
    };
    Rgba::opaque(channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(parse("#fff"), Some(Rgba::WHITE));
        assert_eq!(parse("#000000"), Some(Rgba::BLACK));
        assert_eq!(parse("#ff0000"), Some(Rgba::opaque(255, 0, 0)));
        let half = parse("#00000080").expect("hex8 should parse");
        assert!((half.a - 128.0 / 255.0).abs() < 1e-9, "alpha byte 0x80");
    }

    #[test]
    fn parses_computed_style_forms() {
        assert_eq!(parse("rgb(255, 255, 255)"), Some(Rgba::WHITE));
        let transparent = parse("rgba(0, 0, 0, 0)").expect("rgba should parse");
        assert_eq!(transparent.a, 0.0, "transparent alpha");
        assert_eq!(parse("rgb(100% 0% 0%)"), Some(Rgba::opaque(255, 0, 0)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("#12345"), None);
        assert_eq!(parse("hsl(0, 0%, 0%)"), None);
        assert_eq!(parse("rgb(1, 2)"), None);
    }

    #[test]
    fn black_on_white_contrast_is_21() {
        let ratio = contrast_ratio(Rgba::BLACK, Rgba::WHITE);
        assert!((ratio - 21.0).abs() < 0.01, "got {ratio}");
    }

    #[test]
    fn same_color_contrast_is_1() {
        let ratio = contrast_ratio(Rgba::WHITE, Rgba::WHITE);
        assert!((ratio - 1.0).abs() < 0.01, "got {ratio}");
    }

    #[test]
    fn contrast_pick_light_background_gets_black() {
        assert_eq!(contrast_black_or_white(Rgba::WHITE, 10.0), Rgba::BLACK);
    }

    #[test]
    fn contrast_pick_dark_background_gets_white() {
        assert_eq!(contrast_black_or_white(Rgba::BLACK, 10.0), Rgba::WHITE);
        let navy = parse("#000080").expect("hex should parse");
        assert_eq!(contrast_black_or_white(navy, 10.0), Rgba::WHITE);
    }

    #[test]
    fn fade_produces_hex8() {
        // round(0.15 * 255) = 38 = 0x26.
        assert_eq!(fade(Rgba::BLACK, 0.15), "#00000026");
        assert_eq!(fade(Rgba::WHITE, 0.15), "#ffffff26");
    }

    #[test]
    fn complement_of_red_is_cyan() {
        let red = Rgba::opaque(255, 0, 0);
        assert_eq!(complement(red), Rgba::opaque(0, 255, 255));
    }

    #[test]
    fn complement_of_gray_is_gray() {
        let gray = Rgba::opaque(128, 128, 128);
        assert_eq!(complement(gray), gray);
    }
}
