//! Color types and utilities
//!
//! Colors in stored themes are CSS hex strings (`#rgb` or `#rrggbb`). The
//! renderer needs them as channels to build `rgba()` strings and HSL
//! rotations, so parsing is lenient about case and the leading `#`.

use crate::format::format_number;

/// 8-bit RGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL triple: hue in degrees (0-360), saturation and lightness in percent (0-100)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from hex value (0xRRGGBB)
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Create a grayscale color
    pub const fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Parse `#rgb`, `#rrggbb` (case-insensitive, `#` optional)
    pub fn parse_hex(input: &str) -> Option<Self> {
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            3 => {
                let mut channels = digits
                    .chars()
                    .map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                Some(Self::rgb(
                    channels.next()??,
                    channels.next()??,
                    channels.next()??,
                ))
            }
            6 => u32::from_str_radix(digits, 16).ok().map(Self::from_hex),
            _ => None,
        }
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgba(r, g, b, a)` with the opacity formatted like every other CSS number
    pub fn to_rgba_string(&self, opacity: f64) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            format_number(opacity)
        )
    }

    pub fn to_hsl(&self) -> Hsl {
        let (h, s, l) = rgb_to_hsl(self.r, self.g, self.b);
        Hsl { h, s, l }
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
        Self::rgb(r, g, b)
    }

    /// Perceived brightness in 0.0..=1.0 (ITU-R BT.601 weights)
    pub fn brightness(&self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }

    /// Whether dark text reads better than light text on this color
    pub fn is_light(&self) -> bool {
        self.brightness() > 0.5
    }
}

/// Whether a string is a 3- or 6-digit hex color with a leading `#`
pub fn is_hex_color(input: &str) -> bool {
    input.starts_with('#') && Color::parse_hex(input).is_some()
}

/// Convert a hex color to an `rgba()` string.
///
/// Unparseable input renders as black at the requested opacity.
pub fn hex_to_rgba(hex: &str, opacity: f64) -> String {
    Color::parse_hex(hex)
        .unwrap_or(Color::BLACK)
        .to_rgba_string(opacity)
}

/// RGB (0-255) to HSL (degrees, percent, percent)
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h * 60.0, s * 100.0, l * 100.0)
}

/// HSL (degrees, percent, percent) to RGB (0-255)
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);

    let to_byte = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;

    if s == 0.0 {
        let v = to_byte(l);
        return (v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    (
        to_byte(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_byte(hue_to_rgb(p, q, h)),
        to_byte(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Number of colors in a party palette
pub const PARTY_STEPS: usize = 9;

/// Derive the nine-color "party" palette from a base color.
///
/// Each step rotates the hue by 30 degrees while saturation ramps from 100%
/// down to a 70% floor and lightness from 80% down to a 30% floor.
pub fn generate_party_colors(base_hex: &str) -> Vec<String> {
    let base = Color::parse_hex(base_hex).unwrap_or(Color::BLACK).to_hsl();

    (0..PARTY_STEPS)
        .map(|i| {
            let step = i as f64;
            let hsl = Hsl {
                h: (base.h + 30.0 * step).rem_euclid(360.0),
                s: (100.0 - 5.0 * step).max(70.0),
                l: (80.0 - 7.0 * step).max(30.0),
            };
            Color::from_hsl(hsl).to_hex()
        })
        .collect()
}
