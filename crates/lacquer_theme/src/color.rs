//! sRGB color values for token derivation
//!
//! Token derivation works on 8-bit sRGB channels plus a unit alpha, and
//! round-trips through HSV (palette stepping) and HSL (darken/lighten).
//! Formatting matches what stylesheet consumers expect: lowercase hex for
//! opaque colors, `rgba(r, g, b, a)` once an alpha is involved.

use crate::error::ThemeError;

/// An sRGB color with 8-bit channels and a 0..=1 alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

/// HSV representation; hue in degrees, saturation/value in 0..=1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb` or `#rrggbb`, case-insensitive, leading `#` optional.
    pub fn from_hex_str(hex: &str) -> Result<Self, ThemeError> {
        let invalid = || ThemeError::InvalidColor {
            value: hex.to_string(),
        };
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let parse = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (i, ch) in digits.chars().enumerate() {
                    let value = parse(&ch.to_string())?;
                    channels[i] = value * 17;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 => Ok(Self::rgb(
                parse(&digits[0..2])?,
                parse(&digits[2..4])?,
                parse(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Parse a hex string or an `rgb(...)` / `rgba(...)` functional form.
    pub fn from_css_str(value: &str) -> Result<Self, ThemeError> {
        let invalid = || ThemeError::InvalidColor {
            value: value.to_string(),
        };
        let trimmed = value.trim();
        let body = trimmed
            .strip_prefix("rgba(")
            .or_else(|| trimmed.strip_prefix("rgb("));
        let Some(body) = body else {
            return Self::from_hex_str(trimmed);
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(invalid());
        }
        let channel = |s: &str| s.parse::<u8>().map_err(|_| invalid());
        let alpha = match parts.get(3) {
            Some(s) => s.parse::<f64>().map_err(|_| invalid())?,
            None => 1.0,
        };
        Ok(Self::rgba(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            alpha,
        ))
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.a = alpha;
        self
    }

    /// Lowercase `#rrggbb`; alpha is not encoded.
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` otherwise, with the
    /// alpha rounded to two decimals.
    pub fn to_rgb_string(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            let alpha = (self.a * 100.0).round() / 100.0;
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
        }
    }

    pub fn to_hsv(&self) -> Hsv {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;
        let v = max;
        let s = if max == 0.0 { 0.0 } else { d / max };
        let h = if d == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };
        Hsv { h: h * 360.0, s, v }
    }

    /// Build from HSV; hue wraps modulo 360.
    pub fn from_hsv(hsv: Hsv) -> Self {
        let h = (hsv.h.rem_euclid(360.0)) / 360.0 * 6.0;
        let i = h.floor();
        let f = h - i;
        let p = hsv.v * (1.0 - hsv.s);
        let q = hsv.v * (1.0 - f * hsv.s);
        let t = hsv.v * (1.0 - (1.0 - f) * hsv.s);
        let (r, g, b) = match (i as i64) % 6 {
            0 => (hsv.v, t, p),
            1 => (q, hsv.v, p),
            2 => (p, hsv.v, t),
            3 => (p, q, hsv.v),
            4 => (t, p, hsv.v),
            _ => (hsv.v, p, q),
        };
        Self::rgb(round_channel(r), round_channel(g), round_channel(b))
    }

    /// Lower HSL lightness by `amount` percentage points, clamped to 0..=1.
    pub fn darken(&self, amount: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l - amount / 100.0).clamp(0.0, 1.0)).with_alpha(self.a)
    }

    /// Raise HSL lightness by `amount` percentage points, clamped to 0..=1.
    pub fn lighten(&self, amount: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l + amount / 100.0).clamp(0.0, 1.0)).with_alpha(self.a)
    }

    /// Move `amount` percent (0..=100) of the way toward `other`.
    pub fn mix(&self, other: Color, amount: f64) -> Self {
        let p = amount / 100.0;
        let channel = |a: u8, b: u8| round_channel(((f64::from(b) - f64::from(a)) * p + f64::from(a)) / 255.0);
        Self::rgb(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }

    fn to_hsl(&self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return (0.0, 0.0, l);
        }
        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };
        (h, s, l)
    }

    fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        if s == 0.0 {
            let v = round_channel(l);
            return Self::rgb(v, v, v);
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Self::rgb(
            round_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            round_channel(hue_to_rgb(p, q, h)),
            round_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn round_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
