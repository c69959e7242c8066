//! Ten-step color palette generation
//!
//! Each preset color expands to a ten-entry ramp: five lighter steps, the
//! base color, and four darker steps, produced by walking hue, saturation
//! and value in fixed increments. Dark-scheme ramps reuse the light
//! pattern and blend selected entries into the page background.

use crate::color::{Color, Hsv};

const HUE_STEP: f64 = 2.0;
const SATURATION_STEP: f64 = 0.16;
const SATURATION_STEP2: f64 = 0.05;
const BRIGHTNESS_STEP1: f64 = 0.05;
const BRIGHTNESS_STEP2: f64 = 0.15;
const LIGHT_COLOR_COUNT: i32 = 5;
const DARK_COLOR_COUNT: i32 = 4;

/// Which light-ramp entry each dark-ramp slot samples, and how far it is
/// blended from the background toward that entry.
const DARK_COLOR_MAP: [(usize, f64); 10] = [
    (7, 0.15),
    (6, 0.25),
    (5, 0.30),
    (5, 0.45),
    (5, 0.65),
    (5, 0.85),
    (4, 0.90),
    (3, 0.95),
    (2, 0.97),
    (1, 0.98),
];

fn get_hue(hsv: Hsv, i: i32, light: bool) -> f64 {
    // Warm hues rotate the opposite way from cool hues.
    let rounded = hsv.h.round();
    let mut hue = if (60.0..=240.0).contains(&rounded) {
        if light {
            rounded - HUE_STEP * f64::from(i)
        } else {
            rounded + HUE_STEP * f64::from(i)
        }
    } else if light {
        rounded + HUE_STEP * f64::from(i)
    } else {
        rounded - HUE_STEP * f64::from(i)
    };
    if hue < 0.0 {
        hue += 360.0;
    } else if hue >= 360.0 {
        hue -= 360.0;
    }
    hue
}

fn get_saturation(hsv: Hsv, i: i32, light: bool) -> f64 {
    // Greys stay grey.
    if hsv.h == 0.0 && hsv.s == 0.0 {
        return hsv.s;
    }
    let mut saturation = if light {
        hsv.s - SATURATION_STEP * f64::from(i)
    } else if i == DARK_COLOR_COUNT {
        hsv.s + SATURATION_STEP
    } else {
        hsv.s + SATURATION_STEP2 * f64::from(i)
    };
    if saturation > 1.0 {
        saturation = 1.0;
    }
    if light && i == LIGHT_COLOR_COUNT && saturation > 0.1 {
        saturation = 0.1;
    }
    if saturation < 0.06 {
        saturation = 0.06;
    }
    round2(saturation)
}

fn get_value(hsv: Hsv, i: i32, light: bool) -> f64 {
    let value = if light {
        hsv.v + BRIGHTNESS_STEP1 * f64::from(i)
    } else {
        hsv.v - BRIGHTNESS_STEP2 * f64::from(i)
    };
    round2(value.min(1.0))
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Generate the ten-step light-scheme ramp for `base`.
pub fn generate(base: Color) -> Vec<Color> {
    let hsv = base.to_hsv();
    let mut patterns = Vec::with_capacity(10);
    for i in (1..=LIGHT_COLOR_COUNT).rev() {
        patterns.push(Color::from_hsv(Hsv {
            h: get_hue(hsv, i, true),
            s: get_saturation(hsv, i, true),
            v: get_value(hsv, i, true),
        }));
    }
    patterns.push(base);
    for i in 1..=DARK_COLOR_COUNT {
        patterns.push(Color::from_hsv(Hsv {
            h: get_hue(hsv, i, false),
            s: get_saturation(hsv, i, false),
            v: get_value(hsv, i, false),
        }));
    }
    patterns
}

/// Generate the ten-step dark-scheme ramp for `base` against `background`.
pub fn generate_dark(base: Color, background: Color) -> Vec<Color> {
    let patterns = generate(base);
    DARK_COLOR_MAP
        .iter()
        .map(|&(index, opacity)| background.mix(patterns[index], opacity * 100.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hexes(colors: &[Color]) -> Vec<String> {
        colors.iter().map(Color::to_hex_string).collect()
    }

    #[test]
    fn light_ramp_for_daybreak_blue() {
        let base = Color::from_hex_str("#1677ff").unwrap();
        assert_eq!(
            hexes(&generate(base)),
            vec![
                "#e6f4ff", "#bae0ff", "#91caff", "#69b1ff", "#4096ff", "#1677ff", "#0958d9",
                "#003eb3", "#002c8c", "#001d66",
            ]
        );
    }

    #[test]
    fn dark_ramp_blends_into_background() {
        let base = Color::from_hex_str("#1677ff").unwrap();
        let background = Color::from_hex_str("#141414").unwrap();
        assert_eq!(
            hexes(&generate_dark(base, background)),
            vec![
                "#111a2c", "#112545", "#15325b", "#15417e", "#1554ad", "#1668dc", "#3c89e8",
                "#65a9f3", "#8dc5f8", "#b7dcfa",
            ]
        );
    }

    #[test]
    fn grey_input_stays_grey() {
        let ramp = generate(Color::from_hex_str("#808080").unwrap());
        for color in ramp {
            assert_eq!(color.r, color.g);
            assert_eq!(color.g, color.b);
        }
    }

    #[test]
    fn ramp_always_has_ten_entries() {
        for hex in ["#f5222d", "#fadb14", "#52c41a", "#722ed1"] {
            let base = Color::from_hex_str(hex).unwrap();
            assert_eq!(generate(base).len(), 10);
            assert_eq!(generate_dark(base, Color::BLACK).len(), 10);
        }
    }
}
