//! Font scale derivation
//!
//! Sizes follow an exponential scale around the base: entry `i` (0-based,
//! the base sitting at index 1) is `base * e^((i - 1) / 5)` snapped down
//! to an even integer. Line heights come from `(size + 8) / size`.

use crate::error::ThemeError;
use crate::map::TokenMap;
use crate::tokens;

/// Line height paired with a font size: `(size + 8) / size`.
pub fn line_height(font_size: f64) -> f64 {
    (font_size + 8.0) / font_size
}

/// The ten-entry `(size, line_height)` scale for `base`.
pub(crate) fn font_sizes(base: f64) -> Vec<(f64, f64)> {
    (0..10)
        .map(|index| {
            let exp = (index as f64 - 1.0) / 5.0;
            let raw = base * exp.exp();
            let int_size = if index > 1 { raw.floor() } else { raw.ceil() };
            let even = (int_size / 2.0).floor() * 2.0;
            let size = if index == 1 { base } else { even };
            (size, line_height(size))
        })
        .collect()
}

pub(crate) fn font_map_token(font_size: f64) -> Result<TokenMap, ThemeError> {
    let pairs = font_sizes(font_size);
    let size = |i: usize| pairs[i].0;
    let lh = |i: usize| pairs[i].1;

    let font_size_sm = size(0);
    let font_size_md = size(1);
    let font_size_lg = size(2);
    let font_size_xl = size(3);
    let line_height = lh(1);
    let line_height_sm = lh(0);
    let line_height_lg = lh(2);

    Ok(tokens! {
        "fontSizeSM" => font_size_sm,
        "fontSize" => font_size_md,
        "fontSizeLG" => font_size_lg,
        "fontSizeXL" => font_size_xl,
        "fontSizeHeading1" => size(6),
        "fontSizeHeading2" => size(5),
        "fontSizeHeading3" => size(4),
        "fontSizeHeading4" => size(3),
        "fontSizeHeading5" => size(2),
        "lineHeight" => line_height,
        "lineHeightLG" => line_height_lg,
        "lineHeightSM" => line_height_sm,
        "fontHeight" => (line_height * font_size_md).round(),
        "fontHeightLG" => (line_height_lg * font_size_lg).round(),
        "fontHeightSM" => (line_height_sm * font_size_sm).round(),
        "lineHeightHeading1" => lh(6),
        "lineHeightHeading2" => lh(5),
        "lineHeightHeading3" => lh(4),
        "lineHeightHeading4" => lh(3),
        "lineHeightHeading5" => lh(2),
    })
}
