//! Derivative functions
//!
//! Three derivatives ship with the engine. `default` produces the whole
//! map token from the seed; `dark` and `compact` layer onto an
//! accumulator the default derivative has already filled. The builder in
//! [`crate::map`] merges each stage's partial output, last write winning.

mod colors;
mod common;
mod font;
mod height;
mod size;

pub use font::line_height;

use colors::Scheme;

use crate::error::ThemeError;
use crate::map::{Derivative, TokenMap};
use crate::seed::SeedToken;

/// The full default derivation: seed spread, preset ramps, semantic and
/// neutral colors, font/size/height scales, motion and radius.
pub fn default_derivative() -> Derivative {
    Derivative::new("default", run_default)
}

/// Dark-scheme colors layered over an already-derived map.
pub fn dark_derivative() -> Derivative {
    Derivative::new("dark", run_dark)
}

/// Compact sizing layered over an already-derived map.
pub fn compact_derivative() -> Derivative {
    Derivative::new("compact", run_compact)
}

fn run_default(seed: &SeedToken, _acc: &TokenMap) -> Result<TokenMap, ThemeError> {
    let mut map = seed.to_token_map();
    map.merge(colors::palette_tokens(seed, Scheme::Default)?);
    map.merge(colors::color_map_token(seed, Scheme::Default)?);
    map.merge(font::font_map_token(seed.font_size)?);
    map.merge(size::size_map_token(seed)?);
    map.merge(height::control_height_map_token(seed.control_height)?);
    map.merge(common::common_map_token(seed)?);
    Ok(map)
}

fn run_dark(seed: &SeedToken, _acc: &TokenMap) -> Result<TokenMap, ThemeError> {
    let mut map = colors::palette_tokens(seed, Scheme::Dark)?;
    map.merge(colors::color_map_token(seed, Scheme::Dark)?);
    Ok(map)
}

fn run_compact(seed: &SeedToken, acc: &TokenMap) -> Result<TokenMap, ThemeError> {
    // Reads the default-derived scale, so it must come after `default`.
    let font_size_sm = acc.num("fontSizeSM")?;
    let control_height = acc.num("controlHeight")? - 4.0;

    let mut map = size::compact_size_map_token(seed)?;
    map.merge(font::font_map_token(font_size_sm)?);
    map.insert("controlHeight", control_height);
    map.merge(height::control_height_map_token(control_height)?);
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::build_map_token;

    #[test]
    fn default_covers_every_token_family() {
        let map = build_map_token(&SeedToken::default(), &[default_derivative()]).unwrap();
        for key in [
            "colorPrimary",
            "blue6",
            "colorText",
            "fontSizeHeading1",
            "sizeLG",
            "controlHeightLG",
            "motionDurationMid",
            "borderRadiusLG",
        ] {
            assert!(map.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn dark_overrides_colors_but_not_sizes() {
        let seed = SeedToken::default();
        let light = build_map_token(&seed, &[default_derivative()]).unwrap();
        let dark = build_map_token(&seed, &[default_derivative(), dark_derivative()]).unwrap();
        assert_ne!(light.str_("colorText").unwrap(), dark.str_("colorText").unwrap());
        assert_eq!(light.num("sizeLG").unwrap(), dark.num("sizeLG").unwrap());
    }

    #[test]
    fn compact_shrinks_controls_and_fonts() {
        let seed = SeedToken::default();
        let map = build_map_token(&seed, &[default_derivative(), compact_derivative()]).unwrap();
        assert_eq!(map.num("controlHeight").unwrap(), 28.0);
        assert_eq!(map.num("controlHeightSM").unwrap(), 21.0);
        assert_eq!(map.num("fontSize").unwrap(), 12.0);
    }

    #[test]
    fn compact_without_default_fails_fast() {
        let err =
            build_map_token(&SeedToken::default(), &[compact_derivative()]).unwrap_err();
        match err {
            ThemeError::Derivative { name, .. } => assert_eq!(name, "compact"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
