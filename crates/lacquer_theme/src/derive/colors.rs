//! Color derivation: preset ramps, semantic ramps, neutral palette
//!
//! The semantic ramps (primary/success/warning/error/info) all index the
//! same way into their ten-step palette: Bg=1, BgHover=2, Border=3,
//! BorderHover=4, Hover=5, base=6, Active=7, with the Text trio reusing
//! 5/6/7 (1-indexed). Neutral colors come from the text/background bases
//! via alpha blending (text, fills) and solid lightness shifts (surfaces,
//! borders).

use crate::color::Color;
use crate::error::ThemeError;
use crate::map::TokenMap;
use crate::palette;
use crate::seed::{SeedToken, PRESET_COLOR_KEYS};

/// Background the dark ramps blend into.
const DARK_RAMP_BACKGROUND: &str = "#141414";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Scheme {
    Default,
    Dark,
}

fn parse(value: &str) -> Result<Color, ThemeError> {
    Color::from_hex_str(value)
}

fn ramp(base: &str, scheme: Scheme) -> Result<Vec<Color>, ThemeError> {
    let base = parse(base)?;
    Ok(match scheme {
        Scheme::Default => palette::generate(base),
        Scheme::Dark => palette::generate_dark(base, parse(DARK_RAMP_BACKGROUND)?),
    })
}

/// `{key}1`..`{key}10` for every preset color.
pub(crate) fn palette_tokens(seed: &SeedToken, scheme: Scheme) -> Result<TokenMap, ThemeError> {
    let mut map = TokenMap::new();
    for key in PRESET_COLOR_KEYS {
        let base = seed.preset_color(key).unwrap_or_default();
        for (i, color) in ramp(base, scheme)?.iter().enumerate() {
            map.insert(format!("{key}{}", i + 1), color.to_hex_string());
        }
    }
    Ok(map)
}

/// Insert one semantic ramp, e.g. `colorPrimaryBg` .. `colorPrimaryTextActive`.
fn semantic_ramp(map: &mut TokenMap, name: &str, colors: &[Color]) {
    let hex = |index_1: usize| colors[index_1 - 1].to_hex_string();
    map.insert(format!("color{name}Bg"), hex(1));
    map.insert(format!("color{name}BgHover"), hex(2));
    map.insert(format!("color{name}Border"), hex(3));
    map.insert(format!("color{name}BorderHover"), hex(4));
    map.insert(format!("color{name}Hover"), hex(5));
    map.insert(format!("color{name}"), hex(6));
    map.insert(format!("color{name}Active"), hex(7));
    map.insert(format!("color{name}TextHover"), hex(5));
    map.insert(format!("color{name}Text"), hex(6));
    map.insert(format!("color{name}TextActive"), hex(7));
}

fn alpha(base: Color, a: f64) -> String {
    base.with_alpha(a).to_rgb_string()
}

/// Neutral palette for the default (light) scheme. Solids darken away
/// from the background base; fills and text are alphas of the text base.
fn neutral_tokens_default(seed: &SeedToken) -> Result<TokenMap, ThemeError> {
    let bg_base = if seed.color_bg_base.is_empty() { "#fff" } else { &seed.color_bg_base };
    let text_base = if seed.color_text_base.is_empty() { "#000" } else { &seed.color_text_base };
    let bg = parse(bg_base)?;
    let text = parse(text_base)?;
    let solid = |delta: f64| bg.darken(delta).to_hex_string();

    let mut map = TokenMap::new();
    map.insert("colorBgBase", bg_base);
    map.insert("colorTextBase", text_base);
    map.insert("colorText", alpha(text, 0.88));
    map.insert("colorTextSecondary", alpha(text, 0.65));
    map.insert("colorTextTertiary", alpha(text, 0.45));
    map.insert("colorTextQuaternary", alpha(text, 0.25));
    map.insert("colorFill", alpha(text, 0.15));
    map.insert("colorFillSecondary", alpha(text, 0.06));
    map.insert("colorFillTertiary", alpha(text, 0.04));
    map.insert("colorFillQuaternary", alpha(text, 0.02));
    map.insert("colorBgLayout", solid(4.0));
    map.insert("colorBgContainer", solid(0.0));
    map.insert("colorBgElevated", solid(0.0));
    map.insert("colorBgSpotlight", alpha(text, 0.85));
    map.insert("colorBgBlur", "transparent");
    map.insert("colorBorder", solid(15.0));
    map.insert("colorBorderSecondary", solid(6.0));
    Ok(map)
}

/// Neutral palette for the dark scheme; solids lighten instead.
fn neutral_tokens_dark(seed: &SeedToken) -> Result<TokenMap, ThemeError> {
    let bg_base = if seed.color_bg_base.is_empty() { "#000" } else { &seed.color_bg_base };
    let text_base = if seed.color_text_base.is_empty() { "#fff" } else { &seed.color_text_base };
    let bg = parse(bg_base)?;
    let text = parse(text_base)?;
    let solid = |delta: f64| bg.lighten(delta).to_hex_string();

    let mut map = TokenMap::new();
    map.insert("colorBgBase", bg_base);
    map.insert("colorTextBase", text_base);
    map.insert("colorText", alpha(text, 0.85));
    map.insert("colorTextSecondary", alpha(text, 0.65));
    map.insert("colorTextTertiary", alpha(text, 0.45));
    map.insert("colorTextQuaternary", alpha(text, 0.25));
    map.insert("colorFill", alpha(text, 0.18));
    map.insert("colorFillSecondary", alpha(text, 0.12));
    map.insert("colorFillTertiary", alpha(text, 0.08));
    map.insert("colorFillQuaternary", alpha(text, 0.04));
    map.insert("colorBgElevated", solid(12.0));
    map.insert("colorBgContainer", solid(8.0));
    map.insert("colorBgLayout", solid(0.0));
    map.insert("colorBgSpotlight", solid(26.0));
    map.insert("colorBgBlur", alpha(text, 0.04));
    map.insert("colorBorder", solid(26.0));
    map.insert("colorBorderSecondary", solid(19.0));
    Ok(map)
}

/// Semantic + neutral color map for one scheme.
pub(crate) fn color_map_token(seed: &SeedToken, scheme: Scheme) -> Result<TokenMap, ThemeError> {
    let mut map = match scheme {
        Scheme::Default => neutral_tokens_default(seed)?,
        Scheme::Dark => neutral_tokens_dark(seed)?,
    };
    semantic_ramp(&mut map, "Primary", &ramp(&seed.color_primary, scheme)?);
    semantic_ramp(&mut map, "Success", &ramp(&seed.color_success, scheme)?);
    semantic_ramp(&mut map, "Warning", &ramp(&seed.color_warning, scheme)?);
    semantic_ramp(&mut map, "Error", &ramp(&seed.color_error, scheme)?);
    semantic_ramp(&mut map, "Info", &ramp(&seed.color_info, scheme)?);
    map.insert("colorBgMask", alpha(Color::BLACK, 0.45));
    map.insert("colorWhite", "#fff");
    Ok(map)
}
