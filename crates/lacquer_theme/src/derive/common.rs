//! Shared derivation: motion durations, line widths, border radii

use crate::error::ThemeError;
use crate::map::TokenMap;
use crate::seed::SeedToken;
use crate::tokens;

/// Radius ladder derived from the base radius. The breakpoints keep small
/// radii visually distinct and cap the large end.
fn radius_tokens(radius_base: f64) -> TokenMap {
    let mut radius_lg = radius_base;
    let mut radius_sm = radius_base;
    let mut radius_xs = radius_base;
    let mut radius_outer = radius_base;

    if radius_base < 6.0 && radius_base >= 5.0 {
        radius_lg = radius_base + 1.0;
    } else if radius_base < 16.0 && radius_base >= 6.0 {
        radius_lg = radius_base + 2.0;
    } else if radius_base >= 16.0 {
        radius_lg = 16.0;
    }

    if radius_base < 7.0 && radius_base >= 5.0 {
        radius_sm = 4.0;
    } else if radius_base < 8.0 && radius_base >= 7.0 {
        radius_sm = 5.0;
    } else if radius_base < 14.0 && radius_base >= 8.0 {
        radius_sm = 6.0;
    } else if radius_base < 16.0 && radius_base >= 14.0 {
        radius_sm = 7.0;
    } else if radius_base >= 16.0 {
        radius_sm = 8.0;
    }

    if radius_base < 6.0 && radius_base >= 5.0 {
        radius_xs = radius_base - 1.0;
    } else if radius_base < 8.0 && radius_base >= 6.0 {
        radius_xs = radius_base - 2.0;
    } else if radius_base >= 8.0 {
        radius_xs = 4.0;
    }

    if radius_base > 4.0 && radius_base < 8.0 {
        radius_outer = 4.0;
    } else if radius_base >= 8.0 {
        radius_outer = 6.0;
    }

    tokens! {
        "borderRadiusXS" => radius_xs,
        "borderRadiusSM" => radius_sm,
        "borderRadiusLG" => radius_lg,
        "borderRadiusOuter" => radius_outer,
    }
}

pub(crate) fn common_map_token(seed: &SeedToken) -> Result<TokenMap, ThemeError> {
    let duration = |n: f64| format!("{:.1}s", seed.motion_base + seed.motion_unit * n);
    let mut map = tokens! {
        "motionDurationFast" => duration(1.0),
        "motionDurationMid" => duration(2.0),
        "motionDurationSlow" => duration(3.0),
        "lineWidthBold" => seed.line_width + 1.0,
    };
    map.merge(radius_tokens(seed.border_radius));
    Ok(map)
}
