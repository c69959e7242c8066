//! Alias/format layer
//!
//! [`format_token`] turns a raw map token into the full, component-facing
//! token set: it keeps every derived value and appends the public aliases
//! (content fills, placeholder/disabled text, control paddings, margin and
//! padding ladders, shadows, screen breakpoints). Values that must stay
//! translucent over the container background go through the de-alpha
//! search in [`de_alpha_color`].

use crate::color::Color;
use crate::error::ThemeError;
use crate::map::TokenMap;

/// Find the transparent color that composites over `background` to the
/// same solid as `front`. Walks alpha from 1% to 100% and returns the
/// first alpha whose back-computed channels are all in range; falls back
/// to the opaque input when no alpha works.
pub fn de_alpha_color(front: &str, background: &str) -> Result<String, ThemeError> {
    let f = Color::from_css_str(front)?;
    if f.a < 1.0 {
        return Ok(front.to_string());
    }
    let b = Color::from_css_str(background)?;
    for i in 1..=100u32 {
        let fa = f64::from(i) / 100.0;
        let solve =
            |fc: u8, bc: u8| ((f64::from(fc) - f64::from(bc) * (1.0 - fa)) / fa).round();
        let (r, g, bl) = (solve(f.r, b.r), solve(f.g, b.g), solve(f.b, b.b));
        let stable = |c: f64| (0.0..=255.0).contains(&c);
        if stable(r) && stable(g) && stable(bl) {
            let alpha = (fa * 100.0).round() / 100.0;
            return Ok(Color::rgba(r as u8, g as u8, bl as u8, alpha).to_rgb_string());
        }
    }
    Ok(Color::rgba(f.r, f.g, f.b, 1.0).to_rgb_string())
}

/// Expand a map token into the full alias token set.
pub fn format_token(map_token: &TokenMap) -> Result<TokenMap, ThemeError> {
    let mut token = map_token.clone();
    let str_of = |key: &str| map_token.str_(key).map(str::to_string);
    let num_of = |key: &str| map_token.num(key);

    let color_bg_container = str_of("colorBgContainer")?;
    let line_width = num_of("lineWidth")?;
    let control_height = num_of("controlHeight")?;

    // Background
    token.insert("colorFillContent", str_of("colorFillSecondary")?);
    token.insert("colorFillContentHover", str_of("colorFill")?);
    token.insert("colorFillAlter", str_of("colorFillQuaternary")?);
    token.insert("colorBgContainerDisabled", str_of("colorFillTertiary")?);

    // Split
    token.insert("colorBorderBg", color_bg_container.clone());
    token.insert(
        "colorSplit",
        de_alpha_color(&str_of("colorBorderSecondary")?, &color_bg_container)?,
    );

    // Text
    token.insert("colorTextPlaceholder", str_of("colorTextQuaternary")?);
    token.insert("colorTextDisabled", str_of("colorTextQuaternary")?);
    token.insert("colorTextHeading", str_of("colorText")?);
    token.insert("colorTextLabel", str_of("colorTextSecondary")?);
    token.insert("colorTextDescription", str_of("colorTextTertiary")?);
    token.insert("colorTextLightSolid", str_of("colorWhite")?);
    token.insert("colorHighlight", str_of("colorError")?);
    token.insert("colorBgTextHover", str_of("colorFillSecondary")?);
    token.insert("colorBgTextActive", str_of("colorFill")?);
    token.insert("colorIcon", str_of("colorTextTertiary")?);
    token.insert("colorIconHover", str_of("colorText")?);
    token.insert(
        "colorErrorOutline",
        de_alpha_color(&str_of("colorErrorBg")?, &color_bg_container)?,
    );
    token.insert(
        "colorWarningOutline",
        de_alpha_color(&str_of("colorWarningBg")?, &color_bg_container)?,
    );

    // Font
    token.insert("fontSizeIcon", num_of("fontSizeSM")?);
    token.insert("fontWeightStrong", 600.0);

    // Line & outline
    token.insert("lineWidthFocus", line_width * 3.0);
    token.insert("controlOutlineWidth", line_width * 2.0);
    token.insert(
        "controlOutline",
        de_alpha_color(&str_of("colorPrimaryBg")?, &color_bg_container)?,
    );
    token.insert("controlTmpOutline", str_of("colorFillQuaternary")?);

    // Control
    token.insert("controlInteractiveSize", control_height / 2.0);
    token.insert("controlItemBgHover", str_of("colorFillTertiary")?);
    token.insert("controlItemBgActive", str_of("colorPrimaryBg")?);
    token.insert("controlItemBgActiveHover", str_of("colorPrimaryBgHover")?);
    token.insert("controlItemBgActiveDisabled", str_of("colorFill")?);
    token.insert("controlPaddingHorizontal", 12.0);
    token.insert("controlPaddingHorizontalSM", 8.0);

    // Links
    token.insert("linkDecoration", "none");
    token.insert("linkHoverDecoration", "none");
    token.insert("linkFocusDecoration", "none");

    token.insert("opacityLoading", 0.65);

    // Padding ladder
    token.insert("paddingXXS", num_of("sizeXXS")?);
    token.insert("paddingXS", num_of("sizeXS")?);
    token.insert("paddingSM", num_of("sizeSM")?);
    token.insert("padding", num_of("size")?);
    token.insert("paddingMD", num_of("sizeMD")?);
    token.insert("paddingLG", num_of("sizeLG")?);
    token.insert("paddingXL", num_of("sizeXL")?);
    token.insert("paddingContentHorizontalLG", num_of("sizeLG")?);
    token.insert("paddingContentVerticalLG", num_of("sizeMS")?);
    token.insert("paddingContentHorizontal", num_of("sizeMS")?);
    token.insert("paddingContentVertical", num_of("sizeSM")?);
    token.insert("paddingContentHorizontalSM", num_of("size")?);
    token.insert("paddingContentVerticalSM", num_of("sizeXS")?);

    // Margin ladder
    token.insert("marginXXS", num_of("sizeXXS")?);
    token.insert("marginXS", num_of("sizeXS")?);
    token.insert("marginSM", num_of("sizeSM")?);
    token.insert("margin", num_of("size")?);
    token.insert("marginMD", num_of("sizeMD")?);
    token.insert("marginLG", num_of("sizeLG")?);
    token.insert("marginXL", num_of("sizeXL")?);
    token.insert("marginXXL", num_of("sizeXXL")?);

    // Shadows
    token.insert(
        "boxShadow",
        "0 6px 16px 0 rgba(0, 0, 0, 0.08), 0 3px 6px -4px rgba(0, 0, 0, 0.12), 0 9px 28px 8px rgba(0, 0, 0, 0.05)",
    );
    token.insert(
        "boxShadowSecondary",
        "0 6px 16px 0 rgba(0, 0, 0, 0.08), 0 3px 6px -4px rgba(0, 0, 0, 0.12), 0 9px 28px 8px rgba(0, 0, 0, 0.05)",
    );
    token.insert(
        "boxShadowTertiary",
        "0 1px 2px 0 rgba(0, 0, 0, 0.03), 0 1px 6px -1px rgba(0, 0, 0, 0.02), 0 2px 4px 0 rgba(0, 0, 0, 0.02)",
    );

    // Screen breakpoints
    let (xs, sm, md, lg, xl, xxl) = (480.0, 576.0, 768.0, 992.0, 1200.0, 1600.0);
    token.insert("screenXS", xs);
    token.insert("screenXSMin", xs);
    token.insert("screenXSMax", sm - 1.0);
    token.insert("screenSM", sm);
    token.insert("screenSMMin", sm);
    token.insert("screenSMMax", md - 1.0);
    token.insert("screenMD", md);
    token.insert("screenMDMin", md);
    token.insert("screenMDMax", lg - 1.0);
    token.insert("screenLG", lg);
    token.insert("screenLGMin", lg);
    token.insert("screenLGMax", xl - 1.0);
    token.insert("screenXL", xl);
    token.insert("screenXLMin", xl);
    token.insert("screenXLMax", xxl - 1.0);
    token.insert("screenXXL", xxl);
    token.insert("screenXXLMin", xxl);

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::default_derivative;
    use crate::map::build_map_token;
    use crate::seed::SeedToken;

    fn full_token() -> TokenMap {
        let map = build_map_token(&SeedToken::default(), &[default_derivative()]).unwrap();
        format_token(&map).unwrap()
    }

    #[test]
    fn aliases_point_at_their_sources() {
        let token = full_token();
        assert_eq!(
            token.str_("colorTextDisabled").unwrap(),
            token.str_("colorTextQuaternary").unwrap()
        );
        assert_eq!(token.num("padding").unwrap(), token.num("size").unwrap());
        assert_eq!(token.num("marginXXL").unwrap(), 48.0);
        assert_eq!(token.num("controlInteractiveSize").unwrap(), 16.0);
    }

    #[test]
    fn derived_values_survive_formatting() {
        let token = full_token();
        assert_eq!(token.str_("colorPrimary").unwrap(), "#1677ff");
        assert_eq!(token.num("fontSize").unwrap(), 14.0);
    }

    #[test]
    fn de_alpha_composites_back_to_the_front_color() {
        // colorBorderSecondary (#f0f0f0) over white
        let split = de_alpha_color("#f0f0f0", "#ffffff").unwrap();
        let transparent = Color::from_css_str(&split).unwrap();
        // composite transparent over white and compare channels
        let composite =
            |fc: u8, bc: u8| (f64::from(fc) * transparent.a + f64::from(bc) * (1.0 - transparent.a)).round() as u8;
        assert_eq!(composite(transparent.r, 255), 0xf0);
        assert_eq!(composite(transparent.g, 255), 0xf0);
        assert_eq!(composite(transparent.b, 255), 0xf0);
    }

    #[test]
    fn de_alpha_passes_translucent_input_through() {
        assert_eq!(
            de_alpha_color("rgba(0, 0, 0, 0.5)", "#fff").unwrap(),
            "rgba(0, 0, 0, 0.5)"
        );
    }

    #[test]
    fn screen_ladder_is_contiguous() {
        let token = full_token();
        assert_eq!(token.num("screenXSMax").unwrap() + 1.0, token.num("screenSMMin").unwrap());
        assert_eq!(token.num("screenXLMax").unwrap() + 1.0, token.num("screenXXLMin").unwrap());
    }
}
