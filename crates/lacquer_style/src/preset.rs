//! Preset-color style expansion
//!
//! Components that render one variant per preset color (tags, badges,
//! alerts) build their rules from the same four ramp slots: the light
//! background (1), the light border (3), the solid color (6) and the
//! readable text color (7). [`gen_preset_color`] walks every preset key
//! and merges the per-color rules into one tree.

use lacquer_theme::{ThemeError, TokenMap, PRESET_COLOR_KEYS};

use crate::error::StyleError;
use crate::tree::StyleTree;

/// The four ramp samples handed to the per-color rule builder.
#[derive(Clone, Debug)]
pub struct PresetColorSlots {
    /// Ramp slot 1.
    pub light_color: String,
    /// Ramp slot 3.
    pub light_border_color: String,
    /// Ramp slot 6.
    pub dark_color: String,
    /// Ramp slot 7.
    pub text_color: String,
}

/// Build one merged tree from a per-preset-color rule function.
///
/// `token` must carry the `{key}1..{key}10` ramp entries (or their
/// `var(...)` references); missing entries fail fast with the offending
/// key named.
pub fn gen_preset_color<F>(token: &TokenMap, mut gen_css: F) -> Result<StyleTree, StyleError>
where
    F: FnMut(&str, &PresetColorSlots) -> Result<StyleTree, StyleError>,
{
    let slot = |key: &str, index: u32| -> Result<String, ThemeError> {
        Ok(token.str_(&format!("{key}{index}"))?.to_string())
    };
    let mut merged = StyleTree::new();
    for key in PRESET_COLOR_KEYS {
        let slots = PresetColorSlots {
            light_color: slot(key, 1)?,
            light_border_color: slot(key, 3)?,
            dark_color: slot(key, 6)?,
            text_color: slot(key, 7)?,
        };
        for (selector, value) in gen_css(key, &slots)?.iter() {
            merged.set(selector.clone(), value.clone());
        }
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lacquer_theme::{build_map_token, SeedToken, ThemeVariant};

    #[test]
    fn expands_one_rule_per_preset_color() {
        let token =
            build_map_token(&SeedToken::default(), &ThemeVariant::Default.derivatives()).unwrap();
        let tree = gen_preset_color(&token, |key, slots| {
            Ok(StyleTree::new().with(
                format!("&-{key}"),
                StyleTree::new()
                    .with("color", slots.text_color.as_str())
                    .with("background", slots.light_color.as_str())
                    .with("borderColor", slots.light_border_color.as_str()),
            ))
        })
        .unwrap();
        assert_eq!(tree.len(), PRESET_COLOR_KEYS.len());
        assert!(tree.get("&-blue").is_some());
        assert!(tree.get("&-gold").is_some());
    }

    #[test]
    fn missing_ramp_entries_fail_fast() {
        let token = lacquer_theme::tokens! { "blue1" => "#e6f4ff" };
        let err = gen_preset_color(&token, |_key, _slots| Ok(StyleTree::new())).unwrap_err();
        assert!(matches!(err, StyleError::Token(_)));
    }
}
