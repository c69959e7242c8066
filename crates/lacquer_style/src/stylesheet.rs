//! Root stylesheet rendering
//!
//! Runs the whole pipeline for one theme variant and emits the `:root`
//! custom-property block that backs every `var(...)` reference the
//! component styles use. Writing the result to disk (and the
//! don't-overwrite-existing-files policy) belongs to the build script
//! calling this, not to the engine.

use lacquer_theme::{build_map_token, format_token, SeedToken, ThemeVariant, TokenValue};

use crate::cssvar::gen_css_var;
use crate::error::StyleError;
use crate::parse::{parse_style_to_less, ParseConfig};
use crate::tree::{StyleInterpolation, StyleTree};

/// Numeric variables get a `px` suffix at emission, except the z-index
/// family, which must stay unitless to be usable in `z-index:`.
fn emit_value(name: &str, prefix: &str, value: &TokenValue) -> String {
    match value {
        TokenValue::Num(n) => {
            let unprefixed = name
                .strip_prefix("--")
                .and_then(|rest| rest.strip_prefix(prefix))
                .and_then(|rest| rest.strip_prefix('-'))
                .unwrap_or(name);
            if unprefixed.starts_with("z-index") {
                value.render()
            } else {
                format!("{n}px")
            }
        }
        other => other.render(),
    }
}

/// Render the `:root { --… }` stylesheet for `variant`.
///
/// Dark and compact variants drop tokens whose resolved value is null
/// before emission. The associated output file name is
/// [`ThemeVariant::stylesheet_name`].
pub fn render_root_stylesheet(
    seed: &SeedToken,
    variant: ThemeVariant,
    prefix: &str,
) -> Result<String, StyleError> {
    let map_token = build_map_token(seed, &variant.derivatives())?;
    let mut full_token = format_token(&map_token)?;
    full_token.insert("prefixCls", prefix);

    let output = gen_css_var(&full_token, Some(prefix), None);

    let mut declarations = StyleTree::new();
    for (name, value) in &output.css_vars {
        if variant.strips_null() && value.is_null() {
            continue;
        }
        declarations.set(name.clone(), emit_value(name, prefix, value));
    }

    let root = StyleTree::new().with(":root", declarations);
    Ok(parse_style_to_less(
        &StyleInterpolation::Tree(root),
        &ParseConfig::default(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sheet_carries_the_primary_color() {
        let code = render_root_stylesheet(&SeedToken::default(), ThemeVariant::Default, "ant")
            .unwrap();
        assert!(code.starts_with(":root{"));
        assert!(code.contains("--ant-color-primary:#1677ff;"));
        assert!(code.contains("--ant-font-size:14px;"));
        assert!(code.contains("--ant-z-index-popup-base:1000;"));
    }

    #[test]
    fn dark_sheet_differs_from_default() {
        let seed = SeedToken::default();
        let default_code =
            render_root_stylesheet(&seed, ThemeVariant::Default, "ant").unwrap();
        let dark_code = render_root_stylesheet(&seed, ThemeVariant::Dark, "ant").unwrap();
        assert_ne!(default_code, dark_code);
        assert!(dark_code.contains("--ant-color-bg-container:#141414;"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let seed = SeedToken::default();
        let first = render_root_stylesheet(&seed, ThemeVariant::Compact, "ant").unwrap();
        let second = render_root_stylesheet(&seed, ThemeVariant::Compact, "ant").unwrap();
        assert_eq!(first, second);
    }
}
