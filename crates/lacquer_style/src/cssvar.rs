//! CSS custom-property generation
//!
//! [`token_to_css_var`] maps a camelCase token key to its canonical
//! custom-property name. [`gen_css_var`] walks a full token map and
//! splits it three ways: the variable set (name → raw value), the css
//! token (key → `var(...)` reference), and a map token where only string
//! values are replaced by references — numeric tokens stay raw so calc
//! helpers keep working on them at generation time.

use indexmap::IndexMap;

use lacquer_theme::{TokenMap, TokenValue};

use crate::case::kebab_case;

/// Structural keys that are never variable-ized. Keys ending in `Cls`
/// (componentCls, antCls, iconCls, …) are skipped by suffix in
/// [`is_skip_key`]; these are the remaining structural/function fields.
pub const SKIP_KEYS: &[&str] = &[
    "wireframe",
    "motion",
    "prefixCls",
    "calc",
    "unit",
    "max",
    "min",
];

/// Whether `key` is excluded from variable-ization.
pub fn is_skip_key(key: &str) -> bool {
    SKIP_KEYS.contains(&key) || key.ends_with("Cls")
}

/// Canonical custom-property name for a token key. Same key and prefix
/// always produce the same name; the name doubles as a dedup key.
pub fn token_to_css_var(token: &str, prefix: &str) -> String {
    let prefixed = if prefix.is_empty() {
        token.to_string()
    } else {
        format!("{prefix}-{token}")
    };
    format!("--{}", kebab_case(&prefixed))
}

/// Output of [`gen_css_var`].
#[derive(Clone, Debug, Default)]
pub struct CssVarOutput {
    /// Custom-property name → raw value.
    pub css_vars: IndexMap<String, TokenValue>,
    /// Token key → `var(--…)` reference (raw value for skip-listed keys).
    pub css_token: TokenMap,
    /// Token key → `var(--…)` for string values, raw value otherwise.
    pub map_token: TokenMap,
}

/// Variable-ize every eligible key of `token`.
///
/// `prefix` defaults to the map's own `prefixCls` (or `ant`). When
/// `component` is given, a leading occurrence of it is stripped from each
/// key before naming, shortening component-scoped tokens; if two keys
/// collapse onto one name, the last write wins.
pub fn gen_css_var(
    token: &TokenMap,
    prefix: Option<&str>,
    component: Option<&str>,
) -> CssVarOutput {
    let prefix = prefix.unwrap_or_else(|| token.str_or("prefixCls", "ant"));
    let mut out = CssVarOutput::default();
    for (key, value) in token.iter() {
        if is_skip_key(key) {
            out.css_token.insert(key.clone(), value.clone());
            out.map_token.insert(key.clone(), value.clone());
            continue;
        }
        let stripped = match component {
            Some(component) => key.strip_prefix(component).unwrap_or(key),
            None => key,
        };
        let var_name = token_to_css_var(stripped, prefix);
        let reference = format!("var({var_name})");
        out.css_vars.insert(var_name, value.clone());
        out.css_token.insert(key.clone(), reference.clone());
        match value {
            TokenValue::Str(_) => out.map_token.insert(key.clone(), reference),
            other => out.map_token.insert(key.clone(), other.clone()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lacquer_theme::tokens;

    #[test]
    fn converter_handles_every_boundary_kind() {
        assert_eq!(token_to_css_var("colorPrimary", "ant"), "--ant-color-primary");
        assert_eq!(token_to_css_var("sizeXXL", "ant"), "--ant-size-xxl");
        assert_eq!(token_to_css_var("fontSizeHeading1", "ant"), "--ant-font-size-heading-1");
        assert_eq!(token_to_css_var("colorPrimary", ""), "--color-primary");
    }

    #[test]
    fn converter_is_deterministic() {
        assert_eq!(
            token_to_css_var("zIndexPopupBase", "ant"),
            token_to_css_var("zIndexPopupBase", "ant")
        );
    }

    #[test]
    fn skip_list_membership() {
        for key in ["wireframe", "motion", "prefixCls", "componentCls", "antCls", "iconCls"] {
            assert!(is_skip_key(key), "{key} should be skipped");
        }
        for key in ["colorPrimary", "fontSize", "motionDurationMid"] {
            assert!(!is_skip_key(key), "{key} should not be skipped");
        }
    }

    #[test]
    fn splits_strings_and_numbers() {
        let token = tokens! {
            "prefixCls" => "ant",
            "colorPrimary" => "#1677ff",
            "fontSize" => 14.0,
        };
        let out = gen_css_var(&token, Some("ant"), None);

        // skip-listed key keeps its raw value everywhere
        assert_eq!(out.css_token.str_("prefixCls").unwrap(), "ant");
        assert!(out.css_vars.get("--ant-prefix-cls").is_none());

        assert_eq!(
            out.css_vars.get("--ant-color-primary").unwrap().as_str(),
            Some("#1677ff")
        );
        assert_eq!(
            out.css_token.str_("colorPrimary").unwrap(),
            "var(--ant-color-primary)"
        );
        // string values become references in the map token…
        assert_eq!(
            out.map_token.str_("colorPrimary").unwrap(),
            "var(--ant-color-primary)"
        );
        // …numeric values stay raw for calc arithmetic
        assert_eq!(out.map_token.num("fontSize").unwrap(), 14.0);
        assert_eq!(out.css_token.str_("fontSize").unwrap(), "var(--ant-font-size)");
    }

    #[test]
    fn generation_is_idempotent() {
        let token = tokens! { "colorPrimary" => "#1677ff", "fontSize" => 14.0 };
        let first = gen_css_var(&token, Some("ant"), None);
        let second = gen_css_var(&token, Some("ant"), None);
        assert_eq!(first.css_vars, second.css_vars);
        assert_eq!(first.css_token, second.css_token);
    }

    #[test]
    fn component_prefix_is_stripped_from_keys() {
        let token = tokens! { "buttonFontWeight" => 400.0, "colorPrimary" => "#1677ff" };
        let out = gen_css_var(&token, Some("ant-btn"), Some("button"));
        assert!(out.css_vars.contains_key("--ant-btn-font-weight"));
        assert!(out.css_vars.contains_key("--ant-btn-color-primary"));
        // the css token still uses the original key
        assert_eq!(
            out.css_token.str_("buttonFontWeight").unwrap(),
            "var(--ant-btn-font-weight)"
        );
    }

    #[test]
    fn stripping_collisions_are_last_write_wins() {
        let token = tokens! { "fontWeight" => 400.0, "buttonFontWeight" => 600.0 };
        let out = gen_css_var(&token, Some("ant-btn"), Some("button"));
        assert_eq!(
            out.css_vars.get("--ant-btn-font-weight").unwrap().as_num(),
            Some(600.0)
        );
        assert_eq!(out.css_vars.len(), 1);
    }
}
