//! Per-component style hooks
//!
//! A [`StyleHook`] binds a component name to its style function and an
//! optional component-token function. [`StyleHook::generate`] assembles
//! the token the style function sees (global css-var token merged with
//! the component-local one, component-local winning), injects the
//! component's own custom-property declarations under its class, and
//! serializes the result. Identical inputs produce byte-identical output,
//! so callers can cache on the token they pass in.

use indexmap::IndexMap;

use lacquer_theme::{TokenMap, TokenValue};

use crate::case::{camel_case, kebab_case};
use crate::cssvar::{gen_css_var, CssVarOutput};
use crate::error::StyleError;
use crate::parse::{parse_style_to_less, ParseConfig};
use crate::tree::{StyleInterpolation, StyleTree, StyleValue};

/// Produces the component's style tree from the assembled token.
pub type StyleFn = Box<dyn Fn(&TokenMap) -> Result<StyleInterpolation, StyleError>>;

/// Derives the component-specific token slice from the global token.
pub type ComponentTokenFn = Box<dyn Fn(&TokenMap) -> Result<TokenMap, StyleError>>;

/// Everything one `generate` call produces for a component.
#[derive(Clone, Debug)]
pub struct GeneratedStyle {
    /// The component's own custom properties (name → raw value).
    pub css_vars: IndexMap<String, TokenValue>,
    /// The style tree after css-var injection.
    pub styles: StyleInterpolation,
    /// Serialized CSS/LESS text.
    pub code: String,
}

/// A per-component style generator.
pub struct StyleHook {
    component: String,
    style_fn: StyleFn,
    token_fn: Option<ComponentTokenFn>,
    config: ParseConfig,
}

impl StyleHook {
    /// `component` is the PascalCase component name; it becomes both the
    /// kebab-case class suffix and the camelCase token-lookup key.
    pub fn new<F>(component: impl Into<String>, style_fn: F) -> Self
    where
        F: Fn(&TokenMap) -> Result<StyleInterpolation, StyleError> + 'static,
    {
        Self {
            component: component.into(),
            style_fn: Box::new(style_fn),
            token_fn: None,
            config: ParseConfig::default(),
        }
    }

    /// Join multi-part component names, e.g. `["Dropdown", "Button"]`.
    pub fn from_parts<F>(parts: &[&str], style_fn: F) -> Self
    where
        F: Fn(&TokenMap) -> Result<StyleInterpolation, StyleError> + 'static,
    {
        Self::new(parts.concat(), style_fn)
    }

    pub fn with_token_fn<F>(mut self, token_fn: F) -> Self
    where
        F: Fn(&TokenMap) -> Result<TokenMap, StyleError> + 'static,
    {
        self.token_fn = Some(Box::new(token_fn));
        self
    }

    pub fn with_config(mut self, config: ParseConfig) -> Self {
        self.config = config;
        self
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    /// Generate this component's css vars, style tree and serialized code.
    ///
    /// `default_token` is the full (alias-formatted) token map;
    /// `css_var_token` is the global css token whose values are already
    /// `var(...)` references.
    pub fn generate(
        &self,
        default_token: &TokenMap,
        css_var_token: &TokenMap,
    ) -> Result<GeneratedStyle, StyleError> {
        let component_token = match &self.token_fn {
            Some(token_fn) => token_fn(default_token).map_err(|source| StyleError::TokenFn {
                component: self.component.clone(),
                source: Box::new(source),
            })?,
            None => default_token.clone(),
        };

        let prefix_cls = default_token.str_or("prefixCls", "ant").to_string();
        let component_base_cls = kebab_case(&self.component);
        let component_cls = format!("{prefix_cls}-{component_base_cls}");
        let key_token = camel_case(&self.component);

        let component_css_var =
            gen_css_var(&component_token, Some(&component_cls), Some(&key_token));

        let mut token = TokenMap::new();
        token.insert("componentCls", format!(".{component_cls}"));
        token.insert("componentBaseCls", component_base_cls);
        token.insert("antCls", format!(".{prefix_cls}"));
        token.insert("rootPrefixCls", prefix_cls);
        token.insert("iconCls", ".anticon");
        token.merge(css_var_token.clone());
        // the component-local css token wins on key collisions
        token.merge(component_css_var.css_token.clone());

        let styles = (self.style_fn)(&token).map_err(|source| StyleError::StyleFn {
            component: self.component.clone(),
            source: Box::new(source),
        })?;

        let styles = inject_component_vars(styles, &component_css_var, &component_cls);
        let code = parse_style_to_less(&styles, &self.config);

        tracing::debug!(
            component = self.component.as_str(),
            vars = component_css_var.css_vars.len(),
            bytes = code.len(),
            "component style generated"
        );

        Ok(GeneratedStyle {
            css_vars: component_css_var.css_vars,
            styles,
            code,
        })
    }
}

impl std::fmt::Debug for StyleHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleHook")
            .field("component", &self.component)
            .field("has_token_fn", &self.token_fn.is_some())
            .finish()
    }
}

fn var_declarations(output: &CssVarOutput) -> StyleTree {
    output
        .css_vars
        .iter()
        .map(|(name, value)| (name.clone(), StyleValue::Value(value.clone())))
        .collect()
}

/// Merge the component's `--x: value;` declarations under its class
/// selector. Declarations the style function already made there win over
/// the injected ones.
fn inject_component_vars(
    styles: StyleInterpolation,
    output: &CssVarOutput,
    component_cls: &str,
) -> StyleInterpolation {
    let selector = format!(".{component_cls}");
    let declarations = var_declarations(output);
    match styles {
        StyleInterpolation::List(mut items) => {
            let block = StyleTree::new().with(selector, declarations);
            items.insert(0, StyleInterpolation::Tree(block));
            StyleInterpolation::List(items)
        }
        StyleInterpolation::Tree(mut tree) => {
            match tree.get(&selector).cloned() {
                Some(StyleValue::Nested(existing)) => {
                    let mut merged = declarations;
                    for (key, value) in existing.iter() {
                        merged.set(key.clone(), value.clone());
                    }
                    tree.set(selector, merged);
                }
                Some(_) => {}
                None => tree.set(selector, declarations),
            }
            StyleInterpolation::Tree(tree)
        }
        other => {
            let block = StyleTree::new().with(selector, declarations);
            StyleInterpolation::List(vec![StyleInterpolation::Tree(block), other])
        }
    }
}
