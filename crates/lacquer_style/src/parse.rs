//! Style tree parser/compiler
//!
//! Recursive descent from a [`StyleInterpolation`] to CSS/LESS text.
//! Selector composition (`&` splicing, `@`-rule pass-through, hash
//! injection), unit coercion, keyframe de-duplication and `@layer`
//! wrapping all happen here. The side table of "effect" styles
//! (keyframes, layer dependency declarations) is scoped to one top-level
//! call and emitted ahead of the main text.
//!
//! Output is deterministic: trees iterate in insertion order, so the same
//! tree and config always serialize to byte-identical text.

use std::borrow::Cow;
use std::sync::OnceLock;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use lacquer_theme::TokenValue;

use crate::linter::{ContentQuotesLinter, HashedAnimationLinter, LintContext, Linter};
use crate::tree::{Keyframes, StyleInterpolation, StyleTree, StyleValue};

/// Where the scoping hash lands relative to the plain selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HashPriority {
    /// `{selector}.{hash}` — the default.
    #[default]
    Low,
    /// `.{hash} {selector}`.
    High,
}

/// `@layer` wrapping for the produced block.
#[derive(Clone, Debug)]
pub struct LayerConfig {
    pub name: String,
    /// Layers that must be declared ahead of this one; each produces an
    /// `@layer {dep}, {name};` declaration in the side table.
    pub dependencies: Vec<String>,
}

/// A node-level rewrite hook applied before a tree is serialized.
pub trait Transformer {
    /// Return `Some` to replace the node, `None` to leave it unchanged.
    fn visit(&self, tree: &StyleTree) -> Option<StyleTree>;
}

/// Per-invocation parser configuration.
#[derive(Default)]
pub struct ParseConfig {
    pub hash_id: Option<String>,
    pub layer: Option<LayerConfig>,
    pub path: Option<String>,
    pub hash_priority: HashPriority,
    pub transformers: Vec<Box<dyn Transformer>>,
    pub linters: Vec<Box<dyn Linter>>,
}

impl std::fmt::Debug for ParseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseConfig")
            .field("hash_id", &self.hash_id)
            .field("layer", &self.layer.as_ref().map(|l| &l.name))
            .field("path", &self.path)
            .field("hash_priority", &self.hash_priority)
            .field("transformers", &self.transformers.len())
            .field("linters", &self.linters.len())
            .finish()
    }
}

/// Recursion state; defaults describe the top-level call.
#[derive(Clone, Debug)]
pub struct ParseInfo {
    pub root: bool,
    pub inject_hash: bool,
    pub parent_selectors: Vec<String>,
}

impl Default for ParseInfo {
    fn default() -> Self {
        Self {
            root: true,
            inject_hash: false,
            parent_selectors: Vec::new(),
        }
    }
}

/// Properties whose numeric values never receive a `px` suffix.
pub const UNITLESS_PROPERTIES: &[&str] = &[
    "animationIterationCount",
    "aspectRatio",
    "borderImageOutset",
    "borderImageSlice",
    "borderImageWidth",
    "boxFlex",
    "boxFlexGroup",
    "boxOrdinalGroup",
    "columnCount",
    "columns",
    "flex",
    "flexGrow",
    "flexPositive",
    "flexShrink",
    "flexNegative",
    "flexOrder",
    "gridArea",
    "gridRow",
    "gridRowEnd",
    "gridRowSpan",
    "gridRowStart",
    "gridColumn",
    "gridColumnEnd",
    "gridColumnSpan",
    "gridColumnStart",
    "fontWeight",
    "lineClamp",
    "lineHeight",
    "opacity",
    "order",
    "orphans",
    "tabSize",
    "widows",
    "zIndex",
    "zoom",
    // SVG
    "fillOpacity",
    "floodOpacity",
    "stopOpacity",
    "strokeDasharray",
    "strokeDashoffset",
    "strokeMiterlimit",
    "strokeOpacity",
    "strokeWidth",
];

/// Membership test against [`UNITLESS_PROPERTIES`].
pub fn is_unitless(property: &str) -> bool {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| UNITLESS_PROPERTIES.iter().copied().collect())
        .contains(property)
}

/// Place the scoping hash relative to `key`. `@`-rules never receive a
/// hash directly; `&`-prefixed keys splice the hash into the `&` slot.
fn inject_selector_hash(key: &str, hash_id: &str, priority: HashPriority) -> String {
    if hash_id.is_empty() {
        return key.to_string();
    }
    let hash_selector = format!(".{hash_id}");
    if key.is_empty() || key == "&" {
        return hash_selector;
    }
    if let Some(rest) = key.strip_prefix('&') {
        return format!("{hash_selector}{rest}");
    }
    if key.starts_with('@') {
        return key.to_string();
    }
    match priority {
        HashPriority::High => format!("{hash_selector} {key}"),
        HashPriority::Low => format!("{key}{hash_selector}"),
    }
}

/// camelCase property name to kebab-case.
fn prop_kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

enum Item<'a> {
    Raw(&'a str),
    Tree(&'a StyleTree),
    Keyframes(&'a Keyframes),
}

/// Flatten nested lists into one ordered item sequence.
fn collect<'a>(interpolation: &'a StyleInterpolation, out: &mut Vec<Item<'a>>) {
    match interpolation {
        StyleInterpolation::List(items) => {
            for item in items {
                collect(item, out);
            }
        }
        StyleInterpolation::Raw(s) => out.push(Item::Raw(s)),
        StyleInterpolation::Tree(t) => out.push(Item::Tree(t)),
        StyleInterpolation::Keyframes(k) => out.push(Item::Keyframes(k)),
    }
}

fn active_hash(config: &ParseConfig) -> Option<&str> {
    config.hash_id.as_deref().filter(|h| !h.is_empty())
}

fn run_linters(key: &str, value: &TokenValue, config: &ParseConfig, info: &ParseInfo) {
    let ctx = LintContext {
        path: config.path.as_deref(),
        hash_id: config.hash_id.as_deref(),
        parent_selectors: &info.parent_selectors,
    };
    ContentQuotesLinter.lint(key, value, &ctx);
    HashedAnimationLinter.lint(key, value, &ctx);
    for linter in &config.linters {
        linter.lint(key, value, &ctx);
    }
}

fn append_style(
    out: &mut String,
    key: &str,
    value: &TokenValue,
    config: &ParseConfig,
    info: &ParseInfo,
) {
    run_linters(key, value, config, info);
    let mut formatted = value.render();
    if let TokenValue::Num(n) = value {
        if !is_unitless(key) && *n != 0.0 {
            formatted = format!("{n}px");
        }
    }
    out.push_str(&prop_kebab(key));
    out.push(':');
    out.push_str(&formatted);
    out.push(';');
}

/// Register a keyframes block once per resolved name. Nested effect
/// styles produced while serializing the body are discarded; only the
/// block itself enters the shared table.
fn register_keyframes(
    keyframes: &Keyframes,
    config: &ParseConfig,
    info: &ParseInfo,
    effects: &mut IndexMap<String, String>,
) {
    let name = keyframes.resolved_name(config.hash_id.as_deref());
    if effects.contains_key(&name) {
        return;
    }
    let mut scratch = IndexMap::new();
    let body = parse_items(
        &[Item::Tree(keyframes.style())],
        config,
        &ParseInfo {
            root: false,
            inject_hash: false,
            parent_selectors: info.parent_selectors.clone(),
        },
        &mut scratch,
    );
    effects.insert(name.clone(), format!("@keyframes {name}{body}"));
}

fn apply_transformers<'a>(tree: &'a StyleTree, config: &ParseConfig) -> Cow<'a, StyleTree> {
    let mut current = Cow::Borrowed(tree);
    for transformer in &config.transformers {
        if let Some(next) = transformer.visit(&current) {
            current = Cow::Owned(next);
        }
    }
    current
}

fn parse_items(
    items: &[Item<'_>],
    config: &ParseConfig,
    info: &ParseInfo,
    effects: &mut IndexMap<String, String>,
) -> String {
    let mut out = String::new();

    for item in items {
        match item {
            // a bare string is a raw escape hatch at the root only;
            // anywhere deeper it is ignored
            Item::Raw(raw) => {
                if info.root {
                    out.push_str(raw);
                    out.push('\n');
                }
            }
            Item::Keyframes(keyframes) => {
                register_keyframes(keyframes, config, info, effects);
            }
            Item::Tree(tree) => {
                let tree = apply_transformers(tree, config);
                for (key, value) in tree.iter() {
                    match value {
                        StyleValue::Nested(child) => {
                            let mut merged_key = key.trim().to_string();
                            let mut next_root = false;
                            let mut sub_inject_hash = false;

                            if let Some(hash) =
                                active_hash(config).filter(|_| info.root || info.inject_hash)
                            {
                                if merged_key.starts_with('@') {
                                    // the @-rule key cannot carry the hash;
                                    // children receive it instead
                                    sub_inject_hash = true;
                                } else {
                                    merged_key = inject_selector_hash(
                                        &merged_key,
                                        hash,
                                        config.hash_priority,
                                    );
                                }
                            } else if info.root
                                && active_hash(config).is_none()
                                && (merged_key == "&" || merged_key.is_empty())
                            {
                                // a lone `&` (or empty key) at an unhashed
                                // root would serialize as a literal `&`
                                // selector; hoist the children to the root
                                // instead
                                merged_key.clear();
                                next_root = true;
                            }

                            let mut parent_selectors = info.parent_selectors.clone();
                            parent_selectors.push(merged_key.clone());
                            let child_info = ParseInfo {
                                root: next_root,
                                inject_hash: sub_inject_hash,
                                parent_selectors,
                            };
                            let child_str =
                                parse_items(&[Item::Tree(child)], config, &child_info, effects);
                            out.push_str(&merged_key);
                            out.push_str(&child_str);
                        }
                        StyleValue::Value(value) => {
                            append_style(&mut out, key, value, config, info);
                        }
                        StyleValue::Multi(values) => {
                            for value in values {
                                append_style(&mut out, key, value, config, info);
                            }
                        }
                        StyleValue::Animation(keyframes) => {
                            register_keyframes(keyframes, config, info, effects);
                            out.push_str(&prop_kebab(key));
                            out.push(':');
                            out.push_str(
                                &keyframes.resolved_name(config.hash_id.as_deref()),
                            );
                            out.push(';');
                        }
                    }
                }
            }
        }
    }

    if !info.root {
        return format!("{{{out}}}");
    }
    if let Some(layer) = &config.layer {
        if !out.is_empty() {
            out = format!("@layer {} {{{out}}}", layer.name);
        }
        if !layer.dependencies.is_empty() {
            let declarations: Vec<String> = layer
                .dependencies
                .iter()
                .map(|dep| format!("@layer {dep}, {};", layer.name))
                .collect();
            effects.insert(format!("@layer {}", layer.name), declarations.join("\n"));
        }
    }
    out
}

/// Serialize a style interpolation.
///
/// Returns the main CSS text plus the side table of effect styles
/// (keyframe blocks first, then `@layer` dependency declarations), keyed
/// by resolved name so a keyframes block referenced from several scopes
/// is emitted exactly once.
pub fn parse_style_interpolation(
    interpolation: &StyleInterpolation,
    config: &ParseConfig,
    info: &ParseInfo,
) -> (String, IndexMap<String, String>) {
    let mut effects = IndexMap::new();
    let mut items = Vec::new();
    collect(interpolation, &mut items);
    let text = parse_items(&items, config, info, &mut effects);
    (text, effects)
}

/// Serialize to final text: side-table entries, then the main block.
pub fn parse_style_to_less(styles: &StyleInterpolation, config: &ParseConfig) -> String {
    let (style_str, effects) = parse_style_interpolation(styles, config, &ParseInfo::default());
    let effect_text: Vec<&str> = effects.values().map(String::as_str).collect();
    if effect_text.is_empty() {
        style_str
    } else {
        format!("{}\n{style_str}", effect_text.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(entries: Vec<(&str, StyleValue)>) -> StyleTree {
        entries.into_iter().collect()
    }

    #[test]
    fn simple_declarations_serialize_in_order() {
        let styles = StyleInterpolation::Tree(
            StyleTree::new().with(
                ".demo",
                StyleTree::new()
                    .with("position", "relative")
                    .with("fontSize", 14.0),
            ),
        );
        assert_eq!(
            parse_style_to_less(&styles, &ParseConfig::default()),
            ".demo{position:relative;font-size:14px;}"
        );
    }

    #[test]
    fn zero_and_unitless_numbers_skip_px() {
        let styles = StyleInterpolation::Tree(StyleTree::new().with(
            ".demo",
            StyleTree::new()
                .with("margin", 0.0)
                .with("zIndex", 1000.0)
                .with("lineHeight", 1.5)
                .with("width", 120.0),
        ));
        assert_eq!(
            parse_style_to_less(&styles, &ParseConfig::default()),
            ".demo{margin:0;z-index:1000;line-height:1.5;width:120px;}"
        );
    }

    #[test]
    fn raw_strings_only_emit_at_root() {
        let styles = StyleInterpolation::List(vec![
            StyleInterpolation::Raw(".legacy{color:red;}".into()),
            StyleInterpolation::Tree(
                StyleTree::new().with(".demo", StyleTree::new().with("color", "blue")),
            ),
        ]);
        assert_eq!(
            parse_style_to_less(&styles, &ParseConfig::default()),
            ".legacy{color:red;}\n.demo{color:blue;}"
        );
    }

    #[test]
    fn lone_ampersand_without_hash_hoists_children() {
        let styles = StyleInterpolation::Tree(StyleTree::new().with(
            "&",
            StyleTree::new().with(".demo", StyleTree::new().with("color", "red")),
        ));
        assert_eq!(
            parse_style_to_less(&styles, &ParseConfig::default()),
            ".demo{color:red;}"
        );
    }

    #[test]
    fn hash_priority_controls_placement() {
        let styles = StyleInterpolation::Tree(
            StyleTree::new().with(".child", StyleTree::new().with("color", "red")),
        );
        let low = ParseConfig {
            hash_id: Some("test-hash".into()),
            ..Default::default()
        };
        assert_eq!(
            parse_style_to_less(&styles, &low),
            ".child.test-hash{color:red;}"
        );
        let high = ParseConfig {
            hash_id: Some("test-hash".into()),
            hash_priority: HashPriority::High,
            ..Default::default()
        };
        assert_eq!(
            parse_style_to_less(&styles, &high),
            ".test-hash .child{color:red;}"
        );
    }

    #[test]
    fn ampersand_splices_the_hash_class() {
        let styles = StyleInterpolation::Tree(
            StyleTree::new().with("&:hover", StyleTree::new().with("color", "red")),
        );
        let config = ParseConfig {
            hash_id: Some("abc".into()),
            ..Default::default()
        };
        assert_eq!(parse_style_to_less(&styles, &config), ".abc:hover{color:red;}");
    }

    #[test]
    fn media_queries_pass_the_hash_to_children() {
        let styles = StyleInterpolation::Tree(StyleTree::new().with(
            "@media (max-width: 575px)",
            StyleTree::new().with(".child", StyleTree::new().with("color", "red")),
        ));
        let config = ParseConfig {
            hash_id: Some("abc".into()),
            ..Default::default()
        };
        assert_eq!(
            parse_style_to_less(&styles, &config),
            "@media (max-width: 575px){.child.abc{color:red;}}"
        );
    }

    #[test]
    fn multi_values_emit_one_declaration_each() {
        let styles = StyleInterpolation::Tree(StyleTree::new().with(
            ".demo",
            tree(vec![(
                "position",
                StyleValue::multi(["-webkit-sticky", "sticky"]),
            )]),
        ));
        assert_eq!(
            parse_style_to_less(&styles, &ParseConfig::default()),
            ".demo{position:-webkit-sticky;position:sticky;}"
        );
    }

    #[test]
    fn layer_wraps_and_declares_dependencies() {
        let styles = StyleInterpolation::Tree(
            StyleTree::new().with(".demo", StyleTree::new().with("color", "red")),
        );
        let config = ParseConfig {
            layer: Some(LayerConfig {
                name: "components".into(),
                dependencies: vec!["reset".into()],
            }),
            ..Default::default()
        };
        assert_eq!(
            parse_style_to_less(&styles, &config),
            "@layer reset, components;\n@layer components {.demo{color:red;}}"
        );
    }

    #[test]
    fn transformer_rewrites_nodes_before_serialization() {
        struct Uppercase;
        impl Transformer for Uppercase {
            fn visit(&self, tree: &StyleTree) -> Option<StyleTree> {
                let mut changed = false;
                let next: StyleTree = tree
                    .iter()
                    .map(|(k, v)| {
                        if k == "color" {
                            changed = true;
                            (k.clone(), StyleValue::from("green"))
                        } else {
                            (k.clone(), v.clone())
                        }
                    })
                    .collect();
                changed.then_some(next)
            }
        }
        let styles = StyleInterpolation::Tree(
            StyleTree::new().with(".demo", StyleTree::new().with("color", "red")),
        );
        let config = ParseConfig {
            transformers: vec![Box::new(Uppercase)],
            ..Default::default()
        };
        assert_eq!(parse_style_to_less(&styles, &config), ".demo{color:green;}");
    }
}
