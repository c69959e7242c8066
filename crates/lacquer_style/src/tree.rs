//! Style trees
//!
//! A [`StyleTree`] is an ordered selector-or-property → value mapping, the
//! in-memory form of one component's styles before serialization. Leaf
//! values are a tagged enum, so nested selectors, multi-value fallback
//! chains and keyframe references never rely on shape sniffing.

use indexmap::map::Iter;
use indexmap::IndexMap;

use lacquer_theme::TokenValue;

/// One value in a style tree.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// A single declaration value.
    Value(TokenValue),
    /// A fallback chain: one declaration is emitted per entry, in order.
    Multi(Vec<TokenValue>),
    /// An `animation-name` reference to a keyframes block.
    Animation(Keyframes),
    /// A nested selector scope.
    Nested(StyleTree),
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Value(TokenValue::Num(value))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Value(TokenValue::Str(value.to_string()))
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Value(TokenValue::Str(value))
    }
}

impl From<TokenValue> for StyleValue {
    fn from(value: TokenValue) -> Self {
        Self::Value(value)
    }
}

impl From<StyleTree> for StyleValue {
    fn from(value: StyleTree) -> Self {
        Self::Nested(value)
    }
}

impl From<Keyframes> for StyleValue {
    fn from(value: Keyframes) -> Self {
        Self::Animation(value)
    }
}

/// An ordered style-rule mapping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleTree {
    entries: IndexMap<String, StyleValue>,
}

impl StyleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> Iter<'_, String, StyleValue> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleTree {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tree = Self::new();
        for (key, value) in iter {
            tree.set(key, value);
        }
        tree
    }
}

/// A named keyframes block. The emitted name is scoped by the active
/// hash id, and one block is emitted per unique resolved name no matter
/// how many scopes reference it.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes {
    name: String,
    style: StyleTree,
}

impl Keyframes {
    pub fn new(name: impl Into<String>, style: StyleTree) -> Self {
        Self {
            name: name.into(),
            style,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style(&self) -> &StyleTree {
        &self.style
    }

    /// The emitted animation name: `{hash}-{name}` under a hash id.
    pub fn resolved_name(&self, hash_id: Option<&str>) -> String {
        match hash_id {
            Some(hash) if !hash.is_empty() => format!("{hash}-{}", self.name),
            _ => self.name.clone(),
        }
    }
}

/// Anything a style function may return: a raw root-level string, a tree,
/// a standalone keyframes block, or an arbitrarily nested list of these.
/// Lists flatten recursively before parsing.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleInterpolation {
    Raw(String),
    Tree(StyleTree),
    Keyframes(Keyframes),
    List(Vec<StyleInterpolation>),
}

impl From<StyleTree> for StyleInterpolation {
    fn from(value: StyleTree) -> Self {
        Self::Tree(value)
    }
}

impl From<Keyframes> for StyleInterpolation {
    fn from(value: Keyframes) -> Self {
        Self::Keyframes(value)
    }
}

impl From<&str> for StyleInterpolation {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

impl From<Vec<StyleInterpolation>> for StyleInterpolation {
    fn from(value: Vec<StyleInterpolation>) -> Self {
        Self::List(value)
    }
}

impl StyleValue {
    /// A fallback chain from anything value-like.
    pub fn multi<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TokenValue>,
    {
        Self::Multi(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_insertion_order() {
        let tree = StyleTree::new()
            .with("position", "relative")
            .with("fontSize", 14.0)
            .with("&:hover", StyleTree::new().with("color", "red"));
        let keys: Vec<&str> = tree.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["position", "fontSize", "&:hover"]);
    }

    #[test]
    fn keyframes_names_scope_under_a_hash() {
        let kf = Keyframes::new("fade-in", StyleTree::new());
        assert_eq!(kf.resolved_name(None), "fade-in");
        assert_eq!(kf.resolved_name(Some("h1a2b3")), "h1a2b3-fade-in");
        assert_eq!(kf.resolved_name(Some("")), "fade-in");
    }

    #[test]
    fn multi_collects_mixed_values() {
        let value = StyleValue::multi(["-webkit-sticky", "sticky"]);
        match value {
            StyleValue::Multi(items) => assert_eq!(items.len(), 2),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
