//! Token maps and the map-token builder
//!
//! A [`TokenMap`] is an ordered name → value mapping. Iteration order is
//! insertion order, which downstream css-var generation relies on for
//! byte-identical output across runs.
//!
//! [`build_map_token`] folds an ordered list of [`Derivative`] functions
//! over a seed: each derivative reads the seed plus the accumulator so
//! far and returns a partial map that is shallow-merged in, last write
//! winning. Declared order is the only dependency declaration there is —
//! reordering two derivatives that write the same key changes the result,
//! and that is by contract.

use std::fmt;

use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::seed::SeedToken;

/// A single resolved token value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Num(f64),
    Str(String),
    Bool(bool),
    /// A token a variant derivative has withdrawn; stripped before
    /// stylesheet emission.
    Null,
}

impl TokenValue {
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Stringified form used when a value reaches CSS text unchanged.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => Ok(()),
        }
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for TokenValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Ordered token name → value map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMap(IndexMap<String, TokenValue>);

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TokenValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&TokenValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Fallible lookup; missing keys name themselves in the error so a
    /// failing derivative or style closure points at the exact token.
    pub fn try_get(&self, key: &str) -> Result<&TokenValue, ThemeError> {
        self.0.get(key).ok_or_else(|| ThemeError::missing(key))
    }

    /// Fallible numeric lookup.
    pub fn num(&self, key: &str) -> Result<f64, ThemeError> {
        self.try_get(key)?
            .as_num()
            .ok_or_else(|| ThemeError::mismatch(key, "number"))
    }

    /// Fallible string lookup.
    pub fn str_(&self, key: &str) -> Result<&str, ThemeError> {
        self.try_get(key)?
            .as_str()
            .ok_or_else(|| ThemeError::mismatch(key, "string"))
    }

    /// String lookup with a fallback for absent or non-string values.
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).and_then(TokenValue::as_str).unwrap_or(default)
    }

    /// Shallow merge: every entry of `other` overwrites the same key here.
    /// Existing keys keep their position; new keys append.
    pub fn merge(&mut self, other: TokenMap) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    pub fn iter(&self) -> Iter<'_, String, TokenValue> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for TokenMap {
    type Item = (String, TokenValue);
    type IntoIter = IntoIter<String, TokenValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenMap {
    type Item = (&'a String, &'a TokenValue);
    type IntoIter = Iter<'a, String, TokenValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<TokenValue>> FromIterator<(K, V)> for TokenMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Build a token map literal in insertion order.
#[macro_export]
macro_rules! tokens {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = $crate::map::TokenMap::new();
        $(map.insert($key, $value);)*
        map
    }};
}

/// One named derivation stage: a pure function from the seed and the
/// accumulated map so far to a partial token map.
pub type DerivativeFn = fn(&SeedToken, &TokenMap) -> Result<TokenMap, ThemeError>;

/// A named derivative stage; the name surfaces in build errors.
#[derive(Clone, Copy)]
pub struct Derivative {
    name: &'static str,
    run: DerivativeFn,
}

impl Derivative {
    pub const fn new(name: &'static str, run: DerivativeFn) -> Self {
        Self { name, run }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn run(&self, seed: &SeedToken, acc: &TokenMap) -> Result<TokenMap, ThemeError> {
        (self.run)(seed, acc)
    }
}

impl fmt::Debug for Derivative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Derivative").field("name", &self.name).finish()
    }
}

/// Fold `derivatives` over `seed` into one flat map token.
///
/// Any failing stage aborts the whole build; no partial theme escapes.
pub fn build_map_token(
    seed: &SeedToken,
    derivatives: &[Derivative],
) -> Result<TokenMap, ThemeError> {
    let mut acc = TokenMap::new();
    for derivative in derivatives {
        let partial = derivative
            .run(seed, &acc)
            .map_err(|source| ThemeError::Derivative {
                name: derivative.name(),
                source: Box::new(source),
            })?;
        tracing::debug!(
            derivative = derivative.name(),
            tokens = partial.len(),
            "derivative applied"
        );
        acc.merge(partial);
    }
    // the root class namespace every consumer scopes under
    acc.insert("prefixCls", "ant");
    Ok(acc)
}
