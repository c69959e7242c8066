//! Lacquer style engine
//!
//! Turns the token maps produced by `lacquer_theme` into CSS custom
//! properties and serialized stylesheets:
//!
//! - **Name conversion**: camelCase token keys to `--prefix-kebab-case`
//!   custom-property names. See [`token_to_css_var`].
//! - **CSS variable generation**: a full token map split into the
//!   variable set, the `var(...)`-referencing css token, and a
//!   calc-friendly map token. See [`gen_css_var`].
//! - **Style trees**: the tagged in-memory form of component styles,
//!   with multi-value chains and keyframe references. See [`tree`].
//! - **Parsing/compilation**: recursive serialization with `&` splicing,
//!   hash scoping, unit coercion, keyframe de-duplication and `@layer`
//!   support. See [`parse_style_interpolation`].
//! - **Style hooks**: per-component generators combining global and
//!   component tokens. See [`StyleHook`].
//! - **Root stylesheets**: `:root` variable blocks per theme variant.
//!   See [`render_root_stylesheet`].
//!
//! Everything is pure and re-entrant; the only internal state (the
//! keyframe side table) lives inside a single top-level parse call.

pub mod calc;
pub mod case;
pub mod cssvar;
pub mod error;
pub mod hooks;
pub mod linter;
pub mod parse;
pub mod preset;
pub mod stylesheet;
pub mod tree;

// Re-export commonly used types
pub use calc::{calc, css_max, css_min, unit, CssCalc};
pub use case::{camel_case, kebab_case};
pub use cssvar::{gen_css_var, is_skip_key, token_to_css_var, CssVarOutput, SKIP_KEYS};
pub use error::StyleError;
pub use hooks::{GeneratedStyle, StyleHook};
pub use linter::{ContentQuotesLinter, HashedAnimationLinter, LintContext, Linter};
pub use parse::{
    is_unitless, parse_style_interpolation, parse_style_to_less, HashPriority, LayerConfig,
    ParseConfig, ParseInfo, Transformer, UNITLESS_PROPERTIES,
};
pub use preset::{gen_preset_color, PresetColorSlots};
pub use stylesheet::render_root_stylesheet;
pub use tree::{Keyframes, StyleInterpolation, StyleTree, StyleValue};
