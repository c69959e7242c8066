//! Lacquer design-token engine
//!
//! A deterministic pipeline from a handful of seed values to a complete
//! theme:
//!
//! - **Seed tokens**: primitive design inputs (base colors, font size,
//!   size unit, border radius, motion flags). See [`SeedToken`].
//! - **Derivatives**: pure `(seed, accumulated) -> partial` functions that
//!   compute dependent values: color ramps, font/size/height scales,
//!   motion durations, radii. See [`derive`].
//! - **Map token**: the flat, fully-resolved token set produced by folding
//!   the derivative list. See [`build_map_token`].
//! - **Alias layer**: component-facing aliases appended on top of the map
//!   token. See [`format_token`].
//! - **Variants**: default, dark and compact themes as alternate
//!   derivative stacks over the same seed. See [`ThemeVariant`].
//!
//! # Quick start
//!
//! ```rust
//! use lacquer_theme::{build_map_token, format_token, SeedToken, ThemeVariant};
//!
//! let seed = SeedToken::default();
//! let map = build_map_token(&seed, &ThemeVariant::Default.derivatives())?;
//! let token = format_token(&map)?;
//! assert_eq!(token.str_("colorPrimary")?, "#1677ff");
//! # Ok::<(), lacquer_theme::ThemeError>(())
//! ```
//!
//! The engine is purely functional: no I/O, no shared state, safe to call
//! repeatedly and concurrently. Callers embedding it in a reactive UI are
//! responsible for memoizing results on token change.

pub mod alias;
pub mod color;
pub mod derive;
pub mod error;
pub mod map;
pub mod palette;
pub mod seed;
pub mod variant;

// Re-export commonly used types
pub use alias::{de_alpha_color, format_token};
pub use color::{Color, Hsv};
pub use error::ThemeError;
pub use map::{build_map_token, Derivative, DerivativeFn, TokenMap, TokenValue};
pub use seed::{SeedToken, PRESET_COLOR_KEYS};
pub use variant::ThemeVariant;
