//! Theme variants
//!
//! A variant is an ordered derivative list plus emission policy. Dark and
//! compact both layer their derivative on top of the default one, so the
//! same seed re-runs through the whole pipeline per variant.

use std::fmt::{Display, Formatter};

use crate::derive::{compact_derivative, dark_derivative, default_derivative};
use crate::map::Derivative;

/// Built-in theme variant catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    Default,
    Dark,
    Compact,
}

impl ThemeVariant {
    /// Stable variant id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Compact => "compact",
        }
    }

    /// Full variant list.
    pub fn all() -> &'static [ThemeVariant] {
        const VARIANTS: [ThemeVariant; 3] =
            [ThemeVariant::Default, ThemeVariant::Dark, ThemeVariant::Compact];
        &VARIANTS
    }

    /// Ordered derivative list realizing this variant.
    pub fn derivatives(self) -> Vec<Derivative> {
        match self {
            Self::Default => vec![default_derivative()],
            Self::Dark => vec![default_derivative(), dark_derivative()],
            Self::Compact => vec![default_derivative(), compact_derivative()],
        }
    }

    /// File name the variant's root stylesheet is written under.
    pub fn stylesheet_name(self) -> &'static str {
        match self {
            Self::Default => "css-vars.css",
            Self::Dark => "css-vars-dark.css",
            Self::Compact => "css-vars-compact.css",
        }
    }

    /// Whether null-valued tokens are dropped before emission.
    pub fn strips_null(self) -> bool {
        !matches!(self, Self::Default)
    }
}

impl Display for ThemeVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_all_variants() {
        let ids: Vec<&str> = ThemeVariant::all().iter().map(|v| v.id()).collect();
        assert_eq!(ids, vec!["default", "dark", "compact"]);
    }

    #[test]
    fn layered_variants_start_from_default() {
        for variant in [ThemeVariant::Dark, ThemeVariant::Compact] {
            let names: Vec<&str> =
                variant.derivatives().iter().map(|d| d.name()).collect();
            assert_eq!(names[0], "default");
            assert_eq!(names.len(), 2);
        }
    }

    #[test]
    fn only_layered_variants_strip_null() {
        assert!(!ThemeVariant::Default.strips_null());
        assert!(ThemeVariant::Dark.strips_null());
        assert!(ThemeVariant::Compact.strips_null());
    }
}
