//! Case conversion
//!
//! Three boundary passes split a camelCase identifier: lower/digit →
//! upper, acronym → capitalized word, and lower → upper-or-digit. The
//! same passes feed both [`kebab_case`] and [`camel_case`], so the two
//! stay consistent on acronyms and digit runs.

use std::sync::OnceLock;

use regex::Regex;

fn boundary_passes() -> &'static [Regex; 3] {
    static PASSES: OnceLock<[Regex; 3]> = OnceLock::new();
    PASSES.get_or_init(|| {
        [
            Regex::new(r"([a-z0-9])([A-Z])").expect("valid boundary pattern"),
            Regex::new(r"([A-Z]+)([A-Z][a-z0-9]+)").expect("valid boundary pattern"),
            Regex::new(r"([a-z])([A-Z0-9])").expect("valid boundary pattern"),
        ]
    })
}

/// Hyphenate camelCase boundaries and lowercase the result.
pub fn kebab_case(input: &str) -> String {
    let mut out = input.to_string();
    for pass in boundary_passes() {
        out = pass.replace_all(&out, "$1-$2").into_owned();
    }
    out.to_lowercase()
}

/// Lower-camel-case a component name: `DropdownButton` → `dropdownButton`.
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, word) in kebab_case(input).split('-').enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_splits_simple_camel_case() {
        assert_eq!(kebab_case("colorPrimary"), "color-primary");
        assert_eq!(kebab_case("DropdownButton"), "dropdown-button");
    }

    #[test]
    fn kebab_splits_acronyms_and_digits() {
        assert_eq!(kebab_case("sizeXXL"), "size-xxl");
        assert_eq!(kebab_case("fontSizeHeading1"), "font-size-heading-1");
        assert_eq!(kebab_case("zIndexPopupBase"), "z-index-popup-base");
        assert_eq!(kebab_case("colorBgBase"), "color-bg-base");
    }

    #[test]
    fn camel_joins_back_from_kebab_boundaries() {
        assert_eq!(camel_case("DropdownButton"), "dropdownButton");
        assert_eq!(camel_case("Affix"), "affix");
        assert_eq!(camel_case("QRCode"), "qrCode");
    }
}
