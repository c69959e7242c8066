//! Seed tokens
//!
//! Seeds are the primitive, author-supplied design inputs everything else
//! derives from: a handful of brand colors, the preset palette bases, and
//! the numeric scales (font, size, height, motion, radius). A theme never
//! edits derived values directly; it edits seeds and re-runs derivation.
//!
//! Seeds deserialize from TOML with per-field defaults, so a config file
//! only has to name the keys it overrides.

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::map::TokenMap;

/// The thirteen preset palette keys, in ramp-generation order.
pub const PRESET_COLOR_KEYS: [&str; 13] = [
    "blue", "purple", "cyan", "green", "magenta", "pink", "red", "orange", "yellow", "volcano",
    "geekblue", "lime", "gold",
];

/// Primitive design inputs for one theme.
///
/// `color_text_base` and `color_bg_base` default to empty strings, which
/// means "use the scheme's natural base" (black-on-white for the default
/// scheme, white-on-black for dark).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedToken {
    // Brand & status colors
    pub color_primary: String,
    pub color_success: String,
    pub color_warning: String,
    pub color_error: String,
    pub color_info: String,
    pub color_text_base: String,
    pub color_bg_base: String,

    // Preset palette bases
    pub blue: String,
    pub purple: String,
    pub cyan: String,
    pub green: String,
    pub magenta: String,
    pub pink: String,
    pub red: String,
    pub orange: String,
    pub yellow: String,
    pub volcano: String,
    pub geekblue: String,
    pub lime: String,
    pub gold: String,

    // Typography
    pub font_family: String,
    pub font_family_code: String,
    pub font_size: f64,

    // Line
    pub line_width: f64,
    pub line_type: String,

    // Motion
    pub motion_unit: f64,
    pub motion_base: f64,
    pub motion_ease_out_circ: String,
    pub motion_ease_in_out_circ: String,
    pub motion_ease_out: String,
    pub motion_ease_in_out: String,
    pub motion_ease_out_back: String,
    pub motion_ease_in_back: String,
    pub motion_ease_in_quint: String,
    pub motion_ease_out_quint: String,

    // Radius
    pub border_radius: f64,

    // Size
    pub size_unit: f64,
    pub size_step: f64,
    pub size_popup_arrow: f64,

    // Control
    pub control_height: f64,

    // z-index
    pub z_index_base: f64,
    pub z_index_popup_base: f64,

    // Image
    pub opacity_image: f64,

    // Flags
    pub wireframe: bool,
    pub motion: bool,
}

impl Default for SeedToken {
    fn default() -> Self {
        Self {
            color_primary: "#1677ff".into(),
            color_success: "#52c41a".into(),
            color_warning: "#faad14".into(),
            color_error: "#ff4d4f".into(),
            color_info: "#1677ff".into(),
            color_text_base: String::new(),
            color_bg_base: String::new(),

            blue: "#1677ff".into(),
            purple: "#722ed1".into(),
            cyan: "#13c2c2".into(),
            green: "#52c41a".into(),
            magenta: "#eb2f96".into(),
            pink: "#eb2f96".into(),
            red: "#f5222d".into(),
            orange: "#fa8c16".into(),
            yellow: "#fadb14".into(),
            volcano: "#fa541c".into(),
            geekblue: "#2f54eb".into(),
            lime: "#a0d911".into(),
            gold: "#faad14".into(),

            font_family: "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, 'Noto Sans', sans-serif, 'Apple Color Emoji', 'Segoe UI Emoji', 'Segoe UI Symbol', 'Noto Color Emoji'".into(),
            font_family_code: "'SFMono-Regular', Consolas, 'Liberation Mono', Menlo, Courier, monospace".into(),
            font_size: 14.0,

            line_width: 1.0,
            line_type: "solid".into(),

            motion_unit: 0.1,
            motion_base: 0.0,
            motion_ease_out_circ: "cubic-bezier(0.08, 0.82, 0.17, 1)".into(),
            motion_ease_in_out_circ: "cubic-bezier(0.78, 0.14, 0.15, 0.86)".into(),
            motion_ease_out: "cubic-bezier(0.215, 0.61, 0.355, 1)".into(),
            motion_ease_in_out: "cubic-bezier(0.645, 0.045, 0.355, 1)".into(),
            motion_ease_out_back: "cubic-bezier(0.12, 0.4, 0.29, 1.46)".into(),
            motion_ease_in_back: "cubic-bezier(0.71, -0.46, 0.88, 0.6)".into(),
            motion_ease_in_quint: "cubic-bezier(0.755, 0.05, 0.855, 0.06)".into(),
            motion_ease_out_quint: "cubic-bezier(0.23, 1, 0.32, 1)".into(),

            border_radius: 6.0,

            size_unit: 4.0,
            size_step: 4.0,
            size_popup_arrow: 16.0,

            control_height: 32.0,

            z_index_base: 0.0,
            z_index_popup_base: 1000.0,

            opacity_image: 1.0,

            wireframe: false,
            motion: true,
        }
    }
}

impl SeedToken {
    /// Parse a TOML document of seed overrides; keys that are absent keep
    /// their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(source)?)
    }

    /// Look up a preset palette base by key.
    pub fn preset_color(&self, key: &str) -> Option<&str> {
        let value = match key {
            "blue" => &self.blue,
            "purple" => &self.purple,
            "cyan" => &self.cyan,
            "green" => &self.green,
            "magenta" => &self.magenta,
            "pink" => &self.pink,
            "red" => &self.red,
            "orange" => &self.orange,
            "yellow" => &self.yellow,
            "volcano" => &self.volcano,
            "geekblue" => &self.geekblue,
            "lime" => &self.lime,
            "gold" => &self.gold,
            _ => return None,
        };
        Some(value)
    }

    /// Spread the seed into a token map with camelCase token keys, the
    /// form every derivative and the css-var generator consume.
    pub fn to_token_map(&self) -> TokenMap {
        let mut map = TokenMap::new();
        map.insert("colorPrimary", self.color_primary.clone());
        map.insert("colorSuccess", self.color_success.clone());
        map.insert("colorWarning", self.color_warning.clone());
        map.insert("colorError", self.color_error.clone());
        map.insert("colorInfo", self.color_info.clone());
        for key in PRESET_COLOR_KEYS {
            map.insert(key, self.preset_color(key).unwrap_or_default());
        }
        map.insert("fontFamily", self.font_family.clone());
        map.insert("fontFamilyCode", self.font_family_code.clone());
        map.insert("fontSize", self.font_size);
        map.insert("lineWidth", self.line_width);
        map.insert("lineType", self.line_type.clone());
        map.insert("motionUnit", self.motion_unit);
        map.insert("motionBase", self.motion_base);
        map.insert("motionEaseOutCirc", self.motion_ease_out_circ.clone());
        map.insert("motionEaseInOutCirc", self.motion_ease_in_out_circ.clone());
        map.insert("motionEaseOut", self.motion_ease_out.clone());
        map.insert("motionEaseInOut", self.motion_ease_in_out.clone());
        map.insert("motionEaseOutBack", self.motion_ease_out_back.clone());
        map.insert("motionEaseInBack", self.motion_ease_in_back.clone());
        map.insert("motionEaseInQuint", self.motion_ease_in_quint.clone());
        map.insert("motionEaseOutQuint", self.motion_ease_out_quint.clone());
        map.insert("borderRadius", self.border_radius);
        map.insert("sizeUnit", self.size_unit);
        map.insert("sizeStep", self.size_step);
        map.insert("sizePopupArrow", self.size_popup_arrow);
        map.insert("controlHeight", self.control_height);
        map.insert("zIndexBase", self.z_index_base);
        map.insert("zIndexPopupBase", self.z_index_popup_base);
        map.insert("opacityImage", self.opacity_image);
        map.insert("wireframe", self.wireframe);
        map.insert("motion", self.motion);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_design_system() {
        let seed = SeedToken::default();
        assert_eq!(seed.color_primary, "#1677ff");
        assert_eq!(seed.font_size, 14.0);
        assert_eq!(seed.control_height, 32.0);
        assert_eq!(seed.size_step, 4.0);
        assert!(!seed.wireframe);
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let seed = SeedToken::from_toml_str("font_size = 16\ncolor_primary = \"#00b96b\"").unwrap();
        assert_eq!(seed.font_size, 16.0);
        assert_eq!(seed.color_primary, "#00b96b");
        // everything else keeps its default
        assert_eq!(seed.border_radius, 6.0);
        assert_eq!(seed.line_type, "solid");
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = SeedToken::from_toml_str("font_size = \"not a number\"").unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
    }

    #[test]
    fn token_map_uses_camel_case_keys() {
        let map = SeedToken::default().to_token_map();
        assert_eq!(map.get("colorPrimary").unwrap().as_str(), Some("#1677ff"));
        assert_eq!(map.get("zIndexPopupBase").unwrap().as_num(), Some(1000.0));
        assert!(map.get("color_primary").is_none());
    }
}
