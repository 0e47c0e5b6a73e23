//! Palette for Wanderlust AI.
//!
//! Values behind the custom properties the token configuration points at.
//! Warm sand neutrals with a teal brand accent; the dark mode keeps the
//! accent and inverts the neutrals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Light mode values.
pub mod light {
    /// Brand accent - deep teal.
    pub const BRAND: &str = "#0f766e";
    /// Brand accent for hover and pressed states.
    pub const BRAND_DARK: &str = "#115e59";
    /// Page background - warm off-white.
    pub const BACKGROUND: &str = "#fdfbf7";
    /// Body text.
    pub const FOREGROUND: &str = "#1c1917";
    /// Secondary text.
    pub const MUTED: &str = "#78716c";
    /// Hairline borders.
    pub const BORDER: &str = "rgba(28, 25, 23, 0.08)";
    /// Glass surface.
    pub const GLASS: &str = "rgba(255, 255, 255, 0.7)";
}

/// Dark mode values.
pub mod dark {
    /// Brand accent - brighter teal for contrast on dark.
    pub const BRAND: &str = "#2dd4bf";
    /// Brand accent for hover and pressed states.
    pub const BRAND_DARK: &str = "#14b8a6";
    /// Page background.
    pub const BACKGROUND: &str = "#0c0a09";
    /// Body text.
    pub const FOREGROUND: &str = "#fafaf9";
    /// Secondary text.
    pub const MUTED: &str = "#a8a29e";
    /// Hairline borders.
    pub const BORDER: &str = "rgba(255, 255, 255, 0.08)";
    /// Glass surface.
    pub const GLASS: &str = "rgba(28, 25, 23, 0.7)";
}

/// Fixed sizes shared by both modes.
pub mod sizing {
    /// Header bar height.
    pub const HEADER_HEIGHT: &str = "4rem";
    /// Footer height.
    pub const FOOTER_HEIGHT: &str = "5rem";
}

/// Custom property values for both color modes.
///
/// Keys are property names without the leading `--`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Values applied at `:root`.
    pub light: BTreeMap<String, String>,
    /// Overrides applied when dark mode is active.
    pub dark: BTreeMap<String, String>,
}

impl Default for Palette {
    fn default() -> Self {
        let light = [
            ("color-brand", light::BRAND),
            ("color-brand-dark", light::BRAND_DARK),
            ("color-background", light::BACKGROUND),
            ("color-foreground", light::FOREGROUND),
            ("color-muted", light::MUTED),
            ("color-border", light::BORDER),
            ("color-glass", light::GLASS),
            ("height-header", sizing::HEADER_HEIGHT),
            ("height-footer", sizing::FOOTER_HEIGHT),
        ];
        let dark = [
            ("color-brand", dark::BRAND),
            ("color-brand-dark", dark::BRAND_DARK),
            ("color-background", dark::BACKGROUND),
            ("color-foreground", dark::FOREGROUND),
            ("color-muted", dark::MUTED),
            ("color-border", dark::BORDER),
            ("color-glass", dark::GLASS),
        ];

        Self {
            light: to_map(&light),
            dark: to_map(&dark),
        }
    }
}

impl Palette {
    /// Every property name defined in either mode.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.light
            .keys()
            .chain(self.dark.keys().filter(|k| !self.light.contains_key(*k)))
            .map(String::as_str)
    }
}

fn to_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}
