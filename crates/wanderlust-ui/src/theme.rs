//! Theme stylesheet for `Wanderlust AI`.
//!
//! The custom properties come from the core palette; the token classes the
//! components use must exist in the default style configuration.

use wanderlust_core::{Palette, StyleConfig, render_palette};

/// Token classes applied by components.
pub mod classes {
    /// Footer surface.
    pub const FOOTER: &str = "bg-color-background border-color-border h-footer";
    /// Brand wordmark.
    pub const BRAND_NAME: &str = "font-display text-gradient-brand";
    /// Logo glyph.
    pub const LOGO: &str = "text-brand";
    /// Footer navigation buttons.
    pub const FOOTER_LINK: &str = "font-sans text-color-muted";
    /// Copyright line.
    pub const COPYRIGHT: &str = "font-sans text-color-muted";
}

/// Generate the custom property block, the token classes and the derived
/// utility classes.
pub fn generate_css_variables() -> String {
    let config = StyleConfig::default();
    generate_css_for(&config, &Palette::default())
}

/// Stylesheet for an explicit configuration and palette.
pub fn generate_css_for(config: &StyleConfig, palette: &Palette) -> String {
    let mut css = render_palette(palette, config.dark_mode);
    css.push('\n');
    css.push_str(&config.render_token_classes());
    css.push_str(&config.render_utilities());
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use wanderlust_core::Stylesheet;

    #[test]
    fn test_generate_css_variables() {
        let css = generate_css_variables();
        assert!(css.contains(":root"));
        assert!(css.contains("--color-brand"));
        assert!(css.contains("--color-background"));
        assert!(css.contains(".glass-panel"));
    }

    #[test]
    fn test_generated_css_resolves_every_token() {
        let sheet = Stylesheet::parse(&generate_css_variables());
        assert!(StyleConfig::default().resolve(&sheet).is_ok());
    }

    #[test]
    fn test_generated_css_defines_component_classes() {
        let css = generate_css_variables();
        for class in [
            classes::FOOTER,
            classes::BRAND_NAME,
            classes::LOGO,
            classes::FOOTER_LINK,
            classes::COPYRIGHT,
        ]
        .iter()
        .flat_map(|c| c.split_whitespace())
        {
            assert!(css.contains(&format!(".{class} {{")), "no rule for {class}");
        }
        assert!(css.contains("font-family: Inter, system-ui, sans-serif;"));
    }

    #[test]
    fn test_component_classes_are_known_tokens() {
        let known = StyleConfig::default().token_class_names();
        let used = [
            classes::FOOTER,
            classes::BRAND_NAME,
            classes::LOGO,
            classes::FOOTER_LINK,
            classes::COPYRIGHT,
        ];
        for class in used.iter().flat_map(|c| c.split_whitespace()) {
            assert!(known.iter().any(|k| k == class), "{class} is not a token");
        }
    }
}
