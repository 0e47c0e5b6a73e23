//! Style token configuration.
//!
//! Declares which files are scanned for token usage, how dark mode is
//! activated, and the token names that extend the base design scales. Tokens
//! usually indirect to custom properties defined by the host stylesheet.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result, UnresolvedToken};
use crate::glob::GlobPattern;
use crate::stylesheet::{self, Stylesheet, Unresolved};

/// Default configuration file name, relative to the project root.
pub const DEFAULT_CONFIG_FILE: &str = "wanderlust.style.json";

static TOKEN_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap_or_else(|_| unreachable!())
});

/// How the dark palette is activated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Dark values apply below an element carrying the `dark` class.
    #[default]
    Class,
    /// Dark values follow `prefers-color-scheme`.
    Media,
}

impl std::fmt::Display for DarkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Class => write!(f, "class"),
            Self::Media => write!(f, "media"),
        }
    }
}

/// Token additions on top of the base design scales.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeExtension {
    /// Color tokens.
    pub colors: BTreeMap<String, String>,
    /// Font stacks.
    pub font_family: BTreeMap<String, Vec<String>>,
    /// Height scale entries.
    pub height: BTreeMap<String, String>,
}

impl Default for ThemeExtension {
    fn default() -> Self {
        let colors = [
            ("brand", "var(--color-brand)"),
            ("brand-dark", "var(--color-brand-dark)"),
            ("color-background", "var(--color-background)"),
            ("color-foreground", "var(--color-foreground)"),
            ("color-muted", "var(--color-muted)"),
            ("color-border", "var(--color-border)"),
        ];
        let height = [
            ("header", "var(--height-header)"),
            ("footer", "var(--height-footer)"),
        ];
        let font_family = [
            ("sans", &["Inter", "system-ui", "sans-serif"][..]),
            ("display", &["Playfair Display", "Georgia", "serif"][..]),
        ];

        Self {
            colors: pairs(&colors),
            font_family: font_family
                .iter()
                .map(|(name, stack)| {
                    (
                        (*name).to_string(),
                        stack.iter().map(|f| (*f).to_string()).collect(),
                    )
                })
                .collect(),
            height: pairs(&height),
        }
    }
}

/// The `theme` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeSection {
    /// Extensions merged into the base scales.
    pub extend: ThemeExtension,
}

/// Build-time style configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    /// Globs of files scanned for token usage.
    pub content: Vec<String>,
    /// Dark mode activation strategy.
    pub dark_mode: DarkMode,
    /// Token definitions.
    pub theme: ThemeSection,
    /// Derived utility classes: class name to CSS declarations.
    pub utilities: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let gradient = [
            (
                "background-image",
                "linear-gradient(135deg, var(--color-brand) 0%, var(--color-brand-dark) 100%)",
            ),
            ("-webkit-background-clip", "text"),
            ("background-clip", "text"),
            ("color", "transparent"),
        ];
        let glass = [
            ("background-color", "var(--color-glass)"),
            ("backdrop-filter", "blur(12px)"),
            ("border", "1px solid var(--color-border)"),
        ];

        Self {
            content: vec!["./index.html".to_string(), "./src/**/*.{rs,html}".to_string()],
            dark_mode: DarkMode::Class,
            theme: ThemeSection::default(),
            utilities: BTreeMap::from([
                ("text-gradient-brand".to_string(), pairs(&gradient)),
                ("glass-panel".to_string(), pairs(&glass)),
            ]),
        }
    }
}

/// Tokens with every custom property substituted.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTokens {
    /// Resolved color values.
    pub colors: BTreeMap<String, String>,
    /// Font stacks as CSS `font-family` values.
    pub font_family: BTreeMap<String, String>,
    /// Resolved heights.
    pub height: BTreeMap<String, String>,
    /// Utility declarations with values resolved.
    pub utilities: BTreeMap<String, BTreeMap<String, String>>,
}

impl StyleConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading style configuration from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| Error::file_system(path, e))?;
        let config = Self::from_json(&content)?;
        info!(
            "Loaded {} color, {} font and {} height tokens from {}",
            config.theme.extend.colors.len(),
            config.theme.extend.font_family.len(),
            config.theme.extend.height.len(),
            path.display()
        );
        Ok(config)
    }

    /// Load `path`, or the default configuration if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(
                "Style configuration {} not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Write the configuration as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| Error::file_system(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| Error::file_system(path, e))?;
        info!("Saved style configuration to {}", path.display());
        Ok(())
    }

    /// Default configuration path under `root`.
    pub fn default_path(root: &Path) -> PathBuf {
        root.join(DEFAULT_CONFIG_FILE)
    }

    /// Check structural rules: non-empty content list, compilable globs and
    /// well-formed token names.
    pub fn validate(&self) -> Result<()> {
        if self.content.is_empty() {
            return Err(Error::InvalidConfig(
                "content must list at least one path".to_string(),
            ));
        }
        self.content_patterns()?;

        let extend = &self.theme.extend;
        let names = extend
            .colors
            .keys()
            .chain(extend.font_family.keys())
            .chain(extend.height.keys())
            .chain(self.utilities.keys());
        for name in names {
            if !TOKEN_NAME.is_match(name) {
                return Err(Error::InvalidConfig(format!(
                    "token name '{name}' must be lowercase words joined by '-'"
                )));
            }
        }

        for (name, stack) in &extend.font_family {
            if stack.is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "font family '{name}' has an empty stack"
                )));
            }
        }
        Ok(())
    }

    /// Compile the content globs.
    pub fn content_patterns(&self) -> Result<Vec<GlobPattern>> {
        self.content.iter().map(|p| GlobPattern::new(p)).collect()
    }

    /// Every custom property referenced by a token or utility, sorted and unique.
    pub fn referenced_properties(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .token_values()
            .flat_map(|(_, value)| stylesheet::var_references(value))
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Resolve every token against `sheet`.
    ///
    /// Fails with every unresolved token at once, not just the first.
    pub fn resolve(&self, sheet: &Stylesheet) -> Result<ResolvedTokens> {
        let mut missing = Vec::new();
        let mut resolve = |token: &str, value: &str| match sheet.substitute(value) {
            Ok(resolved) => resolved,
            Err(unresolved) => {
                missing.push(UnresolvedToken {
                    token: token.to_string(),
                    property: unresolved.property().to_string(),
                });
                if let Unresolved::Cycle(name) = &unresolved {
                    warn!("Custom property --{name} refers back to itself");
                }
                String::new()
            }
        };

        let extend = &self.theme.extend;
        let colors = extend
            .colors
            .iter()
            .map(|(name, value)| (name.clone(), resolve(name, value)))
            .collect();
        let height = extend
            .height
            .iter()
            .map(|(name, value)| (name.clone(), resolve(name, value)))
            .collect();
        let utilities = self
            .utilities
            .iter()
            .map(|(class, declarations)| {
                let resolved = declarations
                    .iter()
                    .map(|(property, value)| (property.clone(), resolve(class, value)))
                    .collect();
                (class.clone(), resolved)
            })
            .collect();
        let font_family = extend
            .font_family
            .iter()
            .map(|(name, stack)| (name.clone(), font_stack_css(stack)))
            .collect();

        if !missing.is_empty() {
            warn!("{} token(s) reference undefined custom properties", missing.len());
            return Err(Error::UnresolvedTokens(missing));
        }

        debug!("Resolved all tokens against {} custom properties", sheet.len());
        Ok(ResolvedTokens {
            colors,
            font_family,
            height,
            utilities,
        })
    }

    /// Utility class names generated from the tokens, sorted.
    pub fn token_class_names(&self) -> Vec<String> {
        let mut classes: Vec<String> = self
            .token_rules()
            .into_keys()
            .chain(self.utilities.keys().cloned())
            .collect();
        classes.sort();
        classes
    }

    /// Rule per token class: `bg-`, `text-` and `border-` for colors,
    /// `font-` for font stacks, `h-` for heights. Values are left as written.
    pub fn token_rules(&self) -> BTreeMap<String, BTreeMap<String, String>> {
        let extend = &self.theme.extend;
        let colors = extend.colors.iter().flat_map(|(name, value)| {
            [
                ("bg", "background-color"),
                ("text", "color"),
                ("border", "border-color"),
            ]
            .into_iter()
            .map(move |(prefix, property)| {
                rule(format!("{prefix}-{name}"), property, value)
            })
        });
        let fonts = extend.font_family.iter().map(|(name, stack)| {
            rule(format!("font-{name}"), "font-family", &font_stack_css(stack))
        });
        let heights = extend
            .height
            .iter()
            .map(|(name, value)| rule(format!("h-{name}"), "height", value));

        colors.chain(fonts).chain(heights).collect()
    }

    /// CSS for the token classes.
    pub fn render_token_classes(&self) -> String {
        stylesheet::render_rules(&self.token_rules())
    }

    /// CSS for the derived utility classes, values left as written.
    pub fn render_utilities(&self) -> String {
        stylesheet::render_rules(&self.utilities)
    }

    fn token_values(&self) -> impl Iterator<Item = (&str, &str)> {
        let extend = &self.theme.extend;
        extend
            .colors
            .iter()
            .chain(extend.height.iter())
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .chain(self.utilities.iter().flat_map(|(class, declarations)| {
                declarations
                    .values()
                    .map(move |value| (class.as_str(), value.as_str()))
            }))
    }
}

/// Quote font names containing spaces and join the stack.
fn font_stack_css(stack: &[String]) -> String {
    stack
        .iter()
        .map(|font| {
            if font.contains(' ') && !font.starts_with(['"', '\'']) {
                format!("\"{font}\"")
            } else {
                font.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn rule(class: String, property: &str, value: &str) -> (String, BTreeMap<String, String>) {
    (
        class,
        BTreeMap::from([(property.to_string(), value.to_string())]),
    )
}

fn pairs(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = StyleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dark_mode, DarkMode::Class);
        assert!(config.theme.extend.colors.contains_key("brand"));
        assert!(config.theme.extend.colors.contains_key("color-background"));
    }

    #[test]
    fn test_default_tokens_resolve_against_default_palette() {
        let config = StyleConfig::default();
        let sheet = Stylesheet::from_palette(&Palette::default());

        let resolved = config.resolve(&sheet).expect("Should resolve");
        assert_eq!(resolved.colors["brand"], crate::palette::light::BRAND);
        assert_eq!(resolved.height["footer"], crate::palette::sizing::FOOTER_HEIGHT);
        assert_eq!(
            resolved.font_family["display"],
            "\"Playfair Display\", Georgia, serif"
        );
        assert!(resolved.utilities["glass-panel"]["border"].starts_with("1px solid rgba("));
    }

    #[test]
    fn test_resolve_reports_every_missing_property() {
        let config = StyleConfig::default();
        let sheet = Stylesheet::parse(":root { --color-brand: #000; }");

        let Err(Error::UnresolvedTokens(missing)) = config.resolve(&sheet) else {
            panic!("expected unresolved tokens");
        };
        assert!(missing.iter().any(|t| t.token == "color-background"));
        assert!(missing.iter().any(|t| t.property == "height-footer"));
        assert!(!missing.iter().any(|t| t.token == "brand"));
    }

    #[test]
    fn test_referenced_properties_sorted_unique() {
        let props = StyleConfig::default().referenced_properties();
        let mut sorted = props.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(props, sorted);
        assert!(props.contains(&"color-brand".to_string()));
        assert!(props.contains(&"color-glass".to_string()));
    }

    #[test]
    fn test_validate_rejects_empty_content() {
        let config = StyleConfig {
            content: vec![],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_bad_token_name() {
        let mut config = StyleConfig::default();
        config
            .theme
            .extend
            .colors
            .insert("Brand Color".to_string(), "#fff".to_string());
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_bad_glob() {
        let config = StyleConfig {
            content: vec!["src/{a,b".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_json_keys_are_camel_case() {
        let json = serde_json::to_string(&StyleConfig::default()).expect("Should serialize");
        assert!(json.contains("\"darkMode\":\"class\""));
        assert!(json.contains("\"fontFamily\""));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = StyleConfig::from_json(r#"{ "darkMode": "media" }"#).expect("Should parse");
        assert_eq!(config.dark_mode, DarkMode::Media);
        assert_eq!(config.content, StyleConfig::default().content);
    }

    #[test]
    fn test_from_json_partial_extend() {
        let config = StyleConfig::from_json(
            r#"{ "content": ["src/**/*.rs"], "theme": { "extend": { "colors": { "sky": "var(--sky)" } } } }"#,
        )
        .expect("Should parse");
        assert_eq!(config.theme.extend.colors.len(), 1);
        assert!(!config.theme.extend.height.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("nested").join(DEFAULT_CONFIG_FILE);

        let config = StyleConfig {
            dark_mode: DarkMode::Media,
            ..Default::default()
        };
        config.save(&path).expect("Should save");

        let loaded = StyleConfig::load(&path).expect("Should load");
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let config = StyleConfig::load_or_default(&StyleConfig::default_path(temp_dir.path()))
            .expect("Should fall back");
        assert_eq!(config, StyleConfig::default());
    }

    #[test]
    fn test_token_class_names() {
        let classes = StyleConfig::default().token_class_names();
        assert!(classes.contains(&"bg-brand".to_string()));
        assert!(classes.contains(&"text-color-muted".to_string()));
        assert!(classes.contains(&"font-display".to_string()));
        assert!(classes.contains(&"h-footer".to_string()));
        assert!(classes.contains(&"glass-panel".to_string()));
    }

    #[test]
    fn test_token_rules_cover_every_token_class() {
        let config = StyleConfig::default();
        let rules = config.token_rules();
        assert_eq!(
            rules["bg-color-background"]["background-color"],
            "var(--color-background)"
        );
        assert_eq!(rules["border-color-border"]["border-color"], "var(--color-border)");
        assert_eq!(rules["h-footer"]["height"], "var(--height-footer)");
        assert_eq!(
            rules["font-display"]["font-family"],
            "\"Playfair Display\", Georgia, serif"
        );

        let generated: Vec<String> = rules.into_keys().collect();
        for class in config.token_class_names() {
            assert!(
                generated.contains(&class) || config.utilities.contains_key(&class),
                "{class} has no rule"
            );
        }
    }

    #[test]
    fn test_render_token_classes_follow_config() {
        let mut config = StyleConfig::default();
        config
            .theme
            .extend
            .font_family
            .insert("sans".to_string(), vec!["Nunito".to_string(), "sans-serif".to_string()]);

        let css = config.render_token_classes();
        assert!(css.contains(".text-brand {\n  color: var(--color-brand);\n}"));
        assert!(css.contains(".font-sans {\n  font-family: Nunito, sans-serif;\n}"));
        assert!(!css.contains("Inter"));
    }

    #[test]
    fn test_render_utilities() {
        let css = StyleConfig::default().render_utilities();
        assert!(css.contains(".text-gradient-brand {"));
        assert!(css.contains("backdrop-filter: blur(12px);"));
    }

    #[test]
    fn test_dark_mode_display() {
        assert_eq!(DarkMode::Class.to_string(), "class");
        assert_eq!(DarkMode::Media.to_string(), "media");
    }
}
