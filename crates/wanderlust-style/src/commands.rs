//! Subcommand implementations. Each returns the text to print so `main`
//! stays a thin dispatcher.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use wanderlust_core::{
    ContentScanner, CoverageReport, DarkMode, Palette, ResolvedTokens, StyleConfig, Stylesheet,
    render_palette,
};

/// Errors surfaced by the CLI.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the token pipeline.
    #[error(transparent)]
    Core(#[from] wanderlust_core::Error),

    /// Files use token classes outside the content list (strict mode).
    #[error("{0} file(s) use token classes but are not covered by the content list")]
    IncompleteContent(usize),

    /// Refused to overwrite an existing file.
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// Serialization of command output failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for CLI commands.
pub type CliResult<T> = std::result::Result<T, CliError>;

/// Load `path` if given, else the default file under `root` if present, else defaults.
pub fn load_config(path: Option<&Path>, root: &Path) -> CliResult<StyleConfig> {
    let config = match path {
        Some(path) => StyleConfig::load(path)?,
        None => StyleConfig::load_or_default(&StyleConfig::default_path(root))?,
    };
    Ok(config)
}

/// The host stylesheet: a CSS file if given, else the generated palette.
pub fn load_stylesheet(path: Option<&Path>, config: &StyleConfig) -> CliResult<Stylesheet> {
    match path {
        Some(path) => {
            let css = fs::read_to_string(path)
                .map_err(|e| wanderlust_core::Error::file_system(path, e))?;
            Ok(Stylesheet::parse(&css))
        }
        None => Ok(Stylesheet::parse(&render_palette(
            &Palette::default(),
            config.dark_mode,
        ))),
    }
}

/// Result of `check`.
#[derive(Debug)]
pub struct CheckOutcome {
    /// Resolved token values.
    pub tokens: ResolvedTokens,
    /// Content coverage, when a root was scanned.
    pub coverage: Option<CoverageReport>,
}

impl CheckOutcome {
    /// Human-readable summary.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "ok: {} color, {} font, {} height token(s) and {} utility class(es) resolve",
            self.tokens.colors.len(),
            self.tokens.font_family.len(),
            self.tokens.height.len(),
            self.tokens.utilities.len()
        );
        if let Some(report) = &self.coverage {
            let _ = writeln!(out, "scanned {} file(s)", report.scanned.len());
            for (path, classes) in &report.uncovered {
                let _ = writeln!(
                    out,
                    "warning: {} is not in the content list but uses {}",
                    path.display(),
                    classes.join(", ")
                );
            }
            for pattern in &report.empty_patterns {
                let _ = writeln!(out, "warning: content pattern {pattern} matches no files");
            }
            if !report.unused.is_empty() {
                let _ = writeln!(out, "unused token classes: {}", report.unused.join(", "));
            }
        }
        out
    }
}

/// Validate the configuration, resolve it and optionally check content coverage.
pub fn check(
    config: &StyleConfig,
    sheet: &Stylesheet,
    root: Option<&Path>,
    strict: bool,
) -> CliResult<CheckOutcome> {
    config.validate()?;
    let tokens = config.resolve(sheet)?;
    info!("All tokens resolve against {} custom properties", sheet.len());

    let coverage = match root {
        Some(root) => {
            let report = ContentScanner::new(root, config)?.coverage()?;
            if !report.is_complete() {
                warn!(
                    "{} file(s) use tokens outside the content list",
                    report.uncovered.len()
                );
                if strict {
                    return Err(CliError::IncompleteContent(report.uncovered.len()));
                }
            }
            Some(report)
        }
        None => None,
    };

    Ok(CheckOutcome { tokens, coverage })
}

/// Palette custom properties, token classes and utility classes.
pub fn css(config: &StyleConfig, dark_mode: Option<DarkMode>) -> String {
    let mode = dark_mode.unwrap_or(config.dark_mode);
    let mut out = render_palette(&Palette::default(), mode);
    out.push('\n');
    out.push_str(&config.render_token_classes());
    out.push_str(&config.render_utilities());
    out
}

/// Resolved tokens as JSON or as an aligned listing.
pub fn tokens(config: &StyleConfig, sheet: &Stylesheet, json: bool) -> CliResult<String> {
    let resolved = config.resolve(sheet)?;
    if json {
        return Ok(serde_json::to_string_pretty(&resolved)?);
    }

    let rows: Vec<(String, &String)> = resolved
        .colors
        .iter()
        .map(|(k, v)| (format!("colors.{k}"), v))
        .chain(resolved.font_family.iter().map(|(k, v)| (format!("fontFamily.{k}"), v)))
        .chain(resolved.height.iter().map(|(k, v)| (format!("height.{k}"), v)))
        .collect();
    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (key, value) in rows {
        let _ = writeln!(out, "{key:<width$}  {value}");
    }
    Ok(out)
}

/// Write the default configuration to `path`.
pub fn init(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::AlreadyExists(path.to_path_buf()));
    }
    StyleConfig::default().save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_check_default_config_against_generated_palette() {
        let config = StyleConfig::default();
        let sheet = load_stylesheet(None, &config).expect("Should build stylesheet");

        let outcome = check(&config, &sheet, None, false).expect("Should pass");
        assert!(outcome.coverage.is_none());
        assert!(outcome.summary().starts_with("ok: 6 color, 2 font, 2 height"));
    }

    #[test]
    fn test_check_fails_on_undefined_property() {
        let config = StyleConfig::default();
        let sheet = Stylesheet::parse(":root { --color-brand: #000; }");

        let result = check(&config, &sheet, None, false);
        assert!(matches!(
            result,
            Err(CliError::Core(wanderlust_core::Error::UnresolvedTokens(_)))
        ));
    }

    #[test]
    fn test_check_strict_rejects_uncovered_files() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let stray = temp_dir.path().join("pages").join("about.html");
        fs::create_dir_all(stray.parent().expect("has parent")).expect("Should create dir");
        fs::write(&stray, r#"<p class="text-brand">"#).expect("Should write");

        let config = StyleConfig::default();
        let sheet = load_stylesheet(None, &config).expect("Should build stylesheet");

        let lenient = check(&config, &sheet, Some(temp_dir.path()), false).expect("Should pass");
        assert!(lenient.summary().contains("pages"));

        let strict = check(&config, &sheet, Some(temp_dir.path()), true);
        assert!(matches!(strict, Err(CliError::IncompleteContent(1))));
    }

    #[test]
    fn test_load_stylesheet_from_file() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("theme.css");
        fs::write(&path, ":root { --color-brand: #123456; }").expect("Should write");

        let sheet = load_stylesheet(Some(&path), &StyleConfig::default()).expect("Should load");
        assert_eq!(sheet.get("color-brand"), Some("#123456"));
    }

    #[test]
    fn test_css_respects_dark_mode_override() {
        let config = StyleConfig::default();
        assert!(css(&config, None).contains(".dark {"));
        assert!(css(&config, Some(DarkMode::Media)).contains("prefers-color-scheme"));
        assert!(css(&config, None).contains(".text-gradient-brand {"));
    }

    #[test]
    fn test_css_includes_every_token_class() {
        let config = StyleConfig::default();
        let output = css(&config, None);
        for class in config.token_class_names() {
            assert!(output.contains(&format!(".{class} {{")), "no rule for {class}");
        }
    }

    #[test]
    fn test_ui_crate_content_is_fully_covered() {
        let ui_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../wanderlust-ui");
        let config = load_config(None, &ui_root).expect("Should load");
        let sheet = load_stylesheet(None, &config).expect("Should build stylesheet");

        let outcome = check(&config, &sheet, Some(&ui_root), true).expect("Should be covered");
        let report = outcome.coverage.expect("Should scan");
        assert!(report.is_complete());
        assert!(report.empty_patterns.is_empty());
        assert!(
            report
                .scanned
                .iter()
                .any(|p| p.ends_with("src/components/footer.rs"))
        );
    }

    #[test]
    fn test_tokens_listing() {
        let config = StyleConfig::default();
        let sheet = load_stylesheet(None, &config).expect("Should build stylesheet");

        let text = tokens(&config, &sheet, false).expect("Should list");
        assert!(text.contains("colors.brand"));
        assert!(text.contains("height.footer"));

        let json = tokens(&config, &sheet, true).expect("Should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("Should be JSON");
        assert!(value["colors"]["brand"].is_string());
        assert!(value["fontFamily"]["sans"].is_string());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = StyleConfig::default_path(temp_dir.path());

        init(&path, false).expect("Should write");
        assert!(matches!(init(&path, false), Err(CliError::AlreadyExists(_))));
        init(&path, true).expect("Should overwrite");

        let loaded = load_config(None, temp_dir.path()).expect("Should load");
        assert_eq!(loaded, StyleConfig::default());
    }
}
