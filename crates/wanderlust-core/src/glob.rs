//! Content glob patterns.
//!
//! Supports the subset used in style content lists: `*`, `**`, `?` and a
//! single level of `{a,b}` alternation. Patterns are matched against paths
//! relative to the project root using `/` separators.

use std::path::Path;

use regex::Regex;

use crate::error::{Error, Result};

/// A compiled content glob.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    source: String,
    regex: Regex,
}

impl GlobPattern {
    /// Compile `pattern`.
    pub fn new(pattern: &str) -> Result<Self> {
        let normalized = normalize(pattern);
        if normalized.is_empty() {
            return Err(invalid(pattern, "pattern is empty"));
        }
        let translated = translate(&normalized).map_err(|reason| invalid(pattern, reason))?;
        let regex = Regex::new(&format!("^{translated}$"))
            .map_err(|e| invalid(pattern, &e.to_string()))?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as written in the configuration.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether a root-relative path string matches.
    pub fn is_match(&self, relative: &str) -> bool {
        self.regex.is_match(normalize(relative).as_str())
    }

    /// Whether a root-relative path matches.
    pub fn matches_path(&self, relative: &Path) -> bool {
        self.is_match(&to_slash(relative))
    }
}

/// Render a relative path with `/` separators.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn normalize(pattern: &str) -> String {
    let mut rest = pattern.trim();
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    rest.replace('\\', "/")
}

fn invalid(pattern: &str, reason: &str) -> Error {
    Error::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}

fn translate(pattern: &str) -> std::result::Result<String, &'static str> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut in_group = false;
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' if chars.get(i + 1) == Some(&'*') => {
                let at_segment_start = i == 0 || chars[i - 1] == '/';
                if !at_segment_start {
                    return Err("'**' must be a whole path segment");
                }
                match chars.get(i + 2) {
                    Some('/') => {
                        out.push_str("(?:.*/)?");
                        i += 3;
                    }
                    None => {
                        out.push_str(".*");
                        i += 2;
                    }
                    Some(_) => return Err("'**' must be a whole path segment"),
                }
                continue;
            }
            '*' => out.push_str("[^/]*"),
            '?' => out.push_str("[^/]"),
            '{' => {
                if in_group {
                    return Err("nested '{' is not supported");
                }
                in_group = true;
                out.push_str("(?:");
            }
            '}' => {
                if !in_group {
                    return Err("unbalanced '}'");
                }
                in_group = false;
                out.push(')');
            }
            ',' if in_group => out.push('|'),
            c => out.push_str(&regex::escape(&c.to_string())),
        }
        i += 1;
    }

    if in_group {
        return Err("unclosed '{'");
    }
    Ok(out)
}
