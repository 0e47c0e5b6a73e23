//! Host stylesheet custom properties.
//!
//! Parses `--name: value;` declarations out of CSS rule blocks, renders a
//! palette as `:root` plus a dark-mode block, and substitutes `var(--name)`
//! references.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::DarkMode;
use crate::palette::Palette;

/// A declaration that defines a custom property: `--name: value`.
static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^--([A-Za-z0-9_-]+)\s*:(.*)$").unwrap_or_else(|_| unreachable!())
});

/// Comments are stripped before parsing.
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap_or_else(|_| unreachable!()));

/// Why a value could not be fully substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unresolved {
    /// The property is never defined.
    Missing(String),
    /// Definitions refer back to themselves.
    Cycle(String),
}

impl Unresolved {
    /// The property at fault.
    pub fn property(&self) -> &str {
        match self {
            Self::Missing(name) | Self::Cycle(name) => name,
        }
    }
}

/// Custom property definitions of a stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    properties: BTreeMap<String, String>,
}

impl Stylesheet {
    /// Collect custom property definitions from CSS text.
    ///
    /// Only declarations inside rule blocks count; selectors such as
    /// `.card--active:hover` never define anything. The first definition of
    /// a name wins, so light `:root` values take precedence over later
    /// dark-mode overrides.
    pub fn parse(css: &str) -> Self {
        let css = COMMENT.replace_all(css, "");
        let mut properties = BTreeMap::new();
        for declaration in block_declarations(&css) {
            let Some(caps) = DEFINITION.captures(declaration.trim()) else {
                continue;
            };
            let name = caps[1].to_string();
            let value = caps[2].trim().to_string();
            properties.entry(name).or_insert(value);
        }
        tracing::debug!(count = properties.len(), "Parsed stylesheet custom properties");
        Self { properties }
    }

    /// Stylesheet defining the light values of `palette`.
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            properties: palette.light.clone(),
        }
    }

    /// Whether `--name` is defined.
    pub fn defines(&self, name: &str) -> bool {
        self.properties.contains_key(name.trim_start_matches("--"))
    }

    /// The raw value of `--name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .get(name.trim_start_matches("--"))
            .map(String::as_str)
    }

    /// Number of defined properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no properties are defined.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Substitute every `var(--x)` in `value`, following nested references
    /// and fallbacks.
    pub fn substitute(&self, value: &str) -> Result<String, Unresolved> {
        self.substitute_visiting(value, &mut BTreeSet::new())
    }

    /// `visiting` holds the properties whose definitions are being expanded.
    fn substitute_visiting(
        &self,
        value: &str,
        visiting: &mut BTreeSet<String>,
    ) -> Result<String, Unresolved> {
        let mut out = String::with_capacity(value.len());
        let mut last = 0;
        while let Some(call) = next_var_call(value, last) {
            out.push_str(&value[last..call.start]);
            last = call.end;

            let replacement = match (self.properties.get(call.name), call.fallback) {
                (Some(defined), _) => {
                    if !visiting.insert(call.name.to_string()) {
                        return Err(Unresolved::Cycle(call.name.to_string()));
                    }
                    let expanded = self.substitute_visiting(defined, visiting);
                    visiting.remove(call.name);
                    expanded?
                }
                (None, Some(fallback)) => self.substitute_visiting(fallback, visiting)?,
                (None, None) => return Err(Unresolved::Missing(call.name.to_string())),
            };
            out.push_str(&replacement);
        }
        out.push_str(&value[last..]);
        Ok(out)
    }
}

/// One `var(--name[, fallback])` call inside a value.
#[derive(Debug)]
struct VarCall<'a> {
    /// Byte offset of `var(`.
    start: usize,
    /// Byte offset just past the closing `)`.
    end: usize,
    name: &'a str,
    fallback: Option<&'a str>,
}

/// The first well-formed `var()` call at or after `from`.
///
/// Parentheses are balanced so a fallback may itself hold `var()` or other
/// functions. An unterminated call runs to the end of the value, as CSS
/// closes open functions at the end of a declaration.
fn next_var_call(value: &str, from: usize) -> Option<VarCall<'_>> {
    let mut search = from;
    while let Some(offset) = value[search..].find("var(") {
        let start = search + offset;
        let args_start = start + "var(".len();
        search = args_start;

        if value[..start].ends_with(is_ident_char) {
            continue;
        }

        let (args_len, comma) = argument_list(&value[args_start..]);
        let args_end = args_start + args_len;
        let (name_part, fallback) = match comma {
            Some(comma) => (
                &value[args_start..args_start + comma],
                Some(value[args_start + comma + 1..args_end].trim()),
            ),
            None => (&value[args_start..args_end], None),
        };
        let Some(name) = name_part.trim().strip_prefix("--") else {
            continue;
        };
        if name.is_empty() || !name.chars().all(is_ident_char) {
            continue;
        }

        return Some(VarCall {
            start,
            end: (args_end + 1).min(value.len()),
            name,
            fallback,
        });
    }
    None
}

/// Length of the argument list that follows an opening `(`, up to its
/// matching `)`, and the offset of its first top-level comma.
fn argument_list(args: &str) -> (usize, Option<usize>) {
    let mut depth = 0usize;
    let mut comma = None;
    for (i, byte) in args.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' if depth == 0 => return (i, comma),
            b')' => depth -= 1,
            b',' if depth == 0 && comma.is_none() => comma = Some(i),
            _ => {}
        }
    }
    (args.len(), comma)
}

const fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Declaration texts inside rule blocks, at any nesting level.
///
/// Text at the top level (selectors, `@import`) and text ended by `{` (a
/// nested selector or at-rule prelude) is never a declaration.
fn block_declarations(css: &str) -> Vec<&str> {
    let mut declarations = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, byte) in css.bytes().enumerate() {
        match byte {
            b'{' => {
                depth += 1;
                start = i + 1;
            }
            b'}' => {
                if depth > 0 {
                    declarations.push(&css[start..i]);
                    depth -= 1;
                }
                start = i + 1;
            }
            b';' => {
                if depth > 0 {
                    declarations.push(&css[start..i]);
                }
                start = i + 1;
            }
            _ => {}
        }
    }
    declarations
}

/// Custom property names referenced through `var(--x)` in `value`, in order.
///
/// Names inside fallbacks are included.
pub fn var_references(value: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut last = 0;
    while let Some(call) = next_var_call(value, last) {
        names.push(call.name.to_string());
        if let Some(fallback) = call.fallback {
            names.extend(var_references(fallback));
        }
        last = call.end;
    }
    names
}

/// Render `palette` as CSS: light values on `:root`, dark overrides per `mode`.
pub fn render_palette(palette: &Palette, mode: DarkMode) -> String {
    let mut css = String::new();
    css.push_str(":root {\n");
    write_declarations(&mut css, &palette.light, "  ");
    css.push_str("}\n");

    if palette.dark.is_empty() {
        return css;
    }

    css.push('\n');
    match mode {
        DarkMode::Class => {
            css.push_str(".dark {\n");
            write_declarations(&mut css, &palette.dark, "  ");
            css.push_str("}\n");
        }
        DarkMode::Media => {
            css.push_str("@media (prefers-color-scheme: dark) {\n  :root {\n");
            write_declarations(&mut css, &palette.dark, "    ");
            css.push_str("  }\n}\n");
        }
    }
    css
}

/// Render a rule block per class.
pub fn render_rules(rules: &BTreeMap<String, BTreeMap<String, String>>) -> String {
    let mut css = String::new();
    for (class, declarations) in rules {
        let _ = writeln!(css, ".{class} {{");
        for (property, value) in declarations {
            let _ = writeln!(css, "  {property}: {value};");
        }
        css.push_str("}\n");
    }
    css
}

fn write_declarations(css: &mut String, values: &BTreeMap<String, String>, indent: &str) {
    for (name, value) in values {
        let _ = writeln!(css, "{indent}--{name}: {value};");
    }
}
