//! Content scanning.
//!
//! Walks the project tree, matches files against the configured content globs
//! and reports files that use token classes without being scanned. Those
//! files are the silent failure mode: their classes look unused and get purged.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::StyleConfig;
use crate::error::{Error, Result};
use crate::glob::{GlobPattern, to_slash};

/// Directories never descended into.
pub const SKIPPED_DIRECTORIES: &[&str] = &["target", "node_modules", ".git", "dist"];

/// Extensions of files that may carry class names.
pub const SOURCE_EXTENSIONS: &[&str] = &["rs", "html", "htm", "js", "ts", "jsx", "tsx", "md"];

/// Outcome of a coverage check.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    /// Files matched by at least one content glob.
    pub scanned: Vec<PathBuf>,
    /// Files outside every content glob that still use token classes,
    /// with the classes found.
    pub uncovered: BTreeMap<PathBuf, Vec<String>>,
    /// Token classes not used by any scanned file.
    pub unused: Vec<String>,
    /// Content globs that matched nothing.
    pub empty_patterns: Vec<String>,
}

impl CoverageReport {
    /// Whether every token-using file is scanned.
    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }
}

/// Scanner over a project root.
#[derive(Debug)]
pub struct ContentScanner {
    root: PathBuf,
    patterns: Vec<GlobPattern>,
    classes: Vec<String>,
    known: BTreeSet<String>,
}

impl ContentScanner {
    /// Prepare a scanner for `root` using the globs and tokens of `config`.
    pub fn new(root: impl Into<PathBuf>, config: &StyleConfig) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::file_system(&root, "content root is not a directory"));
        }

        let patterns = config.content_patterns()?;
        let classes = config.token_class_names();
        let known = classes.iter().cloned().collect();

        Ok(Self {
            root,
            patterns,
            classes,
            known,
        })
    }

    /// Project root being scanned.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a root-relative path is matched by any content glob.
    pub fn is_covered(&self, relative: &Path) -> bool {
        self.patterns.iter().any(|p| p.matches_path(relative))
    }

    /// Files matched by the content globs, sorted and relative to the root.
    pub fn scan(&self) -> Vec<PathBuf> {
        let files: Vec<PathBuf> = self
            .walk()
            .filter(|relative| self.is_covered(relative))
            .collect();
        debug!("Content globs matched {} file(s)", files.len());
        files
    }

    /// Token classes used in the file at the root-relative `relative` path.
    pub fn classes_in(&self, relative: &Path) -> Result<BTreeSet<String>> {
        let path = self.root.join(relative);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                debug!("Skipping non-UTF-8 file {}", path.display());
                return Ok(BTreeSet::new());
            }
            Err(e) => return Err(Error::file_system(&path, e)),
        };

        Ok(class_words(&text)
            .filter(|class| self.known.contains(*class))
            .map(str::to_string)
            .collect())
    }

    /// Check that every file using token classes is covered by a content glob.
    pub fn coverage(&self) -> Result<CoverageReport> {
        let mut report = CoverageReport::default();
        let mut used = BTreeSet::new();
        let mut matched_patterns = vec![false; self.patterns.len()];

        for relative in self.walk() {
            let mut covered = false;
            for (i, pattern) in self.patterns.iter().enumerate() {
                if pattern.matches_path(&relative) {
                    matched_patterns[i] = true;
                    covered = true;
                }
            }

            let is_source = relative
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| SOURCE_EXTENSIONS.contains(&e));
            if !covered && !is_source {
                continue;
            }

            let classes = self.classes_in(&relative)?;
            if covered {
                used.extend(classes);
                report.scanned.push(relative);
            } else if !classes.is_empty() {
                warn!(
                    "{} uses {} token class(es) but is not in the content list",
                    relative.display(),
                    classes.len()
                );
                report
                    .uncovered
                    .insert(relative, classes.into_iter().collect());
            }
        }

        report.unused = self
            .classes
            .iter()
            .filter(|c| !used.contains(*c))
            .cloned()
            .collect();
        report.empty_patterns = self
            .patterns
            .iter()
            .zip(matched_patterns)
            .filter(|(_, matched)| !matched)
            .map(|(p, _)| p.as_str().to_string())
            .collect();

        info!(
            scanned = report.scanned.len(),
            uncovered = report.uncovered.len(),
            unused = report.unused.len(),
            "Content coverage checked"
        );
        Ok(report)
    }

    fn walk(&self) -> impl Iterator<Item = PathBuf> + '_ {
        let mut files: Vec<PathBuf> = WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|entry| !is_skipped(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry: {e}");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.root)
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect();
        files.sort_by_key(|p| to_slash(p));
        files.into_iter()
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRECTORIES.contains(&name))
}

/// Candidate class names in `text`, with variant prefixes such as `dark:`
/// or `hover:` stripped.
fn class_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':')))
        .filter(|word| !word.is_empty())
        .filter_map(|word| word.rsplit(':').next())
}
