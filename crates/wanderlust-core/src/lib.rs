//! `Wanderlust` Core Library
//!
//! This crate provides the non-visual pieces of the `Wanderlust AI` front-end:
//! - Style token configuration (content globs, dark mode strategy, token extensions)
//! - Host stylesheet parsing, palette rendering and token resolution
//! - Content scanning to catch token classes used outside the content list
//! - Footer content and the clock it derives the copyright year from
//!
//! # Error Handling
//!
//! Fallible operations return [`Result`], whose error type is [`Error`].
//!
//! ```rust,ignore
//! use wanderlust_core::{Palette, StyleConfig, Stylesheet};
//!
//! let config = StyleConfig::default();
//! let tokens = config.resolve(&Stylesheet::from_palette(&Palette::default()))?;
//! ```

pub mod clock;
pub mod config;
pub mod content;
pub mod error;
pub mod footer;
pub mod glob;
pub mod palette;
pub mod stylesheet;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{
    DEFAULT_CONFIG_FILE, DarkMode, ResolvedTokens, StyleConfig, ThemeExtension, ThemeSection,
};
pub use content::{ContentScanner, CoverageReport, SKIPPED_DIRECTORIES, SOURCE_EXTENSIONS};
pub use error::{Error, Result, UnresolvedToken};
pub use footer::{BRAND_NAME, FooterLink, copyright_line, copyright_line_now};
pub use glob::GlobPattern;
pub use palette::Palette;
pub use stylesheet::{Stylesheet, Unresolved, render_palette, render_rules, var_references};
