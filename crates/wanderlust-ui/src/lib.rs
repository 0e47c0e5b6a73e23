//! `Wanderlust AI` UI - Leptos-based user interface.
//!
//! This crate provides the frontend components for the `Wanderlust AI` site.

// Cast wrapping is acceptable for display purposes
#![allow(clippy::cast_possible_wrap)]

pub mod app;
pub mod components;
pub mod theme;

pub use app::App;
pub use components::{Footer, FooterActions, provide_clock};
