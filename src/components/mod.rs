//! UI components built with Leptos.
//!
//! - [`Shell`] - Page layout, switches between folder and file views
//! - [`header`] - Title bar with back button and theme toggle
//! - [`browser`] - Folder grid, toolbar, and file tiles
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod header;
pub mod icons;
mod shell;

pub use shell::Shell;
