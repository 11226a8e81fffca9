//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Page title and header text.
pub const APP_NAME: &str = "Keo's Stuff Library";

/// Subtitle under the header.
pub const APP_TAGLINE: &str = "Sounds, models, scripts and packages, free to download";

// =============================================================================
// Network Configuration
// =============================================================================

/// Repository contents endpoint listed on startup.
pub const LISTING_URL: &str = "https://api.github.com/repos/KeoLotso/KeosRandomStuff/contents";

// =============================================================================
// Theme Configuration
// =============================================================================

/// localStorage key for the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Global class set on `<body>` in light mode (see `assets/theme.css`).
pub const LIGHT_MODE_CLASS: &str = "light-mode";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
