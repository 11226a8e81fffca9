//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - window/document helpers (title, body class, reload)
//! - [`fetch_listing`] - Listing request via the Fetch API

pub mod dom;
mod fetch;

pub use fetch::fetch_listing;
