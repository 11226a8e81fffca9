//! Core logic for the shelf browser.
//!
//! Everything here is independent of the UI framework:
//! - [`FileDescriptor`], [`parse_listing`] - Listing entries from the contents API
//! - [`Category`], [`catalog`] - Extension → folder table
//! - [`Library`] - Classified buckets
//! - [`sort_files`], [`filter_files`] - File view pipeline stages
//! - [`ViewState`], [`LoadState`] - Screen state machine
//! - [`Theme`], [`PreferenceStore`], [`LocalStorage`] - Persisted theme choice

pub mod catalog;
mod entry;
pub mod error;
pub mod format;
mod library;
mod search;
mod sort;
mod storage;
mod theme;
mod view;

pub use catalog::Category;
pub use entry::{FileDescriptor, parse_listing};
pub use error::{FetchError, StorageError};
pub use library::Library;
pub use search::{filter_files, name_matches};
pub use sort::{SortMode, compare_names, sort_files};
pub use storage::{LocalStorage, local_storage};
pub use theme::{PreferenceStore, Theme};
pub use view::{EmptyReason, LoadState, Screen, ViewState};
