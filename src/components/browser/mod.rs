//! Folder and file browsing components.
//!
//! Components:
//! - [`FolderList`] - Folder grid, plus loading/error/empty states
//! - [`Toolbar`] - Search box and sort select for the file view
//! - [`FileList`] - Tiles for the open folder

mod file_list;
mod folder_list;
mod notice;
mod toolbar;

pub use file_list::FileList;
pub use folder_list::FolderList;
pub use toolbar::Toolbar;
