//! View state for the two-screen browser.
//!
//! [`ViewState`] is the single value the UI renders from: which screen is
//! showing, the active sort mode, and the search term. Transitions are
//! methods on it, and [`ViewState::visible_files`] is the sort → filter
//! pipeline the file view renders.

use crate::catalog::Category;
use crate::entry::FileDescriptor;
use crate::library::Library;
use crate::search::filter_files;
use crate::sort::{SortMode, sort_files};

/// Progress of the startup listing fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Request in flight
    #[default]
    Loading,
    /// Listing fetched and classified
    Ready(Library),
    /// Request failed; the cause was logged
    Failed,
}

/// Which screen is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Folder grid (default)
    #[default]
    Browsing,
    /// File list of one folder
    Inspecting(Category),
}

/// Why the file view has nothing to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyReason {
    /// The folder itself has no files
    EmptyFolder,
    /// The search term matched nothing
    NoMatches,
}

/// Everything the renderers need besides the library itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub screen: Screen,
    pub sort_mode: SortMode,
    pub search: String,
}

impl ViewState {
    /// Open a folder. The sort mode carries over from the previous folder.
    pub fn open(&mut self, category: Category) {
        self.screen = Screen::Inspecting(category);
    }

    /// Return to the folder grid and clear the search term.
    pub fn back(&mut self) {
        self.screen = Screen::Browsing;
        self.search.clear();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
    }

    /// Folder being inspected, if any.
    pub fn current_folder(&self) -> Option<Category> {
        match self.screen {
            Screen::Browsing => None,
            Screen::Inspecting(category) => Some(category),
        }
    }

    pub fn is_inspecting(&self) -> bool {
        self.current_folder().is_some()
    }

    /// Sorted, then filtered, files of the open folder.
    pub fn visible_files(&self, library: &Library) -> Vec<FileDescriptor> {
        let Some(category) = self.current_folder() else {
            return Vec::new();
        };
        let sorted = sort_files(library.files(category), self.sort_mode);
        filter_files(&sorted, &self.search)
    }

    /// Reason to show for an empty file view, `None` if something is visible.
    pub fn empty_reason(&self, library: &Library) -> Option<EmptyReason> {
        let category = self.current_folder()?;
        if library.files(category).is_empty() {
            Some(EmptyReason::EmptyFolder)
        } else if self.visible_files(library).is_empty() {
            Some(EmptyReason::NoMatches)
        } else {
            None
        }
    }

    /// Document title for the current screen.
    pub fn page_title(&self, app_name: &str) -> String {
        match self.screen {
            Screen::Browsing => app_name.to_string(),
            Screen::Inspecting(category) => format!("{} - {}", category.label(), app_name),
        }
    }
}
