//! Search filtering for the file view.

use crate::entry::FileDescriptor;

/// Case-insensitive substring match on the file name.
///
/// An empty term matches everything.
pub fn name_matches(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

/// Keep the entries whose name contains `term`, preserving order.
pub fn filter_files(files: &[FileDescriptor], term: &str) -> Vec<FileDescriptor> {
    files
        .iter()
        .filter(|file| name_matches(&file.name, term))
        .cloned()
        .collect()
}
