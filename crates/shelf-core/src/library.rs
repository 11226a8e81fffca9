//! Classifier: shelves a flat listing into category buckets.

use std::collections::BTreeMap;

use crate::catalog::{self, Category};
use crate::entry::FileDescriptor;
use crate::format::format_size;

/// Classified listing, one bucket per non-empty [`Category`].
///
/// Buckets keep listing order and are never modified after classification;
/// sorting and filtering always produce new sequences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Library {
    buckets: BTreeMap<Category, Vec<FileDescriptor>>,
}

impl Library {
    /// Partition `entries` by extension.
    ///
    /// Each kept entry gets its `size_formatted` filled in. Deny-listed and
    /// unmapped extensions are dropped.
    pub fn classify(entries: impl IntoIterator<Item = FileDescriptor>) -> Self {
        let mut buckets: BTreeMap<Category, Vec<FileDescriptor>> = BTreeMap::new();

        for mut entry in entries {
            let extension = entry.extension();
            if catalog::is_excluded(&extension) {
                continue;
            }
            let Some(category) = Category::from_extension(&extension) else {
                continue;
            };
            entry.size_formatted = format_size(entry.size);
            buckets.entry(category).or_default().push(entry);
        }

        Self { buckets }
    }

    /// True when no entry survived classification.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Files shelved under `category` (empty slice when none).
    pub fn files(&self, category: Category) -> &[FileDescriptor] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Non-empty folders in display order with their file counts.
    pub fn folders(&self) -> Vec<(Category, usize)> {
        self.buckets
            .iter()
            .map(|(category, files)| (*category, files.len()))
            .collect()
    }

    /// Total number of shelved files.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EXTENSIONS;

    #[test]
    fn test_classify_places_each_extension_in_its_bucket() {
        let entries = EXTENSIONS
            .iter()
            .map(|(ext, _)| FileDescriptor::new(format!("file.{ext}"), 10));
        let library = Library::classify(entries);

        for (ext, category) in EXTENSIONS {
            let name = format!("file.{ext}");
            let homes: Vec<_> = Category::ALL
                .into_iter()
                .filter(|c| library.files(*c).iter().any(|f| f.name == name))
                .collect();
            assert_eq!(homes, vec![*category], "{name}");
        }
        assert_eq!(library.len(), EXTENSIONS.len());
    }

    #[test]
    fn test_classify_drops_excluded_and_unmapped() {
        let library = Library::classify([
            FileDescriptor::new("index.html", 1),
            FileDescriptor::new("script.js", 1),
            FileDescriptor::new("style.CSS", 1),
            FileDescriptor::new("notes.txt", 1),
            FileDescriptor::new("assets", 0),
        ]);
        assert!(library.is_empty());
        assert!(library.folders().is_empty());
    }

    #[test]
    fn test_classify_preserves_listing_order() {
        let library = Library::classify([
            FileDescriptor::new("b.png", 1),
            FileDescriptor::new("a.jpg", 1),
            FileDescriptor::new("c.jpeg", 1),
        ]);
        let names: Vec<_> = library
            .files(Category::Images)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["b.png", "a.jpg", "c.jpeg"]);
    }

    #[test]
    fn test_folders_follow_display_order() {
        let library = Library::classify([
            FileDescriptor::new("kit.unitypackage", 1),
            FileDescriptor::new("Player.cs", 1),
            FileDescriptor::new("boom.wav", 1),
            FileDescriptor::new("hit.mp3", 1),
        ]);
        assert_eq!(
            library.folders(),
            vec![
                (Category::Sounds, 2),
                (Category::Scripts, 1),
                (Category::UnityPackages, 1),
            ]
        );
        assert!(library.files(Category::Images).is_empty());
    }
}
