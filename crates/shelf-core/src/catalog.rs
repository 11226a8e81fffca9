//! Extension catalog.
//!
//! One table maps lower-cased file extensions to the [`Category`] they are
//! shelved under. The classifier, the folder tiles, and the file tiles all
//! read from it, so adding an extension here is the only change needed to
//! surface a new file type.

use std::fmt;

/// Folder a file is shelved under.
///
/// Variant order is the display order of the folder grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Sounds,
    Models,
    Scripts,
    Images,
    UnityPackages,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Sounds,
        Category::Models,
        Category::Scripts,
        Category::Images,
        Category::UnityPackages,
    ];

    /// Folder name shown on tiles and in the page title.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sounds => "Sounds",
            Self::Models => "3D Models",
            Self::Scripts => "Scripts",
            Self::Images => "Images",
            Self::UnityPackages => "Unity Packages",
        }
    }

    /// Look up a folder by its display name.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Category for a lower-cased extension, `None` when unmapped.
    pub fn from_extension(extension: &str) -> Option<Self> {
        EXTENSIONS
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, category)| *category)
    }

    /// Whether files of this category get an inline audio player.
    pub fn is_playable(self) -> bool {
        matches!(self, Self::Sounds)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extension → category table.
pub const EXTENSIONS: &[(&str, Category)] = &[
    ("mp3", Category::Sounds),
    ("wav", Category::Sounds),
    ("fbx", Category::Models),
    ("obj", Category::Models),
    ("blend", Category::Models),
    ("cs", Category::Scripts),
    ("png", Category::Images),
    ("jpeg", Category::Images),
    ("jpg", Category::Images),
    ("unitypackage", Category::UnityPackages),
];

/// Site files that live in the same repository and are never listed.
pub const EXCLUDED_EXTENSIONS: &[&str] = &["html", "js", "css"];

/// Whether an extension is on the deny-list.
pub fn is_excluded(extension: &str) -> bool {
    EXCLUDED_EXTENSIONS.contains(&extension)
}

/// Lower-cased text after the last `.` of a file name.
///
/// A name without a dot yields the whole name, so `Makefile` becomes
/// `makefile` and simply fails the table lookup.
pub fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or_default().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_extension_maps_to_one_category() {
        for (ext, category) in EXTENSIONS {
            let hits: Vec<_> = Category::ALL
                .into_iter()
                .filter(|c| Category::from_extension(ext) == Some(*c))
                .collect();
            assert_eq!(hits, vec![*category], "extension {ext}");
        }
    }

    #[test]
    fn test_excluded_extensions_are_unmapped() {
        for ext in EXCLUDED_EXTENSIONS {
            assert!(is_excluded(ext));
            assert_eq!(Category::from_extension(ext), None);
        }
        assert!(!is_excluded("mp3"));
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("clip.MP3"), "mp3");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("Makefile"), "makefile");
        assert_eq!(extension_of("trailing."), "");
        assert_eq!(extension_of(""), "");
    }

    #[test]
    fn test_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::Models.to_string(), "3D Models");
        assert_eq!(Category::from_label("Videos"), None);
    }

    #[test]
    fn test_only_sounds_are_playable() {
        assert!(Category::Sounds.is_playable());
        assert!(!Category::Images.is_playable());
    }
}
