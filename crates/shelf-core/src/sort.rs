//! Sorting for the file view.
//!
//! Pure functions; the bucket is never reordered in place.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::entry::FileDescriptor;

/// Sort order selected in the file view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// Case-insensitive name, ascending (default)
    #[default]
    AToZ,
    /// Exact reverse of `AToZ`
    ZToA,
    /// Most recently modified first
    Newest,
    /// Least recently modified first
    Oldest,
}

impl SortMode {
    /// All modes in select-box order.
    pub const ALL: [SortMode; 4] = [Self::AToZ, Self::ZToA, Self::Newest, Self::Oldest];

    /// Value used in the `<option value=..>` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AToZ => "A-Z",
            Self::ZToA => "Z-A",
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
        }
    }

    /// Option text shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::AToZ => "Name (A-Z)",
            Self::ZToA => "Name (Z-A)",
            Self::Newest => "Newest first",
            Self::Oldest => "Oldest first",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("unknown sort mode '{}'", s))
    }
}

/// Total order on names: case-insensitive first, then exact name, then hash.
pub fn compare_names(a: &FileDescriptor, b: &FileDescriptor) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.sha.cmp(&b.sha))
}

/// Compare by modification time, newest first.
///
/// Entries without a timestamp compare equal to each other and after every
/// timestamped entry, so a stable sort leaves them in listing order.
fn compare_recency(a: &FileDescriptor, b: &FileDescriptor, newest_first: bool) -> Ordering {
    match (a.modified, b.modified) {
        (Some(x), Some(y)) if newest_first => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Return a sorted copy of `files`.
pub fn sort_files(files: &[FileDescriptor], mode: SortMode) -> Vec<FileDescriptor> {
    let mut sorted = files.to_vec();
    match mode {
        SortMode::AToZ => sorted.sort_by(compare_names),
        SortMode::ZToA => sorted.sort_by(|a, b| compare_names(b, a)),
        SortMode::Newest => sorted.sort_by(|a, b| compare_recency(a, b, true)),
        SortMode::Oldest => sorted.sort_by(|a, b| compare_recency(a, b, false)),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(files: &[FileDescriptor]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    fn sample() -> Vec<FileDescriptor> {
        vec![
            FileDescriptor::new("beta.mp3", 1),
            FileDescriptor::new("Alpha.mp3", 1),
            FileDescriptor::new("alpha.wav", 1),
            FileDescriptor::new("Gamma.wav", 1),
            FileDescriptor::new("alpha.mp3", 1),
        ]
    }

    #[test]
    fn test_sort_a_to_z_is_case_insensitive() {
        let sorted = sort_files(&sample(), SortMode::AToZ);
        assert_eq!(
            names(&sorted),
            ["Alpha.mp3", "alpha.mp3", "alpha.wav", "beta.mp3", "Gamma.wav"]
        );
    }

    #[test]
    fn test_sort_z_to_a_is_exact_reverse() {
        let files = sample();
        let mut forward = sort_files(&files, SortMode::AToZ);
        forward.reverse();
        assert_eq!(forward, sort_files(&files, SortMode::ZToA));
    }

    #[test]
    fn test_sort_does_not_touch_input() {
        let files = sample();
        let before = files.clone();
        let _ = sort_files(&files, SortMode::ZToA);
        assert_eq!(files, before);
    }

    #[test]
    fn test_sort_by_recency() {
        let files = vec![
            FileDescriptor::new("undated-1.png", 1),
            FileDescriptor::new("old.png", 1).with_modified(100),
            FileDescriptor::new("undated-2.png", 1),
            FileDescriptor::new("new.png", 1).with_modified(300),
            FileDescriptor::new("mid.png", 1).with_modified(200),
        ];

        assert_eq!(
            names(&sort_files(&files, SortMode::Newest)),
            ["new.png", "mid.png", "old.png", "undated-1.png", "undated-2.png"]
        );
        assert_eq!(
            names(&sort_files(&files, SortMode::Oldest)),
            ["old.png", "mid.png", "new.png", "undated-1.png", "undated-2.png"]
        );
    }

    #[test]
    fn test_recency_ignores_hash() {
        let mut a = FileDescriptor::new("a.png", 1);
        a.sha = "ffff".into();
        let mut b = FileDescriptor::new("b.png", 1);
        b.sha = "0000".into();
        let files = vec![a, b];
        assert_eq!(names(&sort_files(&files, SortMode::Newest)), ["a.png", "b.png"]);
    }

    #[test]
    fn test_sort_mode_parse() {
        for mode in SortMode::ALL {
            assert_eq!(mode.as_str().parse::<SortMode>(), Ok(mode));
        }
        assert!("size".parse::<SortMode>().is_err());
        assert_eq!(SortMode::default(), SortMode::AToZ);
    }
}
