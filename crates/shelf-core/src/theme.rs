//! Light/dark theme preference.
//!
//! The choice is persisted as `"light"` or `"dark"` under a single key.
//! Anything else, including no value at all, means dark.

use std::fmt;

use crate::error::StorageError;

/// Key-value preference storage (browser localStorage in production).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Color theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value, falling back to dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_light(self) -> bool {
        self == Self::Light
    }

    /// Read the persisted theme.
    pub fn load(store: &impl PreferenceStore, key: &str) -> Self {
        Self::from_stored(store.get(key).as_deref())
    }

    /// Write this theme to the store.
    pub fn save(self, store: &impl PreferenceStore, key: &str) -> Result<(), StorageError> {
        store.set(key, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    /// In-memory store for tests.
    #[derive(Default)]
    pub struct MemoryStore(RefCell<HashMap<String, String>>);

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_missing_or_unknown_value_is_dark() {
        let store = MemoryStore::default();
        assert_eq!(Theme::load(&store, "theme"), Theme::Dark);

        store.set("theme", "solarized").unwrap();
        assert_eq!(Theme::load(&store, "theme"), Theme::Dark);
    }

    #[test]
    fn test_save_and_load() {
        let store = MemoryStore::default();
        Theme::Light.save(&store, "theme").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert_eq!(Theme::load(&store, "theme"), Theme::Light);
    }

    #[test]
    fn test_toggling_twice_restores_preference() {
        for initial in [None, Some("light"), Some("dark")] {
            let store = MemoryStore::default();
            if let Some(value) = initial {
                store.set("theme", value).unwrap();
            }
            let start = Theme::load(&store, "theme");

            let mut theme = start;
            for _ in 0..2 {
                theme = theme.toggled();
                theme.save(&store, "theme").unwrap();
            }

            assert_eq!(theme, start);
            assert_eq!(Theme::load(&store, "theme"), start);
        }
    }
}
