//! Browser localStorage backend for [`PreferenceStore`].

use web_sys::Storage;

use crate::error::StorageError;
use crate::theme::PreferenceStore;

/// Get localStorage, `None` outside a browser or when access is denied.
#[inline]
pub fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// [`PreferenceStore`] backed by `window.localStorage`.
///
/// Reads fail soft (missing storage reads as "no value"); writes report
/// [`StorageError`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::SaveFailed)
    }
}
