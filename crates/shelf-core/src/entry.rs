//! Listing entries as returned by the repository contents API.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, Category};
use crate::error::FetchError;

/// One object of the listing array.
///
/// Every field defaults when missing so a malformed entry never rejects the
/// whole listing; it shows up as a tile with an empty name or a dead link
/// instead.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FileDescriptor {
    /// File name including extension
    pub name: String,
    /// Raw download URL (null for directories)
    pub download_url: Option<String>,
    /// Size in bytes
    pub size: u64,
    /// Git blob hash
    pub sha: String,
    /// Entry kind reported by the API ("file", "dir")
    #[serde(rename = "type")]
    pub kind: String,
    /// Last modification time (Unix seconds), when the listing provides one
    pub modified: Option<u64>,
    /// Human-readable size, filled in by the classifier
    #[serde(skip)]
    pub size_formatted: String,
}

impl FileDescriptor {
    /// Create a file entry with just a name and size.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            kind: "file".to_string(),
            ..Default::default()
        }
    }

    /// Builder-style download URL.
    pub fn with_download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = Some(url.into());
        self
    }

    /// Builder-style modification time.
    pub fn with_modified(mut self, modified: u64) -> Self {
        self.modified = Some(modified);
        self
    }

    /// Lower-cased extension of the name.
    pub fn extension(&self) -> String {
        catalog::extension_of(&self.name)
    }

    /// Category this entry belongs to, if its extension is mapped.
    pub fn category(&self) -> Option<Category> {
        Category::from_extension(&self.extension())
    }

    /// MIME type for the inline audio player, `None` for non-audio files.
    pub fn audio_mime(&self) -> Option<String> {
        self.category()
            .filter(|c| c.is_playable())
            .map(|_| format!("audio/{}", self.extension()))
    }

    /// Download target, empty when the listing had none.
    pub fn href(&self) -> &str {
        self.download_url.as_deref().unwrap_or_default()
    }
}

/// Parse the listing response body.
///
/// The API answers with a JSON array; anything else (an error object, a
/// single file) is a parse failure.
pub fn parse_listing(body: &str) -> Result<Vec<FileDescriptor>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::JsonParseError(e.to_string()))
}
