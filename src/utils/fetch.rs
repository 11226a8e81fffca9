//! Network fetching for the repository listing.
//!
//! One GET per call: no retry, no timeout, no caching.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use shelf_core::{FetchError, FileDescriptor, parse_listing};

/// Fetch and parse the listing at `url`.
pub async fn fetch_listing(url: &str) -> Result<Vec<FileDescriptor>, FetchError> {
    let body = fetch_text(url).await?;
    parse_listing(&body)
}

/// Fetch text from a URL using the Fetch API.
///
/// Non-2xx responses are reported as [`FetchError::HttpError`].
async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let result = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            FetchError::NetworkError(e.as_string().unwrap_or_else(|| "Unknown error".to_string()))
        })?;
    let resp: Response = result
        .dyn_into()
        .map_err(|_| FetchError::ResponseReadFailed)?;

    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::ResponseReadFailed)
}
