//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for administrative API calls.
///
/// Sets only a user agent; timeouts stay at the transport defaults and the
/// refresh run blocks on each call in sequence.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client() -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .user_agent(concat!("locator_refresh/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
