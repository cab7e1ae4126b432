//! Administrative token acquisition.

use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::error_handling::AdminError;

/// Requests a short-lived administrative token from an ArcGIS Server machine.
///
/// Sends a form-encoded POST to `generateToken` with the credentials, the
/// requested expiration in minutes, and `client=requestip` so the token is
/// bound to the caller's address.
///
/// # Errors
///
/// Returns `AdminError::Connectivity` if the machine cannot be reached,
/// `AdminError::Authentication` if the response carries no `token` field
/// (the server's `messages` payload is preserved in the error), and
/// `AdminError::MalformedResponse` if the body is not JSON.
pub async fn acquire_token(
    client: &Client,
    address: &str,
    port: u16,
    username: &str,
    password: &str,
    expiration_minutes: u32,
) -> Result<String, AdminError> {
    let url = format!("http://{address}:{port}/arcgis/admin/generateToken?f=json");
    debug!("Token request URL: {url}");

    let expiration = expiration_minutes.to_string();
    let form = [
        ("username", username),
        ("password", password),
        ("expiration", expiration.as_str()),
        ("client", "requestip"),
    ];

    let connectivity = |source: reqwest::Error| AdminError::Connectivity {
        address: address.to_string(),
        port,
        source,
    };

    let response = client
        .post(&url)
        .form(&form)
        .send()
        .await
        .map_err(connectivity)?;
    let body = response.text().await.map_err(connectivity)?;
    let payload: Value = serde_json::from_str(&body)?;

    match payload.get("token").and_then(Value::as_str) {
        Some(token) => Ok(token.to_string()),
        None => Err(AdminError::Authentication {
            messages: payload.get("messages").cloned().unwrap_or(payload),
        }),
    }
}
