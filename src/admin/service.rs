//! Service start/stop requests.

use std::fmt;

use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::error_handling::AdminError;

/// Action to perform on a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAction {
    /// Start the service.
    Start,
    /// Stop the service.
    Stop,
}

impl ServiceAction {
    /// The URL path segment for this action.
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceAction::Start => "start",
            ServiceAction::Stop => "stop",
        }
    }
}

impl fmt::Display for ServiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a start/stop request.
///
/// A reported non-success status is not an error at this layer; the caller
/// decides whether to treat it as one.
#[derive(Debug, Clone)]
pub struct ServiceOutcome {
    /// Whether the server reported `status == "success"`.
    pub success: bool,
    /// The full response payload.
    pub payload: Value,
}

/// Starts or stops a named service on an ArcGIS Server machine.
///
/// Sends a form-encoded POST to
/// `/arcgis/admin/services/<service>/<action>` carrying the token. The
/// service identifier has the form `FolderName/ServiceName.ServiceType`.
///
/// # Errors
///
/// Returns `AdminError::Connectivity` if the machine cannot be reached and
/// `AdminError::MalformedResponse` if the body is not JSON. A reported
/// failure status is returned as a `ServiceOutcome` with `success == false`,
/// not as an error.
pub async fn set_service_state(
    client: &Client,
    address: &str,
    port: u16,
    service: &str,
    action: ServiceAction,
    token: &str,
) -> Result<ServiceOutcome, AdminError> {
    let url = format!("http://{address}:{port}/arcgis/admin/services/{service}/{action}");
    debug!("Service request URL: {url}");

    let form = [("token", token), ("f", "json")];

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

    let success = payload.get("status").and_then(Value::as_str) == Some("success");
    Ok(ServiceOutcome { success, payload })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_action_path_segments() {
        assert_eq!(ServiceAction::Start.as_str(), "start");
        assert_eq!(ServiceAction::Stop.as_str(), "stop");
        assert_eq!(ServiceAction::Stop.to_string(), "stop");
    }
}
