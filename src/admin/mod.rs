//! ArcGIS Server administrative API client.
//!
//! Two stateless request/response helpers: token acquisition and service
//! start/stop. Requests are form-encoded POSTs and responses are JSON, per
//! the ArcGIS REST API. No retries and no timeouts beyond the transport
//! defaults.

mod service;
mod token;

pub use service::{set_service_state, ServiceAction, ServiceOutcome};
pub use token::acquire_token;
