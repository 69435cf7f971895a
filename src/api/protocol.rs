//! HTTP Protocol
//!
//! Route paths and the JSON bodies exchanged with clients.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Collection endpoint: create (POST) and prefix search (GET).
pub const ENDPOINT_CONTACTS: &str = "/v1/contact";
/// Single-contact endpoint: read (GET), update (PUT) and delete (DELETE).
pub const ENDPOINT_CONTACT: &str = "/v1/contact/:contact_id";

// --- Data Transfer Objects ---

/// Contact body as sent by clients.
///
/// Every field is optional on the wire so that missing values surface as
/// validation messages instead of deserialization failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Query string for prefix search (`?contactPrefix=...`).
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(rename = "contactPrefix")]
    pub contact_prefix: String,
}

/// Body returned with every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    /// Individual field violations, empty unless validation failed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}
