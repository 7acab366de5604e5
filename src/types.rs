//! Wire types for the registration API

use serde::{Deserialize, Serialize};

/// Payload sent to the registration endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub contact: String,
}

/// Reply to a successful registration.
///
/// The endpoint answers with token fields and only sometimes a `message`;
/// everything except the message is ignored here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Structured body carried by an error-status reply
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
