//! Webhook request and response types

use serde::{Deserialize, Serialize};

/// Inbound SMS relayed by the gateway.
///
/// The gateway posts more fields than these (shortcode, date, link id);
/// unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct InboundSmsForm {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub text: String,
    /// Gateway-assigned message id
    #[serde(default)]
    pub id: Option<String>,
}

/// One USSD request within a dialed session
#[derive(Debug, Deserialize)]
pub struct UssdSessionForm {
    #[serde(default, rename = "sessionId")]
    pub session_id: String,
    #[serde(default, rename = "serviceCode")]
    pub service_code: String,
    #[serde(default, rename = "phoneNumber")]
    pub phone_number: String,
    /// Full `*`-delimited selection trail; empty on the first dial-in
    #[serde(default)]
    pub text: String,
}

/// Delivery report for a previously dispatched reply
#[derive(Debug, Deserialize)]
pub struct DeliveryReportForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(default, rename = "failureReason")]
    pub failure_reason: Option<String>,
}

/// Acknowledgement for gateway callbacks
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub status: String,
}

/// Liveness probe payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
