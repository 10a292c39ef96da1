//! Outbound SMS via the Africa's Talking bulk messaging API

use super::{GatewayError, GatewayResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const LIVE_URL: &str = "https://api.africastalking.com/version1/messaging";
const SANDBOX_URL: &str = "https://api.sandbox.africastalking.com/version1/messaging";

/// Messaging dispatch seam
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send one message to the listed recipients under the given sender id
    async fn send(
        &self,
        message: &str,
        recipients: &[String],
        sender: &str,
    ) -> GatewayResult<SmsReceipt>;
}

/// Outcome of an accepted send
#[derive(Debug, Clone)]
pub struct SmsReceipt {
    pub accepted: usize,
    pub message_ids: Vec<String>,
}

/// Africa's Talking bulk messaging client
pub struct AtSmsClient {
    client: Client,
    username: String,
    api_key: String,
    base_url: &'static str,
}

impl AtSmsClient {
    pub fn new(username: String, api_key: String) -> Self {
        let base_url = if super::is_sandbox(&username) {
            SANDBOX_URL
        } else {
            LIVE_URL
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            username,
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl SmsSender for AtSmsClient {
    async fn send(
        &self,
        message: &str,
        recipients: &[String],
        sender: &str,
    ) -> GatewayResult<SmsReceipt> {
        let to = recipients.join(",");
        let form = [
            ("username", self.username.as_str()),
            ("to", to.as_str()),
            ("message", message),
            ("from", sender),
        ];

        let response = self
            .client
            .post(self.base_url)
            .header("apiKey", &self.api_key)
            .header("Accept", "application/json")
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    GatewayError::Network(format!("SMS send failed: {e}"))
                } else {
                    GatewayError::Unexpected(format!("SMS send failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(format!("Failed to read send response: {e}")))?;

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(GatewayError::Auth(format!("HTTP {status}: {body}")));
        }
        if !status.is_success() {
            return Err(GatewayError::Rejected(format!("HTTP {status}: {body}")));
        }

        let parsed: SendResponse = serde_json::from_str(&body).map_err(|e| {
            GatewayError::Unexpected(format!("Failed to parse send response: {e} - body: {body}"))
        })?;

        let data = parsed.sms_message_data;
        let message_ids: Vec<String> = data
            .recipients
            .iter()
            .filter(|r| r.is_accepted())
            .filter_map(|r| r.message_id.clone())
            .collect();
        let accepted = data
            .recipients
            .iter()
            .filter(|r| r.is_accepted())
            .count();

        if accepted == 0 {
            return Err(GatewayError::Rejected(format!(
                "No recipients accepted: {}",
                data.message
            )));
        }

        tracing::debug!(accepted, summary = %data.message, "Gateway accepted message");

        Ok(SmsReceipt {
            accepted,
            message_ids,
        })
    }
}

// Africa's Talking wire types

#[derive(Debug, Deserialize)]
struct SendResponse {
    #[serde(rename = "SMSMessageData")]
    sms_message_data: SmsMessageData,
}

#[derive(Debug, Deserialize)]
struct SmsMessageData {
    #[serde(rename = "Message")]
    message: String,
    #[serde(rename = "Recipients", default)]
    recipients: Vec<RecipientStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipientStatus {
    #[allow(dead_code)]
    number: String,
    status: String,
    message_id: Option<String>,
}

impl RecipientStatus {
    fn is_accepted(&self) -> bool {
        self.status == "Success"
    }
}
