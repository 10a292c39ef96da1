//! Mobile checkout orders via the Africa's Talking payments API

use super::{GatewayError, GatewayResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

const LIVE_URL: &str = "https://payments.africastalking.com/mobile/checkout/request";
const SANDBOX_URL: &str = "https://payments.sandbox.africastalking.com/mobile/checkout/request";

/// Gateway status meaning the payer has been prompted on their handset
const PENDING_CONFIRMATION: &str = "PendingConfirmation";

/// Payment order seam
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Create a checkout order. Resolves once the gateway has accepted or
    /// rejected the order; settlement happens out of band.
    async fn create_order(&self, order: &PaymentOrder) -> GatewayResult<PaymentReceipt>;
}

/// One checkout request for one payer
#[derive(Debug, Clone)]
pub struct PaymentOrder {
    pub product_name: String,
    pub phone_number: String,
    pub currency_code: String,
    pub amount: u32,
    pub metadata: HashMap<String, String>,
}

/// Gateway acknowledgement of a pending checkout
#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    pub transaction_id: String,
    pub description: String,
}

/// Africa's Talking mobile checkout client
pub struct AtPaymentsClient {
    client: Client,
    username: String,
    api_key: String,
    base_url: &'static str,
}

impl AtPaymentsClient {
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
impl PaymentService for AtPaymentsClient {
    async fn create_order(&self, order: &PaymentOrder) -> GatewayResult<PaymentReceipt> {
        let request = CheckoutRequest {
            username: self.username.clone(),
            product_name: order.product_name.clone(),
            phone_number: order.phone_number.clone(),
            currency_code: order.currency_code.clone(),
            amount: order.amount,
            metadata: order.metadata.clone(),
        };

        let response = self
            .client
            .post(self.base_url)
            .header("apiKey", &self.api_key)
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    GatewayError::Network(format!("Checkout request failed: {e}"))
                } else {
                    GatewayError::Unexpected(format!("Checkout request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            GatewayError::Network(format!("Failed to read checkout response: {e}"))
        })?;

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(GatewayError::Auth(format!("HTTP {status}: {body}")));
        }
        if !status.is_success() {
            return Err(GatewayError::Rejected(format!("HTTP {status}: {body}")));
        }

        let parsed: CheckoutResponse = serde_json::from_str(&body).map_err(|e| {
            GatewayError::Unexpected(format!(
                "Failed to parse checkout response: {e} - body: {body}"
            ))
        })?;

        if parsed.status != PENDING_CONFIRMATION {
            return Err(GatewayError::Rejected(format!(
                "{}: {}",
                parsed.status, parsed.description
            )));
        }

        Ok(PaymentReceipt {
            transaction_id: parsed.transaction_id.unwrap_or_default(),
            description: parsed.description,
        })
    }
}

// Africa's Talking wire types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckoutRequest {
    username: String,
    product_name: String,
    phone_number: String,
    currency_code: String,
    amount: u32,
    metadata: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckoutResponse {
    status: String,
    #[serde(default)]
    description: String,
    transaction_id: Option<String>,
}
