//! Africa's Talking gateway clients
//!
//! Outbound SMS dispatch and mobile checkout orders. Both clients talk to
//! the sandbox hosts whenever the configured username is the sandbox
//! account, matching how the gateway routes its own SDKs.

mod payments;
mod sms;

pub use payments::{AtPaymentsClient, PaymentOrder, PaymentReceipt, PaymentService};
pub use sms::{AtSmsClient, SmsReceipt, SmsSender};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("Rejected by gateway: {0}")]
    Rejected(String),
    #[error("Unexpected gateway response: {0}")]
    Unexpected(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

pub(crate) fn is_sandbox(username: &str) -> bool {
    username == "sandbox"
}
