//! Mock implementations for testing
//!
//! These mocks enable pipeline and interpreter tests without real I/O.

use crate::gateway::{
    GatewayError, GatewayResult, PaymentOrder, PaymentReceipt, PaymentService, SmsReceipt,
    SmsSender,
};
use crate::llm::{LlmError, LlmService};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

// ============================================================================
// Mock LLM Service
// ============================================================================

/// Mock LLM service that returns queued replies
pub struct MockLlm {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    /// Record of all prompts submitted
    pub prompts: Mutex<Vec<String>>,
}

impl MockLlm {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful reply
    pub fn queue_reply(&self, reply: &str) {
        self.replies.lock().unwrap().push_back(Ok(reply.to_string()));
    }

    /// Queue an error
    pub fn queue_error(&self, error: LlmError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    /// Get recorded prompts
    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockLlm {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmService for MockLlm {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::network("No mock reply queued")))
    }

    fn model_id(&self) -> &str {
        "mock-model"
    }
}

// ============================================================================
// Mock SMS Sender
// ============================================================================

/// One captured send call
#[derive(Debug, Clone)]
pub struct RecordedSend {
    pub message: String,
    pub recipients: Vec<String>,
    pub sender: String,
}

/// Mock SMS sender that accepts everything unless a failure is queued
pub struct MockSmsSender {
    failures: Mutex<VecDeque<GatewayError>>,
    /// Record of all send calls made
    pub sends: Mutex<Vec<RecordedSend>>,
}

impl MockSmsSender {
    pub fn new() -> Self {
        Self {
            failures: Mutex::new(VecDeque::new()),
            sends: Mutex::new(Vec::new()),
        }
    }

    /// Queue a failure for the next send call
    pub fn queue_failure(&self, error: GatewayError) {
        self.failures.lock().unwrap().push_back(error);
    }

    /// Get recorded send calls
    pub fn recorded_sends(&self) -> Vec<RecordedSend> {
        self.sends.lock().unwrap().clone()
    }
}

impl Default for MockSmsSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsSender for MockSmsSender {
    async fn send(
        &self,
        message: &str,
        recipients: &[String],
        sender: &str,
    ) -> GatewayResult<SmsReceipt> {
        self.sends.lock().unwrap().push(RecordedSend {
            message: message.to_string(),
            recipients: recipients.to_vec(),
            sender: sender.to_string(),
        });

        if let Some(error) = self.failures.lock().unwrap().pop_front() {
            return Err(error);
        }

        Ok(SmsReceipt {
            accepted: recipients.len(),
            message_ids: recipients
                .iter()
                .enumerate()
                .map(|(i, _)| format!("ATXid_mock{i}"))
                .collect(),
        })
    }
}

// ============================================================================
// Mock Payment Service
// ============================================================================

/// Mock payment service that returns queued outcomes
pub struct MockPaymentService {
    outcomes: Mutex<VecDeque<GatewayResult<PaymentReceipt>>>,
    /// Record of all orders placed
    pub orders: Mutex<Vec<PaymentOrder>>,
}

impl MockPaymentService {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            orders: Mutex::new(Vec::new()),
        }
    }

    /// Queue the outcome for the next checkout call
    pub fn queue_outcome(&self, outcome: GatewayResult<PaymentReceipt>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    /// Get recorded orders
    pub fn recorded_orders(&self) -> Vec<PaymentOrder> {
        self.orders.lock().unwrap().clone()
    }
}

impl Default for MockPaymentService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentService for MockPaymentService {
    async fn create_order(&self, order: &PaymentOrder) -> GatewayResult<PaymentReceipt> {
        self.orders.lock().unwrap().push(order.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Unexpected("No mock outcome queued".to_string())))
    }
}
