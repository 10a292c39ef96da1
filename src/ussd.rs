//! Menu-driven USSD session interpreter
//!
//! The gateway resupplies the full `*`-delimited selection trail on every
//! request, so interpretation is split the same way each time: a pure
//! routing pass over the trail, then execution of whatever collaborator
//! action the routed step calls for. No session state survives between
//! requests on this side.

mod catalog;
mod menu;
mod screen;

#[cfg(test)]
mod proptests;

pub use catalog::{BundleCatalog, BundleOffer};
pub use menu::{route, Action, Step};
pub use screen::{Screen, Trail};

use crate::gateway::{PaymentOrder, PaymentService, SmsSender};
use std::collections::HashMap;
use std::sync::Arc;

/// Floor for checkout amounts, in TZS
const MIN_ORDER_AMOUNT: u32 = 1000;

/// Dispatched once a student accepts the registration consent prompt
const WELCOME_MESSAGE: &str =
    "Welcome to SomaBot! Text any study question to this number and we'll help you learn. Karibu!";

const PURCHASE_FAILED_TEXT: &str = "Payment could not be initiated. Please try again later.";
const REGISTERED_TEXT: &str = "You are registered! A welcome SMS is on its way.";
const REGISTRATION_FAILED_TEXT: &str =
    "Registration could not be completed. Please try again later.";

/// Executes routed menu steps against the payment and messaging gateways.
pub struct UssdInterpreter {
    catalog: BundleCatalog,
    payments: Arc<dyn PaymentService>,
    messenger: Arc<dyn SmsSender>,
    product_name: String,
    sender_id: String,
}

impl UssdInterpreter {
    pub fn new(
        catalog: BundleCatalog,
        payments: Arc<dyn PaymentService>,
        messenger: Arc<dyn SmsSender>,
        product_name: String,
        sender_id: String,
    ) -> Self {
        Self {
            catalog,
            payments,
            messenger,
            product_name,
            sender_id,
        }
    }

    /// Interpret one request: route the trail, execute any action, and
    /// return the screen to render.
    pub async fn respond(&self, identity: &str, raw_trail: &str) -> Screen {
        let trail = Trail::parse(raw_trail);
        match route(&trail, &self.catalog) {
            Step::Screen(screen) => screen,
            Step::Action(action) => self.execute(identity, action).await,
        }
    }

    async fn execute(&self, identity: &str, action: Action) -> Screen {
        match action {
            Action::PurchaseBundle { offer, payer_phone } => {
                self.purchase(identity, &offer, payer_phone).await
            }
            Action::Register => self.register(identity).await,
        }
    }

    async fn purchase(&self, identity: &str, offer: &BundleOffer, payer_phone: String) -> Screen {
        let amount = offer.price.max(MIN_ORDER_AMOUNT);
        let mut metadata = HashMap::new();
        metadata.insert("bundle".to_string(), offer.description.clone());
        metadata.insert("subscriber".to_string(), identity.to_string());

        let order = PaymentOrder {
            product_name: self.product_name.clone(),
            phone_number: payer_phone,
            currency_code: "TZS".to_string(),
            amount,
            metadata,
        };

        match self.payments.create_order(&order).await {
            Ok(receipt) => {
                tracing::info!(
                    identity = %identity,
                    transaction = %receipt.transaction_id,
                    amount,
                    "Checkout order placed"
                );
                Screen::end(format!(
                    "Payment request sent. Confirm on your phone to activate {}.",
                    offer.description
                ))
            }
            Err(e) => {
                tracing::error!(identity = %identity, error = %e, "Checkout order failed");
                Screen::end(PURCHASE_FAILED_TEXT)
            }
        }
    }

    async fn register(&self, identity: &str) -> Screen {
        match self
            .messenger
            .send(WELCOME_MESSAGE, &[identity.to_string()], &self.sender_id)
            .await
        {
            Ok(_) => Screen::end(REGISTERED_TEXT),
            Err(e) => {
                tracing::error!(identity = %identity, error = %e, "Welcome dispatch failed");
                Screen::end(REGISTRATION_FAILED_TEXT)
            }
        }
    }
}
