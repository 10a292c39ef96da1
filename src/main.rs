//! SomaBot - two-way SMS/USSD educational assistant
//!
//! A Rust backend that answers student SMS questions with AI-generated
//! tutoring replies and serves a USSD menu for study bundles,
//! registration, and a daily quiz.

mod api;
mod config;
mod conversation;
mod gateway;
mod llm;
mod pipeline;
mod prompt;
mod shaper;
#[cfg(test)]
mod testing;
mod ussd;

use api::{create_router, AppState};
use config::AppConfig;
use conversation::ConversationStore;
use gateway::{AtPaymentsClient, AtSmsClient, PaymentService, SmsSender};
use llm::{GeminiClient, LlmService, LoggingService};
use pipeline::ReplyPipeline;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ussd::{BundleCatalog, UssdInterpreter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "somabot=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = AppConfig::from_env();

    if config.gemini_api_key.is_none() {
        tracing::warn!("No generation API key configured. Set GEMINI_API_KEY.");
    }
    if config.at_api_key.is_none() {
        tracing::warn!("No gateway API key configured. Set AT_API_KEY.");
    }

    // Generation service
    let gemini = GeminiClient::new(
        config.gemini_api_key.clone().unwrap_or_default(),
        config.gemini_model,
    );
    let llm: Arc<dyn LlmService> = Arc::new(LoggingService::new(Arc::new(gemini)));
    tracing::info!(model = %llm.model_id(), "Generation service initialized");

    // Gateway clients
    let gateway_key = config.at_api_key.clone().unwrap_or_default();
    let messenger: Arc<dyn SmsSender> = Arc::new(AtSmsClient::new(
        config.at_username.clone(),
        gateway_key.clone(),
    ));
    let payments: Arc<dyn PaymentService> =
        Arc::new(AtPaymentsClient::new(config.at_username.clone(), gateway_key));

    // Core components
    let store = Arc::new(ConversationStore::new());
    let pipeline = Arc::new(ReplyPipeline::new(
        store,
        llm,
        messenger.clone(),
        config.at_sender_id.clone(),
    ));
    let ussd = Arc::new(UssdInterpreter::new(
        BundleCatalog::standard(),
        payments,
        messenger,
        config.at_product_name.clone(),
        config.at_sender_id.clone(),
    ));

    // Create router
    let state = AppState::new(pipeline, ussd);
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("SomaBot server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
