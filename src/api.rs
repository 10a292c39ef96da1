//! HTTP webhook surface for the messaging gateway

mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::pipeline::ReplyPipeline;
use crate::ussd::UssdInterpreter;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ReplyPipeline>,
    pub ussd: Arc<UssdInterpreter>,
}

impl AppState {
    pub fn new(pipeline: Arc<ReplyPipeline>, ussd: Arc<UssdInterpreter>) -> Self {
        Self { pipeline, ussd }
    }
}
