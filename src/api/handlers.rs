//! HTTP request handlers

use super::types::{
    AckResponse, DeliveryReportForm, ErrorResponse, HealthResponse, InboundSmsForm,
    UssdSessionForm,
};
use super::AppState;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the webhook router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Inbound student messages (two-way SMS)
        .route("/sms/callback", post(receive_sms))
        // Delivery reports for dispatched replies
        .route("/sms/delivery", post(receive_delivery_report))
        // Menu sessions
        .route("/ussd/callback", post(serve_ussd))
        // Liveness probe
        .route("/health", get(health))
        .with_state(state)
}

// ============================================================
// Inbound SMS
// ============================================================

async fn receive_sms(
    State(state): State<AppState>,
    Form(form): Form<InboundSmsForm>,
) -> Result<Json<AckResponse>, AppError> {
    if form.from.is_empty() || form.text.is_empty() {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    }

    tracing::info!(
        identity = %form.from,
        message_id = form.id.as_deref().unwrap_or("-"),
        incoming_chars = form.text.chars().count(),
        "Inbound SMS received"
    );

    let reply = state.pipeline.respond(&form.from, &form.text).await;
    tracing::debug!(
        identity = %form.from,
        reply_chars = reply.chars().count(),
        "Reply pipeline finished"
    );

    Ok(Json(AckResponse {
        status: "Message received and processing".to_string(),
    }))
}

// ============================================================
// Delivery Reports
// ============================================================

async fn receive_delivery_report(Form(form): Form<DeliveryReportForm>) -> Json<AckResponse> {
    if let Some(reason) = &form.failure_reason {
        tracing::warn!(
            message_id = %form.id,
            status = %form.status,
            phone = %form.phone_number,
            reason = %reason,
            "Reply delivery failed"
        );
    } else {
        tracing::info!(
            message_id = %form.id,
            status = %form.status,
            phone = %form.phone_number,
            "Delivery report received"
        );
    }

    Json(AckResponse {
        status: "Delivery report received".to_string(),
    })
}

// ============================================================
// USSD Sessions
// ============================================================

async fn serve_ussd(
    State(state): State<AppState>,
    Form(form): Form<UssdSessionForm>,
) -> Result<String, AppError> {
    if form.phone_number.is_empty() {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    }

    tracing::info!(
        session = %form.session_id,
        service = %form.service_code,
        identity = %form.phone_number,
        trail = %form.text,
        "USSD request received"
    );

    let screen = state.ussd.respond(&form.phone_number, &form.text).await;
    Ok(screen.render())
}

// ============================================================
// Health
// ============================================================

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    BadRequest(String),
    #[allow(dead_code)] // Reserved for fault paths that cannot degrade in place
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
