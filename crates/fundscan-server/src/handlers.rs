//! Request handlers.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use fundscan_analytics::{scan_statement, AnalyticsError};
use fundscan_core::types::{CasStatement, Date};

/// Service banner response.
#[derive(Serialize)]
pub struct ServiceInfo {
    message: String,
    version: String,
}

/// Service banner handler.
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Fundscan API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Error response.
#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Scan a parsed statement tree.
///
/// Accepts the folio/scheme/transaction tree as JSON and returns the full
/// scan report. A body that cannot be deserialized and a statement that
/// yields no analyzable funds are distinct conditions, but both map to 400.
pub async fn scan(payload: Result<Json<CasStatement>, JsonRejection>) -> Response {
    let Json(statement) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            warn!(%rejection, "rejected scan request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!(
                    "Error parsing statement: {rejection}"
                ))),
            )
                .into_response();
        }
    };

    match scan_statement(&statement, Date::today()) {
        Ok(report) => {
            info!(funds = report.funds.len(), "scan request served");
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(error @ AnalyticsError::NoValidFunds) => {
            warn!("scan request yielded no valid funds");
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(error.to_string()))).into_response()
        }
    }
}
