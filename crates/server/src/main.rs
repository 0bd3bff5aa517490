// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use str_projection_api::{
    ApiError, ProjectionRequest, ProjectionResponse, calculate_projection, sample_request,
};
use tracing::{error, info};

/// STR Projection Server - HTTP server for short-term rental investment projections
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Health check response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok` while the server is serving requests.
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for POST `/projection` endpoint.
///
/// Projects the submitted scenario.
async fn handle_projection(
    Json(req): Json<ProjectionRequest>,
) -> Result<Json<ProjectionResponse>, HttpError> {
    info!(
        seasonality = req.seasonality.as_deref().unwrap_or("moderate"),
        "Handling projection request"
    );

    let response: ProjectionResponse = calculate_projection(req)?;

    info!(
        cash_flow = response.cash_flow,
        recommendations = response.recommendations.len(),
        "Projection served"
    );

    Ok(Json(response))
}

/// Handler for GET `/projection/sample` endpoint.
///
/// Projects the built-in reference scenario.
async fn handle_sample_projection() -> Result<Json<ProjectionResponse>, HttpError> {
    info!("Handling sample projection request");
    let response: ProjectionResponse = calculate_projection(sample_request())?;
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router() -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/projection", post(handle_projection))
        .route("/projection/sample", get(handle_sample_projection))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing STR Projection Server");

    // Build router
    let app: Router = build_router();

    // Bind to address
    let addr: std::net::SocketAddr = std::net::SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
