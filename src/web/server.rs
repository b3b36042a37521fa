// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/web/server.rs
// Version: 1.0.0
//
// This file implements the web server for the calculator. It serves the form,
// computes the estimate on form submission, and exposes the same calculation
// as a JSON endpoint.
//
// Tree Location:
// - src/web/server.rs (axum router and handlers)
// - Depends on: axum, tower, tower-http, core, config, web/page

use super::page::render_page;
use crate::config::{AppConfig, Theme};
use crate::core::roi::calculate_roi;
use crate::core::types::{FormInputs, RoiResult};
use crate::Result;
use crate::error::AppError;
use axum::{
    Form, Json, Router,
    extract::{Query, State},
    response::Html,
    routing::{get, post},
};
use log::{debug, info};
use serde::Deserialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

const LOG_TARGET: &str = "asic_roi::web";

/// Shared, read-only state of the web server
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

/// Query string accepted by the page routes
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub theme: Option<String>,
}

impl PageQuery {
    fn theme(&self, config: &AppConfig) -> Theme {
        self.theme
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or(config.default_theme)
    }
}

/// Build the router for the calculator
pub fn router(config: AppConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(index_handler).post(calculate_handler))
        .route("/api/roi", post(api_roi_handler))
        .route("/health", get(health_handler))
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(state)
}

/// Start the web server for the calculator page
///
/// Runs until the server fails or the process is stopped.
pub async fn start_web_server(config: AppConfig, addr: &str) -> Result<()> {
    let app = router(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Bind {
            addr: addr.to_string(),
            source: e,
        })?;

    info!(target: LOG_TARGET, "🌐 ROI calculator available at: http://{}", addr);
    info!(target: LOG_TARGET, "🔗 JSON endpoint: POST http://{}/api/roi", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Serve { source: e })
}

/// Empty form
async fn index_handler(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    debug!(target: LOG_TARGET, "📄 Serving calculator form");
    let theme = query.theme(&state.config);
    Html(render_page(&state.config, theme, &FormInputs::default(), None))
}

/// Form submission: echo the inputs back with the results
async fn calculate_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    Form(inputs): Form<FormInputs>,
) -> Html<String> {
    let result = calculate_roi(&inputs);
    info!(
        target: LOG_TARGET,
        "📊 Calculated ROI for '{}': {:.2} days",
        inputs.model, result.days_to_roi
    );
    let theme = query.theme(&state.config);
    Html(render_page(&state.config, theme, &inputs, Some(&result)))
}

async fn api_roi_handler(Json(inputs): Json<FormInputs>) -> Json<RoiResult> {
    debug!(target: LOG_TARGET, "🔌 API calculation request for '{}'", inputs.model);
    Json(calculate_roi(&inputs))
}

async fn health_handler() -> &'static str {
    "ok"
}

// Changelog:
// - v1.0.0 (2026-10-18): Calculator router with form, JSON API and health check.
