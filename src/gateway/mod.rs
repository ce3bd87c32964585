// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

//! Axum-based HTTP gateway serving the dashboard core to a browser front-end.
//!
//! - Request body size limits (64KB max)
//! - Request timeouts (30s default)
//! - One view-state controller per process, behind a mutex together with the
//!   chat transcript, so every transition (sign-out included) runs to
//!   completion before the next request observes it
//! - A one-second status clock that shares nothing with the RBAC state

use crate::assistant::{self, AssistantBackend, ChatSession, MockBackend};
use crate::config::Config;
use crate::rbac::RoleId;
use crate::session::ViewStateController;
use crate::telemetry::{MockTelemetry, TelemetrySource};
use anyhow::{Context, Result};
use axum::{http::StatusCode, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub mod api;

/// Maximum request body size (64KB) — prevents memory exhaustion
pub const MAX_BODY_SIZE: usize = 65_536;
/// Default request timeout (30s) — prevents slow-loris attacks
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Per-process session: view state plus the transcript tied to the current
/// sign-in. Guarded by a single lock so sign-out discards both at once.
pub struct GatewaySession {
    pub controller: ViewStateController,
    chat: Option<ChatSession>,
}

impl GatewaySession {
    fn new(sidebar_default: bool) -> Self {
        Self {
            controller: ViewStateController::new(sidebar_default),
            chat: None,
        }
    }

    /// Chat of the current sign-in, created on first use. `None` while
    /// logged out.
    pub fn chat(
        &mut self,
        backend: &Arc<dyn AssistantBackend>,
    ) -> Option<(RoleId, ChatSession)> {
        let role = self.controller.role()?;
        let chat = self
            .chat
            .get_or_insert_with(|| ChatSession::new(Arc::clone(backend), role))
            .clone();
        Some((role, chat))
    }

    /// Sign out and drop the transcript. Handles cloned earlier keep
    /// writing into the discarded transcript only.
    pub fn sign_out(&mut self) {
        self.controller.sign_out();
        self.chat = None;
    }
}

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<GatewaySession>>,
    pub assistant: Arc<dyn AssistantBackend>,
    pub telemetry: Arc<dyn TelemetrySource>,
    /// Latest tick of the status clock.
    pub clock: watch::Receiver<DateTime<Utc>>,
    /// Monotonic start instant for uptime calculation.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        sidebar_default: bool,
        assistant: Arc<dyn AssistantBackend>,
        telemetry: Arc<dyn TelemetrySource>,
        clock: watch::Receiver<DateTime<Utc>>,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(GatewaySession::new(sidebar_default))),
            assistant,
            telemetry,
            clock,
            started_at: Instant::now(),
        }
    }

    /// Lock the session. Never hold the guard across `.await`.
    pub fn session(&self) -> MutexGuard<'_, GatewaySession> {
        self.session
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Start the status clock. Ticks every `period` until every receiver is gone.
pub fn spawn_status_clock(period: Duration) -> watch::Receiver<DateTime<Utc>> {
    let (tx, rx) = watch::channel(Utc::now());
    let period = period.max(Duration::from_millis(1));

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            if tx.send(Utc::now()).is_err() {
                break;
            }
        }
    });

    rx
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Assemble the router with the standard layers.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(api::routes())
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn assistant_backend(config: &Config) -> Arc<dyn AssistantBackend> {
    match assistant::create_backend(&config.assistant) {
        Ok(backend) => Arc::from(backend),
        Err(e) => {
            // Chat stays usable; every request surfaces as a connection error.
            tracing::warn!("Assistant unavailable: {e}");
            Arc::new(MockBackend::failing())
        }
    }
}

/// Run the HTTP gateway until Ctrl-C.
pub async fn run_gateway(host: &str, port: u16, config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("Invalid listen address {host}:{port}"))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    let actual_port = listener.local_addr()?.port();

    let clock = spawn_status_clock(Duration::from_millis(config.dashboard.status_tick_millis));
    let telemetry: Arc<dyn TelemetrySource> = Arc::new(MockTelemetry);
    let state = AppState::new(
        config.dashboard.sidebar_open,
        assistant_backend(&config),
        telemetry,
        clock,
    );
    let timeout = Duration::from_secs(config.gateway.request_timeout_secs.max(1));
    let app = build_router(state, timeout);

    println!("📡 NetVision gateway listening on http://{host}:{actual_port}");
    println!("  GET  /api/roles            — role catalog");
    println!("  GET  /api/matrix           — access matrix");
    println!("  POST /api/session/role     — {{\"role\": \"CIO\"}}");
    println!("  POST /api/session/navigate — {{\"view\": \"reports\"}}");
    println!("  GET  /health               — health check");
    tracing::info!(%addr, "gateway started");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for shutdown signal: {e}");
            }
        })
        .await
        .context("Gateway server error")?;

    tracing::info!("gateway stopped");
    Ok(())
}
