// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

use super::error::ApiError;
use super::types::*;
use crate::gateway::AppState;
use crate::navigation::{NavigationProjector, ViewId};
use crate::pages::{PageGate, PageView};
use crate::rbac::{AccessMatrix, PermissionResolver, RoleCatalog, Role, RoleId};
use crate::session::ViewStateController;
use crate::telemetry::{gate_series, Metric, SeriesView};
use axum::{
    extract::{Json, Path, State},
    routing::{get, post},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/status", get(get_status))
        .route("/api/roles", get(get_roles))
        .route("/api/matrix", get(get_matrix))
        .route("/api/access/{feature}/{role}", get(get_access))
        .route("/api/nav/{role}", get(get_nav))
        // Session
        .route("/api/session", get(get_session))
        .route("/api/session/role", post(select_role))
        .route("/api/session/navigate", post(navigate))
        .route("/api/session/sidebar", post(toggle_sidebar))
        .route("/api/session/sign-out", post(sign_out))
        // Gated consumers
        .route("/api/page", get(get_page))
        .route("/api/telemetry/{metric}", get(get_telemetry))
}

fn session_response(ctl: &ViewStateController, applied: Option<bool>) -> SessionResponse {
    SessionResponse {
        state: ctl.state(),
        menu: ctl.menu(),
        welcome: ctl.role().map(|role| role.role().welcome),
        applied,
    }
}

/// Active role, or 409.
fn active_role(state: &AppState) -> Result<RoleId, ApiError> {
    state.session().controller.role().ok_or(ApiError::NoActiveRole)
}

// ── Handlers ─────────────────────────────────────────────────────

async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.started_at.elapsed().as_secs(),
        now: *state.clock.borrow(),
    })
}

async fn get_roles() -> Json<&'static [Role]> {
    Json(RoleCatalog::all())
}

async fn get_matrix() -> Json<Vec<MatrixRowResponse>> {
    let rows = AccessMatrix::rows()
        .into_iter()
        .map(|row| MatrixRowResponse {
            feature: row.feature,
            name: row.feature.name(),
            cells: row
                .grants
                .into_iter()
                .map(|(role, level)| MatrixCell {
                    role,
                    level,
                    chip: level.chip_label(),
                })
                .collect(),
        })
        .collect();
    Json(rows)
}

async fn get_access(
    Path((feature, role)): Path<(String, String)>,
) -> Result<Json<AccessResponse>, ApiError> {
    let (feature, role) = PermissionResolver::parse_pair(&feature, &role)?;
    let level = PermissionResolver::resolve(feature, role);
    Ok(Json(AccessResponse {
        feature,
        role,
        level,
        chip: level.chip_label(),
    }))
}

async fn get_nav(Path(role): Path<String>) -> Result<Json<NavResponse>, ApiError> {
    let role: RoleId = role.parse()?;
    Ok(Json(NavResponse {
        role,
        visible: NavigationProjector::visible(role),
        hidden: NavigationProjector::hidden(role),
    }))
}

async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session();
    Json(session_response(&session.controller, None))
}

async fn select_role(
    State(state): State<AppState>,
    Json(payload): Json<SelectRoleRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let role: RoleId = payload.role.parse()?;
    let mut session = state.session();
    session.controller.select_role(role);
    Ok(Json(session_response(&session.controller, None)))
}

async fn navigate(
    State(state): State<AppState>,
    Json(payload): Json<NavigateRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let view: ViewId = payload.view.parse()?;
    let mut session = state.session();
    let outcome = session.controller.navigate(view);
    Ok(Json(session_response(
        &session.controller,
        Some(outcome.is_applied()),
    )))
}

async fn toggle_sidebar(State(state): State<AppState>) -> Json<SessionResponse> {
    let mut session = state.session();
    session.controller.toggle_sidebar();
    Json(session_response(&session.controller, None))
}

async fn sign_out(State(state): State<AppState>) -> Json<SessionResponse> {
    let mut session = state.session();
    session.sign_out();
    Json(session_response(&session.controller, None))
}

async fn get_page(State(state): State<AppState>) -> Result<Json<PageView>, ApiError> {
    let (role, view) = {
        let session = state.session();
        let ctl = &session.controller;
        (ctl.role().ok_or(ApiError::NoActiveRole)?, ctl.view())
    };
    Ok(Json(PageGate::render(view, role)))
}

async fn get_telemetry(
    State(state): State<AppState>,
    Path(metric): Path<String>,
) -> Result<Json<SeriesView>, ApiError> {
    let metric = Metric::parse(&metric).ok_or(ApiError::UnknownMetric(metric))?;
    let role = active_role(&state)?;
    let level = PermissionResolver::resolve(metric.feature(), role);
    Ok(Json(gate_series(level, state.telemetry.series(metric))))
}
