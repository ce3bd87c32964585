// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

use crate::assistant::ChatMessage;
use crate::navigation::NavigationItem;
use crate::rbac::{AccessLevel, Feature, RoleId};
use crate::session::{Menu, ViewState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── System Status ────────────────────────────────────────────────

#[derive(Debug, Serialize, Clone)]
pub struct SystemStatus {
    pub version: String,
    pub uptime_secs: u64,
    /// Latest tick of the status clock.
    pub now: DateTime<Utc>,
}

// ── Catalog ──────────────────────────────────────────────────────

#[derive(Debug, Serialize, Clone)]
pub struct AccessResponse {
    pub feature: Feature,
    pub role: RoleId,
    pub level: AccessLevel,
    pub chip: &'static str,
}

#[derive(Debug, Serialize, Clone)]
pub struct MatrixCell {
    pub role: RoleId,
    pub level: AccessLevel,
    pub chip: &'static str,
}

#[derive(Debug, Serialize, Clone)]
pub struct MatrixRowResponse {
    pub feature: Feature,
    pub name: &'static str,
    pub cells: Vec<MatrixCell>,
}

#[derive(Debug, Serialize, Clone)]
pub struct NavResponse {
    pub role: RoleId,
    pub visible: Vec<&'static NavigationItem>,
    pub hidden: Vec<&'static NavigationItem>,
}

// ── Session ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SelectRoleRequest {
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub view: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct SessionResponse {
    pub state: ViewState,
    pub menu: Option<Menu>,
    /// Welcome line of the active role.
    pub welcome: Option<&'static str>,
    /// Set on navigation responses: whether the request changed the view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied: Option<bool>,
}

// ── Assistant ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct ChatResponse {
    pub role: RoleId,
    /// AI Root Cause level of the role.
    pub access: AccessLevel,
    pub pending: bool,
    pub suggestions: &'static [&'static str],
    pub transcript: Vec<ChatMessage>,
}
