// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

//! Navigation catalog and its role-filtered projections.
//!
//! The sidebar renders `visible(role)` as live entries and `hidden(role)` as
//! greyed-out, locked entries so users can discover what exists without
//! being able to open it.

use crate::error::RbacError;
use crate::rbac::{Feature, RoleId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier of a navigable section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Dashboard,
    Devices,
    Metrics,
    Security,
    Reports,
    Ai,
    Settings,
}

impl ViewId {
    /// Catalog order.
    pub const ALL: [ViewId; 7] = [
        ViewId::Dashboard,
        ViewId::Devices,
        ViewId::Metrics,
        ViewId::Security,
        ViewId::Reports,
        ViewId::Ai,
        ViewId::Settings,
    ];

    /// Sections every role may open regardless of its navigation set.
    pub const UNIVERSAL: [ViewId; 2] = [ViewId::Dashboard, ViewId::Settings];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Devices => "devices",
            ViewId::Metrics => "metrics",
            ViewId::Security => "security",
            ViewId::Reports => "reports",
            ViewId::Ai => "ai",
            ViewId::Settings => "settings",
        }
    }

    /// Feature gating this page. Dashboard and settings are ungated.
    pub fn feature(self) -> Option<Feature> {
        match self {
            ViewId::Dashboard | ViewId::Settings => None,
            ViewId::Devices => Some(Feature::DeviceMonitoring),
            ViewId::Metrics => Some(Feature::QueryEngine),
            ViewId::Security => Some(Feature::SecurityControls),
            ViewId::Reports => Some(Feature::SlaReports),
            ViewId::Ai => Some(Feature::AiRootCause),
        }
    }

    pub fn is_universal(self) -> bool {
        Self::UNIVERSAL.contains(&self)
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ViewId::ALL
            .into_iter()
            .find(|view| view.as_str() == trimmed)
            .ok_or_else(|| RbacError::UnknownView(s.to_string()))
    }
}

/// A sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    pub id: ViewId,
    pub icon: &'static str,
    pub label: &'static str,
}

static NAV_CATALOG: [NavigationItem; 7] = [
    NavigationItem { id: ViewId::Dashboard, icon: "🏠", label: "Dashboard" },
    NavigationItem { id: ViewId::Devices, icon: "📡", label: "Devices" },
    NavigationItem { id: ViewId::Metrics, icon: "📊", label: "Metrics" },
    NavigationItem { id: ViewId::Security, icon: "🔒", label: "Security" },
    NavigationItem { id: ViewId::Reports, icon: "📋", label: "Reports" },
    NavigationItem { id: ViewId::Ai, icon: "🤖", label: "AI Assist" },
    NavigationItem { id: ViewId::Settings, icon: "⚙️", label: "Settings" },
];

/// Derives role-filtered menus from the static catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationProjector;

impl NavigationProjector {
    /// The full catalog in declared order.
    pub fn catalog() -> &'static [NavigationItem] {
        &NAV_CATALOG
    }

    /// Items in the role's navigation set, catalog order preserved.
    pub fn visible(role: RoleId) -> Vec<&'static NavigationItem> {
        let role = role.role();
        NAV_CATALOG.iter().filter(|item| role.declares(item.id)).collect()
    }

    /// Complement of [`visible`](Self::visible), catalog order preserved.
    pub fn hidden(role: RoleId) -> Vec<&'static NavigationItem> {
        let role = role.role();
        NAV_CATALOG.iter().filter(|item| !role.declares(item.id)).collect()
    }

    /// Whether the role may route to `view`: its navigation set plus the
    /// universal sections.
    pub fn is_reachable(role: RoleId, view: ViewId) -> bool {
        view.is_universal() || role.role().declares(view)
    }
}
