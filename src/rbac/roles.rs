// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

//! Role catalog.
//!
//! The four operator personas of the dashboard and everything the UI needs to
//! present them: label, icon, color, description, navigation set and welcome
//! text. The catalog is the single source of truth for these attributes;
//! nothing else in the crate hardcodes them.

use crate::error::RbacError;
use crate::navigation::ViewId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identity key of a role. The set is closed and fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleId {
    /// Network administrator: device management, automation, alerts.
    Admin,
    /// Service health, performance, query engine, AI insights.
    #[serde(rename = "SRE")]
    Sre,
    /// Business KPIs and SLA dashboards only.
    #[serde(rename = "CIO")]
    Cio,
    /// Threat detection, anomaly analysis, audit logs.
    Security,
}

impl RoleId {
    /// Every role, in declaration order.
    pub const ALL: [RoleId; 4] = [RoleId::Admin, RoleId::Sre, RoleId::Cio, RoleId::Security];

    pub fn as_str(self) -> &'static str {
        match self {
            RoleId::Admin => "Admin",
            RoleId::Sre => "SRE",
            RoleId::Cio => "CIO",
            RoleId::Security => "Security",
        }
    }

    /// Catalog entry for this role. Infallible: the enum and the catalog are
    /// declared in lockstep.
    pub fn role(self) -> &'static Role {
        match self {
            RoleId::Admin => &ROLES[0],
            RoleId::Sre => &ROLES[1],
            RoleId::Cio => &ROLES[2],
            RoleId::Security => &ROLES[3],
        }
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleId {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        RoleId::ALL
            .into_iter()
            .find(|id| id.as_str() == trimmed)
            .ok_or_else(|| RbacError::UnknownRole(s.to_string()))
    }
}

/// A named operator persona with a fixed navigation set and display identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    pub id: RoleId,
    pub label: &'static str,
    pub icon: &'static str,
    /// CSS hex color used for badges and highlights.
    pub color: &'static str,
    pub description: &'static str,
    /// Views this role may navigate to. Dashboard and settings are reachable
    /// regardless; see [`crate::navigation::NavigationProjector::is_reachable`].
    pub nav: &'static [ViewId],
    pub welcome: &'static str,
}

impl Role {
    /// Whether `view` is part of this role's declared navigation set.
    pub fn declares(&self, view: ViewId) -> bool {
        self.nav.contains(&view)
    }
}

static ROLES: [Role; 4] = [
    Role {
        id: RoleId::Admin,
        label: "Network Admin",
        icon: "🛠",
        color: "#6366f1",
        description: "Full access — device management, automation, alerts",
        nav: &[
            ViewId::Dashboard,
            ViewId::Devices,
            ViewId::Metrics,
            ViewId::Security,
            ViewId::Reports,
            ViewId::Ai,
            ViewId::Settings,
        ],
        welcome: "Full admin access. All systems monitored.",
    },
    Role {
        id: RoleId::Sre,
        label: "SRE / DevOps",
        icon: "⚙️",
        color: "#06b6d4",
        description: "Service health, performance, query engine, AI insights",
        nav: &[ViewId::Dashboard, ViewId::Metrics, ViewId::Ai, ViewId::Reports],
        welcome: "SRE view. Focus: service health & performance.",
    },
    Role {
        id: RoleId::Cio,
        label: "CIO / Executive",
        icon: "📊",
        color: "#10b981",
        description: "Business KPIs, SLA dashboards, executive summaries only",
        nav: &[ViewId::Dashboard, ViewId::Reports],
        welcome: "Executive view: High-level KPIs and SLA overview.",
    },
    Role {
        id: RoleId::Security,
        label: "Security Analyst",
        icon: "🔒",
        color: "#ec4899",
        description: "Threat detection, anomaly analysis, audit logs",
        nav: &[
            ViewId::Dashboard,
            ViewId::Security,
            ViewId::Reports,
            ViewId::Ai,
        ],
        welcome: "Security monitoring active. Watching for threats.",
    },
];

/// Read-only access to the static role definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleCatalog;

impl RoleCatalog {
    /// All roles in declaration order (stable for menus and legends).
    pub fn all() -> &'static [Role] {
        &ROLES
    }

    /// Look a role up by its id string.
    pub fn get(role_id: &str) -> Result<&'static Role, RbacError> {
        role_id.parse::<RoleId>().map(RoleId::role)
    }
}
