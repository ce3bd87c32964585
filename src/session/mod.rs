// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

//! View-state controller.
//!
//! Holds the active role, the active view and the sidebar flag, and enforces
//! one invariant across every transition: the current view is always
//! reachable for the current role. A role switch that would strand the user
//! on a forbidden view lands them on the dashboard in the same step, so no
//! intermediate state ever exposes the forbidden view.
//!
//! ```text
//!   LoggedOut ──select_role──▶ Active{role, dashboard}
//!   Active ──navigate(v)──▶ Active{role, v}          (v reachable, else no-op)
//!   Active ──switch_role(r)──▶ Active{r, v | dashboard}
//!   Active ──sign_out──▶ LoggedOut
//! ```
//!
//! Role selection lives in memory only; nothing here is persisted.

use crate::error::RbacError;
use crate::navigation::{NavigationItem, NavigationProjector, ViewId};
use crate::rbac::{Role, RoleId};
use serde::Serialize;

/// Snapshot of the controller, as consumed by routing and highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// `None` while logged out / before a role is chosen.
    pub role: Option<RoleId>,
    pub view: ViewId,
    pub sidebar_open: bool,
}

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Applied,
    /// The request was ignored; the state is unchanged.
    Suppressed(RbacError),
}

impl NavigationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, NavigationOutcome::Applied)
    }
}

/// Sidebar contents for the active role.
#[derive(Debug, Clone, Serialize)]
pub struct Menu {
    pub role: &'static Role,
    pub active: ViewId,
    pub visible: Vec<&'static NavigationItem>,
    /// Rendered disabled, for discoverability.
    pub hidden: Vec<&'static NavigationItem>,
}

#[derive(Debug, Clone)]
pub struct ViewStateController {
    role: Option<RoleId>,
    view: ViewId,
    sidebar_open: bool,
    sidebar_default: bool,
}

impl Default for ViewStateController {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ViewStateController {
    /// Logged-out controller. `sidebar_default` is the sidebar state applied
    /// whenever a fresh session starts.
    pub fn new(sidebar_default: bool) -> Self {
        Self {
            role: None,
            view: ViewId::Dashboard,
            sidebar_open: sidebar_default,
            sidebar_default,
        }
    }

    pub fn state(&self) -> ViewState {
        ViewState {
            role: self.role,
            view: self.view,
            sidebar_open: self.sidebar_open,
        }
    }

    pub fn role(&self) -> Option<RoleId> {
        self.role
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn is_logged_out(&self) -> bool {
        self.role.is_none()
    }

    /// Adopt a role from the login screen. Starts at the dashboard with the
    /// sidebar in its default state. On an already active session this is a
    /// role switch.
    pub fn select_role(&mut self, role: RoleId) {
        if self.role.is_some() {
            self.switch_role(role);
            return;
        }

        self.role = Some(role);
        self.view = ViewId::Dashboard;
        self.sidebar_open = self.sidebar_default;
        tracing::info!(%role, "role selected");
    }

    /// Route to `view` if the active role may reach it; otherwise leave the
    /// state untouched.
    pub fn navigate(&mut self, view: ViewId) -> NavigationOutcome {
        let Some(role) = self.role else {
            tracing::warn!(%view, "navigation suppressed: no active role");
            return NavigationOutcome::Suppressed(RbacError::InvalidNavigationRequest {
                role: "none".into(),
                view: view.to_string(),
            });
        };

        if !NavigationProjector::is_reachable(role, view) {
            // The UI only offers reachable targets; getting here is a UI bug.
            tracing::warn!(%role, %view, "navigation suppressed: view not permitted");
            return NavigationOutcome::Suppressed(RbacError::InvalidNavigationRequest {
                role: role.to_string(),
                view: view.to_string(),
            });
        }

        self.view = view;
        tracing::debug!(%role, %view, "navigated");
        NavigationOutcome::Applied
    }

    /// Change the active role, keeping the current view only if the new role
    /// may reach it. From the logged-out state this is a fresh selection.
    pub fn switch_role(&mut self, role: RoleId) {
        let Some(previous) = self.role else {
            self.select_role(role);
            return;
        };

        let view = if NavigationProjector::is_reachable(role, self.view) {
            self.view
        } else {
            ViewId::Dashboard
        };

        // Role and view are assigned together; the pair is never observable
        // half-updated.
        self.role = Some(role);
        self.view = view;
        tracing::info!(from = %previous, to = %role, %view, "role switched");
    }

    /// End the session. The next selection starts fresh at the dashboard.
    pub fn sign_out(&mut self) {
        if let Some(role) = self.role.take() {
            tracing::info!(%role, "signed out");
        }
        self.view = ViewId::Dashboard;
        self.sidebar_open = self.sidebar_default;
    }

    /// Independent of role and view.
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    /// Sidebar contents for the active role, `None` while logged out.
    pub fn menu(&self) -> Option<Menu> {
        let role = self.role?;
        Some(Menu {
            role: role.role(),
            active: self.view,
            visible: NavigationProjector::visible(role),
            hidden: NavigationProjector::hidden(role),
        })
    }
}
