// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

//! NetVision Core: role-aware operator dashboard engine.
//!
//! The RBAC core (`rbac`, `navigation`, `session`) decides what a role may
//! see and where it may go. `pages`, `telemetry` and `assistant` consume the
//! resulting access levels; `gateway` serves all of it over HTTP.

pub mod assistant;
pub mod config;
pub mod error;
pub mod gateway;
pub mod navigation;
pub mod observability;
pub mod pages;
pub mod rbac;
pub mod session;
pub mod telemetry;

pub use error::RbacError;
pub use navigation::{NavigationItem, NavigationProjector, ViewId};
pub use rbac::{AccessLevel, AccessMatrix, Feature, PermissionResolver, Role, RoleCatalog, RoleId};
pub use session::{NavigationOutcome, ViewState, ViewStateController};
