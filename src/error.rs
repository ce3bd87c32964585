// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

//! Error taxonomy of the RBAC core.
//!
//! Roles, features and views are closed enumerations. Once a value has been
//! parsed into its enum, every core operation is total; these errors can only
//! surface where an untyped string crosses into the core (CLI arguments,
//! HTTP path segments). They signal a programming or UI bug, never a user
//! mistake.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RbacError {
    /// Role id outside the fixed catalog.
    #[error("unknown role '{0}'")]
    UnknownRole(String),

    /// Feature id outside the fixed feature set.
    #[error("unknown feature '{0}'")]
    UnknownFeature(String),

    /// View id outside the navigation catalog.
    #[error("unknown view '{0}'")]
    UnknownView(String),

    /// A view the active role may not reach (or no role is active).
    /// The UI should never have offered this transition.
    #[error("navigation to '{view}' is not permitted for role {role}")]
    InvalidNavigationRequest { role: String, view: String },
}
