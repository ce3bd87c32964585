// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

//! Pure lookup functions over the role catalog and the access matrix.
//!
//! Resolution runs on every render of every gated page, so it holds no state
//! and performs no I/O. The typed entry point is total; the string entry
//! point exists for untyped boundaries only.

use super::access::AccessLevel;
use super::feature::Feature;
use super::matrix::AccessMatrix;
use super::roles::RoleId;
use crate::error::RbacError;

#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionResolver;

impl PermissionResolver {
    /// Access level granted to `role` for `feature`.
    pub fn resolve(feature: Feature, role: RoleId) -> AccessLevel {
        let level = AccessMatrix::level(feature, role);
        tracing::debug!(%feature, %role, %level, "access resolved");
        level
    }

    /// Parse raw ids into the closed enumerations.
    ///
    /// Unknown ids are invariant violations, not user errors; they are
    /// logged loudly and returned to the caller, which is expected to treat
    /// them as a bug at its boundary.
    pub fn parse_pair(feature: &str, role: &str) -> Result<(Feature, RoleId), RbacError> {
        let parsed = feature
            .parse::<Feature>()
            .and_then(|feature| role.parse::<RoleId>().map(|role| (feature, role)));
        if let Err(e) = &parsed {
            tracing::error!(feature, role, "access resolution rejected: {e}");
        }
        parsed
    }

    /// Resolve from raw ids; see [`parse_pair`](Self::parse_pair).
    pub fn resolve_named(feature: &str, role: &str) -> Result<AccessLevel, RbacError> {
        Self::parse_pair(feature, role).map(|(feature, role)| Self::resolve(feature, role))
    }

    /// A role's column of the matrix, features in declaration order.
    pub fn grants_for(role: RoleId) -> Vec<(Feature, AccessLevel)> {
        Feature::ALL
            .into_iter()
            .map(|feature| (feature, Self::resolve(feature, role)))
            .collect()
    }
}
