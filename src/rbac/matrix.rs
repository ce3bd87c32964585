// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

//! Feature-by-role permission matrix.
//!
//! Keyed by `(Feature, RoleId)` pairs with no wildcard arm: adding a role or
//! a feature without filling in its row/column is a compile error, so the
//! matrix is total by construction.

use super::access::AccessLevel;
use super::feature::Feature;
use super::roles::RoleId;
use serde::Serialize;

/// The static access table.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessMatrix;

/// One row of the matrix as rendered by the reports page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    pub feature: Feature,
    /// Levels per role, in role declaration order.
    pub grants: Vec<(RoleId, AccessLevel)>,
}

impl AccessMatrix {
    pub const fn level(feature: Feature, role: RoleId) -> AccessLevel {
        use AccessLevel::{Full, Limited, None, Summary, View};
        use Feature::*;
        use RoleId::*;

        match (feature, role) {
            (DeviceMonitoring, Admin) => Full,
            (DeviceMonitoring, Sre) => Full,
            (DeviceMonitoring, Cio) => View,
            (DeviceMonitoring, Security) => Full,

            (QueryEngine, Admin) => Full,
            (QueryEngine, Sre) => Full,
            (QueryEngine, Cio) => Limited,
            (QueryEngine, Security) => Full,

            (SlaReports, Admin) => Full,
            (SlaReports, Sre) => View,
            (SlaReports, Cio) => Full,
            (SlaReports, Security) => View,

            (Automation, Admin) => Full,
            (Automation, Sre) => Full,
            (Automation, Cio) => None,
            (Automation, Security) => Limited,

            (SecurityControls, Admin) => Limited,
            (SecurityControls, Sre) => Limited,
            (SecurityControls, Cio) => None,
            (SecurityControls, Security) => Full,

            (AiRootCause, Admin) => Full,
            (AiRootCause, Sre) => Full,
            (AiRootCause, Cio) => Summary,
            (AiRootCause, Security) => Full,
        }
    }

    /// Every row, features in declaration order.
    pub fn rows() -> Vec<MatrixRow> {
        Feature::ALL
            .into_iter()
            .map(|feature| MatrixRow {
                feature,
                grants: RoleId::ALL
                    .into_iter()
                    .map(|role| (role, Self::level(feature, role)))
                    .collect(),
            })
            .collect()
    }
}
