// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

//! Access levels and the UI contract attached to each of them.
//!
//! The five levels are deliberately *not* ordered. `View` (read-only
//! everything) and `Limited` (a restricted subset that still allows basic
//! writes) grant different capabilities, so there is no `PartialOrd` here.
//! Consumers branch on the explicit level, never on a comparison.

use serde::{Deserialize, Serialize};

/// Granted capability tier for a (feature, role) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Page body replaced by the restricted-access placeholder.
    None,
    /// Aggregate-only rendering; raw rows hidden.
    Summary,
    /// Page renders with a warning; advanced and destructive controls hidden,
    /// everyday writes still allowed.
    Limited,
    /// Read-only rendering; every mutation control hidden, notice shown.
    View,
    /// Unrestricted, including mutation controls.
    Full,
}

/// Banner severity shown above a page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Warning,
    Info,
}

/// What the rendering layer may show for a given access level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UiContract {
    /// `false` means the restricted placeholder replaces the body.
    pub renders_body: bool,
    /// Everyday write controls (manage a device, acknowledge an alert).
    pub mutation_controls: bool,
    /// Destructive actions (lock node, trigger remediation or SOC workflows).
    pub destructive_controls: bool,
    /// Custom queries, data export, drill-downs.
    pub advanced_controls: bool,
    /// Raw per-row data, as opposed to aggregates.
    pub detail_rows: bool,
    /// Banner the page must display, if any.
    pub banner: Option<BannerKind>,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 5] = [
        AccessLevel::None,
        AccessLevel::Summary,
        AccessLevel::Limited,
        AccessLevel::View,
        AccessLevel::Full,
    ];

    pub fn ui_contract(self) -> UiContract {
        match self {
            AccessLevel::None => UiContract {
                renders_body: false,
                mutation_controls: false,
                destructive_controls: false,
                advanced_controls: false,
                detail_rows: false,
                banner: None,
            },
            AccessLevel::Summary => UiContract {
                renders_body: true,
                mutation_controls: false,
                destructive_controls: false,
                advanced_controls: false,
                detail_rows: false,
                banner: None,
            },
            AccessLevel::Limited => UiContract {
                renders_body: true,
                mutation_controls: true,
                destructive_controls: false,
                advanced_controls: false,
                detail_rows: true,
                banner: Some(BannerKind::Warning),
            },
            AccessLevel::View => UiContract {
                renders_body: true,
                mutation_controls: false,
                destructive_controls: false,
                advanced_controls: false,
                detail_rows: true,
                banner: Some(BannerKind::Info),
            },
            AccessLevel::Full => UiContract {
                renders_body: true,
                mutation_controls: true,
                destructive_controls: true,
                advanced_controls: true,
                detail_rows: true,
                banner: None,
            },
        }
    }

    /// Chip label used by the access-matrix table.
    pub fn chip_label(self) -> &'static str {
        match self {
            AccessLevel::None => "✗ None",
            AccessLevel::Summary => "📊 Summary",
            AccessLevel::Limited => "⚠ Limited",
            AccessLevel::View => "👁 View",
            AccessLevel::Full => "✓ Full",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccessLevel::None => "none",
            AccessLevel::Summary => "summary",
            AccessLevel::Limited => "limited",
            AccessLevel::View => "view",
            AccessLevel::Full => "full",
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
