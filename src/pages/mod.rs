// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

//! Page-level gating.
//!
//! Turns (view, role) into the render descriptor a front-end needs: which
//! variant of the page to draw, which control groups are allowed and which
//! banner to show. The level is resolved on every call. Nothing is cached,
//! so a role switch changes the very next render.

use crate::navigation::ViewId;
use crate::rbac::{AccessLevel, BannerKind, Feature, PermissionResolver, RoleId, UiContract};
use serde::Serialize;

/// Which body the page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageVariant {
    /// The role's own landing dashboard.
    Dashboard(RoleId),
    /// Restricted-access placeholder instead of the body.
    Locked,
    /// Aggregates only.
    Summary,
    /// Read-only body.
    ReadOnly,
    /// Body with a subset of controls.
    Restricted,
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

/// Everything the rendering layer needs to draw one page for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub view: ViewId,
    pub role: RoleId,
    /// Gating feature, `None` for dashboard and settings.
    pub feature: Option<Feature>,
    pub access: Option<AccessLevel>,
    pub variant: PageVariant,
    pub controls: UiContract,
    pub banner: Option<Banner>,
    /// Placeholder text when the page is locked.
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PageGate;

impl PageGate {
    pub fn render(view: ViewId, role: RoleId) -> PageView {
        let Some(feature) = view.feature() else {
            let variant = match view {
                ViewId::Dashboard => PageVariant::Dashboard(role),
                _ => PageVariant::Full,
            };
            return PageView {
                view,
                role,
                feature: None,
                access: None,
                variant,
                controls: AccessLevel::Full.ui_contract(),
                banner: None,
                placeholder: None,
            };
        };

        let level = PermissionResolver::resolve(feature, role);
        let controls = level.ui_contract();
        let variant = match level {
            AccessLevel::None => PageVariant::Locked,
            AccessLevel::Summary => PageVariant::Summary,
            AccessLevel::View => PageVariant::ReadOnly,
            AccessLevel::Limited => PageVariant::Restricted,
            AccessLevel::Full => PageVariant::Full,
        };
        let placeholder = (!controls.renders_body).then(|| {
            format!("Your role doesn't have permission to access {feature}.")
        });

        PageView {
            view,
            role,
            feature: Some(feature),
            access: Some(level),
            variant,
            controls,
            banner: banner_for(view, feature, level),
            placeholder,
        }
    }
}

fn banner_for(view: ViewId, feature: Feature, level: AccessLevel) -> Option<Banner> {
    let warning = |message: &str| Banner {
        kind: BannerKind::Warning,
        message: message.to_string(),
    };
    let info = |message: &str| Banner {
        kind: BannerKind::Info,
        message: message.to_string(),
    };

    match (view, level) {
        (_, AccessLevel::None) => None,
        (ViewId::Devices, AccessLevel::View) => Some(warning(
            "👁 View-only mode — you can see device data but cannot make changes.",
        )),
        (ViewId::Metrics, AccessLevel::Limited) => Some(warning(
            "⚠️ Limited access — advanced queries and data export are disabled for your role.",
        )),
        (ViewId::Security, AccessLevel::Limited) => Some(warning(
            "⚠️ Limited access — you can view threats but cannot lock nodes or trigger SOC workflows.",
        )),
        // Export is the only thing reports gate, so every non-full level gets the same notice.
        (ViewId::Reports, AccessLevel::Full) => None,
        (ViewId::Reports, _) => Some(info(
            "ℹ️ View-only mode — PDF/email export requires Admin or CIO role.",
        )),
        (_, level) => level.ui_contract().banner.map(|kind| Banner {
            kind,
            message: generic_message(feature, level),
        }),
    }
}

fn generic_message(feature: Feature, level: AccessLevel) -> String {
    match level {
        AccessLevel::Limited => {
            format!("⚠️ Limited access — advanced {feature} controls are disabled for your role.")
        }
        AccessLevel::View => {
            format!("👁 View-only mode — you can see {feature} data but cannot make changes.")
        }
        AccessLevel::Summary => format!("📊 Summary view — {feature} shows aggregates only."),
        AccessLevel::None | AccessLevel::Full => String::new(),
    }
}
