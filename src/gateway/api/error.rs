// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

use crate::error::RbacError;
use crate::rbac::{AccessLevel, Feature};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

/// Handler error mapped onto a JSON body and status code.
#[derive(Debug)]
pub enum ApiError {
    Rbac(RbacError),
    /// The endpoint needs an active role and none is selected.
    NoActiveRole,
    UnknownMetric(String),
    /// The role reaches the page but its level excludes the action.
    AccessDenied { feature: Feature, level: AccessLevel },
}

impl From<RbacError> for ApiError {
    fn from(err: RbacError) -> Self {
        ApiError::Rbac(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Rbac(
                RbacError::UnknownRole(_) | RbacError::UnknownFeature(_) | RbacError::UnknownView(_),
            ) => StatusCode::NOT_FOUND,
            ApiError::Rbac(RbacError::InvalidNavigationRequest { .. }) => StatusCode::FORBIDDEN,
            ApiError::NoActiveRole => StatusCode::CONFLICT,
            ApiError::UnknownMetric(_) => StatusCode::NOT_FOUND,
            ApiError::AccessDenied { .. } => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Rbac(err) => err.to_string(),
            ApiError::NoActiveRole => "no role selected".to_string(),
            ApiError::UnknownMetric(metric) => format!("unknown metric '{metric}'"),
            ApiError::AccessDenied { feature, level } => {
                format!("{} access to {} does not allow this", level, feature.name())
            }
        };
        (self.status(), Json(serde_json::json!({ "error": message }))).into_response()
    }
}
