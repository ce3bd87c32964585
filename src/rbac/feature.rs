// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

//! Permission features: the unit of permission granularity.

use crate::error::RbacError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Capability areas subject to permissioning.
///
/// Features are a superset of the navigable pages: `Automation` has no page
/// of its own and only gates controls inside other views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    DeviceMonitoring,
    QueryEngine,
    SlaReports,
    Automation,
    SecurityControls,
    AiRootCause,
}

impl Feature {
    /// Every feature, in declaration order.
    pub const ALL: [Feature; 6] = [
        Feature::DeviceMonitoring,
        Feature::QueryEngine,
        Feature::SlaReports,
        Feature::Automation,
        Feature::SecurityControls,
        Feature::AiRootCause,
    ];

    /// Human-readable name, as shown in the access matrix.
    pub fn name(self) -> &'static str {
        match self {
            Feature::DeviceMonitoring => "Device Monitoring",
            Feature::QueryEngine => "Query Engine",
            Feature::SlaReports => "SLA Reports",
            Feature::Automation => "Automation",
            Feature::SecurityControls => "Security Controls",
            Feature::AiRootCause => "AI Root Cause",
        }
    }

    /// Snake-case key used on the wire and in URLs.
    pub fn key(self) -> &'static str {
        match self {
            Feature::DeviceMonitoring => "device_monitoring",
            Feature::QueryEngine => "query_engine",
            Feature::SlaReports => "sla_reports",
            Feature::Automation => "automation",
            Feature::SecurityControls => "security_controls",
            Feature::AiRootCause => "ai_root_cause",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = RbacError;

    /// Accepts either the display name or the snake-case key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Feature::ALL
            .into_iter()
            .find(|feature| feature.name() == trimmed || feature.key() == trimmed)
            .ok_or_else(|| RbacError::UnknownFeature(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_names_and_keys() {
        assert_eq!("Query Engine".parse::<Feature>(), Ok(Feature::QueryEngine));
        assert_eq!("query_engine".parse::<Feature>(), Ok(Feature::QueryEngine));
        assert_eq!(
            "Security Controls".parse::<Feature>(),
            Ok(Feature::SecurityControls)
        );
        assert_eq!("ai_root_cause".parse::<Feature>(), Ok(Feature::AiRootCause));
    }

    #[test]
    fn unknown_feature_is_rejected() {
        assert_eq!(
            "Billing".parse::<Feature>(),
            Err(RbacError::UnknownFeature("Billing".into()))
        );
        // Case matters: the set is closed and exact.
        assert!("query engine".parse::<Feature>().is_err());
    }

    #[test]
    fn names_and_keys_are_unique() {
        for (i, a) in Feature::ALL.iter().enumerate() {
            for b in &Feature::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&Feature::SlaReports).unwrap();
        assert_eq!(json, "\"sla_reports\"");
        let back: Feature = serde_json::from_str("\"device_monitoring\"").unwrap();
        assert_eq!(back, Feature::DeviceMonitoring);
    }
}
