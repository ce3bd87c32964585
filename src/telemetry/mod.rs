// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

//! Telemetry collaborator.
//!
//! The core neither produces nor validates sample data; it only decides,
//! through the access level, whether a consumer may render the detailed
//! series, an aggregate or nothing. [`MockTelemetry`] stands in for a real
//! collector.

use crate::rbac::{AccessLevel, Feature};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One point of a time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplePoint {
    /// Wall-clock label, e.g. "14:00".
    pub t: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Cpu,
    Memory,
    Latency,
    TrafficIn,
    TrafficOut,
    ThreatsBlocked,
    ThreatsSuspicious,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::Cpu,
        Metric::Memory,
        Metric::Latency,
        Metric::TrafficIn,
        Metric::TrafficOut,
        Metric::ThreatsBlocked,
        Metric::ThreatsSuspicious,
    ];

    /// Feature whose access level governs this series.
    pub fn feature(self) -> Feature {
        match self {
            Metric::ThreatsBlocked | Metric::ThreatsSuspicious => Feature::SecurityControls,
            _ => Feature::QueryEngine,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Metric::Cpu => "cpu",
            Metric::Memory => "memory",
            Metric::Latency => "latency",
            Metric::TrafficIn => "traffic_in",
            Metric::TrafficOut => "traffic_out",
            Metric::ThreatsBlocked => "threats_blocked",
            Metric::ThreatsSuspicious => "threats_suspicious",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }
}

/// Source of time-series samples.
pub trait TelemetrySource: Send + Sync {
    fn series(&self, metric: Metric) -> Vec<SamplePoint>;
}

/// Twelve two-hourly points with random jitter around a per-metric baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockTelemetry;

pub const HOURS: [&str; 12] = [
    "00:00", "02:00", "04:00", "06:00", "08:00", "10:00", "12:00", "14:00", "16:00", "18:00",
    "20:00", "22:00",
];

impl MockTelemetry {
    /// `(baseline at index i, jitter amplitude)`.
    fn shape(metric: Metric, i: usize) -> (f64, f64) {
        let x = i as f64;
        match metric {
            Metric::Cpu => (55.0, 40.0),
            Metric::Memory => (68.0, 20.0),
            Metric::Latency => (12.0, 8.0),
            Metric::TrafficIn => (120.0 + x.sin() * 40.0, 20.0),
            Metric::TrafficOut => (80.0 + x.cos() * 30.0, 15.0),
            Metric::ThreatsBlocked => (30.0, 20.0),
            Metric::ThreatsSuspicious => (10.0, 8.0),
        }
    }
}

impl TelemetrySource for MockTelemetry {
    fn series(&self, metric: Metric) -> Vec<SamplePoint> {
        let mut rng = rand::thread_rng();
        HOURS
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let (base, spread) = Self::shape(metric, i);
                let jitter = (rng.gen::<f64>() - 0.5) * spread;
                SamplePoint {
                    t: (*t).to_string(),
                    value: (base + jitter).max(0.0),
                }
            })
            .collect()
    }
}

/// What a consumer may render of a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeriesView {
    Hidden,
    Summary {
        min: f64,
        max: f64,
        mean: f64,
        samples: usize,
    },
    Detail {
        points: Vec<SamplePoint>,
    },
}

/// Apply an access level to a series.
pub fn gate_series(level: AccessLevel, points: Vec<SamplePoint>) -> SeriesView {
    let contract = level.ui_contract();
    if !contract.renders_body {
        return SeriesView::Hidden;
    }
    if contract.detail_rows {
        return SeriesView::Detail { points };
    }

    if points.is_empty() {
        return SeriesView::Summary {
            min: 0.0,
            max: 0.0,
            mean: 0.0,
            samples: 0,
        };
    }
    let (min, max, sum) = points.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0),
        |(min, max, sum), p| (min.min(p.value), max.max(p.value), sum + p.value),
    );
    SeriesView::Summary {
        min,
        max,
        mean: sum / points.len() as f64,
        samples: points.len(),
    }
}
