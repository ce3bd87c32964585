// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

//! Logging setup.

use crate::config::ObservabilityConfig;
use tracing::Level;

/// Parse a configured level, falling back to `INFO` on anything unknown.
pub fn parse_level(raw: &str) -> Level {
    raw.trim().parse::<Level>().unwrap_or(Level::INFO)
}

/// Install the global `fmt` subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(config: &ObservabilityConfig) {
    let level = parse_level(&config.log_level);
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(%level, "logging initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level(" WARN "), Level::WARN);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(parse_level("chatty"), Level::INFO);
    }

    #[test]
    fn init_is_idempotent() {
        let config = ObservabilityConfig::default();
        init(&config);
        init(&config);
    }
}
