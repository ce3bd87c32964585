// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

pub mod schema;

pub use schema::{
    AssistantConfig, Config, DashboardConfig, GatewayConfig, ObservabilityConfig, API_KEY_ENV,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reexported_config_default_is_constructible() {
        let config = Config::default();

        assert_eq!(config.gateway.host, "127.0.0.1");
        assert!(config.dashboard.sidebar_open);
        assert_eq!(config.dashboard.status_tick_millis, 1000);
        assert_eq!(config.observability.log_level, "info");
        assert!(config.assistant.api_key.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[gateway]\nport = 9000\n\n[dashboard]\nsidebar_open = false"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.gateway.port, 9000);
        assert_eq!(config.gateway.host, "127.0.0.1");
        assert!(!config.dashboard.sidebar_open);
        assert_eq!(config.assistant.provider, "anthropic");
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[gateway\nport = ").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
