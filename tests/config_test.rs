// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/config_test.rs
// Version: 1.0.0
//
// Tests for JSON config loading and logging configuration.
//
// Tree Location:
// - tests/config_test.rs (config and logging tests)
// - Depends on: asic-roi, tempfile, tokio

#[cfg(test)]
mod tests {
    use asic_roi::logging::{build_config, parse_level};
    use asic_roi::{AppConfig, AppError, ConfigError, Theme};
    use log::LevelFilter;
    use tempfile::{TempDir, tempdir};
    use tokio::fs;

    fn create_temp_dir() -> TempDir {
        tempdir().expect("Failed to create temporary directory")
    }

    #[tokio::test]
    async fn test_load_full_config() {
        let temp_dir = create_temp_dir();
        let path = temp_dir.path().join("config.json");
        let json = r#"{
            "name": "Farm ROI",
            "description": "Internal calculator",
            "author": { "name": "Ops", "url": "https://example.com/ops" },
            "github": { "name": "Source", "url": "https://example.com/src" },
            "default_theme": "dark"
        }"#;
        fs::write(&path, json).await.expect("Failed to write config");

        let config = AppConfig::load(&path).await.expect("Config should load");
        assert_eq!(config.name, "Farm ROI");
        assert_eq!(config.author.url, "https://example.com/ops");
        assert_eq!(config.github.name, "Source");
        assert_eq!(config.default_theme, Theme::Dark);
    }

    #[tokio::test]
    async fn test_partial_config_keeps_defaults() {
        let temp_dir = create_temp_dir();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "name": "Only a name" }"#)
            .await
            .expect("Failed to write config");

        let config = AppConfig::load(&path).await.expect("Config should load");
        let defaults = AppConfig::default();
        assert_eq!(config.name, "Only a name");
        assert_eq!(config.github, defaults.github);
        assert_eq!(config.default_theme, Theme::Light);
    }

    #[tokio::test]
    async fn test_missing_config_file() {
        let temp_dir = create_temp_dir();
        let path = temp_dir.path().join("missing.json");
        let result = AppConfig::load(&path).await;
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[tokio::test]
    async fn test_invalid_config_file() {
        let temp_dir = create_temp_dir();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").await.expect("Failed to write config");
        let result = AppConfig::load(&path).await;
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_load_or_default_without_path() {
        let config = AppConfig::load_or_default(None).await.expect("Defaults never fail");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!(Theme::parse("Dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(" light "), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("WARN").unwrap(), LevelFilter::Warn);
        assert!(matches!(parse_level("loud"), Err(AppError::InvalidLogLevel { .. })));
    }

    #[test]
    fn test_build_config_with_file() {
        let temp_dir = create_temp_dir();
        let path = temp_dir.path().join("asic-roi.log");
        let config = build_config(LevelFilter::Info, Some(&path)).expect("Logging config should build");
        assert_eq!(config.appenders().len(), 2);
        assert_eq!(config.root().level(), LevelFilter::Info);
    }
}

// Changelog:
// - v1.0.0 (2026-10-18): Config file loading, theme and logging config tests.
