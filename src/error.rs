// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/error.rs
// Version: 1.0.0
//
// This file defines the error types of the ROI calculator. The calculation
// itself never fails; these cover config loading, logging setup and serving.
//
// Tree Location:
// - src/error.rs (error types)
// - Depends on: thiserror, serde_json, log4rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file does not exist at {path:?}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to parse config file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO operation failed on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid log level: {level}")]
    InvalidLogLevel { level: String },

    #[error("Failed to build logging configuration")]
    LogConfig {
        #[from]
        source: log4rs::config::runtime::ConfigErrors,
    },

    #[error("Failed to open log file {path:?}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger already initialised")]
    LoggerInstalled {
        #[from]
        source: log::SetLoggerError,
    },

    #[error("Failed to bind web server to {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Web server error")]
    Serve {
        #[source]
        source: std::io::Error,
    },
}

// Changelog:
// - v1.0.0 (2026-10-18): ConfigError and AppError.
