// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.0.0
//
// This file serves as the main library entry point for the ROI calculator,
// located at the root of the source tree. It exports all public modules and
// types that the binary and the tests use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: cli, config, core, error, help, logging, utils, web

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod help;
pub mod logging;
pub mod utils;
pub mod web;

// Re-export commonly used types at the crate root for convenience
pub use crate::config::{AppConfig, Theme};
pub use crate::core::{ChartEntry, FormInputs, RoiResult, calculate_roi, parse_amount};
pub use crate::error::{AppError, ConfigError};

pub type Result<T> = std::result::Result<T, AppError>;

// Changelog:
// - v1.0.0 (2026-10-18): Initial library root.
