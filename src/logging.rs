// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/logging.rs
// Version: 1.0.0
//
// This file sets up log4rs as the backend for the `log` macros used across
// the crate: a console appender, plus a file appender when a log file is
// given.
//
// Tree Location:
// - src/logging.rs (logging setup)
// - Depends on: log, log4rs, error

use crate::Result;
use crate::error::AppError;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;
use std::str::FromStr;

const CONSOLE_PATTERN: &str = "{d(%H:%M:%S)} {h({l:5})} {t} - {m}{n}";
const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:5} {t} - {m}{n}";

/// Parse a level name such as `info` or `DEBUG`
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level).map_err(|_| AppError::InvalidLogLevel {
        level: level.to_string(),
    })
}

/// Build the log4rs configuration without installing it
pub fn build_config(level: LevelFilter, log_file: Option<&Path>) -> Result<Config> {
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    let mut builder = Config::builder().appender(Appender::builder().build("console", Box::new(console)));
    let mut root = Root::builder().appender("console");

    if let Some(path) = log_file {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
            .build(path)
            .map_err(|e| AppError::LogFile {
                path: path.to_path_buf(),
                source: e,
            })?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    Ok(builder.build(root.build(level))?)
}

/// Install the global logger
pub fn init_logging(level: &str, log_file: Option<&Path>) -> Result<()> {
    let config = build_config(parse_level(level)?, log_file)?;
    log4rs::init_config(config)?;
    Ok(())
}

// Changelog:
// - v1.0.0 (2026-10-18): Console and optional file logging via log4rs.
