// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the core functionality of the ROI
// calculator, located in the core subdirectory. It declares submodules and
// re-exports key types for use throughout the project.

pub mod chart;
pub mod roi;
pub mod types;

// Re-export the most commonly used items
pub use chart::{PieLayout, PieSlice, pie_slices};
pub use roi::{calculate_roi, parse_amount};
pub use types::{Args, ChartEntry, FormInputs, RoiResult};

// Changelog:
// - v1.0.0 (2026-10-18): Initial core module with roi, chart and types.
