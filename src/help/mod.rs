// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/help/mod.rs
// Version: 1.0.0
//
// This file declares the help module: option reference, usage examples, and
// a description of how the estimate is computed.
//
// Tree Location:
// - src/help/mod.rs (help module entry point)
// - Submodules: commands

pub mod commands;

pub use commands::{get_command_examples, print_command_examples, print_extended_help};

use crate::core::roi::DAILY_INCOME_RATE;

/// Explain the formula, including the inputs it leaves out
pub fn print_calculation_help() {
    println!("HOW THE ESTIMATE IS COMPUTED:");
    println!("=============================");
    println!();
    println!("  Total investment = ASIC cost + delivery cost");
    println!("  Daily income     = ASIC cost x {}%", DAILY_INCOME_RATE * 100.0);
    println!("  Days to ROI      = total investment / daily income (0 when there is no income)");
    println!();
    println!("NOTE:");
    println!("  Hashrate, electricity price and tax are collected but do not");
    println!("  change the estimate yet.");
}

/// Display full help information
pub fn display_full_help() {
    println!("⛏️  ASIC ROI Calculator");
    println!("======================");
    println!();

    commands::print_extended_help();
    println!();

    print_calculation_help();
    println!();

    commands::print_command_examples();
}

// Changelog:
// - v1.0.0 (2026-10-18): Full help and calculation notes.
