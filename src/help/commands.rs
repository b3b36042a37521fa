// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/help/commands.rs
// Version: 1.0.0
//
// This file provides command-line help and examples for the ROI calculator,
// covering the web page and the one-shot calculation.
//
// Tree Location:
// - src/help/commands.rs (command help and examples)
// - Depends on: none

/// Print extended help information with detailed descriptions
pub fn print_extended_help() {
    println!("COMMAND LINE OPTIONS:");
    println!("=====================");
    println!();

    println!("WEB PAGE:");
    println!("  --web                      Serve the calculator form");
    println!("  --bind <HOST:PORT>         Bind address [default: 0.0.0.0:8080]");
    println!("  --config <FILE>            JSON config (title, footer links, theme)");
    println!();

    println!("ONE-SHOT CALCULATION:");
    println!("  --cost <USD>               ASIC cost (required without --web)");
    println!("  --delivery <USD>           Delivery/connection cost");
    println!("  --model <NAME>             ASIC model, shown in the summary");
    println!("  --hashrate <TH/S>          Hashrate (not used by the estimate)");
    println!("  --electricity <USD/KWH>    Electricity price (not used by the estimate)");
    println!("  --tax <PERCENT>            Tax (not used by the estimate)");
    println!("  --json                     Print the result as JSON");
    println!();

    println!("LOGGING:");
    println!("  --log-level <LEVEL>        error, warn, info, debug, trace [default: info]");
    println!("  --log-file <FILE>          Also write logs to FILE");
    println!();

    println!("DISPLAY:");
    println!("  -h, --help                 Show this help message");
    println!("  -V, --version              Show version information");
    println!("  --examples                 Show usage examples");
}

/// Get practical command examples
pub fn get_command_examples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Serve the calculator page", "asic-roi --web"),
        ("Serve on a custom port", "asic-roi --web --bind 127.0.0.1:3000"),
        (
            "Serve with custom footer links",
            "asic-roi --web --config roi-config.json",
        ),
        (
            "One-shot estimate",
            "asic-roi --model \"Antminer S19 Pro\" --hashrate 110 --cost 2500 --delivery 300",
        ),
        ("JSON output", "asic-roi --cost 2500 --delivery 300 --json"),
        (
            "Debug logging to a file",
            "asic-roi --web --log-level debug --log-file asic-roi.log",
        ),
    ]
}

/// Print command examples with descriptions
pub fn print_command_examples() {
    println!("USAGE EXAMPLES:");
    println!("===============");
    println!();

    for (description, command) in get_command_examples() {
        println!("{}:", description);
        println!("  {}", command);
        println!();
    }
}

// Changelog:
// - v1.0.0 (2026-10-18): Option reference and usage examples.
