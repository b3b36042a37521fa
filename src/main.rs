// ASIC ROI Calculator - Free and Open Source Software Statement
//
// File: src/main.rs
// Version: 1.0.0
//
// Entry point: serves the calculator page with --web, otherwise computes one
// estimate from the command-line values and prints it.

use anyhow::Context;
use asic_roi::{
    AppConfig, calculate_roi,
    cli::{render_json, render_summary},
    core::types::Args,
    help, logging, web,
};
use clap::Parser;
use log::info;

const LOG_TARGET: &str = "asic_roi::main";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.examples {
        help::display_full_help();
        return Ok(());
    }

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    logging::init_logging(&args.log_level, args.log_file.as_deref())
        .context("Could not set up logging")?;

    if args.web {
        handle_web(&args).await
    } else {
        handle_once(&args)
    }
}

async fn handle_web(args: &Args) -> anyhow::Result<()> {
    let config = AppConfig::load_or_default(args.config.as_deref())
        .await
        .context("Could not load config")?;

    info!(target: LOG_TARGET, "🚀 Starting {}", config.name);
    info!(target: LOG_TARGET, "🎨 Default theme: {}", config.default_theme.as_str());

    web::start_web_server(config, &args.bind).await?;
    Ok(())
}

fn handle_once(args: &Args) -> anyhow::Result<()> {
    let inputs = args.form_inputs();
    let result = calculate_roi(&inputs);

    if args.json {
        println!("{}", render_json(&result).context("Could not serialize result")?);
    } else {
        print!("{}", render_summary(&inputs, &result));
    }
    Ok(())
}
