//! # Ductwise CLI Application
//!
//! Terminal front-end for the duct calculation engine. Feeds one segment
//! through `duct_core` and prints the derived values, warnings and JSON.
//!
//! ```bash
//! duct_cli --cfm 700 --width 8 --length 20
//! duct_cli --config engine.toml --json --cfm 1200 --width 12 --length 40
//! ```
//!
//! Values not given on the command line are prompted for.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use duct_core::calculations::{CalculationEngine, DuctSegmentInput, SegmentResult};
use duct_core::config::EngineConfig;
use duct_core::errors::{CalcError, CalcResult};
use duct_core::format::format_calculation_result;
use duct_core::materials::DuctMaterial;

#[derive(Parser, Debug)]
#[command(name = "duct_cli")]
#[command(about = "Ductwise CLI - HVAC duct segment calculator", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Airflow (CFM)
    #[arg(long)]
    cfm: Option<f64>,

    /// Square duct side (in)
    #[arg(long)]
    width: Option<f64>,

    /// Segment length (ft)
    #[arg(long)]
    length: Option<f64>,

    /// Duct material (e.g. galvanized-steel, flexible-duct)
    #[arg(long, default_value = "galvanized-steel")]
    material: String,

    /// Segment label
    #[arg(long, default_value = "CLI-Demo")]
    label: String,

    /// Engine configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print only JSON output
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a DuctSegmentInput,
    result: &'a SegmentResult,
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn value_or_prompt(value: Option<f64>, interactive: bool, prompt: &str, default: f64) -> f64 {
    match value {
        Some(v) => v,
        None if interactive => prompt_f64(prompt, default),
        None => default,
    }
}

fn build_engine(path: Option<&PathBuf>) -> CalcResult<CalculationEngine> {
    let config = match path {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::standard(),
    };
    CalculationEngine::new(config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CalcResult<()> {
    let engine = build_engine(cli.config.as_ref())?;

    let material = DuctMaterial::from_name(&cli.material).ok_or_else(|| {
        CalcError::invalid_input("material", cli.material.clone(), "unknown duct material")
    })?;

    let interactive = !cli.json;
    if interactive {
        println!("Ductwise CLI - Duct Segment Calculator");
        println!("======================================");
        println!();
    }

    let airflow_cfm = value_or_prompt(cli.cfm, interactive, "Enter airflow (CFM) [500]: ", 500.0);
    let width_in = value_or_prompt(cli.width, interactive, "Enter duct width (in) [8]: ", 8.0);
    let length_ft = value_or_prompt(cli.length, interactive, "Enter segment length (ft) [25]: ", 25.0);

    let input = DuctSegmentInput::new(cli.label.clone(), width_in, airflow_cfm, length_ft).with_material(material);
    tracing::info!(label = %input.label, airflow_cfm, width_in, length_ft, "analyzing segment");

    let result = engine.analyze_segment(&input)?;
    let report = JsonReport {
        input: &input,
        result: &result,
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| CalcError::serialization(e.to_string()))?;
        println!("{}", json);
        return Ok(());
    }

    print_report(&engine, &input, &result);

    println!();
    println!("JSON Output (for API use):");
    if let Ok(json) = serde_json::to_string_pretty(&report) {
        println!("{}", json);
    }
    Ok(())
}

fn print_report(engine: &CalculationEngine, input: &DuctSegmentInput, result: &SegmentResult) {
    let max = engine.config().max_recommended_velocity_fpm;

    println!();
    println!("═══════════════════════════════════════");
    println!("  DUCT SEGMENT RESULTS: {}", input.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Airflow:  {}", format_calculation_result(input.airflow_cfm, "CFM", 0));
    println!("  Width:    {}", format_calculation_result(input.width_in, "in", 1));
    println!("  Length:   {}", format_calculation_result(input.length_ft, "ft", 1));
    println!("  Material: {}", input.material);
    println!();
    println!("Derived:");
    for (name, value) in result.display_rows() {
        println!("  {:<18} {}", format!("{}:", name), value);
    }
    println!();
    println!("Checks:");
    println!(
        "  Velocity:  {} vs {} max {}",
        format_calculation_result(result.velocity_fpm, "fpm", 0),
        format_calculation_result(max, "fpm", 0),
        status_icon(result.velocity_fpm <= max)
    );
    for error in &result.validation.errors {
        println!("  [ERROR] {}", error);
    }
    for warning in &result.validation.warnings {
        println!("  [WARN]  {}", warning);
    }
    for suggestion in &result.validation.suggestions {
        println!("  [HINT]  {}", suggestion);
    }
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  RESULT: {}",
        if result.validation.is_clean() { "OK" } else { "REVIEW" }
    );
    println!("═══════════════════════════════════════");
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[HIGH]" }
}
