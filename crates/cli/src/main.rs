//! Pipelined Taylor evaluator CLI.
//!
//! This binary drives the cycle-accurate model. It performs:
//! 1. **Demo:** Verify the built-in x^2 and 5-term e^x pipelines (default).
//! 2. **Config run:** Verify the runs described by a JSON configuration file.
//! 3. **Quality:** Compare the 5-term e^x series against `f64::exp`.
//!
//! The exit status is 0 iff every comparison passed.

mod console;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use taylorsim_core::Verifier;
use taylorsim_core::config::Config;
use taylorsim_core::sim::reference::exp_series;
use taylorsim_core::stats::VerifyStats;

use crate::console::{ConsoleSink, GREEN, Palette, RED, RESET, YELLOW};

/// Exit status for configuration or construction errors.
const EXIT_CONFIG_ERROR: i32 = 2;

/// Inputs tabulated by the `quality` subcommand.
const QUALITY_POINTS: [f64; 7] = [-1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0];

/// Terms in the e^x series evaluated by the built-in order-4 pipeline.
const EXP_TERMS: u32 = 5;

#[derive(Parser, Debug)]
#[command(
    name = "taylorsim",
    author,
    version,
    about = "Cycle-accurate model of a pipelined fixed-point Taylor evaluator",
    long_about = "Drive the bit-accurate Horner pipeline model and check every valid output.\n\nExamples:\n  taylorsim\n  taylorsim run --config runs.json\n  taylorsim quality\n  RUST_LOG=trace taylorsim demo"
)]
struct Cli {
    /// Disable ANSI colors.
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace). Overridden by RUST_LOG.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Verify the built-in demonstrations (x^2 and 5-term e^x in Q15.16).
    Demo,

    /// Verify the runs described by a JSON configuration file.
    Run {
        /// Configuration file path.
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Tabulate the 5-term e^x series against the exact exponential.
    Quality,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let palette = Palette::new(!cli.no_color);

    let code = match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            let code = cmd_verify(&Config::builtin(), palette);
            print_quality(palette);
            code
        }
        Commands::Run { config } => {
            info!(path = %config.display(), "running configuration");
            match Config::from_path(&config) {
                Ok(config) => cmd_verify(&config, palette),
                Err(e) => {
                    eprintln!("Error: {}: {e}", config.display());
                    EXIT_CONFIG_ERROR
                }
            }
        }
        Commands::Quality => {
            print_quality(palette);
            0
        }
    };
    process::exit(code);
}

/// Installs the stderr log subscriber; `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Verifies every run in `config`, prints the summary and returns the exit status.
fn cmd_verify(config: &Config, palette: Palette) -> i32 {
    let format = match config.format.to_format() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_CONFIG_ERROR;
        }
    };

    println!("=================================================================");
    println!("  Taylor Polynomial Evaluator - Bit-Accurate Simulation");
    println!(
        "  Fixed-point: {format}   scale = {}",
        format.scale()
    );
    println!("=================================================================");

    let mut verifier = Verifier::new(ConsoleSink::new(palette));
    if let Err(e) = verifier.run_config(config) {
        eprintln!("Error: {e}");
        return EXIT_CONFIG_ERROR;
    }

    let (_, stats) = verifier.into_parts();
    debug!(
        runs = stats.runs,
        passed = stats.passed,
        failed = stats.failed,
        "verification complete"
    );
    print_summary(&stats, palette);
    stats.exit_code()
}

fn print_summary(stats: &VerifyStats, palette: Palette) {
    println!("\n{stats}");
    if stats.all_passed() {
        println!("  {}ALL TESTS PASSED{}", palette.paint(GREEN), palette.paint(RESET));
    } else {
        println!(
            "  {}*** FAILURES DETECTED ***{}",
            palette.paint(RED),
            palette.paint(RESET)
        );
    }
}

/// Prints the truncated-series approximation error table.
fn print_quality(palette: Palette) {
    println!(
        "\n{}--- Approximation quality: {EXP_TERMS}-term e^x vs exp() ---{}",
        palette.paint(YELLOW),
        palette.paint(RESET)
    );
    println!("  {:>6}  {:>12}  {:>12}  {:>12}", "x", "5-term", "exp", "abs err");
    println!("  {:-<6}  {:-<12}  {:-<12}  {:-<12}", "", "", "", "");
    for x in QUALITY_POINTS {
        let approx = exp_series(x, EXP_TERMS);
        let exact = x.exp();
        println!(
            "  {x:6.2}  {approx:12.7}  {exact:12.7}  {:12.2e}",
            (approx - exact).abs()
        );
    }
}
