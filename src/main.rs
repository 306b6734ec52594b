//! eagle-tp-clearance: minimum test point clearance check for Eagle boards
//!
//! Prints the smallest centre-to-centre distance between any two test points
//! of an Eagle `.brd` file and optionally fails when it violates a limit.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info, Level};

use eagle_tp_clearance::clearance::{format_result, Comparison};
use eagle_tp_clearance::config;
use eagle_tp_clearance::eagle::{BoardError, BoardErrorKind};
use eagle_tp_clearance::pipeline;

/// Check Eagle board files for the distance between test points.
///
/// The printed value is the distance from centre to centre of the test pads,
/// or "none" if the board has fewer than two test points.
#[derive(Parser, Debug)]
#[command(name = "eagle-tp-clearance")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Eagle board file (.brd)
    #[arg(value_name = "BOARDFILE")]
    boardfile: PathBuf,

    /// Clearance limit for the minimum test point distance (0 disables the check)
    #[arg(short, long, value_name = "DISTANCE", allow_negative_numbers = true)]
    limit: Option<f64>,

    /// How the distance is compared against the limit [default: at-least]
    #[arg(short, long, value_enum)]
    comparison: Option<Comparison>,

    /// Path to a JSON settings file
    #[arg(long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for warnings, -vv for info, -vvv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Unknown settings-file levels fall back to errors only
fn get_log_level(verbose: u8, config_level: &str) -> Level {
    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::ERROR, // Default to errors only for unknown levels
        },
        1 => Level::WARN,
        2 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Initialises the tracing subscriber for logging.
///
/// Debug output is annotated with source file and line.
fn init_tracing(level: Level) {
    let annotate = level >= Level::DEBUG;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_file(annotate)
        .with_line_number(annotate)
        .with_writer(std::io::stderr)
        .init();
}

/// Logs a fatal board error with a message specific to its category.
fn report_board_error(err: &BoardError) {
    match err.kind() {
        BoardErrorKind::NotABoard => error!("File is not an Eagle board file"),
        BoardErrorKind::InputFormat => error!(error = %err, "File could not be parsed as XML"),
        BoardErrorKind::DataMalformation => error!(error = %err, "Invalid test point data"),
        BoardErrorKind::Io => {
            let cause = std::error::Error::source(err).map(ToString::to_string);
            error!(error = %err, cause = ?cause, "Could not read board file");
        }
    }
}

/// Entry point for eagle-tp-clearance.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load the optional settings file
    let file_config = match args.config.as_deref().map(config::load_config).transpose() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let config_level = file_config
        .as_ref()
        .map_or("error", |cfg| cfg.logging.level.as_str());
    init_tracing(get_log_level(args.verbose, config_level));

    let settings =
        match config::resolve_settings(file_config.as_ref(), args.limit, args.comparison) {
            Ok(settings) => settings,
            Err(e) => {
                error!(error = %e, "Invalid settings");
                return ExitCode::FAILURE;
            }
        };

    info!(
        limit = ?settings.limit,
        comparison = %settings.comparison,
        board = %args.boardfile.display(),
        "Checking test point clearance"
    );

    let report = match pipeline::run(&args.boardfile, &settings) {
        Ok(report) => report,
        Err(e) => {
            report_board_error(&e);
            debug!("result code is 1");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", format_result(&report.result));

    if report.verdict.is_pass() {
        debug!("result code is 0");
        ExitCode::SUCCESS
    } else {
        info!(limit = ?settings.limit, "Test point clearance violated");
        debug!("result code is 1");
        ExitCode::FAILURE
    }
}
