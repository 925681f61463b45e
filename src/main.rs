use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use predcheck::cli;
use predcheck::config::ReporterConfig;

#[derive(Parser)]
#[command(name = "predcheck")]
#[command(version, about = "Summarize defect-prediction results for CI", long_about = None)]
struct Cli {
    /// Path to the predictions CSV produced by the upstream model run
    predictions: Option<PathBuf>,

    /// Exit non-zero when any block is predicted fault-prone
    #[arg(long)]
    fail_on_risk: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn init_tracing(verbose: bool, debug: bool) {
    let default_level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose, args.debug);

    // The missing-argument case is a usage error, distinct from all the
    // benign empty-input cases which exit 0
    let Some(path) = args.predictions else {
        println!("Usage: predcheck <predictions_csv>");
        process::exit(1);
    };

    let config = ReporterConfig {
        fail_on_risk: args.fail_on_risk,
    };

    match cli::run(&path, &config) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}
