mod commands;
mod output;

use clap::{Parser, Subcommand};
use greenguard_core::config::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "greenguard",
    version,
    about = "Estimate greenhouse-gas emissions from bills, receipts and scanned records"
)]
struct Cli {
    /// Config file (default: greenguard.toml in the working directory, if present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the text extracted from a document
    Extract {
        /// Path to PDF, image, text or XLSX file
        input_file: PathBuf,

        /// Override the document kind: pdf, image, text or xlsx
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// Attribute a document's numbers to all seven emission categories
    Total {
        /// Path to PDF, image, text or XLSX file
        input_file: PathBuf,

        /// Override the document kind: pdf, image, text or xlsx
        #[arg(short, long)]
        kind: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the summary report to the configured output directory
        #[arg(long)]
        report: bool,

        /// Show how each line was classified
        #[arg(long)]
        trace: bool,
    },
    /// Run a single-category estimator over a whole document
    Estimate {
        /// Path to PDF, image, text or XLSX file
        input_file: PathBuf,

        /// Override the document kind: pdf, image, text or xlsx
        #[arg(short, long)]
        kind: Option<String>,

        /// Predefined estimator: carbon, methane, nitrous-oxide, vapor, water, plant-intake
        #[arg(short, long, value_name = "NAME")]
        preset: Option<String>,

        /// Custom JSON estimator file
        #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
        estimator: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the estimate report to the configured output directory
        #[arg(long)]
        report: bool,
    },
    /// Inspect the emission category registry
    Categories {
        #[command(subcommand)]
        action: CategoriesAction,
    },
    /// Manage and inspect single-category estimators
    Estimators {
        #[command(subcommand)]
        action: EstimatorsAction,
    },
}

#[derive(Subcommand)]
enum CategoriesAction {
    /// List the seven categories with factors and labels
    List,
    /// Show a category's keywords and conversion
    Explain {
        /// Category name (e.g., "water", "Fuel Emission")
        name: String,
    },
}

#[derive(Subcommand)]
enum EstimatorsAction {
    /// List predefined estimators
    List,
    /// Validate a custom estimator file
    Validate {
        /// Path to JSON estimator file
        file: PathBuf,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
}

fn init_logging(verbose: bool, config: &AppConfig) {
    let fallback = if verbose {
        "debug".to_string()
    } else {
        config.logging.filter.clone()
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    init_logging(cli.verbose, &config);
    tracing::debug!(config = ?cli.config, "configuration loaded");

    let result = match cli.command {
        Commands::Extract { input_file, kind } => {
            commands::extract::run(&input_file, kind.as_deref(), &config)
        }
        Commands::Total {
            input_file,
            kind,
            output,
            report,
            trace,
        } => commands::total::run(
            &input_file,
            kind.as_deref(),
            &output,
            report,
            trace || cli.verbose,
            &config,
        ),
        Commands::Estimate {
            input_file,
            kind,
            preset,
            estimator,
            output,
            report,
        } => commands::estimate::run(
            &input_file,
            kind.as_deref(),
            preset.as_deref(),
            estimator.as_deref(),
            &output,
            report,
            &config,
        ),
        Commands::Categories { action } => match action {
            CategoriesAction::List => commands::categories::list(),
            CategoriesAction::Explain { name } => commands::categories::explain(&name),
        },
        Commands::Estimators { action } => match action {
            EstimatorsAction::List => commands::estimators::list(),
            EstimatorsAction::Validate { file } => commands::estimators::validate(&file),
            EstimatorsAction::Schema => commands::estimators::schema(),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
