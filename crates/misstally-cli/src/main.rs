//! misstally CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "misstally",
    version,
    about = "Tally missed quiz questions by question type"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter missed question numbers for a test and show results per type
    Analyze {
        /// Test definition .json file or directory (default: config catalog_dir)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Name of the test to analyze (prompts for a choice if omitted)
        #[arg(long)]
        test: Option<String>,

        /// Output format: table, markdown, json
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the tests available in a catalog
    List {
        /// Test definition .json file or directory
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate test definition files
    Validate {
        /// Path to a test definition file or directory
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Count missed question types typed in directly, without a test file
    Tally {
        /// Output format: table, markdown, json
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and example test definition
    Init,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("misstally=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            catalog,
            test,
            format,
            config,
        } => commands::analyze::execute(catalog, test, format, config),
        Commands::List { catalog, config } => commands::list::execute(catalog, config),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Tally { format, config } => commands::tally::execute(format, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
