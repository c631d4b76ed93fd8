#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use output::OutputMode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "skillet: recipe co-occurrence graph analyzer",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Analyze a recipe corpus",
        long_about = "Build the recipe co-occurrence graph from a CSV corpus, compute \
                      topology and ingredient statistics, and write the combined JSON report.",
        after_help = "EXAMPLES:\n    # Analyze a corpus and write graph_analysis.json\n    skillet analyze recipes.csv\n\n    # Bound the load and emit the report on stdout\n    skillet analyze recipes.csv --limit 1000 --json\n\n    # Score recipes against an ingredient-pairing table\n    skillet analyze recipes.csv --pairing flavor_edges.csv"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match &cli.command {
        Commands::Analyze(args) => cmd::analyze::run_analyze(args, cli.output_mode()),
    }
}

/// Wire the tracing subscriber: stderr, env-filter overridable via
/// `SKILLET_LOG`, default level from the verbosity flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env("SKILLET_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
