//! Querybind command-line entry point.
//!
//! Resolves template variables in query batches and exercises the range
//! matcher's editing helpers.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "querybind")]
#[command(about = "Resolve template variables in data-source queries")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a batch of queries against a variables document
    Resolve {
        /// Variables document (.json, .yaml or .yml)
        #[arg(long)]
        variables: PathBuf,

        /// Query batch (.json)
        #[arg(long)]
        queries: PathBuf,

        /// Scoped overrides, a map of name to `{text, value}`
        #[arg(long)]
        scoped: Option<PathBuf>,

        /// Resolver settings file
        #[arg(long, env = "QUERYBIND_SETTINGS")]
        settings: Option<PathBuf>,

        /// Write the resolved batch here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check range matcher bounds
    ValidateRange {
        /// Lower bound
        #[arg(long, allow_hyphen_values = true)]
        from: String,

        /// Upper bound
        #[arg(long, allow_hyphen_values = true)]
        to: String,
    },

    /// List the variables offered as bound suggestions
    Suggest {
        /// Variables document (.json, .yaml or .yml)
        #[arg(long)]
        variables: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            variables,
            queries,
            scoped,
            settings,
            output,
        } => {
            commands::resolve(commands::ResolveArgs {
                variables,
                queries,
                scoped,
                settings,
                output,
            })
            .await?;
        }
        Commands::ValidateRange { from, to } => commands::validate_range(&from, &to)?,
        Commands::Suggest { variables } => commands::suggest(&variables).await?,
    }

    Ok(())
}
