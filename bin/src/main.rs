//! leadscope CLI - TAM and ROI estimates for outbound sales campaigns.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use leadscope_lib::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod display;

use commands::roi::CampaignArgs;
use display::Kind;

#[derive(Parser)]
#[command(name = "leadscope")]
#[command(about = "TAM and ROI estimates for outbound sales campaigns", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (log errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Weight tables JSON file replacing the built-in tables
    #[arg(long, global = true, env = "LEADSCOPE_TABLES")]
    tables: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the total addressable market for a segment
    Tam {
        /// Industry to include (repeatable)
        #[arg(short, long = "industry")]
        industries: Vec<String>,

        /// Decision-maker role to include (repeatable)
        #[arg(short, long = "role")]
        roles: Vec<String>,

        /// Company-size bucket to include (repeatable, e.g. 51-200)
        #[arg(short, long = "size")]
        sizes: Vec<String>,

        /// Lead data source
        #[arg(long, default_value = "LinkedIn")]
        source: String,

        /// Target region
        #[arg(long, default_value = "US")]
        region: String,

        /// Scale the base market by this factor
        #[arg(short, long, value_parser = commands::finite_number)]
        multiplier: Option<f64>,

        /// Pick the segment from prompts instead of flags
        #[arg(long)]
        interactive: bool,

        /// Output format (text, json, csv)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Estimate the return of an outreach campaign
    Roi {
        /// Campaign JSON file to start from instead of the defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        campaign: CampaignArgs,

        /// Output format (text, json, csv)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the weight tables
    Tables {
        /// Show a single table
        #[arg(short, long, value_enum)]
        kind: Option<Kind>,

        /// Only show labels containing this pattern
        #[arg(short, long)]
        search: Option<String>,
    },
}

/// Installs the log subscriber. `RUST_LOG` takes precedence over the flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Tam {
            industries,
            roles,
            sizes,
            source,
            region,
            multiplier,
            interactive,
            format,
            output,
        } => {
            let tables = config::load_tables(cli.tables.as_deref())?;
            let selection = commands::tam::Selection {
                industries,
                roles,
                sizes,
                source,
                region,
                multiplier,
            };
            commands::tam::tam(&tables, selection, interactive, format, output.as_deref())
        }
        Commands::Roi {
            config: base,
            campaign,
            format,
            output,
        } => commands::roi::roi(base.as_deref(), &campaign, format, output.as_deref()),
        Commands::Tables { kind, search } => {
            let tables = config::load_tables(cli.tables.as_deref())?;
            commands::tables::list_tables(&tables, kind, search.as_deref());
            Ok(())
        }
    }
}
