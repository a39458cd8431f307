//! Mood Stamps CLI
//!
//! Groups the stamps on a post by kind and writes a JSON report,
//! with an optional text summary.

use anyhow::Result;
use clap::parser::ValueSource;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use env_logger::Env;
use std::ffi::OsString;
use std::path::PathBuf;

use mood_stamps::aggregator::ReactionPolicy;
use mood_stamps::commands::{
    display_catalog, display_schema, display_version, execute_aggregate, validate_args,
    validate_report_file, AggregateArgs,
};
use mood_stamps::utils::config::DEFAULT_TOP_GROUPS;

/// Mood Stamps - stamp aggregation for posts
#[derive(Parser, Debug)]
#[command(name = "mood-stamps")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate the stamps on a post
    Aggregate {
        /// JSON file holding the stamps (takes precedence over MOOD_STAMPS_URL)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// URL returning the stamps as JSON
        #[arg(short, long, env = "MOOD_STAMPS_URL")]
        url: Option<String>,

        /// Post the stamps belong to
        #[arg(short, long)]
        post_id: Option<String>,

        /// Output path for JSON report
        #[arg(short, long, default_value = "stamps-report.json")]
        output: PathBuf,

        /// How repeat reactions from one reactor are counted
        #[arg(long, value_enum, default_value_t = ReactionPolicy::CountAll)]
        policy: ReactionPolicy,

        /// Catalog TOML overriding the built-in glyphs and labels
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Number of groups listed in the summary
        #[arg(long, default_value_t = DEFAULT_TOP_GROUPS)]
        top: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Print the stamp catalog
    Catalog {
        /// Catalog TOML to print instead of the built-in one
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

/// Parse arguments, letting `--input` win over a URL taken from the environment
///
/// Two sources are only an error when both were passed as flags; that case is
/// left for `validate_args` to reject.
fn parse_cli<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = Cli::command().try_get_matches_from(args)?;
    let mut cli = Cli::from_arg_matches(&matches)?;

    if let (Some(("aggregate", sub)), Commands::Aggregate { input, url, .. }) =
        (matches.subcommand(), &mut cli.command)
    {
        if input.is_some() && sub.value_source("url") == Some(ValueSource::EnvVariable) {
            *url = None;
        }
    }

    Ok(cli)
}

fn main() -> Result<()> {
    let cli = parse_cli(std::env::args_os()).unwrap_or_else(|e| e.exit());

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Aggregate {
            input,
            url,
            post_id,
            output,
            policy,
            catalog,
            top,
            summary,
        } => {
            let args = AggregateArgs {
                input,
                url,
                post_id,
                output_json: output,
                policy,
                catalog,
                top_groups: top,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_aggregate(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Catalog { file } => {
            display_catalog(file.as_deref())?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
