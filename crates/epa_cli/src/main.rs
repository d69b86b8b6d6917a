//! epa CLI
//!
//! Coach summaries, player match profiles and match dashboards from a JSON
//! event dataset. Reports go to stdout as JSON; logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use epa_cli::{exit_code, run_report, schemas_json, write_json, Report, ReportContext};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "epa")]
#[command(version = epa_core::VERSION)]
#[command(about = "Explainable performance analytics for football match events", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct Source {
    /// Dataset JSON file
    #[arg(long, env = "EPA_DATASET")]
    dataset: PathBuf,

    /// YAML config file (default: EPA_PROFILE preset)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output language, e.g. ru-RU or en-US
    #[arg(long)]
    locale: Option<String>,

    /// Write JSON here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Team summary over the most recent matches
    CoachSummary {
        #[command(flatten)]
        source: Source,

        #[arg(long)]
        team: Uuid,

        /// Restrict the window to these matches
        #[arg(long = "match", value_delimiter = ',')]
        matches: Vec<Uuid>,
    },

    /// One player's profile for one match
    PlayerProfile {
        #[command(flatten)]
        source: Source,

        #[arg(long = "match")]
        match_id: Uuid,

        #[arg(long)]
        player: Uuid,
    },

    /// Match-level team comparison
    MatchDashboard {
        #[command(flatten)]
        source: Source,

        #[arg(long = "match")]
        match_id: Uuid,
    },

    /// JSON Schemas of the report payloads
    Schema {
        /// Write JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,epa_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn render(source: Source, report: Report) -> Result<()> {
    let ctx = ReportContext::load(&source.dataset, source.config.as_deref(), source.locale.as_deref())?;
    let value = run_report(&ctx, &report)?;
    write_json(&value, source.out.as_deref())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::CoachSummary { source, team, matches } => {
            render(source, Report::CoachSummary { team_id: team, match_ids: matches })
        }
        Commands::PlayerProfile { source, match_id, player } => {
            render(source, Report::PlayerProfile { match_id, player_id: player })
        }
        Commands::MatchDashboard { source, match_id } => {
            render(source, Report::MatchDashboard { match_id })
        }
        Commands::Schema { out } => write_json(&schemas_json()?, out.as_deref()),
    }
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}
