mod config;
mod error;

use clap::Parser;
use megaverse_core::{
    parse_goal_map, GoalFetcher, MegaverseApi, MegaverseClient, PlacementReport, Placer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{candidate_id_from_env, load_config, resolve_settings, Overrides, Settings};
use crate::error::ToolError;

#[derive(Parser)]
#[command(name = "mvb")]
#[command(about = "Builds a Crossmint megaverse from its goal map", long_about = None)]
struct Cli {
    /// Candidate id used for every API call
    #[arg(long)]
    candidate_id: Option<String>,

    /// API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Attempts per placement while rate limited
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Wait after the first rate-limited attempt, in milliseconds
    #[arg(long)]
    base_delay_ms: Option<u64>,

    /// Log placements without sending them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let overrides = Overrides {
        candidate_id: cli.candidate_id,
        base_url: cli.base_url,
        max_attempts: cli.max_attempts,
        base_delay_ms: cli.base_delay_ms,
    };
    let settings = resolve_settings(overrides, candidate_id_from_env(), load_config())?;

    let client = MegaverseClient::with_base_url(&settings.base_url);
    let report = run(&client, &settings, cli.dry_run).await?;

    info!(
        placed = report.placed,
        skipped = report.skipped,
        failed = report.failed,
        "Megaverse build finished"
    );

    Ok(())
}

async fn run<A: MegaverseApi>(
    api: &A,
    settings: &Settings,
    dry_run: bool,
) -> Result<PlacementReport, ToolError> {
    let mut fetcher = GoalFetcher::new(api, settings.candidate_id.as_str());
    if !fetcher.fetch().await? {
        return Err(ToolError::GoalUnavailable);
    }

    let placements = fetcher.goal().map(parse_goal_map).unwrap_or_default();
    info!(count = placements.len(), "Parsed goal map");

    let placer = Placer::new(api, settings.candidate_id.as_str(), settings.policy.clone())
        .with_dry_run(dry_run);
    Ok(placer.place_all(&placements).await)
}
