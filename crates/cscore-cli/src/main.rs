//! Command line interface for scoring creator profiles from an exported
//! dataset.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cscore_ai::{InsightClient, UnavailableProvider};
use cscore_core::AppConfig;
use cscore_engine::insight::InsightProvider;
use cscore_engine::{Category, ScoringEngine};
use cscore_store::DatasetStore;

mod output;

#[derive(Debug, Parser)]
#[command(name = "cscore")]
#[command(about = "Creator profile scoring over an exported dataset")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute the full six-category score report for a profile.
    Score {
        /// Profile UUID or handle.
        #[arg(long)]
        profile: String,
        /// Emit the raw report as JSON instead of the formatted view.
        #[arg(long)]
        json: bool,
    },
    /// Compute a single category, for diagnostics.
    Category {
        /// Profile UUID or handle.
        #[arg(long)]
        profile: String,
        /// Category name (e.g. `audience`, `content_relevance`, `growth`).
        #[arg(long)]
        category: String,
        /// Emit the raw category as JSON instead of the formatted view.
        #[arg(long)]
        json: bool,
    },
    /// List the profiles available in the dataset.
    Profiles,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = cscore_core::load_app_config().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();

    let policy = cscore_core::load_policy(&config.policy_path)
        .with_context(|| format!("loading policy from {}", config.policy_path.display()))?;
    let store = DatasetStore::from_path(&config.dataset_path)
        .with_context(|| format!("loading dataset from {}", config.dataset_path.display()))?;
    let provider = build_provider(&config)?;
    let engine = ScoringEngine::new(
        store.store_set(),
        provider,
        policy,
        Duration::from_secs(config.insight_timeout_secs),
    );

    match cli.command {
        Commands::Score { profile, json } => {
            let profile = store
                .resolve(&profile)
                .with_context(|| format!("profile '{profile}' not found in dataset"))?;
            let report = engine.compute_profile_score(profile.id).await?;
            output::print_report(&report, json)?;
        }
        Commands::Category {
            profile,
            category,
            json,
        } => {
            let profile = store
                .resolve(&profile)
                .with_context(|| format!("profile '{profile}' not found in dataset"))?;
            let category: Category = category
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            let score = engine.compute_category(profile.id, category).await?;
            output::print_category(&score, json)?;
        }
        Commands::Profiles => {
            output::print_profiles(store.profiles());
        }
    }

    Ok(())
}

/// Pick the insight provider from configuration: the HTTP client when an
/// API endpoint is configured, otherwise the always-off provider (every
/// AI-backed metric then resolves to its documented default).
fn build_provider(config: &AppConfig) -> anyhow::Result<Arc<dyn InsightProvider>> {
    match (&config.insight_api_url, &config.insight_api_key) {
        (Some(url), Some(key)) => {
            let client = InsightClient::with_base_url(key, config.insight_timeout_secs, url)
                .context("constructing insight client")?;
            Ok(Arc::new(client))
        }
        (Some(_), None) => {
            anyhow::bail!("CSCORE_INSIGHT_API_URL is set but CSCORE_INSIGHT_API_KEY is missing")
        }
        (None, _) => {
            tracing::info!("no insight API configured, AI-backed metrics fall back to defaults");
            Ok(Arc::new(UnavailableProvider))
        }
    }
}
