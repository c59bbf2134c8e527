mod config;
mod publish;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use narrative_core::{
    Collector, DetectionReport, JsonFileCollector, NarrativeDetector, SocialFileCollector,
    StaticCollector,
};
use narrative_rules::{OnChainPayload, RepositoryPayload, SocialPayload};
use tracing::{debug, info, warn};

use config::DetectorConfig;
use publish::publish_report;

/// Narrative detector - scores topical narratives from collected activity
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Saved on-chain payload (JSON)
    #[arg(long)]
    on_chain: Option<PathBuf>,

    /// Saved repository payload (JSON)
    #[arg(long)]
    repositories: Option<PathBuf>,

    /// Saved social posts (JSON)
    #[arg(long)]
    social: Option<PathBuf>,

    /// Directory to publish the report into (repeatable, replaces configured ones)
    #[arg(short, long = "output-dir")]
    output_dirs: Vec<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Run one detection pass and publish the report (default)
    Once,
    /// Run each collector on its own and report what it returned
    Check,
}

impl Args {
    /// Merge command-line overrides into the loaded config.
    fn apply_to(&self, config: &mut DetectorConfig) {
        if let Some(path) = &self.on_chain {
            config.inputs.on_chain = Some(path.clone());
        }
        if let Some(path) = &self.repositories {
            config.inputs.repositories = Some(path.clone());
        }
        if let Some(path) = &self.social {
            config.inputs.social = Some(path.clone());
        }
        if !self.output_dirs.is_empty() {
            config.output.directories = self.output_dirs.clone();
        }
    }
}

fn on_chain_collector(path: Option<&Path>) -> Box<dyn Collector<Payload = OnChainPayload>> {
    match path {
        Some(path) => Box::new(JsonFileCollector::<OnChainPayload>::new("helius", path)),
        None => Box::new(StaticCollector::new("helius", OnChainPayload::default())),
    }
}

fn repository_collector(path: Option<&Path>) -> Box<dyn Collector<Payload = RepositoryPayload>> {
    match path {
        Some(path) => Box::new(JsonFileCollector::<RepositoryPayload>::new("github", path)),
        None => Box::new(StaticCollector::new("github", RepositoryPayload::default())),
    }
}

fn social_collector(path: Option<&Path>) -> Box<dyn Collector<Payload = SocialPayload>> {
    match path {
        Some(path) => Box::new(SocialFileCollector::new(path)),
        None => Box::new(StaticCollector::new("social", SocialPayload::new())),
    }
}

fn run_once(config: &DetectorConfig) -> Result<()> {
    let started = std::time::Instant::now();
    let inputs = &config.inputs;

    let detector = NarrativeDetector::with_defaults();
    let result = detector.detect(
        &*on_chain_collector(inputs.on_chain.as_deref()),
        &*repository_collector(inputs.repositories.as_deref()),
        &*social_collector(inputs.social.as_deref()),
    );
    let report = DetectionReport::from(result);

    publish_report(&report, &config.output.directories, &config.output.file_name)
        .context("failed to publish report")?;

    info!(
        narratives = report.total_narratives,
        trending = ?report.trending,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "detection complete"
    );
    for line in report.summary_lines() {
        println!("{line}");
    }
    Ok(())
}

fn run_check(config: &DetectorConfig) {
    let inputs = &config.inputs;

    let on_chain = on_chain_collector(inputs.on_chain.as_deref());
    match on_chain.collect() {
        Ok(payload) => info!(
            collector = on_chain.name(),
            token_transfers = payload.token_transfers.len(),
            nft_events = payload.nft_events.len(),
            program_interactions = payload.program_interactions.len(),
            "collector ok"
        ),
        Err(e) => warn!(collector = on_chain.name(), error = %e, "collector failed"),
    }

    let repositories = repository_collector(inputs.repositories.as_deref());
    match repositories.collect() {
        Ok(payload) => info!(
            collector = repositories.name(),
            trending = payload.trending_repos.len(),
            new = payload.new_repos.len(),
            "collector ok"
        ),
        Err(e) => warn!(collector = repositories.name(), error = %e, "collector failed"),
    }

    let social = social_collector(inputs.social.as_deref());
    match social.collect() {
        Ok(payload) => info!(collector = social.name(), posts = payload.len(), "collector ok"),
        Err(e) => warn!(collector = social.name(), error = %e, "collector failed"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => DetectorConfig::load(path)?,
        None => DetectorConfig::default(),
    };
    args.apply_to(&mut config);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_target(false)
        .init();

    debug!(?config, "loaded configuration");

    match args.command.unwrap_or(Command::Once) {
        Command::Once => run_once(&config),
        Command::Check => {
            run_check(&config);
            Ok(())
        }
    }
}
