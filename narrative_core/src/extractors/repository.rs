//! Repository signal extraction.

use chrono::{DateTime, Utc};
use narrative_rules::{RepositoryPayload, SourceKind};
use tracing::debug;

use super::SignalExtractor;
use crate::signals::{KeywordMatcher, Signal, SignalMetadata};

/// Weight of a newly created repository. Freshness outranks most trending repos.
pub const NEW_REPO_WEIGHT: f64 = 0.6;

const TRENDING_BASE_WEIGHT: f64 = 0.5;
const TRENDING_WEIGHT_PER_THOUSAND_STARS: f64 = 0.3;
const TRENDING_MAX_WEIGHT: f64 = 0.8;

/// Weight of a trending repository: grows with stars, capped at 0.8.
pub fn trending_repo_weight(stars: u64) -> f64 {
    let boost = (stars as f64 / 1000.0) * TRENDING_WEIGHT_PER_THOUSAND_STARS;
    (TRENDING_BASE_WEIGHT + boost).min(TRENDING_MAX_WEIGHT)
}

/// Extracts signals from trending and newly created repositories.
#[derive(Debug, Clone, Copy)]
pub struct RepositoryExtractor<'a> {
    matcher: &'a KeywordMatcher,
}

impl<'a> RepositoryExtractor<'a> {
    pub fn new(matcher: &'a KeywordMatcher) -> Self {
        Self { matcher }
    }
}

impl SignalExtractor for RepositoryExtractor<'_> {
    type Payload = RepositoryPayload;

    fn source(&self) -> SourceKind {
        SourceKind::Repository
    }

    fn extract(&self, payload: &RepositoryPayload, observed_at: DateTime<Utc>) -> Vec<Signal> {
        let timestamp = payload.timestamp.unwrap_or(observed_at);
        let mut signals = Vec::new();

        for repo in &payload.trending_repos {
            let text = format!(
                "{} {} {}",
                repo.name,
                repo.description.as_deref().unwrap_or_default(),
                repo.topics.as_deref().unwrap_or_default().join(" ")
            );
            signals.extend(Signal::new(
                SourceKind::Repository,
                timestamp,
                self.matcher.match_text(&text),
                trending_repo_weight(repo.stars),
                SignalMetadata::Repo {
                    name: repo.name.clone(),
                    description: repo.description.clone(),
                    stars: repo.stars,
                    url: repo.url.clone(),
                },
            ));
        }

        // Topics are not part of a new repository's text.
        for repo in &payload.new_repos {
            let text = format!(
                "{} {}",
                repo.name,
                repo.description.as_deref().unwrap_or_default()
            );
            signals.extend(Signal::new(
                SourceKind::Repository,
                timestamp,
                self.matcher.match_text(&text),
                NEW_REPO_WEIGHT,
                SignalMetadata::NewRepo {
                    name: repo.name.clone(),
                    description: repo.description.clone(),
                    created_at: repo.created_at,
                },
            ));
        }

        debug!(
            source = %self.source(),
            records = payload.record_count(),
            signals = signals.len(),
            "extracted repository signals"
        );
        signals
    }
}
