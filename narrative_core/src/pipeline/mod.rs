//! Pipeline Orchestrator - runs one detection pass end to end.
//!
//! 1. **Collect**: each collector runs in turn; a failure becomes an empty payload
//! 2. **Extract**: every payload goes through its source's extractor
//! 3. **Aggregate**: the flat signal list is scored per narrative
//! 4. **Rank**: narratives are sorted by confidence and timestamped

mod collector;
mod report;

pub use collector::*;
pub use report::*;

use chrono::{DateTime, Utc};
use narrative_rules::{NarrativeDefinition, OnChainPayload, RepositoryPayload, SocialPayload};
use tracing::{info, warn};

use crate::aggregator::{rank_narratives, DetectionResult, IdeaGenerator, NarrativeAggregator};
use crate::extractors::{OnChainExtractor, RepositoryExtractor, SignalExtractor, SocialExtractor};
use crate::signals::{KeywordMatcher, Signal};

/// Everything collected for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedPayloads {
    pub on_chain: OnChainPayload,
    pub repositories: RepositoryPayload,
    pub social: SocialPayload,
}

/// Runs detection passes. Holds no state between runs.
#[derive(Debug, Clone)]
pub struct NarrativeDetector {
    matcher: KeywordMatcher,
    aggregator: NarrativeAggregator,
}

impl NarrativeDetector {
    /// Create a detector over the given definitions and idea generator.
    pub fn new(definitions: &'static [NarrativeDefinition], ideas: IdeaGenerator) -> Self {
        Self {
            matcher: KeywordMatcher::new(definitions),
            aggregator: NarrativeAggregator::new(definitions, ideas),
        }
    }

    /// Create a detector over the built-in definitions and ideas.
    pub fn with_defaults() -> Self {
        Self {
            matcher: KeywordMatcher::with_defaults(),
            aggregator: NarrativeAggregator::with_defaults(),
        }
    }

    /// Run every collector, then detect.
    ///
    /// Collectors run one after another. A collector that fails contributes
    /// an empty payload and the run carries on.
    pub fn detect(
        &self,
        on_chain: &dyn Collector<Payload = OnChainPayload>,
        repositories: &dyn Collector<Payload = RepositoryPayload>,
        social: &dyn Collector<Payload = SocialPayload>,
    ) -> DetectionResult {
        let payloads = CollectedPayloads {
            on_chain: collect_or_empty(on_chain),
            repositories: collect_or_empty(repositories),
            social: collect_or_empty(social),
        };
        self.detect_from_payloads(&payloads)
    }

    /// Detect from payloads that were already collected.
    pub fn detect_from_payloads(&self, payloads: &CollectedPayloads) -> DetectionResult {
        self.detect_at(payloads, Utc::now())
    }

    /// Detect with an explicit clock.
    pub fn detect_at(&self, payloads: &CollectedPayloads, now: DateTime<Utc>) -> DetectionResult {
        let signals = self.extract_signals(payloads, now);
        info!(signals = signals.len(), "collected signals");

        let result = self.score(&signals, now);
        if let Some(leader) = result.narratives.first() {
            info!(
                narratives = result.narratives.len(),
                leader = %leader.id,
                confidence = leader.confidence,
                "detection complete"
            );
        }
        result
    }

    /// Run every extractor and concatenate their signals in source order.
    pub fn extract_signals(
        &self,
        payloads: &CollectedPayloads,
        observed_at: DateTime<Utc>,
    ) -> Vec<Signal> {
        let mut signals =
            OnChainExtractor::new(&self.matcher).extract(&payloads.on_chain, observed_at);
        signals.extend(
            RepositoryExtractor::new(&self.matcher).extract(&payloads.repositories, observed_at),
        );
        signals.extend(SocialExtractor::new().extract(&payloads.social, observed_at));
        signals
    }

    /// Aggregate and rank an already-extracted signal list.
    pub fn score(&self, signals: &[Signal], now: DateTime<Utc>) -> DetectionResult {
        let mut narratives = self.aggregator.aggregate(signals, now);
        rank_narratives(&mut narratives);
        DetectionResult {
            timestamp: now,
            narratives,
        }
    }
}

impl Default for NarrativeDetector {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Collect a payload, degrading any failure to an empty one.
pub fn collect_or_empty<C>(collector: &C) -> C::Payload
where
    C: Collector + ?Sized,
{
    match collector.collect() {
        Ok(payload) => payload,
        Err(e) => {
            warn!(
                collector = collector.name(),
                error = %e,
                "collection failed, using empty payload"
            );
            C::Payload::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::PLACEHOLDER_CONFIDENCE;
    use crate::error::{CollectError, CollectResult};
    use narrative_rules::{Engagement, NftEvent, SocialPost, TokenTransfer, TrendingRepo};

    struct Unreachable;

    impl Collector for Unreachable {
        type Payload = RepositoryPayload;

        fn name(&self) -> &str {
            "github"
        }

        fn collect(&self) -> CollectResult<RepositoryPayload> {
            Err(CollectError::Unavailable("rate limited".to_string()))
        }
    }

    fn token_payload() -> OnChainPayload {
        OnChainPayload {
            token_transfers: vec![TokenTransfer {
                token_name: Some("Yield".to_string()),
                token_symbol: None,
                mint: "Mint111".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_failed_collector_degrades_to_empty() {
        let detector = NarrativeDetector::with_defaults();
        let result = detector.detect(
            &StaticCollector::new("helius", token_payload()),
            &Unreachable,
            &StaticCollector::new("social", SocialPayload::new()),
        );

        assert_eq!(result.narratives.len(), 6);
        let defi = result.narratives.iter().find(|n| n.id == "defi-innovation").unwrap();
        assert!((defi.confidence - 0.06).abs() < 1e-9);
        assert_eq!(defi.data_sources.on_chain, 1);
    }

    #[test]
    fn test_low_match_ranks_below_placeholders() {
        let detector = NarrativeDetector::with_defaults();
        let payloads = CollectedPayloads {
            on_chain: token_payload(),
            ..Default::default()
        };
        let result = detector.detect_from_payloads(&payloads);

        let last = result.narratives.last().unwrap();
        assert_eq!(last.id, "defi-innovation");
        for narrative in &result.narratives[..5] {
            assert_eq!(narrative.confidence, PLACEHOLDER_CONFIDENCE);
        }
    }

    #[test]
    fn test_all_sources_contribute() {
        let detector = NarrativeDetector::with_defaults();
        let payloads = CollectedPayloads {
            on_chain: OnChainPayload {
                nft_events: vec![NftEvent {
                    collection: "Mad Lads".to_string(),
                }],
                ..Default::default()
            },
            repositories: RepositoryPayload {
                trending_repos: vec![TrendingRepo {
                    name: "game-engine".to_string(),
                    description: Some("On-chain gaming".to_string()),
                    topics: None,
                    stars: 2000,
                    url: "https://github.com/example/game-engine".to_string(),
                }],
                ..Default::default()
            },
            social: vec![SocialPost {
                keywords: vec!["NFT".to_string()],
                engagement: Some(Engagement {
                    likes: 100,
                    retweets: 50,
                    replies: 20,
                }),
                author: "@builder".to_string(),
                content: "New NFT drop".to_string(),
                ..Default::default()
            }],
        };

        let signals = detector.extract_signals(&payloads, Utc::now());
        assert_eq!(signals.len(), 3);

        let result = detector.detect_from_payloads(&payloads);
        let gaming = &result.narratives[0];
        assert_eq!(gaming.id, "gaming-nft");
        // 0.4 + 0.8 + 0.9
        assert!((gaming.confidence - 0.42).abs() < 1e-9);
        assert_eq!(gaming.data_sources.on_chain, 1);
        assert_eq!(gaming.data_sources.repository, 1);
        assert_eq!(gaming.data_sources.social, 1);
        assert_eq!(gaming.top_projects.len(), 1);
        assert_eq!(gaming.top_projects[0].name, "game-engine");
        assert_eq!(gaming.trending_keywords[0], "NFT");
    }

    #[test]
    fn test_result_timestamp() {
        let now = "2026-10-16T09:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let result =
            NarrativeDetector::with_defaults().detect_at(&CollectedPayloads::default(), now);

        assert_eq!(result.timestamp, now);
        assert!(result.narratives.iter().all(|n| n.last_updated == now));
    }
}
