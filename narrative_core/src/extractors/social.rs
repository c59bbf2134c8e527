//! Social signal extraction.

use chrono::{DateTime, Utc};
use narrative_rules::{Engagement, SocialPayload, SourceKind};
use tracing::debug;

use super::SignalExtractor;
use crate::signals::{Signal, SignalMetadata};

const SOCIAL_BASE_WEIGHT: f64 = 0.4;
const SOCIAL_WEIGHT_PER_ENGAGEMENT: f64 = 0.4;
const SOCIAL_MAX_WEIGHT: f64 = 0.9;

/// Number of leading characters of a post kept as evidence.
pub const SOCIAL_EXCERPT_CHARS: usize = 100;

/// Engagement score of a post. Replies count three times, retweets twice.
pub fn engagement_score(engagement: &Engagement) -> f64 {
    let weighted = engagement.likes as f64
        + 2.0 * engagement.retweets as f64
        + 3.0 * engagement.replies as f64;
    weighted / 100.0
}

/// Weight of a social post: grows with engagement, capped at 0.9.
pub fn social_weight(engagement: Option<&Engagement>) -> f64 {
    let score = engagement.map(engagement_score).unwrap_or(0.0);
    (SOCIAL_BASE_WEIGHT + score * SOCIAL_WEIGHT_PER_ENGAGEMENT).min(SOCIAL_MAX_WEIGHT)
}

/// Extracts signals from social posts.
///
/// Posts arrive already tagged by the collector, so no matching happens here.
#[derive(Debug, Clone, Copy, Default)]
pub struct SocialExtractor;

impl SocialExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl SignalExtractor for SocialExtractor {
    type Payload = SocialPayload;

    fn source(&self) -> SourceKind {
        SourceKind::Social
    }

    fn extract(&self, payload: &SocialPayload, observed_at: DateTime<Utc>) -> Vec<Signal> {
        let signals: Vec<Signal> = payload
            .iter()
            .filter_map(|post| {
                Signal::new(
                    SourceKind::Social,
                    post.timestamp.unwrap_or(observed_at),
                    post.keywords.clone(),
                    social_weight(post.engagement.as_ref()),
                    SignalMetadata::Social {
                        author: post.author.clone(),
                        content: post.content.chars().take(SOCIAL_EXCERPT_CHARS).collect(),
                        urls: post.urls.clone(),
                    },
                )
            })
            .collect();

        debug!(
            source = %self.source(),
            posts = payload.len(),
            signals = signals.len(),
            "extracted social signals"
        );
        signals
    }
}
