//! On-chain signal extraction.

use chrono::{DateTime, Utc};
use narrative_rules::{OnChainPayload, SourceKind};
use tracing::debug;

use super::SignalExtractor;
use crate::signals::{KeywordMatcher, Signal, SignalMetadata};

/// Weight of a token transfer whose name or symbol matched.
pub const TOKEN_TRANSFER_WEIGHT: f64 = 0.3;

/// Weight of any NFT event.
pub const NFT_EVENT_WEIGHT: f64 = 0.4;

/// Weight of a program interaction whose display name matched.
pub const PROGRAM_INTERACTION_WEIGHT: f64 = 0.5;

/// Keywords every NFT event carries, regardless of its collection.
pub const NFT_EVENT_KEYWORDS: [&str; 2] = ["NFT", "collectible"];

/// Extracts signals from token transfers, NFT events and program interactions.
#[derive(Debug, Clone, Copy)]
pub struct OnChainExtractor<'a> {
    matcher: &'a KeywordMatcher,
}

impl<'a> OnChainExtractor<'a> {
    pub fn new(matcher: &'a KeywordMatcher) -> Self {
        Self { matcher }
    }
}

impl SignalExtractor for OnChainExtractor<'_> {
    type Payload = OnChainPayload;

    fn source(&self) -> SourceKind {
        SourceKind::OnChain
    }

    fn extract(&self, payload: &OnChainPayload, observed_at: DateTime<Utc>) -> Vec<Signal> {
        let timestamp = payload.timestamp.unwrap_or(observed_at);
        let mut signals = Vec::new();

        for transfer in &payload.token_transfers {
            let text = format!(
                "{} {}",
                transfer.token_name.as_deref().unwrap_or_default(),
                transfer.token_symbol.as_deref().unwrap_or_default()
            );
            signals.extend(Signal::new(
                SourceKind::OnChain,
                timestamp,
                self.matcher.match_text(&text),
                TOKEN_TRANSFER_WEIGHT,
                SignalMetadata::Token {
                    mint: transfer.mint.clone(),
                },
            ));
        }

        // NFT events skip matching entirely.
        for event in &payload.nft_events {
            signals.extend(Signal::new(
                SourceKind::OnChain,
                timestamp,
                NFT_EVENT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
                NFT_EVENT_WEIGHT,
                SignalMetadata::Nft {
                    collection: event.collection.clone(),
                },
            ));
        }

        for interaction in &payload.program_interactions {
            let name = interaction.program_name.as_deref().unwrap_or_default();
            signals.extend(Signal::new(
                SourceKind::OnChain,
                timestamp,
                self.matcher.match_text(name),
                PROGRAM_INTERACTION_WEIGHT,
                SignalMetadata::Program {
                    program_id: interaction.program_id.clone(),
                },
            ));
        }

        debug!(
            source = %self.source(),
            records = payload.record_count(),
            signals = signals.len(),
            "extracted on-chain signals"
        );
        signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use narrative_rules::{NftEvent, ProgramInteraction, TokenTransfer};

    fn extract(payload: &OnChainPayload) -> Vec<Signal> {
        let matcher = KeywordMatcher::with_defaults();
        OnChainExtractor::new(&matcher).extract(payload, Utc::now())
    }

    #[test]
    fn test_empty_payload() {
        assert!(extract(&OnChainPayload::default()).is_empty());
    }

    #[test]
    fn test_token_transfer_matches_name_and_symbol() {
        let payload = OnChainPayload {
            token_transfers: vec![TokenTransfer {
                token_name: Some("Yield Token".to_string()),
                token_symbol: Some("SWAP".to_string()),
                mint: "Mint111".to_string(),
            }],
            ..Default::default()
        };

        let signals = extract(&payload);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].keywords(), &["yield".to_string(), "swap".to_string()]);
        assert!((signals[0].weight - TOKEN_TRANSFER_WEIGHT).abs() < 1e-9);
        assert_eq!(signals[0].source, SourceKind::OnChain);
    }

    #[test]
    fn test_unmatched_token_is_dropped() {
        let payload = OnChainPayload {
            token_transfers: vec![TokenTransfer {
                token_name: None,
                token_symbol: Some("XYZ".to_string()),
                mint: "Mint111".to_string(),
            }],
            ..Default::default()
        };
        assert!(extract(&payload).is_empty());
    }

    #[test]
    fn test_nft_event_is_always_emitted() {
        let payload = OnChainPayload {
            nft_events: vec![NftEvent {
                collection: "zzz".to_string(),
            }],
            ..Default::default()
        };

        let signals = extract(&payload);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].keywords(), &["NFT".to_string(), "collectible".to_string()]);
        assert!((signals[0].weight - NFT_EVENT_WEIGHT).abs() < 1e-9);
    }

    #[test]
    fn test_program_interaction() {
        let payload = OnChainPayload {
            program_interactions: vec![
                ProgramInteraction {
                    program_name: Some("Oracle Program".to_string()),
                    program_id: "Prog111".to_string(),
                },
                ProgramInteraction {
                    program_name: None,
                    program_id: "Prog222".to_string(),
                },
            ],
            ..Default::default()
        };

        let signals = extract(&payload);
        assert_eq!(signals.len(), 1);
        assert!(signals[0].keywords().contains(&"oracle".to_string()));
        assert!((signals[0].weight - PROGRAM_INTERACTION_WEIGHT).abs() < 1e-9);
        assert_eq!(signals[0].metadata.project_name(), Some("Prog111"));
    }

    #[test]
    fn test_payload_timestamp_wins() {
        let collected_at = "2026-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let payload = OnChainPayload {
            timestamp: Some(collected_at),
            nft_events: vec![NftEvent::default()],
            ..Default::default()
        };

        let signals = extract(&payload);
        assert_eq!(signals[0].timestamp, collected_at);
    }
}
