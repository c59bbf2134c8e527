//! On-chain collector payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the on-chain collector observed in one pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OnChainPayload {
    /// When the collector ran.
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub token_transfers: Vec<TokenTransfer>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub nft_events: Vec<NftEvent>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub program_interactions: Vec<ProgramInteraction>,
}

impl OnChainPayload {
    /// Total number of raw records.
    pub fn record_count(&self) -> usize {
        self.token_transfers.len() + self.nft_events.len() + self.program_interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

/// A token-transfer-like record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenTransfer {
    pub token_name: Option<String>,
    pub token_symbol: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub mint: String,
}

/// An NFT-event-like record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftEvent {
    #[serde(deserialize_with = "super::null_as_default")]
    pub collection: String,
}

/// A program-interaction record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgramInteraction {
    /// Display name, when the program is known.
    pub program_name: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub program_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_arrays_default_to_empty() {
        let payload: OnChainPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.is_empty());
        assert!(payload.timestamp.is_none());
    }

    #[test]
    fn test_camel_case_fields() {
        let payload: OnChainPayload = serde_json::from_str(
            r#"{
                "timestamp": "2026-01-01T00:00:00Z",
                "tokenTransfers": [
                    {"tokenName": "Yield Token", "tokenSymbol": "YLD", "mint": "Mint111"}
                ],
                "nftEvents": [{"collection": "Mad Lads"}],
                "programInteractions": [{"programId": "Prog111"}]
            }"#,
        )
        .unwrap();

        assert_eq!(payload.record_count(), 3);
        assert_eq!(payload.token_transfers[0].token_symbol.as_deref(), Some("YLD"));
        assert!(payload.program_interactions[0].program_name.is_none());
        assert!(payload.timestamp.is_some());
    }
}
