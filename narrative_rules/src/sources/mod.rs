//! Origins of evidence.

use serde::{Deserialize, Serialize};

/// Where a piece of evidence was collected from.
///
/// Serialized with the collector names the published report has always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    /// On-chain RPC data (token transfers, NFT events, program interactions).
    #[serde(rename = "helius")]
    OnChain,
    /// Repository search results.
    #[serde(rename = "github")]
    Repository,
    /// Social posts.
    #[serde(rename = "social")]
    Social,
}

impl SourceKind {
    /// Every source kind, in collection order.
    pub const ALL: [SourceKind; 3] =
        [SourceKind::OnChain, SourceKind::Repository, SourceKind::Social];

    /// Wire name of this source.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::OnChain => "helius",
            SourceKind::Repository => "github",
            SourceKind::Social => "social",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
