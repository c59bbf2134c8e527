//! Narrative definitions - the fixed set of topical categories.
//!
//! Declaration order matters: ranking ties keep this order.

use serde::Serialize;

/// A topical category and the vocabulary that defines membership in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NarrativeDefinition {
    /// Unique slug.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Case-insensitive substrings that place evidence in this narrative.
    pub keywords: &'static [&'static str],
}

impl NarrativeDefinition {
    /// Look up a keyword in this vocabulary, ignoring case.
    ///
    /// Returns the vocabulary's own spelling of the keyword.
    pub fn canonical_keyword(&self, keyword: &str) -> Option<&'static str> {
        let needle = keyword.to_lowercase();
        self.keywords
            .iter()
            .copied()
            .find(|candidate| candidate.to_lowercase() == needle)
    }

    /// Check whether a keyword belongs to this vocabulary, ignoring case.
    pub fn contains_keyword(&self, keyword: &str) -> bool {
        self.canonical_keyword(keyword).is_some()
    }

    /// The first `count` vocabulary keywords (fewer if the vocabulary is shorter).
    pub fn leading_keywords(&self, count: usize) -> &'static [&'static str] {
        &self.keywords[..count.min(self.keywords.len())]
    }
}

/// All narrative definitions, in declaration order.
pub const NARRATIVE_DEFINITIONS: &[NarrativeDefinition] = &[
    NarrativeDefinition {
        id: "defi-innovation",
        name: "DeFi Innovation",
        description: "Decentralized finance protocols and innovations",
        keywords: &[
            "yield", "liquidity", "AMM", "vault", "lending", "borrow", "stake", "farm", "dex",
            "swap", "perp", "derivative",
        ],
    },
    NarrativeDefinition {
        id: "gaming-nft",
        name: "Gaming & NFT",
        description: "Blockchain gaming and NFT ecosystems",
        keywords: &[
            "game",
            "gaming",
            "NFT",
            "metaverse",
            "play-to-earn",
            "P2E",
            "collectible",
            "avatar",
            "virtual",
            "world",
        ],
    },
    NarrativeDefinition {
        id: "infrastructure",
        name: "Infrastructure",
        description: "Core blockchain infrastructure and tooling",
        keywords: &[
            "validator", "RPC", "indexer", "oracle", "bridge", "layer2", "rollup", "sequencer",
            "node", "network",
        ],
    },
    NarrativeDefinition {
        id: "ai-crypto",
        name: "AI x Crypto",
        description: "Artificial intelligence meets blockchain",
        keywords: &[
            "AI",
            "agent",
            "model",
            "inference",
            "ML",
            "machine learning",
            "neural",
            "autonomous",
            "bot",
            "intelligence",
        ],
    },
    NarrativeDefinition {
        id: "social-consumer",
        name: "Social & Consumer",
        description: "Social platforms and consumer applications",
        keywords: &[
            "social",
            "community",
            "DAO",
            "governance",
            "vote",
            "profile",
            "content",
            "creator",
            "fan",
            "engagement",
        ],
    },
    NarrativeDefinition {
        id: "dev-tools",
        name: "Developer Tools",
        description: "Tools and infrastructure for developers",
        keywords: &[
            "SDK", "framework", "CLI", "testing", "debug", "deploy", "build", "compile", "library",
            "API",
        ],
    },
];

/// Get all narrative definitions.
pub fn definitions() -> &'static [NarrativeDefinition] {
    NARRATIVE_DEFINITIONS
}

/// Find a definition by its slug.
pub fn find_definition(id: &str) -> Option<&'static NarrativeDefinition> {
    NARRATIVE_DEFINITIONS.iter().find(|definition| definition.id == id)
}
