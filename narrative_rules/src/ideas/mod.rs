//! Static project idea table.

/// Keywords substituted into the fallback templates when a slot is missing.
pub const FALLBACK_IDEA_KEYWORDS: [&str; 3] = ["Solana", "web3", "blockchain"];

/// Fixed ideas per narrative slug.
pub const IDEA_TABLE: &[(&str, &[&str])] = &[
    (
        "defi-innovation",
        &[
            "Build a yield aggregator that auto-compounds across Solana DeFi protocols",
            "Create a decentralized lending platform with isolated risk markets",
            "Develop a perpetual DEX with advanced order types",
            "Build a liquidity mining analytics dashboard",
        ],
    ),
    (
        "gaming-nft",
        &[
            "Create a no-code NFT collection launcher with built-in marketplace",
            "Build a gaming guild management platform with scholarship tracking",
            "Develop an on-chain achievement system for games",
            "Create a metaverse land rental marketplace",
        ],
    ),
    (
        "infrastructure",
        &[
            "Build a decentralized RPC load balancer for Solana",
            "Create a validator performance monitoring dashboard",
            "Develop a bridge aggregator for cross-chain transfers",
            "Build an oracle comparison and aggregation service",
        ],
    ),
    (
        "ai-crypto",
        &[
            "Create an AI-powered trading assistant with on-chain execution",
            "Build a decentralized model marketplace for AI agents",
            "Develop an autonomous agent for DeFi yield optimization",
            "Create an AI content moderator for DAO governance",
        ],
    ),
    (
        "social-consumer",
        &[
            "Build a decentralized social graph protocol",
            "Create a creator monetization platform with micro-tipping",
            "Develop a DAO governance participation reward system",
            "Build a reputation-based social discovery app",
        ],
    ),
    (
        "dev-tools",
        &[
            "Create a Solana program testing framework with auto-generated tests",
            "Build a no-code contract deployment platform",
            "Develop a real-time program monitoring and alerting tool",
            "Create an IDE extension for Solana development",
        ],
    ),
];
