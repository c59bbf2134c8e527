//! Signal definitions.

use chrono::{DateTime, Utc};
use narrative_rules::SourceKind;
use serde::Serialize;
use uuid::Uuid;

/// Unique identifier for signals, used to correlate log lines within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SignalId(pub Uuid);

impl SignalId {
    /// Create a new random signal ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SignalId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SignalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A weighted piece of evidence extracted from one raw item.
#[derive(Debug, Clone, Serialize)]
pub struct Signal {
    pub id: SignalId,

    /// Which collector the underlying item came from.
    pub source: SourceKind,

    /// When the underlying item occurred or was observed.
    pub timestamp: DateTime<Utc>,

    /// Matched keywords. May span several narrative vocabularies.
    keywords: Vec<String>,

    /// Strength of evidence in (0, 1]. Never renormalized across sources.
    pub weight: f64,

    /// Display-only details. Never used in scoring.
    pub metadata: SignalMetadata,
}

impl Signal {
    /// Create a signal, or `None` when there are no keywords to carry.
    pub fn new(
        source: SourceKind,
        timestamp: DateTime<Utc>,
        keywords: Vec<String>,
        weight: f64,
        metadata: SignalMetadata,
    ) -> Option<Self> {
        if keywords.is_empty() {
            return None;
        }

        Some(Self {
            id: SignalId::new(),
            source,
            timestamp,
            keywords,
            weight: weight.clamp(0.0, 1.0),
            metadata,
        })
    }

    /// Matched keywords, in match order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Check if any of this signal's keywords satisfies the predicate.
    pub fn has_keyword_where<F>(&self, predicate: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        self.keywords.iter().any(|keyword| predicate(keyword))
    }
}

/// Source-specific evidence attached to a signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SignalMetadata {
    /// A token transfer.
    Token { mint: String },

    /// An NFT event.
    Nft { collection: String },

    /// A program interaction.
    Program {
        #[serde(rename = "programId")]
        program_id: String,
    },

    /// A trending repository.
    Repo {
        name: String,
        description: Option<String>,
        stars: u64,
        url: String,
    },

    /// A recently created repository.
    NewRepo {
        name: String,
        description: Option<String>,
        #[serde(rename = "createdAt")]
        created_at: Option<DateTime<Utc>>,
    },

    /// A social post.
    Social {
        author: String,
        /// Leading excerpt of the post.
        content: String,
        urls: Vec<String>,
    },
}

impl SignalMetadata {
    /// Name to show for this item as a project, if it has one.
    ///
    /// Repositories show their name and programs their identifier. Tokens,
    /// NFT events and posts have nothing to show.
    pub fn project_name(&self) -> Option<&str> {
        let name = match self {
            SignalMetadata::Repo { name, .. } | SignalMetadata::NewRepo { name, .. } => name,
            SignalMetadata::Program { program_id } => program_id,
            _ => return None,
        };

        (!name.is_empty()).then_some(name.as_str())
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            SignalMetadata::Repo { description, .. }
            | SignalMetadata::NewRepo { description, .. } => description.as_deref(),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            SignalMetadata::Repo { url, .. } if !url.is_empty() => Some(url.as_str()),
            _ => None,
        }
    }
}
