//! Narrative output records.

use chrono::{DateTime, Utc};
use narrative_rules::{NarrativeDefinition, SourceKind};
use serde::{Deserialize, Serialize};

/// The scored summary of one narrative for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    pub id: String,
    pub name: String,
    pub description: String,

    /// Normalized aggregate weight in [0, 1].
    pub confidence: f64,

    /// Most frequent vocabulary keywords first.
    pub trending_keywords: Vec<String>,

    /// A display sample of matched projects, in collection order.
    pub top_projects: Vec<TopProject>,

    pub project_ideas: Vec<String>,

    /// Matched signal counts per origin.
    pub data_sources: DataSources,

    pub last_updated: DateTime<Utc>,
}

impl Narrative {
    /// Start a narrative record from its definition.
    pub(crate) fn from_definition(
        definition: &NarrativeDefinition,
        confidence: f64,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id: definition.id.to_string(),
            name: definition.name.to_string(),
            description: definition.description.to_string(),
            confidence,
            trending_keywords: Vec::new(),
            top_projects: Vec::new(),
            project_ideas: Vec::new(),
            data_sources: DataSources::default(),
            last_updated,
        }
    }

    /// Confidence as a whole percentage.
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

/// A project shown as evidence for a narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProject {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub source: SourceKind,
}

/// Per-origin counts of matched signals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSources {
    #[serde(rename = "helius")]
    pub on_chain: usize,
    #[serde(rename = "github")]
    pub repository: usize,
    pub social: usize,
}

impl DataSources {
    /// Count one signal from the given source.
    pub fn record(&mut self, source: SourceKind) {
        match source {
            SourceKind::OnChain => self.on_chain += 1,
            SourceKind::Repository => self.repository += 1,
            SourceKind::Social => self.social += 1,
        }
    }

    pub fn count(&self, source: SourceKind) -> usize {
        match source {
            SourceKind::OnChain => self.on_chain,
            SourceKind::Repository => self.repository,
            SourceKind::Social => self.social,
        }
    }

    pub fn total(&self) -> usize {
        self.on_chain + self.repository + self.social
    }
}

/// The outcome of one detection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub timestamp: DateTime<Utc>,
    /// Sorted by confidence, highest first.
    pub narratives: Vec<Narrative>,
}
