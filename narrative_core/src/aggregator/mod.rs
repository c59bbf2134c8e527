//! Narrative Aggregator - scores every narrative from the run's signals.
//!
//! For each definition, independently:
//! 1. **Select**: signals sharing at least one keyword with the vocabulary
//! 2. **Placeholder**: an empty selection yields a fixed low-confidence row
//! 3. **Score**: summed weight divided by a fixed constant, capped at 1
//! 4. **Evidence**: trending keywords, top projects, source counts, ideas

mod ideas;
mod narrative;

pub use ideas::*;
pub use narrative::*;

use chrono::{DateTime, Utc};
use narrative_rules::{definitions, NarrativeDefinition};
use tracing::debug;

use crate::signals::Signal;

/// Confidence of a narrative no signal matched. Kept above zero so an
/// undetected narrative stays distinguishable from a measured one.
pub const PLACEHOLDER_CONFIDENCE: f64 = 0.1;

/// Summed weight at which confidence saturates.
pub const CONFIDENCE_DIVISOR: f64 = 5.0;

pub const MAX_TRENDING_KEYWORDS: usize = 8;
pub const MAX_TOP_PROJECTS: usize = 5;

/// Vocabulary keywords shown on a placeholder.
pub const PLACEHOLDER_KEYWORD_COUNT: usize = 5;

/// Vocabulary keywords fed to the idea generator for a placeholder.
pub const PLACEHOLDER_IDEA_KEYWORD_COUNT: usize = 3;

/// Confidence for a selection of signals.
pub fn confidence<'a>(selection: impl IntoIterator<Item = &'a Signal>) -> f64 {
    let total: f64 = selection.into_iter().map(|signal| signal.weight).sum();
    (total / CONFIDENCE_DIVISOR).min(1.0)
}

/// Count this vocabulary's keywords across the selection, most frequent first.
///
/// Keywords from other vocabularies are ignored. Ties keep first-seen order.
pub fn trending_keywords(definition: &NarrativeDefinition, selection: &[&Signal]) -> Vec<String> {
    let mut counts: Vec<(&'static str, usize)> = Vec::new();

    for signal in selection {
        for keyword in signal.keywords() {
            let Some(canonical) = definition.canonical_keyword(keyword) else {
                continue;
            };
            match counts.iter_mut().find(|(seen, _)| *seen == canonical) {
                Some((_, count)) => *count += 1,
                None => counts.push((canonical, 1)),
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_TRENDING_KEYWORDS)
        .map(|(keyword, _)| keyword.to_string())
        .collect()
}

/// The first matched signals that name a project, in collection order.
pub fn top_projects(selection: &[&Signal]) -> Vec<TopProject> {
    selection
        .iter()
        .filter_map(|signal| {
            let name = signal.metadata.project_name()?;
            Some(TopProject {
                name: name.to_string(),
                description: signal.metadata.description().map(str::to_string),
                url: signal.metadata.url().map(str::to_string),
                source: signal.source,
            })
        })
        .take(MAX_TOP_PROJECTS)
        .collect()
}

/// Sort narratives by confidence, highest first. Ties keep their order.
pub fn rank_narratives(narratives: &mut [Narrative]) {
    narratives.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Groups signals into narratives.
#[derive(Debug, Clone)]
pub struct NarrativeAggregator {
    definitions: &'static [NarrativeDefinition],
    ideas: IdeaGenerator,
}

impl NarrativeAggregator {
    /// Create an aggregator over the given definitions and idea generator.
    pub fn new(definitions: &'static [NarrativeDefinition], ideas: IdeaGenerator) -> Self {
        Self { definitions, ideas }
    }

    /// Create an aggregator over the built-in definitions and ideas.
    pub fn with_defaults() -> Self {
        Self::new(definitions(), IdeaGenerator::with_defaults())
    }

    /// Produce one narrative per definition, in declaration order.
    ///
    /// The result is unsorted; see [`rank_narratives`].
    pub fn aggregate(&self, signals: &[Signal], now: DateTime<Utc>) -> Vec<Narrative> {
        self.definitions
            .iter()
            .map(|definition| self.narrate(definition, signals, now))
            .collect()
    }

    /// Score a single narrative.
    pub fn narrate(
        &self,
        definition: &NarrativeDefinition,
        signals: &[Signal],
        now: DateTime<Utc>,
    ) -> Narrative {
        let selection: Vec<&Signal> = signals
            .iter()
            .filter(|signal| {
                signal.has_keyword_where(|keyword| definition.contains_keyword(keyword))
            })
            .collect();

        if selection.is_empty() {
            debug!(narrative = definition.id, "no matching signals, emitting placeholder");
            return self.placeholder(definition, now);
        }

        let measured = confidence(selection.iter().copied());
        let mut narrative = Narrative::from_definition(definition, measured, now);
        narrative.trending_keywords = trending_keywords(definition, &selection);
        narrative.top_projects = top_projects(&selection);
        for signal in &selection {
            narrative.data_sources.record(signal.source);
        }
        narrative.project_ideas = self.ideas.generate(definition.id, &narrative.trending_keywords);

        debug!(
            narrative = definition.id,
            matched = selection.len(),
            confidence = narrative.confidence,
            "scored narrative"
        );
        narrative
    }

    fn placeholder(&self, definition: &NarrativeDefinition, now: DateTime<Utc>) -> Narrative {
        let mut narrative = Narrative::from_definition(definition, PLACEHOLDER_CONFIDENCE, now);
        narrative.trending_keywords = definition
            .leading_keywords(PLACEHOLDER_KEYWORD_COUNT)
            .iter()
            .map(|keyword| keyword.to_string())
            .collect();
        narrative.project_ideas = self.ideas.generate(
            definition.id,
            definition.leading_keywords(PLACEHOLDER_IDEA_KEYWORD_COUNT),
        );
        narrative
    }
}

impl Default for NarrativeAggregator {
    fn default() -> Self {
        Self::with_defaults()
    }
}
