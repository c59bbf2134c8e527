//! Project idea selection.

use narrative_rules::{FALLBACK_IDEA_KEYWORDS, IDEA_TABLE};

/// Picks project ideas for a narrative.
///
/// A narrative listed in the idea table gets its fixed list verbatim; any
/// other narrative gets three template ideas built from its keywords.
#[derive(Debug, Clone, Copy)]
pub struct IdeaGenerator {
    table: &'static [(&'static str, &'static [&'static str])],
}

impl IdeaGenerator {
    /// Create a generator over a custom idea table.
    pub fn new(table: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { table }
    }

    /// Create a generator over the built-in idea table.
    pub fn with_defaults() -> Self {
        Self::new(IDEA_TABLE)
    }

    pub fn generate<S: AsRef<str>>(&self, narrative_id: &str, keywords: &[S]) -> Vec<String> {
        if let Some((_, ideas)) = self.table.iter().find(|(id, _)| *id == narrative_id) {
            return ideas.iter().map(|idea| idea.to_string()).collect();
        }

        let slot = |index: usize| {
            keywords
                .get(index)
                .map(|keyword| keyword.as_ref())
                .unwrap_or(FALLBACK_IDEA_KEYWORDS[index])
        };

        vec![
            format!("Build a {} analytics dashboard", slot(0)),
            format!("Create a {} automation tool", slot(1)),
            format!("Develop a {} integration service", slot(2)),
        ]
    }
}

impl Default for IdeaGenerator {
    fn default() -> Self {
        Self::with_defaults()
    }
}
