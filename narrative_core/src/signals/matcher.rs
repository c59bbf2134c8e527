//! Keyword matching over the narrative vocabularies.

use narrative_rules::{definitions, NarrativeDefinition, SOCIAL_KEYWORDS};

/// Finds vocabulary keywords inside free text.
///
/// Matching is plain case-insensitive substring containment with no word
/// boundaries, so "game" matches "gameplay" and "AI" matches "chain".
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    /// Distinct keywords in declaration order, paired with their lowercase form.
    vocabulary: Vec<(&'static str, String)>,
}

impl KeywordMatcher {
    /// Build a matcher over every keyword of the given definitions.
    pub fn new(definitions: &[NarrativeDefinition]) -> Self {
        let mut vocabulary: Vec<(&'static str, String)> = Vec::new();

        for definition in definitions {
            for &keyword in definition.keywords {
                if !vocabulary.iter().any(|(known, _)| *known == keyword) {
                    vocabulary.push((keyword, keyword.to_lowercase()));
                }
            }
        }

        Self { vocabulary }
    }

    /// Create a matcher over the built-in narrative definitions.
    pub fn with_defaults() -> Self {
        Self::new(definitions())
    }

    /// Return the distinct vocabulary keywords contained in `text`.
    ///
    /// Keywords keep their vocabulary casing and come back in declaration order.
    pub fn match_text(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let haystack = text.to_lowercase();
        self.vocabulary
            .iter()
            .filter(|(_, lowered)| haystack.contains(lowered.as_str()))
            .map(|(keyword, _)| keyword.to_string())
            .collect()
    }

}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Tag a social post with the social keyword list.
pub fn tag_social_text(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    SOCIAL_KEYWORDS
        .iter()
        .filter(|keyword| haystack.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}
