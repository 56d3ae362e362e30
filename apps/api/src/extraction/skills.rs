//! Skill extraction: derives a noisy set of candidate skill tokens from résumé text.

use std::collections::BTreeSet;

use crate::extraction::tagger::{LexiconTagger, PosTagger};

/// Lowercase skill tokens. Ordered so that display order is stable; the
/// ordering carries no meaning.
pub type SkillSet = BTreeSet<String>;

/// Tokens must be longer than this many characters to count as a skill.
const MIN_SKILL_CHARS: usize = 2;

/// Narrow seam between résumé text and skill tokens. Swap the implementation
/// to change the heuristic without touching the matcher or the store.
pub trait SkillExtractor: Send + Sync {
    fn extract(&self, text: &str) -> SkillSet;
}

/// Keeps every noun or proper noun longer than two characters.
///
/// The whole input is lowercased before tagging, so output is lowercase and
/// duplicates collapse. This is a heuristic, not a skill taxonomy: expect
/// ordinary nouns ("experience", "team") alongside real skills.
pub struct PosSkillExtractor {
    tagger: Box<dyn PosTagger>,
}

impl PosSkillExtractor {
    pub fn new(tagger: Box<dyn PosTagger>) -> Self {
        Self { tagger }
    }
}

impl Default for PosSkillExtractor {
    fn default() -> Self {
        Self::new(Box::new(LexiconTagger))
    }
}

impl SkillExtractor for PosSkillExtractor {
    fn extract(&self, text: &str) -> SkillSet {
        let lowered = text.to_lowercase();
        self.tagger
            .tag(&lowered)
            .into_iter()
            .filter(|token| token.pos.is_noun() && token.text.chars().count() > MIN_SKILL_CHARS)
            .map(|token| token.text)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::tagger::{PartOfSpeech, TaggedToken};

    fn set(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extracts_lowercase_nouns() {
        let skills = PosSkillExtractor::default().extract("Experienced in Python, SQL and Docker.");
        assert_eq!(skills, set(&["docker", "python", "sql"]));
    }

    #[test]
    fn test_short_tokens_excluded() {
        let skills = PosSkillExtractor::default().extract("AI, ML, Go and Rust");
        assert_eq!(skills, set(&["rust"]));
    }

    #[test]
    fn test_duplicates_collapse() {
        let skills = PosSkillExtractor::default().extract("Python python PYTHON");
        assert_eq!(skills, set(&["python"]));
    }

    #[test]
    fn test_technology_names_survive() {
        let skills = PosSkillExtractor::default().extract("Built services in C++ and Node.js");
        assert!(skills.contains("c++"));
        assert!(skills.contains("node.js"));
        assert!(skills.contains("services"));
        assert!(!skills.contains("built"));
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        assert!(PosSkillExtractor::default().extract("").is_empty());
        assert!(PosSkillExtractor::default().extract("   \n").is_empty());
    }

    /// Tags every token as a proper noun and records what it was given.
    struct EchoTagger;

    impl PosTagger for EchoTagger {
        fn tag(&self, text: &str) -> Vec<TaggedToken> {
            text.split_whitespace()
                .map(|w| TaggedToken {
                    text: w.to_string(),
                    pos: PartOfSpeech::ProperNoun,
                })
                .collect()
        }
    }

    #[test]
    fn test_input_lowercased_before_tagging() {
        let skills = PosSkillExtractor::new(Box::new(EchoTagger)).extract("Kubernetes AWS");
        assert_eq!(skills, set(&["aws", "kubernetes"]));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // "né" is three bytes but two characters.
        let skills = PosSkillExtractor::new(Box::new(EchoTagger)).extract("né café");
        assert_eq!(skills, set(&["café"]));
    }
}
