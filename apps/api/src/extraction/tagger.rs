//! Part-of-speech tagging.
//!
//! `LexiconTagger` is a deterministic, dependency-free tagger: closed-class
//! words (determiners, pronouns, adpositions, conjunctions, auxiliaries) come
//! from fixed lexicons, open-class words are classified by a small verb /
//! adjective / adverb lexicon plus suffix rules, and everything left over is a
//! noun. Tokens that look like technology names (`c++`, `node.js`, `html5`)
//! are proper nouns. It is a heuristic; swap in a model-backed `PosTagger`
//! for better precision.

use std::fmt;

use tracing::trace;

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    ProperNoun,
    Noun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    CoordinatingConjunction,
    SubordinatingConjunction,
    Particle,
    Numeral,
}

impl PartOfSpeech {
    /// Universal Dependencies label, e.g. `PROPN`.
    pub fn label(self) -> &'static str {
        match self {
            PartOfSpeech::ProperNoun => "PROPN",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Auxiliary => "AUX",
            PartOfSpeech::Adjective => "ADJ",
            PartOfSpeech::Adverb => "ADV",
            PartOfSpeech::Pronoun => "PRON",
            PartOfSpeech::Determiner => "DET",
            PartOfSpeech::Adposition => "ADP",
            PartOfSpeech::CoordinatingConjunction => "CCONJ",
            PartOfSpeech::SubordinatingConjunction => "SCONJ",
            PartOfSpeech::Particle => "PART",
            PartOfSpeech::Numeral => "NUM",
        }
    }

    pub fn is_noun(self) -> bool {
        matches!(self, PartOfSpeech::ProperNoun | PartOfSpeech::Noun)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PartOfSpeech,
}

pub trait PosTagger: Send + Sync {
    /// Tokenizes `text` and tags every token, in order.
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

pub struct LexiconTagger;

impl PosTagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let mut tagged: Vec<TaggedToken> = Vec::new();
        for token in tokenize(text) {
            let previous = tagged.last().map(|t| t.pos);
            let pos = classify(token, previous);
            trace!("{token} -> {pos}");
            tagged.push(TaggedToken {
                text: token.to_string(),
                pos,
            });
        }
        tagged
    }
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "either", "neither", "another", "such", "what", "which", "whose", "my",
    "your", "his", "her", "its", "our", "their",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves", "who", "whom",
    "someone", "anyone", "everyone", "something", "anything", "everything", "nothing", "mine",
    "yours", "hers", "ours", "theirs",
];

const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "from", "up", "down", "of", "off", "over",
    "under", "within", "without", "across", "via", "per", "toward", "towards", "upon", "among",
    "around", "than", "onto", "throughout",
];

const COORDINATING_CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet", "plus"];

const SUBORDINATING_CONJUNCTIONS: &[&str] = &[
    "if", "because", "while", "although", "though", "unless", "whereas", "since", "until",
    "whether", "as", "once",
];

const AUXILIARIES: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
    "don", "doesn", "didn", "isn", "aren", "wasn", "won",
];

const PARTICLES: &[&str] = &["to", "not", "s", "t"];

const ADVERBS: &[&str] = &[
    "very", "also", "too", "so", "just", "only", "well", "then", "there", "here", "now",
    "always", "never", "often", "how", "when", "where", "why", "again", "already", "still",
    "even", "more", "most", "less", "least", "really", "quite", "etc", "however", "ago",
];

const ADJECTIVES: &[&str] = &[
    "good", "great", "new", "old", "strong", "excellent", "best", "better", "high", "low",
    "large", "small", "senior", "junior", "key", "various", "several", "many", "much", "few",
    "other", "same", "different", "multiple", "able", "proficient", "familiar", "solid",
    "fast", "full", "remote", "top", "modern", "current", "relevant", "hands-on", "concise",
    "desired", "own",
];

const VERBS: &[&str] = &[
    "build", "builds", "built", "develop", "develops", "design", "designs", "manage",
    "manages", "lead", "leads", "led", "use", "uses", "work", "works", "create", "creates",
    "implement", "implements", "improve", "improves", "maintain", "maintains", "deploy",
    "deploys", "write", "writes", "wrote", "written", "support", "supports", "make", "makes",
    "made", "get", "gets", "got", "take", "takes", "took", "give", "gives", "gave", "know",
    "knew", "learn", "learns", "want", "wants", "need", "needs", "like", "help", "helps",
    "run", "runs", "ran", "see", "saw", "go", "goes", "went", "gone", "find", "found",
    "drive", "drove", "ship", "become", "became", "handle", "handles", "include", "includes",
    "ensure", "ensures", "provide", "provides", "collaborate", "apply", "applies", "join",
    "say", "said", "tell", "told", "think", "thought", "keep", "kept", "bring", "brought",
    "begin", "began", "begun", "hold", "held", "put", "meet", "met", "send", "sent", "spend",
    "spent", "understand", "understood", "focus", "highlight", "highlights", "match",
    "matches", "practice", "practise",
];

/// Nouns that would otherwise fall to the `-ly` adverb rule.
const LY_NOUNS: &[&str] = &[
    "family", "supply", "assembly", "anomaly", "reply", "ally", "italy", "monopoly",
    "butterfly", "rally",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "less", "ical", "ive"];

/// Splits text into word tokens. Letters, digits and `+ # . - _` form tokens;
/// `.`, `-` and `_` are kept only inside a token, so `node.js` survives but a
/// sentence-final period does not.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !is_token_char(c))
        .map(|raw| raw.trim_matches(|c: char| matches!(c, '.' | '-' | '_')))
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .collect()
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '+' | '#' | '.' | '-' | '_')
}

fn classify(token: &str, previous: Option<PartOfSpeech>) -> PartOfSpeech {
    let word = token.to_lowercase();
    let word = word.as_str();

    if word.starts_with(|c: char| c.is_ascii_digit()) && !word.chars().any(char::is_alphabetic) {
        return PartOfSpeech::Numeral;
    }

    if let Some(pos) = lookup(word) {
        return pos;
    }

    if looks_like_technology(word) {
        return PartOfSpeech::ProperNoun;
    }

    let len = word.chars().count();

    if len > 4 && word.ends_with("ly") && !LY_NOUNS.contains(&word) {
        return PartOfSpeech::Adverb;
    }
    if len > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return PartOfSpeech::Adjective;
    }
    if len > 4 && word.ends_with("ed") {
        return PartOfSpeech::Verb;
    }
    if len > 5 && word.ends_with("ing") {
        // Gerunds after a determiner, adjective, adposition or noun read as nouns
        // ("the testing", "in programming", "skills programming").
        return match previous {
            None
            | Some(PartOfSpeech::Pronoun)
            | Some(PartOfSpeech::Auxiliary)
            | Some(PartOfSpeech::Adverb)
            | Some(PartOfSpeech::Particle) => PartOfSpeech::Verb,
            _ => PartOfSpeech::Noun,
        };
    }

    PartOfSpeech::Noun
}

fn lookup(word: &str) -> Option<PartOfSpeech> {
    let tables: [(&[&str], PartOfSpeech); 10] = [
        (DETERMINERS, PartOfSpeech::Determiner),
        (PRONOUNS, PartOfSpeech::Pronoun),
        (AUXILIARIES, PartOfSpeech::Auxiliary),
        (PARTICLES, PartOfSpeech::Particle),
        (ADPOSITIONS, PartOfSpeech::Adposition),
        (COORDINATING_CONJUNCTIONS, PartOfSpeech::CoordinatingConjunction),
        (SUBORDINATING_CONJUNCTIONS, PartOfSpeech::SubordinatingConjunction),
        (ADVERBS, PartOfSpeech::Adverb),
        (ADJECTIVES, PartOfSpeech::Adjective),
        (VERBS, PartOfSpeech::Verb),
    ];
    tables
        .iter()
        .find(|(words, _)| words.contains(&word))
        .map(|(_, pos)| *pos)
}

/// `c++`, `c#`, `node.js`, `html5`, `ec2`: symbols or a letter/digit mix.
fn looks_like_technology(word: &str) -> bool {
    let has_symbol = word.chars().any(|c| matches!(c, '+' | '#' | '.'));
    let has_alpha = word.chars().any(char::is_alphabetic);
    let has_digit = word.chars().any(|c| c.is_ascii_digit());
    has_alpha && (has_symbol || has_digit)
}
