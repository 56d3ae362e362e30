// Pluggable extraction capabilities: document bytes -> text -> skill tokens.
// Each stage is a trait so the PDF backend or the tagger can be replaced independently.

pub mod pdf;
pub mod skills;
pub mod tagger;
