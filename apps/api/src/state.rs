use std::sync::Arc;

use crate::candidates::store::CandidateStore;
use crate::config::Config;
use crate::extraction::pdf::TextExtractor;
use crate::extraction::skills::SkillExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; nothing here is a global.
#[derive(Clone)]
pub struct AppState {
    pub store: CandidateStore,
    /// Pluggable document parser. Default: PdfTextExtractor.
    pub text_extractor: Arc<dyn TextExtractor>,
    /// Pluggable skill heuristic. Default: PosSkillExtractor over LexiconTagger.
    pub skill_extractor: Arc<dyn SkillExtractor>,
    pub config: Config,
}
