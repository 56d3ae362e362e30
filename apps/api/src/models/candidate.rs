use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Store-assigned candidate identifier. Never reused.
pub type CandidateId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CandidateRow {
    pub id: CandidateId,
    pub name: String,
    pub resume_text: String,
}

/// Identity pair returned by listings; omits the (potentially large) résumé text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CandidateSummary {
    pub id: CandidateId,
    pub name: String,
}
