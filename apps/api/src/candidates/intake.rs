//! Résumé intake: extract text, record the candidate, surface a skill preview.
//!
//! A failed insert does not abort the upload. The caller still gets the
//! extracted text and skills, with the store outcome reported alongside.

use std::sync::Arc;

use anyhow::anyhow;
use serde::Serialize;
use tracing::info;

use crate::candidates::store::{CandidateStore, StoreError};
use crate::errors::AppError;
use crate::extraction::pdf::TextExtractor;
use crate::extraction::skills::SkillExtractor;
use crate::models::candidate::CandidateId;

/// At most this many skills are echoed back after an upload.
pub const SKILL_PREVIEW_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StoreOutcome {
    Saved { id: CandidateId, message: String },
    DuplicateName { message: String },
    StorageUnavailable { message: String },
}

impl StoreOutcome {
    fn from_insert(result: Result<CandidateId, StoreError>) -> Result<Self, AppError> {
        match result {
            Ok(id) => Ok(StoreOutcome::Saved {
                id,
                message: "Resume saved in database.".to_string(),
            }),
            Err(StoreError::DuplicateName(_)) => Ok(StoreOutcome::DuplicateName {
                message: "This candidate name already exists.".to_string(),
            }),
            Err(StoreError::StorageUnavailable(e)) => Ok(StoreOutcome::StorageUnavailable {
                message: format!("Database error: {e}"),
            }),
            Err(e @ StoreError::EmptyName) => Err(e.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub name: String,
    pub resume_text: String,
    pub store_result: StoreOutcome,
    /// First `SKILL_PREVIEW_LIMIT` skills in display order.
    pub skills: Vec<String>,
    pub skills_truncated: bool,
    pub skill_count: usize,
}

/// An uploaded résumé as received from the client.
pub struct ResumeUpload {
    pub name: String,
    pub file_name: String,
    pub document: Vec<u8>,
}

impl ResumeUpload {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Please enter a candidate name.".to_string(),
            ));
        }
        if !self.file_name.to_lowercase().ends_with(".pdf") {
            return Err(AppError::Validation(
                "Only PDF files are allowed.".to_string(),
            ));
        }
        Ok(())
    }
}

pub async fn upload_resume(
    store: &CandidateStore,
    text_extractor: Arc<dyn TextExtractor>,
    skill_extractor: &dyn SkillExtractor,
    upload: ResumeUpload,
) -> Result<UploadResponse, AppError> {
    upload.validate()?;
    let ResumeUpload { name, document, .. } = upload;

    // PDF parsing is CPU-bound; keep it off the async workers.
    let resume_text = tokio::task::spawn_blocking(move || text_extractor.extract(&document))
        .await
        .map_err(|e| AppError::Internal(anyhow!("text extraction task failed: {e}")))??;
    info!("Extracted {} chars from uploaded resume", resume_text.len());

    let store_result = StoreOutcome::from_insert(store.insert(&name, &resume_text).await)?;

    let all_skills = skill_extractor.extract(&resume_text);
    let skill_count = all_skills.len();
    let skills: Vec<String> = all_skills.into_iter().take(SKILL_PREVIEW_LIMIT).collect();

    Ok(UploadResponse {
        name,
        resume_text,
        store_result,
        skills,
        skills_truncated: skill_count > SKILL_PREVIEW_LIMIT,
        skill_count,
    })
}
