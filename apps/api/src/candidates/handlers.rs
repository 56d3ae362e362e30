//! Axum route handlers for the Candidates API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::candidates::intake::{upload_resume, ResumeUpload, UploadResponse};
use crate::errors::AppError;
use crate::matching::handlers::require_job_description;
use crate::matching::matcher::{match_skills, MatchResult};
use crate::models::candidate::{CandidateId, CandidateRow, CandidateSummary};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CandidateMatchRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct CandidateMatchResponse {
    pub candidate_id: CandidateId,
    #[serde(flatten)]
    pub result: MatchResult,
    pub all_present: bool,
}

/// POST /api/v1/candidates
///
/// Multipart form: text field `name`, file field `resume`.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut name = String::new();
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "name" => {
                name = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid name field: {e}")))?;
            }
            "resume" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid resume file: {e}")))?;
                file = Some((file_name, data.to_vec()));
            }
            _ => {
                // Drain and ignore unknown fields.
                let _ = field.bytes().await;
            }
        }
    }

    let (file_name, document) =
        file.ok_or_else(|| AppError::Validation("Please upload a resume (PDF).".to_string()))?;

    let response = upload_resume(
        &state.store,
        state.text_extractor.clone(),
        state.skill_extractor.as_ref(),
        ResumeUpload {
            name,
            file_name,
            document,
        },
    )
    .await?;

    Ok(Json(response))
}

/// GET /api/v1/candidates
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateSummary>>, AppError> {
    Ok(Json(state.store.list_all().await?))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<CandidateId>,
) -> Result<Json<CandidateRow>, AppError> {
    let candidate = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    Ok(Json(candidate))
}

/// POST /api/v1/candidates/:id/match
///
/// Re-derives skills from the stored résumé text and matches them against the JD.
pub async fn handle_match(
    State(state): State<AppState>,
    Path(id): Path<CandidateId>,
    Json(request): Json<CandidateMatchRequest>,
) -> Result<Json<CandidateMatchResponse>, AppError> {
    require_job_description(&request.job_description)?;

    let text = state
        .store
        .get_text(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;

    let skills = state.skill_extractor.extract(&text);
    let result = match_skills(&skills, &request.job_description);

    Ok(Json(CandidateMatchResponse {
        candidate_id: id,
        all_present: result.all_present(),
        result,
    }))
}
