//! Axum route handlers for the Skills API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::skills::SkillSet;
use crate::matching::matcher::{match_skills, MatchResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: SkillSet,
}

#[derive(Debug, Deserialize)]
pub struct MatchSkillsRequest {
    pub resume_skills: SkillSet,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct MatchSkillsResponse {
    #[serde(flatten)]
    pub result: MatchResult,
    pub all_present: bool,
}

/// Rejects a blank job description before it reaches the matcher.
pub fn require_job_description(job_description: &str) -> Result<(), AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter a job description.".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/v1/skills/extract
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Json<ExtractSkillsResponse> {
    Json(ExtractSkillsResponse {
        skills: state.skill_extractor.extract(&request.text),
    })
}

/// POST /api/v1/skills/match
pub async fn handle_match(
    Json(request): Json<MatchSkillsRequest>,
) -> Result<Json<MatchSkillsResponse>, AppError> {
    require_job_description(&request.job_description)?;

    // Callers may send mixed-case skills; the matcher compares lowercase tokens.
    let resume_skills: SkillSet = request
        .resume_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();
    let result = match_skills(&resume_skills, &request.job_description);

    Ok(Json(MatchSkillsResponse {
        all_present: result.all_present(),
        result,
    }))
}
