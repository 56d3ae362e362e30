use axum::Json;
use serde::{Deserialize, Serialize};

use crate::advice::responder::get_answer;
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub answer: &'static str,
}

/// POST /api/v1/advice
pub async fn handle_ask(
    Json(request): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation(
            "Please type a question to get an answer.".to_string(),
        ));
    }
    Ok(Json(AdviceResponse {
        answer: get_answer(&request.question),
    }))
}
