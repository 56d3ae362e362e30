pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::advice::handlers as advice;
use crate::candidates::handlers as candidates;
use crate::matching::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes();

    Router::new()
        .route("/health", get(health::health_handler))
        // Candidates
        .route(
            "/api/v1/candidates",
            post(candidates::handle_upload)
                .layer(DefaultBodyLimit::max(upload_limit))
                .get(candidates::handle_list),
        )
        .route("/api/v1/candidates/:id", get(candidates::handle_get))
        .route(
            "/api/v1/candidates/:id/match",
            post(candidates::handle_match),
        )
        // Skills
        .route("/api/v1/skills/extract", post(skills::handle_extract))
        .route("/api/v1/skills/match", post(skills::handle_match))
        // Advice
        .route("/api/v1/advice", post(advice::handle_ask))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::candidates::intake::tests::FixedTextExtractor;
    use crate::candidates::store::tests::memory_store;
    use crate::config::Config;
    use crate::extraction::skills::PosSkillExtractor;

    const BOUNDARY: &str = "recruiter-test-boundary";

    async fn test_router(resume_text: &'static str) -> Router {
        build_router(AppState {
            store: memory_store().await,
            text_extractor: Arc::new(FixedTextExtractor(resume_text)),
            skill_extractor: Arc::new(PosSkillExtractor::default()),
            config: Config::default(),
        })
    }

    fn multipart_upload(name: &str, file_name: &str, content: &str) -> Request<Body> {
        let body = format!(
            "--{b}\r\n\
             Content-Disposition: form-data; name=\"name\"\r\n\r\n\
             {name}\r\n\
             --{b}\r\n\
             Content-Disposition: form-data; name=\"resume\"; filename=\"{file_name}\"\r\n\
             Content-Type: application/pdf\r\n\r\n\
             {content}\r\n\
             --{b}--\r\n",
            b = BOUNDARY
        );
        Request::builder()
            .method("POST")
            .uri("/api/v1/candidates")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let router = test_router("").await;
        let (status, body) = send(&router, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_upload_list_get_round_trip() {
        let router = test_router("Backend engineer: Python, SQL, Docker").await;

        let (status, body) = send(&router, multipart_upload("Alice", "alice.pdf", "%PDF-1.4")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["store_result"]["status"], "saved");
        assert_eq!(body["resume_text"], "Backend engineer: Python, SQL, Docker");
        let id = body["store_result"]["id"].as_i64().unwrap();

        let (status, body) = send(&router, multipart_upload("Bob", "bob.pdf", "%PDF-1.4")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["store_result"]["status"], "saved");

        let (status, list) = send(&router, get("/api/v1/candidates")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 2);
        assert_eq!(list[0]["name"], "Alice");
        assert_eq!(list[1]["name"], "Bob");

        let (status, candidate) = send(&router, get(&format!("/api/v1/candidates/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(candidate["resume_text"], "Backend engineer: Python, SQL, Docker");
    }

    #[tokio::test]
    async fn test_duplicate_upload_reports_store_outcome() {
        let router = test_router("Rust").await;
        send(&router, multipart_upload("Alice", "a.pdf", "x")).await;
        let (status, body) = send(&router, multipart_upload("Alice", "a.pdf", "x")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["store_result"]["status"], "duplicate_name");
    }

    #[tokio::test]
    async fn test_upload_rejects_non_pdf() {
        let router = test_router("text").await;
        let (status, body) = send(&router, multipart_upload("Alice", "cv.txt", "x")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_candidate_is_404() {
        let router = test_router("").await;
        let (status, body) = send(&router, get("/api/v1/candidates/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, _) = send(
            &router,
            json_post(
                "/api/v1/candidates/999/match",
                json!({"job_description": "Rust"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_match_stored_candidate() {
        let router = test_router("Experienced in Python and SQL").await;
        let (_, body) = send(&router, multipart_upload("Alice", "a.pdf", "x")).await;
        let id = body["store_result"]["id"].as_i64().unwrap();

        let (status, result) = send(
            &router,
            json_post(
                &format!("/api/v1/candidates/{id}/match"),
                json!({"job_description": "Python, SQL, Java"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["score"], 66.67);
        assert_eq!(result["missing"], json!(["java"]));
        assert_eq!(result["matched"], json!(["python", "sql"]));
        assert_eq!(result["all_present"], false);
    }

    #[tokio::test]
    async fn test_skills_match_endpoint() {
        let router = test_router("").await;
        let (status, result) = send(
            &router,
            json_post(
                "/api/v1/skills/match",
                json!({"resume_skills": [], "job_description": "Go, Rust"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["score"], 0.0);
        assert_eq!(result["missing"], json!(["go", "rust"]));
    }

    #[tokio::test]
    async fn test_blank_job_description_is_gated() {
        let router = test_router("").await;
        let (status, body) = send(
            &router,
            json_post(
                "/api/v1/skills/match",
                json!({"resume_skills": ["rust"], "job_description": "   "}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Please enter a job description.");
    }

    #[tokio::test]
    async fn test_skills_extract_endpoint() {
        let router = test_router("").await;
        let (status, body) = send(
            &router,
            json_post("/api/v1/skills/extract", json!({"text": "Docker and Kubernetes"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"], json!(["docker", "kubernetes"]));
    }

    #[tokio::test]
    async fn test_advice_endpoint() {
        let router = test_router("").await;
        let (status, body) = send(
            &router,
            json_post(
                "/api/v1/advice",
                json!({"question": "What does a backend developer do?"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["answer"]
            .as_str()
            .unwrap()
            .starts_with("A Backend Developer"));

        let (status, _) = send(&router, json_post("/api/v1/advice", json!({"question": " "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
