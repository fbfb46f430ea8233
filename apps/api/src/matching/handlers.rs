//! Axum route handlers for the Match API.

use std::path::Path;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::options::MatchConfig;
use crate::matching::{extract_document_keywords, match_with};
use crate::models::document::{Document, DocumentKind};
use crate::models::keyword::KeywordSet;
use crate::models::match_result::MatchResult;
use crate::state::AppState;

/// Longest phrase window a request may ask for.
pub const MAX_REQUEST_PHRASE_LENGTH: usize = 6;

pub const SAMPLE_RESUME_FILE: &str = "sample_resume.txt";
pub const SAMPLE_JOB_FILE: &str = "sample_job.txt";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Per-request overrides layered on top of the service's `MatchConfig`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    pub max_phrase_length: Option<usize>,
    pub min_keyword_frequency: Option<u32>,
    pub max_suggestions: Option<usize>,
    pub stemming: Option<bool>,
    pub extra_stopwords: Vec<String>,
    pub extra_known_terms: Vec<String>,
}

impl MatchOptions {
    pub fn apply(&self, base: &MatchConfig) -> Result<MatchConfig, AppError> {
        let mut config = base.clone();

        if let Some(len) = self.max_phrase_length {
            if !(1..=MAX_REQUEST_PHRASE_LENGTH).contains(&len) {
                return Err(AppError::Validation(format!(
                    "max_phrase_length must be between 1 and {MAX_REQUEST_PHRASE_LENGTH}"
                )));
            }
            config.max_phrase_length = len;
        }
        if let Some(freq) = self.min_keyword_frequency {
            if freq == 0 {
                return Err(AppError::Validation(
                    "min_keyword_frequency must be at least 1".to_string(),
                ));
            }
            config.min_keyword_frequency = freq;
        }
        if let Some(max) = self.max_suggestions {
            config.max_suggestions = max;
        }
        if let Some(stemming) = self.stemming {
            config.stemming = stemming;
        }
        config.stopwords.extend(&self.extra_stopwords);
        config
            .extra_known_terms
            .extend(self.extra_known_terms.iter().cloned());

        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub resume_text: String,
    pub job_text: String,
    #[serde(default)]
    pub options: MatchOptions,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub result: MatchResult,
    pub resume_keyword_count: usize,
    pub job_keyword_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
    #[serde(default = "default_kind")]
    pub kind: DocumentKind,
    #[serde(default)]
    pub options: MatchOptions,
}

fn default_kind() -> DocumentKind {
    DocumentKind::JobDescription
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub kind: DocumentKind,
    pub keywords: KeywordSet,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Scores a resume against a job description and returns matched/missing
/// keywords with suggestions.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let config = request.options.apply(&state.config.matching)?;
    let resume = Document::new(DocumentKind::Resume, request.resume_text)?;
    let job = Document::new(DocumentKind::JobDescription, request.job_text)?;

    run_match(&state, &resume, &job, &config).map(Json)
}

/// POST /api/v1/keywords
///
/// Extracts the ranked keyword set of a single document. Useful for previewing
/// what the matcher will compare.
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let config = request.options.apply(&state.config.matching)?;
    let document = Document::new(request.kind, request.text)?;
    if document.is_blank() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    Ok(Json(KeywordsResponse {
        kind: document.kind(),
        keywords: extract_document_keywords(&document, &config),
    }))
}

/// GET /api/v1/match/sample
///
/// Runs the matcher on the bundled sample resume and job description.
pub async fn handle_sample_match(
    State(state): State<AppState>,
) -> Result<Json<MatchResponse>, AppError> {
    let dir = state.config.sample_data_dir.as_path();
    let resume = load_sample(dir, SAMPLE_RESUME_FILE, DocumentKind::Resume).await?;
    let job = load_sample(dir, SAMPLE_JOB_FILE, DocumentKind::JobDescription).await?;

    run_match(&state, &resume, &job, &state.config.matching).map(Json)
}

fn run_match(
    state: &AppState,
    resume: &Document,
    job: &Document,
    config: &MatchConfig,
) -> Result<MatchResponse, AppError> {
    let result = match_with(state.scorer.as_ref(), resume, job, config)?;

    Ok(MatchResponse {
        resume_keyword_count: result.resume_keyword_count,
        job_keyword_count: result.job_keyword_count,
        result,
    })
}

async fn load_sample(dir: &Path, file: &str, kind: DocumentKind) -> Result<Document, AppError> {
    let path = dir.join(file);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound(format!(
                "Sample {kind} not found at {}",
                path.display()
            )));
        }
        Err(e) => {
            return Err(AppError::Internal(anyhow::anyhow!(
                "Failed to read {}: {e}",
                path.display()
            )));
        }
    };
    Ok(Document::from_bytes(kind, &bytes)?)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::matching::scorer::{ExactKeywordScorer, KeywordScorer, ScoreBreakdown};
    use crate::routes::build_router;

    fn test_state(sample_dir: &Path) -> AppState {
        AppState {
            config: Arc::new(Config {
                port: 0,
                rust_log: "debug".to_string(),
                sample_data_dir: sample_dir.to_path_buf(),
                matching: MatchConfig::default(),
            }),
            scorer: Arc::new(ExactKeywordScorer),
        }
    }

    async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_match_endpoint_scores_pair() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            test_state(dir.path()),
            post_json(
                "/api/v1/match",
                json!({
                    "resume_text": "Python, Flask, Docker",
                    "job_text": "Python, Flask, FastAPI, Docker"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["score"], 75.0);
        assert_eq!(body["result"]["band"], "strong");
        assert_eq!(body["result"]["missing"][0]["term"], "fastapi");
        assert_eq!(body["result"]["scorer_backend"], "exact");
        assert_eq!(body["resume_keyword_count"], 3);
        assert_eq!(body["job_keyword_count"], 4);
    }

    #[tokio::test]
    async fn test_keyword_counts_come_from_extracted_sets() {
        struct ScoreOnly;
        impl KeywordScorer for ScoreOnly {
            fn score(&self, _resume: &KeywordSet, _job: &KeywordSet) -> ScoreBreakdown {
                ScoreBreakdown {
                    score: 42.0,
                    matched: vec![],
                    missing: vec![],
                }
            }
            fn backend(&self) -> &'static str {
                "score-only"
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let state = AppState {
            scorer: Arc::new(ScoreOnly),
            ..test_state(dir.path())
        };
        let (status, body) = send(
            state,
            post_json(
                "/api/v1/match",
                json!({
                    "resume_text": "Python, Flask, Docker",
                    "job_text": "Python, Flask, FastAPI, Docker"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["scorer_backend"], "score-only");
        assert_eq!(body["resume_keyword_count"], 3);
        assert_eq!(body["job_keyword_count"], 4);
        assert!(body["result"].get("job_keyword_count").is_none());
    }

    #[tokio::test]
    async fn test_match_endpoint_applies_options() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            test_state(dir.path()),
            post_json(
                "/api/v1/match",
                json!({
                    "resume_text": "Python",
                    "job_text": "Python and Excel",
                    "options": { "extra_stopwords": ["excel"], "max_suggestions": 0 }
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["score"], 100.0);
    }

    #[tokio::test]
    async fn test_match_endpoint_rejects_bad_phrase_length() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            test_state(dir.path()),
            post_json(
                "/api/v1/match",
                json!({
                    "resume_text": "Python",
                    "job_text": "Python",
                    "options": { "max_phrase_length": 0 }
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_match_endpoint_both_empty() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            test_state(dir.path()),
            post_json("/api/v1/match", json!({ "resume_text": "", "job_text": " " })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "EMPTY_INPUT");
    }

    #[tokio::test]
    async fn test_match_endpoint_binary_payload() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            test_state(dir.path()),
            post_json(
                "/api/v1/match",
                json!({ "resume_text": "PK\u{0003}\u{0004}\u{0000}\u{0000}", "job_text": "Rust" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INVALID_ENCODING");
    }

    #[tokio::test]
    async fn test_keywords_endpoint_ranks_terms() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            test_state(dir.path()),
            post_json(
                "/api/v1/keywords",
                json!({ "text": "REST API. REST API. GraphQL." }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "job_description");
        let terms: Vec<&str> = body["keywords"]
            .as_array()
            .unwrap()
            .iter()
            .map(|k| k["term"].as_str().unwrap())
            .collect();
        assert_eq!(terms, vec!["rest", "rest api", "api", "graphql"]);
    }

    #[tokio::test]
    async fn test_keywords_endpoint_rejects_blank_text() {
        let dir = tempfile::tempdir().unwrap();
        let (status, _) = send(
            test_state(dir.path()),
            post_json("/api/v1/keywords", json!({ "text": "   ", "kind": "resume" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_sample_endpoint_reads_sample_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SAMPLE_RESUME_FILE), "Rust, Tokio, Axum").unwrap();
        std::fs::write(dir.path().join(SAMPLE_JOB_FILE), "Rust, Tokio, Kafka").unwrap();

        let request = Request::builder()
            .uri("/api/v1/match/sample")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(test_state(dir.path()), request).await;

        assert_eq!(status, StatusCode::OK);
        let missing: Vec<&str> = body["result"]["missing"]
            .as_array()
            .unwrap()
            .iter()
            .map(|k| k["term"].as_str().unwrap())
            .collect();
        assert_eq!(missing, vec!["kafka"]);
    }

    #[tokio::test]
    async fn test_sample_endpoint_missing_files_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::builder()
            .uri("/api/v1/match/sample")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(test_state(dir.path()), request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[test]
    fn test_options_layer_over_base() {
        let base = MatchConfig::default();
        let options = MatchOptions {
            max_phrase_length: Some(2),
            stemming: Some(true),
            extra_stopwords: vec!["Synergy".to_string()],
            ..MatchOptions::default()
        };
        let config = options.apply(&base).unwrap();
        assert_eq!(config.max_phrase_length, 2);
        assert!(config.stemming);
        assert!(config.stopwords.contains("synergy"));
        assert!(config.stopwords.contains("the"));
        assert_eq!(config.max_suggestions, base.max_suggestions);
    }

    #[test]
    fn test_options_reject_zero_frequency() {
        let options = MatchOptions {
            min_keyword_frequency: Some(0),
            ..MatchOptions::default()
        };
        assert!(matches!(
            options.apply(&MatchConfig::default()),
            Err(AppError::Validation(_))
        ));
    }
}
