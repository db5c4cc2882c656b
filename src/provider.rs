//! Content provider: the external text-generation service behind the daily
//! quiz and the dashboard brain tip.
//!
//! Both operations are single-shot — no retry, no caching — and fail soft:
//! transport errors, malformed responses, and schema violations degrade to an
//! empty question batch or a fixed fallback tip, never an error reaching the
//! game layer. Failures are logged and otherwise swallowed.

use std::time::Duration;

use serde_json::{json, Value};
use thiserror::Error;

use crate::game_engine::models::QuizQuestion;

/// Shown on the dashboard when the tip fetch fails.
pub const FALLBACK_TIP: &str = "매일 꾸준히 뇌 운동을 하는 것이 중요합니다!";

const API_KEY_ENV: &str = "GEMINI_API_KEY";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const QUIZ_PROMPT: &str =
    "치매 예방을 위한 실생활 관련 인지 능력 퀴즈 3개를 만들어줘. 기억력, 논리력, 계산력을 포함해줘.";
const TIP_PROMPT: &str = "오늘의 치매 예방 팁을 한 문장으로 친절하게 알려줘.";

/// Why a provider call degraded. Internal only; the [`ContentProvider`]
/// surface is infallible.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("api key is not configured (set {API_KEY_ENV})")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Http(#[from] Box<ureq::Error>),
    #[error("could not read response body: {0}")]
    Io(#[from] std::io::Error),
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response carries no generated text")]
    EmptyResponse,
    #[error("quiz schema violation: {0}")]
    Schema(String),
}

/// The external collaborator the quiz session and dashboard depend on.
///
/// Implementations must fail soft: `fetch_daily_quiz` returns an empty batch
/// on any error, `fetch_brain_tip` returns [`FALLBACK_TIP`].
pub trait ContentProvider: Send + Sync {
    fn fetch_daily_quiz(&self) -> Vec<QuizQuestion>;
    fn fetch_brain_tip(&self) -> String;
}

/// Provider configuration, normally read from the environment.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Absent key means provider-unavailable, never a startup crash.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        ProviderConfig {
            api_key: std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Blocking client for the Generative Language `generateContent` endpoint.
pub struct GeminiProvider {
    config: ProviderConfig,
    agent: ureq::Agent,
}

impl GeminiProvider {
    pub fn new(config: ProviderConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(Duration::from_secs(60))
            .build();
        GeminiProvider { config, agent }
    }

    pub fn from_env() -> Self {
        Self::new(ProviderConfig::from_env())
    }

    /// One `generateContent` call; returns the generated text.
    fn generate(&self, body: Value) -> Result<String, ProviderError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey)?;
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, key
        );
        let response: Value = self
            .agent
            .post(&url)
            .send_json(body)
            .map_err(Box::new)?
            .into_json()?;
        extract_text(&response)
            .map(str::to_owned)
            .ok_or(ProviderError::EmptyResponse)
    }

    fn quiz(&self) -> Result<Vec<QuizQuestion>, ProviderError> {
        let text = self.generate(quiz_request_body())?;
        parse_quiz_response(&text)
    }

    fn tip(&self) -> Result<String, ProviderError> {
        self.generate(tip_request_body())
    }
}

impl ContentProvider for GeminiProvider {
    fn fetch_daily_quiz(&self) -> Vec<QuizQuestion> {
        match self.quiz() {
            Ok(questions) => questions,
            Err(err) => {
                tracing::warn!(%err, "daily quiz fetch failed, returning empty batch");
                Vec::new()
            }
        }
    }

    fn fetch_brain_tip(&self) -> String {
        match self.tip() {
            Ok(tip) => tip,
            Err(err) => {
                tracing::warn!(%err, "brain tip fetch failed, using fallback");
                FALLBACK_TIP.to_string()
            }
        }
    }
}

/// Pull the generated text out of a `generateContent` response.
fn extract_text(response: &Value) -> Option<&str> {
    response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

/// Parse and defensively validate the quiz payload: a JSON array of question
/// objects, each with exactly 4 options and a correct index in `0..=3`. Any
/// violation rejects the whole batch.
pub fn parse_quiz_response(text: &str) -> Result<Vec<QuizQuestion>, ProviderError> {
    let questions: Vec<QuizQuestion> = serde_json::from_str(text)?;
    for (i, q) in questions.iter().enumerate() {
        if q.options.len() != 4 {
            return Err(ProviderError::Schema(format!(
                "question {} has {} options, expected 4",
                i,
                q.options.len()
            )));
        }
        if q.correct_answer > 3 {
            return Err(ProviderError::Schema(format!(
                "question {} correct-answer index {} out of range",
                i, q.correct_answer
            )));
        }
    }
    Ok(questions)
}

fn quiz_request_body() -> Value {
    json!({
        "contents": [{ "parts": [{ "text": QUIZ_PROMPT }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": { "type": "STRING" },
                        "options": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "minItems": 4,
                            "maxItems": 4
                        },
                        "correctAnswer": {
                            "type": "INTEGER",
                            "description": "Index of the correct option (0-3)"
                        },
                        "explanation": { "type": "STRING" }
                    },
                    "required": ["question", "options", "correctAnswer", "explanation"]
                }
            }
        }
    })
}

fn tip_request_body() -> Value {
    json!({
        "contents": [{ "parts": [{ "text": TIP_PROMPT }] }]
    })
}
