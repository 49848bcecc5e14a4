//! Gemini REST implementation of the advisory upstream

use reqwest::Client;
use serde::{Deserialize, Serialize};

use shared::error::{AppError, AppResult, ErrorCode};

use super::{AdvisorAnswer, AdvisorClient, Citation};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Fixed business-context preamble wrapped around every user question
fn build_prompt(question: &str) -> String {
    format!(
        "I am looking for IT hardware or services in Sri Lanka. User asked: {}. \
         Context: Smart Solutions Lanka offers Laptops, Networking (UDR, MikroTik), \
         maintenance, etc. Provide a brief, expert recommendation. If you suggest a \
         model, tell the user why it is good for the Sri Lankan climate or business \
         environment.",
        question
    )
}

/// Gemini `generateContent` client with web-search grounding
#[derive(Debug, Clone)]
pub struct GeminiAdvisor {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiAdvisor {
    pub fn new(api_key: &str, model: &str, timeout_ms: u64) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

// ===== Wire types (request) =====

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    tools: Vec<Tool>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct Tool {
    #[serde(rename = "google_search")]
    google_search: serde_json::Value,
}

// ===== Wire types (response) =====

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(rename = "groundingMetadata", default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct GroundingMetadata {
    #[serde(rename = "groundingChunks", default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebSource>,
}

#[derive(Deserialize)]
struct WebSource {
    #[serde(default)]
    title: String,
    #[serde(default)]
    uri: String,
}

#[async_trait::async_trait]
impl AdvisorClient for GeminiAdvisor {
    async fn ask(&self, prompt: &str) -> AppResult<AdvisorAnswer> {
        if self.api_key.is_empty() {
            return Err(AppError::with_message(
                ErrorCode::AdvisorUnavailable,
                "Advisor API key not configured",
            ));
        }

        let url = format!(
            "{}/{}:generateContent?key={}",
            API_BASE, self.model, self.api_key
        );

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(prompt),
                }],
            }],
            tools: vec![Tool {
                google_search: serde_json::json!({}),
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let code = if e.is_timeout() {
                    ErrorCode::TimeoutError
                } else {
                    ErrorCode::NetworkError
                };
                AppError::with_message(code, e.to_string())
            })?;

        if !response.status().is_success() {
            return Err(AppError::with_message(
                ErrorCode::AdvisorUnavailable,
                format!("Advisor upstream returned {}", response.status()),
            ));
        }

        let parsed: GenerateResponse = response.json().await.map_err(|e| {
            AppError::with_message(ErrorCode::AdvisorUnavailable, e.to_string())
        })?;

        let candidate = parsed.candidates.into_iter().next();

        let text = candidate
            .as_ref()
            .and_then(|c| c.content.as_ref())
            .map(|c| {
                c.parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "I'm sorry, I couldn't process that request.".to_string());

        let citations = candidate
            .and_then(|c| c.grounding_metadata)
            .map(|g| {
                g.grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.web)
                    .map(|w| Citation {
                        title: w.title,
                        uri: w.uri,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(AdvisorAnswer { text, citations })
    }
}
