//! Gemini API integration for commit message generation
//!
//! This module handles communication with the Gemini generateContent endpoint
//! to turn a prompt built from a git diff into a commit message. Every remote
//! failure collapses to "no message": the error is logged and the caller
//! receives `None`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{error, info};

/// Environment variable that supplies the API credential.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Model the prompt is sent to.
const GEMINI_MODEL: &str = "gemini-2.0-flash";

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Read the API credential from the environment
///
/// # Returns
///
/// * `Result<String>` - The credential value
///
/// # Errors
///
/// * The `GEMINI_API_KEY` environment variable is not set
pub fn credential_from_env() -> Result<String> {
    env::var(GEMINI_API_KEY_VAR)
        .with_context(|| format!("{} environment variable not set", GEMINI_API_KEY_VAR))
}

/// Producer of commit messages from a prompt.
///
/// The Gemini-backed implementation is [`GeminiClient`]; tests substitute
/// stubs so the pipeline can run without network access.
pub trait CommitMessageGenerator {
    /// Generate a commit message, or `None` when generation is unavailable.
    fn generate(&self, prompt: &str) -> Option<String>;
}

/// [`CommitMessageGenerator`] backed by the Gemini REST API.
///
/// One synchronous request per run: no retry, no streaming, no timeout
/// tuning beyond the client defaults.
pub struct GeminiClient {
    client: reqwest::blocking::Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key,
        }
    }

    fn request_message(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, GEMINI_MODEL);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::new(prompt))
            .send()
            .context("Failed to reach the Gemini API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            anyhow::bail!("Gemini API returned {}: {}", status, error_detail(&body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .context("Failed to parse Gemini API response")?;

        parsed
            .first_candidate_text()
            .context("Gemini API response contained no generated text")
    }
}

impl CommitMessageGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> Option<String> {
        info!("Generating commit message using Gemini API");

        match self.request_message(prompt) {
            Ok(message) => Some(message),
            Err(e) => {
                error!("Error generating commit message: {:#}", e);
                None
            }
        }
    }
}

/// Pull the human-readable message out of an API error body, falling back to
/// the raw body when it is not the documented JSON shape.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

impl GenerateContentResponse {
    /// Text of the first candidate, with multi-part answers concatenated.
    fn first_candidate_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        if candidate.content.parts.is_empty() {
            return None;
        }
        Some(
            candidate
                .content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<String>(),
        )
    }
}
