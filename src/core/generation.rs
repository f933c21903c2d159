//! Text generation client
//!
//! Talks to the generative-language `generateContent` endpoint on behalf of the
//! chat demo. The API key stays on the server; the browser only ever sees the
//! generated text (or the fallback message).

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::chat::{EMPTY_RESPONSE_MESSAGE, FALLBACK_MESSAGE};
use super::config::Config;

/// System instruction that makes the model answer like Cordon's engine
pub const SYSTEM_INSTRUCTION: &str = r#"You are the AI engine for "Cordon", an enterprise data platform.

Your Capabilities:
1. You ingest email logs, Slack chats, PDF contracts, and sales calls.
2. You provide citation-backed answers.

Task:
Answer the user's query as if you are searching through their internal company database.
- Adopt a professional, concise, and helpful tone.
- Invent plausible internal data points (e.g., "Found in Q3 Report.pdf", "Email from Sarah Jenkins on Oct 12").
- Keep the answer under 100 words.
- If the user asks what Cordon is, explain the product value proposition (capturing and structuring data for enterprise AI)."#;

/// Errors from a single generation call
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("No API key configured. Set GEMINI_API_KEY in .env")]
    MissingApiKey,

    #[error("Failed to reach generation API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Generation API returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("Failed to decode generation response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A text part of a content block
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A content block (one turn)
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
}

/// `generateContent` request body
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Single-turn request for a user query
    pub fn for_query(query: &str, temperature: f32) -> Self {
        Self {
            contents: vec![Content::text(Some("user"), query)],
            system_instruction: Content::text(None, SYSTEM_INSTRUCTION),
            generation_config: GenerationConfig { temperature },
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// `generateContent` response body
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, `None` if it has no text
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Generation client bound to a server config
#[derive(Clone)]
pub struct Generator {
    client: reqwest::Client,
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one generation call
    ///
    /// `Ok(None)` means the model answered without text.
    pub async fn generate(&self, query: &str) -> Result<Option<String>, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;

        let request = GenerateContentRequest::for_query(query, self.config.temperature);

        let response = self
            .client
            .post(self.config.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GenerationError::Upstream { status, body });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        Ok(parsed.text())
    }

    /// Generate a reply, recovering every failure into a user-facing message
    pub async fn respond(&self, query: &str) -> String {
        resolve_reply(self.generate(query).await)
    }
}

/// Map a generation outcome to the text shown to the user
pub fn resolve_reply(outcome: Result<Option<String>, GenerationError>) -> String {
    match outcome {
        Ok(Some(text)) => text,
        Ok(None) => EMPTY_RESPONSE_MESSAGE.to_string(),
        Err(e) => {
            tracing::error!("Generation API error: {}", e);
            FALLBACK_MESSAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = GenerateContentRequest::for_query("What is Cordon?", 0.7);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "What is Cordon?");
        assert!(json["systemInstruction"].get("role").is_none());
        assert!(
            json["systemInstruction"]["parts"][0]["text"]
                .as_str()
                .unwrap()
                .contains("Cordon")
        );
        let temperature = json["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_response_text_joins_parts() {
        let body = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Found in "}, {"text": "Q3 Report.pdf"}]},
                "finishReason": "STOP"
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.text().as_deref(), Some("Found in Q3 Report.pdf"));
        assert_eq!(response.candidates[0].finish_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn test_response_without_text() {
        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.text(), None);

        let blocked: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert_eq!(blocked.text(), None);

        let blank: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#)
                .unwrap();
        assert_eq!(blank.text(), None);
    }

    #[test]
    fn test_resolve_reply() {
        assert_eq!(resolve_reply(Ok(Some("answer".to_string()))), "answer");
        assert_eq!(resolve_reply(Ok(None)), EMPTY_RESPONSE_MESSAGE);
        assert_eq!(
            resolve_reply(Err(GenerationError::MissingApiKey)),
            FALLBACK_MESSAGE
        );
        assert_eq!(
            resolve_reply(Err(GenerationError::Upstream {
                status: StatusCode::TOO_MANY_REQUESTS,
                body: "quota".to_string(),
            })),
            FALLBACK_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_generate_without_key_fails_fast() {
        let config = Config::from_lookup(|_| None);
        let generator = Generator::new(config);

        let outcome = generator.generate("hello").await;
        assert!(matches!(outcome, Err(GenerationError::MissingApiKey)));
        assert_eq!(generator.respond("hello").await, FALLBACK_MESSAGE);
    }

    #[test]
    fn test_error_messages() {
        let err = GenerationError::Upstream {
            status: StatusCode::BAD_REQUEST,
            body: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Generation API returned 400 Bad Request: bad");
    }
}
