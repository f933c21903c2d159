//! Chat demo message model
//!
//! Shared between the browser widget and the `/api/generate` endpoint.

use serde::{Deserialize, Serialize};

/// Shown whenever the knowledge base cannot be reached
pub const FALLBACK_MESSAGE: &str = "I'm currently unable to access the knowledge base. Please check your connection or API configuration.";

/// Shown when the model answered without any text
pub const EMPTY_RESPONSE_MESSAGE: &str =
    "I processed your request but could not generate a textual response.";

/// Greeting the demo starts with
pub const WELCOME_MESSAGE: &str = "Welcome to Cordon. I have indexed your organization's emails, Slack logs, and document repositories. How can I help you unlock this knowledge today?";

/// Canned queries offered before the conversation gets going
pub const SUGGESTIONS: [&str; 3] = [
    "Summarize Q3 Project Phoenix emails",
    "What is our policy on remote work?",
    "Find recent complaints about 'Login Flow'",
];

/// Suggestions are hidden once the conversation has this many messages
pub const SUGGESTION_CUTOFF: usize = 3;

/// Generation API path
pub const GENERATE_PATH: &str = "/api/generate";

/// Who wrote a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// A single chat message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Initial conversation shown by the demo
pub fn initial_conversation() -> Vec<ChatMessage> {
    vec![ChatMessage::model(WELCOME_MESSAGE)]
}

/// Whether the suggestion pills are still offered
pub fn show_suggestions(messages: &[ChatMessage]) -> bool {
    messages.len() < SUGGESTION_CUTOFF
}

/// Normalize a raw query; `None` when there is nothing to send
pub fn prepare_query(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Body of `POST /api/generate`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub query: String,
}

/// Response of `POST /api/generate`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_conversation() {
        let messages = initial_conversation();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::Model);
        assert!(messages[0].text.starts_with("Welcome to Cordon"));
    }

    #[test]
    fn test_suggestions_hidden_after_exchange() {
        let mut messages = initial_conversation();
        assert!(show_suggestions(&messages));

        messages.push(ChatMessage::user("hi"));
        assert!(show_suggestions(&messages));

        messages.push(ChatMessage::model("hello"));
        assert!(!show_suggestions(&messages));
    }

    #[test]
    fn test_prepare_query() {
        assert_eq!(prepare_query("   "), None);
        assert_eq!(prepare_query(""), None);
        assert_eq!(prepare_query(" q3 "), Some(" q3 ".to_string()));
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&ChatMessage::user("x")).unwrap();
        assert_eq!(json, r#"{"role":"user","text":"x"}"#);
    }

    #[test]
    fn test_generate_wire_format() {
        let request: GenerateRequest = serde_json::from_str(r#"{"query":"policy?"}"#).unwrap();
        assert_eq!(request.query, "policy?");

        let response: GenerateResponse =
            serde_json::from_str(r#"{"text":"Q3 revenue rose 12%."}"#).unwrap();
        assert_eq!(response.text, "Q3 revenue rose 12%.");
    }
}
