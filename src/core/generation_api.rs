//! Generation API server-side handler
//!
//! Exposes `POST /api/generate` for the chat demo. The handler never fails
//! once the request body parses: every generation error is logged and turned
//! into the fallback message.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

use super::chat::{GENERATE_PATH, GenerateRequest, GenerateResponse};
use super::generation::Generator;

/// Create the generation API router
pub fn generation_router(generator: Generator) -> Router {
    let state = Arc::new(generator);

    Router::new()
        .route(GENERATE_PATH, post(generate_handler))
        .with_state(state)
}

async fn generate_handler(
    State(generator): State<Arc<Generator>>,
    Json(request): Json<GenerateRequest>,
) -> Json<GenerateResponse> {
    tracing::info!(
        "Generation request: model={}, query_len={}",
        generator.config().model,
        request.query.len()
    );

    let text = generator.respond(&request.query).await;

    tracing::debug!("Generation reply: {} bytes", text.len());

    Json(GenerateResponse { text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chat::FALLBACK_MESSAGE;
    use crate::core::config::Config;

    #[tokio::test]
    async fn test_handler_recovers_missing_key() {
        let generator = Arc::new(Generator::new(Config::from_lookup(|_| None)));

        let Json(response) = generate_handler(
            State(generator),
            Json(GenerateRequest {
                query: "Summarize Q3 Project Phoenix emails".to_string(),
            }),
        )
        .await;

        assert_eq!(response.text, FALLBACK_MESSAGE);
    }

    #[test]
    fn test_router_builds() {
        let _router = generation_router(Generator::new(Config::from_lookup(|_| None)));
    }
}
