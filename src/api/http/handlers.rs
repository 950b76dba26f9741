// src/api/http/handlers.rs
// Request handlers for the two proxy endpoints. Each request is independent:
// build the prompt, make exactly one upstream call, normalize the result.

use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::api::error::ApiError;
use crate::llm::TextOutcome;
use crate::prompt::{APOLOGY, Mood, PromptKind, build_artwork_prompt, build_text_prompt};
use crate::state::AppState;

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePromptRequest {
    pub prompt_type: PromptKind,
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GeneratePromptResponse {
    pub response: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateArtworkRequest {
    pub content: String,
    /// An absent mood falls back to the calming base phrase.
    pub mood: Option<Mood>,
    #[serde(default)]
    pub is_daily: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateArtworkResponse {
    pub image_url: Option<String>,
    pub prompt: String,
    pub generation_id: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// Daily-prompt / rant-response proxy.
///
/// Always answers 200 with a non-empty `response` string when the upstream
/// was reachable; a malformed upstream body degrades to the fixed apology
/// text instead of an error.
pub async fn generate_prompt_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<GeneratePromptRequest>,
) -> Result<Json<GeneratePromptResponse>, ApiError> {
    let prompt = build_text_prompt(request.prompt_type, request.content.as_deref());

    match app_state.text.generate(&prompt).await {
        Ok(TextOutcome::Text(response)) => Ok(Json(GeneratePromptResponse { response })),
        Ok(TextOutcome::Malformed) => {
            warn!(prompt_type = ?request.prompt_type, "upstream returned no usable candidate");
            Ok(Json(GeneratePromptResponse {
                response: APOLOGY.to_string(),
            }))
        }
        Err(e) => Err(ApiError::internal(e.to_string())),
    }
}

/// Artwork generation proxy.
pub async fn generate_artwork_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<GenerateArtworkRequest>,
) -> Result<Json<GenerateArtworkResponse>, ApiError> {
    let prompt = build_artwork_prompt(&request.content, request.mood);
    info!("Generating artwork with prompt: {}", prompt);
    debug!(is_daily = request.is_daily, mood = ?request.mood, "artwork request");

    let output = app_state
        .artwork
        .generate(&prompt)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(GenerateArtworkResponse {
        image_url: output.image_url,
        prompt,
        generation_id: output.generation_id,
    }))
}
