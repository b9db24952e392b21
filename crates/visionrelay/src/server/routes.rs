use crate::anthropic::AnthropicClient;
use crate::config::RelayConfig;
use crate::prelude::*;
use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use visionrelay_core::analyze::{
    build_messages_request, build_prompt, preview, AnalyzeRequest, AnalyzeResponse,
    HealthResponse,
};
use visionrelay_core::answer::extract_answer_with_kind;

/// Characters of the model reply written to the log.
const REPLY_PREVIEW_CHARS: usize = 200;

pub struct AppState {
    pub config: RelayConfig,
    pub client: AnthropicClient,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler))
        .layer(DefaultBodyLimit::max(state.config.body_limit_bytes))
        .layer(cors)
        .with_state(state)
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(&state.config.model))
}

async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, Error> {
    let started = Instant::now();

    request.validate()?;

    let mode = request.mode();
    let images = request.image_list();
    let transcription = request.transcription();

    log::info!(
        "Mode: {}, Images: {}, Transcription: {}",
        mode.as_str().to_uppercase(),
        images.len(),
        if transcription.is_some() { "yes" } else { "no" }
    );

    let prompt = build_prompt(mode, transcription);
    let payload = build_messages_request(
        &state.config.model,
        state.config.max_tokens,
        &images,
        prompt,
    );

    log::info!("Calling {}...", state.config.model);
    let response = state.client.create_message(&payload).await?;

    let full_analysis = response.first_text().unwrap_or_default().to_string();
    log::info!(
        "Model full response: \"{}...\"",
        preview(&full_analysis, REPLY_PREVIEW_CHARS)
    );

    let extracted = extract_answer_with_kind(&full_analysis).ok_or(Error::EmptyReply)?;
    log::info!("Final answer: \"{}\" ({:?})", extracted.answer, extracted.kind);

    let timing = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    log::info!("Total time: {}ms", timing);

    Ok(Json(AnalyzeResponse {
        success: true,
        text: extracted.answer,
        full_analysis,
        mode,
        timing,
    }))
}
