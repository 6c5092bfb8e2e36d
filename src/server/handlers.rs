//! HTTP handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use seolens_core::{AnalysisRequest, AnalysisResult, InsertionRequest};

use super::error::ApiError;
use super::state::AppState;

pub const INSERTED_MESSAGE: &str = "Keyword inserted intelligently.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertKeywordResponse {
    pub new_text: String,
    pub message: &'static str,
}

/// Health check endpoint
pub async fn health() -> Json<Value> {
    Json(json!({ "message": "Server is running and healthy!" }))
}

/// Analyze a block of text
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(request) = payload?;
    let result = state.analysis.analyze(&request.text).await?;

    tracing::info!(
        word_count = result.word_count,
        topics = result.main_topics.len(),
        keywords = result.suggested_keywords.len(),
        degraded = result.is_degraded(),
        "Analysis complete"
    );

    Ok(Json(result))
}

/// Rewrite the most related sentence of a text to include a keyword
pub async fn insert_keyword(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InsertionRequest>, JsonRejection>,
) -> Result<Json<InsertKeywordResponse>, ApiError> {
    let Json(request) = payload?;
    let result = state
        .insertion
        .insert_keyword(&request.original_text, &request.keyword_to_insert)
        .await
        .map_err(ApiError::during_insertion)?;

    Ok(Json(InsertKeywordResponse {
        new_text: result.new_text,
        message: INSERTED_MESSAGE,
    }))
}
