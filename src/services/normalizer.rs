use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::errors::{AppError, AppResult};

static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)```").expect("fence regex compiles"));

/// Picks the JSON candidate out of an assistant reply. Fallback order:
/// first complete ``` fenced block (optionally tagged `json`), then
/// leading/trailing fence-marker trimming, then the trimmed raw content.
pub fn extract_json_candidate(content: &str) -> &str {
    let trimmed = content.trim();

    if let Some(caps) = FENCE_RE.captures(trimmed) {
        if let Some(inner) = caps.get(1) {
            return inner.as_str().trim();
        }
    }

    // Unterminated fence: strip the markers that are present.
    let mut candidate = trimmed;
    if let Some(rest) = candidate.strip_prefix("```json") {
        candidate = rest;
    } else if let Some(rest) = candidate.strip_prefix("```") {
        candidate = rest;
    }
    if let Some(rest) = candidate.strip_suffix("```") {
        candidate = rest;
    }
    candidate.trim()
}

/// Normalizes raw assistant text into `T`. Empty content, JSON syntax
/// errors and shape mismatches map to distinct error kinds; the parse
/// failure keeps the original unmodified content for diagnosis.
pub fn normalize<T: DeserializeOwned>(content: Option<&str>) -> AppResult<T> {
    let content = match content {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err(AppError::EmptyResponse),
    };

    let candidate = extract_json_candidate(content);
    let value: serde_json::Value = serde_json::from_str(candidate).map_err(|_| {
        AppError::ParseFailure {
            raw: content.to_string(),
        }
    })?;

    serde_json::from_value(value).map_err(|err| AppError::SchemaViolation(err.to_string()))
}
