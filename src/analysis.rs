// ABOUTME: Optional photo rating through an OpenAI-compatible multimodal chat endpoint
// ABOUTME: Prompt construction, reply parsing and the HTTP client behind the PhotoAnalyzer trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

//! # Photo Analysis
//!
//! Sends a progress photo plus a fixed rating prompt to
//! `{base_url}/chat/completions` and turns the reply into a [`PhotoRating`].
//! The feature is off unless the profile holds a credential. Nothing is
//! persisted here; callers attach the rating to a photo themselves, and a
//! failed call is never retried.
//!
//! ```rust,no_run
//! use peptidion::analysis::{AnalysisConfig, AnalysisService};
//! use peptidion::models::{PhotoType, Profile};
//!
//! # async fn example(profile: Profile, image: Vec<u8>) -> peptidion::errors::AppResult<()> {
//! if let Some(service) = AnalysisService::from_profile(&profile, AnalysisConfig::default())? {
//!     let url = peptidion::analysis::image_data_url("image/jpeg", &image);
//!     let rating = service.rate(&url, PhotoType::Front).await?;
//!     println!("overall {:?}", rating.overall);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use peptidion_core::models::{PhotoRating, PhotoType, Profile};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::constants::analysis::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, MAX_SCORE, MAX_TOKENS, SERVICE_NAME,
};
use crate::errors::{AppError, AppResult};

/// Analysis endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// OpenAI-compatible base URL, without the `/chat/completions` suffix
    pub base_url: String,
    /// Multimodal model name
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Something that can rate a progress photo
#[async_trait]
pub trait PhotoAnalyzer: Send + Sync {
    /// Rate the image at `image_url` (usually a `data:` URL)
    async fn rate(&self, image_url: &str, photo_type: PhotoType) -> AppResult<PhotoRating>;
}

/// The fixed rating prompt for one photo type
#[must_use]
pub fn build_rating_prompt(photo_type: PhotoType) -> String {
    format!(
        "Analyze this {} photo and rate the following aspects on a scale of 1-10:\n\
         \n\
         1. Leanness (muscle definition and low body fat)\n\
         2. Debloatedness (minimal water retention, defined features)\n\
         3. Clear Skin (skin quality and clarity)\n\
         4. Jawline (facial structure definition)\n\
         \n\
         Provide an overall rating (1-10) and a brief analysis (2-3 sentences).\n\
         \n\
         Return your response in the following JSON format:\n\
         {{\n  \"leanness\": <number>,\n  \"debloatedness\": <number>,\n  \
         \"clearSkin\": <number>,\n  \"jawline\": <number>,\n  \"overall\": <number>,\n  \
         \"analysis\": \"<string>\"\n}}",
        photo_type.as_str()
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RatingReply {
    leanness: f64,
    debloatedness: f64,
    clear_skin: f64,
    jawline: f64,
    overall: f64,
    analysis: String,
}

/// Extract and validate the rating object from a model reply
///
/// The reply may wrap the JSON in prose or code fences; everything from the
/// first `{` to the last `}` is decoded.
///
/// # Errors
///
/// Returns an external-service error when no object is present, a field is
/// missing, or a score is outside `0..=10`
pub fn parse_rating_reply(text: &str) -> AppResult<PhotoRating> {
    let object = match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => {
            return Err(AppError::external_service(
                SERVICE_NAME,
                "Reply contained no JSON object",
            ))
        }
    };

    let reply: RatingReply = serde_json::from_str(object).map_err(|e| {
        AppError::external_service(SERVICE_NAME, format!("Malformed rating object: {e}"))
    })?;

    for (name, score) in [
        ("leanness", reply.leanness),
        ("debloatedness", reply.debloatedness),
        ("clearSkin", reply.clear_skin),
        ("jawline", reply.jawline),
        ("overall", reply.overall),
    ] {
        if !(0.0..=MAX_SCORE).contains(&score) {
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!("Score {name} out of range: {score}"),
            ));
        }
    }

    Ok(PhotoRating {
        leanness: Some(reply.leanness),
        debloatedness: Some(reply.debloatedness),
        clear_skin: Some(reply.clear_skin),
        jawline: Some(reply.jawline),
        overall: Some(reply.overall),
        analysis: Some(reply.analysis.trim().to_owned()),
    })
}

/// Encode image bytes as a `data:` URL
#[must_use]
pub fn image_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Read an image file and encode it as a `data:` URL
///
/// # Errors
///
/// Returns an error if the file cannot be read or has an unsupported
/// extension
pub async fn image_file_data_url(path: &Path) -> AppResult<String> {
    let mime = match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        _ => {
            return Err(AppError::invalid_input(format!(
                "Unsupported image type: {}",
                path.display()
            )))
        }
    };

    let bytes = tokio::fs::read(path).await?;
    Ok(image_data_url(mime, &bytes))
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<serde_json::Value>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for an OpenAI-compatible chat completions endpoint
pub struct OpenAiPhotoAnalyzer {
    config: AnalysisConfig,
    api_key: String,
    http_client: Client,
}

impl std::fmt::Debug for OpenAiPhotoAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiPhotoAnalyzer")
            .field("config", &self.config)
            .field("api_key", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl OpenAiPhotoAnalyzer {
    /// Create a client
    ///
    /// # Errors
    ///
    /// Returns an internal error if the HTTP client cannot be built
    pub fn new(config: AnalysisConfig, api_key: impl Into<String>) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            api_key: api_key.into(),
            http_client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl PhotoAnalyzer for OpenAiPhotoAnalyzer {
    async fn rate(&self, image_url: &str, photo_type: PhotoType) -> AppResult<PhotoRating> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![json!({
                "role": "user",
                "content": [
                    { "type": "text", "text": build_rating_prompt(photo_type) },
                    { "type": "image_url", "image_url": { "url": image_url } }
                ]
            })],
            max_tokens: MAX_TOKENS,
        };

        debug!(photo_type = photo_type.as_str(), model = %self.config.model, "Requesting photo rating");

        let response = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::external_service(SERVICE_NAME, e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!("Rating request failed with HTTP {status}"),
            ));
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("JSON parse error: {e}"))
        })?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::external_service(SERVICE_NAME, "Reply had no content"))?;

        let rating = parse_rating_reply(&content)?;
        info!(photo_type = photo_type.as_str(), overall = ?rating.overall, "Photo rated");
        Ok(rating)
    }
}

/// Entry point used by callers: present only when a credential is configured
#[derive(Clone)]
pub struct AnalysisService {
    analyzer: Arc<dyn PhotoAnalyzer>,
}

impl std::fmt::Debug for AnalysisService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisService").finish_non_exhaustive()
    }
}

impl AnalysisService {
    /// Wrap any analyzer
    #[must_use]
    pub fn new(analyzer: Arc<dyn PhotoAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Service for the profile's credential, or `None` when it has none
    ///
    /// # Errors
    ///
    /// Returns an internal error if the HTTP client cannot be built
    pub fn from_profile(profile: &Profile, config: AnalysisConfig) -> AppResult<Option<Self>> {
        let Some(key) = profile.analysis_credential() else {
            debug!("No analysis credential configured, photo analysis disabled");
            return Ok(None);
        };
        let analyzer = OpenAiPhotoAnalyzer::new(config, key)?;
        Ok(Some(Self::new(Arc::new(analyzer))))
    }

    /// Rate one photo
    ///
    /// # Errors
    ///
    /// Returns an external-service error if the call or reply parsing fails
    pub async fn rate(&self, image_url: &str, photo_type: PhotoType) -> AppResult<PhotoRating> {
        self.analyzer.rate(image_url, photo_type).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_photo_type() {
        let prompt = build_rating_prompt(PhotoType::Side);
        assert!(prompt.starts_with("Analyze this side photo"));
        assert!(prompt.contains("\"clearSkin\": <number>"));
    }

    #[test]
    fn reply_parsing_tolerates_surrounding_prose() {
        let reply = "Sure! ```json\n{\"leanness\": 7, \"debloatedness\": 6.5, \"clearSkin\": 8, \
                     \"jawline\": 7, \"overall\": 7, \"analysis\": \" Solid progress. \"}\n```";
        let rating = parse_rating_reply(reply).unwrap();
        assert_eq!(rating.debloatedness, Some(6.5));
        assert_eq!(rating.analysis.as_deref(), Some("Solid progress."));
    }

    #[test]
    fn reply_parsing_rejects_bad_objects() {
        assert!(parse_rating_reply("no json here").is_err());
        assert!(parse_rating_reply("{\"leanness\": 7}").is_err());
        let out_of_range = "{\"leanness\": 11, \"debloatedness\": 6, \"clearSkin\": 8, \
                            \"jawline\": 7, \"overall\": 7, \"analysis\": \"x\"}";
        assert!(parse_rating_reply(out_of_range).is_err());
    }

    #[test]
    fn data_url_is_base64() {
        assert_eq!(image_data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn service_requires_credential() {
        let profile = Profile::default();
        assert!(AnalysisService::from_profile(&profile, AnalysisConfig::default())
            .unwrap()
            .is_none());
    }
}
