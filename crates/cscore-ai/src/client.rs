//! HTTP client for the content-insight REST API.
//!
//! Wraps `reqwest` with insight-specific error handling, API key management,
//! and typed response deserialization. Every endpoint checks the `"status"`
//! field in the JSON envelope and surfaces API-level errors as
//! [`InsightError::Api`]. No retries: a failed call is the caller's signal
//! to fall back, not to hammer the provider.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use cscore_engine::insight::{
    AudienceSentiment, CaptionSentiment, ConsistencyScore, CtaAssessment, FaceDetection,
    HashtagAssessment, LanguageMix, MonetisationPotential, NicheDetection, ProfileContext,
    TrendRelevance, ViewPayoutEstimate,
};
use cscore_engine::types::VisualQuality;

use crate::error::InsightError;

const DEFAULT_BASE_URL: &str = "https://api.contentsight.io/v1/";

#[derive(serde::Deserialize)]
struct ApiEnvelope<T> {
    data: T,
}

#[derive(Serialize)]
struct CaptionRequest<'a> {
    captions: &'a [String],
}

#[derive(Serialize)]
struct MediaRequest<'a> {
    media_urls: &'a [String],
}

#[derive(Serialize)]
struct ContextRequest<'a> {
    context: &'a ProfileContext,
}

/// Client for the content-insight REST API.
///
/// Manages the HTTP client, API key, and base URL. Use [`InsightClient::new`]
/// for production or [`InsightClient::with_base_url`] to point at a mock
/// server in tests.
pub struct InsightClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl InsightClient {
    /// Creates a new client pointed at the production insight API.
    ///
    /// # Errors
    ///
    /// Returns [`InsightError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, InsightError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`InsightError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`InsightError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, InsightError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("cscore/0.1 (creator-scoring)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends operation paths instead of replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| InsightError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Probe the API health endpoint.
    ///
    /// Any failure -- network, non-2xx, timeout -- reads as "not available";
    /// this is the capability check callers run before paid operations.
    pub async fn health(&self) -> bool {
        let Ok(url) = self.base_url.join("health") else {
            return false;
        };
        match self.client.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Rate how well recent captions track current platform trends.
    ///
    /// # Errors
    ///
    /// - [`InsightError::Api`] if the API returns an error status.
    /// - [`InsightError::Http`] on network failure or non-2xx HTTP status.
    /// - [`InsightError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn trend_relevance(
        &self,
        captions: &[String],
    ) -> Result<TrendRelevance, InsightError> {
        self.post_op("trend-relevance", &CaptionRequest { captions })
            .await
    }

    /// Detect the primary and secondary content niches from captions.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`InsightClient::trend_relevance`].
    pub async fn niches(&self, captions: &[String]) -> Result<NicheDetection, InsightError> {
        self.post_op("niches", &CaptionRequest { captions }).await
    }

    /// Rate hashtag effectiveness across the sampled captions.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`InsightClient::trend_relevance`].
    pub async fn hashtags(&self, captions: &[String]) -> Result<HashtagAssessment, InsightError> {
        self.post_op("hashtags", &CaptionRequest { captions }).await
    }

    /// Break down caption languages by share.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`InsightClient::trend_relevance`].
    pub async fn language_mix(&self, captions: &[String]) -> Result<LanguageMix, InsightError> {
        self.post_op("language-mix", &CaptionRequest { captions })
            .await
    }

    /// Detect the share of sampled media containing a face.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`InsightClient::trend_relevance`].
    pub async fn faces(&self, media_urls: &[String]) -> Result<FaceDetection, InsightError> {
        self.post_op("faces", &MediaRequest { media_urls }).await
    }

    /// Judge lighting, editing, and aesthetics of the sampled media.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`InsightClient::trend_relevance`].
    pub async fn visual_quality(
        &self,
        media_urls: &[String],
    ) -> Result<VisualQuality, InsightError> {
        self.post_op("visual-quality", &MediaRequest { media_urls })
            .await
    }

    /// Judge color/mood consistency of the sampled media (1–20 scale).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`InsightClient::trend_relevance`].
    pub async fn consistency(
        &self,
        media_urls: &[String],
    ) -> Result<ConsistencyScore, InsightError> {
        self.post_op("consistency", &MediaRequest { media_urls })
            .await
    }

    /// Score caption sentiment on a −100..+100 scale.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`InsightClient::trend_relevance`].
    pub async fn caption_sentiment(
        &self,
        captions: &[String],
    ) -> Result<CaptionSentiment, InsightError> {
        self.post_op("caption-sentiment", &CaptionRequest { captions })
            .await
    }

    /// Rate call-to-action usage across captions.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`InsightClient::trend_relevance`].
    pub async fn cta_usage(&self, captions: &[String]) -> Result<CtaAssessment, InsightError> {
        self.post_op("cta-usage", &CaptionRequest { captions })
            .await
    }

    /// Predict monetisation potential for a profile (1–50 scale).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`InsightClient::trend_relevance`].
    pub async fn monetisation(
        &self,
        context: &ProfileContext,
    ) -> Result<MonetisationPotential, InsightError> {
        self.post_op("monetisation", &ContextRequest { context })
            .await
    }

    /// Estimate the per-view payout a brand could expect.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`InsightClient::trend_relevance`].
    pub async fn view_payout(
        &self,
        context: &ProfileContext,
    ) -> Result<ViewPayoutEstimate, InsightError> {
        self.post_op("view-payout", &ContextRequest { context })
            .await
    }

    /// Rate overall audience sentiment toward the profile (1–20 scale).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`InsightClient::trend_relevance`].
    pub async fn audience_sentiment(
        &self,
        context: &ProfileContext,
    ) -> Result<AudienceSentiment, InsightError> {
        self.post_op("audience-sentiment", &ContextRequest { context })
            .await
    }

    /// Sends a POST with the API key header, asserts a 2xx status, checks
    /// the envelope status field, and extracts the typed payload.
    async fn post_op<B, T>(&self, op: &str, body: &B) -> Result<T, InsightError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self
            .base_url
            .join(op)
            .map_err(|e| InsightError::Api(format!("invalid operation path '{op}': {e}")))?;

        let response = self
            .client
            .post(url.clone())
            .header("x-api-key", &self.api_key)
            .json(body)
            .send()
            .await?;
        let response = response.error_for_status()?;
        let text = response.text().await?;

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| InsightError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;
        Self::check_api_error(&value)?;

        let envelope: ApiEnvelope<T> =
            serde_json::from_value(value).map_err(|e| InsightError::Deserialize {
                context: format!("{op} response"),
                source: e,
            })?;

        Ok(envelope.data)
    }

    /// Checks the top-level `"status"` field and returns an error if it
    /// indicates failure.
    fn check_api_error(body: &serde_json::Value) -> Result<(), InsightError> {
        if body.get("status").and_then(serde_json::Value::as_str) == Some("error") {
            let msg = body
                .get("error")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(InsightError::Api(msg));
        }
        Ok(())
    }
}
