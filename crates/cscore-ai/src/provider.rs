//! [`InsightProvider`] implementations: the HTTP client and the always-off
//! provider used when no insight API is configured.

use async_trait::async_trait;

use cscore_engine::insight::{
    AudienceSentiment, CaptionSentiment, ConsistencyScore, CtaAssessment, FaceDetection,
    HashtagAssessment, InsightProvider, LanguageMix, MonetisationPotential, NicheDetection,
    ProfileContext, ProviderError, TrendRelevance, ViewPayoutEstimate,
};
use cscore_engine::types::VisualQuality;

use crate::client::InsightClient;
use crate::error::InsightError;

impl From<InsightError> for ProviderError {
    fn from(err: InsightError) -> Self {
        ProviderError(err.to_string())
    }
}

#[async_trait]
impl InsightProvider for InsightClient {
    async fn is_available(&self) -> bool {
        self.health().await
    }

    async fn analyze_trend_relevance(
        &self,
        captions: &[String],
    ) -> Result<TrendRelevance, ProviderError> {
        Ok(self.trend_relevance(captions).await?)
    }

    async fn detect_niches(&self, captions: &[String]) -> Result<NicheDetection, ProviderError> {
        Ok(self.niches(captions).await?)
    }

    async fn rate_hashtags(
        &self,
        captions: &[String],
    ) -> Result<HashtagAssessment, ProviderError> {
        Ok(self.hashtags(captions).await?)
    }

    async fn analyze_language_mix(
        &self,
        captions: &[String],
    ) -> Result<LanguageMix, ProviderError> {
        Ok(self.language_mix(captions).await?)
    }

    async fn detect_faces(&self, media_urls: &[String]) -> Result<FaceDetection, ProviderError> {
        Ok(self.faces(media_urls).await?)
    }

    async fn assess_visual_quality(
        &self,
        media_urls: &[String],
    ) -> Result<VisualQuality, ProviderError> {
        Ok(self.visual_quality(media_urls).await?)
    }

    async fn assess_consistency(
        &self,
        media_urls: &[String],
    ) -> Result<ConsistencyScore, ProviderError> {
        Ok(self.consistency(media_urls).await?)
    }

    async fn analyze_caption_sentiment(
        &self,
        captions: &[String],
    ) -> Result<CaptionSentiment, ProviderError> {
        Ok(self.caption_sentiment(captions).await?)
    }

    async fn assess_cta_usage(&self, captions: &[String]) -> Result<CtaAssessment, ProviderError> {
        Ok(self.cta_usage(captions).await?)
    }

    async fn predict_monetisation(
        &self,
        context: &ProfileContext,
    ) -> Result<MonetisationPotential, ProviderError> {
        Ok(self.monetisation(context).await?)
    }

    async fn estimate_view_payout(
        &self,
        context: &ProfileContext,
    ) -> Result<ViewPayoutEstimate, ProviderError> {
        Ok(self.view_payout(context).await?)
    }

    async fn assess_audience_sentiment(
        &self,
        context: &ProfileContext,
    ) -> Result<AudienceSentiment, ProviderError> {
        Ok(self.audience_sentiment(context).await?)
    }
}

/// Provider for offline runs: never available, so every metric resolves to
/// its documented default. The paid operations are unreachable behind the
/// capability check but still answer with a clean error if called directly.
pub struct UnavailableProvider;

impl UnavailableProvider {
    fn disabled() -> ProviderError {
        ProviderError("insight provider not configured".to_string())
    }
}

#[async_trait]
impl InsightProvider for UnavailableProvider {
    async fn is_available(&self) -> bool {
        false
    }

    async fn analyze_trend_relevance(
        &self,
        _captions: &[String],
    ) -> Result<TrendRelevance, ProviderError> {
        Err(Self::disabled())
    }

    async fn detect_niches(&self, _captions: &[String]) -> Result<NicheDetection, ProviderError> {
        Err(Self::disabled())
    }

    async fn rate_hashtags(
        &self,
        _captions: &[String],
    ) -> Result<HashtagAssessment, ProviderError> {
        Err(Self::disabled())
    }

    async fn analyze_language_mix(
        &self,
        _captions: &[String],
    ) -> Result<LanguageMix, ProviderError> {
        Err(Self::disabled())
    }

    async fn detect_faces(&self, _media_urls: &[String]) -> Result<FaceDetection, ProviderError> {
        Err(Self::disabled())
    }

    async fn assess_visual_quality(
        &self,
        _media_urls: &[String],
    ) -> Result<VisualQuality, ProviderError> {
        Err(Self::disabled())
    }

    async fn assess_consistency(
        &self,
        _media_urls: &[String],
    ) -> Result<ConsistencyScore, ProviderError> {
        Err(Self::disabled())
    }

    async fn analyze_caption_sentiment(
        &self,
        _captions: &[String],
    ) -> Result<CaptionSentiment, ProviderError> {
        Err(Self::disabled())
    }

    async fn assess_cta_usage(
        &self,
        _captions: &[String],
    ) -> Result<CtaAssessment, ProviderError> {
        Err(Self::disabled())
    }

    async fn predict_monetisation(
        &self,
        _context: &ProfileContext,
    ) -> Result<MonetisationPotential, ProviderError> {
        Err(Self::disabled())
    }

    async fn estimate_view_payout(
        &self,
        _context: &ProfileContext,
    ) -> Result<ViewPayoutEstimate, ProviderError> {
        Err(Self::disabled())
    }

    async fn assess_audience_sentiment(
        &self,
        _context: &ProfileContext,
    ) -> Result<AudienceSentiment, ProviderError> {
        Err(Self::disabled())
    }
}
