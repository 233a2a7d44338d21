//! The scoring engine facade.
//!
//! One public operation, [`ScoringEngine::compute_profile_score`], plus a
//! per-category diagnostic entry point. The engine loads all signals once,
//! fans the six calculators out under a join barrier, and merges their
//! results into the final report.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use cscore_core::ScoringPolicy;
use uuid::Uuid;

use crate::aggregate;
use crate::cache::InsightGate;
use crate::categories::{audience, engagement, growth, monetisation, quality, relevance};
use crate::error::EngineError;
use crate::feedback;
use crate::insight::InsightProvider;
use crate::report::{Category, CategoryScore, ProfileScoreReport};
use crate::signals::{ScoringContext, SignalReader};
use crate::stores::StoreSet;

pub struct ScoringEngine {
    stores: StoreSet,
    gate: InsightGate,
    policy: ScoringPolicy,
}

impl ScoringEngine {
    #[must_use]
    pub fn new(
        stores: StoreSet,
        provider: Arc<dyn InsightProvider>,
        policy: ScoringPolicy,
        insight_timeout: Duration,
    ) -> Self {
        Self {
            stores,
            gate: InsightGate::new(provider, insight_timeout),
            policy,
        }
    }

    /// Compute the full six-category score report for a profile.
    ///
    /// The calculators run concurrently and individually degrade to their
    /// documented defaults; the only hard failure modes are an unknown
    /// profile and a broken store backend.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ProfileNotFound`] if no such profile exists.
    /// - [`EngineError::Store`] on backend failure.
    pub async fn compute_profile_score(
        &self,
        profile_id: Uuid,
    ) -> Result<ProfileScoreReport, EngineError> {
        let ctx = self.load_context(profile_id).await?;

        let (audience, relevance, quality, engagement, growth, monetisation) = tokio::join!(
            async { audience::score(&ctx, &self.policy) },
            relevance::score(&ctx, &self.gate, &self.policy),
            quality::score(&ctx, &self.gate),
            async { engagement::score(&ctx, &self.policy) },
            async { growth::score(&ctx, &self.policy) },
            monetisation::score(&ctx, &self.gate),
        );

        let categories = vec![
            audience,
            relevance,
            quality,
            engagement,
            growth,
            monetisation,
        ];
        let composite = aggregate::composite(&categories);
        let grade = aggregate::grade_for(composite);
        let summary = feedback::summarise(&ctx, &categories, composite, grade);

        tracing::info!(
            profile_id = %profile_id,
            handle = %ctx.profile.handle,
            composite,
            grade = %grade,
            "profile score computed"
        );

        Ok(ProfileScoreReport {
            profile_id,
            handle: ctx.profile.handle.clone(),
            computed_at: ctx.now,
            composite,
            grade,
            weekly_delta: aggregate::weekly_delta(),
            categories,
            summary,
        })
    }

    /// Compute a single category, for partial or diagnostic use.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ScoringEngine::compute_profile_score`].
    pub async fn compute_category(
        &self,
        profile_id: Uuid,
        category: Category,
    ) -> Result<CategoryScore, EngineError> {
        let ctx = self.load_context(profile_id).await?;
        Ok(self.score_category(&ctx, category).await)
    }

    async fn score_category(&self, ctx: &ScoringContext, category: Category) -> CategoryScore {
        match category {
            Category::AudienceQuality => audience::score(ctx, &self.policy),
            Category::ContentRelevance => relevance::score(ctx, &self.gate, &self.policy).await,
            Category::ContentQuality => quality::score(ctx, &self.gate).await,
            Category::EngagementStrength => engagement::score(ctx, &self.policy),
            Category::GrowthMomentum => growth::score(ctx, &self.policy),
            Category::Monetisation => monetisation::score(ctx, &self.gate).await,
        }
    }

    async fn load_context(&self, profile_id: Uuid) -> Result<ScoringContext, EngineError> {
        let profile = self
            .stores
            .profiles
            .get(profile_id)
            .await?
            .ok_or(EngineError::ProfileNotFound(profile_id))?;

        let reader = SignalReader::new(
            &self.stores,
            self.policy.media_sample_limit,
            self.policy.insight_window_days,
            self.policy.growth_window_days,
            self.policy.demographic_history_limit,
        );
        Ok(reader.load(profile, Utc::now()).await?)
    }
}
