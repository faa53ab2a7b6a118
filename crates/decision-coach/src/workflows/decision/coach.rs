use super::allocation::allocate;
use super::budget::{BudgetError, BudgetSplit};
use super::buckets::{normalize_buckets, Bucket, BucketError, BucketPlan};
use super::domain::{HeartCheckAnswers, OptionRecord};
use super::heart_check::{HeartCheckConfig, HeartCheckEngine};
use super::report::{advisories, build_summary, DecisionReport, HeartCheckView, ReviewWindow};
use super::scoring::score_options;
use crate::config::CoachConfig;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Everything the user entered for one "evaluate" action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRequest {
    #[serde(default)]
    pub decision_name: String,
    pub available_amount: f64,
    #[serde(default = "default_reserve_pct")]
    pub giving_pct: f64,
    #[serde(default = "default_reserve_pct")]
    pub saving_pct: f64,
    #[serde(default)]
    pub review_on: Option<NaiveDate>,
    #[serde(default)]
    pub options: Vec<OptionRecord>,
    #[serde(default)]
    pub heart_check: Option<HeartCheckAnswers>,
}

fn default_reserve_pct() -> f64 {
    10.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketPlanRequest {
    pub amount: f64,
    pub buckets: Vec<Bucket>,
}

/// Validation failures reported back to the user; nothing here is fatal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecisionError {
    #[error("add at least one named option to evaluate")]
    NoOptions,
    #[error(transparent)]
    Budget(#[from] BudgetError),
    #[error(transparent)]
    Buckets(#[from] BucketError),
}

/// Stateless service tying the scorer, allocator, normalizer, and heart check together.
#[derive(Debug, Clone)]
pub struct DecisionCoach {
    heart_check: HeartCheckEngine,
    review_delay: Duration,
}

impl Default for DecisionCoach {
    fn default() -> Self {
        Self::from_config(&CoachConfig::default())
    }
}

impl DecisionCoach {
    pub fn new(heart_check: HeartCheckConfig, review_delay_days: u32) -> Self {
        Self {
            heart_check: HeartCheckEngine::new(heart_check),
            review_delay: Duration::days(i64::from(review_delay_days)),
        }
    }

    pub fn from_config(config: &CoachConfig) -> Self {
        let heart_check = HeartCheckConfig {
            accept_threshold: config.accept_threshold,
            ..HeartCheckConfig::default()
        };
        Self::new(heart_check, config.review_delay_days)
    }

    pub fn heart_check_engine(&self) -> &HeartCheckEngine {
        &self.heart_check
    }

    /// Default review date for a decision evaluated on `today`.
    pub fn default_review_on(&self, today: NaiveDate) -> NaiveDate {
        today.checked_add_signed(self.review_delay).unwrap_or(today)
    }

    pub fn evaluate(
        &self,
        request: DecisionRequest,
        today: NaiveDate,
    ) -> Result<DecisionReport, DecisionError> {
        let DecisionRequest {
            decision_name,
            available_amount,
            giving_pct,
            saving_pct,
            review_on,
            options,
            heart_check,
        } = request;

        let options: Vec<OptionRecord> = options
            .into_iter()
            .filter(|option| !option.is_blank())
            .collect();
        if options.is_empty() {
            warn!("evaluation requested without any named options");
            return Err(DecisionError::NoOptions);
        }

        let split = BudgetSplit::compute(available_amount, giving_pct, saving_pct)?;
        let scored_options = score_options(&options);
        let allocation = allocate(&scored_options, split.wants_budget);

        let review_on = review_on.unwrap_or_else(|| self.default_review_on(today));
        let review = ReviewWindow {
            review_on,
            pending: review_on > today,
        };

        let heart_check_view = heart_check
            .as_ref()
            .map(|answers| HeartCheckView::from_verdict(self.heart_check.classify(answers)));
        let summary = build_summary(&split, &allocation, &review);
        let advisories = advisories(&allocation, heart_check.as_ref(), &review);

        debug!(
            options = scored_options.len(),
            wants_budget = split.wants_budget,
            spent = allocation.spent,
            "decision evaluated"
        );

        Ok(DecisionReport {
            decision_name: decision_name.trim().to_string(),
            evaluated_on: today,
            remaining_wants_budget: allocation.remaining(),
            split,
            scored_options,
            allocation,
            heart_check: heart_check_view,
            review,
            advisories,
            summary,
        })
    }

    pub fn plan_buckets(&self, request: &BucketPlanRequest) -> Result<BucketPlan, DecisionError> {
        Ok(normalize_buckets(&request.buckets, request.amount)?)
    }

    pub fn check_heart(&self, answers: &HeartCheckAnswers) -> HeartCheckView {
        HeartCheckView::from_verdict(self.heart_check.classify(answers))
    }
}
