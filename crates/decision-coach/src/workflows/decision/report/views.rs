use super::super::allocation::Allocation;
use super::super::budget::BudgetSplit;
use super::super::heart_check::Verdict;
use super::super::scoring::ScoredOption;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeartCheckView {
    #[serde(flatten)]
    pub verdict: Verdict,
    pub label: &'static str,
    pub summary: String,
}

impl HeartCheckView {
    pub fn from_verdict(verdict: Verdict) -> Self {
        Self {
            label: verdict.label(),
            summary: verdict.summary(),
            verdict,
        }
    }
}

/// Speed bump: the date this decision should be looked at again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewWindow {
    pub review_on: NaiveDate,
    /// True while the review date is still ahead of the evaluation date.
    pub pending: bool,
}

/// Short, structured recommendation the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSummary {
    pub give: f64,
    pub save: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buy_now: Vec<String>,
    pub spent_now: f64,
    /// Wants budget left untouched because nothing fit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unassigned_wants: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub backlog: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revisit_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    HeartMisaligned,
    NothingFits,
    NoBacklog,
    ReviewScheduled,
}

impl Advisory {
    pub const fn message(self) -> &'static str {
        match self {
            Self::HeartMisaligned => {
                "One or more heart checks are not aligned. That doesn't mean never, but it might mean not right now, or rethink the why."
            }
            Self::NothingFits => {
                "Based on your budget and scores, nothing clearly fits right now. That might be a nudge to save this round."
            }
            Self::NoBacklog => {
                "No backlog: everything you listed fits within this amount and your priorities."
            }
            Self::ReviewScheduled => {
                "You planned to re-check this decision on the review date before acting on the backlog."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionReport {
    pub decision_name: String,
    pub evaluated_on: NaiveDate,
    pub split: BudgetSplit,
    pub scored_options: Vec<ScoredOption>,
    pub allocation: Allocation,
    pub remaining_wants_budget: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_check: Option<HeartCheckView>,
    pub review: ReviewWindow,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub advisories: Vec<Advisory>,
    pub summary: RecommendationSummary,
}
