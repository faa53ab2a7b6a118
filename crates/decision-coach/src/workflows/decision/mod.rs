//! Decision coach workflow: score candidate options, reserve giving and saving,
//! fund the best options within the wants budget, normalize bucket plans, and
//! classify the heart check.

pub mod allocation;
pub mod budget;
pub mod buckets;
pub mod coach;
pub mod domain;
pub mod heart_check;
pub mod report;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use allocation::{allocate, AllocatedOption, Allocation, AllocationDecision};
pub use budget::{BudgetError, BudgetSplit};
pub use buckets::{normalize_buckets, Bucket, BucketError, BucketPlan, PlannedBucket};
pub use coach::{BucketPlanRequest, DecisionCoach, DecisionError, DecisionRequest};
pub use domain::{Answer, CellValue, Dimension, HeartCheckAnswers, OptionRecord};
pub use heart_check::{DecisionScoreSet, HeartCheckConfig, HeartCheckEngine, Verdict};
pub use report::{Advisory, DecisionReport, HeartCheckView, RecommendationSummary, ReviewWindow};
pub use router::decision_router;
pub use scoring::{score_options, ScoredOption};
