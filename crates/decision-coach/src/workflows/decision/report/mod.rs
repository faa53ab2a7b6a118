mod summary;
pub mod views;

pub(crate) use summary::{advisories, build_summary};
pub use views::{Advisory, DecisionReport, HeartCheckView, RecommendationSummary, ReviewWindow};
