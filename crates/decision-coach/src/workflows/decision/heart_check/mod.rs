//! Qualitative heart check: Yes/Unsure/No answers become a three-way verdict.

mod config;
mod policy;
mod rules;

pub use config::HeartCheckConfig;
pub use policy::Verdict;
pub use rules::DecisionScoreSet;

use super::domain::HeartCheckAnswers;
use policy::decide_verdict;
use tracing::debug;

/// Stateless classifier applying the configured gates and threshold.
#[derive(Debug, Clone, Default)]
pub struct HeartCheckEngine {
    config: HeartCheckConfig,
}

impl HeartCheckEngine {
    pub fn new(config: HeartCheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HeartCheckConfig {
        &self.config
    }

    pub fn scores(&self, answers: &HeartCheckAnswers) -> DecisionScoreSet {
        rules::score_answers(answers)
    }

    pub fn classify(&self, answers: &HeartCheckAnswers) -> Verdict {
        let scores = rules::score_answers(answers);
        let verdict = decide_verdict(&self.config, &scores);
        debug!(total = scores.total(), verdict = verdict.label(), "heart check classified");
        verdict
    }
}
