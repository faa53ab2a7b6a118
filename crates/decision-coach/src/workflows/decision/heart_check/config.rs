use super::super::domain::Dimension;
use serde::{Deserialize, Serialize};

/// Thresholds and gates applied by the heart-check classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartCheckConfig {
    /// Minimum total weight for a clear yes.
    pub accept_threshold: f32,
    /// Dimensions where a plain "No" rejects the decision outright.
    pub gates: Vec<Dimension>,
}

impl Default for HeartCheckConfig {
    fn default() -> Self {
        Self {
            accept_threshold: 3.5,
            gates: vec![Dimension::GodAuthored, Dimension::FinancialSense],
        }
    }
}
