use super::super::domain::Dimension;
use super::config::HeartCheckConfig;
use super::rules::DecisionScoreSet;
use serde::{Deserialize, Serialize};

/// Coarse recommendation produced by the heart check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// A gate answered "No"; likely not, reconsider the why.
    Reject { failed_gates: Vec<Dimension> },
    /// Mostly yes across every axis.
    Accept,
    /// Not a no, but not clear enough yet; wait and refine.
    Refine,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Reject { .. } => "Likely no / reconsider",
            Verdict::Accept => "Strong yes",
            Verdict::Refine => "Wait / refine",
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Verdict::Reject { failed_gates } => {
                let gates: Vec<&str> = failed_gates.iter().map(|gate| gate.label()).collect();
                format!("likely no, reconsider: failed {}", gates.join(", "))
            }
            Verdict::Accept => {
                "strong yes: heart and numbers line up, proceed with the plan".to_string()
            }
            Verdict::Refine => {
                "wait and refine: not a no, but give it time until the answers are clearer"
                    .to_string()
            }
        }
    }
}

pub(crate) fn decide_verdict(config: &HeartCheckConfig, scores: &DecisionScoreSet) -> Verdict {
    let failed_gates: Vec<Dimension> = config
        .gates
        .iter()
        .copied()
        .filter(|gate| scores.weight(*gate) == Some(0.0))
        .collect();

    if !failed_gates.is_empty() {
        return Verdict::Reject { failed_gates };
    }

    if scores.total() >= config.accept_threshold {
        Verdict::Accept
    } else {
        Verdict::Refine
    }
}
