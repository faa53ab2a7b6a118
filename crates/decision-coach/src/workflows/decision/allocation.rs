//! Greedy wants allocation.
//!
//! Options are ranked by score and walked once. Each option is funded when it
//! still fits in the remaining wants budget and deferred otherwise. A rejected
//! option never blocks the ones ranked after it, so a cheaper lower-ranked
//! option can still be funded after an expensive one is deferred. The walk is
//! first-fit by rank and is not a globally optimal knapsack.

use super::scoring::ScoredOption;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of the allocation walk for a single option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationDecision {
    /// Zero or negative cost; never eligible for funding.
    Skip,
    FundNow,
    Defer,
}

impl AllocationDecision {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Skip => "Skip (no cost)",
            Self::FundNow => "Do Now",
            Self::Defer => "Backlog / Wait",
        }
    }
}

/// Scored option annotated with its place in the walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocatedOption {
    pub option: ScoredOption,
    /// Zero-based position in the score-descending walk.
    pub rank: usize,
    pub decision: AllocationDecision,
    /// Running total after this option was funded. Only set for `FundNow` rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_spent: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub wants_budget: f64,
    pub spent: f64,
    pub fund_now: Vec<AllocatedOption>,
    pub deferred: Vec<AllocatedOption>,
    pub skipped: Vec<AllocatedOption>,
}

impl Allocation {
    /// Wants budget left unassigned after funding.
    pub fn remaining(&self) -> f64 {
        self.wants_budget - self.spent
    }

    /// Every option in walk order, regardless of decision.
    pub fn ranked(&self) -> Vec<&AllocatedOption> {
        let mut rows: Vec<&AllocatedOption> = self
            .fund_now
            .iter()
            .chain(self.deferred.iter())
            .chain(self.skipped.iter())
            .collect();
        rows.sort_by_key(|row| row.rank);
        rows
    }

    /// Options not funded this round (deferred and skipped), in walk order.
    pub fn backlog(&self) -> Vec<&AllocatedOption> {
        self.ranked()
            .into_iter()
            .filter(|row| row.decision != AllocationDecision::FundNow)
            .collect()
    }
}

/// Stable ranking by score, highest first. Ties keep their input order.
/// Non-finite scores rank as 0 and -0.0 ties with 0.0.
pub fn rank_by_score(options: &[ScoredOption]) -> Vec<ScoredOption> {
    let mut ranked = options.to_vec();
    ranked.sort_by(|a, b| rank_key(b.score).total_cmp(&rank_key(a.score)));
    ranked
}

fn rank_key(score: f64) -> f64 {
    if score.is_finite() {
        // adding 0.0 folds -0.0 into 0.0
        score + 0.0
    } else {
        0.0
    }
}

/// Fill `wants_budget` with the highest-scoring options first.
pub fn allocate(options: &[ScoredOption], wants_budget: f64) -> Allocation {
    // f64::max discards NaN
    let ceiling = wants_budget.max(0.0);
    let mut allocation = Allocation {
        wants_budget: ceiling,
        ..Allocation::default()
    };

    for (rank, option) in rank_by_score(options).into_iter().enumerate() {
        let cost = option.cost;

        if cost <= 0.0 {
            allocation.skipped.push(AllocatedOption {
                option,
                rank,
                decision: AllocationDecision::Skip,
                cumulative_spent: None,
            });
            continue;
        }

        if allocation.spent + cost <= ceiling {
            allocation.spent += cost;
            allocation.fund_now.push(AllocatedOption {
                option,
                rank,
                decision: AllocationDecision::FundNow,
                cumulative_spent: Some(allocation.spent),
            });
        } else {
            allocation.deferred.push(AllocatedOption {
                option,
                rank,
                decision: AllocationDecision::Defer,
                cumulative_spent: None,
            });
        }
    }

    debug!(
        wants_budget = ceiling,
        spent = allocation.spent,
        funded = allocation.fund_now.len(),
        deferred = allocation.deferred.len(),
        skipped = allocation.skipped.len(),
        "wants allocation complete"
    );

    allocation
}
