use serde::{Deserialize, Serialize};

/// Giving and saving are reserved first; whatever is left funds wants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetSplit {
    pub total: f64,
    pub giving_pct: f64,
    pub saving_pct: f64,
    pub giving_amount: f64,
    pub saving_amount: f64,
    pub wants_budget: f64,
}

impl BudgetSplit {
    pub fn compute(total: f64, giving_pct: f64, saving_pct: f64) -> Result<Self, BudgetError> {
        if !total.is_finite() || total <= 0.0 {
            return Err(BudgetError::NonPositiveAmount { amount: total });
        }
        check_percent("giving", giving_pct)?;
        check_percent("saving", saving_pct)?;

        let giving_amount = total * giving_pct / 100.0;
        let saving_amount = total * saving_pct / 100.0;
        let wants_budget = (total - giving_amount - saving_amount).max(0.0);

        Ok(Self {
            total,
            giving_pct,
            saving_pct,
            giving_amount,
            saving_amount,
            wants_budget,
        })
    }
}

fn check_percent(field: &'static str, value: f64) -> Result<(), BudgetError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(BudgetError::PercentOutOfRange { field, value })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BudgetError {
    #[error("Available amount must be greater than 0 (got {amount})")]
    NonPositiveAmount { amount: f64 },
    #[error("{field} percentage must be between 0 and 100 (got {value})")]
    PercentOutOfRange { field: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserves_giving_and_saving_before_wants() {
        let split = BudgetSplit::compute(250.0, 10.0, 10.0).expect("valid split");
        assert_eq!(split.giving_amount, 25.0);
        assert_eq!(split.saving_amount, 25.0);
        assert_eq!(split.wants_budget, 200.0);
    }

    #[test]
    fn wants_budget_is_floored_at_zero() {
        let split = BudgetSplit::compute(100.0, 70.0, 60.0).expect("valid split");
        assert_eq!(split.wants_budget, 0.0);
    }

    #[test]
    fn rejects_non_positive_totals() {
        assert_eq!(
            BudgetSplit::compute(0.0, 10.0, 10.0),
            Err(BudgetError::NonPositiveAmount { amount: 0.0 })
        );
        assert!(BudgetSplit::compute(-5.0, 10.0, 10.0).is_err());
        assert!(BudgetSplit::compute(f64::NAN, 10.0, 10.0).is_err());
    }

    #[test]
    fn rejects_percentages_outside_range() {
        match BudgetSplit::compute(100.0, 120.0, 0.0) {
            Err(BudgetError::PercentOutOfRange { field, value }) => {
                assert_eq!(field, "giving");
                assert_eq!(value, 120.0);
            }
            other => panic!("expected percent error, got {other:?}"),
        }
        assert!(BudgetSplit::compute(100.0, 0.0, -1.0).is_err());
    }
}
