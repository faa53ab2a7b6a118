use super::domain::OptionRecord;
use serde::{Deserialize, Serialize};

/// Option row with coerced numbers and its composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredOption {
    pub name: String,
    pub cost: f64,
    pub value_score: f64,
    pub joy: f64,
    pub category: String,
    pub score: f64,
}

impl ScoredOption {
    pub fn from_record(record: &OptionRecord) -> Self {
        let cost = record.cost.coerce();
        let value_score = record.value_score.coerce();
        let joy = record.joy.coerce();

        Self {
            name: record.name.trim().to_string(),
            cost,
            value_score,
            joy,
            category: record.category.trim().to_string(),
            score: composite_score(cost, value_score, joy),
        }
    }
}

/// Value per dollar scaled by joy; `0.0` whenever the ratio is undefined.
pub fn composite_score(cost: f64, value_score: f64, joy: f64) -> f64 {
    if cost == 0.0 {
        return 0.0;
    }

    let score = (value_score / cost) * joy;
    if score.is_finite() {
        score
    } else {
        0.0
    }
}

/// Score every record in input order. Malformed cells degrade to a zero score.
pub fn score_options(records: &[OptionRecord]) -> Vec<ScoredOption> {
    records.iter().map(ScoredOption::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::decision::domain::CellValue;

    #[test]
    fn zero_cost_scores_zero() {
        assert_eq!(composite_score(0.0, 9.0, 9.0), 0.0);
        assert_eq!(composite_score(-0.0, 9.0, 9.0), 0.0);
    }

    #[test]
    fn score_is_value_per_dollar_times_joy() {
        let score = composite_score(250.0, 8.0, 8.0);
        assert!((score - 0.256).abs() < 1e-12);
    }

    #[test]
    fn non_numeric_cells_degrade_to_zero_score() {
        let records = vec![
            OptionRecord {
                name: "Mystery".to_string(),
                cost: CellValue::Text("n/a".to_string()),
                value_score: CellValue::Number(5.0),
                joy: CellValue::Number(5.0),
                category: String::new(),
            },
            OptionRecord {
                name: "No joy recorded".to_string(),
                cost: CellValue::Number(40.0),
                value_score: CellValue::Number(5.0),
                joy: CellValue::Missing,
                category: String::new(),
            },
        ];

        let scored = score_options(&records);

        assert_eq!(scored[0].cost, 0.0);
        assert_eq!(scored[0].score, 0.0);
        assert_eq!(scored[1].joy, 0.0);
        assert_eq!(scored[1].score, 0.0);
    }

    #[test]
    fn scoring_preserves_input_order() {
        let records = vec![
            OptionRecord::new("Low", 100.0, 1.0, 1.0, "Misc"),
            OptionRecord::new("High", 10.0, 9.0, 9.0, "Misc"),
        ];

        let names: Vec<_> = score_options(&records)
            .into_iter()
            .map(|option| option.name)
            .collect();

        assert_eq!(names, vec!["Low".to_string(), "High".to_string()]);
    }
}
