use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Named share of a total. A `None` percent excludes the bucket from this run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    #[serde(default, alias = "rawPercent")]
    pub raw_percent: Option<f64>,
}

impl Bucket {
    pub fn new(label: impl Into<String>, raw_percent: Option<f64>) -> Self {
        Self {
            label: label.into(),
            raw_percent,
        }
    }

    fn active_percent(&self) -> Option<f64> {
        self.raw_percent.filter(|value| value.is_finite())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedBucket {
    pub label: String,
    pub raw_percent: f64,
    pub normalized_percent: f64,
    pub planned_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketPlan {
    pub amount: f64,
    pub raw_total: f64,
    pub rows: Vec<PlannedBucket>,
}

impl BucketPlan {
    /// Sum of the rounded planned amounts; may differ from `amount` by a few cents.
    pub fn planned_total(&self) -> f64 {
        self.rows.iter().map(|row| row.planned_amount).sum()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BucketError {
    #[error("bucket percentages must add up to a finite total above 0 (got {total_percent})")]
    DegenerateBuckets { total_percent: f64 },
    #[error("amount to plan must be 0 or more (got {amount})")]
    NegativeAmount { amount: f64 },
}

/// Spread `amount` across buckets in proportion to their raw percentages,
/// whether or not those percentages add up to 100.
pub fn normalize_buckets(buckets: &[Bucket], amount: f64) -> Result<BucketPlan, BucketError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(BucketError::NegativeAmount { amount });
    }

    let raw_total: f64 = buckets.iter().filter_map(Bucket::active_percent).sum();
    if !raw_total.is_finite() || raw_total <= 0.0 {
        warn!(raw_total, "rejecting bucket plan without a positive finite total");
        return Err(BucketError::DegenerateBuckets {
            total_percent: raw_total,
        });
    }

    let rows: Vec<PlannedBucket> = buckets
        .iter()
        .filter_map(|bucket| {
            bucket.active_percent().map(|raw_percent| {
                let normalized_percent = raw_percent / raw_total;
                PlannedBucket {
                    label: bucket.label.clone(),
                    raw_percent,
                    normalized_percent,
                    planned_amount: round_cents(amount * normalized_percent),
                }
            })
        })
        .collect();

    debug!(amount, raw_total, buckets = rows.len(), "bucket plan normalized");

    Ok(BucketPlan {
        amount,
        raw_total,
        rows,
    })
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
