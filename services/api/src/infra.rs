use chrono::NaiveDate;
use decision_coach::workflows::decision::{Answer, Bucket, OptionRecord};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Starter table shown before the user edits anything.
pub(crate) fn default_wardrobe_options() -> Vec<OptionRecord> {
    vec![
        OptionRecord::new("Suit Supply Suit", 800.0, 9.0, 9.0, "Fashion"),
        OptionRecord::new("Suit Supply Jeans", 250.0, 8.0, 8.0, "Fashion"),
        OptionRecord::new("Uniqlo Wardrobe Refresh", 250.0, 7.0, 7.0, "Fashion"),
    ]
}

pub(crate) fn default_buckets() -> Vec<Bucket> {
    vec![
        Bucket::new("Giving", Some(10.0)),
        Bucket::new("Saving / Investing", Some(20.0)),
        Bucket::new("Wants", Some(50.0)),
    ]
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_answer(raw: &str) -> Result<Answer, String> {
    Answer::parse(raw).ok_or_else(|| format!("'{raw}' is not one of Yes, Unsure, No"))
}

/// `LABEL=PERCENT`; an empty percent (or `-`) leaves the bucket out of this run.
pub(crate) fn parse_bucket(raw: &str) -> Result<Bucket, String> {
    let (label, percent) = raw
        .split_once('=')
        .ok_or_else(|| format!("'{raw}' must look like LABEL=PERCENT"))?;

    let label = label.trim();
    if label.is_empty() {
        return Err(format!("'{raw}' is missing a bucket label"));
    }

    let percent = percent.trim();
    let raw_percent = if percent.is_empty() || percent == "-" {
        None
    } else {
        let value = percent
            .trim_end_matches('%')
            .parse::<f64>()
            .map_err(|err| format!("'{percent}' is not a percentage ({err})"))?;
        Some(value)
    };

    Ok(Bucket::new(label, raw_percent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bucket_pairs() {
        let bucket = parse_bucket(" Giving = 10% ").expect("bucket parses");
        assert_eq!(bucket, Bucket::new("Giving", Some(10.0)));

        let skipped = parse_bucket("Travel=-").expect("bucket parses");
        assert_eq!(skipped.raw_percent, None);

        assert!(parse_bucket("NoPercent").is_err());
        assert!(parse_bucket("=10").is_err());
        assert!(parse_bucket("Wants=lots").is_err());
    }

    #[test]
    fn parses_answers_loosely() {
        assert_eq!(parse_answer("yes"), Ok(Answer::Yes));
        assert_eq!(parse_answer(" Unsure "), Ok(Answer::Unsure));
        assert!(parse_answer("perhaps").is_err());
    }

    #[test]
    fn default_buckets_do_not_sum_to_100() {
        let total: f64 = default_buckets()
            .iter()
            .filter_map(|bucket| bucket.raw_percent)
            .sum();
        assert_eq!(total, 80.0);
    }
}
