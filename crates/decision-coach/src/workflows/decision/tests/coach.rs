use super::common::*;
use crate::workflows::decision::domain::{Answer, HeartCheckAnswers, OptionRecord};
use crate::workflows::decision::{
    Advisory, AllocationDecision, Bucket, BucketError, BucketPlanRequest, BudgetError,
    DecisionError, Verdict,
};
use chrono::Duration;

#[test]
fn wardrobe_scenario_finds_nothing_that_fits() {
    let report = coach()
        .evaluate(request(wardrobe_options()), today())
        .expect("evaluation succeeds");

    assert_eq!(report.split.wants_budget, 200.0);

    let scores: Vec<f64> = report
        .scored_options
        .iter()
        .map(|option| option.score)
        .collect();
    assert!((scores[0] - 0.10125).abs() < 1e-9);
    assert!((scores[1] - 0.256).abs() < 1e-9);
    assert!((scores[2] - 0.196).abs() < 1e-9);

    assert!(report.allocation.fund_now.is_empty());
    assert_eq!(report.allocation.spent, 0.0);
    let deferred: Vec<&str> = report
        .allocation
        .deferred
        .iter()
        .map(|row| row.option.name.as_str())
        .collect();
    assert_eq!(
        deferred,
        vec![
            "Suit Supply Jeans",
            "Uniqlo Wardrobe Refresh",
            "Suit Supply Suit"
        ]
    );

    assert_eq!(report.summary.unassigned_wants, Some(200.0));
    assert_eq!(report.summary.give, 25.0);
    assert_eq!(report.summary.save, 25.0);
    assert!(report.advisories.contains(&Advisory::NothingFits));
}

#[test]
fn funds_best_options_within_wants_budget() {
    let report = coach()
        .evaluate(request(affordable_options()), today())
        .expect("evaluation succeeds");

    assert_eq!(
        report.summary.buy_now,
        vec!["Cookbook".to_string(), "Running shoes".to_string()]
    );
    assert_eq!(report.allocation.spent, 150.0);
    assert_eq!(report.remaining_wants_budget, 50.0);
    assert_eq!(
        report.allocation.fund_now[1].cumulative_spent,
        Some(150.0)
    );
    assert_eq!(report.allocation.deferred[0].option.name, "Concert tickets");
    assert_eq!(
        report.allocation.skipped[0].decision,
        AllocationDecision::Skip
    );

    assert_eq!(report.summary.unassigned_wants, None);
    assert_eq!(
        report.summary.backlog,
        vec!["Concert tickets".to_string(), "Free museum day".to_string()]
    );
    assert_eq!(report.summary.revisit_on, Some(today() + Duration::days(7)));
    assert_eq!(report.advisories, vec![Advisory::ReviewScheduled]);
}

#[test]
fn funded_costs_never_exceed_wants_budget() {
    for giving_pct in [0.0, 10.0, 35.0, 60.0, 100.0] {
        let mut request = request(affordable_options());
        request.giving_pct = giving_pct;
        request.saving_pct = 0.0;

        let report = coach()
            .evaluate(request, today())
            .expect("evaluation succeeds");
        let funded: f64 = report
            .allocation
            .fund_now
            .iter()
            .map(|row| row.option.cost)
            .sum();

        assert!(funded <= report.split.wants_budget);
        assert_eq!(funded, report.allocation.spent);
    }
}

#[test]
fn repeated_runs_produce_identical_reports() {
    let coach = coach();
    let first = coach
        .evaluate(request(affordable_options()), today())
        .expect("first run");
    let second = coach
        .evaluate(request(affordable_options()), today())
        .expect("second run");

    assert_eq!(first, second);
}

#[test]
fn blank_rows_are_dropped_before_scoring() {
    let mut options = affordable_options();
    options.push(OptionRecord::new("  ", 10.0, 10.0, 10.0, ""));

    let report = coach()
        .evaluate(request(options), today())
        .expect("evaluation succeeds");

    assert_eq!(report.scored_options.len(), 4);
}

#[test]
fn rejects_requests_without_named_options() {
    let options = vec![OptionRecord::new("", 10.0, 1.0, 1.0, "")];
    assert_eq!(
        coach().evaluate(request(options), today()),
        Err(DecisionError::NoOptions)
    );
}

#[test]
fn rejects_non_positive_available_amount() {
    let mut request = request(affordable_options());
    request.available_amount = 0.0;

    match coach().evaluate(request, today()) {
        Err(DecisionError::Budget(BudgetError::NonPositiveAmount { amount })) => {
            assert_eq!(amount, 0.0)
        }
        other => panic!("expected amount validation error, got {other:?}"),
    }
}

#[test]
fn explicit_review_date_in_the_past_is_not_pending() {
    let mut request = request(wardrobe_options());
    request.review_on = Some(today() - Duration::days(1));

    let report = coach()
        .evaluate(request, today())
        .expect("evaluation succeeds");

    assert!(!report.review.pending);
    assert!(!report.advisories.contains(&Advisory::ReviewScheduled));
}

#[test]
fn heart_check_verdict_and_misalignment_are_reported() {
    let mut request = request(affordable_options());
    request.heart_check = Some(answers(
        Answer::Yes,
        Answer::Yes,
        Answer::No,
        Answer::Yes,
    ));

    let report = coach()
        .evaluate(request, today())
        .expect("evaluation succeeds");

    let view = report.heart_check.expect("heart check present");
    assert_eq!(view.verdict, Verdict::Refine);
    assert_eq!(view.label, "Wait / refine");
    assert!(report.advisories.contains(&Advisory::HeartMisaligned));
}

#[test]
fn everything_fitting_leaves_no_backlog() {
    let mut request = request(vec![OptionRecord::new("Coffee", 5.0, 2.0, 8.0, "Treat")]);
    request.heart_check = Some(HeartCheckAnswers::uniform(Answer::Yes));

    let report = coach()
        .evaluate(request, today())
        .expect("evaluation succeeds");

    assert!(report.summary.backlog.is_empty());
    assert_eq!(report.summary.revisit_on, None);
    assert_eq!(report.advisories, vec![Advisory::NoBacklog]);
    assert_eq!(
        report.heart_check.map(|view| view.verdict),
        Some(Verdict::Accept)
    );
}

#[test]
fn bucket_plan_spreads_amount_over_percentages_summing_to_80() {
    let request = BucketPlanRequest {
        amount: 250.0,
        buckets: vec![
            Bucket::new("Giving", Some(10.0)),
            Bucket::new("Saving", Some(20.0)),
            Bucket::new("Wants", Some(50.0)),
            Bucket::new("Travel", None),
        ],
    };

    let plan = coach().plan_buckets(&request).expect("plan builds");

    for row in &plan.rows {
        let expected = 250.0 * (row.raw_percent / 80.0);
        assert!((row.planned_amount - expected).abs() <= 0.005);
    }
    assert!((plan.planned_total() - 250.0).abs() <= 0.01 * plan.rows.len() as f64);
    assert_eq!(plan.rows.len(), 3);
}

#[test]
fn bucket_plan_rejects_degenerate_percentages() {
    let request = BucketPlanRequest {
        amount: 250.0,
        buckets: vec![Bucket::new("Giving", Some(0.0)), Bucket::new("Wants", None)],
    };

    assert!(matches!(
        coach().plan_buckets(&request),
        Err(DecisionError::Buckets(BucketError::DegenerateBuckets { .. }))
    ));
}
