use super::super::allocation::Allocation;
use super::super::budget::BudgetSplit;
use super::super::domain::HeartCheckAnswers;
use super::views::{Advisory, RecommendationSummary, ReviewWindow};

pub(crate) fn build_summary(
    split: &BudgetSplit,
    allocation: &Allocation,
    review: &ReviewWindow,
) -> RecommendationSummary {
    let buy_now: Vec<String> = allocation
        .fund_now
        .iter()
        .map(|row| row.option.name.clone())
        .collect();

    let remaining = allocation.remaining();
    let unassigned_wants = if buy_now.is_empty() && remaining > 0.0 {
        Some(remaining)
    } else {
        None
    };

    let backlog: Vec<String> = allocation
        .backlog()
        .into_iter()
        .map(|row| row.option.name.clone())
        .collect();
    let revisit_on = if backlog.is_empty() {
        None
    } else {
        Some(review.review_on)
    };

    RecommendationSummary {
        give: split.giving_amount,
        save: split.saving_amount,
        buy_now,
        spent_now: allocation.spent,
        unassigned_wants,
        backlog,
        revisit_on,
    }
}

pub(crate) fn advisories(
    allocation: &Allocation,
    answers: Option<&HeartCheckAnswers>,
    review: &ReviewWindow,
) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if answers.is_some_and(HeartCheckAnswers::heart_misaligned) {
        advisories.push(Advisory::HeartMisaligned);
    }

    if allocation.fund_now.is_empty() {
        advisories.push(Advisory::NothingFits);
    }

    if allocation.backlog().is_empty() {
        advisories.push(Advisory::NoBacklog);
    } else if review.pending {
        advisories.push(Advisory::ReviewScheduled);
    }

    advisories
}
