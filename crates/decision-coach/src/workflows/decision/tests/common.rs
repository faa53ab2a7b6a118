use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::decision::domain::{Answer, HeartCheckAnswers, OptionRecord};
use crate::workflows::decision::{decision_router, DecisionCoach, DecisionRequest};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 14).expect("valid date")
}

/// The wardrobe choices a birthday gift might be weighed against.
pub(super) fn wardrobe_options() -> Vec<OptionRecord> {
    vec![
        OptionRecord::new("Suit Supply Suit", 800.0, 9.0, 9.0, "Fashion"),
        OptionRecord::new("Suit Supply Jeans", 250.0, 8.0, 8.0, "Fashion"),
        OptionRecord::new("Uniqlo Wardrobe Refresh", 250.0, 7.0, 7.0, "Fashion"),
    ]
}

pub(super) fn affordable_options() -> Vec<OptionRecord> {
    vec![
        OptionRecord::new("Running shoes", 120.0, 8.0, 7.0, "Health"),
        OptionRecord::new("Concert tickets", 90.0, 3.0, 9.0, "Experiences"),
        OptionRecord::new("Cookbook", 30.0, 6.0, 5.0, "Home"),
        OptionRecord::new("Free museum day", 0.0, 5.0, 6.0, "Experiences"),
    ]
}

pub(super) fn request(options: Vec<OptionRecord>) -> DecisionRequest {
    DecisionRequest {
        decision_name: "Birthday gift".to_string(),
        available_amount: 250.0,
        giving_pct: 10.0,
        saving_pct: 10.0,
        review_on: None,
        options,
        heart_check: None,
    }
}

pub(super) fn coach() -> DecisionCoach {
    DecisionCoach::default()
}

pub(super) fn answers(
    god_authored: Answer,
    want: Answer,
    future_good: Answer,
    financial_sense: Answer,
) -> HeartCheckAnswers {
    HeartCheckAnswers {
        god_authored,
        want,
        future_good,
        financial_sense,
    }
}

pub(super) const ALL_ANSWERS: [Answer; 3] = [Answer::Yes, Answer::Unsure, Answer::No];

/// Every combination of the four heart-check answers.
pub(super) fn every_answer_set() -> Vec<HeartCheckAnswers> {
    let mut sets = Vec::new();
    for god_authored in ALL_ANSWERS {
        for want in ALL_ANSWERS {
            for future_good in ALL_ANSWERS {
                for financial_sense in ALL_ANSWERS {
                    sets.push(answers(god_authored, want, future_good, financial_sense));
                }
            }
        }
    }
    sets
}

pub(super) fn router() -> axum::Router {
    decision_router(Arc::new(coach()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
