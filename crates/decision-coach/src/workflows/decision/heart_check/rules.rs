use super::super::domain::{Dimension, HeartCheckAnswers};
use serde::Serialize;
use std::collections::BTreeMap;

/// Weight per dimension for one set of answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionScoreSet {
    weights: BTreeMap<Dimension, f32>,
}

impl DecisionScoreSet {
    pub fn weight(&self, dimension: Dimension) -> Option<f32> {
        self.weights.get(&dimension).copied()
    }

    pub fn total(&self) -> f32 {
        self.weights.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f32)> + '_ {
        self.weights
            .iter()
            .map(|(dimension, weight)| (*dimension, *weight))
    }
}

pub(crate) fn score_answers(answers: &HeartCheckAnswers) -> DecisionScoreSet {
    let weights = answers
        .iter()
        .map(|(dimension, answer)| (dimension, answer.weight()))
        .collect();

    DecisionScoreSet { weights }
}
