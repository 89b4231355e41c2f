//! State for the career quiz page.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use std::collections::HashMap;

use crate::net::types::{QuizAnswer, QuizQuestion, QuizResult};

/// Quiz page state: generated questions, selections, and the graded result.
#[derive(Clone, Debug, Default)]
pub struct QuizState {
    pub questions: Vec<QuizQuestion>,
    pub selections: HashMap<String, usize>,
    pub result: Option<QuizResult>,
}

impl QuizState {
    /// Replace the question set and drop stale selections and results.
    pub fn start(&mut self, questions: Vec<QuizQuestion>) {
        self.questions = questions;
        self.selections.clear();
        self.result = None;
    }

    /// Record the selected option for a question. Selecting again overwrites.
    pub fn select(&mut self, question_id: &str, option: usize) {
        self.selections.insert(question_id.to_owned(), option);
    }

    /// Whether every question has a recorded selection.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.questions.is_empty()
            && self.questions.iter().all(|q| self.selections.contains_key(&q.id))
    }

    /// Selections in question order, ready for submission.
    #[must_use]
    pub fn to_answers(&self) -> Vec<QuizAnswer> {
        self.questions
            .iter()
            .filter_map(|q| {
                self.selections.get(&q.id).map(|&selected| QuizAnswer {
                    question_id: q.id.clone(),
                    selected,
                })
            })
            .collect()
    }
}
