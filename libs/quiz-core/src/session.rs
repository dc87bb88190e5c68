//! Study session state for a single quiz run.
//!
//! The session is a plain value; every user action produces the next session through
//! [`Session::apply`]. Nothing here is persisted.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::types::Question;

/// Something the learner did on the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "letter", rename_all = "snake_case")]
pub enum Action {
    Select(char),
    Next,
    Previous,
    Reset,
}

/// Progress through a quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Index into the question list.
    pub current: usize,
    /// Letters picked on the current card, in selection order.
    pub selected: Vec<char>,
    /// Question id -> whether it was answered correctly.
    pub answered: BTreeMap<u32, bool>,
}

/// Running score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub answered: usize,
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_question<'a>(&self, questions: &'a [Question]) -> Option<&'a Question> {
        questions.get(self.current)
    }

    /// Whether enough letters have been picked on the current card.
    pub fn is_answered(&self, questions: &[Question]) -> bool {
        self.current_question(questions)
            .is_some_and(|q| self.selected.len() >= q.required_selections())
    }

    /// Whether the current selection matches the answer, regardless of order.
    pub fn is_correct(&self, questions: &[Question]) -> bool {
        self.current_question(questions)
            .is_some_and(|q| selection_matches(&self.selected, q))
    }

    /// Apply an action and return the resulting session.
    pub fn apply(mut self, action: Action, questions: &[Question]) -> Self {
        match action {
            Action::Select(letter) => self.select(letter, questions),
            Action::Next => {
                if self.current + 1 < questions.len() {
                    self.current += 1;
                    self.selected.clear();
                }
            }
            Action::Previous => {
                if self.current > 0 {
                    self.current -= 1;
                    self.selected.clear();
                }
            }
            Action::Reset => self.selected.clear(),
        }
        self
    }

    fn select(&mut self, letter: char, questions: &[Question]) {
        let Some(question) = self.current_question(questions) else {
            return;
        };
        let letter = letter.to_ascii_uppercase();
        if self.is_answered(questions) || !question.has_option(letter) {
            return;
        }

        if question.multiple_answers {
            if let Some(pos) = self.selected.iter().position(|&l| l == letter) {
                self.selected.remove(pos);
            } else {
                self.selected.push(letter);
            }
        } else {
            self.selected = vec![letter];
        }

        if self.selected.len() == question.required_selections() {
            let correct = selection_matches(&self.selected, question);
            self.answered.insert(question.id, correct);
        }
    }

    /// Score so far against `total` questions.
    pub fn stats(&self, total: usize) -> SessionStats {
        let answered = self.answered.len();
        let correct = self.answered.values().filter(|&&ok| ok).count();
        let percentage = (correct as f64 / answered.max(1) as f64 * 100.0).round() as u32;

        SessionStats {
            answered,
            correct,
            total,
            percentage,
        }
    }
}

fn selection_matches(selected: &[char], question: &Question) -> bool {
    let picked: BTreeSet<char> = selected.iter().copied().collect();
    let expected: BTreeSet<char> = question.answer_letters().collect();
    !picked.is_empty() && picked == expected
}
