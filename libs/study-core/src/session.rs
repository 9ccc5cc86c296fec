//! Quiz session state: the loaded questions, the user's picks, and scoring.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::QuizQuestion;

/// Outcome of recording a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "previous")]
pub enum Selection {
    /// First answer for this question.
    Recorded,
    /// Replaced an earlier answer.
    Replaced(char),
    /// No loaded question has this number; nothing was recorded.
    UnknownQuestion,
}

impl Selection {
    pub fn is_recorded(&self) -> bool {
        !matches!(self, Self::UnknownQuestion)
    }
}

/// Per-question feedback after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub is_correct: bool,
    pub selected: Option<char>,
    pub correct_answer: Option<char>,
    pub explanation: String,
}

/// Score of a submitted quiz.
///
/// The default value (all zeros, no results) is what submitting an empty
/// session returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score_percent: u32,
    pub correct_count: u32,
    pub total: u32,
    pub results: BTreeMap<u32, QuestionResult>,
}

impl QuizResult {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Questions of the active quiz and the answers picked so far.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: BTreeMap<u32, char>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a freshly generated quiz, discarding the previous one and all
    /// of its answers.
    pub fn start(&mut self, questions: Vec<QuizQuestion>) {
        self.questions = questions;
        self.answers.clear();
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn question(&self, number: u32) -> Option<&QuizQuestion> {
        self.questions.iter().find(|q| q.number == number)
    }

    pub fn answers(&self) -> &BTreeMap<u32, char> {
        &self.answers
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Record or overwrite the answer for a question.
    ///
    /// The letter is not checked against the question's options; a letter
    /// the question does not offer simply never scores.
    pub fn select(&mut self, question_number: u32, letter: char) -> Selection {
        if self.question(question_number).is_none() {
            return Selection::UnknownQuestion;
        }
        match self.answers.insert(question_number, letter) {
            Some(previous) => Selection::Replaced(previous),
            None => Selection::Recorded,
        }
    }

    /// Score the current answers.
    ///
    /// Returns the empty result when no quiz is loaded. Calling it again
    /// after further selections scores the new answers.
    pub fn submit(&self) -> QuizResult {
        if self.questions.is_empty() {
            return QuizResult::default();
        }

        let mut results = BTreeMap::new();
        let mut correct_count = 0;

        for question in &self.questions {
            let selected = self.answers.get(&question.number).copied();
            let is_correct = selected.is_some() && selected == question.correct_answer;
            if is_correct {
                correct_count += 1;
            }
            results.insert(
                question.number,
                QuestionResult {
                    is_correct,
                    selected,
                    correct_answer: question.correct_answer,
                    explanation: question.explanation.clone(),
                },
            );
        }

        let total = self.questions.len() as u32;
        QuizResult {
            score_percent: percent_rounded(correct_count, total),
            correct_count,
            total,
            results,
        }
    }
}

/// `100 * correct / total`, rounded half up.
fn percent_rounded(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (200 * correct + total) / (2 * total)
}
