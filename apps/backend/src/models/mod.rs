//! API request and response types

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from study-core
pub use study_core::{
    DiagramMode, DiagramSource, Flashcard, Paragraph, QuizOption, QuizQuestion, QuizResult,
};

// === Answers ===

#[derive(Debug, Serialize, Deserialize)]
pub struct FormatAnswerRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormatAnswerResponse {
    pub html: String,
    pub paragraphs: Vec<Paragraph>,
}

// === Quiz ===

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateQuizRequest {
    pub transcript: String,
}

/// A question as shown before submission (no answer, no explanation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    pub number: u32,
    pub text: String,
    pub options: Vec<QuizOption>,
}

impl From<&QuizQuestion> for QuestionView {
    fn from(question: &QuizQuestion) -> Self {
        Self {
            number: question.number,
            text: question.text.clone(),
            options: question.options.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizView {
    pub quiz_id: Uuid,
    pub questions: Vec<QuestionView>,
    pub answers: BTreeMap<u32, char>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SelectAnswerRequest {
    pub question_number: u32,
    pub letter: String,
    #[serde(default)]
    pub quiz_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SelectAnswerResponse {
    pub recorded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<char>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SubmitQuizRequest {
    #[serde(default)]
    pub quiz_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitQuizResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_id: Option<Uuid>,
    #[serde(flatten)]
    pub result: QuizResult,
}

// === Flashcards ===

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateFlashcardsRequest {
    pub transcript: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FlashcardsResponse {
    pub total: usize,
    pub cards: Vec<Flashcard>,
}

// === Outline ===

#[derive(Debug, Serialize, Deserialize)]
pub struct OutlineDiagramRequest {
    pub outline: String,
    /// `tree`/`mindmap` or `flow`/`flowchart`; defaults to tree.
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OutlineDiagramResponse {
    pub diagram: DiagramSource,
    pub mermaid: String,
}

// === Progress ===

/// Activity counters for the running service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub answers_formatted: u32,
    pub quizzes_generated: u32,
    pub quizzes_submitted: u32,
    pub flashcard_decks_generated: u32,
    pub outlines_generated: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity_at: Option<DateTime<Utc>>,
}
