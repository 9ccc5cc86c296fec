//! Core types for the study assistant.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StudyError};

/// Letters a multiple-choice option may carry.
pub const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Parse a user-supplied option letter (`"b"`, `" C "`, ...).
pub fn parse_letter(value: &str) -> Result<char> {
    let mut chars = value.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if OPTION_LETTERS.contains(&c.to_ascii_uppercase()) => {
            Ok(c.to_ascii_uppercase())
        }
        _ => Err(StudyError::InvalidLetter(value.to_string())),
    }
}

/// One answer choice of a quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub letter: char,
    pub text: String,
}

/// Question parsed from a quiz transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// 1-based ordinal assigned by parse order, not read from the text.
    pub number: u32,
    pub text: String,
    pub options: Vec<QuizOption>,
    /// `None` when the transcript never named a usable letter.
    pub correct_answer: Option<char>,
    pub explanation: String,
}

impl QuizQuestion {
    /// Create an empty question with the given ordinal and prompt.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
            options: Vec::new(),
            correct_answer: None,
            explanation: String::new(),
        }
    }

    /// Look up an option by letter.
    pub fn option(&self, letter: char) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.letter == letter)
    }
}

/// Front/back pair parsed from a flashcard transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    /// Empty when the segment had no `BACK:` marker.
    pub back: String,
}

/// Outline hierarchy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicLevel {
    Main,
    Sub,
}

/// Diagram rendering requested for an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagramMode {
    /// Hierarchical mind map.
    Tree,
    /// Directed flow graph.
    Flow,
}

impl Default for DiagramMode {
    fn default() -> Self {
        Self::Tree
    }
}

impl DiagramMode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Flow => "flow",
        }
    }
}

impl FromStr for DiagramMode {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tree" | "mindmap" => Ok(Self::Tree),
            "flow" | "flowchart" | "graph" => Ok(Self::Flow),
            _ => Err(StudyError::UnknownDiagramMode(s.to_string())),
        }
    }
}
