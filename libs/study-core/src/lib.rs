//! Core library of the study assistant.
//!
//! Turns free-form text produced by a generative model into structured,
//! renderable data:
//! - Answer formatting (bold spans, paragraphs, list blocks)
//! - Quiz transcript parser and the quiz session that scores it
//! - Flashcard transcript parser
//! - Outline to diagram conversion (tree / flow) with a Mermaid renderer
//!
//! Every parser is best-effort: malformed entries are skipped, never
//! reported as errors.

pub mod error;
pub mod flashcards;
pub mod format;
pub mod outline;
pub mod quiz;
pub mod session;
pub mod types;

pub use error::{Result, StudyError};
pub use flashcards::parse_flashcards;
pub use format::{format_answer, paragraphs, Paragraph, ParagraphKind};
pub use outline::{
    render_mermaid, sanitize_label, to_graph, to_graph_with, DiagramEdge, DiagramNode,
    DiagramSource, NodeStyle, OutlineOptions,
};
pub use quiz::parse_quiz;
pub use session::{QuestionResult, QuizResult, QuizSession, Selection};
pub use types::{
    parse_letter, DiagramMode, Flashcard, QuizOption, QuizQuestion, TopicLevel, OPTION_LETTERS,
};
