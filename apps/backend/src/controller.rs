//! Interaction controller: routes UI events into study-core and owns the
//! active quiz.
//!
//! There is one active quiz at a time. Generating a quiz replaces the
//! session wholesale and stamps it with a fresh id so that answers meant for
//! an older quiz can be told apart.

use chrono::Utc;
use uuid::Uuid;

use study_core::{
    format_answer, paragraphs, parse_flashcards, parse_letter, parse_quiz, render_mermaid,
    to_graph_with, DiagramMode, OutlineOptions, QuizSession, Selection,
};

use crate::error::{ApiError, Result};
use crate::models::*;

pub struct InteractionController {
    session: QuizSession,
    quiz_id: Option<Uuid>,
    outline_options: OutlineOptions,
    progress: ProgressSnapshot,
}

impl InteractionController {
    pub fn new(outline_options: OutlineOptions) -> Self {
        Self {
            session: QuizSession::new(),
            quiz_id: None,
            outline_options,
            progress: ProgressSnapshot::default(),
        }
    }

    /// A generated answer arrived; turn it into paragraph markup.
    pub fn format_answer(&mut self, text: &str) -> FormatAnswerResponse {
        self.touch(|p| p.answers_formatted += 1);
        FormatAnswerResponse {
            html: format_answer(text),
            paragraphs: paragraphs(text),
        }
    }

    /// A quiz transcript arrived; parse it and make it the active quiz.
    pub fn generate_quiz(&mut self, transcript: &str) -> QuizView {
        let questions = parse_quiz(transcript);
        let quiz_id = Uuid::new_v4();

        tracing::info!(%quiz_id, questions = questions.len(), "Starting new quiz");
        if questions.is_empty() {
            tracing::warn!(%quiz_id, "Quiz transcript produced no usable questions");
        }

        self.session.start(questions);
        self.quiz_id = Some(quiz_id);
        self.touch(|p| p.quizzes_generated += 1);

        self.quiz_view(quiz_id)
    }

    /// The active quiz with the answers picked so far.
    pub fn current_quiz(&self) -> Result<QuizView> {
        let quiz_id = self
            .quiz_id
            .ok_or_else(|| ApiError::NotFound("No active quiz".to_string()))?;
        Ok(self.quiz_view(quiz_id))
    }

    /// The user picked an option.
    pub fn select_answer(&mut self, request: &SelectAnswerRequest) -> Result<SelectAnswerResponse> {
        self.ensure_active(request.quiz_id)?;
        let letter = parse_letter(&request.letter)?;

        let selection = self.session.select(request.question_number, letter);
        if selection == Selection::UnknownQuestion {
            tracing::debug!(
                question = request.question_number,
                "Selection for unknown question ignored"
            );
        }

        Ok(SelectAnswerResponse {
            recorded: selection.is_recorded(),
            previous: match selection {
                Selection::Replaced(previous) => Some(previous),
                _ => None,
            },
        })
    }

    /// The user submitted the quiz.
    pub fn submit_quiz(&mut self, quiz_id: Option<Uuid>) -> Result<SubmitQuizResponse> {
        self.ensure_active(quiz_id)?;

        let result = self.session.submit();
        if !result.is_empty() {
            tracing::info!(
                quiz_id = ?self.quiz_id,
                score = result.score_percent,
                correct = result.correct_count,
                total = result.total,
                "Quiz submitted"
            );
            self.touch(|p| p.quizzes_submitted += 1);
        }

        Ok(SubmitQuizResponse {
            quiz_id: self.quiz_id,
            result,
        })
    }

    /// A flashcard transcript arrived.
    pub fn generate_flashcards(&mut self, transcript: &str) -> FlashcardsResponse {
        let cards = parse_flashcards(transcript);
        self.touch(|p| p.flashcard_decks_generated += 1);
        FlashcardsResponse {
            total: cards.len(),
            cards,
        }
    }

    /// An outline arrived and should be drawn in the given mode.
    pub fn outline_diagram(&mut self, outline: &str, mode: DiagramMode) -> OutlineDiagramResponse {
        let diagram = to_graph_with(outline, mode, &self.outline_options);
        let mermaid = render_mermaid(&diagram);
        self.touch(|p| p.outlines_generated += 1);
        OutlineDiagramResponse { diagram, mermaid }
    }

    pub fn progress(&self) -> ProgressSnapshot {
        self.progress.clone()
    }

    fn quiz_view(&self, quiz_id: Uuid) -> QuizView {
        QuizView {
            quiz_id,
            questions: self.session.questions().iter().map(QuestionView::from).collect(),
            answers: self.session.answers().clone(),
        }
    }

    /// Reject requests addressed to a quiz that is no longer active.
    fn ensure_active(&self, requested: Option<Uuid>) -> Result<()> {
        match requested {
            Some(requested) if self.quiz_id != Some(requested) => Err(ApiError::Conflict(format!(
                "Quiz {} is no longer active",
                requested
            ))),
            _ => Ok(()),
        }
    }

    fn touch(&mut self, update: impl FnOnce(&mut ProgressSnapshot)) {
        update(&mut self.progress);
        self.progress.last_activity_at = Some(Utc::now());
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(OutlineOptions::default())
    }
}
