//! Parser for generated multiple-choice quiz transcripts.
//!
//! # Format
//! ```text
//! Q1: What is the capital of France?
//! A) Berlin
//! B) Paris
//! C) Rome
//! D) Madrid
//! Correct Answer: B
//! Explanation: Paris has been the capital since 987.
//! ```
//!
//! The transcript comes from a text model and follows no schema. Parsing is
//! best-effort: anything before the first `Q<n>:` marker is ignored, and a
//! block that yields no options is dropped.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{QuizOption, QuizQuestion};

static RE_QUESTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Q\d+:").expect("question marker pattern"));

static RE_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-D])\)").expect("option pattern"));

static RE_CORRECT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)correct answer:").expect("correct answer pattern"));

static RE_EXPLANATION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)explanation:").expect("explanation pattern"));

static RE_STANDALONE_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-D])\b").expect("letter pattern"));

/// Classified line of a question block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizLine<'a> {
    /// `B) some text`
    Option { letter: char, text: &'a str },
    /// A `Correct Answer:` line; `None` when it names no letter A-D.
    CorrectAnswer(Option<char>),
    /// An `Explanation:` line, carrying the text after the marker.
    Explanation(&'a str),
    Text(&'a str),
}

/// Classify a single trimmed line. Matchers run in priority order:
/// option, correct answer, explanation.
pub fn classify_quiz_line(line: &str) -> QuizLine<'_> {
    if let Some(caps) = RE_OPTION.captures(line) {
        let letter = caps[1].chars().next().unwrap_or('A');
        let marker_end = caps.get(0).map_or(0, |m| m.end());
        return QuizLine::Option {
            letter,
            text: line[marker_end..].trim(),
        };
    }

    if let Some(marker) = RE_CORRECT_MARKER.find(line) {
        let letter = RE_STANDALONE_LETTER
            .captures(&line[marker.end()..])
            .and_then(|caps| caps[1].chars().next());
        return QuizLine::CorrectAnswer(letter);
    }

    if let Some(marker) = RE_EXPLANATION_MARKER.find(line) {
        let seed = line[marker.end()..].trim_start_matches(|c: char| c == '*' || c.is_whitespace());
        return QuizLine::Explanation(seed.trim_end());
    }

    QuizLine::Text(line)
}

struct QuestionBuilder {
    question: QuizQuestion,
    /// Set by the first correct-answer line; from then on free text
    /// continues the explanation.
    correct_found: bool,
}

impl QuestionBuilder {
    fn new(number: u32, text: &str) -> Self {
        Self {
            question: QuizQuestion::new(number, text),
            correct_found: false,
        }
    }

    fn process_line(&mut self, line: &str) {
        match classify_quiz_line(line) {
            QuizLine::Option { letter, text } => self.push_option(letter, text),
            QuizLine::CorrectAnswer(letter) => {
                // Repeated answer lines overwrite; the last one wins.
                self.question.correct_answer = letter;
                self.correct_found = true;
            }
            QuizLine::Explanation(seed) => {
                self.question.explanation = seed.to_string();
            }
            QuizLine::Text(text) => {
                if self.correct_found {
                    self.append_explanation(text);
                }
            }
        }
    }

    fn push_option(&mut self, letter: char, text: &str) {
        if self.question.option(letter).is_some() {
            tracing::trace!(
                question = self.question.number,
                %letter,
                "duplicate option letter ignored"
            );
            return;
        }
        self.question.options.push(QuizOption {
            letter,
            text: text.to_string(),
        });
    }

    fn append_explanation(&mut self, text: &str) {
        if !self.question.explanation.is_empty() {
            self.question.explanation.push(' ');
        }
        self.question.explanation.push_str(text);
    }

    fn build(self) -> Option<QuizQuestion> {
        if self.question.options.is_empty() {
            tracing::debug!(
                question = self.question.number,
                "quiz block has no options, skipping"
            );
            return None;
        }
        Some(self.question)
    }
}

/// Parse a quiz transcript into questions.
///
/// Never fails; returns an empty list when nothing usable is found.
pub fn parse_quiz(raw: &str) -> Vec<QuizQuestion> {
    RE_QUESTION_MARKER
        .split(raw)
        .enumerate()
        .skip(1)
        .filter_map(|(ordinal, block)| parse_block(ordinal as u32, block))
        .collect()
}

fn parse_block(number: u32, block: &str) -> Option<QuizQuestion> {
    let mut lines = block.lines().map(str::trim).filter(|line| !line.is_empty());

    let Some(prompt) = lines.next() else {
        tracing::debug!(question = number, "empty quiz block, skipping");
        return None;
    };

    let mut builder = QuestionBuilder::new(number, prompt);
    for line in lines {
        builder.process_line(line);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TWO_QUESTIONS: &str = "\
Here is your quiz:

Q1: What is the capital of France?
A) Berlin
B) Paris
C) Rome
D) Madrid
Correct Answer: B
Explanation: Paris is the capital of France.

Q2: Which gas do plants absorb?
A) Oxygen
B) Carbon dioxide
Correct Answer: B) Carbon dioxide
Explanation: Plants take in CO2
during photosynthesis.
";

    #[test]
    fn parse_well_formed_transcript() {
        let questions = parse_quiz(TWO_QUESTIONS);
        assert_eq!(questions.len(), 2);

        let first = &questions[0];
        assert_eq!(first.number, 1);
        assert_eq!(first.text, "What is the capital of France?");
        assert_eq!(first.options.len(), 4);
        assert_eq!(first.options[1].letter, 'B');
        assert_eq!(first.options[1].text, "Paris");
        assert_eq!(first.correct_answer, Some('B'));
        assert_eq!(first.explanation, "Paris is the capital of France.");
    }

    #[test]
    fn explanation_continues_across_lines() {
        let questions = parse_quiz(TWO_QUESTIONS);
        assert_eq!(
            questions[1].explanation,
            "Plants take in CO2 during photosynthesis."
        );
    }

    #[test]
    fn correct_letter_is_read_after_the_marker() {
        // The `C` of "Correct" must not be picked up.
        assert_eq!(classify_quiz_line("Correct Answer: A"), QuizLine::CorrectAnswer(Some('A')));
        assert_eq!(
            classify_quiz_line("**Correct answer:** D"),
            QuizLine::CorrectAnswer(Some('D'))
        );
        assert_eq!(
            classify_quiz_line("correct answer: [B]"),
            QuizLine::CorrectAnswer(Some('B'))
        );
    }

    #[test]
    fn correct_answer_without_letter_is_empty() {
        let raw = "Q1: Pick\nA) One\nB) Two\nCorrect Answer: none of these";
        let questions = parse_quiz(raw);
        assert_eq!(questions[0].correct_answer, None);
    }

    #[test]
    fn last_correct_answer_line_wins() {
        let raw = "Q1: Pick\nA) One\nB) Two\nCorrect Answer: A\nCorrect Answer: B";
        assert_eq!(parse_quiz(raw)[0].correct_answer, Some('B'));
    }

    #[test]
    fn first_letter_in_answer_line_wins() {
        assert_eq!(
            classify_quiz_line("Correct Answer: C or maybe D"),
            QuizLine::CorrectAnswer(Some('C'))
        );
    }

    #[test]
    fn missing_explanation_is_empty_string() {
        let raw = "Q1: Pick\nA) One\nCorrect Answer: A";
        let questions = parse_quiz(raw);
        assert_eq!(questions[0].explanation, "");
    }

    #[test]
    fn free_text_after_answer_seeds_explanation() {
        let raw = "Q1: Pick\nA) One\nCorrect Answer: A\nBecause one is first.";
        assert_eq!(parse_quiz(raw)[0].explanation, "Because one is first.");
    }

    #[test]
    fn stray_text_before_answer_is_ignored() {
        let raw = "Q1: Pick\n(choose carefully)\nA) One\nCorrect Answer: A";
        let question = &parse_quiz(raw)[0];
        assert_eq!(question.explanation, "");
        assert_eq!(question.options.len(), 1);
    }

    #[test]
    fn text_between_explanation_and_answer_is_ignored() {
        let raw = "Q1: Pick\nA) One\nExplanation: Seed\nstray line\nCorrect Answer: A";
        let question = &parse_quiz(raw)[0];
        assert_eq!(question.explanation, "Seed");
        assert_eq!(question.correct_answer, Some('A'));
    }

    #[test]
    fn explanation_marker_strips_bold_residue() {
        assert_eq!(
            classify_quiz_line("**Explanation:** Because."),
            QuizLine::Explanation("Because.")
        );
    }

    #[test]
    fn question_without_options_is_discarded() {
        let raw = "Q1: Orphan question\nCorrect Answer: A\nQ2: Real\nA) Yes";
        let questions = parse_quiz(raw);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].number, 2);
        assert_eq!(questions[0].text, "Real");
    }

    #[test]
    fn numbering_follows_parse_order_not_source() {
        let raw = "Q7: First\nA) x\nQ7: Second\nA) y";
        let numbers: Vec<_> = parse_quiz(raw).iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn empty_block_keeps_its_ordinal() {
        let raw = "Q1:   \nQ2: Second\nA) y";
        let questions = parse_quiz(raw);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].number, 2);
    }

    #[test]
    fn duplicate_option_letters_keep_first() {
        let raw = "Q1: Pick\nA) One\nA) Again\nB) Two";
        let options = &parse_quiz(raw)[0].options;
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].text, "One");
    }

    #[test]
    fn letters_need_not_be_contiguous() {
        let raw = "Q1: Pick\nB) Two\nD) Four";
        let letters: Vec<_> = parse_quiz(raw)[0].options.iter().map(|o| o.letter).collect();
        assert_eq!(letters, vec!['B', 'D']);
    }

    #[test]
    fn preamble_only_and_empty_input_yield_nothing() {
        assert!(parse_quiz("").is_empty());
        assert!(parse_quiz("Sorry, I cannot create a quiz from this.").is_empty());
    }

    #[test]
    fn every_parsed_question_has_options() {
        let raw = "Q1: a\nQ2: b\nA) x\nQ3:\nQ4: c\nnot an option\nQ5: d\nC) z";
        let questions = parse_quiz(raw);
        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(|q| !q.options.is_empty()));
    }

    #[test]
    fn classify_option_line() {
        assert_eq!(
            classify_quiz_line("C)   Rome "),
            QuizLine::Option { letter: 'C', text: "Rome" }
        );
        assert_eq!(classify_quiz_line("E) Nope"), QuizLine::Text("E) Nope"));
    }
}
