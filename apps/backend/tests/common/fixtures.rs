//! Test fixtures and factory functions for creating request bodies.

use serde_json::json;

/// Generate a quiz transcript with `num_questions` questions whose correct
/// answers cycle through A, B, C, D.
pub fn sample_quiz_transcript(num_questions: usize) -> String {
    let mut transcript = String::from("Here is your quiz:\n\n");
    for i in 0..num_questions {
        let correct = ['A', 'B', 'C', 'D'][i % 4];
        transcript.push_str(&format!(
            "Q{n}: Question {n}?\nA) First\nB) Second\nC) Third\nD) Fourth\n\
             Correct Answer: {correct}\nExplanation: Because {correct} is right for {n}.\n\n",
            n = i + 1,
        ));
    }
    transcript
}

/// Correct letter for question `number` in `sample_quiz_transcript`.
pub fn sample_correct_letter(number: u32) -> &'static str {
    ["A", "B", "C", "D"][((number - 1) % 4) as usize]
}

pub fn sample_flashcards_transcript() -> &'static str {
    "FRONT: Mitochondria\nBACK: Produces ATP for the cell.\n---\n\
     FRONT: Osmosis\nBACK: Diffusion of water across a membrane.\n---\n\
     FRONT: Ribosome\nBACK: Builds proteins.\n---\n"
}

pub fn sample_outline() -> &'static str {
    "Here is the outline:\nI. Cell Biology\n   A. Organelles\n      1. Mitochondria\n   B. Membranes\nII. Genetics\n   A. DNA (structure & function)\n"
}

/// Create a generate quiz request body.
pub fn generate_quiz_request(transcript: &str) -> serde_json::Value {
    json!({ "transcript": transcript })
}

/// Create a select answer request body.
pub fn select_answer_request(
    question_number: u32,
    letter: &str,
    quiz_id: Option<&str>,
) -> serde_json::Value {
    match quiz_id {
        Some(id) => json!({ "question_number": question_number, "letter": letter, "quiz_id": id }),
        None => json!({ "question_number": question_number, "letter": letter }),
    }
}

/// Create a submit quiz request body.
pub fn submit_quiz_request(quiz_id: &str) -> serde_json::Value {
    json!({ "quiz_id": quiz_id })
}

/// Create a flashcards request body.
pub fn flashcards_request(transcript: &str) -> serde_json::Value {
    json!({ "transcript": transcript })
}

/// Create an outline diagram request body.
pub fn outline_request(outline: &str, mode: Option<&str>) -> serde_json::Value {
    match mode {
        Some(m) => json!({ "outline": outline, "mode": m }),
        None => json!({ "outline": outline }),
    }
}

/// Create a format answer request body.
pub fn format_answer_request(text: &str) -> serde_json::Value {
    json!({ "text": text })
}
