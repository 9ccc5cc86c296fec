//! Parser for generated flashcard transcripts.
//!
//! # Format
//! ```text
//! FRONT: Mitochondria
//! BACK: Organelle that produces ATP.
//! ---
//! FRONT: Osmosis
//! BACK: Diffusion of water across a membrane.
//! ```

use crate::types::Flashcard;

const DELIMITER: &str = "---";
const FRONT_MARKER: &str = "FRONT:";
const BACK_MARKER: &str = "BACK:";

/// Parse a flashcard transcript into cards.
///
/// Segments are separated by lines containing only `---`. Cards are kept
/// even when a side is missing; the caller decides whether to show them.
///
/// Within a segment only the text after the first `FRONT:` becomes the
/// front. An intro line such as "Here are your flashcards:" ahead of the
/// marker is dropped rather than prepended to the first card.
pub fn parse_flashcards(raw: &str) -> Vec<Flashcard> {
    segments(raw)
        .into_iter()
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| parse_segment(&segment))
        .collect()
}

fn segments(raw: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in raw.lines() {
        if line.trim() == DELIMITER {
            segments.push(current.join("\n"));
            current.clear();
        } else {
            current.push(line);
        }
    }
    segments.push(current.join("\n"));

    segments
}

fn parse_segment(segment: &str) -> Flashcard {
    let (front_part, back) = match segment.split_once(BACK_MARKER) {
        Some((front, back)) => (front, back.trim()),
        None => {
            tracing::debug!("flashcard segment has no BACK marker");
            (segment, "")
        }
    };

    let front = front_part
        .split_once(FRONT_MARKER)
        .map_or(front_part, |(_, front)| front);

    Flashcard {
        front: front.trim().to_string(),
        back: back.to_string(),
    }
}
