//! Paragraph formatting for generated answers.
//!
//! Generated prose uses a few light conventions: `**bold**` spans, blank
//! lines between paragraphs, and paragraphs that open with `1.` or a bullet.
//! The formatter turns that into paragraph markup. It accepts any input.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static RE_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern"));

static RE_NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("numbered pattern"));

const BULLET_MARKERS: [char; 2] = ['-', '•'];

/// How a paragraph is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphKind {
    /// Opens with a numeric list marker (`1.`); rendered indented.
    Numbered,
    /// Opens with a bullet marker; rendered indented.
    Bullet,
    Plain,
}

impl ParagraphKind {
    fn classify(text: &str) -> Self {
        if RE_NUMBERED.is_match(text) {
            Self::Numbered
        } else if text.starts_with(BULLET_MARKERS) {
            Self::Bullet
        } else {
            Self::Plain
        }
    }

    fn open_tag(self) -> &'static str {
        match self {
            Self::Numbered => r#"<p class="numbered">"#,
            Self::Bullet => r#"<p class="bullet">"#,
            Self::Plain => "<p>",
        }
    }
}

/// A classified paragraph with bold spans already converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub kind: ParagraphKind,
    pub text: String,
}

impl Paragraph {
    /// Render as a single `<p>` element.
    pub fn to_markup(&self) -> String {
        format!("{}{}</p>", self.kind.open_tag(), self.text)
    }
}

/// Split raw prose into classified, non-empty paragraphs.
pub fn paragraphs(raw: &str) -> Vec<Paragraph> {
    let normalized = raw.replace("\r\n", "\n");
    let emphasized = RE_BOLD.replace_all(&normalized, "<strong>$1</strong>");

    emphasized
        .split("\n\n")
        .map(str::trim)
        .filter(|para| !para.is_empty())
        .map(|para| Paragraph {
            kind: ParagraphKind::classify(para),
            text: para.to_string(),
        })
        .collect()
}

/// Format raw prose into paragraph markup.
pub fn format_answer(raw: &str) -> String {
    paragraphs(raw).iter().map(Paragraph::to_markup).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_is_one_paragraph() {
        let text = "Photosynthesis converts light into chemical energy.";
        assert_eq!(format_answer(text), format!("<p>{text}</p>"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(format_answer("  \n hello world \n "), "<p>hello world</p>");
    }

    #[test]
    fn single_newlines_stay_inside_the_paragraph() {
        assert_eq!(format_answer("line one\nline two"), "<p>line one\nline two</p>");
    }

    #[test]
    fn whitespace_only_input_is_empty() {
        assert_eq!(format_answer(""), "");
        assert_eq!(format_answer(" \n\n \t\n\n"), "");
    }

    #[test]
    fn bold_spans_become_strong() {
        assert_eq!(
            format_answer("The **mitochondria** is the **powerhouse**."),
            "<p>The <strong>mitochondria</strong> is the <strong>powerhouse</strong>.</p>"
        );
    }

    #[test]
    fn unbalanced_bold_is_left_alone() {
        assert_eq!(format_answer("a **b"), "<p>a **b</p>");
    }

    #[test]
    fn classifies_list_paragraphs() {
        let raw = "Intro\n\n1. First step\n\n- a bullet\n\n• another bullet";
        let kinds: Vec<_> = paragraphs(raw).iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ParagraphKind::Plain,
                ParagraphKind::Numbered,
                ParagraphKind::Bullet,
                ParagraphKind::Bullet,
            ]
        );
    }

    #[test]
    fn preserves_order_and_drops_empty_paragraphs() {
        let raw = "First\n\n\n\n12. Twelfth\n\nLast";
        assert_eq!(
            format_answer(raw),
            "<p>First</p><p class=\"numbered\">12. Twelfth</p><p>Last</p>"
        );
    }

    #[test]
    fn crlf_paragraph_breaks() {
        assert_eq!(format_answer("one\r\n\r\ntwo"), "<p>one</p><p>two</p>");
    }
}
