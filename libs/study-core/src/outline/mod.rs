//! Outline to diagram conversion.
//!
//! Generated outlines use roman numerals for main topics and capital
//! letters for subtopics:
//! ```text
//! I. Cell Biology
//!    A. Organelles
//!       1. Mitochondria
//!    B. Membranes
//! II. Genetics
//! ```
//! Only the first two levels become nodes. Anything else (deeper points,
//! stray prose) is ignored.

pub mod mermaid;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::{DiagramMode, TopicLevel};

pub use mermaid::render_mermaid;

/// Identifier of the synthesized root node.
pub const ROOT_ID: &str = "Start";

const DEFAULT_ROOT_LABEL: &str = "Study Material";

/// Cap for the configured root label.
const ROOT_LABEL_CAP: usize = 60;

static RE_MAIN_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[IVX]+\.\s*").expect("main topic pattern"));

static RE_SUB_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]\.\s+").expect("subtopic pattern"));

static RE_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("label filter pattern"));

static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Classified outline line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineLine<'a> {
    /// `II. Genetics`, carrying the text after the marker.
    MainTopic(&'a str),
    /// `B. Membranes`, carrying the text after the marker.
    SubTopic(&'a str),
    Unrecognized,
}

impl OutlineLine<'_> {
    pub fn level(&self) -> Option<TopicLevel> {
        match self {
            Self::MainTopic(_) => Some(TopicLevel::Main),
            Self::SubTopic(_) => Some(TopicLevel::Sub),
            Self::Unrecognized => None,
        }
    }
}

/// Classify a trimmed outline line.
///
/// Matchers are tried in order, so `I.`, `V.` and `X.` are main topics even
/// though they also look like subtopic letters.
pub fn classify_outline_line(line: &str) -> OutlineLine<'_> {
    let matchers: [(&Regex, TopicLevel); 2] = [
        (&*RE_MAIN_MARKER, TopicLevel::Main),
        (&*RE_SUB_MARKER, TopicLevel::Sub),
    ];

    for (pattern, level) in matchers {
        if let Some(marker) = pattern.find(line) {
            let text = line[marker.end()..].trim();
            return match level {
                TopicLevel::Main => OutlineLine::MainTopic(text),
                TopicLevel::Sub => OutlineLine::SubTopic(text),
            };
        }
    }

    OutlineLine::Unrecognized
}

/// Reduce a topic to a diagram-safe label of at most `cap` characters.
///
/// Other characters than word characters, whitespace and hyphens become
/// spaces, so `Cells/Tissues` keeps its words apart. Runs of whitespace are
/// then collapsed and the result trimmed. Applying it to its own output
/// changes nothing.
pub fn sanitize_label(text: &str, cap: usize) -> String {
    let filtered = RE_DISALLOWED.replace_all(text, " ");
    let collapsed = RE_WHITESPACE.replace_all(&filtered, " ");
    let truncated: String = collapsed.trim().chars().take(cap).collect();
    truncated.trim_end().to_string()
}

/// Visual role of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStyle {
    Root,
    Main,
    Sub,
}

impl NodeStyle {
    /// Class name handed to the renderer.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Root => "start",
            Self::Main => "main",
            Self::Sub => "sub",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramNode {
    pub id: String,
    pub label: String,
    pub style: NodeStyle,
    /// 0 for the root, 1 for main topics, 2 for subtopics.
    pub depth: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramEdge {
    pub from: String,
    pub to: String,
}

/// Renderer-neutral description of an outline diagram.
///
/// Nodes are in outline order with the root first; every non-root node has
/// exactly one incoming edge from its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramSource {
    pub mode: DiagramMode,
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

impl DiagramSource {
    fn new(mode: DiagramMode, root_label: &str) -> Self {
        let mut label = sanitize_label(root_label, ROOT_LABEL_CAP);
        if label.is_empty() {
            label = DEFAULT_ROOT_LABEL.to_string();
        }
        Self {
            mode,
            nodes: vec![DiagramNode {
                id: ROOT_ID.to_string(),
                label,
                style: NodeStyle::Root,
                depth: 0,
                parent: None,
            }],
            edges: Vec::new(),
        }
    }

    pub fn root(&self) -> &DiagramNode {
        &self.nodes[0]
    }

    /// Nodes produced from outline lines (everything except the root).
    pub fn topic_nodes(&self) -> &[DiagramNode] {
        &self.nodes[1..]
    }

    /// Direct children of a node, in outline order.
    pub fn children<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a DiagramNode> + 'a {
        self.nodes
            .iter()
            .filter(move |n| n.parent.as_deref() == Some(id))
    }

    /// True when the outline produced no topic nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}

/// Conversion settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineOptions {
    pub root_label: String,
    pub tree_label_cap: usize,
    pub flow_label_cap: usize,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            root_label: DEFAULT_ROOT_LABEL.to_string(),
            tree_label_cap: 25,
            flow_label_cap: 35,
        }
    }
}

impl OutlineOptions {
    pub fn label_cap(&self, mode: DiagramMode) -> usize {
        match mode {
            DiagramMode::Tree => self.tree_label_cap,
            DiagramMode::Flow => self.flow_label_cap,
        }
    }
}

struct GraphBuilder {
    source: DiagramSource,
    cap: usize,
    next_id: usize,
    current_main: Option<String>,
}

impl GraphBuilder {
    fn new(mode: DiagramMode, options: &OutlineOptions) -> Self {
        Self {
            source: DiagramSource::new(mode, &options.root_label),
            cap: options.label_cap(mode),
            next_id: 1,
            current_main: None,
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) {
        match classify_outline_line(line) {
            OutlineLine::MainTopic(text) => {
                // An unusable main topic leaves the previous anchor in place.
                match self.push_node(text, NodeStyle::Main, ROOT_ID.to_string()) {
                    Some(id) => self.current_main = Some(id),
                    None => {
                        tracing::debug!(line = line_num, "main topic has an empty label, skipping")
                    }
                }
            }
            OutlineLine::SubTopic(text) => {
                let Some(parent) = self.current_main.clone() else {
                    tracing::debug!(line = line_num, "subtopic has no main topic to attach to");
                    return;
                };
                if self.push_node(text, NodeStyle::Sub, parent).is_none() {
                    tracing::debug!(line = line_num, "subtopic has an empty label, skipping");
                }
            }
            OutlineLine::Unrecognized => {}
        }
    }

    /// Add a node under `parent`, returning its id, or `None` when the
    /// label sanitizes to nothing.
    fn push_node(&mut self, text: &str, style: NodeStyle, parent: String) -> Option<String> {
        let label = sanitize_label(text, self.cap);
        if label.is_empty() {
            return None;
        }

        let id = format!("N{}", self.next_id);
        self.next_id += 1;

        let depth = match style {
            NodeStyle::Root => 0,
            NodeStyle::Main => 1,
            NodeStyle::Sub => 2,
        };

        self.source.edges.push(DiagramEdge {
            from: parent.clone(),
            to: id.clone(),
        });
        self.source.nodes.push(DiagramNode {
            id: id.clone(),
            label,
            style,
            depth,
            parent: Some(parent),
        });

        Some(id)
    }
}

/// Convert outline text into a diagram using default options.
pub fn to_graph(outline: &str, mode: DiagramMode) -> DiagramSource {
    to_graph_with(outline, mode, &OutlineOptions::default())
}

/// Convert outline text into a diagram.
pub fn to_graph_with(outline: &str, mode: DiagramMode, options: &OutlineOptions) -> DiagramSource {
    let mut builder = GraphBuilder::new(mode, options);

    for (idx, line) in outline.lines().enumerate() {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            builder.process_line(trimmed, idx + 1);
        }
    }

    builder.source
}
