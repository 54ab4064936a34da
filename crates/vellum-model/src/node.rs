//! Content nodes and the paragraph builder
//!
//! This module defines the node kinds a caller assembles into section
//! bodies, headers, and footers: paragraphs of runs, tables, page breaks,
//! and dynamic-field placeholders.

use serde::{Deserialize, Serialize};

use crate::attr::{Alignment, Spacing, StyleAttrs};
use crate::table::Table;

/// A block-level content node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A paragraph of runs
    Paragraph(Paragraph),
    /// A table
    Table(Table),
    /// An explicit page break
    PageBreak,
    /// A dynamic field on a line of its own
    Field(FieldKind),
}

impl From<Paragraph> for Node {
    fn from(para: Paragraph) -> Self {
        Node::Paragraph(para)
    }
}

impl From<Table> for Node {
    fn from(table: Table) -> Self {
        Node::Table(table)
    }
}

/// A dynamic value computed by the reading application
///
/// The engine only emits the tagged placeholder; the numeric value is
/// produced at display or print time by the reader's own pagination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FieldKind {
    /// The page the field lands on
    PageNumber,
    /// The total number of pages in the document
    PageCount,
}

/// A reference to a registered numbering scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberingRef {
    /// Caller-chosen numbering identifier
    pub id: String,
    /// Zero-based level within the scheme
    pub level: usize,
}

impl NumberingRef {
    /// Reference a numbering scheme at a level
    pub fn new(id: impl Into<String>, level: usize) -> Self {
        Self {
            id: id.into(),
            level,
        }
    }
}

/// What a run contains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunContent {
    /// Literal text
    Text(String),
    /// A dynamic field inline with surrounding text
    Field(FieldKind),
}

/// A run of identically formatted content within a paragraph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// The run's content
    pub content: RunContent,
    /// Optional run-kind style reference, validated at serialization
    pub style_id: Option<String>,
    /// Inline overrides applied on top of any referenced style
    pub attrs: StyleAttrs,
}

impl Run {
    /// A plain text run
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: RunContent::Text(text.into()),
            style_id: None,
            attrs: StyleAttrs::new(),
        }
    }

    /// A run holding a dynamic field
    pub fn field(kind: FieldKind) -> Self {
        Self {
            content: RunContent::Field(kind),
            style_id: None,
            attrs: StyleAttrs::new(),
        }
    }

    /// Reference a run style
    pub fn style(mut self, id: impl Into<String>) -> Self {
        self.style_id = Some(id.into());
        self
    }

    /// Replace the inline overrides
    pub fn attrs(mut self, attrs: StyleAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Set bold on the inline overrides
    pub fn bold(mut self) -> Self {
        self.attrs.bold = Some(true);
        self
    }

    /// Set italic on the inline overrides
    pub fn italic(mut self) -> Self {
        self.attrs.italic = Some(true);
        self
    }

    /// Set the font size in half-points on the inline overrides
    pub fn size(mut self, half_points: u32) -> Self {
        self.attrs.size = Some(half_points);
        self
    }

    /// Set the text color on the inline overrides
    pub fn color(mut self, hex: impl Into<String>) -> Self {
        self.attrs.color = Some(hex.into());
        self
    }
}

/// A paragraph of runs with optional formatting and numbering
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Ordered runs
    pub runs: Vec<Run>,
    /// Optional paragraph-kind style reference, validated at serialization
    pub style_id: Option<String>,
    /// Optional alignment override
    pub align: Option<Alignment>,
    /// Optional spacing override
    pub spacing: Option<Spacing>,
    /// Optional numbering reference, validated at serialization
    pub numbering: Option<NumberingRef>,
}

impl Paragraph {
    /// A paragraph holding a single plain text run
    pub fn text(text: impl Into<String>) -> Self {
        ParagraphBuilder::new().text(text).build()
    }

    /// A paragraph with a style reference and a single text run
    pub fn styled(style_id: impl Into<String>, text: impl Into<String>) -> Self {
        ParagraphBuilder::new().style(style_id).text(text).build()
    }

    /// Start building a paragraph
    pub fn builder() -> ParagraphBuilder {
        ParagraphBuilder::new()
    }
}

/// Builder assembling a [`Paragraph`]
#[derive(Debug, Default)]
pub struct ParagraphBuilder {
    runs: Vec<Run>,
    style_id: Option<String>,
    align: Option<Alignment>,
    spacing: Option<Spacing>,
    numbering: Option<NumberingRef>,
}

impl ParagraphBuilder {
    /// Start an empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain text run
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.runs.push(Run::text(text));
        self
    }

    /// Append a run
    pub fn run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    /// Append a field run
    pub fn field(mut self, kind: FieldKind) -> Self {
        self.runs.push(Run::field(kind));
        self
    }

    /// Reference a paragraph style
    pub fn style(mut self, id: impl Into<String>) -> Self {
        self.style_id = Some(id.into());
        self
    }

    /// Set the alignment
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    /// Set spacing before and after
    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Reference a numbering scheme at a level
    pub fn numbering(mut self, id: impl Into<String>, level: usize) -> Self {
        self.numbering = Some(NumberingRef::new(id, level));
        self
    }

    /// Finish the paragraph
    pub fn build(self) -> Paragraph {
        Paragraph {
            runs: self.runs,
            style_id: self.style_id,
            align: self.align,
            spacing: self.spacing,
            numbering: self.numbering,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_text_factory() {
        let para = Paragraph::text("Hello");
        assert_eq!(para.runs.len(), 1);
        assert_eq!(para.runs[0].content, RunContent::Text("Hello".to_string()));
        assert!(para.style_id.is_none());
    }

    #[test]
    fn test_paragraph_styled_factory() {
        let para = Paragraph::styled("Heading1", "Intro");
        assert_eq!(para.style_id.as_deref(), Some("Heading1"));
    }

    #[test]
    fn test_builder_collects_runs_in_order() {
        let para = Paragraph::builder()
            .text("Page ")
            .field(FieldKind::PageNumber)
            .text(" of ")
            .field(FieldKind::PageCount)
            .build();
        assert_eq!(para.runs.len(), 4);
        assert_eq!(para.runs[1].content, RunContent::Field(FieldKind::PageNumber));
        assert_eq!(para.runs[3].content, RunContent::Field(FieldKind::PageCount));
    }

    #[test]
    fn test_run_formatting_setters() {
        let run = Run::text("key").bold().size(28).color("1F4E79");
        assert_eq!(run.attrs.bold, Some(true));
        assert_eq!(run.attrs.size, Some(28));
        assert_eq!(run.attrs.color.as_deref(), Some("1F4E79"));
    }

    #[test]
    fn test_numbering_reference() {
        let para = Paragraph::builder()
            .text("first item")
            .numbering("steps", 0)
            .build();
        let num = para.numbering.unwrap();
        assert_eq!(num.id, "steps");
        assert_eq!(num.level, 0);
    }

    #[test]
    fn test_node_from_paragraph() {
        let node: Node = Paragraph::text("x").into();
        assert!(matches!(node, Node::Paragraph(_)));
    }
}
