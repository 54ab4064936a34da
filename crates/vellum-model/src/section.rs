//! Sections: page geometry, header/footer bindings, and body content
//!
//! A section carries its own page geometry and optional running header and
//! footer. Sections are appended to a document in order; the serializer
//! emits an explicit break at every section boundary.

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// US Letter page width in twips
pub const LETTER_WIDTH: u32 = 12240;
/// US Letter page height in twips
pub const LETTER_HEIGHT: u32 = 15840;
/// A4 page width in twips
pub const A4_WIDTH: u32 = 11906;
/// A4 page height in twips
pub const A4_HEIGHT: u32 = 16838;

/// One-inch default margin in twips
const DEFAULT_MARGIN: u32 = 1440;
/// Half-inch default header/footer distance in twips
const DEFAULT_DISTANCE: u32 = 720;

/// A document section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Page width in twips
    pub page_width: u32,
    /// Page height in twips
    pub page_height: u32,
    /// Top margin in twips
    pub margin_top: u32,
    /// Bottom margin in twips
    pub margin_bottom: u32,
    /// Left margin in twips
    pub margin_left: u32,
    /// Right margin in twips
    pub margin_right: u32,
    /// Distance from the page edge to the header, in twips
    pub header_distance: u32,
    /// Distance from the page edge to the footer, in twips
    pub footer_distance: u32,
    /// Running header content, if bound
    pub header: Option<Vec<Node>>,
    /// Running footer content, if bound
    pub footer: Option<Vec<Node>>,
    /// Body content in order
    pub body: Vec<Node>,
}

impl Default for Section {
    fn default() -> Self {
        Self {
            page_width: LETTER_WIDTH,
            page_height: LETTER_HEIGHT,
            margin_top: DEFAULT_MARGIN,
            margin_bottom: DEFAULT_MARGIN,
            margin_left: DEFAULT_MARGIN,
            margin_right: DEFAULT_MARGIN,
            header_distance: DEFAULT_DISTANCE,
            footer_distance: DEFAULT_DISTANCE,
            header: None,
            footer: None,
            body: Vec::new(),
        }
    }
}

impl Section {
    /// A US Letter section with one-inch margins
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to A4 page dimensions
    pub fn a4(mut self) -> Self {
        self.page_width = A4_WIDTH;
        self.page_height = A4_HEIGHT;
        self
    }

    /// Set all four margins, in twips
    pub fn margins(mut self, top: u32, bottom: u32, left: u32, right: u32) -> Self {
        self.margin_top = top;
        self.margin_bottom = bottom;
        self.margin_left = left;
        self.margin_right = right;
        self
    }

    /// Bind a running header
    pub fn header(mut self, nodes: Vec<Node>) -> Self {
        self.header = Some(nodes);
        self
    }

    /// Bind a running footer
    pub fn footer(mut self, nodes: Vec<Node>) -> Self {
        self.footer = Some(nodes);
        self
    }

    /// Append a body node
    pub fn push(mut self, node: impl Into<Node>) -> Self {
        self.body.push(node.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Paragraph;

    #[test]
    fn test_default_is_letter_with_inch_margins() {
        let section = Section::new();
        assert_eq!(section.page_width, 12240);
        assert_eq!(section.page_height, 15840);
        assert_eq!(section.margin_left, 1440);
        assert_eq!(section.header_distance, 720);
        assert!(section.header.is_none());
    }

    #[test]
    fn test_a4_dimensions() {
        let section = Section::new().a4();
        assert_eq!(section.page_width, 11906);
        assert_eq!(section.page_height, 16838);
    }

    #[test]
    fn test_chained_construction() {
        let section = Section::new()
            .margins(720, 720, 1080, 1080)
            .footer(vec![Paragraph::text("footer").into()])
            .push(Paragraph::text("body"));
        assert_eq!(section.margin_top, 720);
        assert_eq!(section.margin_left, 1080);
        assert!(section.footer.is_some());
        assert_eq!(section.body.len(), 1);
    }
}
