//! The composed document and its section-appending builder

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// A composed, immutable document ready for serialization
///
/// Built through [`DocumentBuilder`]; sections keep the order they were
/// appended in. Nothing mutates a composed document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    /// Start composing a document
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// The sections in document order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the document has no sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Builder appending sections in document order
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    sections: Vec<Section>,
}

impl DocumentBuilder {
    /// Start with no sections
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section
    pub fn add_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Finish composition
    pub fn build(self) -> Document {
        Document {
            sections: self.sections,
        }
    }
}
