//! # vellum-model
//!
//! Declarative content model for vellum document generation.
//!
//! This crate provides the types a caller assembles into a document:
//! - Paragraphs, runs, tables, page breaks, and field placeholders
//! - Sections carrying page geometry and header/footer bindings
//! - Builders that finish into immutable values
//!
//! ## Example: Composing a Document
//!
//! ```
//! use vellum_model::{Document, Paragraph, Section};
//!
//! let doc = Document::builder()
//!     .add_section(
//!         Section::new()
//!             .push(Paragraph::styled("Title", "Field Guide"))
//!             .push(Paragraph::text("A short introduction.")),
//!     )
//!     .build();
//!
//! assert_eq!(doc.len(), 1);
//! ```

pub mod attr;
pub mod document;
pub mod node;
pub mod section;
pub mod table;

pub use attr::{
    Alignment, BorderLine, BorderStyle, Borders, Spacing, StyleAttrs, VerticalAlign,
};
pub use document::{Document, DocumentBuilder};
pub use node::{FieldKind, Node, NumberingRef, Paragraph, ParagraphBuilder, Run, RunContent};
pub use section::Section;
pub use table::{Table, TableBuilder, TableCell, TableRow, TableShapeError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
