//! # vellum-ooxml
//!
//! OOXML (Office Open XML) package generation for vellum documents.
//!
//! This crate provides functionality to:
//! - Register paragraph, run, and table styles with single inheritance
//! - Register bullet and decimal numbering schemes
//! - Serialize a document model into a complete DOCX package
//!
//! ## Example: Writing a Document
//!
//! ```no_run
//! use vellum_model::{Document, Paragraph, Section};
//! use vellum_ooxml::{DocxWriter, NumberingRegistry, StyleDefinition, StyleRegistry};
//!
//! let mut styles = StyleRegistry::new();
//! styles.register(StyleDefinition::paragraph("Title"))?;
//!
//! let doc = Document::builder()
//!     .add_section(Section::new().push(Paragraph::styled("Title", "Field Guide")))
//!     .build();
//!
//! let writer = DocxWriter::new(styles, NumberingRegistry::new());
//! std::fs::write("guide.docx", writer.write(&doc)?)?;
//! # Ok::<(), vellum_ooxml::PackageError>(())
//! ```

pub mod archive;
pub mod error;
pub mod manifest;
pub mod numbering;
pub mod relationships;
pub mod styles;
pub mod writer;

pub use archive::PackageArchive;
pub use error::{PackageError, Result};
pub use manifest::{Manifest, MANIFEST_PATH};
pub use numbering::{LevelFormat, NumberingLevel, NumberingRegistry};
pub use relationships::{RelationshipTarget, Relationships};
pub use styles::{StyleDefinition, StyleKind, StyleRegistry};
pub use writer::DocxWriter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
