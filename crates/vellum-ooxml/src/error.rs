//! Error types for package generation

use thiserror::Error;
use vellum_model::TableShapeError;

/// Errors that can occur while generating a package
#[derive(Error, Debug)]
pub enum PackageError {
    /// Error assembling the ZIP archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error writing archive bytes
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Style identifier registered twice
    #[error("Duplicate style: {0}")]
    DuplicateStyle(String),

    /// Style identifier not registered
    #[error("Style not found: {0}")]
    UnknownStyle(String),

    /// Style inheritance chain revisits an identifier
    #[error("Style inheritance cycle at: {0}")]
    StyleCycle(String),

    /// Numbering identifier not registered
    #[error("Numbering not found: {0}")]
    UnknownNumbering(String),

    /// Numbering level index beyond the registered levels
    #[error("Numbering level {level} out of range for '{id}' ({count} levels)")]
    LevelOutOfRange {
        /// The numbering identifier
        id: String,
        /// The requested level index
        level: usize,
        /// How many levels the scheme registered
        count: usize,
    },

    /// Table rows do not fit the declared column grid
    #[error("Table shape error: {0}")]
    Shape(#[from] TableShapeError),
}

/// Result type for package generation
pub type Result<T> = std::result::Result<T, PackageError>;
