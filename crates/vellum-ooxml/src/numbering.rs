//! Numbering registry for bullet and decimal list schemes
//!
//! A scheme is an ordered list of level descriptors registered under a
//! caller-chosen identifier. Paragraphs reference a scheme by identifier
//! plus level; the serializer assigns the numeric ids the dialect wants
//! from registration order.

use std::collections::HashMap;

use crate::error::{PackageError, Result};

/// How a numbering level renders its marker
#[derive(Debug, Clone, PartialEq)]
pub enum LevelFormat {
    /// A literal bullet glyph
    Bullet(String),
    /// Arabic numerals followed by a period
    Decimal,
    /// No visible marker, indentation only
    None,
}

/// One level of a numbering scheme
#[derive(Debug, Clone, PartialEq)]
pub struct NumberingLevel {
    /// Marker format
    pub format: LevelFormat,
    /// Left indent in twips
    pub indent: u32,
    /// Hanging indent in twips
    pub hanging: u32,
}

impl NumberingLevel {
    /// A bullet level with the given glyph and left indent
    pub fn bullet(glyph: impl Into<String>, indent: u32) -> Self {
        Self {
            format: LevelFormat::Bullet(glyph.into()),
            indent,
            hanging: 360,
        }
    }

    /// A decimal level with the given left indent
    pub fn decimal(indent: u32) -> Self {
        Self {
            format: LevelFormat::Decimal,
            indent,
            hanging: 360,
        }
    }

    /// An unmarked level with the given left indent
    pub fn unmarked(indent: u32) -> Self {
        Self {
            format: LevelFormat::None,
            indent,
            hanging: 0,
        }
    }

    /// Set the hanging indent
    pub fn hanging(mut self, twips: u32) -> Self {
        self.hanging = twips;
        self
    }
}

/// Registry of numbering schemes
///
/// Maintains insertion order for deterministic part emission.
#[derive(Debug, Clone, Default)]
pub struct NumberingRegistry {
    /// Ordered list of scheme IDs (maintains insertion order)
    order: Vec<String>,
    /// Map of scheme ID to its level descriptors
    map: HashMap<String, Vec<NumberingLevel>>,
}

impl NumberingRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scheme under a caller-chosen identifier
    ///
    /// Identifiers are expected to be unique within one generation call;
    /// registering an existing identifier replaces the earlier
    /// definition.
    pub fn register(&mut self, id: impl Into<String>, levels: Vec<NumberingLevel>) {
        let id = id.into();
        if self.map.insert(id.clone(), levels).is_some() {
            log::debug!("Replacing numbering definition: {}", id);
        } else {
            self.order.push(id);
        }
    }

    /// Look up one level of a registered scheme
    pub fn level_for(&self, id: &str, level: usize) -> Result<&NumberingLevel> {
        let levels = self
            .map
            .get(id)
            .ok_or_else(|| PackageError::UnknownNumbering(id.to_string()))?;
        levels.get(level).ok_or(PackageError::LevelOutOfRange {
            id: id.to_string(),
            level,
            count: levels.len(),
        })
    }

    /// Get all levels of a registered scheme
    pub fn get(&self, id: &str) -> Option<&[NumberingLevel]> {
        self.map.get(id).map(|v| v.as_slice())
    }

    /// Check whether an identifier is registered
    pub fn contains(&self, id: &str) -> bool {
        self.map.contains_key(id)
    }

    /// Iterate over schemes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NumberingLevel])> {
        self.order
            .iter()
            .filter_map(|id| self.map.get(id).map(|levels| (id.as_str(), levels.as_slice())))
    }

    /// Number of registered schemes
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no schemes are registered
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
