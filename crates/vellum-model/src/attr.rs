//! Formatting attributes shared by styles and inline overrides
//!
//! This module defines the attribute vocabulary used both by registered
//! styles and by direct formatting on runs, paragraphs, and table cells.
//! All lengths are in twentieths of a point (twips), font sizes in
//! half-points, border widths in eighths of a point. Colors are six-digit
//! uppercase hex strings without a leading `#`.

use serde::{Deserialize, Serialize};

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// The `w:jc` value for this alignment
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }
}

/// Vertical alignment within a table cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

impl VerticalAlign {
    /// The `w:vAlign` value for this alignment
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Center => "center",
            VerticalAlign::Bottom => "bottom",
        }
    }
}

/// Spacing before and after a paragraph, in twips
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Spacing {
    /// Space before the paragraph
    pub before: u32,
    /// Space after the paragraph
    pub after: u32,
}

impl Spacing {
    /// Create a spacing pair
    pub fn new(before: u32, after: u32) -> Self {
        Self { before, after }
    }
}

/// Border line style variants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BorderStyle {
    Single,
    Double,
    Dashed,
    Dotted,
}

impl BorderStyle {
    /// The `w:val` border style value
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::Single => "single",
            BorderStyle::Double => "double",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        }
    }
}

/// A single border edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderLine {
    /// Line style
    pub style: BorderStyle,
    /// Line width in eighths of a point
    pub size: u32,
    /// Line color as hex RGB
    pub color: String,
}

impl BorderLine {
    /// Create a border line
    pub fn new(style: BorderStyle, size: u32, color: impl Into<String>) -> Self {
        Self {
            style,
            size,
            color: color.into(),
        }
    }

    /// A thin single black line
    pub fn single() -> Self {
        Self::new(BorderStyle::Single, 4, "000000")
    }
}

/// Borders for the four edges of a paragraph or cell
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Borders {
    /// Top edge
    pub top: Option<BorderLine>,
    /// Bottom edge
    pub bottom: Option<BorderLine>,
    /// Left edge
    pub left: Option<BorderLine>,
    /// Right edge
    pub right: Option<BorderLine>,
}

impl Borders {
    /// No borders on any edge
    pub fn none() -> Self {
        Self::default()
    }

    /// The same line on all four edges
    pub fn all(line: BorderLine) -> Self {
        Self {
            top: Some(line.clone()),
            bottom: Some(line.clone()),
            left: Some(line.clone()),
            right: Some(line),
        }
    }

    /// Whether any edge carries a border
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.left.is_none() && self.right.is_none()
    }
}

/// A partial set of formatting attributes
///
/// Every field is optional. An unset field inherits from the parent style
/// during resolution, or from the document default when no parent sets it.
/// Fields that remain unset after resolution are left to the reading
/// application's defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleAttrs {
    /// Font family name
    pub font: Option<String>,
    /// Font size in half-points
    pub size: Option<u32>,
    /// Bold weight
    pub bold: Option<bool>,
    /// Italic slant
    pub italic: Option<bool>,
    /// Text color as hex RGB
    pub color: Option<String>,
    /// Background fill as hex RGB
    pub fill: Option<String>,
    /// Horizontal alignment
    pub align: Option<Alignment>,
    /// Space before, in twips
    pub spacing_before: Option<u32>,
    /// Space after, in twips
    pub spacing_after: Option<u32>,
    /// Border set
    pub borders: Option<Borders>,
}

impl StyleAttrs {
    /// An empty attribute set
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge this set over a base set, keeping this set's values on conflict
    pub fn merged_over(&self, base: &StyleAttrs) -> StyleAttrs {
        StyleAttrs {
            font: self.font.clone().or_else(|| base.font.clone()),
            size: self.size.or(base.size),
            bold: self.bold.or(base.bold),
            italic: self.italic.or(base.italic),
            color: self.color.clone().or_else(|| base.color.clone()),
            fill: self.fill.clone().or_else(|| base.fill.clone()),
            align: self.align.or(base.align),
            spacing_before: self.spacing_before.or(base.spacing_before),
            spacing_after: self.spacing_after.or(base.spacing_after),
            borders: self.borders.clone().or_else(|| base.borders.clone()),
        }
    }

    /// Whether no field is set
    pub fn is_empty(&self) -> bool {
        *self == StyleAttrs::default()
    }
}
