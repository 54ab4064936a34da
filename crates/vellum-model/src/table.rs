//! Tables, rows, cells, and the shape-checked table builder

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::attr::{Borders, VerticalAlign};
use crate::node::{Node, Paragraph};

/// Raised when a table's rows do not fit its declared column grid
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Table shape mismatch: {columns} column widths declared but a row spans {cells} grid columns")]
pub struct TableShapeError {
    /// Number of declared column widths
    pub columns: usize,
    /// Grid columns spanned by the widest row without per-cell widths
    pub cells: usize,
}

/// A table with a declared column grid
///
/// Constructed only through [`TableBuilder`], which enforces that rows
/// without per-cell widths fit the declared grid. The total width is the
/// sum of the column widths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    widths: Vec<u32>,
    rows: Vec<TableRow>,
    style_id: Option<String>,
}

impl Table {
    /// Start building a table over the given column widths, in twips
    pub fn builder(widths: Vec<u32>) -> TableBuilder {
        TableBuilder::new(widths)
    }

    /// The declared column widths, in twips
    pub fn widths(&self) -> &[u32] {
        &self.widths
    }

    /// The declared total width: the sum of the column widths
    pub fn total_width(&self) -> u32 {
        self.widths.iter().sum()
    }

    /// The table rows in order
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// The referenced table style, if any
    pub fn style_id(&self) -> Option<&str> {
        self.style_id.as_deref()
    }
}

/// A table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in this row
    pub cells: Vec<TableCell>,
    /// Whether this is a header row, repeated across pages
    pub is_header: bool,
}

impl TableRow {
    /// A regular row
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: false,
        }
    }

    /// A header row
    pub fn header(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: true,
        }
    }

    /// Grid columns this row spans: the sum of its cells' column spans
    pub fn grid_span(&self) -> usize {
        self.cells.iter().map(|c| c.colspan.max(1) as usize).sum()
    }

    /// Whether every cell declares an explicit width
    pub fn declares_widths(&self) -> bool {
        self.cells.iter().all(|c| c.width.is_some())
    }
}

/// A table cell holding nested content nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Nested content, typically a single paragraph
    pub content: Vec<Node>,
    /// Explicit cell width in twips, overriding the column grid
    pub width: Option<u32>,
    /// Grid columns this cell spans
    pub colspan: u32,
    /// Background fill as hex RGB
    pub fill: Option<String>,
    /// Border overrides
    pub borders: Option<Borders>,
    /// Vertical alignment of the cell content
    pub valign: Option<VerticalAlign>,
}

impl TableCell {
    /// A cell holding the given nodes
    pub fn new(content: Vec<Node>) -> Self {
        Self {
            content,
            width: None,
            colspan: 1,
            fill: None,
            borders: None,
            valign: None,
        }
    }

    /// A cell holding a single plain text paragraph
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![Node::Paragraph(Paragraph::text(text))])
    }

    /// An empty cell
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Set an explicit width in twips
    pub fn width(mut self, twips: u32) -> Self {
        self.width = Some(twips);
        self
    }

    /// Span multiple grid columns
    pub fn span(mut self, columns: u32) -> Self {
        self.colspan = columns;
        self
    }

    /// Set the background fill
    pub fn shaded(mut self, hex: impl Into<String>) -> Self {
        self.fill = Some(hex.into());
        self
    }

    /// Set border overrides
    pub fn bordered(mut self, borders: Borders) -> Self {
        self.borders = Some(borders);
        self
    }

    /// Set the vertical alignment
    pub fn valign(mut self, valign: VerticalAlign) -> Self {
        self.valign = Some(valign);
        self
    }
}

/// Builder assembling a [`Table`] and validating its shape
#[derive(Debug)]
pub struct TableBuilder {
    widths: Vec<u32>,
    rows: Vec<TableRow>,
    style_id: Option<String>,
}

impl TableBuilder {
    /// Start a table over the given column widths, in twips
    pub fn new(widths: Vec<u32>) -> Self {
        Self {
            widths,
            rows: Vec::new(),
            style_id: None,
        }
    }

    /// Reference a table style
    pub fn style(mut self, id: impl Into<String>) -> Self {
        self.style_id = Some(id.into());
        self
    }

    /// Append a regular row
    pub fn row(mut self, cells: Vec<TableCell>) -> Self {
        self.rows.push(TableRow::new(cells));
        self
    }

    /// Append a header row
    pub fn header_row(mut self, cells: Vec<TableCell>) -> Self {
        self.rows.push(TableRow::header(cells));
        self
    }

    /// Append a prebuilt row
    pub fn push_row(mut self, row: TableRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Finish the table, checking rows against the declared grid
    ///
    /// Rows where every cell has an explicit width are exempt from the
    /// grid. Among the rest, the widest row's grid span must equal the
    /// number of declared column widths; rows may individually span fewer
    /// columns.
    pub fn build(self) -> Result<Table, TableShapeError> {
        let widest = self
            .rows
            .iter()
            .filter(|row| !row.cells.is_empty() && !row.declares_widths())
            .map(TableRow::grid_span)
            .max();
        if let Some(cells) = widest {
            if cells != self.widths.len() {
                return Err(TableShapeError {
                    columns: self.widths.len(),
                    cells,
                });
            }
        }
        Ok(Table {
            widths: self.widths,
            rows: self.rows,
            style_id: self.style_id,
        })
    }
}
