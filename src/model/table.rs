//! Table types.

use super::TextStyle;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A table structure.
///
/// A table always has at least one row and every span fits the table;
/// both are checked on construction and on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct TableContent {
    rows: Vec<TableRow>,

    /// Column widths in percent (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    column_widths: Option<Vec<f32>>,
}

#[derive(Deserialize)]
struct RawTable {
    rows: Vec<TableRow>,
    #[serde(default)]
    column_widths: Option<Vec<f32>>,
}

impl TryFrom<RawTable> for TableContent {
    type Error = Error;

    fn try_from(raw: RawTable) -> Result<Self> {
        let table = Self::new(raw.rows)?;
        Ok(match raw.column_widths {
            Some(widths) => table.with_column_widths(widths),
            None => table,
        })
    }
}

impl TableContent {
    /// Create a table, rejecting zero rows and spans that overrun the table.
    pub fn new(rows: Vec<TableRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::EmptyTable);
        }

        let row_count = rows.len();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.cells.iter().enumerate() {
                if !cell.span_fits(r, row_count) {
                    return Err(Error::InvalidSpan { row: r, cell: c });
                }
            }
        }

        Ok(Self {
            rows,
            column_widths: None,
        })
    }

    /// Create a table whose first row is a header, from text values.
    pub fn with_header<S, R>(header: impl IntoIterator<Item = S>, body: R) -> Result<Self>
    where
        S: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: Into<String>,
    {
        let mut rows = vec![TableRow::from_strings(header).as_header()];
        rows.extend(body.into_iter().map(TableRow::from_strings));
        Self::new(rows)
    }

    /// Set column widths and return self.
    pub fn with_column_widths(mut self, widths: Vec<f32>) -> Self {
        self.column_widths = Some(widths);
        self
    }

    /// All rows in order.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Edit one cell in place; row structure stays fixed.
    ///
    /// An edit that leaves the cell with an invalid span is rolled back.
    pub fn update_cell<F>(&mut self, row: usize, cell: usize, edit: F) -> Result<()>
    where
        F: FnOnce(&mut TableCell),
    {
        let row_count = self.rows.len();
        let target = self
            .rows
            .get_mut(row)
            .and_then(|r| r.cells.get_mut(cell))
            .ok_or(Error::CellOutOfRange { row, cell })?;

        let before = target.clone();
        edit(target);
        if !target.span_fits(row, row_count) {
            *target = before;
            return Err(Error::InvalidSpan { row, cell });
        }
        Ok(())
    }

    /// Column widths, if set.
    pub fn column_widths(&self) -> Option<&[f32]> {
        self.column_widths.as_deref()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on the widest row).
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.cells.iter().map(|c| c.colspan as usize).sum::<usize>())
            .max()
            .unwrap_or(0)
    }

    /// The header row, if one is flagged.
    pub fn header(&self) -> Option<&TableRow> {
        self.rows.iter().find(|r| r.is_header)
    }

    /// Check if the table has merged cells.
    pub fn has_merged_cells(&self) -> bool {
        self.rows
            .iter()
            .flat_map(|r| &r.cells)
            .any(TableCell::is_merged)
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(TableRow::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,

    /// Whether this is a header row
    #[serde(default)]
    pub is_header: bool,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: false,
        }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Flag the row as header and return self.
    pub fn as_header(mut self) -> Self {
        self.is_header = true;
        self
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell text
    pub text: String,

    /// Number of columns this cell spans
    #[serde(default = "one")]
    pub colspan: u8,

    /// Number of rows this cell spans
    #[serde(default = "one")]
    pub rowspan: u8,

    /// Cell style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,

    /// Background color (hex format)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// Vertical alignment
    #[serde(default)]
    pub vertical_alignment: VerticalAlignment,
}

fn one() -> u8 {
    1
}

impl TableCell {
    /// Check that both spans are at least 1 and the rowspan ends within the table.
    fn span_fits(&self, row: usize, row_count: usize) -> bool {
        self.colspan > 0 && self.rowspan > 0 && self.rowspan as usize <= row_count - row
    }

    /// Create a new cell with text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            colspan: 1,
            rowspan: 1,
            style: None,
            background: None,
            vertical_alignment: VerticalAlignment::Top,
        }
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self::text("")
    }

    /// Set colspan and return self.
    pub fn colspan(mut self, span: u8) -> Self {
        self.colspan = span;
        self
    }

    /// Set rowspan and return self.
    pub fn rowspan(mut self, span: u8) -> Self {
        self.rowspan = span;
        self
    }

    /// Set style and return self.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set background and return self.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Set vertical alignment and return self.
    pub fn valign(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    /// Check if this cell spans multiple rows or columns.
    pub fn is_merged(&self) -> bool {
        self.rowspan > 1 || self.colspan > 1
    }
}

/// Vertical alignment for table cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    /// Top alignment
    #[default]
    Top,
    /// Middle/center alignment
    Middle,
    /// Bottom alignment
    Bottom,
}

impl VerticalAlignment {
    /// CSS `vertical-align` value.
    pub fn as_css(&self) -> &'static str {
        match self {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Middle => "middle",
            VerticalAlignment::Bottom => "bottom",
        }
    }
}
