//! In-memory table model for the two dashboard sources.
//!
//! Both tables arrive pre-loaded from the hosting application and are
//! never written back. `Grid` is the raw rectangle; `SeriesTable` and
//! `SummaryTable` are the typed views with an inferred column schema
//! attached at construction, so downstream code looks kinds up instead
//! of re-deriving block arithmetic from scratch.

use crate::{
    catalog::RISK_CATEGORY_COUNT,
    month::labels_equivalent,
    schema::{ColumnKind, TableSchema},
    types::{ColumnIndex, PeriodOrdinal, RowIndex},
};
use serde::{Deserialize, Serialize};

/// Marker for a cell whose data has not arrived yet.
pub const SENTINEL: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    pub fn sentinel() -> Self {
        Cell::Text(SENTINEL.to_string())
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Cell::Text(s) if s == SENTINEL)
    }

    /// True for a cell that carries real data.
    pub fn is_populated(&self) -> bool {
        !matches!(self, Cell::Empty) && !self.is_sentinel()
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A rectangular grid: one header row plus data rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a data row. Panics on width mismatch — loading code must
    /// hand over rectangular data.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        assert_eq!(
            row.len(),
            self.headers.len(),
            "row width {} does not match {} headers",
            row.len(),
            self.headers.len()
        );
        self.rows.push(row);
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn header(&self, col: ColumnIndex) -> Option<&str> {
        self.headers.get(col).map(String::as_str)
    }

    pub fn cell(&self, row: RowIndex, col: ColumnIndex) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn first_row(&self) -> Option<&[Cell]> {
        self.rows.first().map(Vec::as_slice)
    }
}

/// Table A — the time-series table. Column 0 is the parameter-name
/// column; every following pair is (year marker, value). Row 0 of a
/// value column holds the short period label and is skipped when
/// indexing metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesTable {
    grid: Grid,
    schema: TableSchema,
}

impl SeriesTable {
    pub fn from_grid(grid: Grid) -> Self {
        let schema = TableSchema::infer_series(grid.headers());
        Self { grid, schema }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn column_count(&self) -> usize {
        self.grid.column_count()
    }

    pub fn header(&self, col: ColumnIndex) -> Option<&str> {
        self.grid.header(col)
    }

    /// Year-marker columns in chronological order: (position, header).
    pub fn period_columns(&self) -> Vec<(ColumnIndex, &str)> {
        self.schema
            .columns_of_kind(ColumnKind::YearMarker)
            .into_iter()
            .filter_map(|c| self.grid.header(c).map(|h| (c, h)))
            .collect()
    }

    /// Ordinal of the period whose marker header matches `label`.
    pub fn period_ordinal_of(&self, label: &str) -> Option<PeriodOrdinal> {
        self.period_columns()
            .iter()
            .position(|(_, header)| labels_equivalent(label, header))
    }

    /// Metric value for catalogue row `row` in value column `col`.
    /// Grid row 0 is the short-label row, hence the shift.
    pub fn metric(&self, col: ColumnIndex, row: RowIndex) -> Option<&Cell> {
        self.grid.cell(row + 1, col)
    }

    /// The short period label stored in row 0 of a value column.
    pub fn short_label(&self, col: ColumnIndex) -> Option<&str> {
        self.grid.cell(0, col).and_then(Cell::as_text)
    }
}

/// Table B — the scored-summary table. Column 0 is a row-label column,
/// column 1 (if present) names the risk category; each period then
/// contributes (score, weighted, classification, year marker) — the
/// raw score sits three columns left of the marker that names the
/// period. Rows: one per category, one blank separator, one trailing
/// composite row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryTable {
    grid: Grid,
    schema: TableSchema,
}

impl SummaryTable {
    pub fn from_grid(grid: Grid) -> Self {
        let schema = TableSchema::infer_summary(grid.headers());
        Self { grid, schema }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn column_count(&self) -> usize {
        self.grid.column_count()
    }

    pub fn header(&self, col: ColumnIndex) -> Option<&str> {
        self.grid.header(col)
    }

    pub fn category_column(&self) -> Option<ColumnIndex> {
        self.schema.columns_of_kind(ColumnKind::Category).first().copied()
    }

    /// Score cell for one category row in column `col`.
    pub fn score(&self, col: ColumnIndex, row: RowIndex) -> Option<&Cell> {
        self.grid.cell(row, col)
    }

    /// Arithmetic mean of the populated category scores in column `col`.
    ///
    /// This recomputes what the trailing composite row stores, so the
    /// two can be cross-checked.
    pub fn composite_score(&self, col: ColumnIndex) -> Option<f64> {
        let scores: Vec<f64> = (0..RISK_CATEGORY_COUNT)
            .filter_map(|row| self.grid.cell(row, col).and_then(Cell::as_number))
            .collect();
        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }
}

/// A resolved block reference: previous/current column positions into
/// one table. Produced fresh on every resolution, never cached.
///
/// Invariant: `previous < current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPair {
    pub previous: ColumnIndex,
    pub current: ColumnIndex,
}

impl BlockPair {
    pub fn new(previous: ColumnIndex, current: ColumnIndex) -> Self {
        debug_assert!(previous < current, "block pair {previous} >= {current}");
        Self { previous, current }
    }
}
