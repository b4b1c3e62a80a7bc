//! Inferred column schema — one pass over the headers at load time.
//!
//! Neither source sheet declares column types; the repeating block
//! structure is implicit in header naming. Inferring an explicit
//! `TableSchema` once converts the fragile positional arithmetic into a
//! lookup the locators and fallbacks can share.

use crate::{
    month::MONTHS,
    types::{ColumnIndex, PeriodOrdinal},
};
use serde::{Deserialize, Serialize};

/// Header prefix the spreadsheet export stamps on value columns whose
/// original header cell was blank ("Unnamed: 7" style).
pub const OPAQUE_HEADER_PREFIX: &str = "Unnamed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Leading row-label column.
    RowLabel,
    /// Category-name column (summary table only).
    Category,
    /// Human-readable period header; anchors one period unit.
    YearMarker,
    /// Series data column, paired one to the right of its marker.
    Value,
    /// Raw risk score for one period.
    Score,
    /// Weighted risk score for one period.
    Weighted,
    /// Classification label for one period.
    Classification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub kind: ColumnKind,
    /// Which period unit this column belongs to, oldest first. `None`
    /// for the leading label/category columns.
    pub period: Option<PeriodOrdinal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSchema {
    columns: Vec<ColumnInfo>,
}

impl TableSchema {
    /// Series layout: row-label column, then (marker, value) pairs.
    /// A value column is recognized by its opaque export header.
    pub fn infer_series(headers: &[String]) -> Self {
        let mut columns = Vec::with_capacity(headers.len());
        let mut period: Option<PeriodOrdinal> = None;

        for (i, header) in headers.iter().enumerate() {
            let info = if i == 0 {
                ColumnInfo {
                    kind: ColumnKind::RowLabel,
                    period: None,
                }
            } else if header.starts_with(OPAQUE_HEADER_PREFIX) {
                ColumnInfo {
                    kind: ColumnKind::Value,
                    period,
                }
            } else {
                period = Some(period.map_or(0, |p| p + 1));
                ColumnInfo {
                    kind: ColumnKind::YearMarker,
                    period,
                }
            };
            columns.push(info);
        }

        Self { columns }
    }

    /// Summary layout: row-label column, optional category column, then
    /// (score, weighted, classification, marker) units — the data
    /// columns precede the year marker that closes their period. Data
    /// columns are recognized by header suffix, everything else
    /// month-named is a marker.
    pub fn infer_summary(headers: &[String]) -> Self {
        let mut columns = Vec::with_capacity(headers.len());
        // Markers close their period, so a data column belongs to the
        // marker not yet seen: ordinal == markers seen so far.
        let mut markers_seen: PeriodOrdinal = 0;
        let mut in_period_area = false;

        for (i, header) in headers.iter().enumerate() {
            let kind = if i == 0 {
                ColumnKind::RowLabel
            } else if header.ends_with("-score") {
                ColumnKind::Score
            } else if header.ends_with("-weighted") {
                ColumnKind::Weighted
            } else if header.ends_with("-classification") {
                ColumnKind::Classification
            } else if names_month(header) {
                ColumnKind::YearMarker
            } else if !in_period_area {
                ColumnKind::Category
            } else {
                // Stray unnamed column inside the period area; bind it
                // to the running period so positions stay aligned.
                ColumnKind::Classification
            };

            let period = match kind {
                ColumnKind::RowLabel | ColumnKind::Category => None,
                ColumnKind::YearMarker => {
                    in_period_area = true;
                    let p = markers_seen;
                    markers_seen += 1;
                    Some(p)
                }
                _ => {
                    in_period_area = true;
                    Some(markers_seen)
                }
            };
            columns.push(ColumnInfo { kind, period });
        }

        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn kind(&self, col: ColumnIndex) -> Option<ColumnKind> {
        self.columns.get(col).map(|c| c.kind)
    }

    pub fn period_of(&self, col: ColumnIndex) -> Option<PeriodOrdinal> {
        self.columns.get(col).and_then(|c| c.period)
    }

    /// Number of period units the headers describe.
    pub fn period_count(&self) -> usize {
        self.columns
            .iter()
            .filter_map(|c| c.period)
            .max()
            .map_or(0, |p| p + 1)
    }

    pub fn columns_of_kind(&self, kind: ColumnKind) -> Vec<ColumnIndex> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.kind == kind)
            .map(|(i, _)| i)
            .collect()
    }

    /// Closest score column at or left of `col`, if any.
    pub fn nearest_score_at_or_before(&self, col: ColumnIndex) -> Option<ColumnIndex> {
        self.columns
            .iter()
            .enumerate()
            .take(col.saturating_add(1).min(self.columns.len()))
            .rev()
            .find(|(_, c)| c.kind == ColumnKind::Score)
            .map(|(i, _)| i)
    }
}

/// True if the header carries a month name in either spelling.
fn names_month(header: &str) -> bool {
    MONTHS
        .iter()
        .any(|(abbr, full)| header.contains(full) || header.contains(abbr))
}

/// Physical width of one series period unit: year marker plus value.
///
/// Reverse-engineered from the fixed catalogue shape; configuration, not
/// a universal constant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeriesLayout {
    pub unit_width: usize,
}

impl Default for SeriesLayout {
    fn default() -> Self {
        Self { unit_width: 2 }
    }
}

/// Column stride the summary arithmetic walks between a period's score
/// column and its neighbors. Same caveat as [`SeriesLayout`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SummaryLayout {
    pub stride: usize,
}

impl Default for SummaryLayout {
    fn default() -> Self {
        Self { stride: 3 }
    }
}
