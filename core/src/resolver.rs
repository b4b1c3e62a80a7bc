//! Resolved extraction facade — the one entry point the presentation
//! layer calls.
//!
//! STRATEGY ORDER (fixed, documented, never reordered):
//!   1. Header-name match            (locator, needs a period label)
//!   2. Arithmetic from the ordinal  (fallback, needs the label to sit
//!      somewhere in the series header sequence)
//!   3. Sentinel / last-populated scan (total, needs only the table)
//!
//! `NotFound` and `OutOfRange` are recovered here by moving down the
//! chain; they never reach the caller. A missing table degrades that
//! side of the pair to "no data" — the facade always hands back
//! something displayable.

use crate::{
    fallback::{clamp_block, fallback_position, last_populated_series, locate_by_sentinel},
    locator::{locate_series, locate_summary},
    schema::{SeriesLayout, SummaryLayout},
    table::{BlockPair, SeriesTable, SummaryTable},
    types::PeriodOrdinal,
};
use serde::{Deserialize, Serialize};

/// The resolver's answer: a previous/current column pair per table.
/// `None` on a side means that table cannot produce a pair at all and
/// the renderer should show its neutral placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPair {
    /// Label the resolution was asked for, if any.
    pub label: Option<String>,
    pub series: Option<BlockPair>,
    pub summary: Option<BlockPair>,
}

impl ResolvedPair {
    pub fn no_data() -> Self {
        Self {
            label: None,
            series: None,
            summary: None,
        }
    }

    pub fn has_data(&self) -> bool {
        self.series.is_some() || self.summary.is_some()
    }
}

/// Resolve `selected` against both tables with the default layouts.
pub fn resolve(
    selected: Option<&str>,
    series: Option<&SeriesTable>,
    summary: Option<&SummaryTable>,
) -> ResolvedPair {
    resolve_with_layouts(
        selected,
        series,
        summary,
        &SeriesLayout::default(),
        &SummaryLayout::default(),
    )
}

/// Resolve with explicit layout configuration. Pure: reads both tables,
/// mutates nothing, produces a fresh pair every call.
pub fn resolve_with_layouts(
    selected: Option<&str>,
    series: Option<&SeriesTable>,
    summary: Option<&SummaryTable>,
    series_layout: &SeriesLayout,
    summary_layout: &SummaryLayout,
) -> ResolvedPair {
    // Ordinal of the selected period within the series header sequence,
    // shared by both arithmetic fallbacks.
    let ordinal: Option<PeriodOrdinal> = match (selected, series) {
        (Some(label), Some(table)) => table.period_ordinal_of(label),
        _ => None,
    };

    if series.is_none() {
        log::warn!("resolve: series table missing");
    }
    if summary.is_none() {
        log::warn!("resolve: summary table missing");
    }

    // A table too narrow to hold a previous/current pair degrades the
    // same way a missing table does.
    let series_pair = series
        .filter(|t| t.column_count() >= 2)
        .map(|table| resolve_series(selected, ordinal, table, series_layout));
    let summary_pair = summary
        .filter(|t| t.column_count() >= 2)
        .map(|table| resolve_summary(selected, ordinal, table, summary_layout));

    ResolvedPair {
        label: selected.map(str::to_string),
        series: series_pair,
        summary: summary_pair,
    }
}

fn resolve_series(
    selected: Option<&str>,
    ordinal: Option<PeriodOrdinal>,
    table: &SeriesTable,
    layout: &SeriesLayout,
) -> BlockPair {
    let columns = table.column_count();

    if let Some(label) = selected {
        if let Ok(marker) = locate_series(label, table) {
            let current = marker + 1;
            // The oldest period has no previous value column; that is an
            // out-of-range condition handled by the chain, not an error.
            if current < columns && current >= 1 + layout.unit_width {
                return BlockPair::new(current - layout.unit_width, current);
            }
            log::info!("series: header match for '{label}' has no previous block, falling back");
        }
    }

    if let Some(ordinal) = ordinal {
        // +1 for the leading row-label column; a previous index of 0
        // would point at that column, so it falls through instead.
        if let Ok(pair) = clamp_block(
            fallback_position(ordinal, layout.unit_width) + 1,
            layout.unit_width,
            columns,
        ) {
            if pair.previous >= 1 {
                log::info!("series: arithmetic fallback from ordinal {ordinal}");
                return pair;
            }
        }
    }

    last_populated_series(table, layout)
}

fn resolve_summary(
    selected: Option<&str>,
    ordinal: Option<PeriodOrdinal>,
    table: &SummaryTable,
    layout: &SummaryLayout,
) -> BlockPair {
    if let Some(label) = selected {
        match locate_summary(label, table, layout) {
            Ok(pair) if pair.current < table.column_count() => return pair,
            Ok(_) | Err(_) => {}
        }
    }

    if let Some(ordinal) = ordinal {
        if let Ok(pair) = clamp_block(
            fallback_position(ordinal, layout.stride),
            layout.stride,
            table.column_count(),
        ) {
            log::info!("summary: arithmetic fallback from ordinal {ordinal}");
            return pair;
        }
    }

    locate_by_sentinel(table, layout)
}
