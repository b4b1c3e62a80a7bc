//! Primary block locators — header-name matching for both tables.
//!
//! These are the first rung of the resolution chain. They fail with
//! `NotFound` rather than guessing; the facade recovers by falling
//! through to the arithmetic and sentinel strategies.

use crate::{
    error::{ResolveError, ResolveResult},
    month::labels_equivalent,
    schema::{ColumnKind, SummaryLayout},
    table::{BlockPair, SeriesTable, SummaryTable},
    types::ColumnIndex,
};

/// Find the series (Table A) year-marker column naming `selected`.
///
/// Scans left to right, skipping the row-label column and the opaque
/// value columns, and returns the first equivalent header. The paired
/// value column is one position to the right of the returned index.
pub fn locate_series(selected: &str, table: &SeriesTable) -> ResolveResult<ColumnIndex> {
    if selected.is_empty() {
        return Err(ResolveError::NotFound {
            label: selected.to_string(),
        });
    }

    for (col, header) in table.grid().headers().iter().enumerate() {
        if table.schema().kind(col) != Some(ColumnKind::YearMarker) {
            continue;
        }
        if labels_equivalent(selected, header) {
            log::debug!("series: '{selected}' matched header '{header}' at column {col}");
            return Ok(col);
        }
    }

    Err(ResolveError::NotFound {
        label: selected.to_string(),
    })
}

/// Find the summary (Table B) score-column pair for `selected`.
///
/// Collects every header equivalent to the label and keeps the last
/// match: month names recur every twelve periods and the table is
/// populated oldest-first, so a later match is the fresher period.
/// The current score column sits `stride` positions left of the match,
/// the previous period's score another `stride` left of that.
pub fn locate_summary(
    selected: &str,
    table: &SummaryTable,
    layout: &SummaryLayout,
) -> ResolveResult<BlockPair> {
    if selected.is_empty() {
        return Err(ResolveError::NotFound {
            label: selected.to_string(),
        });
    }

    let last_match = table
        .grid()
        .headers()
        .iter()
        .enumerate()
        .filter(|(_, header)| labels_equivalent(selected, header))
        .map(|(col, _)| col)
        .last()
        .ok_or_else(|| ResolveError::NotFound {
            label: selected.to_string(),
        })?;

    let current = last_match
        .checked_sub(layout.stride)
        .ok_or_else(|| ResolveError::NotFound {
            label: selected.to_string(),
        })?;
    let previous = current
        .checked_sub(layout.stride)
        .ok_or_else(|| ResolveError::NotFound {
            label: selected.to_string(),
        })?;

    log::debug!(
        "summary: '{selected}' matched column {last_match}, score pair ({previous}, {current})"
    );
    Ok(BlockPair::new(previous, current))
}
