//! Fallback strategies — arithmetic derivation and the sentinel scan.
//!
//! Engaged when header matching has nothing to bite on: the arithmetic
//! path still has a period ordinal to work from, the sentinel scan has
//! only the table itself. The sentinel scan is total — it is the
//! last-resort default that keeps the dashboard from going blank.

use crate::{
    error::{ResolveError, ResolveResult},
    schema::{SeriesLayout, SummaryLayout},
    table::{BlockPair, SeriesTable, SummaryTable},
    types::{ColumnIndex, PeriodOrdinal},
};

/// Column position of period `ordinal`'s data column, derived purely
/// from the block width: `ordinal * width + (width - 1)`.
pub fn fallback_position(ordinal: PeriodOrdinal, block_width: usize) -> ColumnIndex {
    ordinal * block_width + (block_width - 1)
}

/// Clamp a derived current position into `columns` and pair it with the
/// previous block. Shifts whole blocks down until `current` is in range;
/// fails with `OutOfRange` once `previous` would leave the table.
pub fn clamp_block(
    current: ColumnIndex,
    block_width: usize,
    columns: usize,
) -> ResolveResult<BlockPair> {
    let mut current = current as isize;
    let width = block_width as isize;

    while current >= columns as isize {
        current -= width;
    }
    let previous = current - width;

    if previous < 0 {
        return Err(ResolveError::OutOfRange {
            index: previous,
            columns,
        });
    }
    Ok(BlockPair::new(previous as ColumnIndex, current as ColumnIndex))
}

/// Degraded locator for the summary table: no label, no ordinal.
///
/// The first `'-'` in the first data row marks where population stopped;
/// the latest populated block ends one stride left of it. A fully
/// populated table falls back to the last column, snapped to the nearest
/// score column the schema knows about.
///
/// Total: never fails, always returns `previous < current`. Tables too
/// narrow to hold a pair get `(0, 1)`; callers screen those out before
/// indexing.
pub fn locate_by_sentinel(table: &SummaryTable, layout: &SummaryLayout) -> BlockPair {
    let columns = table.column_count();
    if columns < 2 {
        return BlockPair::new(0, 1);
    }

    let first_sentinel = table
        .grid()
        .first_row()
        .and_then(|row| row.iter().position(|cell| cell.is_sentinel()));

    let raw_current = match first_sentinel {
        Some(idx) => {
            log::info!("summary: sentinel scan, unpopulated frontier at column {idx}");
            idx as isize - layout.stride as isize
        }
        None => {
            let last = columns - 1;
            table
                .schema()
                .nearest_score_at_or_before(last)
                .unwrap_or(last) as isize
        }
    };

    let current = raw_current.clamp(1, columns as isize - 1) as ColumnIndex;
    let previous = current
        .saturating_sub(layout.stride)
        .min(current - 1);
    BlockPair::new(previous, current)
}

/// Degraded locator for the series table: the latest populated value
/// column, found by scanning the short-label row from the right.
///
/// Same totality contract as [`locate_by_sentinel`].
pub fn last_populated_series(table: &SeriesTable, layout: &SeriesLayout) -> BlockPair {
    let columns = table.column_count();
    if columns < 2 {
        return BlockPair::new(0, 1);
    }

    let raw_current = table
        .grid()
        .first_row()
        .and_then(|row| {
            row.iter()
                .enumerate()
                .rev()
                .find(|(col, cell)| *col > 0 && cell.is_populated())
                .map(|(col, _)| col)
        })
        .unwrap_or(columns - 1) as isize;

    let current = raw_current.clamp(1, columns as isize - 1) as ColumnIndex;
    let previous = current
        .saturating_sub(layout.unit_width)
        .min(current - 1);
    BlockPair::new(previous, current)
}
