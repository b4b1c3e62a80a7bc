//! Arithmetic fallback and sentinel-scan tests — the strategies that
//! run when header matching has nothing to work with.

use riskdash_core::{
    error::ResolveError,
    fallback::{clamp_block, fallback_position, last_populated_series, locate_by_sentinel},
    fixture,
    schema::{SeriesLayout, SummaryLayout},
    table::{Cell, Grid, SeriesTable, SummaryTable},
};

fn layout() -> SummaryLayout {
    SummaryLayout::default()
}

/// The pure position formula: ordinal * width + (width - 1).
#[test]
fn fallback_position_formula() {
    assert_eq!(fallback_position(0, 3), 2);
    assert_eq!(fallback_position(4, 3), 14);
    assert_eq!(fallback_position(0, 2), 1);
    assert_eq!(fallback_position(12, 2), 25);
}

/// Clamped blocks always satisfy previous = current - width and
/// 0 <= previous < current < columns.
#[test]
fn clamped_blocks_stay_ordered_and_in_bounds() {
    let columns = 54;
    for ordinal in 1..20 {
        let pair = clamp_block(fallback_position(ordinal, 3), 3, columns)
            .expect("ordinal >= 1 should clamp into range");
        assert_eq!(pair.previous, pair.current - 3);
        assert!(pair.current < columns, "ordinal {ordinal}");
    }
}

/// A current position far past the table shifts down whole blocks.
#[test]
fn clamp_shifts_down_in_block_steps() {
    let pair = clamp_block(100, 3, 54).unwrap();
    assert_eq!(pair.current, 52);
    assert_eq!(pair.previous, 49);
}

/// Once the previous block would leave the table, clamping fails.
#[test]
fn clamp_fails_when_previous_underflows() {
    assert!(matches!(
        clamp_block(2, 3, 54),
        Err(ResolveError::OutOfRange { .. })
    ));
    assert!(matches!(
        clamp_block(1, 2, 4),
        Err(ResolveError::OutOfRange { .. })
    ));
}

/// Fully populated summary: no sentinel in the first data row, so the
/// scan falls back to the last column snapped to the newest score
/// column.
#[test]
fn sentinel_scan_fully_populated_takes_newest_score() {
    let table = fixture::summary_table();
    let pair = locate_by_sentinel(&table, &layout());

    assert_eq!(pair.current, 50, "raw-score column of Aug-2025");
    assert_eq!(pair.previous, 47);
}

/// A trailing all-sentinel period marks the unpopulated frontier; the
/// scan must land inside the last populated period, not the sentinel
/// one.
#[test]
fn sentinel_scan_skips_unpopulated_tail() {
    let table = fixture::summary_table_unpopulated_tail();
    let pair = locate_by_sentinel(&table, &layout());

    // Sentinel frontier at column 54; one stride back is still within
    // the Aug-2025 unit (columns 50..=53).
    assert_eq!(pair.current, 51);
    assert_eq!(pair.previous, pair.current - 3);
    assert!((50..=53).contains(&pair.current));
}

/// The scan is total: headerless-data, single-column and two-column
/// tables all yield previous < current without panicking.
#[test]
fn sentinel_scan_never_panics() {
    let no_rows = SummaryTable::from_grid(Grid::new(vec![
        "No".into(),
        "Jenis Risiko".into(),
        "April-score".into(),
        "April-weighted".into(),
        "April-classification".into(),
        "April-2025".into(),
    ]));
    let pair = locate_by_sentinel(&no_rows, &layout());
    assert!(pair.previous < pair.current);
    assert_eq!(pair.current, 2, "snaps to the only score column");

    let single = SummaryTable::from_grid(Grid::new(vec!["No".into()]));
    let pair = locate_by_sentinel(&single, &layout());
    assert!(pair.previous < pair.current);

    let mut all_sentinel = Grid::new(vec!["No".into(), "April-score".into(), "April-2025".into()]);
    all_sentinel.push_row(vec![Cell::sentinel(), Cell::sentinel(), Cell::sentinel()]);
    let pair = locate_by_sentinel(&SummaryTable::from_grid(all_sentinel), &layout());
    assert!(pair.previous < pair.current);
}

/// Series degraded scan finds the newest populated value column.
#[test]
fn last_populated_series_takes_newest_pair() {
    let table = fixture::series_table();
    let pair = last_populated_series(&table, &SeriesLayout::default());

    assert_eq!(pair.current, 26, "value column of Aug-2025");
    assert_eq!(pair.previous, 24, "value column of Jul-2025");
}

/// Series scan tolerates a table with no data rows.
#[test]
fn last_populated_series_without_rows() {
    let table = SeriesTable::from_grid(Grid::new(vec![
        "Parameter".into(),
        "Aug-2024".into(),
        "Unnamed: 2".into(),
    ]));
    let pair = last_populated_series(&table, &SeriesLayout::default());
    assert!(pair.previous < pair.current);
    assert_eq!(pair.current, 2);
}
