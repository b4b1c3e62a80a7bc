//! Summary (Table B) primary locator tests — last-match-wins and the
//! stride-3 score derivation.

use riskdash_core::{
    error::ResolveError,
    fixture,
    locator::locate_summary,
    schema::{ColumnKind, SummaryLayout},
};

fn layout() -> SummaryLayout {
    SummaryLayout::default()
}

/// Aug-2025 is the newest period: its marker is the last column and the
/// resolved current index is that period's raw-score column, with the
/// previous index exactly one stride left.
#[test]
fn newest_period_resolves_to_last_score_column() {
    let table = fixture::summary_table();
    let pair = locate_summary("Aug-2025", &table, &layout()).unwrap();

    // 2 leading columns + 13 periods of 4; marker closes the table.
    assert_eq!(table.column_count(), 54);
    assert_eq!(pair.current, 50, "raw-score column of the last period");
    assert_eq!(pair.previous, pair.current - 3);
    assert_eq!(table.schema().kind(pair.current), Some(ColumnKind::Score));
    assert_eq!(table.header(pair.current), Some("August-score"));
}

/// A bare month name collides with all four of the period's headers;
/// the last match is the year marker, so the derived score column is
/// still the right one.
#[test]
fn bare_month_name_takes_last_match() {
    let table = fixture::summary_table();
    let pair = locate_summary("April", &table, &layout()).unwrap();

    assert_eq!(table.header(pair.current), Some("April-score"));
    assert_eq!(pair.previous, pair.current - 3);
}

/// August appears in two different years; the later period wins.
#[test]
fn recurring_month_prefers_freshest_period() {
    let table = fixture::summary_table();
    let pair = locate_summary("Aug", &table, &layout()).unwrap();

    // Aug-2024 sits at the very start of the period area; Aug-2025 at
    // the end. Last match must pick 2025.
    assert_eq!(pair.current, 50);
}

/// The oldest period has no previous block; the locator refuses rather
/// than underflowing.
#[test]
fn oldest_period_fails_on_negative_previous() {
    let table = fixture::summary_table();
    let err = locate_summary("Aug-2024", &table, &layout()).unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { .. }));
}

/// Labels with no equivalent header fail with NotFound.
#[test]
fn unknown_and_empty_labels_are_not_found() {
    let table = fixture::summary_table();
    assert!(matches!(
        locate_summary("Sep-2025", &table, &layout()),
        Err(ResolveError::NotFound { .. })
    ));
    assert!(matches!(
        locate_summary("", &table, &layout()),
        Err(ResolveError::NotFound { .. })
    ));
}

/// The composite row helper recomputes what the sheet stores: the mean
/// of the nine category scores in the resolved current column.
#[test]
fn composite_score_matches_stored_row() {
    let table = fixture::summary_table();
    let pair = locate_summary("Aug-2025", &table, &layout()).unwrap();

    let recomputed = table.composite_score(pair.current).expect("scores populated");
    let stored = table
        .score(pair.current, riskdash_core::catalog::COMPOSITE_ROW)
        .and_then(|c| c.as_number())
        .expect("composite row populated");
    assert!(
        (recomputed - stored).abs() < 0.005,
        "recomputed {recomputed} vs stored {stored} (stored is rounded to 2dp)"
    );
}
