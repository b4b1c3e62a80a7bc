//! Series (Table A) primary locator tests against the 13-month fixture.

use riskdash_core::{
    error::ResolveError,
    fixture,
    locator::locate_series,
    month::labels_equivalent,
    schema::ColumnKind,
};

/// Every label the date selector can offer resolves to a marker column
/// whose header is equivalent to it, with the paired value column still
/// inside the table.
#[test]
fn every_fixture_month_locates() {
    let table = fixture::series_table();
    for label in fixture::month_labels() {
        let col = locate_series(&label, &table).expect("fixture month should locate");
        let header = table.header(col).expect("header in range");
        assert!(
            labels_equivalent(&label, header),
            "{label} vs header {header}"
        );
        assert!(
            col + 1 < table.column_count(),
            "value column for {label} out of range"
        );
        assert_eq!(table.schema().kind(col), Some(ColumnKind::YearMarker));
        assert_eq!(table.schema().kind(col + 1), Some(ColumnKind::Value));
    }
}

/// Apr-2025 is the ninth period: marker at column 17, value at 18,
/// two columns right of the Mar-2025 pair.
#[test]
fn april_lands_two_right_of_march() {
    let table = fixture::series_table();

    let april = locate_series("Apr-2025", &table).unwrap();
    let march = locate_series("Mar-2025", &table).unwrap();

    assert_eq!(april, 17);
    assert_eq!(march, 15);
    assert_eq!(april, march + 2, "adjacent periods are one 2-column unit apart");
}

/// The short label stored in row 0 of the value column agrees with the
/// marker header it is paired with.
#[test]
fn value_column_carries_short_label() {
    let table = fixture::series_table();
    let col = locate_series("Apr-2025", &table).unwrap();
    assert_eq!(table.short_label(col + 1), Some("Apr"));
}

/// A period outside the loaded range fails with NotFound.
#[test]
fn unknown_period_is_not_found() {
    let table = fixture::series_table();
    let err = locate_series("Sep-2025", &table).unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { .. }));
}

/// The empty label fails with NotFound rather than matching everything.
#[test]
fn empty_label_is_not_found() {
    let table = fixture::series_table();
    assert!(matches!(
        locate_series("", &table),
        Err(ResolveError::NotFound { .. })
    ));
}

/// Opaque export headers are never offered as period matches.
#[test]
fn opaque_value_headers_are_skipped() {
    let table = fixture::series_table();
    assert!(matches!(
        locate_series("Unnamed: 2", &table),
        Err(ResolveError::NotFound { .. })
    ));
}
