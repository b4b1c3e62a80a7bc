//! Period label equivalence tests — abbreviated vs. full month names.

use riskdash_core::month::{labels_equivalent, MONTHS};

/// Every abbreviation/full-name pair is equivalent in both directions
/// when wrapped in the usual "-YYYY" label shape.
#[test]
fn all_twelve_months_match_both_directions() {
    for (abbr, full) in MONTHS {
        let short = format!("{abbr}-2025");
        let long = format!("{full}-2025");
        assert!(
            labels_equivalent(&short, &long),
            "{short} should match {long}"
        );
        assert!(
            labels_equivalent(&long, &short),
            "{long} should match {short}"
        );
    }
}

/// Identical labels match via the plain substring test.
#[test]
fn literal_match() {
    assert!(labels_equivalent("Apr-2025", "Apr-2025"));
    assert!(labels_equivalent("Apr", "April-2025"));
}

/// Substring containment works in either direction.
#[test]
fn header_contained_in_selected() {
    assert!(labels_equivalent("April-2025 (final)", "April-2025"));
}

/// Different months never match, whatever the spelling.
#[test]
fn different_months_do_not_match() {
    assert!(!labels_equivalent("Apr-2025", "March-2025"));
    assert!(!labels_equivalent("March-2025", "April-2025"));
    assert!(!labels_equivalent("Jun-2025", "July-2025"));
}

/// Same month, different year: no match.
#[test]
fn different_years_do_not_match() {
    assert!(!labels_equivalent("Apr-2025", "April-2024"));
    assert!(!labels_equivalent("August-2024", "Aug-2025"));
}

/// An empty selection can never match a header.
#[test]
fn empty_label_never_matches() {
    assert!(!labels_equivalent("", "April-2025"));
}

/// "May" is its own abbreviation; the pair still behaves.
#[test]
fn may_is_its_own_abbreviation() {
    assert!(labels_equivalent("May-2025", "May-2025"));
    assert!(!labels_equivalent("May-2025", "May-2024"));
}
