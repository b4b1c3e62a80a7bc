//! Period label equivalence — abbreviated vs. full month names.
//!
//! Upstream sheets are inconsistent about month spelling: the date
//! selector hands out "Apr-2025" while summary headers say "April-2025".
//! Equivalence is defined by a closed 12-entry abbreviation table; no
//! normalization of year format, separators, or case is attempted.

/// Abbreviation ↔ full name, calendar order.
pub const MONTHS: [(&str, &str); 12] = [
    ("Jan", "January"),
    ("Feb", "February"),
    ("Mar", "March"),
    ("Apr", "April"),
    ("May", "May"),
    ("Jun", "June"),
    ("Jul", "July"),
    ("Aug", "August"),
    ("Sep", "September"),
    ("Oct", "October"),
    ("Nov", "November"),
    ("Dec", "December"),
];

/// True if `selected` names the same period as `header`.
///
/// Matches on literal substring containment in either direction, then
/// retries with the month abbreviation in `selected` swapped for its full
/// name (and vice versa). Returns on the first hit.
pub fn labels_equivalent(selected: &str, header: &str) -> bool {
    if selected.is_empty() {
        return false;
    }

    if header.contains(selected) || selected.contains(header) {
        return true;
    }

    for (abbr, full) in MONTHS {
        // "May" abbreviates to itself; the substitutions are no-ops and
        // the substring test above has already decided.
        if selected.contains(abbr) && header.contains(full) {
            let expanded = selected.replace(abbr, full);
            if header.contains(&expanded) {
                return true;
            }
        }
        if selected.contains(full) && header.contains(abbr) {
            let abbreviated = selected.replace(full, abbr);
            if header.contains(&abbreviated) {
                return true;
            }
        }
    }

    false
}
