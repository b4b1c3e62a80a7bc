//! Shared primitive types used across the resolver.

/// A physical column position within a table, 0-based.
pub type ColumnIndex = usize;

/// A data row position within a table, 0-based.
///
/// Row 0 of a series value column holds the short period label, not a
/// metric; catalogue row offsets count from the row below it.
pub type RowIndex = usize;

/// The ordinal position of a period within a table's chronological
/// sequence of period units, 0-based, oldest first.
pub type PeriodOrdinal = usize;
