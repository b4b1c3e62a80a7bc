//! riskdash-core — temporal column alignment for the risk dashboard.
//!
//! Given a human-chosen period label ("Apr-2025") and the two uploaded
//! tables — the metric time series and the scored risk summary — work
//! out which physical columns hold that period's data and the period
//! immediately before it. Header naming is inconsistent (abbreviated
//! vs. full month names), the repeating block schemas are implicit, and
//! newer periods may not be populated yet, so resolution runs a fixed
//! chain of strategies and always produces something displayable.
//!
//! The crate is a pure library: no I/O, no state between calls, tables
//! are never written back. Loading and rendering belong to the hosting
//! application.

pub mod catalog;
pub mod error;
pub mod fallback;
pub mod fixture;
pub mod locator;
pub mod month;
pub mod resolver;
pub mod schema;
pub mod table;
pub mod types;

pub use error::{ResolveError, ResolveResult};
pub use resolver::{resolve, ResolvedPair};
pub use table::{BlockPair, Cell, Grid, SeriesTable, SummaryTable, SENTINEL};
