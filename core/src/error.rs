//! Errors the locator and fallback layers raise.
//!
//! Both variants are recoverable by construction: the facade catches
//! them and moves down the strategy chain, so they surface to callers
//! only through the standalone locator functions.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("No column header matches period label '{label}'")]
    NotFound { label: String },

    #[error("Derived column index {index} outside table bounds ({columns} columns)")]
    OutOfRange { index: isize, columns: usize },
}

pub type ResolveResult<T> = Result<T, ResolveError>;
