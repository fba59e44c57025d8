//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Configuration and input errors shared by every `ra-*` crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("step count must be at least 1 (got {0})")]
    InvalidSteps(u32),

    #[error("distance traveled must be finite and non-negative (got {0})")]
    InvalidDistance(f64),
}

/// Shorthand result type for `ra-core`.
pub type CoreResult<T> = Result<T, CoreError>;
