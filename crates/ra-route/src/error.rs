//! Route-subsystem error type.

use thiserror::Error;

use ra_core::{Coordinate, CoreError};

/// Errors produced by `ra-route`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouteError {
    #[error("route needs at least 2 coordinates (got {points})")]
    InvalidRoute { points: usize },

    #[error("route vertex {index} is not a finite coordinate: {coord}")]
    NonFiniteVertex { index: usize, coord: Coordinate },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type RouteResult<T> = Result<T, RouteError>;
