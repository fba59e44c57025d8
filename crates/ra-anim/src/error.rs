use ra_core::CoreError;
use ra_route::RouteError;
use thiserror::Error;

/// Failures reported by a [`FrameHost`][crate::FrameHost].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame host is detached")]
    Detached,

    #[error("frame host refused the request: {0}")]
    Refused(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] CoreError),

    #[error("route error: {0}")]
    Route(#[from] RouteError),

    #[error("frame registration failed: {0}")]
    Frame(#[from] FrameError),
}

pub type AnimResult<T> = Result<T, AnimError>;
