//! `ra-route` — route geometry, distance sampling, and heading lookup.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`route`]   | `RouteModel` — validated polyline with cached arc lengths    |
//! | [`sampler`] | `DistanceSampler`, `SampledSequence`, free fn `sample`       |
//! | [`heading`] | `heading_pair`, `heading_at` — final-index-safe bearings     |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                               |
//!
//! # Sampling model
//!
//! A distance-traveled value `d` and a step count `n` produce exactly
//! `n + 1` points, the `i`-th lying `i · d / n` along the route.  The loop is
//! index-driven, so `d == 0` simply repeats the start coordinate.  Queries
//! past the end of the route are folded back by an
//! [`OverrunPolicy`][ra_core::OverrunPolicy] (clamp by default).

pub mod error;
pub mod heading;
pub mod route;
pub mod sampler;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use heading::{heading_at, heading_pair};
pub use route::RouteModel;
pub use sampler::{sample, DistanceSampler, SampledSequence};
