//! `ra-core` — foundational types for the `route_anim` marker animator.
//!
//! This crate is a dependency of every other `ra-*` crate.  It has no `ra-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`geo`]     | `Coordinate`, great-circle distance/bearing/interpolation  |
//! | [`units`]   | `DistanceUnit` and Earth-radius conversions                |
//! | [`config`]  | `AnimConfig`, `OverrunPolicy`                              |
//! | [`error`]   | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AnimConfig, OverrunPolicy, DEFAULT_STEPS};
pub use error::{CoreError, CoreResult};
pub use geo::Coordinate;
pub use units::DistanceUnit;
