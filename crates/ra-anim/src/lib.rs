//! `ra-anim` — frame-driven reveal of a sampled route.
//!
//! # Tick loop
//!
//! ```text
//! set_distance(d):
//!   sequence = sampler.sample(route, d)          // steps + 1 points
//!   state    = AnimationState::start(&sequence)  // revealed = [p0]
//!   publish path + marker; host.request_frame()
//!
//! on_frame(request):                             // once per paint
//!   ① Cancelled? → release, on_cancelled, stop
//!   ② state = state.tick(&sequence)              // progress += 1, reveal p[progress]
//!   ③ publish on_path(revealed), on_marker(position, heading)
//!   ④ progress < steps ? host.request_frame() : on_complete
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`state`]     | `AnimationState` — cursor + revealed points                 |
//! | [`marker`]    | `HeadingSample`, `MarkerAnimator`                           |
//! | [`host`]      | `FrameHost` trait, `FrameRequest`, `ManualFrameHost`        |
//! | [`cancel`]    | `CancelHandle`                                              |
//! | [`observer`]  | `AnimationObserver`, `NoopObserver`                         |
//! | [`scheduler`] | `FrameScheduler`, `Phase`                                   |
//! | [`animator`]  | `RouteAnimator` — route + sampler + scheduler               |
//! | [`builder`]   | `AnimatorBuilder`                                           |
//! | `geojson`     | GeoJSON artifacts (feature = `"geojson"`)                   |
//! | [`error`]     | `AnimError`, `FrameError`, `AnimResult<T>`                  |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `serde`   | Propagates serde derives to `ra-core` and `ra-route`.     |
//! | `geojson` | Enables the `geojson` module (pulls in `geojson`).        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ra_anim::{AnimatorBuilder, ManualFrameHost, NoopObserver};
//!
//! let mut animator = AnimatorBuilder::from_lon_lat(&[(0.0, 0.0), (0.0, 1.0)]).build()?;
//! let mut host = ManualFrameHost::new();
//! animator.set_distance(40.0, &mut host, &mut NoopObserver)?;
//! animator.drive(&mut host, &mut NoopObserver, None)?;
//! ```

pub mod animator;
pub mod builder;
pub mod cancel;
pub mod error;
pub mod host;
pub mod marker;
pub mod observer;
pub mod scheduler;
pub mod state;

#[cfg(feature = "geojson")]
pub mod geojson;


pub use animator::RouteAnimator;
pub use builder::AnimatorBuilder;
pub use cancel::CancelHandle;
pub use error::{AnimError, AnimResult, FrameError};
pub use host::{FrameHost, FrameRequest, ManualFrameHost};
pub use marker::{HeadingSample, MarkerAnimator};
pub use observer::{AnimationObserver, NoopObserver};
pub use scheduler::{FrameScheduler, Phase};
pub use state::AnimationState;
