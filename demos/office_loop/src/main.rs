//! office_loop — animate a marker around a five-office sales loop.
//!
//! Usage: `office_loop [CONFIG.json] [DISTANCE]`
//!
//! `CONFIG.json` holds an `AnimConfig` (`steps`, `unit`, `overrun`); missing
//! keys take their defaults.  `DISTANCE` is in the configured unit.  Set
//! `RUST_LOG=debug` (or `trace`) to see the scheduler's own events.

mod route;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ra_anim::{
    AnimationObserver, AnimationState, AnimatorBuilder, HeadingSample, ManualFrameHost,
};
use ra_anim::geojson::{marker_feature_collection, path_feature_collection};
use ra_core::{AnimConfig, Coordinate};
use ra_route::SampledSequence;

use route::{office_loop, stop_names};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_DISTANCE: f64 = 2_500.0;
/// Distance fed partway through the first run, forcing a restart.
const UPDATED_DISTANCE: f64 = 4_800.0;
/// Frames driven before the distance update arrives.
const FRAMES_BEFORE_UPDATE: u64 = 120;
const LOG_EVERY_FRAMES: usize = 100;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs a marker line every `every` frames and counts what it saw.
struct LoggingObserver {
    every:     usize,
    frames:    usize,
    runs:      usize,
    cancelled: usize,
}

impl LoggingObserver {
    fn new(every: usize) -> Self {
        Self { every, frames: 0, runs: 0, cancelled: 0 }
    }
}

/// Frame 0 and every `every`-th frame after it.
fn is_logged_frame(frame: usize, every: usize) -> bool {
    every > 0 && frame % every == 0
}

impl AnimationObserver for LoggingObserver {
    fn on_start(&mut self, sequence: &SampledSequence) {
        self.runs += 1;
        self.frames = 0;
        info!(
            run = self.runs,
            distance = sequence.distance(),
            unit = %sequence.unit(),
            samples = sequence.len(),
            "run started"
        );
    }

    fn on_path(&mut self, _path: &[Coordinate]) {
        self.frames += 1;
    }

    fn on_marker(&mut self, marker: HeadingSample) {
        // `on_path` has already counted this frame.
        let frame = self.frames.saturating_sub(1);
        if is_logged_frame(frame, self.every) {
            info!(
                frame,
                position = %marker.position,
                bearing = format_args!("{:.1}", marker.bearing_degrees),
                "marker"
            );
        }
    }

    fn on_complete(&mut self, state: &AnimationState) {
        info!(progress = state.progress(), points = state.revealed().len(), "run complete");
    }

    fn on_cancelled(&mut self, state: &AnimationState) {
        self.cancelled += 1;
        info!(
            progress = state.progress(),
            done = format_args!("{:.0}%", state.fraction_complete() * 100.0),
            "run cancelled"
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config(path: &Path) -> Result<AnimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: AnimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None       => AnimConfig::default(),
    };
    let distance = match args.next() {
        Some(raw) => raw.parse::<f64>().with_context(|| format!("invalid distance {raw:?}"))?,
        None      => DEFAULT_DISTANCE,
    };

    // 1. Route + animator.
    let stops: Vec<&str> = stop_names().collect();
    let mut animator = AnimatorBuilder::new(office_loop()).config(config.clone()).build()?;
    info!(
        stops = %stops.join(" → "),
        length = format_args!("{:.1}", animator.route().length(config.unit)),
        unit = %config.unit,
        steps = config.steps,
        overrun = ?config.overrun,
        "office loop ready"
    );

    // 2. First distance, driven partway.
    let mut host = ManualFrameHost::new();
    let mut obs = LoggingObserver::new(LOG_EVERY_FRAMES);
    let t0 = Instant::now();
    animator.set_distance(distance, &mut host, &mut obs)?;
    animator.drive(&mut host, &mut obs, Some(FRAMES_BEFORE_UPDATE))?;

    // 3. A new distance arrives mid-run; the animation restarts.
    animator.set_distance(UPDATED_DISTANCE, &mut host, &mut obs)?;
    let frames = animator.drive(&mut host, &mut obs, None)?;
    let elapsed = t0.elapsed();

    // 4. Summary + final artifacts.
    info!(
        phase = %animator.phase(),
        frames,
        runs = obs.runs,
        cancelled = obs.cancelled,
        frames_requested = host.requested(),
        frames_released = host.cancelled(),
        elapsed_ms = format_args!("{:.3}", elapsed.as_secs_f64() * 1_000.0),
        "done"
    );

    let scheduler = animator.scheduler();
    let path = path_feature_collection(scheduler.path());
    println!(
        "path: {} points revealed ({} bytes of GeoJSON)",
        scheduler.path().len(),
        serde_json::to_string(&path)?.len()
    );
    if let Some(marker) = scheduler.marker() {
        println!("{}", serde_json::to_string_pretty(&marker_feature_collection(&marker))?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::is_logged_frame;

    #[test]
    fn logs_first_frame_and_every_nth() {
        let logged: Vec<usize> = (0..7).filter(|&f| is_logged_frame(f, 3)).collect();
        assert_eq!(logged, vec![0, 3, 6]);
    }

    #[test]
    fn every_one_logs_each_frame() {
        assert!((0..5).all(|f| is_logged_frame(f, 1)));
        assert!(!is_logged_frame(0, 0));
    }
}
