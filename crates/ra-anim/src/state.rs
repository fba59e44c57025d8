//! Animation progress cursor and revealed-point log.

use ra_core::Coordinate;
use ra_route::SampledSequence;

/// How far through a sampled sequence the animation has got.
///
/// `revealed` always holds `sequence[0..=progress]`, so
/// `revealed.len() == progress + 1`.  The only mutation is [`tick`][Self::tick],
/// which takes the state by value and returns the next one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationState {
    progress: usize,
    steps:    usize,
    revealed: Vec<Coordinate>,
}

impl AnimationState {
    /// Initial state for `sequence`: the start point is already revealed.
    pub fn start(sequence: &SampledSequence) -> Self {
        let mut revealed = Vec::with_capacity(sequence.len());
        revealed.push(sequence.first());
        Self {
            progress: 0,
            steps:    sequence.steps(),
            revealed,
        }
    }

    /// Advance by one sample.
    ///
    /// Appends `sequence[progress + 1]` and increments `progress`.  A terminal
    /// state is returned unchanged.  `sequence` must be the one this state
    /// was started from.
    #[must_use]
    pub fn tick(mut self, sequence: &SampledSequence) -> Self {
        if self.is_terminal() {
            return self;
        }
        self.progress += 1;
        self.revealed.push(sequence[self.progress]);
        self
    }

    #[inline]
    pub fn progress(&self) -> usize {
        self.progress
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Path revealed so far, oldest first.
    pub fn revealed(&self) -> &[Coordinate] {
        &self.revealed
    }

    /// Most recently revealed point, or `None` for a default (unstarted)
    /// state.
    pub fn current(&self) -> Option<Coordinate> {
        self.revealed.last().copied()
    }

    /// `true` once every sample has been revealed.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.progress >= self.steps
    }

    /// Fraction of the animation completed, in `[0.0, 1.0]`.
    pub fn fraction_complete(&self) -> f64 {
        if self.steps == 0 {
            return 1.0;
        }
        (self.progress as f64 / self.steps as f64).min(1.0)
    }
}
