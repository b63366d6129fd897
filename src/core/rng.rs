//! Deterministic random number generation for duel resolution.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical duel outcomes
//! - **Injected**: The resolver never touches ambient randomness; the
//!   caller supplies a `DuelRng` and owns its lifetime
//! - **Serializable**: O(1) state capture and restore for replays
//!
//! Luck checks, ranged point rolls, and random status replacement all
//! draw from this single stream, so a recorded seed is enough to replay
//! a full duel.
//!
//! ```
//! use mage_duel::core::DuelRng;
//!
//! let mut live = DuelRng::new(42);
//! let mut replay = DuelRng::new(42);
//!
//! for _ in 0..10 {
//!     assert_eq!(live.percent(), replay.percent());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG consumed by luck checks and ranged rolls.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness.
#[derive(Clone, Debug)]
pub struct DuelRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DuelRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draw a percentage in `0..100`.
    ///
    /// A `Luck` check with chance `c` passes when the draw is below `c`.
    pub fn percent(&mut self) -> u32 {
        self.inner.gen_range(0..100)
    }

    /// Pick an index in `0..len`.
    ///
    /// Returns 0 for empty or single-element collections without
    /// consuming a draw, so fixed-outcome picks never perturb the stream.
    pub fn pick(&mut self, len: usize) -> usize {
        if len < 2 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DuelRngState {
        DuelRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DuelRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for replay checkpoints.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many draws have been consumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Rule for collapsing a multi-value point range into a single roll.
///
/// Catalog actions carry a point range (one, two, or three values in
/// practice). How a range collapses to one number is a policy choice,
/// so it is explicit rather than baked into the interpreter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangePolicy {
    /// Uniform draw from the listed values.
    #[default]
    Uniform,
    /// Always the first listed value.
    Lowest,
    /// Always the last listed value.
    Highest,
    /// The midpoint of the listed values (rounding down).
    Midpoint,
}

impl RangePolicy {
    /// Collapse a point range to a single value.
    ///
    /// An empty range yields 0 (actions without a numeric payload store
    /// no points at all).
    pub fn pick(self, range: &[u32], rng: &mut DuelRng) -> u32 {
        match (self, range) {
            (_, []) => 0,
            (_, [single]) => *single,
            (Self::Uniform, _) => range[rng.pick(range.len())],
            (Self::Lowest, _) => range[0],
            (Self::Highest, _) => range[range.len() - 1],
            (Self::Midpoint, _) => range[(range.len() - 1) / 2],
        }
    }
}
