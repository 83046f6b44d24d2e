//! Shuffle selection
//!
//! Shuffle never reorders the queue; it only changes which index `advance`
//! lands on.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random index picker
#[derive(Debug, Clone)]
pub struct ShufflePicker {
    rng: StdRng,
}

impl ShufflePicker {
    /// Seeded picker for reproducible sessions
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picker seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Pick an index in `[0, len)`, or `None` for an empty range
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }
}

impl Default for ShufflePicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}
