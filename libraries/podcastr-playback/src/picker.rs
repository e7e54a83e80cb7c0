//! Shuffle index selection
//!
//! Shuffle navigation does not reorder the queue. Each next/previous step
//! picks a fresh uniformly random position, which may repeat the current
//! one. The picker is injectable so tests can make picks reproducible.

use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

/// Source of shuffle positions
pub trait IndexPicker {
    /// Pick a position in `[0, len)`
    ///
    /// Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Picks with the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl IndexPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        thread_rng().gen_range(0..len)
    }
}

/// Deterministic picker seeded once at construction
#[derive(Debug, Clone)]
pub struct SeededPicker {
    rng: StdRng,
}

impl SeededPicker {
    /// Create a picker whose sequence depends only on `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IndexPicker for SeededPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Build the picker a config asks for
pub(crate) fn picker_for_seed(seed: Option<u64>) -> Box<dyn IndexPicker> {
    match seed {
        Some(seed) => Box::new(SeededPicker::new(seed)),
        None => Box::new(RandomPicker),
    }
}
