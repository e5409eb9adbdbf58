//! Where new sequence steps come from.

use super::button::Button;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies the next step appended to the sequence.
pub trait StepSource: Send {
    fn next_step(&mut self) -> Button;
}

/// Uniform draw over the four buttons. Repeats are allowed.
pub struct RandomSteps<R = ChaCha8Rng> {
    rng: R,
}

impl RandomSteps<ChaCha8Rng> {
    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng + Send> RandomSteps<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> StepSource for RandomSteps<R> {
    fn next_step(&mut self) -> Button {
        Button::from_index(self.rng.gen_range(0..4))
    }
}

impl<F> StepSource for F
where
    F: FnMut() -> Button + Send,
{
    fn next_step(&mut self) -> Button {
        self()
    }
}
