use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform source of move indices. Bots draw through this trait so tests can
/// substitute a fixed sequence.
pub trait MoveRng {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl MoveRng for SessionRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Replays a fixed list of indices, wrapping around when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<usize>,
    next: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, next: 0 }
    }
}

impl MoveRng for SequenceRng {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % len
    }
}
