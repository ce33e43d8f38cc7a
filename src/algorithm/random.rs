//! Injectable randomness for tile selection

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniform choices among candidate tiles
pub trait TileChooser {
    /// Pick an index in `0..candidates`
    ///
    /// Callers never pass zero; implementations return 0 in that case.
    fn choose(&mut self, candidates: usize) -> usize;
}

impl<C: TileChooser + ?Sized> TileChooser for &mut C {
    fn choose(&mut self, candidates: usize) -> usize {
        (**self).choose(candidates)
    }
}

/// Chooser backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomChooser<R = StdRng> {
    rng: R,
}

impl RandomChooser<StdRng> {
    /// Deterministic chooser for reproducible layouts
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Chooser seeded from operating system entropy
    pub fn from_os_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> RandomChooser<R> {
    /// Wrap an existing generator
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TileChooser for RandomChooser<R> {
    fn choose(&mut self, candidates: usize) -> usize {
        if candidates <= 1 {
            return 0;
        }
        self.rng.random_range(0..candidates)
    }
}

/// Replays a fixed list of picks
///
/// Picks wrap around when exhausted and are reduced modulo the candidate
/// count, so any list drives any catalog.
#[derive(Debug, Clone)]
pub struct ScriptedChooser {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedChooser {
    /// Create a chooser replaying `picks`
    pub const fn new(picks: Vec<usize>) -> Self {
        Self { picks, cursor: 0 }
    }

    /// Always pick the first candidate
    pub fn first() -> Self {
        Self::new(vec![0])
    }
}

impl TileChooser for ScriptedChooser {
    fn choose(&mut self, candidates: usize) -> usize {
        if candidates == 0 || self.picks.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let pick = self
            .picks
            .get(self.cursor % self.picks.len())
            .copied()
            .unwrap_or(0);
        self.cursor += 1;
        pick % candidates
    }
}
