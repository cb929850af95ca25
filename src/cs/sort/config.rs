use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::ordered_sort::{OrderedSort, SortDirection};

/// Builder for [`OrderedSort`] sessions.
///
/// Leaving the seed unset draws pivots from an entropy-seeded generator. Setting
/// it makes every session built from this config pick the same pivots for the
/// same input.
///
/// # Examples
///
/// ```
/// use warmup_arrays::sort::SortConfig;
///
/// let mut values = vec![4, -2, 9, 0];
/// let sorted = SortConfig::new().descending().seed(7).bind(&mut values).sort().to_vec();
/// assert_eq!(sorted, vec![9, 4, 0, -2]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortConfig {
    direction: SortDirection,
    seed: Option<u64>,
}

impl SortConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn ascending(self) -> Self {
        self.direction(SortDirection::Ascending)
    }

    pub fn descending(self) -> Self {
        self.direction(SortDirection::Descending)
    }

    /// Fixes the pivot generator's seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.direction
    }

    pub fn seed_value(&self) -> Option<u64> {
        self.seed
    }

    /// Creates the pivot generator described by this config.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Binds `sequence` to a new session using this config.
    pub fn bind<'a, T: Ord>(&self, sequence: &'a mut [T]) -> OrderedSort<'a, T> {
        OrderedSort::with_rng(sequence, self.direction, self.rng())
    }
}
