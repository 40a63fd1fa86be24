use std::sync::{Mutex, PoisonError};

use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of randomness for reviewer selection.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait RandomService: Send + Sync {
    /// Uniform in-place permutation.
    fn shuffle(&self, values: &mut [String]);
    /// Uniform pick, `None` on an empty slice.
    fn choose(&self, values: &[String]) -> Option<String>;
}

/// Seedable ChaCha8 generator.
pub struct ChaChaRandomService {
    rng: Mutex<ChaCha8Rng>,
}

impl ChaChaRandomService {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl RandomService for ChaChaRandomService {
    fn shuffle(&self, values: &mut [String]) {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        values.shuffle(&mut *rng);
    }

    fn choose(&self, values: &[String]) -> Option<String> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        values.choose(&mut *rng).cloned()
    }
}
