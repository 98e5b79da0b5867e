use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::GameState;

use super::agent::Agent;

/// An agent that selects uniformly at random from the open columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn choose_column(&mut self, state: &GameState) -> usize {
        let columns = state.valid_columns();
        assert!(!columns.is_empty(), "no open columns to choose from");
        let idx = self.rng.random_range(0..columns.len());
        columns[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
