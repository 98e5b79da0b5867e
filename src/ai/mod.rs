//! Computer opponents: a uniform-random agent (easy) and a
//! win/block/center heuristic (medium). No search deeper than one reply.

mod agent;
mod heuristic;
mod random;

use serde::{Deserialize, Serialize};

pub use agent::Agent;
pub use heuristic::HeuristicAgent;
pub use random::RandomAgent;

/// AI strength, as selected in the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
}

/// Build the agent for a difficulty level.
pub fn agent_for(difficulty: Difficulty) -> Box<dyn Agent> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomAgent::new()),
        Difficulty::Medium => Box::new(HeuristicAgent::new()),
    }
}
