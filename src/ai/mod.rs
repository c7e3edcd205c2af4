//! Computer opponents: the `Agent` trait, a random player and the
//! one-ply win/block heuristic.

mod agent;
mod heuristic;
mod random;

pub use agent::Agent;
pub use heuristic::HeuristicAgent;
pub use random::RandomAgent;

/// Who plays Yellow.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum OpponentKind {
    /// Second person at the same keyboard
    Human,
    Random,
    #[default]
    Heuristic,
}

impl OpponentKind {
    /// Build the agent for this opponent, `None` for a human.
    pub fn build(self, seed: Option<u64>) -> Option<Box<dyn Agent>> {
        match (self, seed) {
            (OpponentKind::Human, _) => None,
            (OpponentKind::Random, Some(seed)) => Some(Box::new(RandomAgent::with_seed(seed))),
            (OpponentKind::Random, None) => Some(Box::new(RandomAgent::new())),
            (OpponentKind::Heuristic, Some(seed)) => {
                Some(Box::new(HeuristicAgent::with_seed(seed)))
            }
            (OpponentKind::Heuristic, None) => Some(Box::new(HeuristicAgent::new())),
        }
    }
}
