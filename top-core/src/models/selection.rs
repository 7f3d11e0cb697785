use crate::models::{InstanceId, NormalizedResult};
use crate::utils::Float;

/// An outcome of winner selection on one instance.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionResult {
    /// An instance key.
    pub instance_id: InstanceId,
    /// A baseline optimum of the instance.
    pub optimum: u64,
    /// The priority selected winner.
    pub winning_algorithm_id: String,
    /// Profit of the winner.
    pub winning_profit: u64,
    /// Normalized profit of the winner.
    pub winning_ratio: Float,
    /// All algorithms which reached the maximum ratio in priority order, the winner is the first.
    pub tied_algorithm_ids: Vec<String>,
    /// All normalized results of the instance in priority order.
    pub results: Vec<NormalizedResult>,
}

impl SelectionResult {
    /// Returns true if exactly one algorithm reached the maximum ratio.
    pub fn is_unique_win(&self) -> bool {
        self.tied_algorithm_ids.len() == 1
    }

    /// Returns true if the algorithm reached the maximum ratio (alone or in a tie).
    pub fn is_tied_winner(&self, algorithm_id: &str) -> bool {
        self.tied_algorithm_ids.iter().any(|id| id == algorithm_id)
    }

    /// Returns a normalized result of the winning algorithm.
    pub fn winner(&self) -> Option<&NormalizedResult> {
        self.get_result(self.winning_algorithm_id.as_str())
    }

    /// Returns a normalized result of given algorithm if it has one on the instance.
    pub fn get_result(&self, algorithm_id: &str) -> Option<&NormalizedResult> {
        self.results.iter().find(|result| result.algorithm_id() == algorithm_id)
    }
}
