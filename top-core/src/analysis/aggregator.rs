#[cfg(test)]
#[path = "../../tests/unit/analysis/aggregator_test.rs"]
mod aggregator_test;

use crate::models::{InstanceId, PriorityOrder, SelectionResult};
use crate::utils::{get_mean_slice, get_min_max, get_sample_stdev, Float};
use rustc_hash::{FxHashMap, FxHashSet};

/// Ratio statistics and win counters of one algorithm over the corpus.
#[derive(Clone, Debug, PartialEq)]
pub struct AlgorithmStatistics {
    /// Algorithm identity.
    pub algorithm_id: String,
    /// Amount of instances where the algorithm has a result.
    pub instances: usize,
    /// Mean ratio.
    pub mean_ratio: Float,
    /// Sample standard deviation of ratio, zero for a single instance.
    pub std_dev_ratio: Float,
    /// Minimum ratio.
    pub min_ratio: Float,
    /// Maximum ratio.
    pub max_ratio: Float,
    /// Amount of instances where the algorithm is the priority winner.
    pub win_count: usize,
    /// Amount of instances where the algorithm reached the maximum ratio, alone or in a tie.
    pub tied_win_count: usize,
    /// Amount of instances where the algorithm is the only one at the maximum ratio.
    pub absolute_win_count: usize,
}

/// A winner of one instance.
#[derive(Clone, Debug, PartialEq)]
pub struct InstanceWinner {
    /// Instance key.
    pub instance_id: InstanceId,
    /// Baseline optimum.
    pub optimum: u64,
    /// Winning profit.
    pub winning_profit: u64,
    /// Winning ratio.
    pub winning_ratio: Float,
    /// Winning algorithm identity.
    pub winning_algorithm_id: String,
}

/// Corpus level statistics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Aggregation {
    /// Algorithm statistics in first-seen order.
    pub algorithms: Vec<AlgorithmStatistics>,
    /// Instance winners in instance order.
    pub winners: Vec<InstanceWinner>,
}

impl Aggregation {
    /// Returns statistics of the algorithm.
    pub fn get(&self, algorithm_id: &str) -> Option<&AlgorithmStatistics> {
        self.algorithms.iter().find(|statistics| statistics.algorithm_id == algorithm_id)
    }

    /// Returns total amount of priority wins, equal to amount of selected instances.
    pub fn total_wins(&self) -> usize {
        self.algorithms.iter().map(|statistics| statistics.win_count).sum()
    }

    /// Returns amount of priority wins per algorithm ordered by priority rank. Algorithms with the
    /// same rank keep their first-seen order.
    pub fn priority_histogram(&self, priority: &PriorityOrder) -> Vec<(String, usize)> {
        let mut histogram = self
            .algorithms
            .iter()
            .map(|statistics| (statistics.algorithm_id.clone(), statistics.win_count))
            .collect::<Vec<_>>();

        priority.sort_by_rank(histogram.as_mut_slice(), |(algorithm_id, _)| algorithm_id.as_str());

        histogram
    }
}

#[derive(Default)]
struct Accumulator {
    ratios: Vec<Float>,
    win_count: usize,
    tied_win_count: usize,
    absolute_win_count: usize,
}

/// Aggregates selections into algorithm statistics and instance winners.
pub fn aggregate(selections: &[SelectionResult]) -> Aggregation {
    let mut order = Vec::<String>::new();
    let mut accumulators = FxHashMap::<String, Accumulator>::default();

    for selection in selections {
        let mut seen = FxHashSet::<&str>::default();

        for result in selection.results.iter() {
            let algorithm_id = result.algorithm_id();
            if !seen.insert(algorithm_id) {
                continue;
            }

            if !accumulators.contains_key(algorithm_id) {
                order.push(algorithm_id.to_string());
            }

            let accumulator = accumulators.entry(algorithm_id.to_string()).or_default();
            accumulator.ratios.push(result.ratio);

            if selection.is_tied_winner(algorithm_id) {
                accumulator.tied_win_count += 1;

                if selection.is_unique_win() {
                    accumulator.absolute_win_count += 1;
                }
            }

            if selection.winning_algorithm_id == algorithm_id {
                accumulator.win_count += 1;
            }
        }
    }

    let algorithms = order
        .into_iter()
        .filter_map(|algorithm_id| {
            let accumulator = accumulators.remove(&algorithm_id)?;
            let (min_ratio, max_ratio) = get_min_max(accumulator.ratios.as_slice())?;

            Some(AlgorithmStatistics {
                instances: accumulator.ratios.len(),
                mean_ratio: get_mean_slice(accumulator.ratios.as_slice()),
                std_dev_ratio: get_sample_stdev(accumulator.ratios.as_slice()),
                min_ratio,
                max_ratio,
                win_count: accumulator.win_count,
                tied_win_count: accumulator.tied_win_count,
                absolute_win_count: accumulator.absolute_win_count,
                algorithm_id,
            })
        })
        .collect();

    let winners = selections
        .iter()
        .map(|selection| InstanceWinner {
            instance_id: selection.instance_id.clone(),
            optimum: selection.optimum,
            winning_profit: selection.winning_profit,
            winning_ratio: selection.winning_ratio,
            winning_algorithm_id: selection.winning_algorithm_id.clone(),
        })
        .collect();

    Aggregation { algorithms, winners }
}
