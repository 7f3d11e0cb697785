#[cfg(test)]
#[path = "../../tests/unit/analysis/gaps_test.rs"]
mod gaps_test;

use crate::models::{InstanceId, SelectionResult};
use crate::utils::{get_mean_iter, Float};

/// Returns relative gap of profit to the winning profit: `1 - profit / winning_profit`.
/// Zero winning profit gives zero gap.
pub fn get_gap(profit: u64, winning_profit: u64) -> Float {
    if winning_profit == 0 {
        0.
    } else {
        1. - profit as Float / winning_profit as Float
    }
}

/// A row of the gap table.
#[derive(Clone, Debug, PartialEq)]
pub struct GapRow {
    /// Instance key.
    pub instance_id: InstanceId,
    /// Gaps in algorithm column order, `None` when the algorithm has no result on the instance.
    pub gaps: Vec<Option<Float>>,
    /// Mean over present gaps.
    pub mean_gap: Float,
}

/// Gaps of every algorithm to the instance winner.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GapTable {
    /// Algorithm columns in first-seen order.
    pub algorithms: Vec<String>,
    /// Rows in selection order.
    pub rows: Vec<GapRow>,
}

impl GapTable {
    /// Builds gap table from selections.
    pub fn new(selections: &[SelectionResult]) -> Self {
        let algorithms = selections.iter().flat_map(|selection| selection.results.iter()).fold(
            Vec::<String>::new(),
            |mut algorithms, result| {
                if !algorithms.iter().any(|algorithm_id| algorithm_id == result.algorithm_id()) {
                    algorithms.push(result.algorithm_id().to_string());
                }
                algorithms
            },
        );

        let rows = selections
            .iter()
            .map(|selection| {
                let gaps = algorithms
                    .iter()
                    .map(|algorithm_id| {
                        selection
                            .get_result(algorithm_id)
                            .map(|result| get_gap(result.profit(), selection.winning_profit))
                    })
                    .collect::<Vec<_>>();
                let mean_gap = get_mean_iter(gaps.iter().flatten().copied());

                GapRow { instance_id: selection.instance_id.clone(), gaps, mean_gap }
            })
            .collect();

        Self { algorithms, rows }
    }
}
