#[cfg(test)]
#[path = "../../tests/unit/analysis/selector_test.rs"]
mod selector_test;

use crate::diagnostics::Diagnostic;
use crate::models::{NormalizedResult, PriorityOrder, SelectionResult};
use crate::utils::{compare_floats, is_within_tolerance, Float};

/// Specifies how winners are selected.
#[derive(Clone, Debug, Default)]
pub struct SelectionPolicy {
    /// Ratios which differ from the maximum by no more than tolerance are considered as ties.
    /// Zero means exact comparison.
    pub tie_tolerance: Float,
}

impl SelectionPolicy {
    /// Creates a new instance of `SelectionPolicy`, negative tolerance is treated as zero.
    pub fn new(tie_tolerance: Float) -> Self {
        Self { tie_tolerance: tie_tolerance.max(0.) }
    }
}

/// Selects a winning algorithm on the instance: the first one in priority order among those
/// which reach the maximum ratio.
pub fn select(
    instance_id: &str,
    optimum: u64,
    mut results: Vec<NormalizedResult>,
    priority: &PriorityOrder,
    policy: &SelectionPolicy,
) -> Result<SelectionResult, Diagnostic> {
    priority.sort_by_rank(results.as_mut_slice(), |result| result.algorithm_id());

    let max_ratio = results
        .iter()
        .map(|result| result.ratio)
        .max_by(|a, b| compare_floats(*a, *b))
        .ok_or_else(|| Diagnostic::EmptyCandidateSet { instance: instance_id.to_string() })?;

    let tied_algorithm_ids = results
        .iter()
        .filter(|result| is_within_tolerance(result.ratio, max_ratio, policy.tie_tolerance))
        .fold(Vec::<String>::new(), |mut ids, result| {
            if !ids.iter().any(|id| id == result.algorithm_id()) {
                ids.push(result.algorithm_id().to_string());
            }
            ids
        });

    let winner = results
        .iter()
        .find(|result| is_within_tolerance(result.ratio, max_ratio, policy.tie_tolerance))
        .ok_or_else(|| Diagnostic::EmptyCandidateSet { instance: instance_id.to_string() })?;

    Ok(SelectionResult {
        instance_id: instance_id.to_string(),
        optimum,
        winning_algorithm_id: winner.algorithm_id().to_string(),
        winning_profit: winner.profit(),
        winning_ratio: winner.ratio,
        tied_algorithm_ids,
        results,
    })
}
