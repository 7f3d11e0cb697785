#[cfg(test)]
#[path = "../../tests/unit/models/results_test.rs"]
mod results_test;

use crate::models::InstanceId;
use crate::utils::Float;

/// Represents a result of one algorithm on one problem instance as reported by the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRecord {
    /// An instance key.
    pub instance_id: InstanceId,
    /// A full algorithm identity: label with optional descriptor, e.g. `TS (pumped30000)`.
    pub algorithm_id: String,
    /// An algorithm label, e.g. `TS`.
    pub label: String,
    /// An algorithm variant descriptor, e.g. `pumped30000`.
    pub descriptor: Option<String>,
    /// Achieved profit. Always zero for infeasible solutions.
    pub profit: u64,
    /// Whether the solver reported the solution as feasible.
    pub feasible: bool,
}

impl ResultRecord {
    /// Creates a new instance of `ResultRecord`. Profit of an infeasible result is forced to zero.
    pub fn new(
        instance_id: InstanceId,
        label: String,
        descriptor: Option<String>,
        profit: u64,
        feasible: bool,
    ) -> Self {
        let algorithm_id = create_algorithm_id(label.as_str(), descriptor.as_deref());
        let profit = if feasible { profit } else { 0 };

        Self { instance_id, algorithm_id, label, descriptor, profit, feasible }
    }
}

/// Creates algorithm identity from its label and optional variant descriptor.
pub fn create_algorithm_id(label: &str, descriptor: Option<&str>) -> String {
    match descriptor {
        Some(descriptor) if !descriptor.is_empty() => format!("{label} ({descriptor})"),
        _ => label.to_string(),
    }
}

/// A best known profit of the instance provided by the reference solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaselineEntry {
    /// An instance key.
    pub instance_id: InstanceId,
    /// A best known profit, zero means that no positive baseline is known.
    pub optimum: u64,
}

/// A result record with its profit normalized against the instance baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedResult {
    /// An original record.
    pub record: ResultRecord,
    /// A baseline optimum used for normalization.
    pub optimum: u64,
    /// A ratio of profit to optimum, `1.0` when optimum is zero.
    pub ratio: Float,
}

impl NormalizedResult {
    /// Returns algorithm identity of the underlying record.
    pub fn algorithm_id(&self) -> &str {
        self.record.algorithm_id.as_str()
    }

    /// Returns profit of the underlying record.
    pub fn profit(&self) -> u64 {
        self.record.profit
    }
}
