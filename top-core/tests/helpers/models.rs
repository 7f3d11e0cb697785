use crate::analysis::{normalize, select, SelectionPolicy};
use crate::models::{NormalizedResult, PriorityOrder, ResultRecord, SelectionResult};

pub fn create_record(instance: &str, label: &str, descriptor: Option<&str>, profit: u64) -> ResultRecord {
    ResultRecord::new(instance.to_string(), label.to_string(), descriptor.map(|d| d.to_string()), profit, true)
}

pub fn create_normalized(instance: &str, algorithm: &str, profit: u64, optimum: u64) -> NormalizedResult {
    normalize(create_record(instance, algorithm, None, profit), optimum).0
}

pub fn create_priority(entries: &[&str]) -> PriorityOrder {
    PriorityOrder::new(entries.iter().map(|entry| entry.to_string()).collect())
}

/// Creates selection with exact tie comparison from `(algorithm, profit)` pairs.
pub fn create_selection(instance: &str, optimum: u64, results: &[(&str, u64)], priority: &[&str]) -> SelectionResult {
    let results =
        results.iter().map(|(algorithm, profit)| create_normalized(instance, algorithm, *profit, optimum)).collect();

    select(instance, optimum, results, &create_priority(priority), &SelectionPolicy::default()).unwrap()
}
