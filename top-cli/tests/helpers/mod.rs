#[path = "../../../top-core/tests/helpers/macros.rs"]
#[macro_use]
pub mod macros;

use top_core::analysis::{normalize, select, SelectionPolicy};
use top_core::models::{PriorityOrder, ResultRecord, SelectionResult};

pub const SAMPLE_CONFIG_PATH: &str = "../data/config.json";

pub fn create_selection(instance: &str, optimum: u64, results: &[(&str, u64)], priority: &[&str]) -> SelectionResult {
    let results = results
        .iter()
        .map(|(algorithm, profit)| {
            let record = ResultRecord::new(instance.to_string(), algorithm.to_string(), None, *profit, true);
            normalize(record, optimum).0
        })
        .collect();
    let priority = PriorityOrder::new(priority.iter().map(|entry| entry.to_string()).collect());

    select(instance, optimum, results, &priority, &SelectionPolicy::default()).unwrap()
}

pub fn get_lines(buffer: Vec<u8>) -> Vec<String> {
    String::from_utf8(buffer).unwrap().lines().map(|line| line.to_string()).collect()
}
