#[cfg(test)]
#[path = "../../tests/unit/analysis/normalizer_test.rs"]
mod normalizer_test;

use crate::diagnostics::Diagnostic;
use crate::models::{NormalizedResult, ResultRecord};
use crate::utils::{Float, RATIO_EPSILON};

/// Returns profit ratio against optimum. Zero optimum gives exactly `1.0`.
pub fn get_ratio(profit: u64, optimum: u64) -> Float {
    if optimum == 0 {
        1.
    } else {
        profit as Float / optimum as Float
    }
}

/// Normalizes the record against the optimum. A ratio above `1.0` is kept, but also reported
/// as [`Diagnostic::RatioAnomaly`].
pub fn normalize(record: ResultRecord, optimum: u64) -> (NormalizedResult, Option<Diagnostic>) {
    let ratio = get_ratio(record.profit, optimum);

    let anomaly = if ratio > 1. + RATIO_EPSILON {
        Some(Diagnostic::RatioAnomaly {
            instance: record.instance_id.clone(),
            algorithm: record.algorithm_id.clone(),
            profit: record.profit,
            optimum,
            ratio,
        })
    } else {
        None
    };

    (NormalizedResult { record, optimum, ratio }, anomaly)
}

/// Normalizes all records of one instance, anomalies are returned in record order.
pub fn normalize_all<I>(records: I, optimum: u64) -> (Vec<NormalizedResult>, Vec<Diagnostic>)
where
    I: IntoIterator<Item = ResultRecord>,
{
    records.into_iter().map(|record| normalize(record, optimum)).fold(
        (Vec::new(), Vec::new()),
        |(mut results, mut anomalies), (result, anomaly)| {
            results.push(result);
            anomalies.extend(anomaly);
            (results, anomalies)
        },
    )
}
