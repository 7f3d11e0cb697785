//! Writes run reports as csv and formats console summary.

#[cfg(test)]
#[path = "../../tests/unit/extensions/report_test.rs"]
mod report_test;

use serde::Serialize;
use std::io::Write;
use top_core::analysis::{Aggregation, GapTable};
use top_core::models::{NormalizedResult, PriorityOrder, SelectionResult};
use top_core::utils::Float;

/// A header of statistics report.
pub const STATISTICS_HEADER: [&str; 9] = [
    "algorithmId",
    "instances",
    "meanRatio",
    "stdDevRatio",
    "minRatio",
    "maxRatio",
    "winCount",
    "tiedWinCount",
    "absoluteWinCount",
];

/// A header of selection report.
pub const SELECTION_HEADER: [&str; 5] =
    ["instanceId", "baselineOptimum", "winningProfit", "winningRatio", "winningAlgorithmId"];

/// A header of per algorithm ratio export.
pub const EXPORT_HEADER: [&str; 4] = ["instance", "baselineOptimum", "profit", "ratio"];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatisticsRow<'a> {
    algorithm_id: &'a str,
    instances: usize,
    mean_ratio: Float,
    std_dev_ratio: Float,
    min_ratio: Float,
    max_ratio: Float,
    win_count: usize,
    tied_win_count: usize,
    absolute_win_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SelectionRow<'a> {
    instance_id: &'a str,
    baseline_optimum: u64,
    winning_profit: u64,
    winning_ratio: Float,
    winning_algorithm_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportRow<'a> {
    instance: &'a str,
    baseline_optimum: u64,
    profit: u64,
    ratio: Float,
}

fn create_csv_writer<W: Write>(writer: W, header: &[&str]) -> Result<csv::Writer<W>, String> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(header).map_err(|err| format!("cannot write header: '{err}'"))?;

    Ok(writer)
}

fn write_rows<W, T, I>(writer: W, header: &[&str], rows: I) -> Result<(), String>
where
    W: Write,
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut writer = create_csv_writer(writer, header)?;

    rows.into_iter().try_for_each(|row| writer.serialize(row)).map_err(|err| format!("cannot write row: '{err}'"))?;
    writer.flush().map_err(|err| format!("cannot flush report: '{err}'"))
}

/// Writes algorithm statistics.
pub fn write_statistics<W: Write>(writer: W, aggregation: &Aggregation) -> Result<(), String> {
    write_rows(
        writer,
        &STATISTICS_HEADER,
        aggregation.algorithms.iter().map(|statistics| StatisticsRow {
            algorithm_id: statistics.algorithm_id.as_str(),
            instances: statistics.instances,
            mean_ratio: statistics.mean_ratio,
            std_dev_ratio: statistics.std_dev_ratio,
            min_ratio: statistics.min_ratio,
            max_ratio: statistics.max_ratio,
            win_count: statistics.win_count,
            tied_win_count: statistics.tied_win_count,
            absolute_win_count: statistics.absolute_win_count,
        }),
    )
}

/// Writes instance winners.
pub fn write_selections<W: Write>(writer: W, aggregation: &Aggregation) -> Result<(), String> {
    write_rows(
        writer,
        &SELECTION_HEADER,
        aggregation.winners.iter().map(|winner| SelectionRow {
            instance_id: winner.instance_id.as_str(),
            baseline_optimum: winner.optimum,
            winning_profit: winner.winning_profit,
            winning_ratio: winner.winning_ratio,
            winning_algorithm_id: winner.winning_algorithm_id.as_str(),
        }),
    )
}

/// Writes gaps of every algorithm to the instance winner.
pub fn write_gaps<W: Write>(writer: W, table: &GapTable) -> Result<(), String> {
    let header = std::iter::once("instanceId")
        .chain(table.algorithms.iter().map(|algorithm_id| algorithm_id.as_str()))
        .chain(std::iter::once("meanGap"))
        .collect::<Vec<_>>();

    let mut writer = create_csv_writer(writer, header.as_slice())?;

    table
        .rows
        .iter()
        .try_for_each(|row| {
            let record = std::iter::once(row.instance_id.clone())
                .chain(row.gaps.iter().map(|gap| gap.map(|gap| gap.to_string()).unwrap_or_default()))
                .chain(std::iter::once(row.mean_gap.to_string()));

            writer.write_record(record)
        })
        .map_err(|err| format!("cannot write gap row: '{err}'"))?;

    writer.flush().map_err(|err| format!("cannot flush gap report: '{err}'"))
}

/// Normalized results of one algorithm sorted by instance name.
pub struct RatioExport<'a> {
    /// Algorithm identity.
    pub algorithm_id: String,
    /// Results of the algorithm.
    pub results: Vec<&'a NormalizedResult>,
}

/// Groups normalized results of selections by algorithm in first-seen order.
pub fn create_ratio_exports(selections: &[SelectionResult]) -> Vec<RatioExport<'_>> {
    let mut exports = selections.iter().flat_map(|selection| selection.results.iter()).fold(
        Vec::<RatioExport>::new(),
        |mut exports, result| {
            match exports.iter().position(|export| export.algorithm_id == result.algorithm_id()) {
                Some(idx) => exports[idx].results.push(result),
                None => exports
                    .push(RatioExport { algorithm_id: result.algorithm_id().to_string(), results: vec![result] }),
            }
            exports
        },
    );

    exports.iter_mut().for_each(|export| {
        export.results.sort_by(|a, b| a.record.instance_id.cmp(&b.record.instance_id));
    });

    exports
}

/// Writes normalized results of one algorithm.
pub fn write_ratio_export<W: Write>(writer: W, export: &RatioExport) -> Result<(), String> {
    write_rows(
        writer,
        &EXPORT_HEADER,
        export.results.iter().map(|result| ExportRow {
            instance: result.record.instance_id.as_str(),
            baseline_optimum: result.optimum,
            profit: result.profit(),
            ratio: result.ratio,
        }),
    )
}

fn as_percent(ratio: Float) -> String {
    format!("{:.2}%", ratio * 100.)
}

/// Creates console summary: priority winners histogram followed by per algorithm statistics.
pub fn create_summary_lines(aggregation: &Aggregation, priority: &PriorityOrder) -> Vec<String> {
    let histogram = aggregation
        .priority_histogram(priority)
        .into_iter()
        .map(|(algorithm_id, wins)| format!("  {algorithm_id}: {wins}"));

    let statistics = aggregation.algorithms.iter().map(|statistics| {
        format!(
            "{}: {} (sigma {}, min {}, max {}), best in {} instance(s), absolute best in {}",
            statistics.algorithm_id,
            as_percent(statistics.mean_ratio),
            as_percent(statistics.std_dev_ratio),
            as_percent(statistics.min_ratio),
            as_percent(statistics.max_ratio),
            statistics.tied_win_count,
            statistics.absolute_win_count
        )
    });

    std::iter::once(format!("solved by priority ({} instance(s)):", aggregation.winners.len()))
        .chain(histogram)
        .chain(statistics)
        .collect()
}
