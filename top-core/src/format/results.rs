#[cfg(test)]
#[path = "../../tests/unit/format/results_test.rs"]
mod results_test;

use super::InstanceKeyFormat;
use crate::diagnostics::Diagnostic;
use crate::models::{InstanceId, ResultRecord};
use crate::utils::{GenericError, GenericResult};
use rustc_hash::FxHashMap;
use std::io::{BufReader, Read};

/// Specifies which columns of a result source row hold which value.
/// Column indices are zero based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowSchema {
    /// An instance name column.
    pub instance: usize,
    /// An algorithm label column, if the source mixes several algorithms.
    pub algorithm: Option<usize>,
    /// An algorithm variant descriptor column.
    pub descriptor: Option<usize>,
    /// A profit column.
    pub profit: usize,
    /// A feasibility flag column, its absence means that all results are feasible.
    pub feasible: Option<usize>,
    /// An exact amount of columns expected in each row.
    pub columns: Option<usize>,
}

impl RowSchema {
    /// Creates a schema with instance and profit columns only.
    pub fn new(instance: usize, profit: usize) -> Self {
        Self { instance, algorithm: None, descriptor: None, profit, feasible: None, columns: None }
    }

    fn min_columns(&self) -> usize {
        [Some(self.instance), self.algorithm, self.descriptor, Some(self.profit), self.feasible]
            .into_iter()
            .flatten()
            .max()
            .map_or(0, |idx| idx + 1)
    }
}

/// Describes one result source: its identity, row schema and text layout.
#[derive(Clone, Debug)]
pub struct SourceDescriptor {
    /// Source identity used in diagnostics.
    pub name: String,
    /// A fixed algorithm label used when schema has no algorithm column.
    pub label: Option<String>,
    /// A row schema.
    pub schema: RowSchema,
    /// A column delimiter.
    pub delimiter: u8,
    /// Lines starting with this character are skipped.
    pub comment: Option<u8>,
    /// Whether the first row is a header.
    pub has_header: bool,
}

impl SourceDescriptor {
    /// Creates a comma separated source descriptor with `#` comments and no header.
    pub fn new(name: &str, label: Option<&str>, schema: RowSchema) -> Self {
        Self {
            name: name.to_string(),
            label: label.map(|label| label.to_string()),
            schema,
            delimiter: b',',
            comment: Some(b'#'),
            has_header: false,
        }
    }

    /// Checks that the descriptor can produce algorithm identity for each row.
    pub fn validate(&self) -> GenericResult<()> {
        let has_label = self.label.as_ref().is_some_and(|label| !label.trim().is_empty());

        if !has_label && self.schema.algorithm.is_none() {
            return Err(format!("source '{}' has neither algorithm label nor algorithm column", self.name).into());
        }

        if let Some(columns) = self.schema.columns {
            if columns < self.schema.min_columns() {
                return Err(format!(
                    "source '{}' expects {columns} columns, but schema refers to column {}",
                    self.name,
                    self.schema.min_columns()
                )
                .into());
            }
        }

        Ok(())
    }
}

/// A result of loading one source: accepted records and rejected rows.
#[derive(Clone, Debug, Default)]
pub struct LoadedSource {
    /// Source identity.
    pub name: String,
    /// Records in source order.
    pub records: Vec<ResultRecord>,
    /// Rejected rows as parse diagnostics.
    pub errors: Vec<Diagnostic>,
}

/// A trait to read solver results.
pub trait ResultsReader {
    /// Reads results using given source descriptor.
    fn read_results(self, source: &SourceDescriptor, key_format: &InstanceKeyFormat) -> LoadedSource;
}

impl<R: Read> ResultsReader for BufReader<R> {
    fn read_results(self, source: &SourceDescriptor, key_format: &InstanceKeyFormat) -> LoadedSource {
        read_results_format(self, source, key_format)
    }
}

impl ResultsReader for String {
    fn read_results(self, source: &SourceDescriptor, key_format: &InstanceKeyFormat) -> LoadedSource {
        read_results_format(BufReader::new(self.as_bytes()), source, key_format)
    }
}

fn read_results_format<R: Read>(
    reader: BufReader<R>,
    source: &SourceDescriptor,
    key_format: &InstanceKeyFormat,
) -> LoadedSource {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(source.has_header)
        .flexible(true)
        .delimiter(source.delimiter)
        .comment(source.comment)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let create_error = |line: usize, details: String| Diagnostic::ParseError {
        source: source.name.clone(),
        line,
        details,
    };

    reader.records().enumerate().fold(
        LoadedSource { name: source.name.clone(), records: vec![], errors: vec![] },
        |mut loaded, (idx, row)| {
            match row {
                Ok(row) => {
                    let line = row.position().map_or(idx + 1, |position| position.line() as usize);
                    match parse_row(&row, source, key_format) {
                        Ok(record) => loaded.records.push(record),
                        Err(err) => loaded.errors.push(create_error(line, err.to_string())),
                    }
                }
                Err(err) => {
                    let line = err.position().map_or(idx + 1, |position| position.line() as usize);
                    loaded.errors.push(create_error(line, err.to_string()));
                }
            }

            loaded
        },
    )
}

fn parse_row(
    row: &csv::StringRecord,
    source: &SourceDescriptor,
    key_format: &InstanceKeyFormat,
) -> GenericResult<ResultRecord> {
    let schema = &source.schema;

    match schema.columns {
        Some(columns) if columns != row.len() => {
            return Err(format!("expected {columns} columns, found {}", row.len()).into());
        }
        _ if row.len() < schema.min_columns() => {
            return Err(format!("expected at least {} columns, found {}", schema.min_columns(), row.len()).into());
        }
        _ => {}
    }

    let get_cell = |idx: usize| row.get(idx).unwrap_or_default();
    let get_optional_cell = |idx: Option<usize>| idx.map(get_cell).filter(|cell| !cell.is_empty());

    let instance_id = key_format.normalize(get_cell(schema.instance));
    if instance_id.is_empty() {
        return Err("empty instance name".into());
    }

    let label = get_optional_cell(schema.algorithm)
        .map(|label| label.to_string())
        .or_else(|| source.label.clone())
        .ok_or_else(|| GenericError::from("empty algorithm label"))?;
    let descriptor = get_optional_cell(schema.descriptor).map(|descriptor| descriptor.to_string());
    let profit = parse_profit(get_cell(schema.profit))?;
    let feasible = get_optional_cell(schema.feasible).map_or(Ok(true), parse_feasible)?;

    Ok(ResultRecord::new(instance_id, label, descriptor, profit, feasible))
}

/// Parses profit as a non-negative integer, integral float values (e.g. `120.0`) are accepted.
pub fn parse_profit(cell: &str) -> GenericResult<u64> {
    let cell = cell.trim();

    cell.parse::<u64>().or_else(|_| match cell.parse::<f64>() {
        Ok(value) if value < 0. => Err(format!("negative profit: '{cell}'").into()),
        Ok(value) if value.is_finite() && value.fract() == 0. => {
            // u64::MAX as f64 rounds up to 2^64
            if value < u64::MAX as f64 {
                Ok(value as u64)
            } else {
                Err(format!("profit is out of range: '{cell}'").into())
            }
        }
        _ => Err(format!("non-numeric profit: '{cell}'").into()),
    })
}

/// Parses feasibility flag.
pub fn parse_feasible(cell: &str) -> GenericResult<bool> {
    match cell.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Ok(true),
        "0" | "false" | "no" | "n" => Ok(false),
        other => Err(format!("invalid feasibility flag: '{other}'").into()),
    }
}

/// Keeps results of all sources grouped by instance in the order instances were first seen.
#[derive(Clone, Debug, Default)]
pub struct ResultSet {
    order: Vec<InstanceId>,
    records: FxHashMap<InstanceId, Vec<ResultRecord>>,
}

impl ResultSet {
    /// Merges records of the loaded source. Must be called from a single writer, sources are
    /// expected in their configured order to keep the output deterministic.
    ///
    /// An instance keeps one record per algorithm: a repeated one replaces the previous record
    /// and is returned as [`Diagnostic::DuplicateResult`] warning.
    pub fn merge(&mut self, source: &str, records: Vec<ResultRecord>) -> Vec<Diagnostic> {
        let mut duplicates = vec![];

        for record in records {
            if !self.records.contains_key(&record.instance_id) {
                self.order.push(record.instance_id.clone());
            }

            let instance_records = self.records.entry(record.instance_id.clone()).or_default();
            match instance_records.iter().position(|existing| existing.algorithm_id == record.algorithm_id) {
                Some(idx) => {
                    duplicates.push(Diagnostic::DuplicateResult {
                        instance: record.instance_id.clone(),
                        algorithm: record.algorithm_id.clone(),
                        source: source.to_string(),
                    });
                    instance_records[idx] = record;
                }
                None => instance_records.push(record),
            }
        }

        duplicates
    }

    /// Returns instance keys in first-seen order.
    pub fn instances(&self) -> impl Iterator<Item = &InstanceId> + '_ {
        self.order.iter()
    }

    /// Returns records of the instance.
    pub fn get(&self, instance_id: &str) -> Option<&[ResultRecord]> {
        self.records.get(instance_id).map(|records| records.as_slice())
    }

    /// Returns true if the instance has at least one record.
    pub fn contains(&self, instance_id: &str) -> bool {
        self.records.contains_key(instance_id)
    }

    /// Returns amount of instances.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if there are no results.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns all records of all instances in instance order.
    pub fn records(&self) -> impl Iterator<Item = &ResultRecord> + '_ {
        self.order.iter().filter_map(|instance_id| self.records.get(instance_id)).flatten()
    }
}
