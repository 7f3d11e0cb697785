#[cfg(test)]
#[path = "../../tests/unit/format/baseline_test.rs"]
mod baseline_test;

use super::InstanceKeyFormat;
use crate::diagnostics::Diagnostic;
use crate::models::{BaselineEntry, InstanceId};
use crate::utils::{GenericError, GenericResult};
use rustc_hash::FxHashMap;
use std::io::{BufRead, BufReader, Read};

/// A lookup of best known profits by instance key.
#[derive(Clone, Debug, Default)]
pub struct BaselineIndex {
    order: Vec<InstanceId>,
    entries: FxHashMap<InstanceId, (BaselineEntry, usize)>,
}

impl BaselineIndex {
    /// Inserts baseline entry defined at given line. Returns a line of the previous definition
    /// if the entry overrides one.
    pub fn insert(&mut self, entry: BaselineEntry, line: usize) -> Option<usize> {
        let instance_id = entry.instance_id.clone();

        match self.entries.insert(instance_id.clone(), (entry, line)) {
            Some((_, first_line)) => Some(first_line),
            None => {
                self.order.push(instance_id);
                None
            }
        }
    }

    /// Returns optimum of the instance.
    pub fn get(&self, instance_id: &str) -> Option<u64> {
        self.entries.get(instance_id).map(|(entry, _)| entry.optimum)
    }

    /// Returns true if the instance has a baseline.
    pub fn contains(&self, instance_id: &str) -> bool {
        self.entries.contains_key(instance_id)
    }

    /// Returns baseline entries in order of their first definition.
    pub fn entries(&self) -> impl Iterator<Item = &BaselineEntry> + '_ {
        self.order.iter().filter_map(|instance_id| self.entries.get(instance_id).map(|(entry, _)| entry))
    }

    /// Returns amount of instances.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<BaselineEntry> for BaselineIndex {
    fn from_iter<T: IntoIterator<Item = BaselineEntry>>(iter: T) -> Self {
        iter.into_iter().enumerate().fold(BaselineIndex::default(), |mut index, (idx, entry)| {
            index.insert(entry, idx + 1);
            index
        })
    }
}

/// A trait to read baseline optimum values.
pub trait BaselineReader {
    /// Reads baseline index. Duplicate definitions are returned as warnings, a malformed line
    /// is an error.
    fn read_baseline(self, key_format: &InstanceKeyFormat) -> GenericResult<(BaselineIndex, Vec<Diagnostic>)>;
}

impl<R: Read> BaselineReader for BufReader<R> {
    fn read_baseline(self, key_format: &InstanceKeyFormat) -> GenericResult<(BaselineIndex, Vec<Diagnostic>)> {
        read_baseline_format(self, key_format)
    }
}

impl BaselineReader for String {
    fn read_baseline(self, key_format: &InstanceKeyFormat) -> GenericResult<(BaselineIndex, Vec<Diagnostic>)> {
        read_baseline_format(BufReader::new(self.as_bytes()), key_format)
    }
}

fn read_baseline_format<R: Read>(
    reader: BufReader<R>,
    key_format: &InstanceKeyFormat,
) -> GenericResult<(BaselineIndex, Vec<Diagnostic>)> {
    let mut index = BaselineIndex::default();
    let mut warnings = vec![];

    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = line.map_err(|err| GenericError::from(format!("cannot read baseline line {line_number}: {err}")))?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let entry = parse_baseline_line(line, key_format)
            .map_err(|err| err.with_context(format!("baseline line {line_number}").as_str()))?;
        let instance_id = entry.instance_id.clone();

        if let Some(first_line) = index.insert(entry, line_number) {
            warnings.push(Diagnostic::DuplicateBaseline { instance: instance_id, first_line, line: line_number });
        }
    }

    Ok((index, warnings))
}

fn parse_baseline_line(line: &str, key_format: &InstanceKeyFormat) -> GenericResult<BaselineEntry> {
    let mut tokens = line.split(|c: char| c.is_whitespace() || c == ',').filter(|token| !token.is_empty());

    let instance_id = tokens.next().map(|name| key_format.normalize(name)).unwrap_or_default();
    if instance_id.is_empty() {
        return Err("missing instance name".into());
    }

    let optimum = tokens.next().ok_or_else(|| GenericError::from(format!("missing optimum for '{instance_id}'")))?;
    let optimum = optimum
        .parse::<u64>()
        .map_err(|_| GenericError::from(format!("cannot parse optimum '{optimum}' for '{instance_id}'")))?;

    Ok(BaselineEntry { instance_id, optimum })
}
