#[cfg(test)]
#[path = "../../tests/unit/models/priority_test.rs"]
mod priority_test;

/// Specifies tie-break precedence between algorithms. An entry is either an exact algorithm id or
/// a pattern with `*` wildcards, e.g. `BT*`. Algorithms which match no entry rank after all listed
/// ones and keep their relative input order.
#[derive(Clone, Debug, Default)]
pub struct PriorityOrder {
    entries: Vec<String>,
}

impl PriorityOrder {
    /// Creates a new instance of `PriorityOrder`.
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Returns configured entries.
    pub fn entries(&self) -> &[String] {
        self.entries.as_slice()
    }

    /// Returns a rank of the algorithm: lower rank means higher precedence.
    /// Unlisted algorithms get rank equal to the amount of entries.
    pub fn rank(&self, algorithm_id: &str) -> usize {
        self.entries
            .iter()
            .position(|entry| entry == algorithm_id || (entry.contains('*') && matches_wildcard(entry, algorithm_id)))
            .unwrap_or(self.entries.len())
    }

    /// Sorts items by their algorithm rank. Sorting is stable, so items with the same rank keep
    /// their input order.
    pub fn sort_by_rank<T, F>(&self, items: &mut [T], algorithm_fn: F)
    where
        F: Fn(&T) -> &str,
    {
        items.sort_by_cached_key(|item| self.rank(algorithm_fn(item)));
    }
}

/// Checks whether value matches pattern where `*` stands for any (possibly empty) substring.
pub fn matches_wildcard(pattern: &str, value: &str) -> bool {
    let parts = pattern.split('*').collect::<Vec<_>>();
    let (first, last) = match (parts.first(), parts.last()) {
        (Some(first), Some(last)) if parts.len() > 1 => (*first, *last),
        _ => return pattern == value,
    };

    if !value.starts_with(first) || value.len() < first.len() + last.len() || !value.ends_with(last) {
        return false;
    }

    let mut remaining = &value[first.len()..value.len() - last.len()];
    for part in &parts[1..parts.len() - 1] {
        match remaining.find(part) {
            Some(idx) => remaining = &remaining[idx + part.len()..],
            None => return false,
        }
    }

    true
}
