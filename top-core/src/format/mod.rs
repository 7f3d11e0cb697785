//! This module contains logic to read solver result sources and baseline optimum sources.

#[cfg(test)]
#[path = "../../tests/unit/format/format_test.rs"]
mod format_test;

mod baseline;
pub use self::baseline::*;

mod results;
pub use self::results::*;

use crate::models::InstanceId;
use std::path::Path;

/// Normalizes raw instance names to instance keys: removes quoting artifacts, directory prefix
/// and one of configured extension suffixes.
#[derive(Clone, Debug)]
pub struct InstanceKeyFormat {
    extensions: Vec<String>,
}

impl InstanceKeyFormat {
    /// Creates a new instance of `InstanceKeyFormat` with extensions given without leading dot.
    pub fn new(extensions: Vec<String>) -> Self {
        let extensions = extensions
            .into_iter()
            .map(|extension| extension.trim_start_matches('.').to_string())
            .filter(|extension| !extension.is_empty())
            .collect();

        Self { extensions }
    }

    /// Returns instance key for the raw name.
    pub fn normalize(&self, raw: &str) -> InstanceId {
        let unquoted = raw.trim().replace(['"', '\''], "");
        let unquoted = unquoted.trim();

        let name = Path::new(unquoted).file_name().and_then(|name| name.to_str()).unwrap_or(unquoted);

        self.extensions
            .iter()
            .find_map(|extension| {
                name.strip_suffix(extension.as_str())
                    .and_then(|stem| stem.strip_suffix('.'))
                    .filter(|stem| !stem.is_empty())
            })
            .unwrap_or(name)
            .to_string()
    }
}

impl Default for InstanceKeyFormat {
    fn default() -> Self {
        Self::new(vec!["txt".to_string()])
    }
}
