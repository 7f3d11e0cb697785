//! Run configuration.

#![allow(missing_docs)]

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

extern crate serde_json;

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use top_core::analysis::SelectionPolicy;
use top_core::artifacts::ArtifactTemplates;
use top_core::format::{InstanceKeyFormat, RowSchema, SourceDescriptor};
use top_core::models::PriorityOrder;
use top_core::pipeline::{RunPolicy, SourceFile};
use top_core::utils::Float;

/// A run configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// A path to baseline file.
    pub baseline: String,
    /// Extensions stripped from instance names. Default is `txt`.
    pub extensions: Option<Vec<String>>,
    /// Run modes by their names.
    pub modes: BTreeMap<String, ModeConfig>,
}

/// A run mode: which sources are compared and how.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ModeConfig {
    /// Result sources in merge order.
    pub sources: Vec<SourceConfig>,
    /// Tie-break priority, exact algorithm ids or `*` patterns.
    pub priority: Option<Vec<String>>,
    /// Algorithms allowed to participate, all when omitted.
    pub algorithms: Option<Vec<String>>,
    /// Artifact materialization settings.
    pub artifacts: Option<ArtifactsConfig>,
    /// Export file names by algorithm id.
    pub exports: Option<HashMap<String, String>>,
    /// Run policy.
    pub policy: Option<PolicyConfig>,
}

/// A result source.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfig {
    /// A source path, relative to run root.
    pub path: String,
    /// A fixed algorithm label.
    pub label: Option<String>,
    /// A row schema.
    pub schema: SchemaConfig,
    /// A single character delimiter. Default is comma.
    pub delimiter: Option<String>,
    /// A single character comment prefix. Default is `#`, empty string disables comments.
    pub comment: Option<String>,
    /// Whether the first row is a header. Default is false.
    pub has_header: Option<bool>,
}

/// Zero based column indices of a result row.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SchemaConfig {
    pub instance: usize,
    pub algorithm: Option<usize>,
    pub descriptor: Option<usize>,
    pub profit: usize,
    pub feasible: Option<usize>,
    pub columns: Option<usize>,
}

/// Artifact materialization settings.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactsConfig {
    /// An output directory relative to run root.
    pub output_dir: Option<String>,
    /// Path templates by algorithm id.
    pub templates: Option<HashMap<String, String>>,
    /// A template used for algorithms without their own one.
    pub default_template: Option<String>,
}

/// A run policy.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfig {
    /// Abort on the first malformed row. Default is false.
    pub fail_fast: Option<bool>,
    /// Tie tolerance of ratios. Default is exact comparison.
    pub tie_tolerance: Option<Float>,
}

/// A default artifact output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "best";

impl Config {
    /// Returns mode by its name.
    pub fn get_mode(&self, name: &str) -> Result<&ModeConfig, String> {
        self.modes.get(name).ok_or_else(|| {
            let available = self.modes.keys().map(|mode| mode.as_str()).collect::<Vec<_>>();
            format!("unknown mode '{name}', available: [{}]", available.join(", "))
        })
    }

    /// Creates instance key format.
    pub fn create_key_format(&self) -> InstanceKeyFormat {
        self.extensions.clone().map(InstanceKeyFormat::new).unwrap_or_default()
    }
}

impl ModeConfig {
    /// Creates source files resolved against the root.
    pub fn create_sources(&self, root: &Path) -> Result<Vec<SourceFile>, String> {
        self.sources.iter().map(|source| source.create_source(root)).collect()
    }

    /// Creates priority order.
    pub fn create_priority(&self) -> PriorityOrder {
        PriorityOrder::new(self.priority.clone().unwrap_or_default())
    }

    /// Creates run policy.
    pub fn create_policy(&self) -> RunPolicy {
        let policy = self.policy.clone().unwrap_or_default();

        RunPolicy {
            fail_fast: policy.fail_fast.unwrap_or(false),
            selection: SelectionPolicy::new(policy.tie_tolerance.unwrap_or(0.)),
            algorithms: self.algorithms.clone(),
        }
    }

    /// Creates artifact templates.
    pub fn create_templates(&self) -> ArtifactTemplates {
        match self.artifacts.as_ref() {
            Some(artifacts) => ArtifactTemplates::new(
                artifacts.templates.clone().unwrap_or_default(),
                artifacts.default_template.clone(),
            ),
            None => ArtifactTemplates::default(),
        }
    }

    /// Returns artifact output directory.
    pub fn get_output_dir(&self) -> PathBuf {
        PathBuf::from(
            self.artifacts.as_ref().and_then(|artifacts| artifacts.output_dir.as_deref()).unwrap_or(DEFAULT_OUTPUT_DIR),
        )
    }

    /// Returns export file name of the algorithm: configured one or derived from algorithm id.
    pub fn get_export_name(&self, algorithm_id: &str) -> String {
        self.exports
            .as_ref()
            .and_then(|exports| exports.get(algorithm_id))
            .cloned()
            .unwrap_or_else(|| format!("{}.csv", sanitize_file_name(algorithm_id)))
    }
}

impl SourceConfig {
    fn create_source(&self, root: &Path) -> Result<SourceFile, String> {
        let schema = RowSchema {
            instance: self.schema.instance,
            algorithm: self.schema.algorithm,
            descriptor: self.schema.descriptor,
            profit: self.schema.profit,
            feasible: self.schema.feasible,
            columns: self.schema.columns,
        };

        let mut descriptor = SourceDescriptor::new(self.path.as_str(), self.label.as_deref(), schema);
        if let Some(delimiter) = self.delimiter.as_deref() {
            descriptor.delimiter = parse_char(delimiter, "delimiter")?
                .ok_or_else(|| format!("empty delimiter of source '{}'", self.path))?;
        }
        if let Some(comment) = self.comment.as_deref() {
            descriptor.comment = parse_char(comment, "comment")?;
        }
        descriptor.has_header = self.has_header.unwrap_or(false);
        descriptor.validate().map_err(|err| err.to_string())?;

        Ok(SourceFile { path: root.join(self.path.as_str()), descriptor })
    }
}

fn parse_char(value: &str, name: &str) -> Result<Option<u8>, String> {
    match value.as_bytes() {
        [] => Ok(None),
        [byte] if byte.is_ascii() => Ok(Some(*byte)),
        _ => Err(format!("{name} must be a single ascii character, got: '{value}'")),
    }
}

/// Replaces characters which are not safe in file names with underscore.
pub fn sanitize_file_name(name: &str) -> String {
    let sanitized = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '.' { c } else { '_' })
        .collect::<String>();

    sanitized.trim_matches('_').to_string()
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}
