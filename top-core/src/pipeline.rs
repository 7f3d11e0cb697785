//! A single pass run: load sources and baseline, normalize, select winners, aggregate.

#[cfg(test)]
#[path = "../tests/unit/pipeline_test.rs"]
mod pipeline_test;

use crate::analysis::{aggregate, normalize_all, select, Aggregation, SelectionPolicy};
use crate::artifacts::ArtifactMaterializer;
use crate::diagnostics::{AlignmentKind, Diagnostic, DiagnosticSummary};
use crate::format::*;
use crate::models::{matches_wildcard, PriorityOrder, ResultRecord, SelectionResult};
use crate::utils::{maybe_parallel_collect, Environment, GenericError, GenericResult};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// A result source located on disk.
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// Source file path.
    pub path: PathBuf,
    /// Source descriptor.
    pub descriptor: SourceDescriptor,
}

/// Specifies run behavior.
#[derive(Clone, Debug, Default)]
pub struct RunPolicy {
    /// Abort the run on the first malformed row or unavailable source.
    pub fail_fast: bool,
    /// Winner selection policy.
    pub selection: SelectionPolicy,
    /// Algorithm ids or `*` patterns allowed to participate, `None` allows all.
    pub algorithms: Option<Vec<String>>,
}

/// An outcome of the run.
#[derive(Clone, Debug, Default)]
pub struct RunReport {
    /// Selections in instance order.
    pub selections: Vec<SelectionResult>,
    /// Corpus statistics.
    pub aggregation: Aggregation,
    /// All diagnostics collected so far.
    pub summary: DiagnosticSummary,
}

/// Runs aggregation of solver results.
pub struct RunPipeline {
    priority: PriorityOrder,
    policy: RunPolicy,
    key_format: InstanceKeyFormat,
    environment: Environment,
}

impl RunPipeline {
    /// Creates a new instance of `RunPipeline`.
    pub fn new(
        priority: PriorityOrder,
        policy: RunPolicy,
        key_format: InstanceKeyFormat,
        environment: Environment,
    ) -> Self {
        Self { priority, policy, key_format, environment }
    }

    /// Returns priority order used by the pipeline.
    pub fn priority(&self) -> &PriorityOrder {
        &self.priority
    }

    /// Loads result sources, possibly in parallel, and merges them in source order.
    /// Returns an error on invalid descriptor, when no source can be loaded, or on the first
    /// problem in fail-fast mode.
    pub fn load_sources(&self, sources: &[SourceFile], summary: &mut DiagnosticSummary) -> GenericResult<ResultSet> {
        if sources.is_empty() {
            return Err("no result sources configured".into());
        }

        sources.iter().try_for_each(|source| source.descriptor.validate())?;

        let loaded = maybe_parallel_collect(sources, self.environment.is_parallel, |source| {
            File::open(source.path.as_path())
                .map(|file| BufReader::new(file).read_results(&source.descriptor, &self.key_format))
                .map_err(|err| Diagnostic::SourceUnavailable {
                    source: source.descriptor.name.clone(),
                    details: format!("'{}': {err}", source.path.display()),
                })
        });

        let logger = &self.environment.logger;
        let mut results = ResultSet::default();
        let mut available = 0;

        for source in loaded {
            match source {
                Ok(source) => {
                    if let Some(error) = source.errors.first().filter(|_| self.policy.fail_fast) {
                        return Err(error.to_string().into());
                    }

                    (logger)(
                        format!(
                            "loaded {} record(s) from '{}', {} row(s) skipped",
                            source.records.len(),
                            source.name,
                            source.errors.len()
                        )
                        .as_str(),
                    );

                    available += 1;
                    summary.extend(source.errors);
                    summary.extend(results.merge(source.name.as_str(), source.records));
                }
                Err(diagnostic) if self.policy.fail_fast => return Err(diagnostic.to_string().into()),
                Err(diagnostic) => summary.add(diagnostic),
            }
        }

        if available == 0 {
            return Err("none of result sources can be loaded".into());
        }

        Ok(results)
    }

    /// Loads baseline from the file. Any problem with the file itself is fatal.
    pub fn load_baseline(&self, path: &Path, summary: &mut DiagnosticSummary) -> GenericResult<BaselineIndex> {
        let file = File::open(path)
            .map_err(|err| GenericError::from(format!("cannot open baseline '{}': {err}", path.display())))?;

        let (baseline, warnings) = BufReader::new(file).read_baseline(&self.key_format)?;

        (self.environment.logger)(format!("loaded baseline of {} instance(s)", baseline.len()).as_str());
        summary.extend(warnings);

        Ok(baseline)
    }

    /// Returns true if the algorithm passes configured allow-list.
    pub fn is_allowed(&self, algorithm_id: &str) -> bool {
        self.policy.algorithms.as_ref().map_or(true, |algorithms| {
            algorithms.iter().any(|pattern| pattern == algorithm_id || matches_wildcard(pattern, algorithm_id))
        })
    }

    /// Normalizes results, selects winner per instance and aggregates statistics.
    pub fn run(&self, results: &ResultSet, baseline: &BaselineIndex, mut summary: DiagnosticSummary) -> RunReport {
        let mut selections = Vec::with_capacity(results.len());

        for instance_id in results.instances() {
            let Some(optimum) = baseline.get(instance_id) else {
                summary.add(Diagnostic::AlignmentError {
                    instance: instance_id.clone(),
                    kind: AlignmentKind::MissingBaseline,
                });
                continue;
            };

            let records = results
                .get(instance_id)
                .unwrap_or_default()
                .iter()
                .filter(|record| self.is_allowed(record.algorithm_id.as_str()))
                .cloned()
                .collect::<Vec<ResultRecord>>();

            let (normalized, anomalies) = normalize_all(records, optimum);
            summary.extend(anomalies);

            match select(instance_id, optimum, normalized, &self.priority, &self.policy.selection) {
                Ok(selection) => selections.push(selection),
                Err(diagnostic) => summary.add(diagnostic),
            }
        }

        summary.extend(baseline.entries().filter(|entry| !results.contains(entry.instance_id.as_str())).map(
            |entry| Diagnostic::AlignmentError {
                instance: entry.instance_id.clone(),
                kind: AlignmentKind::MissingResults,
            },
        ));

        (self.environment.logger)(
            format!("selected winners on {} of {} instance(s)", selections.len(), results.len()).as_str(),
        );

        let aggregation = aggregate(selections.as_slice());

        RunReport { selections, aggregation, summary }
    }

    /// Copies winning artifacts and records their failures in the report summary.
    pub fn materialize(&self, report: &mut RunReport, materializer: &ArtifactMaterializer) -> Vec<PathBuf> {
        let (copied, failed) = materializer.materialize_all(report.selections.as_slice(), &self.environment.logger);
        report.summary.extend(failed);

        copied
    }
}
