//! Copies solution artifacts of instance winners into a single output directory.

#[cfg(test)]
#[path = "../tests/unit/artifacts_test.rs"]
mod artifacts_test;

use crate::diagnostics::Diagnostic;
use crate::models::{ResultRecord, SelectionResult};
use crate::utils::InfoLogger;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Keeps artifact path templates per algorithm id. A template can use `{instance}`, `{algorithm}`,
/// `{label}` and `{descriptor}` placeholders.
#[derive(Clone, Debug, Default)]
pub struct ArtifactTemplates {
    templates: FxHashMap<String, String>,
    default_template: Option<String>,
}

impl ArtifactTemplates {
    /// Creates a new instance of `ArtifactTemplates`.
    pub fn new<I>(templates: I, default_template: Option<String>) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self { templates: templates.into_iter().collect(), default_template }
    }

    /// Returns template of the algorithm, falls back to default one.
    pub fn get(&self, algorithm_id: &str) -> Option<&str> {
        self.templates.get(algorithm_id).or(self.default_template.as_ref()).map(|template| template.as_str())
    }
}

/// Fills template placeholders using record data.
pub fn fill_template(template: &str, record: &ResultRecord) -> String {
    template
        .replace("{instance}", record.instance_id.as_str())
        .replace("{algorithm}", record.algorithm_id.as_str())
        .replace("{label}", record.label.as_str())
        .replace("{descriptor}", record.descriptor.as_deref().unwrap_or_default())
}

/// Materializes winning artifacts.
pub struct ArtifactMaterializer {
    root: PathBuf,
    output_dir: PathBuf,
    templates: ArtifactTemplates,
}

impl ArtifactMaterializer {
    /// Creates a new instance of `ArtifactMaterializer`. Relative templates are resolved against
    /// `root`, relative `output_dir` too.
    pub fn new(root: &Path, output_dir: &Path, templates: ArtifactTemplates) -> Self {
        Self { root: root.to_path_buf(), output_dir: root.join(output_dir), templates }
    }

    /// Returns output directory.
    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_path()
    }

    /// Returns resolved artifact location of the winner.
    pub fn resolve(&self, selection: &SelectionResult) -> Option<PathBuf> {
        let winner = selection.winner()?;
        let template = self.templates.get(selection.winning_algorithm_id.as_str())?;

        Some(self.root.join(fill_template(template, &winner.record)))
    }

    /// Copies winner artifact of the selection as `<instance>.<source extension>`.
    pub fn materialize(&self, selection: &SelectionResult) -> Result<PathBuf, Diagnostic> {
        let instance = selection.instance_id.clone();
        let algorithm = selection.winning_algorithm_id.clone();

        let source = self.resolve(selection).ok_or_else(|| Diagnostic::ArtifactMissing {
            instance: instance.clone(),
            algorithm: algorithm.clone(),
            path: None,
        })?;

        if !source.is_file() {
            return Err(Diagnostic::ArtifactMissing { instance, algorithm, path: Some(source) });
        }

        let file_name = match source.extension().and_then(|extension| extension.to_str()) {
            Some(extension) => format!("{instance}.{extension}"),
            None => instance.clone(),
        };
        let target = self.output_dir.join(file_name);

        let create_io_error = |details: String| Diagnostic::ArtifactIo {
            instance: instance.clone(),
            algorithm: algorithm.clone(),
            path: source.clone(),
            details,
        };

        fs::create_dir_all(self.output_dir.as_path())
            .map_err(|err| create_io_error(format!("cannot create '{}': {err}", self.output_dir.display())))?;
        fs::copy(source.as_path(), target.as_path()).map_err(|err| create_io_error(err.to_string()))?;

        Ok(target)
    }

    /// Materializes artifacts of all selections. Failure on one instance does not stop others.
    pub fn materialize_all(
        &self,
        selections: &[SelectionResult],
        logger: &InfoLogger,
    ) -> (Vec<PathBuf>, Vec<Diagnostic>) {
        let (copied, failed): (Vec<_>, Vec<_>) =
            selections.iter().map(|selection| self.materialize(selection)).partition(|result| result.is_ok());

        let copied = copied.into_iter().filter_map(Result::ok).collect::<Vec<_>>();
        let failed = failed.into_iter().filter_map(Result::err).collect::<Vec<_>>();

        (logger)(
            format!("copied {} artifact(s) into '{}', {} failed", copied.len(), self.output_dir.display(), failed.len())
                .as_str(),
        );

        (copied, failed)
    }
}
