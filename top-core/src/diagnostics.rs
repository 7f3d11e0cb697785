//! Diagnostics collected during a run: parse and alignment problems, ratio anomalies, selection
//! and artifact failures. Diagnostics never abort the run on their own, instead they are gathered
//! into [`DiagnosticSummary`] which derives the final [`RunStatus`].

#[cfg(test)]
#[path = "../tests/unit/diagnostics_test.rs"]
mod diagnostics_test;

use crate::models::InstanceId;
use crate::utils::{Float, InfoLogger};
use std::fmt;
use std::path::PathBuf;

/// Specifies which side of the instance alignment is missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlignmentKind {
    /// Instance has results, but no baseline entry.
    MissingBaseline,
    /// Instance has a baseline entry, but no results.
    MissingResults,
}

/// Specifies diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// A problem which is reported, but does not change run status.
    Warning,
    /// A problem which degrades run status.
    Error,
}

/// A problem found while processing solver results.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// A malformed row in a result or baseline source.
    ParseError {
        /// Source identity.
        source: String,
        /// 1-based line number.
        line: usize,
        /// Problem details.
        details: String,
    },
    /// A result source cannot be read at all.
    SourceUnavailable {
        /// Source identity.
        source: String,
        /// Problem details.
        details: String,
    },
    /// A baseline entry is defined more than once, the last one wins.
    DuplicateBaseline {
        /// Instance key.
        instance: InstanceId,
        /// Line of the previous definition.
        first_line: usize,
        /// Line of the overriding definition.
        line: usize,
    },
    /// An algorithm has more than one result on the instance, the last one wins.
    DuplicateResult {
        /// Instance key.
        instance: InstanceId,
        /// Algorithm identity.
        algorithm: String,
        /// Source of the overriding result.
        source: String,
    },
    /// Instance is present only in results or only in baseline.
    AlignmentError {
        /// Instance key.
        instance: InstanceId,
        /// Missing side.
        kind: AlignmentKind,
    },
    /// No candidate results are available to select a winner.
    EmptyCandidateSet {
        /// Instance key.
        instance: InstanceId,
    },
    /// Normalized profit exceeds baseline beyond tolerance.
    RatioAnomaly {
        /// Instance key.
        instance: InstanceId,
        /// Algorithm identity.
        algorithm: String,
        /// Reported profit.
        profit: u64,
        /// Baseline optimum.
        optimum: u64,
        /// Computed ratio.
        ratio: Float,
    },
    /// An artifact of the winning algorithm cannot be located.
    ArtifactMissing {
        /// Instance key.
        instance: InstanceId,
        /// Winning algorithm identity.
        algorithm: String,
        /// Expected artifact location, `None` when no template is configured for the algorithm.
        path: Option<PathBuf>,
    },
    /// An artifact was located, but cannot be copied.
    ArtifactIo {
        /// Instance key.
        instance: InstanceId,
        /// Winning algorithm identity.
        algorithm: String,
        /// Artifact location.
        path: PathBuf,
        /// Problem details.
        details: String,
    },
}

impl Diagnostic {
    /// Returns a stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ParseError { .. } => "E1001",
            Self::SourceUnavailable { .. } => "E1002",
            Self::DuplicateBaseline { .. } => "W2001",
            Self::AlignmentError { .. } => "W2002",
            Self::DuplicateResult { .. } => "W2003",
            Self::EmptyCandidateSet { .. } => "E3001",
            Self::RatioAnomaly { .. } => "W3002",
            Self::ArtifactMissing { .. } => "E4001",
            Self::ArtifactIo { .. } => "E4002",
        }
    }

    /// Returns diagnostic severity.
    pub fn severity(&self) -> Severity {
        match self {
            Self::DuplicateBaseline { .. }
            | Self::DuplicateResult { .. }
            | Self::AlignmentError { .. }
            | Self::RatioAnomaly { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Returns a possible cause of the diagnostic.
    pub fn cause(&self) -> String {
        match self {
            Self::ParseError { source, line, details } => format!("cannot parse '{source}' at line {line}: {details}"),
            Self::SourceUnavailable { source, details } => format!("cannot read source '{source}': {details}"),
            Self::DuplicateBaseline { instance, first_line, line } => {
                format!("baseline for '{instance}' is defined at line {first_line} and redefined at line {line}")
            }
            Self::DuplicateResult { instance, algorithm, source } => {
                format!("{algorithm} has more than one result on '{instance}', the one from '{source}' is kept")
            }
            Self::AlignmentError { instance, kind: AlignmentKind::MissingBaseline } => {
                format!("instance '{instance}' has results, but no baseline")
            }
            Self::AlignmentError { instance, kind: AlignmentKind::MissingResults } => {
                format!("instance '{instance}' has baseline, but no results")
            }
            Self::EmptyCandidateSet { instance } => format!("instance '{instance}' has no candidate results"),
            Self::RatioAnomaly { instance, algorithm, profit, optimum, ratio } => {
                format!("{algorithm} on '{instance}' has profit of {profit} / {optimum} (ratio {ratio})")
            }
            Self::ArtifactMissing { instance, algorithm, path: Some(path) } => {
                format!("artifact of {algorithm} for '{instance}' is not found at '{}'", path.display())
            }
            Self::ArtifactMissing { instance, algorithm, path: None } => {
                format!("no artifact template for {algorithm}, winner on '{instance}'")
            }
            Self::ArtifactIo { instance, algorithm, path, details } => {
                format!("cannot copy artifact of {algorithm} for '{instance}' from '{}': {details}", path.display())
            }
        }
    }

    /// Returns an action to take in order to resolve the problem.
    pub fn action(&self) -> &'static str {
        match self {
            Self::ParseError { .. } => "check row against configured source schema",
            Self::SourceUnavailable { .. } => "check source path",
            Self::DuplicateBaseline { .. } => "remove duplicate baseline entry",
            Self::DuplicateResult { .. } => "remove duplicate result row or give algorithms distinct labels",
            Self::AlignmentError { .. } => "check that results and baseline cover the same instances",
            Self::EmptyCandidateSet { .. } => "check result sources and algorithm filter",
            Self::RatioAnomaly { .. } => "check baseline value or confirm improved solution",
            Self::ArtifactMissing { .. } => "check artifact templates and solver outputs",
            Self::ArtifactIo { .. } => "check file permissions and output directory",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code(), self.cause(), self.action())
    }
}

/// A final status of the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunStatus {
    /// Everything is processed.
    Success,
    /// Some rows, sources or artifacts are skipped.
    PartialSuccess,
    /// At least one instance cannot be processed.
    Failure,
}

impl RunStatus {
    /// Returns a process exit code which corresponds to the status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
            Self::PartialSuccess => 2,
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::PartialSuccess => write!(f, "partial success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

/// Collects diagnostics of the whole run.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticSummary {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSummary {
    /// Adds a new diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Returns all collected diagnostics in the order they were added.
    pub fn all(&self) -> &[Diagnostic] {
        self.diagnostics.as_slice()
    }

    /// Returns diagnostics of given severity.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.diagnostics.iter().filter(move |diagnostic| diagnostic.severity() == severity)
    }

    /// Returns true if nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns amount of diagnostics per code in order of the first occurrence.
    pub fn count_by_code(&self) -> Vec<(&'static str, usize)> {
        self.diagnostics.iter().fold(Vec::<(&'static str, usize)>::new(), |mut acc, diagnostic| {
            match acc.iter().position(|(code, _)| *code == diagnostic.code()) {
                Some(idx) => acc[idx].1 += 1,
                None => acc.push((diagnostic.code(), 1)),
            }
            acc
        })
    }

    /// Derives run status from collected diagnostics.
    pub fn status(&self) -> RunStatus {
        self.diagnostics
            .iter()
            .map(|diagnostic| match diagnostic {
                Diagnostic::EmptyCandidateSet { .. } => RunStatus::Failure,
                diagnostic if diagnostic.severity() == Severity::Error => RunStatus::PartialSuccess,
                _ => RunStatus::Success,
            })
            .max()
            .unwrap_or(RunStatus::Success)
    }

    /// Writes end of run summary using given logger.
    pub fn describe(&self, logger: &InfoLogger) {
        if self.diagnostics.is_empty() {
            (logger)("no problems found");
            return;
        }

        let counts =
            self.count_by_code().into_iter().map(|(code, count)| format!("{code}: {count}")).collect::<Vec<_>>();
        (logger)(format!("found {} problem(s) ({})", self.diagnostics.len(), counts.join(", ")).as_str());
    }
}

impl Extend<Diagnostic> for DiagnosticSummary {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.diagnostics.extend(iter)
    }
}
