//! This module reimports commonly used types.

pub use crate::analysis::{aggregate, select, Aggregation, AlgorithmStatistics, GapTable, SelectionPolicy};
pub use crate::artifacts::{ArtifactMaterializer, ArtifactTemplates};
pub use crate::diagnostics::{Diagnostic, DiagnosticSummary, RunStatus};
pub use crate::format::{
    BaselineIndex, BaselineReader, InstanceKeyFormat, ResultSet, ResultsReader, RowSchema, SourceDescriptor,
};
pub use crate::models::{NormalizedResult, PriorityOrder, ResultRecord, SelectionResult};
pub use crate::pipeline::{RunPipeline, RunPolicy, RunReport, SourceFile};
pub use crate::utils::{Environment, Float, GenericError, GenericResult, InfoLogger};
