//! A collection of models which represent solver results, baselines and selection outcomes.

mod priority;
pub use self::priority::{matches_wildcard, PriorityOrder};

mod results;
pub use self::results::*;

mod selection;
pub use self::selection::SelectionResult;

/// An instance key: the problem file name without quoting artifacts and extension suffix.
pub type InstanceId = String;
