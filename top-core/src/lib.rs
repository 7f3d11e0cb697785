//! Core crate contains logic to aggregate results of Team Orienteering Problem solvers run with
//! many algorithm variants on a benchmark corpus.
//!
//! # Overview
//!
//! Every algorithm variant reports an achieved profit per problem instance while a reference
//! solver provides a best known profit (the baseline). The crate:
//!
//! - reads heterogeneous result sources described by an explicit row schema, see [`format`];
//! - normalizes profits against the baseline and selects a winning algorithm per instance using
//!   a priority based tie-break, see [`analysis`];
//! - aggregates per algorithm statistics and win counters;
//! - copies solution artifacts of winners into a single directory, see [`artifacts`].
//!
//! Problems found on the way are collected as [`diagnostics::Diagnostic`] and summarized at the
//! end of the run. The whole flow is wired by [`pipeline::RunPipeline`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub mod prelude;

pub mod analysis;
pub mod artifacts;
pub mod diagnostics;
pub mod format;
pub mod models;
pub mod pipeline;
pub mod utils;
