//! A library part of the command line interface: run configuration and report writers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use top_core as core;

pub mod extensions;
