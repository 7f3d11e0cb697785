//! A command line interface to aggregate Team Orienteering Problem solver results.

#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

mod commands;

mod cli {
    use super::commands::aggregate::{get_aggregate_app, run_aggregate};
    use super::commands::export::{get_export_app, run_export};
    use clap::{ArgMatches, Command};
    use top_core::diagnostics::RunStatus;

    pub fn get_app() -> Command {
        Command::new("Team Orienteering Problem results aggregator")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to aggregate and compare results of Team Orienteering Problem solvers")
            .subcommand(get_aggregate_app())
            .subcommand(get_export_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) -> Result<RunStatus, String> {
        match arg_matches.subcommand() {
            Some(("aggregate", aggregate_matches)) => run_aggregate(aggregate_matches),
            Some(("export", export_matches)) => run_export(export_matches),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        }
    }
}

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli::get_app().get_matches();

    match cli::run_subcommand(matches) {
        Ok(status) => process::exit(status.exit_code()),
        Err(err) => {
            log::error!("{err}");
            process::exit(1);
        }
    }
}
