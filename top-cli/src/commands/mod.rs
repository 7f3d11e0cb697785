use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod aggregate;
pub mod export;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use top_cli::extensions::config::{read_config, Config};
use top_core::diagnostics::{DiagnosticSummary, Severity};
use top_core::utils::InfoLogger;

const CONFIG_ARG_NAME: &str = "CONFIG";
const MODE_ARG_NAME: &str = "mode";
const ROOT_ARG_NAME: &str = "root";
const OUT_DIR_ARG_NAME: &str = "out-dir";

fn get_config_arg() -> Arg {
    Arg::new(CONFIG_ARG_NAME).help("Sets run configuration file").required(true).index(1)
}

fn get_mode_arg() -> Arg {
    Arg::new(MODE_ARG_NAME)
        .help("Specifies run mode defined in configuration")
        .short('m')
        .long(MODE_ARG_NAME)
        .required(true)
}

fn get_root_arg() -> Arg {
    Arg::new(ROOT_ARG_NAME)
        .help("Specifies root directory to resolve configured paths, default is directory of configuration file")
        .short('r')
        .long(ROOT_ARG_NAME)
        .required(false)
}

fn get_out_dir_arg(is_required: bool) -> Arg {
    Arg::new(OUT_DIR_ARG_NAME)
        .help("Specifies directory for reports")
        .short('o')
        .long(OUT_DIR_ARG_NAME)
        .required(is_required)
}

fn get_flag_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).help(help).long(name).required(false).action(ArgAction::SetTrue)
}

fn open_file(path: &Path, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{}': '{err}'", path.display()))
}

fn create_file(path: &Path, description: &str) -> Result<BufWriter<File>, String> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|err| format!("cannot create {description} file '{}': '{err}'", path.display()))
}

fn create_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path).map_err(|err| format!("cannot create directory '{}': '{err}'", path.display()))
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

/// Reads config and resolves run root: explicit one or config file directory.
fn read_config_with_root(matches: &ArgMatches) -> Result<(Config, PathBuf), String> {
    let config_path = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(PathBuf::from)
        .ok_or_else(|| "config file is not specified".to_string())?;

    let config = read_config(BufReader::new(open_file(config_path.as_path(), "config")?))?;

    let root = matches.get_one::<String>(ROOT_ARG_NAME).map(PathBuf::from).unwrap_or_else(|| {
        config_path.parent().map(|parent| parent.to_path_buf()).unwrap_or_else(|| PathBuf::from("."))
    });

    Ok((config, root))
}

fn get_mode_name(matches: &ArgMatches) -> Result<&str, String> {
    matches
        .get_one::<String>(MODE_ARG_NAME)
        .map(|mode| mode.as_str())
        .ok_or_else(|| "mode is not specified".to_string())
}

fn create_logger() -> InfoLogger {
    Arc::new(|msg: &str| log::info!("{msg}"))
}

fn log_diagnostics(summary: &DiagnosticSummary, logger: &InfoLogger) {
    summary.all().iter().for_each(|diagnostic| match diagnostic.severity() {
        Severity::Warning => log::warn!("{diagnostic}"),
        Severity::Error => log::error!("{diagnostic}"),
    });

    summary.describe(logger);
}
