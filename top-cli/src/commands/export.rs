#[cfg(test)]
#[path = "../../tests/unit/commands/export_test.rs"]
mod export_test;

use super::*;
use top_cli::extensions::report::{create_ratio_exports, write_ratio_export};
use top_core::diagnostics::RunStatus;
use top_core::pipeline::RunPipeline;
use top_core::utils::Environment;

pub fn get_export_app() -> Command {
    Command::new("export")
        .about("Exports normalized profits of every algorithm into a separate csv file")
        .arg(get_config_arg())
        .arg(get_mode_arg())
        .arg(get_root_arg())
        .arg(get_out_dir_arg(true))
}

pub fn run_export(matches: &ArgMatches) -> Result<RunStatus, String> {
    let (config, root) = read_config_with_root(matches)?;
    let mode = config.get_mode(get_mode_name(matches)?)?;
    let out_dir = matches
        .get_one::<String>(OUT_DIR_ARG_NAME)
        .map(PathBuf::from)
        .ok_or_else(|| "output directory is not specified".to_string())?;
    let logger = create_logger();

    let pipeline = RunPipeline::new(
        mode.create_priority(),
        mode.create_policy(),
        config.create_key_format(),
        Environment::new(logger.clone(), true),
    );

    let mut summary = DiagnosticSummary::default();
    let results = pipeline.load_sources(mode.create_sources(root.as_path())?.as_slice(), &mut summary)?;
    let baseline = pipeline.load_baseline(root.join(&config.baseline).as_path(), &mut summary)?;
    let report = pipeline.run(&results, &baseline, summary);

    create_dir(out_dir.as_path())?;
    create_ratio_exports(report.selections.as_slice()).iter().try_for_each(|export| {
        let path = out_dir.join(mode.get_export_name(export.algorithm_id.as_str()));
        (logger)(format!("exporting {} to '{}'", export.algorithm_id, path.display()).as_str());

        write_ratio_export(create_file(path.as_path(), "export")?, export)
    })?;

    log_diagnostics(&report.summary, &logger);

    Ok(report.summary.status())
}
