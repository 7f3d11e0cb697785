#[cfg(test)]
#[path = "../../tests/unit/commands/aggregate_test.rs"]
mod aggregate_test;

use super::*;
use top_cli::extensions::report::*;
use top_core::analysis::{GapTable, SelectionPolicy};
use top_core::artifacts::ArtifactMaterializer;
use top_core::diagnostics::RunStatus;
use top_core::pipeline::RunPipeline;
use top_core::utils::{Environment, Float};

const BASELINE_ARG_NAME: &str = "baseline";
const FAIL_FAST_ARG_NAME: &str = "fail-fast";
const TIE_TOLERANCE_ARG_NAME: &str = "tie-tolerance";
const SKIP_ARTIFACTS_ARG_NAME: &str = "skip-artifacts";
const GAPS_ARG_NAME: &str = "gaps";

/// A file name of statistics report.
pub const STATISTICS_FILE_NAME: &str = "statistics.csv";
/// A file name of selection report.
pub const SELECTIONS_FILE_NAME: &str = "selections.csv";
/// A file name of gap report.
pub const GAPS_FILE_NAME: &str = "gaps.csv";

pub fn get_aggregate_app() -> Command {
    Command::new("aggregate")
        .about("Selects the best algorithm per instance, writes statistics and copies winning artifacts")
        .arg(get_config_arg())
        .arg(get_mode_arg())
        .arg(get_root_arg())
        .arg(get_out_dir_arg(false))
        .arg(
            Arg::new(BASELINE_ARG_NAME)
                .help("Overrides baseline file from configuration")
                .short('b')
                .long(BASELINE_ARG_NAME)
                .required(false),
        )
        .arg(get_flag_arg(FAIL_FAST_ARG_NAME, "Aborts the run on the first malformed row or unavailable source"))
        .arg(
            Arg::new(TIE_TOLERANCE_ARG_NAME)
                .help("Specifies ratio difference which is still considered as a tie")
                .long(TIE_TOLERANCE_ARG_NAME)
                .required(false),
        )
        .arg(get_flag_arg(SKIP_ARTIFACTS_ARG_NAME, "Skips copying of winning artifacts"))
        .arg(get_flag_arg(GAPS_ARG_NAME, "Writes gap report of every algorithm to the instance winner"))
}

pub fn run_aggregate(matches: &ArgMatches) -> Result<RunStatus, String> {
    let (config, root) = read_config_with_root(matches)?;
    let mode = config.get_mode(get_mode_name(matches)?)?;
    let logger = create_logger();

    let mut policy = mode.create_policy();
    if matches.get_flag(FAIL_FAST_ARG_NAME) {
        policy.fail_fast = true;
    }
    if let Some(tolerance) = parse_float_value::<Float>(matches, TIE_TOLERANCE_ARG_NAME, "tie tolerance")? {
        if tolerance < 0. {
            return Err(format!("tie tolerance must be non-negative, got: {tolerance}"));
        }
        policy.selection = SelectionPolicy::new(tolerance);
    }

    let baseline_path =
        matches.get_one::<String>(BASELINE_ARG_NAME).map(PathBuf::from).unwrap_or_else(|| root.join(&config.baseline));
    let out_dir = matches.get_one::<String>(OUT_DIR_ARG_NAME).map(PathBuf::from).unwrap_or_else(|| root.clone());

    let pipeline = RunPipeline::new(
        mode.create_priority(),
        policy,
        config.create_key_format(),
        Environment::new(logger.clone(), true),
    );

    let mut summary = DiagnosticSummary::default();
    let results = pipeline.load_sources(mode.create_sources(root.as_path())?.as_slice(), &mut summary)?;
    let baseline = pipeline.load_baseline(baseline_path.as_path(), &mut summary)?;
    let mut report = pipeline.run(&results, &baseline, summary);

    if !matches.get_flag(SKIP_ARTIFACTS_ARG_NAME) {
        let materializer =
            ArtifactMaterializer::new(root.as_path(), mode.get_output_dir().as_path(), mode.create_templates());
        pipeline.materialize(&mut report, &materializer);
    }

    create_dir(out_dir.as_path())?;
    write_statistics(create_file(out_dir.join(STATISTICS_FILE_NAME).as_path(), "statistics")?, &report.aggregation)?;
    write_selections(create_file(out_dir.join(SELECTIONS_FILE_NAME).as_path(), "selections")?, &report.aggregation)?;

    if matches.get_flag(GAPS_ARG_NAME) {
        let table = GapTable::new(report.selections.as_slice());
        write_gaps(create_file(out_dir.join(GAPS_FILE_NAME).as_path(), "gaps")?, &table)?;
    }

    create_summary_lines(&report.aggregation, pipeline.priority()).iter().for_each(|line| (logger)(line.as_str()));
    log_diagnostics(&report.summary, &logger);

    let status = report.summary.status();
    (logger)(format!("run finished with {status}").as_str());

    Ok(status)
}
