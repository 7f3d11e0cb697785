use super::*;
use std::fs;

const CONFIG_PATH: &str = "../data/config.json";

fn get_matches(params: &[&str]) -> Result<ArgMatches, clap::Error> {
    let args = [&["aggregate", CONFIG_PATH], params].concat();

    get_aggregate_app().try_get_matches_from(args)
}

#[test]
fn can_require_mode() {
    assert!(get_matches(&[]).is_err());
    assert!(get_matches(&["--mode", "GB"]).is_ok());
}

#[test]
fn can_parse_flags() {
    let matches = get_matches(&["-m", "GB", "--fail-fast", "--gaps", "--tie-tolerance", "0.01"]).unwrap();

    assert!(matches.get_flag(FAIL_FAST_ARG_NAME));
    assert!(matches.get_flag(GAPS_ARG_NAME));
    assert!(!matches.get_flag(SKIP_ARTIFACTS_ARG_NAME));
    assert_eq!(parse_float_value::<Float>(&matches, TIE_TOLERANCE_ARG_NAME, "tie tolerance"), Ok(Some(0.01)));
}

#[test]
fn can_reject_negative_tie_tolerance() {
    let out_dir = tempfile::tempdir().unwrap();
    let out_dir = out_dir.path().to_str().unwrap();
    let matches = get_matches(&["-m", "GB", "--skip-artifacts", "-o", out_dir, "--tie-tolerance=-1"]).unwrap();

    assert!(run_aggregate(&matches).is_err_and(|err| err.contains("non-negative")));
}

#[test]
fn can_aggregate_greedy_and_backtracking_mode() {
    let out_dir = tempfile::tempdir().unwrap();
    let matches =
        get_matches(&["-m", "GB", "--skip-artifacts", "--gaps", "-o", out_dir.path().to_str().unwrap()]).unwrap();

    let status = run_aggregate(&matches).unwrap();

    assert_eq!(status, RunStatus::Success);
    let selections = fs::read_to_string(out_dir.path().join(SELECTIONS_FILE_NAME)).unwrap();
    assert_eq!(
        selections.lines().collect::<Vec<_>>(),
        vec![
            "instanceId,baselineOptimum,winningProfit,winningRatio,winningAlgorithmId",
            "p1.2.b,15,15,1.0,GR#2",
            "p1.2.c,20,20,1.0,GR#1",
            "p2.2.a,90,90,1.0,BT#1",
            "p3.2.a,30,30,1.0,GR#1",
        ]
    );
    assert!(out_dir.path().join(STATISTICS_FILE_NAME).is_file());
    assert!(out_dir.path().join(GAPS_FILE_NAME).is_file());
}

#[test]
fn can_fail_with_missing_baseline_override() {
    let out_dir = tempfile::tempdir().unwrap();
    let baseline = out_dir.path().join("missing.txt");
    let matches = get_matches(&[
        "-m",
        "GB",
        "--skip-artifacts",
        "-o",
        out_dir.path().to_str().unwrap(),
        "--baseline",
        baseline.to_str().unwrap(),
    ])
    .unwrap();

    assert!(run_aggregate(&matches).is_err_and(|err| err.starts_with("cannot open baseline")));
}
