use super::*;
use std::fs;

const CONFIG_PATH: &str = "../data/config.json";

#[test]
fn can_require_out_dir() {
    assert!(get_export_app().try_get_matches_from(["export", CONFIG_PATH, "-m", "GB"]).is_err());
}

#[test]
fn can_export_ratios_per_algorithm() {
    let out_dir = tempfile::tempdir().unwrap();
    let args = ["export", CONFIG_PATH, "-m", "GB", "-o", out_dir.path().to_str().unwrap()];
    let matches = get_export_app().try_get_matches_from(args).unwrap();

    let status = run_export(&matches).unwrap();

    assert_eq!(status, RunStatus::Success);
    let greedy = fs::read_to_string(out_dir.path().join("SolGreedy#1.csv")).unwrap();
    assert_eq!(
        greedy.lines().collect::<Vec<_>>(),
        vec![
            "instance,baselineOptimum,profit,ratio",
            "p1.2.b,15,10,0.6666666666666666",
            "p1.2.c,20,20,1.0",
            "p2.2.a,90,80,0.8888888888888888",
            "p3.2.a,30,30,1.0",
        ]
    );
    assert!(out_dir.path().join("SolGreedy#2.csv").is_file());
    assert!(out_dir.path().join("SolBacktrack#1.csv").is_file());
}

#[test]
fn can_export_with_derived_file_names() {
    let out_dir = tempfile::tempdir().unwrap();
    let args = ["export", CONFIG_PATH, "-m", "LS", "-o", out_dir.path().to_str().unwrap()];
    let matches = get_export_app().try_get_matches_from(args).unwrap();

    run_export(&matches).unwrap();

    let mut files = fs::read_dir(out_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    files.sort();
    assert_eq!(files, vec!["HC__steep.csv", "SA__hot.csv", "TS__pumped30000.csv"]);
}
