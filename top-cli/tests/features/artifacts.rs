use crate::cli::{get_app, run_subcommand};
use std::fs;
use top_core::diagnostics::RunStatus;

#[test]
fn can_copy_winning_artifacts() {
    let root = tempfile::tempdir().unwrap();
    super::copy_sample_data(root.path());
    let config = root.path().join("config.json");

    let args = vec!["top-cli", "aggregate", config.to_str().unwrap(), "-m", "GB"];
    let status = run_subcommand(get_app().try_get_matches_from(args).unwrap()).unwrap();

    assert_eq!(status, RunStatus::Success);
    let best = root.path().join("best/GB");
    let mut files = fs::read_dir(best.as_path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    files.sort();
    assert_eq!(files, vec!["p1.2.b.out", "p1.2.c.out", "p2.2.a.out", "p3.2.a.out"]);
    assert_eq!(
        fs::read_to_string(best.join("p1.2.b.out")).unwrap(),
        fs::read_to_string(root.path().join("outputs/greedy2/p1.2.b.out")).unwrap()
    );
    assert!(root.path().join("statistics.csv").is_file());
}

#[test]
fn can_continue_when_artifact_is_missing() {
    let root = tempfile::tempdir().unwrap();
    super::copy_sample_data(root.path());
    fs::remove_file(root.path().join("outputs/SA/hot/p1.2.b.out")).unwrap();
    let config = root.path().join("config.json");

    let args = vec!["top-cli", "aggregate", config.to_str().unwrap(), "-m", "LS"];
    let status = run_subcommand(get_app().try_get_matches_from(args).unwrap()).unwrap();

    assert_eq!(status, RunStatus::PartialSuccess);
    assert_eq!(status.exit_code(), 2);
    assert!(!root.path().join("best/LS/p1.2.b.out").exists());
    assert!(root.path().join("best/LS/p2.2.a.out").is_file());
}
