//! ProcessRunner against real shell commands

#![cfg(unix)]

use bootstrap::core::CommandSpec;
use bootstrap::execution::{CommandError, CommandRunner, ProcessRunner};
use std::path::Path;

#[tokio::test]
async fn zero_exit_is_ok() {
    let runner = ProcessRunner;
    let spec = CommandSpec::new("sh", &["-c", "exit 0"]);
    runner.run(&spec, Path::new("/tmp")).await.unwrap();
}

#[tokio::test]
async fn non_zero_exit_carries_the_code() {
    let runner = ProcessRunner;
    let spec = CommandSpec::new("sh", &["-c", "exit 7"]);
    let err = runner.run(&spec, Path::new("/tmp")).await.unwrap_err();

    match err {
        CommandError::NonZero { exit_code, .. } => assert_eq!(exit_code, 7),
        other => panic!("Expected NonZero, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_program_is_a_spawn_error() {
    let runner = ProcessRunner;
    let spec = CommandSpec::new("definitely-not-a-real-program-42", &[]);
    let err = runner.run(&spec, Path::new("/tmp")).await.unwrap_err();

    assert!(matches!(err, CommandError::Spawn { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn command_runs_in_the_given_directory() {
    let dir = std::env::temp_dir().join("bootstrap-runner-dir-test");
    std::fs::create_dir_all(&dir).unwrap();

    let runner = ProcessRunner;
    let spec = CommandSpec::new("sh", &["-c", "pwd > where.txt"]);
    runner.run(&spec, &dir).await.unwrap();

    let reported = std::fs::read_to_string(dir.join("where.txt")).unwrap();
    assert_eq!(
        Path::new(reported.trim()).canonicalize().unwrap(),
        dir.canonicalize().unwrap()
    );

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn orchestrator_cwd_survives_a_real_run() {
    let before = std::env::current_dir().unwrap();

    let runner = ProcessRunner;
    let spec = CommandSpec::new("sh", &["-c", "true"]);
    runner.run(&spec, Path::new("/tmp")).await.unwrap();

    assert_eq!(std::env::current_dir().unwrap(), before);
}
