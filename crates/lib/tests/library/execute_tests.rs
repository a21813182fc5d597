//! Resolve-then-execute tests covering queue ordering and failure policy.

use std::ffi::OsString;

use actionman_lib::{ActionKind, DriverError, Profile, execute, resolve};
use tracing_test::traced_test;

use super::common::{Call, FakeToolchain, Level, RecordingReporter, context, test_config};

#[test]
fn empty_queue_does_no_work() {
  let config = test_config();
  let toolchain = FakeToolchain::new();
  let reporter = RecordingReporter::new();

  let summary = execute(&resolve(Vec::<String>::new()), &context(&config, &toolchain, &reporter)).unwrap();

  assert!(summary.completed.is_empty());
  assert!(toolchain.calls().is_empty());
}

#[test]
fn unrecognized_tokens_do_no_work() {
  let config = test_config();
  let toolchain = FakeToolchain::new();
  let reporter = RecordingReporter::new();

  let summary = execute(&resolve(["nope", "--help"]), &context(&config, &toolchain, &reporter)).unwrap();

  assert!(summary.completed.is_empty());
  assert!(toolchain.calls().is_empty());
  assert!(reporter.at(Level::Failure).is_empty());
}

#[test]
fn build_all_builds_every_profile_in_order() {
  let config = test_config();
  let toolchain = FakeToolchain::new();
  let reporter = RecordingReporter::new();

  let summary = execute(&resolve(["build-all"]), &context(&config, &toolchain, &reporter)).unwrap();

  assert_eq!(summary.completed, [ActionKind::BuildAll]);
  assert_eq!(
    toolchain.builds(),
    Profile::ALL.map(|p| config.profile_dir(p)).to_vec()
  );
}

#[test]
fn build_all_stops_at_first_failure() {
  let config = test_config();
  let toolchain = FakeToolchain::new().failing_build(config.profile_dir(Profile::Profiling), 1);
  let reporter = RecordingReporter::new();

  let err = execute(&resolve(["build-all"]), &context(&config, &toolchain, &reporter)).unwrap_err();

  assert!(matches!(
    err,
    DriverError::BuildFailed {
      profile: Profile::Profiling,
      ..
    }
  ));
  assert_eq!(
    toolchain.builds(),
    [config.profile_dir(Profile::Debug), config.profile_dir(Profile::Profiling)]
  );
  let release = config.profile_dir(Profile::Release);
  assert!(
    !toolchain
      .calls()
      .iter()
      .any(|c| matches!(c, Call::Configure { output_dir, .. } if *output_dir == release))
  );
}

#[test]
fn fatal_error_aborts_remaining_actions() {
  let config = test_config();
  let toolchain = FakeToolchain::new().failing_configure(config.profile_dir(Profile::Debug), 1);
  let reporter = RecordingReporter::new();

  let result = execute(
    &resolve(["debug", "clean-release", "run-release"]),
    &context(&config, &toolchain, &reporter),
  );

  assert!(result.is_err());
  assert!(toolchain.removed().is_empty());
  assert!(toolchain.launches().is_empty());
}

#[test]
fn clean_all_continues_past_failures() {
  let config = test_config();
  let toolchain = FakeToolchain::new().failing_remove(config.profile_dir(Profile::Debug));
  let reporter = RecordingReporter::new();

  let summary = execute(&resolve(["clean-all", "build"]), &context(&config, &toolchain, &reporter)).unwrap();

  assert_eq!(summary.completed, [ActionKind::CleanAll, ActionKind::Build]);
  assert_eq!(toolchain.removed(), Profile::ALL.map(|p| config.profile_dir(p)).to_vec());
  let failures = reporter.at(Level::Failure);
  assert_eq!(failures.len(), 1);
  assert!(failures[0].contains("could not clean debug build directory"));
  assert_eq!(
    reporter.at(Level::Success),
    ["Cleaned profile build directory.", "Cleaned release build directory."]
  );
}

#[test]
fn clean_all_reports_each_failed_directory() {
  let config = test_config();
  let toolchain = FakeToolchain::new()
    .failing_remove(config.profile_dir(Profile::Debug))
    .failing_remove(config.profile_dir(Profile::Release));
  let reporter = RecordingReporter::new();

  execute(&resolve(["clean-all"]), &context(&config, &toolchain, &reporter)).unwrap();

  assert_eq!(toolchain.removed().len(), 3);
  assert_eq!(reporter.at(Level::Failure).len(), 2);
}

#[test]
fn run_params_are_forwarded_and_commands_after_run_ignored() {
  let config = test_config();
  let toolchain = FakeToolchain::new();
  let reporter = RecordingReporter::new();

  let summary = execute(
    &resolve(["build", "run-release", "--flag", "clean"]),
    &context(&config, &toolchain, &reporter),
  )
  .unwrap();

  assert_eq!(summary.completed, [ActionKind::Build, ActionKind::RunRelease]);
  assert!(toolchain.removed().is_empty());
  assert_eq!(
    toolchain.launches(),
    [(
      config.executable_path(Profile::Release),
      vec![OsString::from("--flag"), OsString::from("clean")]
    )]
  );
  // debug from `build`, then release auto-built because its executable is missing
  assert_eq!(
    toolchain.builds(),
    [config.profile_dir(Profile::Debug), config.profile_dir(Profile::Release)]
  );
}

#[test]
fn clean_then_build_runs_in_token_order() {
  let config = test_config();
  let toolchain = FakeToolchain::new();
  let reporter = RecordingReporter::new();

  execute(&resolve(["clean", "debug"]), &context(&config, &toolchain, &reporter)).unwrap();

  let calls = toolchain.calls();
  assert_eq!(calls[0], Call::RemoveTree(config.profile_dir(Profile::Debug)));
  assert_eq!(calls.last(), Some(&Call::Build(config.profile_dir(Profile::Debug))));
}

#[test]
#[traced_test]
fn executed_actions_are_logged() {
  let config = test_config();
  let toolchain = FakeToolchain::new();
  let reporter = RecordingReporter::new();

  execute(&resolve(["clean-profile"]), &context(&config, &toolchain, &reporter)).unwrap();

  assert!(logs_contain("executing action"));
  assert!(logs_contain("clean-profile"));
}
