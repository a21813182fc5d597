//! Error types for the drivers.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::profile::{Profile, ProfileError};

/// The step of the pipeline an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
  Configure,
  Build,
  Run,
  Clean,
}

impl Stage {
  pub fn as_str(self) -> &'static str {
    match self {
      Stage::Configure => "configure",
      Stage::Build => "build",
      Stage::Run => "run",
      Stage::Clean => "clean",
    }
  }
}

impl fmt::Display for Stage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

fn describe_code(code: &Option<i32>) -> String {
  match code {
    Some(code) => format!("exit code {code}"),
    None => "terminated by signal".to_string(),
  }
}

/// Errors that can occur while running a driver
#[derive(Debug, Error)]
pub enum DriverError {
  /// A profile identifier did not name a known profile.
  ///
  /// Driver dispatch goes through the closed [`Profile`] enum and never
  /// produces this; it exists for callers that resolve identifiers first.
  #[error(transparent)]
  UnknownProfile(#[from] ProfileError),

  /// cmake configure exited non-zero.
  #[error("configure failed for {profile} ({})", describe_code(.code))]
  ConfigureFailed { profile: Profile, code: Option<i32> },

  /// cmake --build exited non-zero.
  #[error("build failed for {profile} ({})", describe_code(.code))]
  BuildFailed { profile: Profile, code: Option<i32> },

  /// The built executable exited non-zero.
  #[error("execution failed for {profile} ({})", describe_code(.code))]
  ExecutionFailed { profile: Profile, code: Option<i32> },

  /// A profile directory could not be removed.
  #[error("could not clean {profile} build directory {}: {source}", .path.display())]
  CleanFailed {
    profile: Profile,
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// An external process could not be started at all.
  #[error("{stage} failed: could not start {program}: {source}")]
  Spawn {
    stage: Stage,
    program: String,
    #[source]
    source: std::io::Error,
  },

  /// The profile output directory could not be created.
  #[error("configure failed: could not create {}: {source}", .path.display())]
  CreateDir {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl DriverError {
  /// Pipeline stage that produced this error
  pub fn stage(&self) -> Stage {
    match self {
      DriverError::UnknownProfile(_) => Stage::Configure,
      DriverError::ConfigureFailed { .. } | DriverError::CreateDir { .. } => Stage::Configure,
      DriverError::BuildFailed { .. } => Stage::Build,
      DriverError::ExecutionFailed { .. } => Stage::Run,
      DriverError::CleanFailed { .. } => Stage::Clean,
      DriverError::Spawn { stage, .. } => *stage,
    }
  }

  /// Exit code of the failed process, when there was one
  pub fn exit_code(&self) -> Option<i32> {
    match self {
      DriverError::ConfigureFailed { code, .. }
      | DriverError::BuildFailed { code, .. }
      | DriverError::ExecutionFailed { code, .. } => *code,
      _ => None,
    }
  }

  /// Whether this error must abort the remaining actions
  pub fn is_fatal(&self) -> bool {
    !matches!(self, DriverError::CleanFailed { .. })
  }
}
