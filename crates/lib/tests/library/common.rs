//! Shared fakes for library integration tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use actionman_lib::{Config, DriverContext, PlatformKey, ProcessStatus, Reporter, Toolchain};

/// A call made against the fake toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
  EnsureDir(PathBuf),
  Configure {
    source_root: PathBuf,
    output_dir: PathBuf,
    variant: String,
    flags: Vec<String>,
  },
  Build(PathBuf),
  Launch {
    executable: PathBuf,
    args: Vec<OsString>,
  },
  RemoveTree(PathBuf),
}

/// Toolchain that records every call and fails on request.
#[derive(Default)]
pub struct FakeToolchain {
  calls: RefCell<Vec<Call>>,
  existing: RefCell<HashSet<PathBuf>>,
  configure_codes: HashMap<PathBuf, i32>,
  build_codes: HashMap<PathBuf, i32>,
  launch_code: Option<i32>,
  remove_errors: HashSet<PathBuf>,
  spawn_fails: bool,
}

impl FakeToolchain {
  pub fn new() -> Self {
    Self::default()
  }

  /// Pretend `path` already exists on disk.
  pub fn with_existing(self, path: impl Into<PathBuf>) -> Self {
    self.existing.borrow_mut().insert(path.into());
    self
  }

  pub fn failing_configure(mut self, output_dir: impl Into<PathBuf>, code: i32) -> Self {
    self.configure_codes.insert(output_dir.into(), code);
    self
  }

  pub fn failing_build(mut self, output_dir: impl Into<PathBuf>, code: i32) -> Self {
    self.build_codes.insert(output_dir.into(), code);
    self
  }

  pub fn failing_launch(mut self, code: i32) -> Self {
    self.launch_code = Some(code);
    self
  }

  pub fn failing_remove(mut self, dir: impl Into<PathBuf>) -> Self {
    self.remove_errors.insert(dir.into());
    self
  }

  /// Every process fails to start.
  pub fn unspawnable(mut self) -> Self {
    self.spawn_fails = true;
    self
  }

  pub fn calls(&self) -> Vec<Call> {
    self.calls.borrow().clone()
  }

  /// Output directories passed to `build`, in order.
  pub fn builds(&self) -> Vec<PathBuf> {
    self
      .calls()
      .into_iter()
      .filter_map(|c| match c {
        Call::Build(dir) => Some(dir),
        _ => None,
      })
      .collect()
  }

  pub fn removed(&self) -> Vec<PathBuf> {
    self
      .calls()
      .into_iter()
      .filter_map(|c| match c {
        Call::RemoveTree(dir) => Some(dir),
        _ => None,
      })
      .collect()
  }

  pub fn launches(&self) -> Vec<(PathBuf, Vec<OsString>)> {
    self
      .calls()
      .into_iter()
      .filter_map(|c| match c {
        Call::Launch { executable, args } => Some((executable, args)),
        _ => None,
      })
      .collect()
  }

  fn record(&self, call: Call) {
    self.calls.borrow_mut().push(call);
  }

  fn spawn_result(&self, code: i32) -> io::Result<ProcessStatus> {
    if self.spawn_fails {
      return Err(io::Error::new(io::ErrorKind::NotFound, "program not found"));
    }
    Ok(ProcessStatus(Some(code)))
  }
}

impl Toolchain for FakeToolchain {
  fn configure(
    &self,
    source_root: &Path,
    output_dir: &Path,
    variant: &str,
    platform_flags: &[&str],
  ) -> io::Result<ProcessStatus> {
    self.record(Call::Configure {
      source_root: source_root.to_path_buf(),
      output_dir: output_dir.to_path_buf(),
      variant: variant.to_string(),
      flags: platform_flags.iter().map(|f| f.to_string()).collect(),
    });
    self.spawn_result(self.configure_codes.get(output_dir).copied().unwrap_or(0))
  }

  fn build(&self, output_dir: &Path) -> io::Result<ProcessStatus> {
    self.record(Call::Build(output_dir.to_path_buf()));
    self.spawn_result(self.build_codes.get(output_dir).copied().unwrap_or(0))
  }

  fn launch(&self, executable: &Path, args: &[OsString]) -> io::Result<ProcessStatus> {
    self.record(Call::Launch {
      executable: executable.to_path_buf(),
      args: args.to_vec(),
    });
    self.spawn_result(self.launch_code.unwrap_or(0))
  }

  fn ensure_dir(&self, path: &Path) -> io::Result<()> {
    self.record(Call::EnsureDir(path.to_path_buf()));
    self.existing.borrow_mut().insert(path.to_path_buf());
    Ok(())
  }

  fn remove_tree(&self, path: &Path) -> io::Result<()> {
    self.record(Call::RemoveTree(path.to_path_buf()));
    if self.remove_errors.contains(path) {
      return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
    }
    self.existing.borrow_mut().retain(|p| !p.starts_with(path));
    Ok(())
  }

  fn exists(&self, path: &Path) -> bool {
    self.existing.borrow().contains(path)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
  Banner,
  Info,
  Success,
  Failure,
}

/// Reporter that keeps every message.
#[derive(Default)]
pub struct RecordingReporter {
  messages: RefCell<Vec<(Level, String)>>,
}

impl RecordingReporter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn at(&self, level: Level) -> Vec<String> {
    self
      .messages
      .borrow()
      .iter()
      .filter(|(l, _)| *l == level)
      .map(|(_, m)| m.clone())
      .collect()
  }

  fn push(&self, level: Level, message: &str) {
    self.messages.borrow_mut().push((level, message.to_string()));
  }
}

impl Reporter for RecordingReporter {
  fn banner(&self, message: &str) {
    self.push(Level::Banner, message);
  }

  fn info(&self, message: &str) {
    self.push(Level::Info, message);
  }

  fn success(&self, message: &str) {
    self.push(Level::Success, message);
  }

  fn failure(&self, message: &str) {
    self.push(Level::Failure, message);
  }
}

/// Linux-keyed config rooted at `/work/project`.
pub fn test_config() -> Config {
  let mut config = Config::new("/work/project");
  config.platform = PlatformKey::Linux;
  config
}

pub fn context<'a>(
  config: &'a Config,
  toolchain: &'a FakeToolchain,
  reporter: &'a RecordingReporter,
) -> DriverContext<'a> {
  DriverContext::new(config, toolchain, reporter)
}
