//! External collaborators: cmake, the built executable and the filesystem.
//!
//! Drivers talk to the outside world only through [`Toolchain`], so the
//! action engine can be exercised without cmake installed.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::debug;

/// Exit status of a finished child process
///
/// The code is `None` when the child was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatus(pub Option<i32>);

impl ProcessStatus {
  pub fn success(self) -> bool {
    self.0 == Some(0)
  }

  pub fn code(self) -> Option<i32> {
    self.0
  }
}

impl From<ExitStatus> for ProcessStatus {
  fn from(status: ExitStatus) -> Self {
    ProcessStatus(status.code())
  }
}

/// Operations the drivers need from the host
///
/// Process methods block until the child exits and return `Err` only when the
/// process could not be started.
pub trait Toolchain {
  /// Generate the build system for `output_dir` from `source_root`
  fn configure(
    &self,
    source_root: &Path,
    output_dir: &Path,
    variant: &str,
    platform_flags: &[&str],
  ) -> io::Result<ProcessStatus>;

  /// Compile a previously configured output directory
  fn build(&self, output_dir: &Path) -> io::Result<ProcessStatus>;

  /// Run an executable with inherited standard streams
  fn launch(&self, executable: &Path, args: &[OsString]) -> io::Result<ProcessStatus>;

  fn ensure_dir(&self, path: &Path) -> io::Result<()>;

  /// Remove a directory tree; a missing directory is not an error
  fn remove_tree(&self, path: &Path) -> io::Result<()>;

  fn exists(&self, path: &Path) -> bool;
}

/// [`Toolchain`] backed by real processes and the local filesystem
#[derive(Debug, Clone)]
pub struct SystemToolchain {
  cmake: String,
  generator: String,
}

impl SystemToolchain {
  pub fn new(cmake: impl Into<String>, generator: impl Into<String>) -> Self {
    Self {
      cmake: cmake.into(),
      generator: generator.into(),
    }
  }

  pub fn from_config(config: &crate::Config) -> Self {
    Self::new(&config.cmake, &config.generator)
  }

  /// Arguments passed to cmake for the configure step
  pub fn configure_args(&self, source_root: &Path, output_dir: &Path, variant: &str, flags: &[&str]) -> Vec<String> {
    let out = output_dir.display().to_string();
    let mut args = vec![
      "-G".to_string(),
      self.generator.clone(),
      "-S".to_string(),
      source_root.display().to_string(),
      "-B".to_string(),
      out.clone(),
      format!("-DCMAKE_BUILD_TYPE={variant}"),
      format!("-DCMAKE_CACHEFILE_DIR={out}"),
    ];
    args.extend(flags.iter().map(|f| f.to_string()));
    args
  }

  fn spawn(&self, program: &str, args: &[String]) -> io::Result<ProcessStatus> {
    debug!(program = %program, args = ?args, "spawning process");
    let status = Command::new(program).args(args).status()?;
    debug!(code = ?status.code(), "process exited");
    Ok(status.into())
  }
}

impl Toolchain for SystemToolchain {
  fn configure(
    &self,
    source_root: &Path,
    output_dir: &Path,
    variant: &str,
    platform_flags: &[&str],
  ) -> io::Result<ProcessStatus> {
    let args = self.configure_args(source_root, output_dir, variant, platform_flags);
    self.spawn(&self.cmake, &args)
  }

  fn build(&self, output_dir: &Path) -> io::Result<ProcessStatus> {
    let args = vec!["--build".to_string(), output_dir.display().to_string()];
    self.spawn(&self.cmake, &args)
  }

  fn launch(&self, executable: &Path, args: &[OsString]) -> io::Result<ProcessStatus> {
    debug!(executable = %executable.display(), args = ?args, "launching executable");
    let status = Command::new(executable).args(args).status()?;
    Ok(status.into())
  }

  fn ensure_dir(&self, path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path)
  }

  fn remove_tree(&self, path: &Path) -> io::Result<()> {
    match std::fs::remove_dir_all(path) {
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
      other => other,
    }
  }

  fn exists(&self, path: &Path) -> bool {
    path.exists()
  }
}
