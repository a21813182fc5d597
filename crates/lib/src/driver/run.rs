//! Run driver.

use std::ffi::OsString;

use tracing::info;

use super::build::build;
use super::types::{DriverError, Stage};
use super::{DriverContext, label};
use crate::profile::Profile;

/// Run a profile's executable with the given arguments.
///
/// The profile is built first when its executable does not exist yet. The
/// child inherits the standard streams and runs to completion.
pub fn run(ctx: &DriverContext<'_>, profile: Profile, args: &[OsString]) -> Result<(), DriverError> {
  let executable = ctx.config.executable_path(profile);

  if !ctx.toolchain.exists(&executable) {
    ctx
      .reporter
      .info(&format!("Executable not found. Building {}...", profile.id()));
    build(ctx, profile)?;
  }

  if args.is_empty() {
    ctx.reporter.info("Running without arguments");
  } else {
    ctx.reporter.info(&format!("Running with arguments: {args:?}"));
  }

  ctx.reporter.banner(&format!(
    "BEGIN {} OUTPUT ({})",
    ctx.config.executable_name.to_uppercase(),
    label(profile)
  ));

  info!(profile = %profile, executable = %executable.display(), "running");

  let status = ctx.toolchain.launch(&executable, args).map_err(|source| DriverError::Spawn {
    stage: Stage::Run,
    program: executable.display().to_string(),
    source,
  })?;

  if !status.success() {
    return Err(DriverError::ExecutionFailed {
      profile,
      code: status.code(),
    });
  }

  ctx.reporter.banner(&format!(
    "END {} OUTPUT ({})",
    ctx.config.executable_name.to_uppercase(),
    label(profile)
  ));
  Ok(())
}
