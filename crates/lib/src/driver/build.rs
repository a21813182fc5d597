//! Configure and build drivers.

use tracing::info;

use super::types::{DriverError, Stage};
use super::{DriverContext, label};
use crate::profile::Profile;

/// Generate the build system for a profile.
///
/// Creates the profile's output directory when it is missing, then runs the
/// generator with the profile's build type and platform flags. The generator
/// output is bracketed by `BEGIN CONFIGURE` / `END CONFIGURE` banners.
pub fn configure(ctx: &DriverContext<'_>, profile: Profile) -> Result<(), DriverError> {
  let spec = profile.spec();
  let output_dir = ctx.config.profile_dir(profile);
  let flags = spec.flags(&ctx.config.platform);

  ctx.reporter.banner(&format!("BEGIN CONFIGURE ({})", label(profile)));

  ctx
    .toolchain
    .ensure_dir(&output_dir)
    .map_err(|source| DriverError::CreateDir {
      path: output_dir.clone(),
      source,
    })?;

  info!(profile = %profile, dir = %output_dir.display(), variant = spec.variant, "configuring");

  let status = ctx
    .toolchain
    .configure(&ctx.config.source_root, &output_dir, spec.variant, flags)
    .map_err(|source| DriverError::Spawn {
      stage: Stage::Configure,
      program: ctx.config.cmake.clone(),
      source,
    })?;

  if !status.success() {
    return Err(DriverError::ConfigureFailed {
      profile,
      code: status.code(),
    });
  }

  ctx.reporter.banner(&format!("END CONFIGURE ({})", label(profile)));
  Ok(())
}

/// Configure and then compile a profile.
pub fn build(ctx: &DriverContext<'_>, profile: Profile) -> Result<(), DriverError> {
  configure(ctx, profile)?;

  let output_dir = ctx.config.profile_dir(profile);
  ctx.reporter.banner(&format!("BEGIN BUILD OUTPUT ({})", label(profile)));

  info!(profile = %profile, "building");

  let status = ctx.toolchain.build(&output_dir).map_err(|source| DriverError::Spawn {
    stage: Stage::Build,
    program: ctx.config.cmake.clone(),
    source,
  })?;

  if !status.success() {
    return Err(DriverError::BuildFailed {
      profile,
      code: status.code(),
    });
  }

  ctx.reporter.banner(&format!("END BUILD OUTPUT ({})", label(profile)));
  Ok(())
}
