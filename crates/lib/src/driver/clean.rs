//! Clean driver.

use tracing::info;

use super::DriverContext;
use super::types::DriverError;
use crate::profile::Profile;

/// Remove a profile's output directory and everything in it.
///
/// A directory that does not exist counts as already clean.
pub fn clean(ctx: &DriverContext<'_>, profile: Profile) -> Result<(), DriverError> {
  let dir = ctx.config.profile_dir(profile);
  info!(profile = %profile, dir = %dir.display(), "cleaning");

  ctx
    .toolchain
    .remove_tree(&dir)
    .map_err(|source| DriverError::CleanFailed {
      profile,
      path: dir.clone(),
      source,
    })?;

  ctx.reporter.success(&format!("Cleaned {} build directory.", profile.id()));
  Ok(())
}
