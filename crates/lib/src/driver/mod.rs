//! Build, run and clean drivers.
//!
//! Each driver works on a single [`Profile`] and reaches the outside world
//! through the [`Toolchain`] and [`Reporter`] held by the [`DriverContext`].
//!
//! Configure, build and run failures are fatal. Clean failures are returned
//! as [`DriverError::CleanFailed`] and left to the caller to report.

mod build;
mod clean;
mod run;
mod types;

pub use build::{build, configure};
pub use clean::clean;
pub use run::run;
pub use types::*;

use crate::config::Config;
use crate::profile::Profile;
use crate::report::Reporter;
use crate::toolchain::Toolchain;

/// Everything a driver needs, borrowed for the length of one invocation
#[derive(Clone, Copy)]
pub struct DriverContext<'a> {
  pub config: &'a Config,
  pub toolchain: &'a dyn Toolchain,
  pub reporter: &'a dyn Reporter,
}

impl<'a> DriverContext<'a> {
  pub fn new(config: &'a Config, toolchain: &'a dyn Toolchain, reporter: &'a dyn Reporter) -> Self {
    Self {
      config,
      toolchain,
      reporter,
    }
  }
}

/// Upper-case profile label used in banners, e.g. `DEBUG`
fn label(profile: Profile) -> String {
  profile.id().to_uppercase()
}
