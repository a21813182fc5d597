//! Build actions.
//!
//! An [`Action`] is one resolved unit of work: cleaning, building or running a
//! profile. Actions are produced from command tokens by [`resolve`] and run by
//! [`crate::execute`].
//!
//! # Action Kinds
//!
//! - `clean`, `clean-debug`, `clean-profile`, `clean-release`, `clean-all`
//! - `build`, `debug`, `profile`, `release`, `build-all`
//! - `run-debug` (alias `run`), `run-profile`, `run-release`
//!
//! Run actions carry the arguments forwarded to the executable.

mod resolver;
mod types;

pub use resolver::resolve;
pub use types::*;

use std::ffi::OsString;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::driver::{self, DriverContext, DriverError};
use crate::profile::Profile;

/// A resolved unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Action {
  Clean,
  CleanDebug,
  CleanProfile,
  CleanRelease,
  CleanAll,
  Build,
  Debug,
  Profile,
  Release,
  BuildAll,
  RunDebug {
    #[serde(serialize_with = "serialize_lossy")]
    params: Vec<OsString>,
  },
  RunProfile {
    #[serde(serialize_with = "serialize_lossy")]
    params: Vec<OsString>,
  },
  RunRelease {
    #[serde(serialize_with = "serialize_lossy")]
    params: Vec<OsString>,
  },
}

impl Action {
  /// Create an action of the given kind with no execution parameters
  pub fn new(kind: ActionKind) -> Self {
    match kind {
      ActionKind::Clean => Action::Clean,
      ActionKind::CleanDebug => Action::CleanDebug,
      ActionKind::CleanProfile => Action::CleanProfile,
      ActionKind::CleanRelease => Action::CleanRelease,
      ActionKind::CleanAll => Action::CleanAll,
      ActionKind::Build => Action::Build,
      ActionKind::Debug => Action::Debug,
      ActionKind::Profile => Action::Profile,
      ActionKind::Release => Action::Release,
      ActionKind::BuildAll => Action::BuildAll,
      ActionKind::RunDebug => Action::RunDebug { params: Vec::new() },
      ActionKind::RunProfile => Action::RunProfile { params: Vec::new() },
      ActionKind::RunRelease => Action::RunRelease { params: Vec::new() },
    }
  }

  pub fn kind(&self) -> ActionKind {
    match self {
      Action::Clean => ActionKind::Clean,
      Action::CleanDebug => ActionKind::CleanDebug,
      Action::CleanProfile => ActionKind::CleanProfile,
      Action::CleanRelease => ActionKind::CleanRelease,
      Action::CleanAll => ActionKind::CleanAll,
      Action::Build => ActionKind::Build,
      Action::Debug => ActionKind::Debug,
      Action::Profile => ActionKind::Profile,
      Action::Release => ActionKind::Release,
      Action::BuildAll => ActionKind::BuildAll,
      Action::RunDebug { .. } => ActionKind::RunDebug,
      Action::RunProfile { .. } => ActionKind::RunProfile,
      Action::RunRelease { .. } => ActionKind::RunRelease,
    }
  }

  /// Arguments forwarded to the executable; empty for non-run actions
  pub fn params(&self) -> &[OsString] {
    match self {
      Action::RunDebug { params } | Action::RunProfile { params } | Action::RunRelease { params } => params,
      _ => &[],
    }
  }

  pub(crate) fn params_mut(&mut self) -> Option<&mut Vec<OsString>> {
    match self {
      Action::RunDebug { params } | Action::RunProfile { params } | Action::RunRelease { params } => Some(params),
      _ => None,
    }
  }

  /// Whether this action cannot be queued together with `other`
  ///
  /// No pair of actions conflicts; umbrella actions replace the specific
  /// ones during resolution instead.
  pub fn conflicts_with(&self, _other: &Action) -> bool {
    false
  }

  /// Run this action.
  ///
  /// Clean failures are reported per directory and never returned, so that
  /// the remaining directories are still cleaned. Any other driver failure is
  /// returned immediately and the remaining profiles are not attempted.
  pub fn execute(&self, ctx: &DriverContext<'_>) -> Result<(), DriverError> {
    let profiles = self.kind().profiles();
    match self {
      Action::Clean | Action::CleanDebug | Action::CleanProfile | Action::CleanRelease | Action::CleanAll => {
        clean_each(ctx, profiles);
        Ok(())
      }
      Action::Build | Action::Debug | Action::Profile | Action::Release | Action::BuildAll => {
        for profile in profiles {
          driver::build(ctx, *profile)?;
        }
        Ok(())
      }
      Action::RunDebug { params } => driver::run(ctx, Profile::Debug, params),
      Action::RunProfile { params } => driver::run(ctx, Profile::Profiling, params),
      Action::RunRelease { params } => driver::run(ctx, Profile::Release, params),
    }
  }
}

/// Arguments that are not valid Unicode are written with replacement characters.
fn serialize_lossy<S: Serializer>(params: &[OsString], serializer: S) -> Result<S::Ok, S::Error> {
  serializer.collect_seq(params.iter().map(|p| p.to_string_lossy()))
}

fn clean_each(ctx: &DriverContext<'_>, profiles: &[Profile]) {
  for profile in profiles {
    if let Err(err) = driver::clean(ctx, *profile) {
      debug!(profile = %profile, error = %err, "clean failed");
      ctx.reporter.failure(&err.to_string());
    }
  }
}
