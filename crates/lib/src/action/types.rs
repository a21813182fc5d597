use std::fmt;

use crate::profile::Profile;

/// The kinds of work a command token can request.
///
/// The kind of an [`Action`](super::Action) is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
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
  RunDebug,
  RunProfile,
  RunRelease,
}

/// Command tokens and the kind each one requests.
///
/// `run` is shorthand for `run-debug`.
const TOKENS: &[(&str, ActionKind)] = &[
  ("clean", ActionKind::Clean),
  ("clean-debug", ActionKind::CleanDebug),
  ("clean-profile", ActionKind::CleanProfile),
  ("clean-release", ActionKind::CleanRelease),
  ("clean-all", ActionKind::CleanAll),
  ("build", ActionKind::Build),
  ("debug", ActionKind::Debug),
  ("profile", ActionKind::Profile),
  ("release", ActionKind::Release),
  ("build-all", ActionKind::BuildAll),
  ("run", ActionKind::RunDebug),
  ("run-debug", ActionKind::RunDebug),
  ("run-profile", ActionKind::RunProfile),
  ("run-release", ActionKind::RunRelease),
];

impl ActionKind {
  /// Map a command token to its kind; `None` for unrecognized tokens
  pub fn from_token(token: &str) -> Option<Self> {
    TOKENS.iter().find(|(name, _)| *name == token).map(|(_, kind)| *kind)
  }

  /// All recognized command tokens, including aliases
  pub fn tokens() -> impl Iterator<Item = &'static str> {
    TOKENS.iter().map(|(name, _)| *name)
  }

  /// Canonical name of the kind
  pub fn name(self) -> &'static str {
    match self {
      ActionKind::Clean => "clean",
      ActionKind::CleanDebug => "clean-debug",
      ActionKind::CleanProfile => "clean-profile",
      ActionKind::CleanRelease => "clean-release",
      ActionKind::CleanAll => "clean-all",
      ActionKind::Build => "build",
      ActionKind::Debug => "debug",
      ActionKind::Profile => "profile",
      ActionKind::Release => "release",
      ActionKind::BuildAll => "build-all",
      ActionKind::RunDebug => "run-debug",
      ActionKind::RunProfile => "run-profile",
      ActionKind::RunRelease => "run-release",
    }
  }

  /// Whether this kind launches the executable and takes trailing arguments
  pub fn is_run(self) -> bool {
    matches!(self, ActionKind::RunDebug | ActionKind::RunProfile | ActionKind::RunRelease)
  }

  /// Profiles this kind operates on, in execution order
  pub fn profiles(self) -> &'static [Profile] {
    match self {
      ActionKind::Clean
      | ActionKind::CleanDebug
      | ActionKind::Build
      | ActionKind::Debug
      | ActionKind::RunDebug => &[Profile::Debug],
      ActionKind::CleanProfile | ActionKind::Profile | ActionKind::RunProfile => &[Profile::Profiling],
      ActionKind::CleanRelease | ActionKind::Release | ActionKind::RunRelease => &[Profile::Release],
      ActionKind::CleanAll | ActionKind::BuildAll => &Profile::ALL,
    }
  }
}

impl fmt::Display for ActionKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
