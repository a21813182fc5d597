//! Build profile registry.
//!
//! Each profile has its own output directory, cmake build type and a set of
//! compiler flags per platform. The table is static and never mutated.
//!
//! Drivers take a [`Profile`] rather than an identifier, so they can never see
//! an unknown profile. [`ProfileError`] only comes out of the string-keyed
//! entry points, [`lookup`] and [`Profile::from_str`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::platform::PlatformKey;

/// Errors from profile lookup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
  #[error("unknown profile '{name}' (available: debug, profile, release)")]
  UnknownProfile { name: String },
}

/// One of the fixed build configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
  Debug,
  Profiling,
  Release,
}

/// Static description of a profile
#[derive(Debug)]
pub struct ProfileSpec {
  /// Identifier used on the command line and in messages
  pub id: &'static str,
  /// Directory name under the output root
  pub dir_name: &'static str,
  /// Value of `CMAKE_BUILD_TYPE`
  pub variant: &'static str,
  flags: &'static [(&'static str, &'static [&'static str])],
}

impl ProfileSpec {
  /// Compiler flags for a platform; empty when the platform has no entry
  pub fn flags(&self, platform: &PlatformKey) -> &'static [&'static str] {
    self
      .flags
      .iter()
      .find(|(key, _)| *key == platform.as_str())
      .map(|(_, flags)| *flags)
      .unwrap_or(&[])
  }
}

static REGISTRY: [ProfileSpec; 3] = [
  ProfileSpec {
    id: "debug",
    dir_name: "debug",
    variant: "Debug",
    flags: &[
      ("win", &["-DCMAKE_CXX_FLAGS_DEBUG=/Zi /Od"]),
      ("linux", &["-DCMAKE_CXX_FLAGS_DEBUG=-g -O0"]),
      ("mac", &["-DCMAKE_CXX_FLAGS_DEBUG=-g -O0"]),
    ],
  },
  ProfileSpec {
    id: "profile",
    dir_name: "profile",
    variant: "RelWithDebInfo",
    flags: &[
      ("win", &["-DCMAKE_CXX_FLAGS_RELWITHDEBINFO=/Zi /dynamicdeopt"]),
      ("linux", &["-DCMAKE_CXX_FLAGS_RELWITHDEBINFO=-g -O3"]),
      ("mac", &["-DCMAKE_CXX_FLAGS_RELWITHDEBINFO=-g -O3"]),
    ],
  },
  ProfileSpec {
    id: "release",
    dir_name: "release",
    variant: "Release",
    flags: &[
      ("win", &["-DCMAKE_CXX_FLAGS_RELEASE=/O2"]),
      ("linux", &["-DCMAKE_CXX_FLAGS_RELEASE=-O3"]),
      ("mac", &["-DCMAKE_CXX_FLAGS_RELEASE=-O3"]),
    ],
  },
];

impl Profile {
  /// All profiles, in the order multi-profile actions visit them
  pub const ALL: [Profile; 3] = [Profile::Debug, Profile::Profiling, Profile::Release];

  pub fn spec(self) -> &'static ProfileSpec {
    match self {
      Profile::Debug => &REGISTRY[0],
      Profile::Profiling => &REGISTRY[1],
      Profile::Release => &REGISTRY[2],
    }
  }

  pub fn id(self) -> &'static str {
    self.spec().id
  }
}

impl fmt::Display for Profile {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.id())
  }
}

impl FromStr for Profile {
  type Err = ProfileError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Profile::ALL
      .into_iter()
      .find(|p| p.id() == s)
      .ok_or_else(|| ProfileError::UnknownProfile { name: s.to_string() })
  }
}

/// Look up a profile's description by identifier
pub fn lookup(id: &str) -> Result<&'static ProfileSpec, ProfileError> {
  id.parse::<Profile>().map(Profile::spec)
}
