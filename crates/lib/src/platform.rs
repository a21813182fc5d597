//! Host platform detection.
//!
//! Compiler flags and the executable suffix are keyed by a short platform
//! name (`win`, `mac`, `linux`). The key is detected once and stored in
//! [`crate::Config`].

use std::fmt;

/// Short platform identifier used to select per-platform compiler flags
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlatformKey {
  Win,
  Mac,
  Linux,
  /// Any other OS, keyed by its own name
  Other(String),
}

impl PlatformKey {
  /// Detect the platform of the running binary
  pub fn detect() -> Self {
    Self::from_os_name(std::env::consts::OS)
  }

  /// Map an OS name to its platform key
  ///
  /// Accepts both Rust's `macos` and the kernel name `darwin`.
  pub fn from_os_name(name: &str) -> Self {
    match name.to_ascii_lowercase().as_str() {
      "windows" => Self::Win,
      "macos" | "darwin" => Self::Mac,
      "linux" => Self::Linux,
      other => Self::Other(other.to_string()),
    }
  }

  pub fn as_str(&self) -> &str {
    match self {
      Self::Win => "win",
      Self::Mac => "mac",
      Self::Linux => "linux",
      Self::Other(name) => name,
    }
  }

  /// Suffix appended to executable file names on this platform
  pub fn executable_suffix(&self) -> &'static str {
    match self {
      Self::Win => ".exe",
      _ => "",
    }
  }
}

impl fmt::Display for PlatformKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
