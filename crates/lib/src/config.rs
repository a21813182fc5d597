//! Process-wide configuration.
//!
//! Built once at startup from CLI overrides and `ACTIONMAN_*` environment
//! variables, then passed by reference to every driver.

use std::path::PathBuf;

use thiserror::Error;

use crate::consts::{
  CMAKE_ENV, DEFAULT_CMAKE, DEFAULT_EXECUTABLE, DEFAULT_GENERATOR, EXECUTABLE_ENV, GENERATOR_ENV, OUTPUT_ROOT_ENV,
  SOURCE_ROOT_ENV,
};
use crate::platform::PlatformKey;
use crate::profile::Profile;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("source root {path} is not accessible: {source}")]
  SourceRoot {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("could not determine current directory: {0}")]
  CurrentDir(#[source] std::io::Error),
}

/// Explicit overrides, typically from command line flags
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
  pub source_root: Option<PathBuf>,
  pub output_root: Option<PathBuf>,
  pub executable_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
  /// Directory containing the top-level `CMakeLists.txt`
  pub source_root: PathBuf,
  /// Directory under which the per-profile output directories live
  pub output_root: PathBuf,
  /// Base name of the built executable, without platform suffix
  pub executable_name: String,
  pub platform: PlatformKey,
  pub cmake: String,
  pub generator: String,
}

impl Config {
  /// Configuration with defaults for everything but the source root
  pub fn new(source_root: impl Into<PathBuf>) -> Self {
    let source_root = source_root.into();
    Self {
      output_root: source_root.clone(),
      source_root,
      executable_name: DEFAULT_EXECUTABLE.to_string(),
      platform: PlatformKey::detect(),
      cmake: DEFAULT_CMAKE.to_string(),
      generator: DEFAULT_GENERATOR.to_string(),
    }
  }

  /// Resolve configuration from overrides, then environment, then defaults
  ///
  /// The source root falls back to the current directory and must exist.
  pub fn from_env(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
    let source_root = match overrides.source_root.or_else(|| env_path(SOURCE_ROOT_ENV)) {
      Some(path) => path,
      None => std::env::current_dir().map_err(ConfigError::CurrentDir)?,
    };
    let source_root = dunce::canonicalize(&source_root).map_err(|source| ConfigError::SourceRoot {
      path: source_root.clone(),
      source,
    })?;

    let mut config = Self::new(source_root);
    if let Some(output_root) = overrides.output_root.or_else(|| env_path(OUTPUT_ROOT_ENV)) {
      config.output_root = if output_root.is_absolute() {
        output_root
      } else {
        config.source_root.join(output_root)
      };
    }
    if let Some(name) = overrides.executable_name.or_else(|| env_string(EXECUTABLE_ENV)) {
      config.executable_name = name;
    }
    if let Some(cmake) = env_string(CMAKE_ENV) {
      config.cmake = cmake;
    }
    if let Some(generator) = env_string(GENERATOR_ENV) {
      config.generator = generator;
    }

    Ok(config)
  }

  /// Output directory of a profile
  pub fn profile_dir(&self, profile: Profile) -> PathBuf {
    self.output_root.join(profile.spec().dir_name)
  }

  /// Expected location of the built executable for a profile
  pub fn executable_path(&self, profile: Profile) -> PathBuf {
    let file_name = format!("{}{}", self.executable_name, self.platform.executable_suffix());
    self.profile_dir(profile).join("bin").join(file_name)
  }
}

fn env_string(name: &str) -> Option<String> {
  std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn env_path(name: &str) -> Option<PathBuf> {
  env_string(name).map(PathBuf::from)
}
