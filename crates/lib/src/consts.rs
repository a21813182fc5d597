/// Name of the executable produced by the cmake project.
pub const DEFAULT_EXECUTABLE: &str = "Fabric";

/// Program used to configure and drive builds.
pub const DEFAULT_CMAKE: &str = "cmake";

/// Build-system generator passed to cmake via `-G`.
pub const DEFAULT_GENERATOR: &str = "Ninja";

/// Overrides the source root directory.
pub const SOURCE_ROOT_ENV: &str = "ACTIONMAN_SOURCE_ROOT";

/// Overrides the directory holding the per-profile build directories.
pub const OUTPUT_ROOT_ENV: &str = "ACTIONMAN_OUTPUT_ROOT";

/// Overrides the executable name.
pub const EXECUTABLE_ENV: &str = "ACTIONMAN_EXECUTABLE";

/// Overrides the cmake program.
pub const CMAKE_ENV: &str = "ACTIONMAN_CMAKE";

/// Overrides the cmake generator.
pub const GENERATOR_ENV: &str = "ACTIONMAN_GENERATOR";
