//! actionman-lib: action resolution and execution for the actionman build tool
//!
//! This crate turns a flat list of command tokens into an ordered list of
//! build actions and runs them against a cmake-based project:
//! - `Profile`: the debug/profile/release build configurations
//! - `Config`: paths and tool choices resolved once at startup
//! - `Action`: one resolved unit of work (clean, build or run)
//! - `resolve`: token list to deduplicated, subsumption-resolved actions
//! - `execute`: sequential execution with fatal/non-fatal failure semantics

pub mod action;
pub mod config;
pub mod consts;
pub mod driver;
pub mod execute;
pub mod platform;
pub mod profile;
pub mod report;
pub mod toolchain;

pub use action::{Action, ActionKind, resolve};
pub use config::{Config, ConfigError};
pub use driver::{DriverContext, DriverError};
pub use execute::{ExecutionSummary, execute};
pub use platform::PlatformKey;
pub use profile::{Profile, ProfileError, ProfileSpec};
pub use report::Reporter;
pub use toolchain::{ProcessStatus, SystemToolchain, Toolchain};
