use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use actionman_lib::config::ConfigOverrides;
use actionman_lib::{Action, Config, DriverContext, SystemToolchain, execute, resolve};

mod output;
mod reporter;

use output::{OutputFormat, format_duration, print_error, print_info, print_json, print_success, symbols};
use reporter::TerminalReporter;

const COMMANDS_HELP: &str = "\
Commands:
  clean, clean-debug     Remove the debug build directory
  clean-profile          Remove the profile build directory
  clean-release          Remove the release build directory
  clean-all              Remove all build directories
  build, debug           Configure and build with debug symbols, no optimization
  profile                Configure and build with debug symbols and full optimization
  release                Configure and build with full optimization
  build-all              Build debug, profile and release
  run, run-debug         Run the debug build (building it if missing)
  run-profile            Run the profile build
  run-release            Run the release build

Commands run in the order given, each at most once. Every argument after a
run command is passed to the executable.";

/// actionman - build, run and clean a cmake project across build profiles
#[derive(Parser)]
#[command(name = "actionman")]
#[command(author, version, about, long_about = None)]
#[command(after_help = COMMANDS_HELP)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,

  /// Directory containing the top-level CMakeLists.txt (default: current directory)
  #[arg(long, value_name = "DIR")]
  source_root: Option<PathBuf>,

  /// Directory for the per-profile build directories (default: source root)
  #[arg(long, value_name = "DIR")]
  output_root: Option<PathBuf>,

  /// Name of the built executable, without extension
  #[arg(long, value_name = "NAME")]
  executable: Option<String>,

  /// Print the resolved actions without running them
  #[arg(long)]
  dry_run: bool,

  /// Format for --dry-run output
  #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  /// Commands to run, followed by arguments for the executable
  #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
  commands: Vec<OsString>,
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      print_error(&err.to_string());
      ExitCode::FAILURE
    }
  }
}

fn init_logging(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn run(cli: Cli) -> Result<()> {
  if cli.commands.is_empty() {
    Cli::command().print_help().context("Failed to print help")?;
    return Ok(());
  }

  let actions = resolve(&cli.commands);

  if cli.dry_run {
    return print_plan(&actions, cli.output);
  }

  if actions.is_empty() {
    print_info("Nothing to do");
    return Ok(());
  }

  let config = Config::from_env(ConfigOverrides {
    source_root: cli.source_root,
    output_root: cli.output_root,
    executable_name: cli.executable,
  })?;
  debug!(?config, "configuration loaded");

  let toolchain = SystemToolchain::from_config(&config);
  let reporter = TerminalReporter;
  let ctx = DriverContext::new(&config, &toolchain, &reporter);

  let summary = execute(&actions, &ctx)?;

  print_success(&format!(
    "Completed {} action(s) in {}",
    summary.completed.len(),
    format_duration(summary.elapsed)
  ));
  Ok(())
}

fn print_plan(actions: &[Action], format: OutputFormat) -> Result<()> {
  if format.is_json() {
    return print_json(&actions);
  }

  if actions.is_empty() {
    print_info("Nothing to do");
    return Ok(());
  }

  for action in actions {
    let params: Vec<_> = action.params().iter().map(|p| p.to_string_lossy()).collect();
    if params.is_empty() {
      println!("  {} {}", symbols::ARROW, action.kind());
    } else {
      println!("  {} {} {}", symbols::ARROW, action.kind(), params.join(" "));
    }
  }
  Ok(())
}
