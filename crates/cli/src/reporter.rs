//! Terminal rendering of driver progress events.

use actionman_lib::Reporter;

use crate::output::{print_error, print_info, print_separator, print_success};

/// Writes driver events to the terminal.
///
/// Banners go to stdout so they interleave correctly with the output of the
/// child processes they bracket.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalReporter;

impl Reporter for TerminalReporter {
  fn banner(&self, message: &str) {
    print_separator(message);
  }

  fn info(&self, message: &str) {
    print_info(message);
  }

  fn success(&self, message: &str) {
    print_success(message);
  }

  fn failure(&self, message: &str) {
    print_error(message);
  }
}
