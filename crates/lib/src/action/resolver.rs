//! Command token resolution.
//!
//! Turns the command line tokens into an ordered list of actions:
//! - each kind appears at most once, at the position of its first mention
//! - unrecognized tokens are dropped
//! - every token after a run token is forwarded to that run action
//! - `clean-all` and `build-all` replace the narrower clean and build actions

use std::ffi::OsStr;

use tracing::debug;

use super::{Action, ActionKind};

/// Resolve command tokens into the actions to execute, in order.
pub fn resolve<I, S>(tokens: I) -> Vec<Action>
where
  I: IntoIterator<Item = S>,
  S: AsRef<OsStr>,
{
  let mut actions: Vec<Action> = Vec::new();
  // Index of the run action receiving trailing tokens, once one is seen.
  let mut run_target: Option<usize> = None;

  for token in tokens {
    let token = token.as_ref();

    if let Some(index) = run_target {
      if let Some(params) = actions[index].params_mut() {
        params.push(token.to_os_string());
      }
      continue;
    }

    let Some(kind) = token.to_str().and_then(ActionKind::from_token) else {
      debug!(token = %token.to_string_lossy(), "ignoring unrecognized token");
      continue;
    };

    let index = match actions.iter().position(|a| a.kind() == kind) {
      Some(existing) => existing,
      None => {
        let action = Action::new(kind);
        if actions.iter().any(|a| a.conflicts_with(&action)) {
          continue;
        }
        actions.push(action);
        actions.len() - 1
      }
    };

    if kind.is_run() {
      run_target = Some(index);
    }
  }

  subsume(&mut actions);
  actions
}

/// Drop clean and build actions covered by `clean-all` or `build-all`.
fn subsume(actions: &mut Vec<Action>) {
  for (umbrella, family) in [(ActionKind::CleanAll, "clean"), (ActionKind::BuildAll, "build")] {
    if actions.iter().any(|a| a.kind() == umbrella) {
      actions.retain(|a| {
        let kind = a.kind();
        kind == umbrella || !kind.name().starts_with(family)
      });
    }
  }
}
