//! Sequential action execution.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::action::{Action, ActionKind};
use crate::driver::{DriverContext, DriverError};

/// Outcome of a successful run of the action queue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionSummary {
  /// Kinds of the actions that ran to completion, in order
  pub completed: Vec<ActionKind>,
  pub elapsed: Duration,
}

/// Execute actions strictly in order, one at a time.
///
/// The first fatal driver error stops the queue and is returned; actions after
/// it are not attempted. An empty list does no work.
pub fn execute(actions: &[Action], ctx: &DriverContext<'_>) -> Result<ExecutionSummary, DriverError> {
  let started = Instant::now();
  let mut completed = Vec::with_capacity(actions.len());

  for action in actions {
    let kind = action.kind();
    info!(action = %kind, params = ?action.params(), "executing action");

    if let Err(err) = action.execute(ctx) {
      debug!(action = %kind, stage = %err.stage(), error = %err, "action failed");
      return Err(err);
    }
    completed.push(kind);
  }

  Ok(ExecutionSummary {
    completed,
    elapsed: started.elapsed(),
  })
}
