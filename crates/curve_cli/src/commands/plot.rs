//! Out-of-process plotting of the output point files.

use std::fmt;
use std::path::Path;
use std::process::Command;
use tracing::{info, warn};

/// How the plotter run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotOutcome {
    /// Plotting was turned off, or the command is empty
    Skipped,
    /// The plotter exited with status zero
    Succeeded,
    /// The plotter exited with a non-zero status; `None` if killed by a signal
    Failed(Option<i32>),
    /// The plotter could not be started
    SpawnFailed(String),
}

impl fmt::Display for PlotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped => write!(f, "skipped"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed(Some(code)) => write!(f, "failed with exit code {}", code),
            Self::Failed(None) => write!(f, "terminated by signal"),
            Self::SpawnFailed(msg) => write!(f, "could not start: {}", msg),
        }
    }
}

/// Run `command` with the input and interpolation file paths appended.
///
/// `command` is split on whitespace; the first word is the program. The
/// outcome is logged and returned, never raised.
pub fn plot(command: &str, input: &Path, interpolation: &Path) -> PlotOutcome {
    let mut words = command.split_whitespace();
    let Some(program) = words.next() else {
        return PlotOutcome::Skipped;
    };

    let status = Command::new(program)
        .args(words)
        .arg(input)
        .arg(interpolation)
        .status();

    let outcome = match status {
        Ok(status) if status.success() => PlotOutcome::Succeeded,
        Ok(status) => PlotOutcome::Failed(status.code()),
        Err(e) => PlotOutcome::SpawnFailed(e.to_string()),
    };

    match &outcome {
        PlotOutcome::Succeeded => info!(command, "Plotter finished"),
        other => warn!(command, outcome = %other, "Plotter did not succeed"),
    }
    outcome
}
