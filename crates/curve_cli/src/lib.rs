//! # curvefit
//!
//! Command-line driver for `curve_core`. Reads input points from files or
//! generates random ones, interpolates them with the configured method,
//! writes `input.<ext>` and `interpolation.<ext>` to the output directory
//! and hands both files to an external plotter.
//!
//! Settings are layered: built-in defaults, `curvefit.toml`, `CURVEFIT_*`
//! environment variables, then command-line flags.

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::commands::interpolate::{run, RunSummary};
    pub use crate::commands::plot::PlotOutcome;
    pub use crate::config::{CliConfig, ConfigError, Overrides};
    pub use crate::error::CliError;
}
