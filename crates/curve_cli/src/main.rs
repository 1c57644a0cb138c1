//! curvefit - interpolate 2D points and plot the result
//!
//! # Usage
//!
//! ```text
//! curvefit [-n <INT>] [-s <INT>] [-m <linear|spline>] [FILES]...
//! ```
//!
//! Without input files, `-n` random points are generated. Output goes to
//! `<output_dir>/input.<ext>` and `<output_dir>/interpolation.<ext>`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use curve_cli::commands::interpolate;
use curve_cli::config::{CliConfig, Overrides};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Curve interpolation over 2D points
#[derive(Parser)]
#[command(name = "curvefit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of random points when no input file is given [default: 5]
    #[arg(short, long)]
    num_points: Option<usize>,

    /// Points generated between each pair of input points [default: 3]
    #[arg(short, long)]
    samples: Option<usize>,

    /// Interpolation method (linear, spline) [default: spline]
    #[arg(short, long)]
    method: Option<String>,

    /// Input point files; arguments that are not regular files are ignored
    #[arg(value_name = "FILES")]
    inputs: Vec<PathBuf>,

    /// Configuration file path [default: curvefit.toml, if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the output point files [default: out]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Seed for random input
    #[arg(long)]
    seed: Option<u64>,

    /// Do not run the plotter
    #[arg(long)]
    no_plot: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            num_points: self.num_points,
            samples: self.samples,
            method: self.method.clone(),
            output_dir: self.output_dir.clone(),
            seed: self.seed,
            verbose: self.verbose,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::resolve(cli.config.as_deref(), cli.overrides())?;

    // RUST_LOG takes precedence over the configured level
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("invalid log level '{}'", config.log_level))?,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let summary = interpolate::run(&config, &cli.inputs, !cli.no_plot)?;
    info!(
        inputs = summary.input_points,
        knots = summary.knots,
        generated = summary.generated_points,
        plot = %summary.plot,
        "Run complete"
    );

    if let Some(e) = summary.interpolation_error {
        return Err(e).context("interpolation produced no points");
    }
    Ok(())
}
