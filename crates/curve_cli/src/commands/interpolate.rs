//! Interpolate command implementation
//!
//! Loads input points (or generates random ones), runs the configured method,
//! prints the generated points, writes both point files and hands them to the
//! plotter.

use std::path::{Path, PathBuf};

use curve_core::io;
use curve_core::math::interpolators::{Interpolator, Method};
use curve_core::types::{CurveError, Point};
use tracing::{error, info, warn};

use super::generate::random_points;
use super::plot::{plot, PlotOutcome};
use crate::config::CliConfig;
use crate::Result;

/// What a run produced.
#[derive(Debug)]
pub struct RunSummary {
    /// Number of input points after loading or generation
    pub input_points: usize,
    /// Input points written to the input file; the spline drops repeated x
    pub knots: usize,
    /// Method that ran; `None` if the configured name was not recognised
    pub method: Option<Method>,
    /// Number of generated points over all gaps
    pub generated_points: usize,
    /// File holding the input points
    pub input_path: PathBuf,
    /// File holding inputs interleaved with generated points
    pub interpolation_path: PathBuf,
    /// Plotter result
    pub plot: PlotOutcome,
    /// Degenerate input reported by the interpolator; the files were still written
    pub interpolation_error: Option<CurveError>,
}

/// Run the interpolate command
///
/// `inputs` are the positional arguments. Those naming regular files are
/// loaded in order and replace random generation; the rest are ignored with a
/// warning.
pub fn run(config: &CliConfig, inputs: &[PathBuf], plot_enabled: bool) -> Result<RunSummary> {
    let files = input_files(inputs);
    let points = if files.is_empty() {
        info!(
            count = config.num_points,
            range = config.coordinate_range,
            seed = ?config.seed,
            "Generating random input"
        );
        random_points(config.num_points, config.coordinate_range, config.seed)
    } else {
        load_all(&files)?
    };

    let method = match config.method.parse::<Method>() {
        Ok(method) => Some(method),
        Err(e) => {
            warn!("{}", e);
            eprintln!("{}", e);
            None
        }
    };

    let input_points = points.len();
    let mut interp = Interpolator::new(points);
    let mut interpolation_error = None;

    if let Some(method) = method {
        info!(%method, points = interp.points().len(), samples = config.samples, "Interpolating");
        if let Err(e) = interp.ensure_determined(method) {
            warn!("{}; nothing to interpolate", e);
        }
        if let Err(e) = interp.run(method, config.samples) {
            error!("Interpolation failed: {}", e);
            interpolation_error = Some(e);
        }
        print!("{}", interp.pretty());
    }

    let input_path = config.input_path();
    let interpolation_path = config.interpolation_path();
    io::dump(interp.points(), &input_path)?;
    io::dump_with_interpolated(interp.points(), interp.generated(), &interpolation_path)?;
    info!(
        input = %input_path.display(),
        interpolation = %interpolation_path.display(),
        "Point files written"
    );

    let plot = if plot_enabled {
        plot(&config.plot_command, &input_path, &interpolation_path)
    } else {
        PlotOutcome::Skipped
    };

    Ok(RunSummary {
        input_points,
        knots: interp.points().len(),
        method,
        generated_points: interp.generated().iter().map(Vec::len).sum(),
        input_path,
        interpolation_path,
        plot,
        interpolation_error,
    })
}

/// Keep the arguments that name regular files.
fn input_files(inputs: &[PathBuf]) -> Vec<&Path> {
    inputs
        .iter()
        .filter_map(|arg| {
            if arg.is_file() {
                Some(arg.as_path())
            } else {
                warn!(argument = %arg.display(), "Not a regular file, ignoring");
                None
            }
        })
        .collect()
}

fn load_all(files: &[&Path]) -> Result<Vec<Point<f64>>> {
    let mut points = Vec::new();
    for file in files {
        points.extend(io::load::<f64>(file)?);
    }
    info!(files = files.len(), points = points.len(), "Input loaded");
    Ok(points)
}
