//! Plain-text point files.
//!
//! One point per line, `x<delimiter>y`. Files are written with a comma;
//! any single non-numeric character (optionally surrounded by whitespace),
//! or whitespace alone, is accepted as the delimiter when reading.

use crate::math::interpolators::interleave;
use crate::types::{CurveError, Point};
use num_traits::Float;
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Write `points` as `x,y` lines to `writer`.
pub fn write_points<T, W>(points: &[Point<T>], mut writer: W) -> io::Result<()>
where
    T: Float + Display,
    W: Write,
{
    for p in points {
        writeln!(writer, "{},{}", p.x(), p.y())?;
    }
    writer.flush()
}

/// Read `x<delimiter>y` lines from `reader`.
///
/// `path` is only used to label errors.
pub fn read_points<T, R>(reader: R, path: &Path) -> Result<Vec<Point<T>>, CurveError>
where
    T: Float + FromStr,
    R: BufRead,
{
    let mut points = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| CurveError::io(path, e))?;
        let (x, y) = parse_line(&line).map_err(|message| CurveError::Parse {
            path: path.to_path_buf(),
            line: index + 1,
            message,
        })?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

/// Write `points` to `path`, one `x,y` line each.
///
/// Missing parent directories are created.
///
/// # Example
///
/// ```
/// use curve_core::io::point_io;
/// use curve_core::types::Point;
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("out").join("input.dat");
///
/// point_io::dump(&[Point::new(1.0, 2.0), Point::new(3.5, -4.0)], &path).unwrap();
/// assert_eq!(std::fs::read_to_string(&path).unwrap(), "1,2\n3.5,-4\n");
/// ```
pub fn dump<T>(points: &[Point<T>], path: impl AsRef<Path>) -> Result<(), CurveError>
where
    T: Float + Display,
{
    let path = path.as_ref();
    let file = create(path)?;
    write_points(points, BufWriter::new(file)).map_err(|e| CurveError::io(path, e))?;

    debug!(path = %path.display(), points = points.len(), "Points written");
    Ok(())
}

/// Write input points interleaved with the generated points of each gap.
///
/// Each input point is followed by the points of the gap after it; the final
/// input point is written last.
pub fn dump_with_interpolated<T>(
    points: &[Point<T>],
    generated: &[Vec<Point<T>>],
    path: impl AsRef<Path>,
) -> Result<(), CurveError>
where
    T: Float + Display,
{
    dump(&interleave(points, generated), path)
}

/// Load points from `path`.
///
/// # Returns
///
/// * `Ok(points)` - One point per line, in file order
/// * `Err(CurveError::Io)` - The file cannot be opened or read
/// * `Err(CurveError::Parse)` - A line is blank or malformed
pub fn load<T>(path: impl AsRef<Path>) -> Result<Vec<Point<T>>, CurveError>
where
    T: Float + FromStr,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CurveError::io(path, e))?;
    let points = read_points(BufReader::new(file), path)?;

    debug!(path = %path.display(), points = points.len(), "Points loaded");
    Ok(points)
}

fn create(path: &Path) -> Result<File, CurveError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| CurveError::io(parent, e))?;
        }
    }
    File::create(path).map_err(|e| CurveError::io(path, e))
}

#[inline]
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')
}

fn parse_line<T: FromStr>(line: &str) -> Result<(T, T), String> {
    let line = line.trim();
    if line.is_empty() {
        return Err("empty line".to_string());
    }

    let x_end = line
        .find(|c: char| !is_number_char(c))
        .ok_or_else(|| format!("missing delimiter in '{}'", line))?;
    let (x_text, rest) = line.split_at(x_end);

    let after_space = rest.trim_start();
    let y_text = match after_space.chars().next() {
        Some(c) if !is_number_char(c) => &after_space[c.len_utf8()..],
        Some(_) => after_space,
        None => return Err(format!("missing y value in '{}'", line)),
    };

    let x = x_text
        .parse::<T>()
        .map_err(|_| format!("invalid x value '{}'", x_text))?;
    let y_text = y_text.trim();
    let y = y_text
        .parse::<T>()
        .map_err(|_| format!("invalid y value '{}'", y_text))?;

    Ok((x, y))
}
