//! Two-column `x y` sample tables and fixed-step scans over a spline.

use std::io::{BufRead, Write};

use crate::{
    error::{SplineError, SplineResult},
    spline::CubicSpline,
};

/// Reads `x y` pairs, one per line, separated by whitespace.
/// Blank lines and lines starting with `#` are skipped.
/// # Example
/// ```
/// use natural_spline::table::read_samples;
///
/// let (x, y) = read_samples("# x y\n0 0\n1 1\n\n2 4\n".as_bytes()).unwrap();
/// assert_eq!(vec![0.0, 1.0, 2.0], x);
/// assert_eq!(vec![0.0, 1.0, 4.0], y);
/// ```
pub fn read_samples<R: BufRead>(reader: R) -> SplineResult<(Vec<f64>, Vec<f64>)> {
    let mut x = Vec::new();
    let mut y = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(SplineError::Parse {
                line: index + 1,
                message: format!("expected 2 fields, got {}", fields.len()),
            });
        }

        x.push(parse_field(fields[0], index + 1)?);
        y.push(parse_field(fields[1], index + 1)?);
    }
    Ok((x, y))
}

/// Reads a sample table and builds a spline from it.
pub fn load_spline<R: BufRead>(reader: R) -> SplineResult<CubicSpline> {
    let (x, y) = read_samples(reader)?;
    CubicSpline::new(&x, &y)
}

/// Upper bound on the number of points a single [scan] may produce.
pub const MAX_SCAN_POINTS: usize = 10_000_000;

/// Evaluates the spline at `start + k * step` for every `k` that keeps the point within `end`.
/// # Errors
/// [SplineError::InvalidScan] when `step` is not a positive finite number, `end < start`,
/// or the range would produce more than [MAX_SCAN_POINTS] points.
pub fn scan(spline: &CubicSpline, start: f64, end: f64, step: f64) -> SplineResult<Vec<(f64, f64)>> {
    if !(step.is_finite() && step > 0.0) {
        return Err(SplineError::InvalidScan(format!("step must be positive, got {step}")));
    }
    if !(start.is_finite() && end.is_finite()) || end < start {
        return Err(SplineError::InvalidScan(format!("cannot scan from {start} to {end}")));
    }

    // tolerance keeps `end` itself when the range is an exact multiple of `step`
    let number_of_steps = ((end - start) / step + 1e-9).floor();
    if !number_of_steps.is_finite() || number_of_steps >= MAX_SCAN_POINTS as f64 {
        return Err(SplineError::InvalidScan(format!(
            "step {step} from {start} to {end} exceeds {MAX_SCAN_POINTS} points"
        )));
    }
    let number_of_steps = number_of_steps as usize;
    let x_vector: Vec<f64> = (0..=number_of_steps)
        .map(|k| start + step * k as f64)
        .collect();
    let values = spline.batch_interpolate(&x_vector);

    Ok(x_vector.into_iter().zip(values).collect())
}

/// Writes one `x value` line per point.
pub fn write_scan<W: Write>(mut writer: W, points: &[(f64, f64)]) -> SplineResult<()> {
    for (x, value) in points {
        writeln!(writer, "{} {}", x, value)?;
    }
    writer.flush()?;
    Ok(())
}

fn parse_field(field: &str, line: usize) -> SplineResult<f64> {
    field.parse::<f64>().map_err(|e| SplineError::Parse {
        line,
        message: format!("invalid number '{field}': {e}"),
    })
}
