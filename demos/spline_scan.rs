extern crate natural_spline;

use std::{error::Error, fs::File, io::BufWriter};

use natural_spline::{table, CubicSpline};

fn main() -> Result<(), Box<dyn Error>> {

    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let y = vec![0.0, 1.0, 4.0, 9.0, 16.0];

    let spline = CubicSpline::new(&x, &y)?;
    let points = table::scan(&spline, 0.0, 4.0, 0.01)?;

    let path = "spline_output.dat";
    table::write_scan(BufWriter::new(File::create(path)?), &points)?;
    println!("wrote {} points to {}", points.len(), path);
    Ok(())
}
