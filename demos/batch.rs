extern crate natural_spline;

use natural_spline::table;

fn main() {

    let samples = "\
# x y
0.0  1.0
0.5  0.2
1.5 -1.0
2.0  0.0
3.5  2.5
5.0  1.0
";

    let spline = match table::load_spline(samples.as_bytes()) {
        Ok(spline) => spline,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let (x_min, x_max) = spline.domain();
    let number_of_steps = 50;
    let step = (x_max - x_min) / number_of_steps as f64;
    let x_vector: Vec<f64> = (0..=number_of_steps).map(|i| x_min + step * i as f64).collect();

    let result = spline.batch_interpolate(&x_vector);

    println!("x;y;dy/dx");
    for (x, y) in x_vector.iter().zip(result) {
        println!("{:.2};{:.3};{:.3}", x, y, spline.derivative(*x));
    }
}
