/// Cubic polynomial of a single spline interval, expressed around its left knot `x`:
/// `a + b*dx + c*dx^2 + d*dx^3` with `dx = query - x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    x: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl CubicSegment {
    pub(crate) fn new(x: f64, a: f64, b: f64, c: f64, d: f64) -> Self {
        CubicSegment { x, a, b, c, d }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let dx = x - self.x;
        self.a + dx * (self.b + dx * (self.c + dx * self.d))
    }

    pub fn derivative(&self, x: f64) -> f64 {
        let dx = x - self.x;
        self.b + dx * (2.0 * self.c + dx * 3.0 * self.d)
    }

    pub fn second_derivative(&self, x: f64) -> f64 {
        let dx = x - self.x;
        2.0 * self.c + 6.0 * self.d * dx
    }

    /// Left knot of the interval.
    pub fn get_x(&self) -> f64 {
        self.x
    }

    /// Coefficients `(a, b, c, d)`.
    pub fn coefficients(&self) -> (f64, f64, f64, f64) {
        (self.a, self.b, self.c, self.d)
    }
}
