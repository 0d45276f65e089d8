use nalgebra::DVector;

use crate::{
    error::{SplineError, SplineResult},
    knot::Knot,
    segment::CubicSegment,
};

/// Natural cubic spline through a strictly increasing sequence of knots.
///
/// Coefficients are solved once on construction, the spline is read-only afterwards.
/// Queries outside of the knot range are extrapolated with the polynomial of the nearest
/// boundary segment, use [CubicSpline::contains] to tell the two cases apart.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    knots: Vec<Knot>,
    segments: Vec<CubicSegment>,
    boundary_curvature: f64,
    min_x: f64,
    max_x: f64,
}

impl CubicSpline {
    /// Creates spline from paired coordinates.
    /// # Example
    /// ```
    /// use natural_spline::CubicSpline;
    ///
    /// let spline = CubicSpline::new(&[0.0, 1.0, 2.0], &[4.0, 2.0, 6.0]).unwrap();
    /// assert_eq!(2.0, spline.interpolate(1.0));
    /// ```
    /// # Errors
    /// Lengths of `x` and `y` have to match, see [CubicSpline::from_knots] for the remaining checks.
    /// ```
    /// use natural_spline::{CubicSpline, SplineError};
    ///
    /// let spline = CubicSpline::new(&[0.0, 1.0, 2.0], &[4.0, 2.0]);
    /// assert!(matches!(spline, Err(SplineError::LengthMismatch { x_len: 3, y_len: 2 })));
    /// ```
    pub fn new(x: &[f64], y: &[f64]) -> SplineResult<Self> {
        if x.len() != y.len() {
            return Err(SplineError::LengthMismatch { x_len: x.len(), y_len: y.len() });
        }
        Self::from_knots(Knot::zip(x, y))
    }

    /// Creates spline from knots taken in the given order.
    /// # Errors
    /// - [SplineError::TooFewKnots] for less than 2 knots,
    /// - [SplineError::NonFiniteValue] when a coordinate is NaN or infinite,
    /// - [SplineError::NotStrictlyIncreasing] when knots are unsorted or share `x`.
    pub fn from_knots(knots: Vec<Knot>) -> SplineResult<Self> {
        if knots.len() < 2 {
            return Err(SplineError::TooFewKnots(knots.len()));
        }

        let number_of_intervals = knots.len() - 1;
        let mut spline = CubicSpline {
            min_x: knots[0].get_x(),
            max_x: knots[number_of_intervals].get_x(),
            knots,
            segments: Vec::with_capacity(number_of_intervals),
            boundary_curvature: 0.0,
        };

        spline.check_knots()?;
        spline.calculate_segments();
        Ok(spline)
    }

    /// Value of the spline at `x`. Never fails, queries outside [CubicSpline::domain]
    /// are extrapolated from the first or last segment.
    pub fn interpolate(&self, x: f64) -> f64 {
        let index = self.find_interval_index(x);
        self.segments[index].evaluate(x)
    }

    /// Same as calling [CubicSpline::interpolate] for each element, but consecutive queries
    /// reuse the previously found segment, which makes ascending scans cheap.
    pub fn batch_interpolate(&self, x_vector: &[f64]) -> Vec<f64> {
        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;

        for x in x_vector {
            index = self.find_interval_index_with_hint(index, *x);
            results.push(self.segments[index].evaluate(*x));
        }
        results
    }

    pub fn derivative(&self, x: f64) -> f64 {
        let index = self.find_interval_index(x);
        self.segments[index].derivative(x)
    }

    pub fn second_derivative(&self, x: f64) -> f64 {
        let index = self.find_interval_index(x);
        self.segments[index].second_derivative(x)
    }

    /// `true` when `x` lies within the knot range, i.e. the value at `x` is interpolated
    /// rather than extrapolated.
    pub fn contains(&self, x: f64) -> bool {
        self.min_x <= x && x <= self.max_x
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.min_x, self.max_x)
    }

    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    /// Quadratic coefficient stored for the last knot, zero for the natural boundary.
    pub fn boundary_curvature(&self) -> f64 {
        self.boundary_curvature
    }

    fn check_knots(&self) -> SplineResult<()> {
        if let Some(index) = self.knots.iter().position(|k| !k.is_finite()) {
            return Err(SplineError::NonFiniteValue { index });
        }

        let decreasing = self.knots.windows(2).position(|w| w[1].get_x() <= w[0].get_x());
        if let Some(index) = decreasing {
            return Err(SplineError::NotStrictlyIncreasing { index: index + 1 });
        }
        Ok(())
    }

    fn calculate_segments(&mut self) {
        let size = self.knots.len();
        let x = |i: usize| self.knots[i].get_x();
        let a = |i: usize| self.knots[i].get_y();

        let h = DVector::<f64>::from_fn(size - 1, |i, _| x(i + 1) - x(i));

        let mut alpha = DVector::<f64>::zeros(size);
        for i in 1..size - 1 {
            alpha[i] = 3.0 * (a(i + 1) - a(i)) / h[i] - 3.0 * (a(i) - a(i - 1)) / h[i - 1];
        }

        // natural boundary on the left: l_0 = 1, mu_0 = 0, z_0 = 0
        let mut l = DVector::<f64>::zeros(size);
        let mut mu = DVector::<f64>::zeros(size);
        let mut z = DVector::<f64>::zeros(size);
        l[0] = 1.0;

        for i in 1..size - 1 {
            l[i] = 2.0 * (x(i + 1) - x(i - 1)) - h[i - 1] * mu[i - 1];
            mu[i] = h[i] / l[i];
            z[i] = (alpha[i] - h[i - 1] * z[i - 1]) / l[i];
        }

        // natural boundary on the right: l_{n-1} = 1, z_{n-1} = 0, c_{n-1} = 0
        l[size - 1] = 1.0;
        z[size - 1] = 0.0;

        let mut c = DVector::<f64>::zeros(size);
        let mut segments = Vec::with_capacity(size - 1);

        for j in (0..size - 1).rev() {
            c[j] = z[j] - mu[j] * c[j + 1];
            let b = (a(j + 1) - a(j)) / h[j] - h[j] * (c[j + 1] + 2.0 * c[j]) / 3.0;
            let d = (c[j + 1] - c[j]) / (3.0 * h[j]);
            segments.push(CubicSegment::new(x(j), a(j), b, c[j], d));
        }
        segments.reverse();

        self.boundary_curvature = c[size - 1];
        self.segments = segments;
    }

    /// Greatest `i` with `x_i <= x`, clamped to valid segment indices.
    fn find_interval_index(&self, x: f64) -> usize {
        let size = self.knots.len();
        let mut min = 0;
        let mut max = size - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.knots[mid].get_x() {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_interval_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if self.is_in_interval_range(index_hint, x) {
            return index_hint;
        }
        if index_hint + 1 < self.segments.len() && self.is_in_interval_range(index_hint + 1, x) {
            return index_hint + 1;
        }
        self.find_interval_index(x)
    }

    /// Half-open `[x_i, x_{i+1})`, the boundary segments are unbounded outwards.
    fn is_in_interval_range(&self, interval_index: usize, x: f64) -> bool {
        let last = self.segments.len() - 1;
        let above_lower = interval_index == 0 || self.knots[interval_index].get_x() <= x;
        let below_upper = interval_index == last || x < self.knots[interval_index + 1].get_x();
        above_lower && below_upper
    }
}
