/// Knot represents a sample point through which the spline passes.
/// - `x` - coordinate, knots of a spline must be strictly increasing in `x`,
/// - `y` - coordinate, value of the spline at `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot {
    x: f64,
    y: f64,
}

impl Knot {
    /// # Example
    /// ```
    /// use natural_spline::Knot;
    ///
    /// let knot = Knot::new(1.0, 2.0);
    /// assert_eq!(1.0, knot.get_x());
    /// assert_eq!(2.0, knot.get_y());
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Knot { x, y }
    }

    /// Builds knots from paired coordinate slices. Extra elements of the longer slice are ignored,
    /// callers that need length validation should use [crate::CubicSpline::new].
    pub fn zip(x: &[f64], y: &[f64]) -> Vec<Knot> {
        x.iter().zip(y).map(|(x, y)| Knot::new(*x, *y)).collect()
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Knot {
    fn from((x, y): (f64, f64)) -> Self {
        Knot::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let knot = Knot::new(1.0, 2.5);

        assert_eq!(1.0, knot.x);
        assert_eq!(2.5, knot.y);
    }

    #[test]
    fn test_from_tuple() {
        let knot: Knot = (-3.0, 4.0).into();

        assert_eq!(-3.0, knot.get_x());
        assert_eq!(4.0, knot.get_y());
    }

    #[test]
    fn test_zip() {
        let knots = Knot::zip(&[0.0, 1.0, 2.0], &[5.0, 6.0]);

        assert_eq!(2, knots.len());
        assert_eq!(1.0, knots[1].get_x());
        assert_eq!(6.0, knots[1].get_y());
    }

    #[test]
    fn test_equality_compares_both_coordinates() {
        assert_eq!(Knot::new(1.0, 3.0), Knot::new(1.0, 3.0));
        assert_ne!(Knot::new(1.0, 3.0), Knot::new(1.0, 7.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(!Knot::new(f64::NAN, 0.0).is_finite());
        assert!(!Knot::new(0.0, f64::INFINITY).is_finite());
        assert!(Knot::new(0.0, 10.0).is_finite());
    }
}
