//! Natural cubic spline interpolation.
//!
//! Spline coefficients are obtained from a tri-diagonal system solved with a single forward
//! elimination and back substitution sweep. Evaluation looks the segment up with a binary
//! search, queries outside of the knot range are extrapolated with the boundary segment.
//!
//! # Example
//! ```
//! use natural_spline::CubicSpline;
//! use assert_approx_eq::assert_approx_eq;
//!
//! let x = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = [0.0, 1.0, 4.0, 9.0, 16.0];
//! let spline = CubicSpline::new(&x, &y).unwrap();
//!
//! assert_approx_eq!(4.0, spline.interpolate(2.0), 1e-9);
//! assert_approx_eq!(19.0 / 56.0, spline.interpolate(0.5), 1e-9);
//! assert!(!spline.contains(5.0));
//! assert_approx_eq!(23.0, spline.interpolate(5.0), 1e-9);
//! ```

mod error;
mod knot;
mod segment;
mod spline;
pub mod table;

pub use error::{SplineError, SplineResult};
pub use knot::Knot;
pub use segment::CubicSegment;
pub use spline::CubicSpline;
