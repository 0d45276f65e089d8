use thiserror::Error;

/// Error returned by spline construction and by the sample table helpers.
///
/// `LengthMismatch`, `TooFewKnots`, `NonFiniteValue` and `NotStrictlyIncreasing`
/// are all invalid input for [crate::CubicSpline]; see [SplineError::is_invalid_input].
#[derive(Error, Debug)]
pub enum SplineError {
    #[error("x and y must have equal length, got {x_len} and {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("spline must have at least 2 knots, got {0}")]
    TooFewKnots(usize),

    #[error("knot {index} has a non-finite coordinate")]
    NonFiniteValue { index: usize },

    #[error("knot x values must be strictly increasing, knot {index} is not greater than the previous one")]
    NotStrictlyIncreasing { index: usize },

    #[error("invalid scan range: {0}")]
    InvalidScan(String),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SplineError {
    /// `true` for errors caused by a malformed sample set.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SplineError::LengthMismatch { .. }
                | SplineError::TooFewKnots(_)
                | SplineError::NonFiniteValue { .. }
                | SplineError::NotStrictlyIncreasing { .. }
        )
    }
}

pub type SplineResult<T> = Result<T, SplineError>;
