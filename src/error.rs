use thiserror::Error;

/// Top-level error type for the trend-line detection pipeline.
#[derive(Debug, Error)]
pub enum TrendlineError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors raised by parameter validation, before any processing starts.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("maximum distance must be positive, got {0}")]
    NonPositiveMaxDistance(f64),

    #[error("minimum edge count must be at least 1")]
    ZeroMinEdges,

    #[error("azimuth target and tolerance must be provided together")]
    IncompleteAzimuthFilter,

    #[error("azimuth tolerance must be non-negative, got {0}")]
    NegativeAzimuthTolerance(f64),
}

/// Errors raised by malformed input point sets.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{array} array has length {actual}, expected {expected} to match the point count")]
    LengthMismatch {
        array: &'static str,
        actual: usize,
        expected: usize,
    },

    #[error("non-finite coordinate at point {0}")]
    NonFiniteCoordinate(usize),
}

/// Convenience type alias for results using [`TrendlineError`].
pub type Result<T> = std::result::Result<T, TrendlineError>;
