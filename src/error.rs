use thiserror::Error;

/// Top-level error type for the landmark distance crate.
///
/// Distance computations themselves never fail; only validating
/// constructors and input parsing report errors.
#[derive(Debug, Error)]
pub enum LandmarkError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors related to geometric setup.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("image size {width}x{height} has a zero dimension")]
    EmptyImage { width: u32, height: u32 },
}

/// Errors related to parsing caller-supplied input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("invalid image size: {0} (expected WIDTHxHEIGHT)")]
    InvalidImageSize(String),
}

/// Convenience type alias for results using [`LandmarkError`].
pub type Result<T> = std::result::Result<T, LandmarkError>;
