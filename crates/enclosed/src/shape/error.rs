use std::fmt;

/// Errors surfaced by `EnclosedShape` construction and scaling.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A shape needs at least one point.
    EmptyPath,
    /// Point `index` of the construction path has a NaN or infinite coordinate.
    NonFinite { index: usize },
    /// A scale target (or multiplier) is NaN or infinite.
    NonFiniteTarget,
    /// `scale_to` was given neither a width nor a height.
    MissingTargetSize,
    /// The current extent along `axis` is zero, so no scale factor exists.
    DegenerateExtent { axis: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::EmptyPath => write!(f, "shape path has no points"),
            ShapeError::NonFinite { index } => {
                write!(f, "path point {index} has a non-finite coordinate")
            }
            ShapeError::NonFiniteTarget => write!(f, "scale target must be finite"),
            ShapeError::MissingTargetSize => {
                write!(f, "at least one of the scale dimensions must be given")
            }
            ShapeError::DegenerateExtent { axis } => write!(
                f,
                "cannot scale along axis {} (current extent is zero)",
                if *axis == 0 { "x" } else { "y" }
            ),
        }
    }
}

impl std::error::Error for ShapeError {}
