use std::fmt;

/// Errors returned by triangle construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A triangle dimension was zero, negative, or not finite.
    InvalidDimension(&'static str),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension(msg) => write!(f, "invalid dimension: {msg}"),
        }
    }
}

impl std::error::Error for GeometryError {}
