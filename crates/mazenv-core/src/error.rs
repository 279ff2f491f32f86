//! Error types for lattice shapes.

use std::error::Error;
use std::fmt;

/// Errors arising from shape construction or position/shape rank checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// A shape must have at least one axis.
    Empty,
    /// Every axis must have a positive extent.
    ZeroExtent {
        /// Index of the offending axis.
        axis: usize,
    },
    /// An extent does not fit the signed `i32` position components.
    ExtentTooLarge {
        /// Index of the offending axis.
        axis: usize,
        /// The rejected extent.
        value: u32,
        /// Largest accepted extent.
        max: u32,
    },
    /// The product of all extents overflows `usize`.
    CellCountOverflow,
    /// A position's rank does not match the shape's rank.
    InvalidDimension {
        /// Number of axes the shape has.
        expected: usize,
        /// Number of components the position has.
        found: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "shape must have at least one axis"),
            Self::ZeroExtent { axis } => write!(f, "axis {axis} has zero extent"),
            Self::ExtentTooLarge { axis, value, max } => {
                write!(f, "axis {axis} extent {value} exceeds maximum {max}")
            }
            Self::CellCountOverflow => write!(f, "total cell count overflows usize"),
            Self::InvalidDimension { expected, found } => {
                write!(f, "expected a {expected}-D position, got {found}-D")
            }
        }
    }
}

impl Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_axis() {
        let msg = ShapeError::ZeroExtent { axis: 2 }.to_string();
        assert!(msg.contains("axis 2"), "{msg}");
    }

    #[test]
    fn display_invalid_dimension() {
        let msg = ShapeError::InvalidDimension {
            expected: 2,
            found: 3,
        }
        .to_string();
        assert_eq!(msg, "expected a 2-D position, got 3-D");
    }
}
