//! Window errors.

use std::error::Error;
use std::fmt;

/// Errors from compiling or applying a [`WindowPlan`](crate::WindowPlan).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WindowError {
    /// A window needs at least one axis.
    EmptyDimensions,
    /// `(2h+1)^D` does not fit in memory indices.
    TooLarge {
        /// Requested rank.
        ndim: usize,
        /// Requested horizon.
        horizon: u32,
    },
    /// The focal position or maze does not match the plan's rank.
    InvalidDimension {
        /// Rank the plan was compiled for.
        expected: usize,
        /// Rank supplied.
        found: usize,
    },
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimensions => write!(f, "window must have at least one dimension"),
            Self::TooLarge { ndim, horizon } => {
                write!(f, "window of horizon {horizon} in {ndim}-D is too large")
            }
            Self::InvalidDimension { expected, found } => {
                write!(f, "window plan is {expected}-D, got {found}-D input")
            }
        }
    }
}

impl Error for WindowError {}
