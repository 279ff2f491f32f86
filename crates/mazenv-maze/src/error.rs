//! Error types for maze construction, text parsing and solving.

use mazenv_core::{Position, ShapeError};
use std::error::Error;
use std::fmt;

/// Which of the two marked cells an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The start cell.
    Start,
    /// The end cell.
    End,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Errors from building a [`Maze`](crate::Maze) or editing a
/// [`MazeBuilder`](crate::MazeBuilder).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// Invalid shape, or a position of the wrong rank.
    Shape(ShapeError),
    /// The wall vector does not have one entry per cell.
    GridSizeMismatch {
        /// Cell count of the shape.
        expected: usize,
        /// Length of the supplied wall vector.
        found: usize,
    },
    /// A cell edit targeted a position outside the shape.
    OutOfBounds {
        /// The offending position.
        pos: Position,
    },
    /// The start or end position lies outside the shape.
    MarkerOutOfBounds {
        /// Which marker.
        marker: Marker,
        /// The offending position.
        pos: Position,
    },
    /// The start or end position is a wall.
    MarkerOnWall {
        /// Which marker.
        marker: Marker,
        /// The offending position.
        pos: Position,
    },
    /// The start and end markers name the same cell.
    MarkersCoincide {
        /// The shared position.
        pos: Position,
    },
    /// Text serialization is only defined for 2-D mazes.
    NotTwoDimensional {
        /// Rank of the maze that was asked to serialize.
        ndim: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(e) => write!(f, "invalid shape: {e}"),
            Self::GridSizeMismatch { expected, found } => {
                write!(f, "wall grid has {found} cells, shape needs {expected}")
            }
            Self::OutOfBounds { pos } => write!(f, "position {pos:?} out of bounds"),
            Self::MarkerOutOfBounds { marker, pos } => {
                write!(f, "{marker} position {pos:?} out of bounds")
            }
            Self::MarkerOnWall { marker, pos } => {
                write!(f, "{marker} position {pos:?} is a wall")
            }
            Self::MarkersCoincide { pos } => {
                write!(f, "start and end are both at {pos:?}")
            }
            Self::NotTwoDimensional { ndim } => {
                write!(f, "text serialization needs a 2-D maze, got {ndim}-D")
            }
        }
    }
}

impl Error for MazeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Shape(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ShapeError> for MazeError {
    fn from(e: ShapeError) -> Self {
        Self::Shape(e)
    }
}

/// Errors from [`parse_2d`](crate::parse_2d).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The text contains no rows.
    EmptyGrid,
    /// A row's length differs from the first row's.
    MalformedGrid {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row, in characters.
        expected: usize,
        /// Length of the offending row, in characters.
        found: usize,
    },
    /// A second `A` appeared.
    DuplicateStart {
        /// Position of the first `A`.
        first: Position,
        /// Position of the repeated `A`.
        second: Position,
    },
    /// A second `x` appeared.
    DuplicateEnd {
        /// Position of the first `x`.
        first: Position,
        /// Position of the repeated `x`.
        second: Position,
    },
    /// The parsed grid could not form a maze.
    Maze(MazeError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "maze text must have at least one row"),
            Self::MalformedGrid {
                row,
                expected,
                found,
            } => write!(f, "row {row} length should be {expected} but got {found}"),
            Self::DuplicateStart { first, second } => {
                write!(f, "more than one start cell: {first:?} and {second:?}")
            }
            Self::DuplicateEnd { first, second } => {
                write!(f, "more than one end cell: {first:?} and {second:?}")
            }
            Self::Maze(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MazeError> for ParseError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

impl From<ShapeError> for ParseError {
    fn from(e: ShapeError) -> Self {
        Self::Maze(MazeError::Shape(e))
    }
}

/// Errors from [`Maze::solve`](crate::Maze::solve).
///
/// An unreachable or unset end cell is not an error: `solve` returns
/// `Ok(None)` for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The maze has no start cell.
    NoStart,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStart => write!(f, "maze has no start position"),
        }
    }
}

impl Error for SolveError {}
