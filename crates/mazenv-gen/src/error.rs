//! Generation errors.

use mazenv_maze::MazeError;
use std::error::Error;
use std::fmt;

/// Errors from maze generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// The shape has no room for distinct start and end cells.
    TooFewCells {
        /// Cell count of the requested shape.
        cells: usize,
    },
    /// The carved grid failed maze validation.
    Maze(MazeError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewCells { cells } => {
                write!(f, "shape has {cells} cell(s), generation needs at least 2")
            }
            Self::Maze(e) => write!(f, "generated maze is invalid: {e}"),
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            Self::TooFewCells { .. } => None,
        }
    }
}

impl From<MazeError> for GenerateError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}
