//! Mutable construction phase for [`Maze`].

use crate::error::MazeError;
use crate::maze::{open_cells, Maze};
use mazenv_core::Position;
use mazenv_space::{neighbours, Shape};

/// A maze under construction.
///
/// Cells can be carved or walled and the markers moved freely; nothing is
/// validated until [`build`](Self::build), which consumes the builder and
/// returns an immutable [`Maze`].
///
/// # Examples
///
/// ```
/// use mazenv_maze::MazeBuilder;
/// use mazenv_space::Shape;
///
/// let mut b = MazeBuilder::new(Shape::new(&[1, 3]).unwrap());
/// b.carve(&[0, 0]).unwrap();
/// b.carve(&[0, 1]).unwrap();
/// b.set_start(Some(vec![0, 0].into()));
/// b.set_end(Some(vec![0, 1].into()));
/// let maze = b.build().unwrap();
/// assert_eq!(maze.to_text_2d().unwrap(), "Axw");
/// ```
#[derive(Clone, Debug)]
pub struct MazeBuilder {
    shape: Shape,
    walls: Vec<bool>,
    start: Option<Position>,
    end: Option<Position>,
}

impl MazeBuilder {
    /// A builder whose every cell is a wall.
    pub fn new(shape: Shape) -> Self {
        let walls = vec![true; shape.cell_count()];
        Self::from_parts(shape, walls, None, None)
    }

    /// A builder over an existing rank-ordered wall vector.
    ///
    /// Returns `Err(MazeError::GridSizeMismatch)` if the vector does not
    /// have one entry per cell.
    pub fn from_walls(shape: Shape, walls: Vec<bool>) -> Result<Self, MazeError> {
        if walls.len() != shape.cell_count() {
            return Err(MazeError::GridSizeMismatch {
                expected: shape.cell_count(),
                found: walls.len(),
            });
        }
        Ok(Self::from_parts(shape, walls, None, None))
    }

    pub(crate) fn from_parts(
        shape: Shape,
        walls: Vec<bool>,
        start: Option<Position>,
        end: Option<Position>,
    ) -> Self {
        Self {
            shape,
            walls,
            start,
            end,
        }
    }

    /// Lattice shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Current start marker.
    pub fn start(&self) -> Option<&Position> {
        self.start.as_ref()
    }

    /// Current end marker.
    pub fn end(&self) -> Option<&Position> {
        self.end.as_ref()
    }

    /// `true` if `pos` is a wall or out of bounds.
    pub fn is_wall(&self, pos: &[i32]) -> bool {
        match self.shape.rank(pos) {
            Some(rank) => self.walls[rank],
            None => true,
        }
    }

    /// Set the wall bit of an in-bounds cell.
    ///
    /// Returns `Err(MazeError::OutOfBounds)` for positions outside the
    /// shape, including positions of the wrong rank.
    pub fn set_wall(&mut self, pos: &[i32], wall: bool) -> Result<(), MazeError> {
        let rank = self.shape.rank(pos).ok_or_else(|| MazeError::OutOfBounds {
            pos: Position::from_slice(pos),
        })?;
        self.walls[rank] = wall;
        Ok(())
    }

    /// Turn a wall cell into a space.
    pub fn carve(&mut self, pos: &[i32]) -> Result<(), MazeError> {
        self.set_wall(pos, false)
    }

    /// Set or clear the start marker. Validated by [`build`](Self::build).
    pub fn set_start(&mut self, pos: Option<Position>) -> &mut Self {
        self.start = pos;
        self
    }

    /// Set or clear the end marker. Validated by [`build`](Self::build).
    pub fn set_end(&mut self, pos: Option<Position>) -> &mut Self {
        self.end = pos;
        self
    }

    /// Number of axis-aligned neighbours of `pos` that are not walls.
    pub fn non_wall_neighbour_count(&self, pos: &[i32]) -> usize {
        neighbours(pos).filter(|nb| !self.is_wall(nb)).count()
    }

    /// Open cells other than the current markers, in row-major order.
    pub fn spaces(&self) -> impl Iterator<Item = Position> + '_ {
        open_cells(
            &self.shape,
            &self.walls,
            self.start.as_ref(),
            self.end.as_ref(),
        )
    }

    /// Validate every invariant and freeze the maze.
    ///
    /// # Errors
    ///
    /// Any [`MazeError`] [`Maze::new`] reports for a misplaced marker.
    pub fn build(self) -> Result<Maze, MazeError> {
        Maze::new(self.shape, self.walls, self.start, self.end)
    }
}
