//! The immutable [`Maze`] type.

use crate::builder::MazeBuilder;
use crate::cell::CellKind;
use crate::error::{Marker, MazeError};
use mazenv_core::{Position, ShapeError};
use mazenv_space::{neighbours, positions, shape_contains, Positions, Shape};

/// An N-dimensional maze: a wall/space grid plus optional start and end.
///
/// # Invariants
///
/// - `walls` holds exactly one entry per cell of `shape`, in rank order.
/// - `start` and `end`, when set, are in bounds, not walls, and distinct.
///
/// Nothing mutates a `Maze` after construction. To edit one, copy it into
/// a [`MazeBuilder`] with [`to_builder`](Self::to_builder).
///
/// Two mazes are equal iff their shapes, start and end positions, and every
/// wall bit match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    shape: Shape,
    walls: Vec<bool>,
    start: Option<Position>,
    end: Option<Position>,
}

impl Maze {
    /// Build a maze from a rank-ordered wall vector and optional markers.
    ///
    /// # Errors
    ///
    /// - [`MazeError::GridSizeMismatch`] if `walls.len() != shape.cell_count()`.
    /// - [`MazeError::Shape`] if a marker has the wrong rank.
    /// - [`MazeError::MarkerOutOfBounds`] / [`MazeError::MarkerOnWall`] for
    ///   a misplaced marker.
    /// - [`MazeError::MarkersCoincide`] if start and end are the same cell.
    pub fn new(
        shape: Shape,
        walls: Vec<bool>,
        start: Option<Position>,
        end: Option<Position>,
    ) -> Result<Self, MazeError> {
        if walls.len() != shape.cell_count() {
            return Err(MazeError::GridSizeMismatch {
                expected: shape.cell_count(),
                found: walls.len(),
            });
        }
        if let Some(pos) = &start {
            validate_marker(&shape, &walls, Marker::Start, pos)?;
        }
        if let Some(pos) = &end {
            validate_marker(&shape, &walls, Marker::End, pos)?;
            if start.as_ref() == Some(pos) {
                return Err(MazeError::MarkersCoincide { pos: pos.clone() });
            }
        }
        Ok(Self {
            shape,
            walls,
            start,
            end,
        })
    }

    /// Lattice shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Start cell, if any.
    pub fn start(&self) -> Option<&Position> {
        self.start.as_ref()
    }

    /// End cell, if any.
    pub fn end(&self) -> Option<&Position> {
        self.end.as_ref()
    }

    /// Wall bits in rank order.
    pub fn walls(&self) -> &[bool] {
        &self.walls
    }

    /// `true` if `pos` is a wall. Out-of-bounds positions, including those
    /// of the wrong rank, are always walls.
    pub fn is_wall(&self, pos: &[i32]) -> bool {
        match self.shape.rank(pos) {
            Some(rank) => self.walls[rank],
            None => true,
        }
    }

    /// Bounds check against the maze shape.
    ///
    /// # Errors
    ///
    /// [`ShapeError::InvalidDimension`] if `pos` has the wrong rank.
    pub fn in_bounds(&self, pos: &[i32]) -> Result<bool, ShapeError> {
        shape_contains(&self.shape, pos)
    }

    /// Neighbours of `pos` that are not walls, in lattice neighbour order.
    pub fn neighbouring_non_walls<'a>(
        &'a self,
        pos: &[i32],
    ) -> impl Iterator<Item = Position> + 'a {
        neighbours(pos).filter(move |nb| !self.is_wall(nb))
    }

    /// Every cell, in row-major order.
    pub fn positions(&self) -> Positions<'_> {
        positions(&self.shape)
    }

    /// Open cells other than the start and end, in row-major order.
    pub fn spaces(&self) -> impl Iterator<Item = Position> + '_ {
        open_cells(
            &self.shape,
            &self.walls,
            self.start.as_ref(),
            self.end.as_ref(),
        )
    }

    /// Classify a cell. Out-of-bounds positions are [`CellKind::Wall`].
    pub fn classify(&self, pos: &[i32]) -> CellKind {
        if self.is_wall(pos) {
            CellKind::Wall
        } else if self.start.as_deref() == Some(pos) {
            CellKind::Start
        } else if self.end.as_deref() == Some(pos) {
            CellKind::End
        } else {
            CellKind::Space
        }
    }

    /// Classification of every cell, in row-major order.
    pub fn cell_kinds(&self) -> impl Iterator<Item = CellKind> + '_ {
        self.positions().map(move |pos| self.classify(&pos))
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// Number of passable cells, including the start and end.
    pub fn open_count(&self) -> usize {
        self.walls.len() - self.wall_count()
    }

    /// Copy this maze into a mutable builder.
    pub fn to_builder(&self) -> MazeBuilder {
        MazeBuilder::from_parts(
            self.shape.clone(),
            self.walls.clone(),
            self.start.clone(),
            self.end.clone(),
        )
    }
}

/// Check that a marker is in bounds and open.
pub(crate) fn validate_marker(
    shape: &Shape,
    walls: &[bool],
    marker: Marker,
    pos: &Position,
) -> Result<(), MazeError> {
    if !shape.contains(pos)? {
        return Err(MazeError::MarkerOutOfBounds {
            marker,
            pos: pos.clone(),
        });
    }
    match shape.rank(pos) {
        Some(rank) if !walls[rank] => Ok(()),
        _ => Err(MazeError::MarkerOnWall {
            marker,
            pos: pos.clone(),
        }),
    }
}

/// Open cells that are neither `start` nor `end`, in row-major order.
pub(crate) fn open_cells<'a>(
    shape: &'a Shape,
    walls: &'a [bool],
    start: Option<&'a Position>,
    end: Option<&'a Position>,
) -> impl Iterator<Item = Position> + 'a {
    positions(shape)
        .zip(walls.iter())
        .filter(move |(pos, wall)| !**wall && Some(pos) != start && Some(pos) != end)
        .map(|(pos, _)| pos)
}
