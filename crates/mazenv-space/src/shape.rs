//! Validated N-dimensional lattice extents.

use mazenv_core::{Position, ShapeError};
use smallvec::SmallVec;
use std::fmt;

/// Extent of every axis of an N-dimensional rectangular lattice.
///
/// A shape has at least one axis and every extent is positive, so the
/// lattice always has at least one cell. Cells are identified either by a
/// [`Position`] or by their *rank*: the flat row-major index in which the
/// first axis varies slowest.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: SmallVec<[u32; 4]>,
    strides: SmallVec<[usize; 4]>,
    cell_count: usize,
}

impl Shape {
    /// Largest accepted extent: positions use `i32` components.
    pub const MAX_EXTENT: u32 = i32::MAX as u32;

    /// Validate `dims` and build a shape.
    ///
    /// # Errors
    ///
    /// - [`ShapeError::Empty`] if `dims` is empty.
    /// - [`ShapeError::ZeroExtent`] if any extent is zero.
    /// - [`ShapeError::ExtentTooLarge`] if any extent exceeds [`Self::MAX_EXTENT`].
    /// - [`ShapeError::CellCountOverflow`] if the cell count overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazenv_space::Shape;
    ///
    /// let shape = Shape::new(&[3, 5, 8]).unwrap();
    /// assert_eq!(shape.ndim(), 3);
    /// assert_eq!(shape.cell_count(), 120);
    /// assert!(Shape::new(&[]).is_err());
    /// assert!(Shape::new(&[4, 0]).is_err());
    /// ```
    pub fn new(dims: &[u32]) -> Result<Self, ShapeError> {
        if dims.is_empty() {
            return Err(ShapeError::Empty);
        }
        for (axis, &value) in dims.iter().enumerate() {
            if value == 0 {
                return Err(ShapeError::ZeroExtent { axis });
            }
            if value > Self::MAX_EXTENT {
                return Err(ShapeError::ExtentTooLarge {
                    axis,
                    value,
                    max: Self::MAX_EXTENT,
                });
            }
        }

        // strides[i] = product(dims[j] for j > i); last axis is fastest.
        let mut strides: SmallVec<[usize; 4]> = SmallVec::from_elem(1, dims.len());
        let mut cell_count: usize = 1;
        for axis in (0..dims.len()).rev() {
            strides[axis] = cell_count;
            cell_count = cell_count
                .checked_mul(dims[axis] as usize)
                .ok_or(ShapeError::CellCountOverflow)?;
        }

        Ok(Self {
            dims: SmallVec::from_slice(dims),
            strides,
            cell_count,
        })
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Extent of every axis.
    pub fn dims(&self) -> &[u32] {
        &self.dims
    }

    /// Rank stride of every axis (row-major).
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Bounds check with rank validation.
    ///
    /// Returns `Err(ShapeError::InvalidDimension)` if `pos` does not have
    /// exactly [`ndim`](Self::ndim) components.
    pub fn contains(&self, pos: &[i32]) -> Result<bool, ShapeError> {
        if pos.len() != self.ndim() {
            return Err(ShapeError::InvalidDimension {
                expected: self.ndim(),
                found: pos.len(),
            });
        }
        Ok(pos
            .iter()
            .zip(&self.dims)
            .all(|(&v, &dim)| v >= 0 && (v as u32) < dim))
    }

    /// Flat row-major index of `pos`.
    ///
    /// Returns `None` if `pos` has the wrong rank or is out of bounds.
    pub fn rank(&self, pos: &[i32]) -> Option<usize> {
        if !self.contains(pos).ok()? {
            return None;
        }
        Some(
            pos.iter()
                .zip(&self.strides)
                .map(|(&v, &stride)| v as usize * stride)
                .sum(),
        )
    }

    /// Inverse of [`rank`](Self::rank). Returns `None` for `rank >= cell_count`.
    pub fn position(&self, rank: usize) -> Option<Position> {
        if rank >= self.cell_count {
            return None;
        }
        Some(self.position_unchecked(rank))
    }

    /// Mixed-radix decomposition of an in-range rank.
    pub(crate) fn position_unchecked(&self, rank: usize) -> Position {
        let mut pos: Position = SmallVec::from_elem(0, self.ndim());
        let mut remaining = rank;
        for axis in (0..self.ndim()).rev() {
            let dim = self.dims[axis] as usize;
            pos[axis] = (remaining % dim) as i32;
            remaining /= dim;
        }
        pos
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, dim) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, "x")?;
            }
            write!(f, "{dim}")?;
        }
        Ok(())
    }
}
