//! Enumeration of lattice cells and axis-aligned neighbours.
//!
//! These are pure functions of their inputs: two calls with the same
//! arguments always produce the same sequence.

use crate::shape::Shape;
use mazenv_core::{Position, ShapeError};
use smallvec::SmallVec;
use std::iter::FusedIterator;

/// Every in-bounds position of `shape`, each exactly once, in row-major
/// order (first axis slowest-varying).
pub fn positions(shape: &Shape) -> Positions<'_> {
    Positions {
        shape,
        next: 0,
        end: shape.cell_count(),
    }
}

/// The `2 * pos.len()` axis-aligned neighbours of `pos`.
///
/// For each axis in increasing order, yields `pos` with that axis
/// decremented, then incremented. External action spaces index into this
/// order (see [`Move`](crate::Move)), so it must never change.
/// Yielded positions may be out of bounds; callers bounds-check.
pub fn neighbours(pos: &[i32]) -> Neighbours {
    Neighbours {
        base: SmallVec::from_slice(pos),
        next: 0,
    }
}

/// Bounds check: `true` iff every axis of `pos` lies in `[0, shape[axis])`.
///
/// # Errors
///
/// [`ShapeError::InvalidDimension`] if `pos.len() != shape.ndim()`.
pub fn shape_contains(shape: &Shape, pos: &[i32]) -> Result<bool, ShapeError> {
    shape.contains(pos)
}

/// Iterator returned by [`positions`].
#[derive(Clone, Debug)]
pub struct Positions<'a> {
    shape: &'a Shape,
    next: usize,
    end: usize,
}

impl Iterator for Positions<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.next >= self.end {
            return None;
        }
        let pos = self.shape.position_unchecked(self.next);
        self.next += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Positions<'_> {
    fn next_back(&mut self) -> Option<Position> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.shape.position_unchecked(self.end))
    }
}

impl ExactSizeIterator for Positions<'_> {}
impl FusedIterator for Positions<'_> {}

/// Iterator returned by [`neighbours`].
#[derive(Clone, Debug)]
pub struct Neighbours {
    base: Position,
    next: usize,
}

impl Iterator for Neighbours {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.next >= 2 * self.base.len() {
            return None;
        }
        let axis = self.next / 2;
        let mut pos = self.base.clone();
        // Saturation keeps extreme inputs out of bounds instead of wrapping.
        pos[axis] = if self.next % 2 == 0 {
            pos[axis].saturating_sub(1)
        } else {
            pos[axis].saturating_add(1)
        };
        self.next += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = 2 * self.base.len() - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Neighbours {}
impl FusedIterator for Neighbours {}
