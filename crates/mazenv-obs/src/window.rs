//! Horizon-limited windows around a focal position.

use crate::encode::encode_one_hot;
use crate::error::WindowError;
use mazenv_core::Position;
use mazenv_maze::{CellKind, Maze};
use smallvec::SmallVec;

/// Precompiled relative offsets for windows of one rank and horizon.
///
/// Offsets are stored in row-major order over `[-h, h]^D`, so the cells of
/// every extracted [`Window`] come out in the same order and can be
/// reshaped to `[2h+1; D]` directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowPlan {
    ndim: usize,
    horizon: u32,
    offsets: Vec<Position>,
}

impl WindowPlan {
    /// Compile the offsets for an `ndim`-dimensional window of radius
    /// `horizon`.
    ///
    /// # Errors
    ///
    /// - [`WindowError::EmptyDimensions`] if `ndim == 0`.
    /// - [`WindowError::TooLarge`] if the side `2h+1` exceeds `i32` range or
    ///   `(2h+1)^D` overflows `usize`.
    pub fn new(ndim: usize, horizon: u32) -> Result<Self, WindowError> {
        if ndim == 0 {
            return Err(WindowError::EmptyDimensions);
        }
        let too_large = WindowError::TooLarge { ndim, horizon };
        let side = horizon
            .checked_mul(2)
            .and_then(|v| v.checked_add(1))
            .filter(|&v| i32::try_from(v).is_ok())
            .ok_or_else(|| too_large.clone())? as usize;
        let exp = u32::try_from(ndim).map_err(|_| too_large.clone())?;
        let total = side.checked_pow(exp).ok_or(too_large)?;

        let h = horizon as i32;
        let mut offsets = Vec::with_capacity(total);
        for index in 0..total {
            // Row-major decomposition: last axis fastest.
            let mut rel: Position = SmallVec::from_elem(0, ndim);
            let mut remaining = index;
            for axis in (0..ndim).rev() {
                rel[axis] = (remaining % side) as i32 - h;
                remaining /= side;
            }
            offsets.push(rel);
        }

        Ok(Self {
            ndim,
            horizon,
            offsets,
        })
    }

    /// Rank of mazes this plan applies to.
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Radius along every axis.
    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    /// Number of cells per window, `(2h+1)^D`.
    pub fn cell_count(&self) -> usize {
        self.offsets.len()
    }

    /// Relative offsets in output order.
    pub fn offsets(&self) -> &[Position] {
        &self.offsets
    }

    /// `true` if every cell of a window centred on `center` lies inside
    /// `maze`.
    pub fn is_interior(&self, maze: &Maze, center: &[i32]) -> bool {
        let h = i64::from(self.horizon);
        center.len() == maze.ndim()
            && center
                .iter()
                .zip(maze.shape().dims())
                .all(|(&c, &dim)| i64::from(c) >= h && i64::from(c) + h < i64::from(dim))
    }

    /// Extract the window centred on `center`.
    ///
    /// Cells outside the maze are [`CellKind::Wall`]; `center` itself may
    /// lie outside the maze.
    ///
    /// # Errors
    ///
    /// [`WindowError::InvalidDimension`] if `center` or `maze` does not have
    /// the plan's rank.
    pub fn extract(&self, maze: &Maze, center: &[i32]) -> Result<Window, WindowError> {
        self.check_rank(center.len())?;
        self.check_rank(maze.ndim())?;
        let cells = if self.is_interior(maze, center) {
            self.gather_interior(maze, center)
        } else {
            self.gather_boundary(maze, center)
        };
        Ok(Window {
            ndim: self.ndim,
            horizon: self.horizon,
            cells,
        })
    }

    fn check_rank(&self, found: usize) -> Result<(), WindowError> {
        if found != self.ndim {
            return Err(WindowError::InvalidDimension {
                expected: self.ndim,
                found,
            });
        }
        Ok(())
    }

    /// Every cell in bounds: offsets become flat rank deltas.
    fn gather_interior(&self, maze: &Maze, center: &[i32]) -> Vec<CellKind> {
        let shape = maze.shape();
        let Some(base) = shape.rank(center) else {
            return self.gather_boundary(maze, center);
        };
        let strides = shape.strides();
        let start = maze.start().and_then(|p| shape.rank(p));
        let end = maze.end().and_then(|p| shape.rank(p));
        let walls = maze.walls();

        self.offsets
            .iter()
            .map(|rel| {
                let delta: isize = rel
                    .iter()
                    .zip(strides)
                    .map(|(&r, &s)| r as isize * s as isize)
                    .sum();
                let rank = (base as isize + delta) as usize;
                if walls[rank] {
                    CellKind::Wall
                } else if Some(rank) == start {
                    CellKind::Start
                } else if Some(rank) == end {
                    CellKind::End
                } else {
                    CellKind::Space
                }
            })
            .collect()
    }

    /// Bounds-check every candidate; anything off the maze is a wall.
    fn gather_boundary(&self, maze: &Maze, center: &[i32]) -> Vec<CellKind> {
        let mut pos: Position = SmallVec::from_elem(0, self.ndim);
        self.offsets
            .iter()
            .map(|rel| {
                for ((p, &c), &r) in pos.iter_mut().zip(center).zip(rel) {
                    match c.checked_add(r) {
                        Some(v) => *p = v,
                        None => return CellKind::Wall,
                    }
                }
                maze.classify(&pos)
            })
            .collect()
    }
}

/// Extract a single window without keeping the plan.
///
/// # Errors
///
/// Any [`WindowError`] from [`WindowPlan::new`] or [`WindowPlan::extract`].
pub fn extract_window(maze: &Maze, center: &[i32], horizon: u32) -> Result<Window, WindowError> {
    WindowPlan::new(maze.ndim(), horizon)?.extract(maze, center)
}

/// A dense `[2h+1; D]` block of cell kinds around a focal position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window {
    ndim: usize,
    horizon: u32,
    cells: Vec<CellKind>,
}

impl Window {
    /// Extent of every axis: `2h+1`, repeated `D` times.
    pub fn shape(&self) -> SmallVec<[u32; 4]> {
        SmallVec::from_elem(2 * self.horizon + 1, self.ndim)
    }

    /// Radius along every axis.
    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// Wall mask in row-major order.
    pub fn walls(&self) -> Vec<bool> {
        self.cells.iter().map(|k| k.is_wall()).collect()
    }

    /// Index of the focal cell within [`cells`](Self::cells).
    pub fn center_index(&self) -> usize {
        self.cells.len() / 2
    }

    /// Cell at offset `rel` from the focal position, or `None` if `rel` has
    /// the wrong rank or reaches past the horizon.
    pub fn get(&self, rel: &[i32]) -> Option<CellKind> {
        if rel.len() != self.ndim {
            return None;
        }
        let h = i64::from(self.horizon);
        let side = 2 * h + 1;
        let mut index: i64 = 0;
        for &r in rel {
            let r = i64::from(r);
            if r < -h || r > h {
                return None;
            }
            index = index * side + (r + h);
        }
        self.cells.get(index as usize).copied()
    }

    /// One-hot encoding with the agent channel set on the focal cell.
    pub fn encode_one_hot(&self) -> Vec<u8> {
        encode_one_hot(&self.cells, Some(self.center_index()))
    }
}
