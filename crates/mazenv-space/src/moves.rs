//! Discrete action mapping onto the lattice neighbour order.

use mazenv_core::Position;

/// A single discrete agent action on an N-dimensional lattice.
///
/// Action index `0` is [`Move::Stay`]. Index `i >= 1` selects the `i`-th
/// neighbour in [`neighbours`](crate::neighbours) order, so for a 2-D
/// lattice indices `1..=4` mean up, down, left, right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Do not move.
    Stay,
    /// Step one cell along `axis`.
    Step {
        /// Axis to move along.
        axis: usize,
        /// `-1` or `+1`.
        delta: i8,
    },
}

impl Move {
    /// Size of the discrete action space for an `ndim`-dimensional lattice.
    pub fn action_count(ndim: usize) -> usize {
        2 * ndim + 1
    }

    /// Decode an action index. Returns `None` when `index` is not below
    /// [`action_count(ndim)`](Self::action_count).
    ///
    /// # Examples
    ///
    /// ```
    /// use mazenv_space::Move;
    ///
    /// assert_eq!(Move::from_index(2, 0), Some(Move::Stay));
    /// assert_eq!(Move::from_index(2, 3), Some(Move::Step { axis: 1, delta: -1 }));
    /// assert_eq!(Move::from_index(2, 5), None);
    /// ```
    pub fn from_index(ndim: usize, index: usize) -> Option<Move> {
        if index == 0 {
            return Some(Move::Stay);
        }
        if index >= Self::action_count(ndim) {
            return None;
        }
        let k = index - 1;
        Some(Move::Step {
            axis: k / 2,
            delta: if k % 2 == 0 { -1 } else { 1 },
        })
    }

    /// Inverse of [`from_index`](Self::from_index).
    pub fn index(self) -> usize {
        match self {
            Move::Stay => 0,
            Move::Step { axis, delta } => 1 + 2 * axis + usize::from(delta > 0),
        }
    }

    /// The position reached from `pos` by this move.
    ///
    /// The result may be out of bounds or a wall; whether the move is
    /// allowed is the caller's decision. A step along an axis `pos` does not
    /// have leaves `pos` unchanged.
    pub fn apply(self, pos: &[i32]) -> Position {
        let mut out = Position::from_slice(pos);
        if let Move::Step { axis, delta } = self {
            if let Some(v) = out.get_mut(axis) {
                *v = v.saturating_add(i32::from(delta));
            }
        }
        out
    }
}
