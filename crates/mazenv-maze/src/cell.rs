//! Per-cell classification.

/// What occupies a maze cell.
///
/// A cell is exactly one kind. Walls take precedence over markers, and the
/// start marker over the end marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellKind {
    /// Passable, unmarked cell.
    Space = 0,
    /// Impassable cell. Everything outside the maze is a wall.
    Wall = 1,
    /// The start cell.
    Start = 2,
    /// The end cell.
    End = 3,
}

impl CellKind {
    /// `true` for [`CellKind::Wall`].
    pub fn is_wall(self) -> bool {
        self == CellKind::Wall
    }

    /// Character used by the 2-D text format.
    pub fn symbol(self) -> char {
        match self {
            CellKind::Space => '.',
            CellKind::Wall => 'w',
            CellKind::Start => 'A',
            CellKind::End => 'x',
        }
    }

    /// Decode a text-format character. Unknown characters are spaces.
    pub fn from_symbol(ch: char) -> CellKind {
        match ch {
            'w' => CellKind::Wall,
            'A' => CellKind::Start,
            'x' => CellKind::End,
            _ => CellKind::Space,
        }
    }
}
