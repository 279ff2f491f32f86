//! One-hot cell encodings.
//!
//! Each cell becomes [`NUM_CELL_FIELDS`] bytes in channel order
//! `space, wall, start, end, agent`. Exactly one of the first four channels
//! is set per cell; the agent channel is set on at most one cell.

use mazenv_maze::{CellKind, Maze};

/// Channels per encoded cell.
pub const NUM_CELL_FIELDS: usize = 5;

/// Index of the agent channel within a cell.
pub const AGENT_CHANNEL: usize = 4;

fn channel(kind: CellKind) -> usize {
    match kind {
        CellKind::Space => 0,
        CellKind::Wall => 1,
        CellKind::Start => 2,
        CellKind::End => 3,
    }
}

/// Encode `cells` into `cells.len() * NUM_CELL_FIELDS` bytes.
///
/// `agent` marks the cell index holding the agent; an index past the end
/// marks nothing.
///
/// # Examples
///
/// ```
/// use mazenv_maze::CellKind;
/// use mazenv_obs::encode_one_hot;
///
/// let bytes = encode_one_hot(&[CellKind::Wall, CellKind::Start], Some(1));
/// assert_eq!(bytes, vec![0, 1, 0, 0, 0, 0, 0, 1, 0, 1]);
/// ```
pub fn encode_one_hot(cells: &[CellKind], agent: Option<usize>) -> Vec<u8> {
    let mut out = vec![0u8; cells.len() * NUM_CELL_FIELDS];
    for (cell, &kind) in out.chunks_exact_mut(NUM_CELL_FIELDS).zip(cells) {
        cell[channel(kind)] = 1;
    }
    let slot = agent
        .and_then(|i| i.checked_mul(NUM_CELL_FIELDS))
        .and_then(|base| base.checked_add(AGENT_CHANNEL));
    if let Some(byte) = slot.and_then(|i| out.get_mut(i)) {
        *byte = 1;
    }
    out
}

/// Encode every cell of `maze` in row-major order, marking the agent at
/// `agent` if it is inside the maze.
pub fn encode_maze(maze: &Maze, agent: &[i32]) -> Vec<u8> {
    let cells: Vec<CellKind> = maze.cell_kinds().collect();
    encode_one_hot(&cells, maze.shape().rank(agent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazenv_maze::parse_2d;

    #[test]
    fn one_class_bit_per_cell() {
        let maze = parse_2d("Aw.\n.wx").unwrap();
        let bytes = encode_maze(&maze, &[1, 0]);
        assert_eq!(bytes.len(), 6 * NUM_CELL_FIELDS);
        for cell in bytes.chunks(NUM_CELL_FIELDS) {
            assert_eq!(cell[..AGENT_CHANNEL].iter().sum::<u8>(), 1);
        }
    }

    #[test]
    fn channel_order_matches_layout() {
        let maze = parse_2d("Aw.\n.wx").unwrap();
        let bytes = encode_maze(&maze, &[1, 0]);
        let cells: Vec<&[u8]> = bytes.chunks(NUM_CELL_FIELDS).collect();
        assert_eq!(cells[0], &[0, 0, 1, 0, 0]);
        assert_eq!(cells[1], &[0, 1, 0, 0, 0]);
        assert_eq!(cells[2], &[1, 0, 0, 0, 0]);
        assert_eq!(cells[3], &[1, 0, 0, 0, 1]);
        assert_eq!(cells[5], &[0, 0, 0, 1, 0]);
    }

    #[test]
    fn agent_outside_marks_nothing() {
        let maze = parse_2d("A.").unwrap();
        let bytes = encode_maze(&maze, &[0, 5]);
        assert!(bytes.chunks(NUM_CELL_FIELDS).all(|c| c[AGENT_CHANNEL] == 0));
        let bytes = encode_one_hot(&[CellKind::Space], Some(7));
        assert_eq!(bytes, vec![1, 0, 0, 0, 0]);
        assert_eq!(encode_one_hot(&[CellKind::Space], Some(usize::MAX)).len(), 5);
        assert_eq!(encode_one_hot(&[], None), Vec::<u8>::new());
    }
}
