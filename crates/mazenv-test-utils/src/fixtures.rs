//! Hand-built mazes with known properties.
//!
//! - [`corridor_maze`]: `A.www` / `wxwww`, solved by `[(0,0),(0,1),(1,1)]`.
//! - [`unsolvable_maze`]: `Awwww` / `wxwww`, end walled off.
//! - [`open_grid`]: no walls, start at the origin, end at the far corner.

use mazenv_core::Position;
use mazenv_maze::{parse_2d, Maze};
use mazenv_space::Shape;

pub const CORRIDOR_TEXT: &str = "A.www\nwxwww";
pub const UNSOLVABLE_TEXT: &str = "Awwww\nwxwww";

pub fn corridor_maze() -> Maze {
    parse_2d(CORRIDOR_TEXT).expect("corridor fixture parses")
}

pub fn corridor_solution() -> Vec<Position> {
    vec![
        Position::from_slice(&[0, 0]),
        Position::from_slice(&[0, 1]),
        Position::from_slice(&[1, 1]),
    ]
}

pub fn unsolvable_maze() -> Maze {
    parse_2d(UNSOLVABLE_TEXT).expect("unsolvable fixture parses")
}

/// Wall-free maze from the origin to the opposite corner.
///
/// Panics if `dims` is not a valid shape with at least two cells.
pub fn open_grid(dims: &[u32]) -> Maze {
    let shape = Shape::new(dims).expect("valid fixture shape");
    let far: Position = dims.iter().map(|&d| d as i32 - 1).collect();
    let origin: Position = std::iter::repeat(0).take(dims.len()).collect();
    let n = shape.cell_count();
    Maze::new(shape, vec![false; n], Some(origin), Some(far)).expect("open grid is valid")
}

/// Texts that parse and serialize back unchanged.
pub fn round_trip_texts() -> Vec<&'static str> {
    vec![
        CORRIDOR_TEXT,
        UNSOLVABLE_TEXT,
        ".wA\nw..",
        ".w\nwA\nxw",
        ".w\nw.\nxw",
        "A",
        "wwwww",
    ]
}
