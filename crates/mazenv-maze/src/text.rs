//! Text format for 2-D mazes.
//!
//! One line per row, one character per cell: `w` is a wall, `A` the start,
//! `x` the end, and any other character a plain space (`.` when written).
//! Higher-dimensional mazes have no text form.

use crate::builder::MazeBuilder;
use crate::cell::CellKind;
use crate::error::{MazeError, ParseError};
use crate::maze::Maze;
use mazenv_core::{Position, ShapeError};
use mazenv_space::Shape;
use smallvec::smallvec;
use std::fmt;
use std::str::FromStr;

/// Decode a 2-D maze.
///
/// Surrounding whitespace of the whole text and of every line is ignored.
///
/// # Errors
///
/// - [`ParseError::EmptyGrid`] if there are no rows.
/// - [`ParseError::MalformedGrid`] if rows differ in length.
/// - [`ParseError::DuplicateStart`] / [`ParseError::DuplicateEnd`] on a
///   repeated marker.
pub fn parse_2d(text: &str) -> Result<Maze, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::EmptyGrid);
    }
    let lines: Vec<&str> = text.split('\n').map(str::trim).collect();
    let cols = lines[0].chars().count();
    let shape = Shape::new(&[extent(lines.len(), 0)?, extent(cols, 1)?])?;

    let mut builder = MazeBuilder::from_walls(shape, vec![false; lines.len() * cols])?;
    let mut start: Option<Position> = None;
    let mut end: Option<Position> = None;

    for (row, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != cols {
            return Err(ParseError::MalformedGrid {
                row,
                expected: cols,
                found,
            });
        }
        for (col, ch) in line.chars().enumerate() {
            // Both indices fit: the shape accepted them as extents.
            let pos: Position = smallvec![row as i32, col as i32];
            match CellKind::from_symbol(ch) {
                CellKind::Wall => builder.set_wall(&pos, true)?,
                CellKind::Start => {
                    if let Some(first) = start.take() {
                        return Err(ParseError::DuplicateStart { first, second: pos });
                    }
                    start = Some(pos);
                }
                CellKind::End => {
                    if let Some(first) = end.take() {
                        return Err(ParseError::DuplicateEnd { first, second: pos });
                    }
                    end = Some(pos);
                }
                CellKind::Space => {}
            }
        }
    }

    builder.set_start(start).set_end(end);
    Ok(builder.build()?)
}

fn extent(len: usize, axis: usize) -> Result<u32, ShapeError> {
    u32::try_from(len).map_err(|_| ShapeError::ExtentTooLarge {
        axis,
        value: u32::MAX,
        max: Shape::MAX_EXTENT,
    })
}

impl Maze {
    /// Encode a 2-D maze: `w`, `A`, `x` or `.` per cell, rows joined by
    /// `\n`, no trailing newline.
    ///
    /// Returns `Err(MazeError::NotTwoDimensional)` for any other rank.
    pub fn to_text_2d(&self) -> Result<String, MazeError> {
        let &[rows, cols] = self.shape().dims() else {
            return Err(MazeError::NotTwoDimensional { ndim: self.ndim() });
        };
        let mut out = String::with_capacity(rows as usize * (cols as usize + 1));
        for row in 0..rows as i32 {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..cols as i32 {
                out.push(self.classify(&[row, col]).symbol());
            }
        }
        Ok(out)
    }
}

impl FromStr for Maze {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_2d(s)
    }
}

impl fmt::Display for Maze {
    /// The text form for 2-D mazes; a one-line summary otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_text_2d() {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(
                f,
                "Maze({}, {} walls, start={:?}, end={:?})",
                self.shape(),
                self.wall_count(),
                self.start().map(|p| p.as_slice()),
                self.end().map(|p| p.as_slice()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// (maze, text) pairs that must agree in both directions.
    fn pairs() -> Vec<(Maze, &'static str)> {
        let shape_2x3 = Shape::new(&[2, 3]).unwrap();
        let shape_3x2 = Shape::new(&[3, 2]).unwrap();
        vec![
            (
                Maze::new(
                    shape_2x3,
                    vec![false, true, false, true, false, false],
                    Some(smallvec![0, 2]),
                    None,
                )
                .unwrap(),
                ".wA\nw..",
            ),
            (
                Maze::new(
                    shape_3x2.clone(),
                    vec![false, true, true, false, false, true],
                    Some(smallvec![1, 1]),
                    Some(smallvec![2, 0]),
                )
                .unwrap(),
                ".w\nwA\nxw",
            ),
            (
                Maze::new(
                    shape_3x2,
                    vec![false, true, true, false, false, true],
                    None,
                    Some(smallvec![2, 0]),
                )
                .unwrap(),
                ".w\nw.\nxw",
            ),
        ]
    }

    // ── Serialization ───────────────────────────────────────────

    #[test]
    fn serialize_known_pairs() {
        for (maze, text) in pairs() {
            assert_eq!(maze.to_text_2d().unwrap(), text);
            assert_eq!(maze.to_string(), text);
        }
    }

    #[test]
    fn serialize_rejects_3d() {
        let maze = Maze::new(Shape::new(&[2, 2, 2]).unwrap(), vec![true; 8], None, None).unwrap();
        assert_eq!(
            maze.to_text_2d(),
            Err(MazeError::NotTwoDimensional { ndim: 3 })
        );
        assert!(maze.to_string().starts_with("Maze(2x2x2, 8 walls"));
    }

    // ── Parsing ─────────────────────────────────────────────────

    #[test]
    fn parse_known_pairs() {
        for (maze, text) in pairs() {
            assert_eq!(parse_2d(text).unwrap(), maze);
        }
    }

    #[test]
    fn parse_via_from_str() {
        let maze: Maze = "A.\n.x".parse().unwrap();
        assert_eq!(maze.start().unwrap().as_slice(), &[0, 0]);
        assert_eq!(maze.end().unwrap().as_slice(), &[1, 1]);
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let maze = parse_2d("\n  A.w  \r\n  w.x\n\n").unwrap();
        assert_eq!(maze.to_text_2d().unwrap(), "A.w\nw.x");
    }

    #[test]
    fn parse_unknown_chars_are_space() {
        let maze = parse_2d("#?w").unwrap();
        assert_eq!(maze.to_text_2d().unwrap(), "..w");
    }

    #[test]
    fn parse_empty_grid() {
        assert_eq!(parse_2d(""), Err(ParseError::EmptyGrid));
        assert_eq!(parse_2d(" \n \n"), Err(ParseError::EmptyGrid));
    }

    #[test]
    fn parse_ragged_rows() {
        assert_eq!(
            parse_2d("A..\nw.\nx.."),
            Err(ParseError::MalformedGrid {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn parse_counts_characters_not_bytes() {
        let maze = parse_2d("é.\n.é").unwrap();
        assert_eq!(maze.shape().dims(), &[2, 2]);
    }

    #[test]
    fn parse_duplicate_start() {
        assert_eq!(
            parse_2d("A.A"),
            Err(ParseError::DuplicateStart {
                first: smallvec![0, 0],
                second: smallvec![0, 2],
            })
        );
    }

    #[test]
    fn parse_duplicate_end() {
        assert!(matches!(
            parse_2d("x.\n.x"),
            Err(ParseError::DuplicateEnd { .. })
        ));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn round_trip_any_2d_maze(
            rows in 1u32..8,
            cols in 1u32..8,
            bits in proptest::collection::vec(any::<bool>(), 64),
            start_seed in any::<usize>(),
            end_seed in any::<usize>(),
        ) {
            let shape = Shape::new(&[rows, cols]).unwrap();
            let n = shape.cell_count();
            let mut walls = bits[..n].to_vec();
            let start = shape.position(start_seed % n).unwrap();
            let end = shape.position(end_seed % n).unwrap();
            walls[start_seed % n] = false;
            walls[end_seed % n] = false;
            let end = if end == start { None } else { Some(end) };
            let maze = Maze::new(shape, walls, Some(start), end).unwrap();

            let text = maze.to_text_2d().unwrap();
            prop_assert_eq!(parse_2d(&text).unwrap(), maze);
        }
    }
}
