//! Maze data model for mazenv.
//!
//! A [`Maze`] is a dense wall/space grid over a [`Shape`](mazenv_space::Shape)
//! plus optional start and end cells. It is immutable once built; the only
//! mutable phase is [`MazeBuilder`], which generators and the text parser
//! use before calling [`MazeBuilder::build`].
//!
//! - [`Maze::solve`]: breadth-first shortest path from start to end.
//! - [`parse_2d`] / [`Maze::to_text_2d`]: the `w`/`A`/`x`/`.` text format.
//!
//! # Examples
//!
//! ```
//! use mazenv_maze::parse_2d;
//!
//! let maze = parse_2d("A.www\nwxwww").unwrap();
//! let path = maze.solve().unwrap().unwrap();
//! let cells: Vec<Vec<i32>> = path.iter().map(|p| p.to_vec()).collect();
//! assert_eq!(cells, vec![vec![0, 0], vec![0, 1], vec![1, 1]]);
//! assert_eq!(maze.to_text_2d().unwrap(), "A.www\nwxwww");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod cell;
pub mod error;
pub mod maze;
pub mod solve;
pub mod text;

pub use builder::MazeBuilder;
pub use cell::CellKind;
pub use error::{Marker, MazeError, ParseError, SolveError};
pub use maze::Maze;
pub use text::parse_2d;
