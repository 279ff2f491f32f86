//! Lattice topology for mazenv.
//!
//! A [`Shape`] fixes the extent of every axis of an N-dimensional
//! rectangular lattice. The functions in [`lattice`] enumerate its cells and
//! the axis-aligned neighbours of a cell; both orders are part of the public
//! contract:
//!
//! - [`positions`]: row-major, first axis slowest-varying.
//! - [`neighbours`]: `(axis0-, axis0+, axis1-, axis1+, ...)`.
//!
//! [`Move`] maps external action indices onto that neighbour order.
//!
//! # Examples
//!
//! ```
//! use mazenv_space::{neighbours, positions, Shape};
//!
//! let shape = Shape::new(&[2, 3]).unwrap();
//! let all: Vec<Vec<i32>> = positions(&shape).map(|p| p.to_vec()).collect();
//! assert_eq!(all[0], vec![0, 0]);
//! assert_eq!(all[1], vec![0, 1]);
//! assert_eq!(all.len(), 6);
//!
//! let n: Vec<Vec<i32>> = neighbours(&[1, 1]).map(|p| p.to_vec()).collect();
//! assert_eq!(n, vec![vec![0, 1], vec![2, 1], vec![1, 0], vec![1, 2]]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod lattice;
pub mod moves;
pub mod shape;

#[cfg(test)]
pub(crate) mod compliance;

pub use lattice::{neighbours, positions, shape_contains, Neighbours, Positions};
pub use moves::Move;
pub use shape::Shape;
