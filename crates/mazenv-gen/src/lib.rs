//! Randomized maze generation for mazenv.
//!
//! [`prim`] carves a spanning tree over an all-wall lattice with a
//! randomized Prim's algorithm generalized to N dimensions, then places the
//! end marker on a random carved cell. Every open cell of the result is
//! reachable from the start, so generated mazes are always solvable.
//!
//! Randomness is always supplied by the caller. [`PrimGenerator`] bundles a
//! seeded [`ChaCha8Rng`](rand_chacha::ChaCha8Rng) so runs are reproducible.
//!
//! # Examples
//!
//! ```
//! use mazenv_gen::{MazeGenerator, PrimGenerator};
//! use mazenv_space::Shape;
//!
//! let shape = Shape::new(&[10, 10]).unwrap();
//! let mut generator = PrimGenerator::builder().seed(7).build();
//! let maze = generator.generate(&shape).unwrap();
//! assert!(maze.solve().unwrap().is_some());
//!
//! let again = PrimGenerator::from_seed(7).generate(&shape).unwrap();
//! assert_eq!(maze, again);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod prim;

pub use config::GeneratorConfig;
pub use error::GenerateError;
pub use prim::{prim, MazeGenerator, PrimGenerator, PrimGeneratorBuilder};
