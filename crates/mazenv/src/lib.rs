//! mazenv: N-dimensional mazes for reinforcement learning environments.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all mazenv sub-crates. The step/reset/reward loop lives with the caller;
//! mazenv supplies the world it runs on.
//!
//! # Quick start
//!
//! ```rust
//! use mazenv::prelude::*;
//!
//! // Generate a reproducible 3-D maze.
//! let shape = Shape::new(&[6, 6, 6]).unwrap();
//! let mut generator = PrimGenerator::builder().seed(42).build();
//! let maze = generator.generate(&shape).unwrap();
//!
//! // Walk the shortest path, observing a horizon-1 window at every step.
//! let path = maze.solve().unwrap().expect("generated mazes are solvable");
//! let plan = WindowSpec::default().compile(maze.ndim()).unwrap();
//! for pos in &path {
//!     let window = plan.extract(&maze, pos).unwrap();
//!     assert_eq!(window.cells().len(), 27);
//!     assert!(!window.cells()[window.center_index()].is_wall());
//! }
//!
//! // Map an action index onto the neighbour order.
//! assert_eq!(Move::action_count(3), 7);
//! let next = Move::from_index(3, 2).unwrap().apply(&[1, 1, 1]);
//! assert_eq!(next.as_slice(), &[2, 1, 1]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `mazenv-core` | `Position`, `ShapeError` |
//! | [`space`] | `mazenv-space` | `Shape`, lattice iteration, `Move` |
//! | [`maze`] | `mazenv-maze` | `Maze`, `MazeBuilder`, text codec, solver |
//! | [`generator`] | `mazenv-gen` | Randomized Prim generator |
//! | [`obs`] | `mazenv-obs` | Window extraction and one-hot encoding |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Positions and shared errors (`mazenv-core`).
pub use mazenv_core as types;

/// Lattice shapes, cell and neighbour iteration, action mapping
/// (`mazenv-space`).
///
/// The neighbour order of [`space::neighbours`] is what
/// [`space::Move::from_index`] maps action indices onto.
pub use mazenv_space as space;

/// The maze model (`mazenv-maze`).
///
/// [`maze::Maze`] is immutable; build or edit one through
/// [`maze::MazeBuilder`], or parse the 2-D text form with
/// [`maze::parse_2d`].
pub use mazenv_maze as maze;

/// Maze generation (`mazenv-gen`).
pub use mazenv_gen as generator;

/// Egocentric windows and cell encodings (`mazenv-obs`).
pub use mazenv_obs as obs;

/// Common imports for typical mazenv usage.
///
/// ```rust
/// use mazenv::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use mazenv_core::{Position, ShapeError};

    // Space
    pub use mazenv_space::{neighbours, positions, Move, Shape};

    // Maze
    pub use mazenv_maze::{
        parse_2d, CellKind, Maze, MazeBuilder, MazeError, ParseError, SolveError,
    };

    // Generation
    pub use mazenv_gen::{
        prim, GenerateError, GeneratorConfig, MazeGenerator, PrimGenerator,
    };

    // Observation
    pub use mazenv_obs::{
        encode_maze, encode_one_hot, extract_window, Window, WindowError, WindowPlan,
        WindowSpec, NUM_CELL_FIELDS,
    };
}
