//! Agent-centred views of a maze for mazenv.
//!
//! A [`WindowPlan`] is compiled once for a rank and horizon `h` and then
//! applied to any maze of that rank. Each extraction yields a [`Window`]:
//! the `(2h+1)^D` cells around a focal position in row-major order, with
//! everything outside the maze reported as a wall. Windows near the middle
//! of the maze take a stride-arithmetic fast path; windows that overhang an
//! edge are bounds-checked cell by cell. Both paths agree exactly.
//!
//! [`encode_one_hot`] flattens a run of cells into the five-channel
//! layout external learners consume.
//!
//! # Examples
//!
//! ```
//! use mazenv_maze::{parse_2d, CellKind};
//! use mazenv_obs::extract_window;
//!
//! let maze = parse_2d("A.w\n..x").unwrap();
//! let window = extract_window(&maze, &[0, 0], 1).unwrap();
//! assert_eq!(window.shape().as_slice(), &[3, 3]);
//! assert_eq!(window.get(&[0, 0]), Some(CellKind::Start));
//! assert_eq!(window.get(&[-1, 0]), Some(CellKind::Wall));
//! assert_eq!(window.get(&[1, 1]), Some(CellKind::Space));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod encode;
pub mod error;
pub mod spec;
pub mod window;

pub use encode::{encode_maze, encode_one_hot, AGENT_CHANNEL, NUM_CELL_FIELDS};
pub use error::WindowError;
pub use spec::WindowSpec;
pub use window::{extract_window, Window, WindowPlan};
