//! Core types for mazenv.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`Position`] type every other crate indexes lattices with, and the
//! [`ShapeError`] raised by shape construction and bounds checks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pos;

pub use error::ShapeError;
pub use pos::{is_unit_step, Position};
