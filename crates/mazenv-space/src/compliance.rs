//! Lattice compliance test helpers.
//!
//! These functions verify that enumeration over a [`Shape`] satisfies the
//! ordering and adjacency contract. Reused across the module test suites.

use crate::lattice::{neighbours, positions};
use crate::shape::Shape;
use indexmap::IndexSet;
use mazenv_core::is_unit_step;

/// Assert that `positions` yields exactly `cell_count` unique coords.
pub fn assert_positions_complete(shape: &Shape) {
    let all: Vec<_> = positions(shape).collect();
    assert_eq!(
        all.len(),
        shape.cell_count(),
        "positions length ({}) != cell_count ({})",
        all.len(),
        shape.cell_count()
    );
    let unique: IndexSet<_> = all.iter().collect();
    assert_eq!(unique.len(), shape.cell_count(), "positions has duplicates");
}

/// Assert that the n-th position has rank n.
pub fn assert_positions_in_rank_order(shape: &Shape) {
    for (i, pos) in positions(shape).enumerate() {
        assert_eq!(shape.rank(&pos), Some(i), "position {pos:?} out of order");
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(shape: &Shape) {
    for pos in positions(shape) {
        for nb in neighbours(&pos) {
            assert!(
                neighbours(&nb).any(|back| back == pos),
                "neighbour symmetry violated: {nb:?} in N({pos:?}) but {pos:?} not in N({nb:?})"
            );
        }
    }
}

/// Assert that every neighbour is one unit step away and that they come
/// in (axis-, axis+) pairs with increasing axis.
pub fn assert_neighbour_order(shape: &Shape) {
    for pos in positions(shape) {
        let nbs: Vec<_> = neighbours(&pos).collect();
        assert_eq!(nbs.len(), 2 * shape.ndim());
        for (i, nb) in nbs.iter().enumerate() {
            assert!(is_unit_step(&pos, nb), "{nb:?} not adjacent to {pos:?}");
            let axis = i / 2;
            let delta = if i % 2 == 0 { -1 } else { 1 };
            assert_eq!(nb[axis], pos[axis] + delta, "neighbour {i} of {pos:?}");
        }
    }
}

/// Run all compliance checks on a shape.
pub fn run_full_compliance(shape: &Shape) {
    assert_positions_complete(shape);
    assert_positions_in_rank_order(shape);
    assert_neighbours_symmetric(shape);
    assert_neighbour_order(shape);
}
