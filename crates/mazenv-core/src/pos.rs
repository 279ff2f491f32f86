//! The [`Position`] type alias and lattice adjacency helpers.

use smallvec::SmallVec;

/// Coordinate of a cell on an N-dimensional lattice.
///
/// One signed component per axis, so neighbours that fall off the low edge
/// (`-1`) are representable and can be rejected by a bounds check.
/// Up to four axes are stored inline without heap allocation.
pub type Position = SmallVec<[i32; 4]>;

/// Returns `true` if `a` and `b` are joined by a lattice edge: same rank,
/// and they differ by exactly one on exactly one axis.
pub fn is_unit_step(a: &[i32], b: &[i32]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut moved = 0usize;
    for (&x, &y) in a.iter().zip(b) {
        match (i64::from(x) - i64::from(y)).abs() {
            0 => {}
            1 => moved += 1,
            _ => return false,
        }
    }
    moved == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unit_step_single_axis() {
        assert!(is_unit_step(&[2, 3], &[1, 3]));
        assert!(is_unit_step(&[2, 3], &[2, 4]));
        assert!(is_unit_step(&[0], &[-1]));
    }

    #[test]
    fn unit_step_rejects_diagonal_and_jumps() {
        assert!(!is_unit_step(&[2, 3], &[3, 4]));
        assert!(!is_unit_step(&[2, 3], &[4, 3]));
        assert!(!is_unit_step(&[2, 3], &[2, 3]));
    }

    #[test]
    fn unit_step_rejects_rank_mismatch() {
        assert!(!is_unit_step(&[1, 1], &[1, 1, 0]));
    }

    #[test]
    fn unit_step_survives_extreme_components() {
        assert!(!is_unit_step(&[i32::MIN], &[i32::MAX]));
        assert!(is_unit_step(&[i32::MAX - 1], &[i32::MAX]));
    }

    proptest! {
        #[test]
        fn unit_step_symmetric(
            a in proptest::collection::vec(-5i32..5, 1..4),
            axis in 0usize..4,
            delta in prop_oneof![Just(-1i32), Just(1i32)],
        ) {
            let axis = axis % a.len();
            let mut b = a.clone();
            b[axis] += delta;
            prop_assert!(is_unit_step(&a, &b));
            prop_assert!(is_unit_step(&b, &a));
        }
    }
}
