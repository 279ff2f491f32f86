use mazenv_space::{neighbours, positions, shape_contains, Move, Shape};

#[test]
fn action_indices_cover_every_in_bounds_neighbour() {
    let shape = Shape::new(&[3, 4, 2]).unwrap();
    for pos in positions(&shape) {
        let in_bounds: Vec<_> = neighbours(&pos)
            .filter(|nb| shape_contains(&shape, nb).unwrap())
            .collect();
        let reachable: Vec<_> = (1..Move::action_count(shape.ndim()))
            .map(|i| Move::from_index(shape.ndim(), i).unwrap().apply(&pos))
            .filter(|nb| shape_contains(&shape, nb).unwrap())
            .collect();
        assert_eq!(in_bounds, reachable, "at {pos:?}");
    }
}

#[test]
fn interior_cell_has_all_neighbours_in_bounds() {
    let shape = Shape::new(&[3, 3, 3]).unwrap();
    let count = neighbours(&[1, 1, 1])
        .filter(|nb| shape_contains(&shape, nb).unwrap())
        .count();
    assert_eq!(count, 6);
}

#[test]
fn corner_cell_loses_low_side_neighbours() {
    let shape = Shape::new(&[3, 3]).unwrap();
    let kept: Vec<Vec<i32>> = neighbours(&[0, 0])
        .filter(|nb| shape_contains(&shape, nb).unwrap())
        .map(|nb| nb.to_vec())
        .collect();
    assert_eq!(kept, vec![vec![1, 0], vec![0, 1]]);
}
