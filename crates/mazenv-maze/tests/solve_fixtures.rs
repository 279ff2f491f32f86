//! Solver and codec behaviour on the shared fixture mazes.

use mazenv_maze::{parse_2d, Maze, SolveError};
use mazenv_test_utils::fixtures;

#[test]
fn corridor_solution_matches_fixture() {
    let maze = fixtures::corridor_maze();
    let path = maze.solve().unwrap().unwrap();
    assert_eq!(path, fixtures::corridor_solution());
}

#[test]
fn unsolvable_fixture_has_no_path() {
    assert_eq!(fixtures::unsolvable_maze().solve(), Ok(None));
}

#[test]
fn open_grids_solve_at_manhattan_distance() {
    for dims in [&[2u32, 2][..], &[5, 1], &[3, 4, 2], &[2, 2, 2, 2]] {
        let maze = fixtures::open_grid(dims);
        let path = maze.solve().unwrap().unwrap();
        let expected: u32 = dims.iter().map(|d| d - 1).sum::<u32>() + 1;
        assert_eq!(path.len(), expected as usize, "{dims:?}");
        assert!(maze.is_valid_path(&path));
    }
}

#[test]
fn fixture_texts_round_trip() {
    for text in fixtures::round_trip_texts() {
        let maze: Maze = text.parse().unwrap();
        assert_eq!(maze.to_text_2d().unwrap(), text);
        assert_eq!(parse_2d(&maze.to_string()).unwrap(), maze);
    }
}

#[test]
fn clearing_start_makes_solve_fail() {
    let mut b = fixtures::corridor_maze().to_builder();
    b.set_start(None);
    assert_eq!(b.build().unwrap().solve(), Err(SolveError::NoStart));
}

#[test]
fn walling_the_corridor_blocks_the_path() {
    let mut b = fixtures::corridor_maze().to_builder();
    b.set_wall(&[0, 1], true).unwrap();
    assert_eq!(b.build().unwrap().solve(), Ok(None));
}
