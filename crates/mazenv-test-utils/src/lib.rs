//! Shared fixtures and assertions for mazenv development.
//!
//! Hand-built mazes with known solutions live in [`fixtures`]; the
//! reachability check every generator test leans on is
//! [`assert_all_reachable`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use mazenv_core::Position;
use mazenv_maze::Maze;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Shapes the generator is exercised on, from a plain 2-D board up to 4-D.
pub const GENERATION_SHAPES: &[&[u32]] = &[&[10, 10], &[8, 8, 8], &[3, 5, 8, 15]];

/// Deterministic RNG for reproducible tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Open cells reachable from `from` through open cells, `from` included.
pub fn reachable_from(maze: &Maze, from: &[i32]) -> usize {
    let shape = maze.shape();
    let Some(root) = shape.rank(from) else {
        return 0;
    };
    if maze.walls()[root] {
        return 0;
    }
    let mut seen = vec![false; shape.cell_count()];
    let mut queue: VecDeque<Position> = VecDeque::new();
    seen[root] = true;
    queue.push_back(Position::from_slice(from));
    let mut count = 0;
    while let Some(pos) = queue.pop_front() {
        count += 1;
        for nb in maze.neighbouring_non_walls(&pos) {
            if let Some(rank) = shape.rank(&nb) {
                if !seen[rank] {
                    seen[rank] = true;
                    queue.push_back(nb);
                }
            }
        }
    }
    count
}

/// Panics unless the maze has a start, an end, and every open cell is
/// connected to the start.
pub fn assert_all_reachable(maze: &Maze) {
    let start = maze.start().expect("maze has no start");
    assert!(maze.end().is_some(), "maze has no end");
    assert_eq!(
        reachable_from(maze, start),
        maze.open_count(),
        "not every open cell is reachable from the start in\n{maze}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_counts_component() {
        let maze = fixtures::unsolvable_maze();
        assert_eq!(reachable_from(&maze, &[0, 0]), 1);
        assert_eq!(reachable_from(&maze, &[1, 1]), 1);
        assert_eq!(reachable_from(&maze, &[0, 1]), 0);
    }

    #[test]
    fn corridor_is_fully_reachable() {
        assert_all_reachable(&fixtures::corridor_maze());
    }

    #[test]
    #[should_panic(expected = "not every open cell")]
    fn disconnected_maze_fails_assertion() {
        assert_all_reachable(&fixtures::unsolvable_maze());
    }
}
