//! Benchmark profiles for mazenv.
//!
//! - [`reference_maze`]: 100x100 generated maze (10K cells).
//! - [`stress_maze`]: 24x24x24 generated maze (~14K cells) in 3-D.
//! - [`open_cells_sample`]: deterministic sample of open cells to use as
//!   focal positions.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use mazenv_core::Position;
use mazenv_gen::{GenerateError, MazeGenerator, PrimGenerator};
use mazenv_maze::Maze;
use mazenv_space::Shape;

/// Dimensions of the reference profile.
pub const REFERENCE_DIMS: [u32; 2] = [100, 100];

/// Dimensions of the stress profile.
pub const STRESS_DIMS: [u32; 3] = [24, 24, 24];

fn generate(dims: &[u32], seed: u64) -> Result<Maze, GenerateError> {
    let shape = Shape::new(dims).map_err(mazenv_maze::MazeError::from)?;
    PrimGenerator::from_seed(seed).generate(&shape)
}

/// Build the reference benchmark maze.
pub fn reference_maze(seed: u64) -> Result<Maze, GenerateError> {
    generate(&REFERENCE_DIMS, seed)
}

/// Build the 3-D stress benchmark maze.
pub fn stress_maze(seed: u64) -> Result<Maze, GenerateError> {
    generate(&STRESS_DIMS, seed)
}

/// Pick up to `n` distinct open cells of `maze`, spread by a simple hash of
/// `seed`. Returns fewer when the maze has fewer open cells.
pub fn open_cells_sample(maze: &Maze, n: usize, seed: u64) -> Vec<Position> {
    let open: Vec<Position> = maze
        .positions()
        .filter(|pos| !maze.is_wall(pos))
        .collect();
    if open.is_empty() {
        return Vec::new();
    }
    let mut taken = vec![false; open.len()];
    let mut out = Vec::with_capacity(n.min(open.len()));
    for i in 0..n.min(open.len()) {
        let mut idx = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i as u64 * 1442695040888963407)
            % open.len() as u64) as usize;
        // Linear probe to avoid repeats
        while taken[idx] {
            idx = (idx + 1) % open.len();
        }
        taken[idx] = true;
        out.push(open[idx].clone());
    }
    out
}
