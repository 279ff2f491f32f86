//! Randomized Prim's algorithm over an N-dimensional lattice.

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use indexmap::IndexSet;
use mazenv_core::Position;
use mazenv_maze::{Maze, MazeBuilder};
use mazenv_space::{neighbours, Shape};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Carve a random spanning-tree maze over `shape`.
///
/// 1. Every cell starts as a wall. A uniformly random start is carved.
/// 2. The frontier holds the start's in-bounds neighbours; every cell ever
///    pushed is remembered and never pushed again.
/// 3. A uniformly random frontier cell is removed. If more than one of its
///    axis neighbours is already open it is left as a wall; otherwise it is
///    carved and its unseen in-bounds neighbours join the frontier.
/// 4. Once the frontier is empty the end is drawn uniformly from the open
///    cells other than the start.
///
/// # Errors
///
/// [`GenerateError::TooFewCells`] if `shape` has fewer than two cells.
pub fn prim<R: Rng + ?Sized>(shape: &Shape, rng: &mut R) -> Result<Maze, GenerateError> {
    let cells = shape.cell_count();
    if cells < 2 {
        return Err(GenerateError::TooFewCells { cells });
    }

    let start: Position = shape
        .dims()
        .iter()
        .map(|&dim| rng.random_range(0..dim as i32))
        .collect();
    let mut builder = MazeBuilder::new(shape.clone());
    builder.carve(&start)?;

    let mut seen: IndexSet<Position> = IndexSet::new();
    seen.insert(start.clone());
    let mut frontier: Vec<Position> = Vec::new();
    push_unseen(shape, &start, &mut seen, &mut frontier);

    let mut carved = 1usize;
    let mut skipped = 0usize;
    while !frontier.is_empty() {
        let candidate = frontier.swap_remove(rng.random_range(0..frontier.len()));
        if builder.non_wall_neighbour_count(&candidate) > 1 {
            skipped += 1;
            continue;
        }
        builder.carve(&candidate)?;
        carved += 1;
        push_unseen(shape, &candidate, &mut seen, &mut frontier);
    }

    builder.set_start(Some(start));
    let spaces: Vec<Position> = builder.spaces().collect();
    if spaces.is_empty() {
        return Err(GenerateError::TooFewCells { cells });
    }
    let end = spaces[rng.random_range(0..spaces.len())].clone();
    builder.set_end(Some(end));

    tracing::debug!(shape = %shape, carved, skipped, "generated maze");
    Ok(builder.build()?)
}

/// Push the in-bounds neighbours of `pos` not yet in `seen`.
fn push_unseen(
    shape: &Shape,
    pos: &[i32],
    seen: &mut IndexSet<Position>,
    frontier: &mut Vec<Position>,
) {
    for nb in neighbours(pos) {
        if shape.rank(&nb).is_some() && seen.insert(nb.clone()) {
            frontier.push(nb);
        }
    }
}

/// A source of mazes.
pub trait MazeGenerator {
    /// Produce a new maze over `shape`.
    ///
    /// # Errors
    ///
    /// Any [`GenerateError`] the algorithm reports for `shape`.
    fn generate(&mut self, shape: &Shape) -> Result<Maze, GenerateError>;
}

/// [`prim`] bound to an owned RNG.
///
/// Each call to [`generate`](MazeGenerator::generate) continues the same
/// random stream, so successive mazes differ while a fixed seed reproduces
/// the whole sequence.
#[derive(Clone, Debug)]
pub struct PrimGenerator<R = ChaCha8Rng> {
    rng: R,
}

/// Builder for a seeded [`PrimGenerator`].
#[derive(Clone, Debug, Default)]
pub struct PrimGeneratorBuilder {
    config: GeneratorConfig,
}

impl PrimGenerator {
    /// Create a new builder. The default seed is 0.
    pub fn builder() -> PrimGeneratorBuilder {
        PrimGeneratorBuilder::default()
    }

    /// Generator over a ChaCha8 stream seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generator configured by `config`.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::from_seed(config.seed)
    }
}

impl<R: Rng> PrimGenerator<R> {
    /// Generator drawing from a caller-supplied RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Release the RNG, positioned after every draw made so far.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<R: Rng> MazeGenerator for PrimGenerator<R> {
    fn generate(&mut self, shape: &Shape) -> Result<Maze, GenerateError> {
        prim(shape, &mut self.rng)
    }
}

impl PrimGeneratorBuilder {
    /// Set the RNG seed (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Build the generator.
    pub fn build(self) -> PrimGenerator {
        PrimGenerator::from_config(&self.config)
    }
}
