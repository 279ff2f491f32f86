//! Breadth-first shortest paths.

use crate::error::SolveError;
use crate::maze::Maze;
use mazenv_core::{is_unit_step, Position};
use std::collections::VecDeque;

impl Maze {
    /// Shortest path from the start cell to the end cell, both inclusive.
    ///
    /// Neighbours are expanded in lattice neighbour order and the search
    /// stops the first time the end cell is discovered, so among equally
    /// short paths the first-discovered one is returned.
    ///
    /// Returns `Ok(None)` if the end cell is unset or unreachable.
    ///
    /// # Errors
    ///
    /// [`SolveError::NoStart`] if the maze has no start cell.
    pub fn solve(&self) -> Result<Option<Vec<Position>>, SolveError> {
        let start = self.start().ok_or(SolveError::NoStart)?;
        let Some(end) = self.end() else {
            return Ok(None);
        };
        let shape = self.shape();
        // Markers are validated in-bounds at construction.
        let (Some(start_rank), Some(end_rank)) = (shape.rank(start), shape.rank(end)) else {
            return Ok(None);
        };

        let mut parent: Vec<Option<usize>> = vec![None; shape.cell_count()];
        let mut visited = vec![false; shape.cell_count()];
        let mut frontier: VecDeque<Position> = VecDeque::new();
        visited[start_rank] = true;
        frontier.push_back(start.clone());
        let mut expanded = 0usize;

        while let Some(pos) = frontier.pop_front() {
            expanded += 1;
            let Some(rank) = shape.rank(&pos) else {
                continue;
            };
            for nb in self.neighbouring_non_walls(&pos) {
                let Some(nb_rank) = shape.rank(&nb) else {
                    continue;
                };
                if visited[nb_rank] {
                    continue;
                }
                visited[nb_rank] = true;
                parent[nb_rank] = Some(rank);
                if nb_rank == end_rank {
                    let path = trace_back(self, &parent, end_rank);
                    tracing::debug!(
                        shape = %shape,
                        expanded,
                        length = path.len(),
                        "maze solved"
                    );
                    return Ok(Some(path));
                }
                frontier.push_back(nb);
            }
        }

        tracing::debug!(shape = %shape, expanded, "no path to end");
        Ok(None)
    }

    /// `true` if `path` runs from the start cell to the end cell through
    /// open cells, one unit step at a time, without revisiting a cell.
    ///
    /// Always `false` when either marker is unset.
    pub fn is_valid_path(&self, path: &[Position]) -> bool {
        let (Some(start), Some(end)) = (self.start(), self.end()) else {
            return false;
        };
        if path.first() != Some(start) || path.last() != Some(end) {
            return false;
        }
        let mut seen = vec![false; self.shape().cell_count()];
        for pos in path {
            match self.shape().rank(pos) {
                Some(rank) if !self.walls()[rank] && !seen[rank] => seen[rank] = true,
                _ => return false,
            }
        }
        path.windows(2).all(|w| is_unit_step(&w[0], &w[1]))
    }
}

/// Follow predecessor links from `end_rank` back to the root.
fn trace_back(maze: &Maze, parent: &[Option<usize>], end_rank: usize) -> Vec<Position> {
    let mut ranks = vec![end_rank];
    let mut cursor = end_rank;
    while let Some(prev) = parent[cursor] {
        ranks.push(prev);
        cursor = prev;
    }
    ranks
        .into_iter()
        .rev()
        .filter_map(|rank| maze.shape().position(rank))
        .collect()
}
