//! Randomized depth-first maze carving.
//!
//! The carve keeps an explicit backtracking stack, so call depth stays flat
//! no matter how large the maze is.
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::grid::Grid;
use crate::core::map::RenderedMap;
use crate::error::MazeError;

/// Builds a perfect maze: every cell reachable, exactly one path between any
/// two cells, and one randomly chosen target cell.
pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(width, height)?;
    let total = grid.len();

    let mut stack: Vec<usize> = Vec::with_capacity(total);
    let mut current = rng.gen_range(0..total);
    let mut visited = 1;
    let mut candidates: Vec<usize> = Vec::with_capacity(4);

    while visited < total {
        candidates.clear();
        candidates.extend(grid.neighbors(current).filter(|&n| grid.is_full(n)));

        if let Some(&next) = candidates.choose(rng) {
            grid.connect(current, next);
            stack.push(current);
            current = next;
            visited += 1;
        } else {
            // Dead end: every unvisited cell hangs off something on the stack.
            current = stack
                .pop()
                .expect("backtrack stack emptied before every cell was visited");
        }
    }

    let target = rng.gen_range(0..total);
    grid.set_target(target);

    let t = grid.cell_at(target);
    debug!("carved {}x{} maze, target at ({}, {})", width, height, t.x, t.y);
    Ok(grid)
}

/// Generates a maze and flattens it straight to its rendered map.
pub fn generate_map<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<RenderedMap, MazeError> {
    let grid = generate(width, height, rng)?;
    Ok(RenderedMap::from_grid(&grid))
}
