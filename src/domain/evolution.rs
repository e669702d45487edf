//! Generation advancement for the classic B3/S23 rule.
//!
//! The board edge clamps: cells outside it contribute nothing to a
//! neighbor count. No wraparound.

use super::GridState;

/// Result of one attempted generation advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The scratch generation differed from `current` and was committed.
    Advanced,
    /// The board reached a fixed point; nothing was committed.
    Stalled,
}

/// Count live cells in the Moore neighborhood of (x, y).
pub fn count_live_neighbors(grid: &GridState, x: usize, y: usize) -> u8 {
    let (width, height) = grid.dimensions();
    let mut count = 0u8;

    for dy in -1i32..=1 {
        for dx in -1i32..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx < 0 || ny < 0 || nx >= width as i32 || ny >= height as i32 {
                continue;
            }
            if grid.current_unchecked(nx as usize, ny as usize).is_alive() {
                count += 1;
            }
        }
    }

    count
}

/// Write the next generation of every cell into the scratch buffer.
/// The rule is total: each cell gets an explicit value every step, so
/// the scratch buffer never carries stale cells between steps.
pub fn step(grid: &mut GridState) {
    let (width, height) = grid.dimensions();
    for y in 0..height {
        for x in 0..width {
            let neighbors = count_live_neighbors(grid, x, y);
            let cell = grid.current_unchecked(x, y);
            grid.write_next(x, y, cell.next_state(neighbors));
        }
    }
}

/// Compute one generation and commit it, unless the board has stalled.
/// The caller owns the counters: bump `evolutions` and recount the
/// population only on [`StepOutcome::Advanced`].
pub fn advance_generation(grid: &mut GridState) -> StepOutcome {
    step(grid);
    if grid.next_matches_current() {
        StepOutcome::Stalled
    } else {
        grid.commit_next();
        StepOutcome::Advanced
    }
}
