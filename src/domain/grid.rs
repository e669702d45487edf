use rand::Rng;

use super::{Board, Cell};
use crate::error::AutomatonError;

/// The generation buffers of a session.
///
/// Three snapshots coexist: `current` (displayed and evolving), `next`
/// (scratch written during a step, then committed), and `last_committed`
/// (copy of `current` taken at the start of an edit gesture, used to
/// detect cells already toggled during that gesture). All three are
/// allocated once at `width * height` and never resized.
pub struct GridState {
    board: Board,
    current: Vec<Cell>,
    next: Vec<Cell>,
    last_committed: Vec<Cell>,
}

impl GridState {
    pub fn new(board: Board) -> Self {
        let cells = board.num_cells();
        Self {
            board,
            current: vec![Cell::Dead; cells],
            next: vec![Cell::Dead; cells],
            last_committed: vec![Cell::Dead; cells],
        }
    }

    pub const fn board(&self) -> Board {
        self.board
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        self.board.dimensions()
    }

    /// Cell of `current` at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, AutomatonError> {
        Ok(self.current[self.board.checked_index(x, y)?])
    }

    /// Overwrite exactly one cell of `current`.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), AutomatonError> {
        let idx = self.board.checked_index(x, y)?;
        self.current[idx] = cell;
        Ok(())
    }

    /// Flip one cell of `current`, returning its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<Cell, AutomatonError> {
        let idx = self.board.checked_index(x, y)?;
        self.current[idx] = self.current[idx].toggle();
        Ok(self.current[idx])
    }

    /// Read of `current` that trusts the caller's bounds. Only the
    /// evolution sweep uses this; it iterates board coordinates.
    pub(crate) fn current_unchecked(&self, x: usize, y: usize) -> Cell {
        self.current[self.board.index(x, y)]
    }

    pub(crate) fn write_next(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.board.index(x, y);
        self.next[idx] = cell;
    }

    /// A generation identical to its predecessor is a fixed point.
    pub fn next_matches_current(&self) -> bool {
        self.next == self.current
    }

    /// Promote the scratch generation to `current`.
    pub fn commit_next(&mut self) {
        self.current.copy_from_slice(&self.next);
    }

    /// Record `current` as the pre-gesture snapshot.
    pub fn snapshot_committed(&mut self) {
        self.last_committed.copy_from_slice(&self.current);
    }

    /// True when this cell already changed since the last snapshot.
    pub fn changed_since_snapshot(&self, x: usize, y: usize) -> Result<bool, AutomatonError> {
        let idx = self.board.checked_index(x, y)?;
        Ok(self.last_committed[idx] != self.current[idx])
    }

    /// Set every cell of `current` to dead.
    pub fn clear_current(&mut self) {
        self.current.fill(Cell::Dead);
    }

    /// Full linear scan of `current`.
    pub fn recount_population(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Seed `current` with ~30% live cells.
    pub fn randomize(&mut self) {
        let mut rng = rand::rng();
        for cell in &mut self.current {
            *cell = if rng.random_bool(0.3) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        }
    }

    /// Iterate over all cells of `current` with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let (width, height) = self.dimensions();
        (0..height)
            .flat_map(move |y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.current[self.board.index(x, y)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: usize, height: usize) -> GridState {
        GridState::new(Board::new(width, height))
    }

    #[test]
    fn test_new_grid_all_dead() {
        let grid = grid(10, 10);
        assert_eq!(grid.recount_population(), 0);
        assert!(grid.iter_cells().all(|(_, _, cell)| !cell.is_alive()));
    }

    #[test]
    fn test_get_set() {
        let mut grid = grid(10, 10);
        grid.set(3, 4, Cell::Alive).unwrap();
        assert_eq!(grid.get(3, 4), Ok(Cell::Alive));
        assert_eq!(grid.get(4, 3), Ok(Cell::Dead));
        assert_eq!(grid.recount_population(), 1);
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let mut grid = grid(10, 5);
        assert!(matches!(
            grid.get(10, 0),
            Err(AutomatonError::OutOfBounds { x: 10, y: 0, .. })
        ));
        assert!(grid.get(0, 5).is_err());
        assert!(grid.set(10, 5, Cell::Alive).is_err());
        assert!(grid.toggle(99, 99).is_err());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut grid = grid(4, 4);
        assert_eq!(grid.toggle(1, 1), Ok(Cell::Alive));
        assert_eq!(grid.toggle(1, 1), Ok(Cell::Dead));
        assert_eq!(grid.recount_population(), 0);
    }

    #[test]
    fn test_snapshot_tracks_changes() {
        let mut grid = grid(4, 4);
        grid.snapshot_committed();
        assert_eq!(grid.changed_since_snapshot(2, 2), Ok(false));

        grid.toggle(2, 2).unwrap();
        assert_eq!(grid.changed_since_snapshot(2, 2), Ok(true));
        assert_eq!(grid.changed_since_snapshot(1, 2), Ok(false));

        // A fresh snapshot clears the record.
        grid.snapshot_committed();
        assert_eq!(grid.changed_since_snapshot(2, 2), Ok(false));
    }

    #[test]
    fn test_commit_next_overwrites_current() {
        let mut grid = grid(3, 3);
        grid.write_next(0, 0, Cell::Alive);
        grid.write_next(2, 2, Cell::Alive);
        assert!(!grid.next_matches_current());

        grid.commit_next();
        assert_eq!(grid.get(0, 0), Ok(Cell::Alive));
        assert_eq!(grid.get(2, 2), Ok(Cell::Alive));
        assert!(grid.next_matches_current());
    }

    #[test]
    fn test_clear_current() {
        let mut grid = grid(5, 5);
        grid.set(1, 1, Cell::Alive).unwrap();
        grid.set(4, 4, Cell::Alive).unwrap();
        grid.clear_current();
        assert_eq!(grid.recount_population(), 0);
    }
}
