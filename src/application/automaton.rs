use tracing::debug;

use crate::config::AutomatonConfig;
use crate::domain::{Board, Cell, GridState, StepOutcome, evolution};
use crate::error::AutomatonError;

/// Receiver for board mutations, implemented by the presentation layer.
///
/// Single-cell edits report the one cell that changed; whole-board
/// mutations (generation advance, reset, randomize) report once and the
/// presentation re-reads the cells it cares about.
pub trait PresentationSink {
    fn on_cell_changed(&mut self, x: usize, y: usize, cell: Cell);
    fn on_generation_advanced(&mut self);
}

/// No-op sink for headless use.
impl PresentationSink for () {
    fn on_cell_changed(&mut self, _x: usize, _y: usize, _cell: Cell) {}
    fn on_generation_advanced(&mut self) {}
}

/// The simulation engine: generation buffers plus session counters.
///
/// All mutation happens on one logical thread of control, either from a
/// clock tick or from an edit gesture; the lifecycle controller keeps
/// those two mutually exclusive by pausing the clock when a gesture
/// starts.
pub struct Automaton {
    grid: GridState,
    evolutions: u64,
    population: usize,
}

impl Automaton {
    /// Allocate the board described by `config`. Buffers are sized once
    /// and never resized afterwards.
    pub fn new(config: &AutomatonConfig) -> Result<Self, AutomatonError> {
        config.validate()?;
        Ok(Self {
            grid: GridState::new(Board::new(config.width, config.height)),
            evolutions: 0,
            population: 0,
        })
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Generations advanced since the last reset.
    pub fn evolutions(&self) -> u64 {
        self.evolutions
    }

    /// Live cells in the current generation.
    pub fn population(&self) -> usize {
        self.population
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, AutomatonError> {
        self.grid.get(x, y)
    }

    /// Set one cell directly, keeping the population count in step.
    /// Used for seeding patterns; pointer edits go through the
    /// interaction controller instead.
    pub fn set_cell(
        &mut self,
        x: usize,
        y: usize,
        cell: Cell,
        sink: &mut dyn PresentationSink,
    ) -> Result<(), AutomatonError> {
        let before = self.grid.get(x, y)?;
        if before == cell {
            return Ok(());
        }
        self.grid.set(x, y, cell)?;
        if cell.is_alive() {
            self.population += 1;
        } else {
            self.population -= 1;
        }
        sink.on_cell_changed(x, y, cell);
        Ok(())
    }

    /// Advance one generation. On a fixed point nothing changes: no
    /// commit, no counter bump, no notification.
    pub fn advance_generation(&mut self, sink: &mut dyn PresentationSink) -> StepOutcome {
        match evolution::advance_generation(&mut self.grid) {
            StepOutcome::Advanced => {
                self.evolutions += 1;
                self.population = self.grid.recount_population();
                sink.on_generation_advanced();
                StepOutcome::Advanced
            }
            StepOutcome::Stalled => StepOutcome::Stalled,
        }
    }

    /// Flip one cell, adjusting the population by one.
    pub(crate) fn toggle_cell(
        &mut self,
        x: usize,
        y: usize,
        sink: &mut dyn PresentationSink,
    ) -> Result<Cell, AutomatonError> {
        let cell = self.grid.toggle(x, y)?;
        if cell.is_alive() {
            self.population += 1;
        } else {
            self.population -= 1;
        }
        sink.on_cell_changed(x, y, cell);
        Ok(cell)
    }

    pub(crate) fn snapshot_committed(&mut self) {
        self.grid.snapshot_committed();
    }

    pub(crate) fn changed_since_snapshot(&self, x: usize, y: usize) -> Result<bool, AutomatonError> {
        self.grid.changed_since_snapshot(x, y)
    }

    /// Zero the board and both counters.
    pub fn reset(&mut self, sink: &mut dyn PresentationSink) {
        self.grid.clear_current();
        self.evolutions = 0;
        self.population = 0;
        sink.on_generation_advanced();
        debug!("automaton reset");
    }

    /// Seed a random board and restart the counters.
    pub fn randomize(&mut self, sink: &mut dyn PresentationSink) {
        self.grid.randomize();
        self.evolutions = 0;
        self.population = self.grid.recount_population();
        sink.on_generation_advanced();
        debug!(population = self.population, "board randomized");
    }

    /// HUD text for the population counter.
    pub fn population_text(&self) -> String {
        format!("Population: {}", self.population)
    }

    /// HUD text for the evolutions counter.
    pub fn evolutions_text(&self) -> String {
        format!("Evolutions: {}", self.evolutions)
    }
}
