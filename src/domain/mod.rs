mod board;
mod cell;
pub mod evolution;
mod grid;

pub use board::Board;
pub use cell::Cell;
pub use evolution::StepOutcome;
pub use grid::GridState;
