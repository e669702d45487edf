// Domain layer - grid state and evolution
pub mod domain;

// Application layer - engine orchestration and life cycle
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use application::{
    Automaton, Camera, Clock, InteractionController, IntervalClock, Lifecycle, PresentationSink,
    RunState,
};
pub use config::AutomatonConfig;
pub use domain::{Cell, StepOutcome};
pub use error::AutomatonError;
