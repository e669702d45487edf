mod automaton;
mod camera;
mod interaction;
mod lifecycle;

pub use automaton::{Automaton, PresentationSink};
pub use camera::Camera;
pub use interaction::InteractionController;
pub use lifecycle::{Clock, IntervalClock, Lifecycle, RunState};
