use thiserror::Error;

/// Failures surfaced by the automaton engine.
///
/// There is no recoverable runtime class: every variant is either a
/// contract violation by the caller or a rejected configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AutomatonError {
    /// A coordinate outside the board reached the engine. The pointer
    /// resolver filters these in normal operation, so this is a caller
    /// bug; it propagates rather than being clamped.
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Construction-time parameters were rejected. Fatal to the session.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: &'static str },
}
