use tracing::debug;

use crate::domain::StepOutcome;

use super::automaton::{Automaton, PresentationSink};

/// Injectable periodic-tick capability.
///
/// The controller never touches a real timer directly, so tests drive it
/// with a hand-rolled clock and the frame loop with [`IntervalClock`].
pub trait Clock {
    /// Begin firing every `period` seconds.
    fn start(&mut self, period: f64);
    fn pause(&mut self);
    fn resume(&mut self);
    /// Clear the timer. Stopping an already-stopped clock is a no-op.
    fn stop(&mut self);
    /// Ticks that came due since the last poll; 0 unless running.
    fn poll(&mut self, dt: f64) -> u32;
}

/// Frame-loop clock: accumulates elapsed time and fires once per period.
/// The first fire comes one full period after start.
#[derive(Debug, Default)]
pub struct IntervalClock {
    period: f64,
    accumulator: f64,
    running: bool,
    started: bool,
}

impl Clock for IntervalClock {
    fn start(&mut self, period: f64) {
        self.period = period;
        self.accumulator = 0.0;
        self.running = true;
        self.started = true;
    }

    fn pause(&mut self) {
        self.running = false;
    }

    fn resume(&mut self) {
        if self.started {
            self.running = true;
        }
    }

    fn stop(&mut self) {
        self.running = false;
        self.started = false;
        self.accumulator = 0.0;
    }

    fn poll(&mut self, dt: f64) -> u32 {
        if !self.running || self.period <= 0.0 {
            return 0;
        }
        self.accumulator += dt;
        let mut fired = 0;
        while self.accumulator >= self.period {
            self.accumulator -= self.period;
            fired += 1;
        }
        fired
    }
}

/// Run state of the generation clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// No timer exists yet (initial state, after reset, or after a stall).
    #[default]
    Stopped,
    /// Timer active; a generation advances every period.
    Running,
    /// Timer exists but is suspended.
    Paused,
}

/// Drives generation advancement from a periodic clock and owns the
/// start/pause/resume/reset life cycle.
pub struct Lifecycle<C: Clock> {
    clock: C,
    period: f64,
    state: RunState,
}

impl<C: Clock> Lifecycle<C> {
    pub fn new(clock: C, period: f64) -> Self {
        Self {
            clock,
            period,
            state: RunState::Stopped,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// One action serves both "start generating" and "pause/resume":
    /// Stopped starts the timer, Running suspends it, Paused resumes it.
    pub fn toggle_run(&mut self) {
        match self.state {
            RunState::Stopped => {
                self.clock.start(self.period);
                self.state = RunState::Running;
                debug!(period = self.period, "clock started");
            }
            RunState::Running => {
                self.clock.pause();
                self.state = RunState::Paused;
                debug!("clock paused");
            }
            RunState::Paused => {
                self.clock.resume();
                self.state = RunState::Running;
                debug!("clock resumed");
            }
        }
    }

    /// Suspend if running, otherwise do nothing. Called at the start of
    /// an edit gesture: a tick must never race an edit.
    pub fn pause_only(&mut self) {
        if self.state == RunState::Running {
            self.clock.pause();
            self.state = RunState::Paused;
            debug!("clock paused for edit");
        }
    }

    /// Stop the clock and zero the board and counters.
    pub fn reset(&mut self, automaton: &mut Automaton, sink: &mut dyn PresentationSink) {
        self.clock.stop();
        self.state = RunState::Stopped;
        automaton.reset(sink);
        debug!("lifecycle reset");
    }

    /// Advance once per due tick. A stalled board stops the clock: there
    /// are no further generations to create.
    pub fn update(&mut self, dt: f64, automaton: &mut Automaton, sink: &mut dyn PresentationSink) {
        if self.state != RunState::Running {
            return;
        }
        for _ in 0..self.clock.poll(dt) {
            if automaton.advance_generation(sink) == StepOutcome::Stalled {
                self.clock.stop();
                self.state = RunState::Stopped;
                debug!(
                    evolutions = automaton.evolutions(),
                    "evolution stalled, clock stopped"
                );
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AutomatonConfig;
    use crate::domain::Cell;

    /// Test clock that records transitions and fires on demand.
    #[derive(Default)]
    struct ManualClock {
        queued: u32,
        running: bool,
        starts: u32,
        stops: u32,
    }

    impl ManualClock {
        fn queue(&mut self, ticks: u32) {
            self.queued = ticks;
        }
    }

    impl Clock for ManualClock {
        fn start(&mut self, _period: f64) {
            self.running = true;
            self.starts += 1;
        }

        fn pause(&mut self) {
            self.running = false;
        }

        fn resume(&mut self) {
            self.running = true;
        }

        fn stop(&mut self) {
            self.running = false;
            self.stops += 1;
        }

        fn poll(&mut self, _dt: f64) -> u32 {
            if !self.running {
                return 0;
            }
            std::mem::take(&mut self.queued)
        }
    }

    fn automaton() -> Automaton {
        Automaton::new(&AutomatonConfig::new(5, 5, 0.1).unwrap()).unwrap()
    }

    fn blinker(automaton: &mut Automaton) {
        for (x, y) in [(1, 2), (2, 2), (3, 2)] {
            automaton.set_cell(x, y, Cell::Alive, &mut ()).unwrap();
        }
    }

    #[test]
    fn test_toggle_run_cycles_through_states() {
        let mut lifecycle = Lifecycle::new(ManualClock::default(), 0.1);
        assert_eq!(lifecycle.state(), RunState::Stopped);

        lifecycle.toggle_run();
        assert_eq!(lifecycle.state(), RunState::Running);
        lifecycle.toggle_run();
        assert_eq!(lifecycle.state(), RunState::Paused);
        lifecycle.toggle_run();
        assert_eq!(lifecycle.state(), RunState::Running);
        // The timer was created exactly once.
        assert_eq!(lifecycle.clock.starts, 1);
    }

    #[test]
    fn test_pause_only_is_a_noop_unless_running() {
        let mut lifecycle = Lifecycle::new(ManualClock::default(), 0.1);

        lifecycle.pause_only();
        assert_eq!(lifecycle.state(), RunState::Stopped);

        lifecycle.toggle_run();
        lifecycle.pause_only();
        assert_eq!(lifecycle.state(), RunState::Paused);

        // Already paused: stays paused.
        lifecycle.pause_only();
        assert_eq!(lifecycle.state(), RunState::Paused);
    }

    #[test]
    fn test_ticks_advance_generations() {
        let mut automaton = automaton();
        blinker(&mut automaton);
        let mut lifecycle = Lifecycle::new(ManualClock::default(), 0.1);

        lifecycle.toggle_run();
        lifecycle.clock.queue(3);
        lifecycle.update(0.3, &mut automaton, &mut ());

        assert_eq!(automaton.evolutions(), 3);
        assert_eq!(lifecycle.state(), RunState::Running);
    }

    #[test]
    fn test_no_ticks_while_paused() {
        let mut automaton = automaton();
        blinker(&mut automaton);
        let mut lifecycle = Lifecycle::new(ManualClock::default(), 0.1);

        lifecycle.toggle_run();
        lifecycle.toggle_run();
        lifecycle.clock.queue(5);
        lifecycle.update(0.5, &mut automaton, &mut ());

        assert_eq!(automaton.evolutions(), 0);
    }

    #[test]
    fn test_stall_stops_the_clock() {
        let mut automaton = automaton();
        // Empty board: the very first tick stalls.
        let mut lifecycle = Lifecycle::new(ManualClock::default(), 0.1);

        lifecycle.toggle_run();
        lifecycle.clock.queue(4);
        lifecycle.update(0.4, &mut automaton, &mut ());

        assert_eq!(lifecycle.state(), RunState::Stopped);
        assert_eq!(lifecycle.clock.stops, 1);
        assert_eq!(automaton.evolutions(), 0);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut automaton = automaton();
        blinker(&mut automaton);
        let mut lifecycle = Lifecycle::new(ManualClock::default(), 0.1);

        lifecycle.toggle_run();
        lifecycle.reset(&mut automaton, &mut ());

        assert_eq!(lifecycle.state(), RunState::Stopped);
        assert_eq!(automaton.population(), 0);
        assert_eq!(automaton.evolutions(), 0);

        // Restarting after reset creates a fresh timer.
        lifecycle.toggle_run();
        assert_eq!(lifecycle.state(), RunState::Running);
        assert_eq!(lifecycle.clock.starts, 2);
    }

    #[test]
    fn test_interval_clock_fires_after_full_periods() {
        let mut clock = IntervalClock::default();
        clock.start(0.1);

        assert_eq!(clock.poll(0.05), 0);
        assert_eq!(clock.poll(0.05), 1);
        assert_eq!(clock.poll(0.25), 2);
    }

    #[test]
    fn test_interval_clock_pause_resume_stop() {
        let mut clock = IntervalClock::default();
        clock.start(0.1);

        clock.pause();
        assert_eq!(clock.poll(1.0), 0);
        clock.resume();
        assert_eq!(clock.poll(0.1), 1);

        clock.stop();
        assert_eq!(clock.poll(1.0), 0);
        // Resume without a start does nothing.
        clock.resume();
        assert_eq!(clock.poll(1.0), 0);
        // Stopping again is harmless.
        clock.stop();
    }
}
