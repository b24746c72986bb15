use serde::{Deserialize, Serialize};

/// Full length of a focus phase, in seconds
pub const FOCUS_SECS: u32 = 25 * 60;

/// Full length of a break phase, in seconds
pub const BREAK_SECS: u32 = 5 * 60;

/// Phase of the countdown timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Focus,
    Break,
}

impl Mode {
    /// Full duration of this phase in seconds
    pub fn duration_secs(&self) -> u32 {
        match self {
            Mode::Focus => FOCUS_SECS,
            Mode::Break => BREAK_SECS,
        }
    }

    /// The phase that follows this one
    pub fn next(&self) -> Self {
        match self {
            Mode::Focus => Mode::Break,
            Mode::Break => Mode::Focus,
        }
    }

    /// Display label shown under the clock
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Focus => "Focus Time",
            Mode::Break => "Short Break",
        }
    }
}

/// Discrete commands accepted by the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    StartPause,
    Reset,
    /// One elapsed second while running
    Tick,
}

/// Notable outcome of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    PhaseCompleted { finished: Mode, next: Mode },
}

/// Result of applying a command: the new state plus an optional event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: TimerState,
    pub event: Option<TimerEvent>,
}

impl Transition {
    fn quiet(state: TimerState) -> Self {
        Self { state, event: None }
    }
}

/// Countdown state for the focus/break timer.
///
/// `remaining_secs` always lies in `1..=mode.duration_secs()` once a
/// transition has completed; reaching zero flips the mode in the same step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub remaining_secs: u32,
    pub mode: Mode,
    pub running: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerState {
    pub fn new() -> Self {
        Self {
            remaining_secs: Mode::Focus.duration_secs(),
            mode: Mode::Focus,
            running: false,
        }
    }

    /// Apply a command and return the resulting state
    pub fn apply(self, command: TimerCommand) -> Transition {
        match command {
            TimerCommand::StartPause => Transition::quiet(Self {
                running: !self.running,
                ..self
            }),
            TimerCommand::Reset => Transition::quiet(Self {
                remaining_secs: self.mode.duration_secs(),
                running: false,
                ..self
            }),
            TimerCommand::Tick => self.tick(),
        }
    }

    fn tick(self) -> Transition {
        if !self.running {
            return Transition::quiet(self);
        }

        let remaining = self.remaining_secs.saturating_sub(1);
        if remaining > 0 {
            return Transition::quiet(Self {
                remaining_secs: remaining,
                ..self
            });
        }

        // Hit zero: pause and load the next phase in one step
        let next = self.mode.next();
        Transition {
            state: Self {
                remaining_secs: next.duration_secs(),
                mode: next,
                running: false,
            },
            event: Some(TimerEvent::PhaseCompleted {
                finished: self.mode,
                next,
            }),
        }
    }

    /// Remaining time as `MM:SS`
    pub fn clock(&self) -> String {
        format_clock(self.remaining_secs)
    }

    /// Elapsed fraction of the current phase (0.0 to 1.0)
    pub fn phase_progress(&self) -> f64 {
        let total = self.mode.duration_secs();
        if total == 0 {
            return 0.0;
        }
        let elapsed = total.saturating_sub(self.remaining_secs);
        (elapsed as f64 / total as f64).clamp(0.0, 1.0)
    }
}

/// Format seconds as zero-padded `MM:SS` (65 -> "01:05")
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state(mode: Mode, remaining_secs: u32, running: bool) -> TimerState {
        TimerState {
            remaining_secs,
            mode,
            running,
        }
    }

    #[test]
    fn test_initial_state() {
        assert_eq!(TimerState::new(), state(Mode::Focus, 1500, false));
    }

    #[test]
    fn test_format_clock_examples() {
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(300), "05:00");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
    }

    #[test]
    fn test_format_clock_reconstructs_every_duration() {
        for d in 0..=FOCUS_SECS {
            let text = format_clock(d);
            assert_eq!(text.len(), 5, "bad width for {}", d);
            let (mins, secs) = text.split_once(':').unwrap();
            assert_eq!(mins.len(), 2);
            assert_eq!(secs.len(), 2);
            let mins: u32 = mins.parse().unwrap();
            let secs: u32 = secs.parse().unwrap();
            assert!(secs < 60);
            assert_eq!(mins * 60 + secs, d);
        }
    }

    #[test]
    fn test_start_pause_only_flips_running() {
        let s = state(Mode::Break, 42, false);
        let started = s.apply(TimerCommand::StartPause).state;
        assert_eq!(started, state(Mode::Break, 42, true));
        let paused = started.apply(TimerCommand::StartPause).state;
        assert_eq!(paused, s);
    }

    #[test]
    fn test_tick_decrements_while_running() {
        let t = state(Mode::Focus, 1500, true).apply(TimerCommand::Tick);
        assert_eq!(t.state, state(Mode::Focus, 1499, true));
        assert_eq!(t.event, None);
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let s = state(Mode::Focus, 700, false);
        assert_eq!(s.apply(TimerCommand::Tick).state, s);
    }

    #[test]
    fn test_focus_ends_into_paused_break() {
        let t = state(Mode::Focus, 1, true).apply(TimerCommand::Tick);
        assert_eq!(t.state, state(Mode::Break, 300, false));
        assert_eq!(
            t.event,
            Some(TimerEvent::PhaseCompleted {
                finished: Mode::Focus,
                next: Mode::Break
            })
        );
    }

    #[test]
    fn test_break_ends_into_paused_focus() {
        let t = state(Mode::Break, 1, true).apply(TimerCommand::Tick);
        assert_eq!(t.state, state(Mode::Focus, 1500, false));
    }

    #[test]
    fn test_reset_restores_full_duration_from_any_state() {
        for mode in [Mode::Focus, Mode::Break] {
            for running in [true, false] {
                for remaining in [1, 17, mode.duration_secs()] {
                    let reset = state(mode, remaining, running)
                        .apply(TimerCommand::Reset)
                        .state;
                    assert_eq!(reset, state(mode, mode.duration_secs(), false));
                }
            }
        }
    }

    #[test]
    fn test_full_focus_run_stays_in_bounds() {
        let mut s = TimerState::new().apply(TimerCommand::StartPause).state;
        let mut events = 0;
        for _ in 0..FOCUS_SECS {
            let t = s.apply(TimerCommand::Tick);
            s = t.state;
            assert!(s.remaining_secs > 0);
            assert!(s.remaining_secs <= s.mode.duration_secs());
            if t.event.is_some() {
                events += 1;
            }
        }
        assert_eq!(events, 1);
        assert_eq!(s, state(Mode::Break, BREAK_SECS, false));
    }

    #[test]
    fn test_phase_progress() {
        assert_eq!(TimerState::new().phase_progress(), 0.0);
        assert_eq!(state(Mode::Break, 150, true).phase_progress(), 0.5);
    }
}
