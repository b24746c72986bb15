use crate::config::Config;
use crate::domain::{TaskCommand, TaskList, Theme, TimerCommand, TimerEvent, TimerState, UiMode};
use crate::ticker::Ticker;
use log::{debug, info};
use std::time::{Duration, Instant};

/// Main application state
pub struct AppState {
    pub timer: TimerState,
    pub ticker: Ticker,
    pub tasks: TaskList,
    pub theme: Theme,
    pub ui_mode: UiMode,
    pub input: String, // Add-task field
    pub selected_index: usize,
    pub use_emoji: bool,
    pub show_insight: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let tasks = if config.sample_tasks {
            TaskList::with_samples()
        } else {
            TaskList::new()
        };

        Self {
            timer: TimerState::new(),
            ticker: Ticker::countdown(),
            tasks,
            theme: config.theme,
            ui_mode: UiMode::Normal,
            input: String::new(),
            selected_index: 0,
            use_emoji: config.use_emoji,
            show_insight: config.show_insight,
            should_quit: false,
        }
    }

    // Timer

    /// Start or pause the countdown
    pub fn start_pause(&mut self, now: Instant) {
        self.apply_timer(TimerCommand::StartPause, now);
        info!(
            "event=timer_{} mode={:?} remaining={}",
            if self.timer.running { "start" } else { "pause" },
            self.timer.mode,
            self.timer.clock()
        );
    }

    /// Stop and rewind the current phase
    pub fn reset_timer(&mut self, now: Instant) {
        self.apply_timer(TimerCommand::Reset, now);
        info!("event=timer_reset mode={:?}", self.timer.mode);
    }

    /// Deliver every countdown tick that has come due by `now`
    pub fn tick(&mut self, now: Instant) {
        let due = self.ticker.due(now);
        for _ in 0..due {
            // A phase switch disarms the ticker; drop the rest of the batch
            if !self.ticker.is_armed() {
                break;
            }
            self.apply_timer(TimerCommand::Tick, now);
        }
    }

    /// Time until the next countdown tick, capped at `max`
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        self.ticker
            .time_until_due(now)
            .map_or(max, |until| until.min(max))
    }

    fn apply_timer(&mut self, command: TimerCommand, now: Instant) {
        let transition = self.timer.apply(command);
        self.timer = transition.state;

        if let Some(TimerEvent::PhaseCompleted { finished, next }) = transition.event {
            // The next phase always waits for an explicit start
            self.ticker.disarm();
            info!("event=phase_completed finished={:?} next={:?}", finished, next);
        }

        self.sync_ticker(now);
    }

    /// Keep the ticker armed exactly while the timer runs
    fn sync_ticker(&mut self, now: Instant) {
        match (self.timer.running, self.ticker.is_armed()) {
            (true, false) => self.ticker.arm(now),
            (false, true) => self.ticker.disarm(),
            _ => {}
        }
    }

    /// Disarm everything before the process exits
    pub fn shutdown(&mut self) {
        self.ticker.disarm();
        debug!("event=shutdown tasks={} mode={:?}", self.tasks.len(), self.timer.mode);
    }

    // Tasks

    /// Open the add-task field
    pub fn start_add_task(&mut self) {
        self.ui_mode = UiMode::AddingTask;
    }

    /// Leave the add-task field without adding
    pub fn cancel_add_task(&mut self) {
        self.input.clear();
        self.ui_mode = UiMode::Normal;
    }

    /// Submit the add-task field. The field is only cleared when a task was added.
    pub fn submit_task(&mut self) -> bool {
        match self.tasks.add(&self.input) {
            Some(id) => {
                info!("event=task_added id={} total={}", id, self.tasks.len());
                self.input.clear();
                self.ui_mode = UiMode::Normal;
                self.selected_index = self.tasks.len() - 1;
                true
            }
            None => {
                debug!("event=task_rejected reason=empty");
                false
            }
        }
    }

    /// Toggle completion of the selected task
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.run_task_command(TaskCommand::Toggle(id));
        }
    }

    /// Delete the selected task
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.run_task_command(TaskCommand::Delete(id));
            self.clamp_selection();
        }
    }

    fn run_task_command(&mut self, command: TaskCommand) {
        debug!("event=task_command command={:?}", command);
        let tasks = std::mem::take(&mut self.tasks);
        self.tasks = tasks.apply(command);
        debug!(
            "event=task_progress done={} total={} pct={:.0}",
            self.tasks.completed_count(),
            self.tasks.len(),
            self.tasks.progress_percent()
        );
    }

    fn selected_task_id(&self) -> Option<crate::domain::TaskId> {
        self.tasks.get(self.selected_index).map(|t| t.id)
    }

    fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len() - 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    // Theme / view

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        info!("event=theme_changed theme={}", self.theme.label());
    }

    pub fn toggle_insight(&mut self) {
        self.show_insight = !self.show_insight;
    }
}
