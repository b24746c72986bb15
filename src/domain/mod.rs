pub mod enums;
pub mod task;
pub mod theme;
pub mod timer;

pub use enums::UiMode;
pub use task::{Task, TaskCommand, TaskId, TaskList};
pub use theme::Theme;
pub use timer::{Mode, TimerCommand, TimerEvent, TimerState};
