use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the timer card
const TIMER_HEIGHT: u16 = 11;

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub timer_area: Rect,
    pub insight_area: Option<Rect>,
    pub task_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Header (3 rows)
/// - Body: left column (timer above insight card) | right column (tasks)
/// - Bottom bar: keybindings (1 row)
pub fn create_layout(area: Rect, show_insight: bool) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);

    let (timer_area, insight_area) = if show_insight {
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(TIMER_HEIGHT), Constraint::Min(0)])
            .split(columns[0]);
        (left[0], Some(left[1]))
    } else {
        (columns[0], None)
    };

    MainLayout {
        header_area: main_chunks[0],
        timer_area,
        insight_area,
        task_area: columns[1],
        keybindings_area: main_chunks[2],
    }
}
