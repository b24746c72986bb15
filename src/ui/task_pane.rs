use crate::app::AppState;
use crate::domain::{Task, UiMode};
use crate::ui::styles::{
    border_style, check_style, default_style, done_style, gauge_style, muted_style,
    selected_style, title_style, Palette,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Add a new task...";
const EMPTY_MESSAGE: &str = "No tasks yet. Stay focused!";

/// Render the checklist card: progress, add field and task rows
pub fn render_task_pane(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let tasks = &app.tasks;
    let title = if app.use_emoji { " ☑ Tasks " } else { " Tasks " };
    let count = format!(" {}/{} Done ", tasks.completed_count(), tasks.len());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(palette))
        .title(Span::styled(title, title_style(palette)))
        .title(Title::from(Span::styled(count, muted_style(palette))).alignment(Alignment::Right));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress gauge
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Add field
            Constraint::Min(0),    // Task rows
        ])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(gauge_style(palette, palette.success))
        .ratio(tasks.progress_percent() / 100.0)
        .label(format!("{:.0}%", tasks.progress_percent()));
    f.render_widget(gauge, rows[0]);

    render_add_field(f, app, palette, rows[2]);

    if tasks.is_empty() {
        let empty = Paragraph::new(Span::styled(
            EMPTY_MESSAGE,
            muted_style(palette).add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center);
        f.render_widget(empty, padded(rows[3]));
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| ListItem::new(create_task_line(task, app.use_emoji, palette)))
        .collect();

    let list = List::new(items).highlight_style(selected_style(palette));

    // Only show the cursor row while the list has focus
    let mut state = ListState::default();
    if app.ui_mode == UiMode::Normal {
        state.select(Some(app.selected_index));
    }
    f.render_stateful_widget(list, rows[3], &mut state);
}

/// Render the single-line add-task input
fn render_add_field(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let editing = app.ui_mode == UiMode::AddingTask;

    let line = if editing {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.input.as_str(), default_style(palette)),
            Span::styled("█", title_style(palette)), // Cursor
        ])
    } else if app.input.is_empty() {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(PLACEHOLDER, muted_style(palette)),
        ])
    } else {
        Line::from(vec![Span::raw("  "), Span::raw(app.input.as_str())])
    };

    let hint = if editing { " Enter add · Esc cancel " } else { " [a] + " };
    let field_border = if editing {
        title_style(palette)
    } else {
        border_style(palette)
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(field_border)
            .title(Title::from(Span::styled(hint, muted_style(palette))).alignment(Alignment::Right)),
    );
    f.render_widget(paragraph, area);
}

/// Create a single checklist row
fn create_task_line(task: &Task, use_emoji: bool, palette: &Palette) -> Line<'static> {
    let marker = match (task.completed, use_emoji) {
        (true, true) => "✔",
        (false, true) => "○",
        (true, false) => "[x]",
        (false, false) => "[ ]",
    };

    let (marker_style, text_style) = if task.completed {
        (check_style(palette), done_style(palette))
    } else {
        (muted_style(palette), default_style(palette))
    };

    Line::from(vec![
        Span::raw(" "),
        Span::styled(marker.to_string(), marker_style),
        Span::raw(" "),
        Span::styled(task.text.clone(), text_style),
    ])
}

fn padded(area: Rect) -> Rect {
    Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1),
        ..area
    }
}
