use crate::app::AppState;
use crate::ui::styles::{
    border_style, clock_style, gauge_style, muted_style, pause_style, start_style, title_style,
    Palette,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the focus/break countdown card
pub fn render_timer_pane(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let timer = &app.timer;
    let title = if app.use_emoji {
        " ⏱  Focus Timer "
    } else {
        " Focus Timer "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(palette))
        .title(Span::styled(title, title_style(palette)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Clock
            Constraint::Length(1), // Mode label
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Phase gauge
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

    let clock = Paragraph::new(Span::styled(timer.clock(), clock_style(palette)))
        .alignment(Alignment::Center);
    f.render_widget(clock, rows[1]);

    let label = Paragraph::new(Span::styled(
        timer.mode.label().to_uppercase(),
        muted_style(palette),
    ))
    .alignment(Alignment::Center);
    f.render_widget(label, rows[2]);

    let gauge = Gauge::default()
        .gauge_style(gauge_style(palette, palette.accent))
        .ratio(timer.phase_progress())
        .label("");
    f.render_widget(gauge, gauge_area(rows[4]));

    let (button, button_style) = if timer.running {
        ("[space] Pause", pause_style(palette))
    } else {
        ("[space] Start", start_style(palette))
    };
    let buttons = Paragraph::new(Line::from(vec![
        Span::styled(button, button_style),
        Span::raw("    "),
        Span::styled("[r] Reset", muted_style(palette)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(buttons, rows[6]);
}

/// Inset the gauge a little from the card edges
fn gauge_area(row: Rect) -> Rect {
    let margin = row.width / 6;
    Rect {
        x: row.x + margin,
        width: row.width.saturating_sub(margin * 2),
        ..row
    }
}
