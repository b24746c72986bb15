use crate::domain::UiMode;
use crate::ui::styles::{muted_style, Palette};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CREDIT: &str = "Built with ratatui & crossterm ";

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, ui_mode: UiMode, palette: &Palette, area: Rect) {
    let hints = match ui_mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" space start/pause   "),
            Span::raw("r reset   "),
            Span::raw("a add   "),
            Span::raw("↑/↓ select   "),
            Span::raw("enter toggle   "),
            Span::raw("d delete   "),
            Span::raw("t theme   "),
            Span::raw("i insight   "),
            Span::raw("q quit"),
        ]),
        UiMode::AddingTask => Line::from(vec![
            Span::raw(" type to edit   "),
            Span::raw("enter add   "),
            Span::raw("esc cancel"),
        ]),
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(CREDIT.len() as u16),
        ])
        .split(area);

    f.render_widget(Paragraph::new(hints).style(muted_style(palette)), chunks[0]);

    let credit = Paragraph::new(CREDIT)
        .style(muted_style(palette))
        .alignment(Alignment::Right);
    f.render_widget(credit, chunks[1]);
}
