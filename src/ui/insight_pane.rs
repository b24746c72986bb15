use crate::ui::styles::{insight_style, Palette};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the static weekly insight card
pub fn render_insight_pane(f: &mut Frame, palette: &Palette, area: Rect) {
    let style = insight_style(palette);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(" Weekly Insight", style.add_modifier(Modifier::BOLD))),
        Line::raw(" You are most productive on Tuesday mornings."),
        Line::raw(""),
        Line::raw(" [Focus: 85%]  [Tasks: 12]"),
    ];

    let paragraph = Paragraph::new(lines)
        .style(style)
        .block(Block::default().borders(Borders::ALL).style(style))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
