use crate::app::AppState;
use crate::ui::styles::{muted_style, title_style, Palette};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label for the theme toggle; names the theme the key switches to
fn theme_toggle_label(app: &AppState) -> String {
    match (app.theme.is_dark(), app.use_emoji) {
        (true, true) => "☀️  [t] ".to_string(),
        (false, true) => "🌙 [t] ".to_string(),
        (true, false) => "[t] light mode ".to_string(),
        (false, false) => "[t] dark mode ".to_string(),
    }
}

/// Render the title bar with the theme toggle
pub fn render_header(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(muted_style(palette));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(" ▣ ", title_style(palette)),
            Span::styled("FocusBoard", title_style(palette)),
        ]),
        Line::from(Span::styled("   Manage your workflow", muted_style(palette))),
    ]);
    f.render_widget(title, inner);

    let toggle = Paragraph::new(Span::styled(theme_toggle_label(app), muted_style(palette)))
        .alignment(Alignment::Right);
    f.render_widget(toggle, inner);
}
