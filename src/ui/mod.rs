pub mod header;
pub mod insight_pane;
pub mod keybindings;
pub mod layout;
pub mod styles;
pub mod task_pane;
pub mod timer_pane;

use crate::app::AppState;
use header::render_header;
use insight_pane::render_insight_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::{widgets::Block, Frame};
use styles::{base_style, Palette};
use task_pane::render_task_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let palette = Palette::for_theme(app.theme);
    let layout = create_layout(size, app.show_insight);

    // Paint the theme background first
    f.render_widget(Block::default().style(base_style(&palette)), size);

    render_header(f, app, &palette, layout.header_area);
    render_timer_pane(f, app, &palette, layout.timer_area);
    if let Some(insight_area) = layout.insight_area {
        render_insight_pane(f, &palette, insight_area);
    }
    render_task_pane(f, app, &palette, layout.task_area);
    render_keybindings(f, app.ui_mode, &palette, layout.keybindings_area);
}
