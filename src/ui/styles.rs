use crate::domain::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub gauge_track: Color,
    pub insight: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                border: Color::Gray,
                accent: Color::Blue,
                success: Color::Green,
                warning: Color::Yellow,
                gauge_track: Color::Gray,
                insight: Color::Blue,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::DarkGray,
                border: Color::DarkGray,
                accent: Color::LightBlue,
                success: Color::LightGreen,
                warning: Color::LightYellow,
                gauge_track: Color::DarkGray,
                insight: Color::Magenta,
            },
        }
    }
}

/// Base style painted over the whole frame
pub fn base_style(p: &Palette) -> Style {
    Style::default().fg(p.text).bg(p.background)
}

/// Default text style
pub fn default_style(p: &Palette) -> Style {
    Style::default().fg(p.text)
}

/// Secondary / hint text
pub fn muted_style(p: &Palette) -> Style {
    Style::default().fg(p.muted)
}

/// Border style
pub fn border_style(p: &Palette) -> Style {
    Style::default().fg(p.border)
}

/// Title style for panes
pub fn title_style(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Big countdown digits
pub fn clock_style(p: &Palette) -> Style {
    Style::default().fg(p.text).add_modifier(Modifier::BOLD)
}

/// Start button label when paused
pub fn start_style(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Pause button label when running
pub fn pause_style(p: &Palette) -> Style {
    Style::default().fg(p.warning).add_modifier(Modifier::BOLD)
}

/// Selected row highlight style
pub fn selected_style(p: &Palette) -> Style {
    Style::default()
        .fg(p.background)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

/// Done/completed task style
pub fn done_style(p: &Palette) -> Style {
    Style::default()
        .fg(p.muted)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Check mark on completed tasks
pub fn check_style(p: &Palette) -> Style {
    Style::default().fg(p.success)
}

/// Progress gauge style
pub fn gauge_style(p: &Palette, fill: Color) -> Style {
    Style::default().fg(fill).bg(p.gauge_track)
}

/// Insight card style
pub fn insight_style(p: &Palette) -> Style {
    Style::default().fg(Color::White).bg(p.insight)
}
