//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, FetchOutcome};
use crate::toast::Toast;
use crate::tui::theme::{get_theme, LoadingSpinner};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{form, help, swatches, toast};

/// Main layout structure:
/// ┌ Seed ──────────┬ Scheme ───────────────────────┐
/// │ ██ #6366f1     │ ◂ triad ▸                     │
/// ├ Palette ───────┴───────────────────────────────┤
/// │ ███████████████ #6366F1 ██████████████████████ │
/// │ ███████████████ #F16366 ██████████████████████ │
/// │ ...                                            │
/// └────────────────────────────────────────────────┘
///  status                                   [toast]
pub fn render(frame: &mut Frame, state: &mut AppState, current_toast: Option<&Toast>) {
    let root = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Form
            Constraint::Min(5),    // Swatches
            Constraint::Length(1), // Status bar
        ])
        .split(root);

    form::render(frame, state, rows[0]);
    swatches::render(frame, state, rows[1]);
    render_status_bar(frame, state, rows[2]);

    if let Some(t) = current_toast {
        toast::render(frame, t, root);
    }
    if state.show_help {
        help::render(frame, root);
    }
}

fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let (icon, color) = if state.is_requesting() {
        (LoadingSpinner::frame(state.tick), theme.palette.fg_secondary)
    } else {
        match state.last_outcome {
            Some(FetchOutcome::Rendered) => (icons.success, theme.palette.success),
            Some(FetchOutcome::ErrorReported) => (icons.error, theme.palette.error),
            Some(FetchOutcome::ErrorSilent) | None => (icons.info, theme.palette.fg_secondary),
        }
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().fg(color)),
        Span::styled(state.status.clone(), Style::default().fg(theme.palette.fg_secondary)),
        Span::styled(
            "   ? help  Tab focus  Enter fetch/copy  Esc quit",
            Style::default().fg(theme.palette.border),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
