//! Seed color input and scheme-mode selector

use crate::app::state::{AppState, Focus};
use crate::app::swatches::parse_hex_rgb;
use crate::tui::theme::{get_theme, LoadingSpinner, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the form row: seed input | scheme selector
pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(area);

    render_seed_input(frame, state, &theme, cols[0]);
    render_scheme_select(frame, state, &theme, cols[1]);
}

fn focused_block(theme: &Theme, title: String, is_focused: bool) -> Block<'static> {
    let border_color = if is_focused {
        theme.palette.accent
    } else {
        theme.palette.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border_color))
        .title(title)
        .title_style(Style::default().fg(theme.palette.accent))
}

fn render_seed_input(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let is_focused = state.focus == Focus::SeedInput;
    let block = focused_block(theme, format!(" {} Seed ", theme.icons.seed), is_focused);

    // Preview chip for a complete color
    let chip = match parse_hex_rgb(&state.seed_input) {
        Some((r, g, b)) => Span::styled(
            theme.icons.swatch_block,
            Style::default().fg(Color::Rgb(r, g, b)),
        ),
        None => Span::raw("  "),
    };

    let text = if state.is_requesting() {
        format!("{} {}", state.seed_input, LoadingSpinner::frame(state.tick))
    } else {
        let cursor = if is_focused { "▏" } else { "" };
        format!("{}{}", state.seed_input, cursor)
    };

    let line = Line::from(vec![
        chip,
        Span::raw(" "),
        Span::styled(text, Style::default().fg(theme.palette.fg_primary)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_scheme_select(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let is_focused = state.focus == Focus::SchemeSelect;
    let block = focused_block(theme, format!(" {} Scheme ", theme.icons.scheme), is_focused);

    let mode = state.scheme.selected_mode();
    let mut spans = vec![Span::styled(
        "◂ ",
        Style::default().fg(theme.palette.fg_secondary),
    )];
    let mode_style = if is_focused {
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.palette.fg_primary)
    };
    spans.push(Span::styled(mode.to_string(), mode_style));
    spans.push(Span::styled(
        " ▸",
        Style::default().fg(theme.palette.fg_secondary),
    ));
    spans.push(Span::styled(
        format!(
            "   {}/{}",
            state.scheme.selected + 1,
            state.scheme.options.len()
        ),
        Style::default().fg(theme.palette.fg_secondary),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
