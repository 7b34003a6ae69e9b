//! Toast overlay in the bottom-right corner

use super::truncate_str;
use crate::app::swatches::parse_hex_rgb;
use crate::toast::Toast;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MAX_WIDTH: u16 = 56;

pub fn render(frame: &mut Frame, toast: &Toast, root: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let swatch_width = if toast.swatch.is_some() { 3 } else { 0 };
    let wanted = toast.message.chars().count() as u16 + swatch_width + 6;
    let width = wanted.min(MAX_WIDTH).min(root.width);
    let height = 3.min(root.height);
    let area = Rect {
        x: root.x + root.width.saturating_sub(width + 1),
        y: root.y + root.height.saturating_sub(height + 1),
        width,
        height,
    };

    let mut spans = Vec::new();
    match toast.swatch.as_deref() {
        Some(color) => {
            let swatch_color = parse_hex_rgb(color)
                .map(|(r, g, b)| Color::Rgb(r, g, b))
                .unwrap_or(theme.palette.fg_secondary);
            spans.push(Span::styled(icons.swatch_block, Style::default().fg(swatch_color)));
            spans.push(Span::raw(" "));
        }
        None => {
            spans.push(Span::styled(
                format!("{} ", icons.info),
                Style::default().fg(theme.palette.fg_secondary),
            ));
        }
    }
    let text_width = width.saturating_sub(swatch_width + 4) as usize;
    spans.push(Span::styled(
        truncate_str(&toast.message, text_width),
        Style::default().fg(theme.palette.fg_primary),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.accent))
        .style(Style::default().bg(theme.palette.bg_primary));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
