//! Palette swatches - one color bar per entry, top to bottom in palette order

use crate::app::state::{AppState, Focus};
use crate::tui::theme::{contrast_fg, get_theme, LoadingSpinner};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let is_focused = state.focus == Focus::Swatches;
    let border_color = if is_focused {
        theme.palette.accent
    } else {
        theme.palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} Palette ", icons.palette))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let requesting = state.is_requesting();
    let tick = state.tick;
    let Some(list) = state.swatches.as_mut() else {
        return;
    };

    if list.is_empty() {
        let msg = if requesting {
            format!("{} Loading...", LoadingSpinner::frame(tick))
        } else {
            "No palette yet. Press Enter to fetch one.".to_string()
        };
        let empty = Paragraph::new(Line::from(msg))
            .style(Style::default().fg(theme.palette.fg_secondary))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        list.entry_areas.clear();
        return;
    }

    let n = list.len() as u32;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..n).map(|_| Constraint::Ratio(1, n)))
        .split(inner);

    let focused = list.focused();
    for (i, entry) in list.entries().iter().enumerate() {
        let row = rows[i];
        let (bg, fg) = match entry.rgb {
            Some((r, g, b)) => (Color::Rgb(r, g, b), contrast_fg(r, g, b)),
            None => (theme.palette.bg_highlight, theme.palette.fg_primary),
        };

        let is_focused = focused == Some(i);
        let mut label_style = Style::default().fg(fg).bg(bg);
        if is_focused {
            label_style = label_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        let marker = if is_focused {
            icons.selected
        } else {
            icons.unselected
        };

        // Vertically center the label inside the bar
        let top_padding = row.height.saturating_sub(1) / 2;
        let mut lines: Vec<Line> = vec![Line::default(); top_padding as usize];
        lines.push(Line::from(vec![
            Span::styled(format!("{marker} "), label_style),
            Span::styled(entry.code.clone(), label_style),
            Span::styled(format!("  {}", icons.copy), Style::default().fg(fg).bg(bg)),
        ]));

        let bar = Paragraph::new(lines)
            .style(Style::default().bg(bg))
            .alignment(Alignment::Center);
        frame.render_widget(bar, row);
    }

    list.entry_areas = rows.iter().copied().collect();
}
