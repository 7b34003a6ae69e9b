//! Help overlay showing keybindings

use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered over `root`
pub fn render(frame: &mut Frame, root: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let area = centered(root, 64, 22);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.accent))
        .title(format!(" {} Keybinds ", icons.help))
        .title_style(Style::default().fg(theme.palette.accent))
        .style(Style::default().bg(theme.palette.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left_content = vec![
        section_header("Form", &theme),
        keybind("Tab", "Next field", &theme),
        keybind("Shift+Tab", "Previous field", &theme),
        keybind("0-9 a-f", "Edit seed color", &theme),
        keybind("Ctrl+u", "Clear seed", &theme),
        keybind("j / k", "Change scheme", &theme),
        keybind("Enter", "Get color scheme", &theme),
        keybind("F5", "Fetch again", &theme),
    ];
    let right_content = vec![
        section_header("Palette", &theme),
        keybind("j / Down", "Next color", &theme),
        keybind("k / Up", "Previous color", &theme),
        keybind("Enter", "Copy color", &theme),
        keybind("Space", "Copy color", &theme),
        keybind("Click", "Copy color", &theme),
        keybind("r", "Fetch again", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("? / F1", "Toggle help", &theme),
        keybind("Esc", "Quit", &theme),
        keybind("q", "Quit (outside seed)", &theme),
    ];

    frame.render_widget(
        Paragraph::new(left_content).wrap(Wrap { trim: false }),
        cols[0],
    );
    frame.render_widget(
        Paragraph::new(right_content).wrap(Wrap { trim: false }),
        cols[1],
    );
}

fn centered(root: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(root.width);
    let height = height.min(root.height);
    Rect {
        x: root.x + (root.width - width) / 2,
        y: root.y + (root.height - height) / 2,
        width,
        height,
    }
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:10}", key),
            Style::default()
                .fg(theme.palette.fg_secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}
