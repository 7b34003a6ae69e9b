//! Swatch list: one activatable entry per palette color.

use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchEntry {
    /// Color string exactly as the service returned it.
    pub code: String,
    /// Decoded RGB, when `code` is a valid 6-digit hex color.
    pub rgb: Option<(u8, u8, u8)>,
}

impl SwatchEntry {
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        let rgb = parse_hex_rgb(&code);
        Self { code, rgb }
    }
}

/// Decode `#rrggbb` or `rrggbb`.
pub fn parse_hex_rgb(s: &str) -> Option<(u8, u8, u8)> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    match hex::decode(digits).ok()?.as_slice() {
        [r, g, b] => Some((*r, *g, *b)),
        _ => None,
    }
}

/// Mounted list view. Absent until the terminal UI is up.
#[derive(Debug, Clone, Default)]
pub struct SwatchList {
    entries: Vec<SwatchEntry>,
    cursor: usize,
    focused: bool,
    /// Screen areas of the entries from the last draw, for mouse hit-testing.
    pub entry_areas: Vec<Rect>,
}

impl SwatchList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SwatchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry holding focus, if any.
    pub fn focused(&self) -> Option<usize> {
        (self.focused && !self.entries.is_empty()).then_some(self.cursor)
    }

    pub fn replace(&mut self, colors: &[String]) {
        self.entries = colors.iter().map(SwatchEntry::new).collect();
        self.entry_areas.clear();
        self.cursor = 0;
        self.focused = false;
    }

    pub fn focus_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        if self.focused {
            self.cursor = (self.cursor + 1).min(self.entries.len() - 1);
        }
        self.focused = true;
    }

    pub fn focus_prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        if self.focused {
            self.cursor = self.cursor.saturating_sub(1);
        }
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Color of entry `index`. Activation drops focus from the entry.
    pub fn activate(&mut self, index: usize) -> Option<String> {
        let code = self.entries.get(index)?.code.clone();
        self.cursor = index;
        self.blur();
        Some(code)
    }

    pub fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.entry_areas.iter().position(|area| area.contains(pos))
    }
}

/// Replace the displayed entries with `colors`, in order.
///
/// Returns `false`, without failing, when the list is not mounted.
pub fn render_colors(list: Option<&mut SwatchList>, colors: &[String]) -> bool {
    let Some(list) = list else {
        tracing::error!("swatch list not mounted; dropping {} colors", colors.len());
        return false;
    };
    list.replace(colors);
    true
}
