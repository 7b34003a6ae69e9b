//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

/// Icon set using Nerd Font glyphs
#[derive(Debug, Clone)]
pub struct Icons {
    pub palette: &'static str,
    pub seed: &'static str,
    pub scheme: &'static str,
    pub copy: &'static str,
    pub help: &'static str,

    // Status
    pub success: &'static str,
    pub error: &'static str,
    pub info: &'static str,

    // Selection
    pub selected: &'static str,
    pub unselected: &'static str,

    pub swatch_block: &'static str,
}

impl Icons {
    /// Nerd Font icon set
    pub const fn nerd() -> Self {
        Self {
            palette: "\u{e22b}",  // nf-fae-palette_color
            seed: "\u{f1fb}",     // nf-fa-eyedropper
            scheme: "\u{f0e8}",   // nf-fa-sitemap
            copy: "\u{f0c5}",     // nf-fa-copy
            help: "\u{f059}",     // nf-fa-question_circle

            success: "\u{f00c}",  // nf-fa-check
            error: "\u{f00d}",    // nf-fa-times
            info: "\u{f05a}",     // nf-fa-info_circle

            selected: "\u{f054}", // nf-fa-chevron_right
            unselected: " ",

            swatch_block: "██",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}

/// Loading spinner frames
pub struct LoadingSpinner;

impl LoadingSpinner {
    /// Braille-based smooth spinner
    pub const BRAILLE: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

    pub fn frame(tick: u64) -> &'static str {
        let idx = (tick / 4) as usize % Self::BRAILLE.len();
        Self::BRAILLE[idx]
    }
}
