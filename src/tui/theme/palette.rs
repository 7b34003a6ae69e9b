//! UI chrome colors. Swatches draw with their own colors.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color,
    pub bg_highlight: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    /// Grayscale chrome so palettes are judged without a tinted frame.
    pub const MONO: Self = Self {
        bg_primary: Color::Rgb(0, 0, 0),         // #000000
        bg_highlight: Color::Rgb(48, 48, 48),    // #303030
        fg_primary: Color::Rgb(255, 255, 255),   // #ffffff
        fg_secondary: Color::Rgb(136, 136, 136), // #888888
        accent: Color::Rgb(255, 255, 255),       // #ffffff
        border: Color::Rgb(64, 64, 64),          // #404040
        success: Color::Rgb(200, 200, 200),      // #c8c8c8
        error: Color::Rgb(255, 255, 255),        // #ffffff, distinguished by icon
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::MONO
    }
}

/// Black or white, whichever reads better on `(r, g, b)`.
pub fn contrast_fg(r: u8, g: u8, b: u8) -> Color {
    // Rec. 601 luma
    let luma = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
    if luma > 140.0 {
        Color::Rgb(0, 0, 0)
    } else {
        Color::Rgb(255, 255, 255)
    }
}
