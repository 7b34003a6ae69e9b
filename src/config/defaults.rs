//! Built-in defaults shared by the config layer and the settings store.

pub const API_BASE_URL: &str = "https://www.thecolorapi.com";
pub const PALETTE_COUNT: u32 = crate::colorapi::DEFAULT_COUNT;
pub const TOAST_DURATION_MS: u64 = 2500;

pub const DEFAULT_SEED_COLOR: &str = "6366f1";
pub const DEFAULT_SCHEME: &str = "triad";

/// Harmony modes understood by The Color API.
pub const SCHEME_MODES: [&str; 8] = [
    "monochrome",
    "monochrome-dark",
    "monochrome-light",
    "analogic",
    "complement",
    "analogic-complement",
    "triad",
    "quad",
];

/// Modes the selector must always offer.
pub const REQUIRED_MODES: [&str; 2] = [DEFAULT_SCHEME, "monochrome"];
