//! Last-used seed color and scheme mode, persisted across sessions.

use super::Storage;
use crate::config::defaults::{DEFAULT_SCHEME, DEFAULT_SEED_COLOR};

pub const SEED_COLOR_KEY: &str = "seedColor";
pub const SCHEME_KEY: &str = "colorScheme";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Six hex digits, no leading `#`. Never validated.
    pub seed_color: String,
    pub scheme_mode: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_color: DEFAULT_SEED_COLOR.to_string(),
            scheme_mode: DEFAULT_SCHEME.to_string(),
        }
    }
}

impl Settings {
    pub fn new(seed_color: impl Into<String>, scheme_mode: impl Into<String>) -> Self {
        Self {
            seed_color: seed_color.into(),
            scheme_mode: scheme_mode.into(),
        }
    }

    /// Keep the stored scheme only if the selector still offers it.
    pub fn with_offered_scheme(mut self, offered: &[String]) -> Self {
        if !offered.iter().any(|m| *m == self.scheme_mode) {
            tracing::debug!(scheme = %self.scheme_mode, "stored scheme no longer offered");
            self.scheme_mode = DEFAULT_SCHEME.to_string();
        }
        self
    }
}

pub fn save(storage: &Storage, settings: &Settings) -> anyhow::Result<()> {
    storage.set_item(SEED_COLOR_KEY, &settings.seed_color)?;
    storage.set_item(SCHEME_KEY, &settings.scheme_mode)?;
    Ok(())
}

/// Stored values, with the built-in default for anything missing or empty.
pub fn load(storage: &Storage) -> anyhow::Result<Settings> {
    let seed_color = non_empty(storage.get_item(SEED_COLOR_KEY)?)
        .unwrap_or_else(|| DEFAULT_SEED_COLOR.to_string());
    let scheme_mode =
        non_empty(storage.get_item(SCHEME_KEY)?).unwrap_or_else(|| DEFAULT_SCHEME.to_string());
    Ok(Settings {
        seed_color,
        scheme_mode,
    })
}

pub fn reset(storage: &Storage) -> anyhow::Result<()> {
    storage.remove_item(SEED_COLOR_KEY)?;
    storage.remove_item(SCHEME_KEY)?;
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
