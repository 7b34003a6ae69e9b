mod app;
mod colorapi;
mod config;
mod input;
mod storage;
mod toast;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "swatchbook", version, about = "Color palette generator TUI")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Fetch a palette and print one color per line (headless).
    Scheme {
        /// Seed color, six hex digits with or without `#`. Defaults to the saved seed.
        #[arg(long)]
        hex: Option<String>,
        /// Harmony mode. Defaults to the saved scheme.
        #[arg(long)]
        mode: Option<String>,
        /// Number of colors. Defaults to `api.count` from the config.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        count: Option<u32>,
        /// Persist the seed color and mode as the last-used settings.
        #[arg(long)]
        save: bool,
    },
    /// List the harmony modes the selector offers.
    Modes,
    /// Inspect or clear the saved seed color and scheme.
    Settings {
        #[command(subcommand)]
        cmd: SettingsCommand,
    },
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// Print the saved seed color and scheme.
    Show,
    /// Forget the saved seed color and scheme.
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let command = cli.command.unwrap_or(Command::Tui);

    init_logging(&cfg, matches!(command, Command::Tui))?;

    match command {
        Command::Tui => {
            let clipboard = Arc::new(toast::SystemClipboard::new());
            let mut app = app::App::new(cfg, clipboard)?;
            let mut terminal = tui::TerminalGuard::enter().context("init terminal")?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Scheme {
            hex,
            mode,
            count,
            save,
        } => {
            let store = storage::Storage::open(&cfg.store_path())?;
            let saved = storage::settings::load(&store)?;
            let request = scheme_request(saved, &cfg.palette.modes, hex, mode);
            let count = count.unwrap_or(cfg.api.count);

            if save {
                storage::settings::save(&store, &request).context("save settings")?;
            }

            let client = colorapi::ColorApiClient::from_config(&cfg.api)?;
            let storage::Settings {
                seed_color,
                scheme_mode: mode,
            } = request;
            let colors = client
                .fetch_palette(&seed_color, &mode, count)
                .await
                .with_context(|| format!("fetch {mode} scheme for #{seed_color}"))?;
            for color in colors {
                println!("{color}");
            }
        }
        Command::Modes => {
            for mode in &cfg.palette.modes {
                println!("{mode}");
            }
        }
        Command::Settings { cmd } => {
            let store = storage::Storage::open(&cfg.store_path())?;
            match cmd {
                SettingsCommand::Show => {
                    let saved = storage::settings::load(&store)?;
                    println!("seed color: #{}", saved.seed_color);
                    println!("scheme:     {}", saved.scheme_mode);
                }
                SettingsCommand::Reset => {
                    storage::settings::reset(&store).context("reset settings")?;
                    println!("Cleared saved settings.");
                }
            }
        }
    }

    Ok(())
}

/// Seed color and mode for a headless fetch: explicit flags win, otherwise
/// the saved settings, with a no-longer-offered saved mode replaced by the
/// default.
fn scheme_request(
    saved: storage::Settings,
    offered: &[String],
    hex: Option<String>,
    mode: Option<String>,
) -> storage::Settings {
    let saved = saved.with_offered_scheme(offered);
    let seed_color = hex
        .map(|h| h.trim_start_matches('#').to_string())
        .unwrap_or(saved.seed_color);
    let scheme_mode = mode.unwrap_or(saved.scheme_mode);
    storage::Settings::new(seed_color, scheme_mode)
}

/// The TUI owns the terminal, so its logs go to a file under the data dir.
fn init_logging(cfg: &config::Config, tui: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if tui {
        let path = cfg.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open log file {}", path.display()))?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::SCHEME_MODES;
    use crate::storage::Settings;

    fn offered() -> Vec<String> {
        SCHEME_MODES.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_scheme_request_drops_unoffered_saved_mode() {
        let req = scheme_request(Settings::new("abcdef", "rainbow"), &offered(), None, None);
        assert_eq!(req, Settings::new("abcdef", "triad"));
    }

    #[test]
    fn test_scheme_request_flags_override_saved() {
        let saved = Settings::new("abcdef", "quad");
        let req = scheme_request(
            saved.clone(),
            &offered(),
            Some("#1A2B3C".into()),
            Some("analogic".into()),
        );
        assert_eq!(req, Settings::new("1A2B3C", "analogic"));

        let req = scheme_request(saved, &offered(), None, None);
        assert_eq!(req, Settings::new("abcdef", "quad"));
    }

    #[test]
    fn test_scheme_count_must_be_positive() {
        assert!(Cli::try_parse_from(["swatchbook", "scheme", "--count", "0"]).is_err());

        let cli = Cli::try_parse_from(["swatchbook", "scheme", "--count", "3"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Scheme { count: Some(3), .. })));
    }
}
