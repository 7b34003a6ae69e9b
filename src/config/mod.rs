use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub paths: PathsConfig,
    pub api: ApiConfig,
    pub palette: PaletteConfig,
    pub toast: ToastConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of The Color API (without the `/scheme` path).
    pub base_url: String,
    /// Number of colors requested per palette.
    pub count: u32,
    /// Optional request timeout; unset means no client-side timeout.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Harmony modes offered by the scheme selector, in display order.
    pub modes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// How long a toast stays visible, in milliseconds.
    pub duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            paths: PathsConfig::default(),
            api: ApiConfig::default(),
            palette: PaletteConfig::default(),
            toast: ToastConfig::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let proj = ProjectDirs::from("dev", "swatchbook", "swatchbook");
        let data_dir = proj
            .as_ref()
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("swatchbook"));
        Self { data_dir }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_BASE_URL.to_string(),
            count: defaults::PALETTE_COUNT,
            timeout_secs: None,
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            modes: defaults::SCHEME_MODES.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: defaults::TOAST_DURATION_MS,
        }
    }
}

impl Config {
    pub fn toast_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.toast.duration_ms)
    }

    pub fn store_path(&self) -> PathBuf {
        self.paths.data_dir.join("swatchbook.sqlite3")
    }

    pub fn log_path(&self) -> PathBuf {
        self.paths.data_dir.join("swatchbook.log")
    }

    /// Reject configs the UI cannot work with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api.count == 0 {
            anyhow::bail!("api.count must be at least 1");
        }
        for required in defaults::REQUIRED_MODES {
            if !self.palette.modes.iter().any(|m| m == required) {
                anyhow::bail!("palette.modes must include \"{required}\"");
            }
        }
        Ok(())
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
    restrict_permissions(&path);
    Ok(())
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "swatchbook", "swatchbook")
        .context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = Config::default();
        save(&cfg, Some(&path)).context("write default config")?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

fn restrict_permissions(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    #[cfg(not(unix))]
    let _ = path;
}
