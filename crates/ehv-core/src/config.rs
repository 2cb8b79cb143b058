use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// What a completed horizontal swipe does to a label row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    /// Swipe is accepted but nothing changes.
    #[default]
    None,
    /// Swipe left or right deletes the label.
    Remove,
}

/// Global configuration loaded from `~/.config/ehv/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EhvConfig {
    /// Reserved name of the built-in download label; user labels may not use it.
    pub default_label_name: String,
    /// Behaviour of a completed swipe on a label row.
    #[serde(default)]
    pub swipe_action: SwipeAction,
    /// Preferences file (None = `~/.local/state/ehv/prefs.json`).
    #[serde(default)]
    pub prefs_path: Option<PathBuf>,
    /// Label database (None = `~/.local/state/ehv/labels.db`).
    #[serde(default)]
    pub labels_db_path: Option<PathBuf>,
    /// Default download directory (None = `~/.local/share/ehv/download`).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl Default for EhvConfig {
    fn default() -> Self {
        Self {
            default_label_name: "Default".to_string(),
            swipe_action: SwipeAction::None,
            prefs_path: None,
            labels_db_path: None,
            download_dir: None,
        }
    }
}

impl EhvConfig {
    /// Download directory used when the `download_path` preference is unset.
    pub fn resolve_download_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.download_dir {
            return Ok(dir.clone());
        }
        let xdg_dirs = xdg::BaseDirectories::with_prefix("ehv")?;
        Ok(xdg_dirs.get_data_home().join("download"))
    }

    pub fn resolve_prefs_path(&self) -> Result<PathBuf> {
        match &self.prefs_path {
            Some(p) => Ok(p.clone()),
            None => crate::prefs::Preferences::default_path(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ehv")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<EhvConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = EhvConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: EhvConfig = toml::from_str(&data)?;
    Ok(cfg)
}
