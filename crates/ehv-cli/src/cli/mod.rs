//! CLI for the EHV gallery client.

mod commands;
mod console_view;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use ehv_core::config::{self, EhvConfig};
use ehv_core::labels::{LabelDb, SwipeResult};
use ehv_core::prefs::Preferences;

use commands::{
    run_add_label, run_category, run_gallery_dir, run_get_pref, run_image_name, run_labels,
    run_move_label, run_set_pref, run_settings, run_swipe_label,
};

/// Top-level CLI for the EHV gallery client.
#[derive(Debug, Parser)]
#[command(name = "ehv")]
#[command(about = "EHV: gallery client preferences and download labels", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Direction a swipe gesture ended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SwipeDirection {
    Left,
    Right,
    Cancel,
}

impl From<SwipeDirection> for SwipeResult {
    fn from(d: SwipeDirection) -> Self {
        match d {
            SwipeDirection::Left => SwipeResult::SwipedLeft,
            SwipeDirection::Right => SwipeResult::SwipedRight,
            SwipeDirection::Cancel => SwipeResult::Canceled,
        }
    }
}

/// Type used when writing a raw preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrefKind {
    Int,
    Bool,
    String,
    /// Comma-separated values stored as a string set.
    Set,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List download labels in display order.
    Labels,

    /// Create a download label.
    AddLabel {
        /// Label text.
        text: String,
    },

    /// Move a label from one position to another (0-based).
    MoveLabel { from: usize, to: usize },

    /// Swipe the label row at a position (0-based).
    SwipeLabel {
        position: usize,
        #[arg(long, value_enum, default_value = "left")]
        direction: SwipeDirection,
    },

    /// Print a stored preference.
    GetPref { key: String },

    /// Store a preference.
    ///
    /// Numeric settings such as `download_thread` or `list_mode` are stored as
    /// strings; keep the default `--kind string` for them or they read back as
    /// their default.
    SetPref {
        key: String,
        value: String,
        #[arg(long, value_enum, default_value = "string")]
        kind: PrefKind,
    },

    /// Show every typed setting with its effective value.
    Settings,

    /// Look up a category by name or by code (decimal or 0x-prefixed hex).
    Category { query: String },

    /// Print the filename(s) for a gallery page (0-based index).
    ImageName {
        index: u32,
        /// Extension; when omitted, every probed candidate is listed.
        #[arg(long)]
        ext: Option<String>,
        /// Directory to probe for an existing page file.
        #[arg(long)]
        dir: Option<std::path::PathBuf>,
    },

    /// Print the download directory for a gallery.
    GalleryDir { gid: u64, title: String },
}

async fn open_labels(cfg: &EhvConfig) -> Result<LabelDb> {
    match &cfg.labels_db_path {
        Some(path) => LabelDb::open_at(path).await,
        None => LabelDb::open_default().await,
    }
}

fn open_prefs(cfg: &EhvConfig) -> Result<Preferences> {
    let path = cfg.resolve_prefs_path()?;
    let download_dir = cfg.resolve_download_dir()?;
    Ok(Preferences::init(path, download_dir.to_string_lossy())?)
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Labels => run_labels(open_labels(&cfg).await?, &cfg).await?,
            CliCommand::AddLabel { text } => {
                run_add_label(open_labels(&cfg).await?, &cfg, &text).await?
            }
            CliCommand::MoveLabel { from, to } => {
                run_move_label(open_labels(&cfg).await?, &cfg, from, to).await?
            }
            CliCommand::SwipeLabel {
                position,
                direction,
            } => {
                run_swipe_label(open_labels(&cfg).await?, &cfg, position, direction.into())
                    .await?
            }
            CliCommand::GetPref { key } => run_get_pref(open_prefs(&cfg)?, &key)?,
            CliCommand::SetPref { key, value, kind } => {
                run_set_pref(open_prefs(&cfg)?, &key, &value, kind)?
            }
            CliCommand::Settings => run_settings(open_prefs(&cfg)?)?,
            CliCommand::Category { query } => run_category(&query),
            CliCommand::ImageName { index, ext, dir } => {
                run_image_name(index, ext.as_deref(), dir.as_deref())
            }
            CliCommand::GalleryDir { gid, title } => {
                run_gallery_dir(open_prefs(&cfg)?, gid, &title)?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
