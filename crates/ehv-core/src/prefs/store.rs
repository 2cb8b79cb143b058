//! In-memory preference map with write-through JSON persistence.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use super::error::PrefsError;
use super::value::PrefValue;

/// Handle to the preference document.
///
/// Every `set_*` updates memory first and then writes the whole document, so a
/// later `get_*` sees the value even if the write failed.
#[derive(Debug)]
pub struct Preferences {
    path: PathBuf,
    entries: BTreeMap<String, PrefValue>,
    download_dir_default: String,
}

impl Preferences {
    /// Default path for the preference file: `~/.local/state/ehv/prefs.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("ehv")?;
        Ok(xdg_dirs.get_state_home().join("prefs.json"))
    }

    /// Open the preference document at `path`.
    ///
    /// A missing file starts empty. A file that is not a JSON object is logged
    /// and replaced by an empty document on the next write; inside a readable
    /// document only the entries that fit no [`PrefValue`] are dropped.
    /// `download_dir_default` is the value `download_path()` reports until the
    /// user sets one.
    pub fn init(
        path: impl AsRef<Path>,
        download_dir_default: impl Into<String>,
    ) -> Result<Self, PrefsError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PrefsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let entries = match std::fs::read(&path) {
            Ok(bytes) => parse_entries(&path, &bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(PrefsError::Io { path, source }),
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "preferences loaded");
        Ok(Self {
            path,
            entries,
            download_dir_default: download_dir_default.into(),
        })
    }

    /// Flush and release the handle.
    pub fn close(self) -> Result<(), PrefsError> {
        self.flush()?;
        tracing::debug!(path = %self.path.display(), "preferences closed");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn download_dir_default(&self) -> &str {
        &self.download_dir_default
    }

    /// Write the current document to disk.
    ///
    /// The document goes to `<path>.tmp` first and is renamed over `path`, so a
    /// crash mid-write leaves the previous document intact.
    pub fn flush(&self) -> Result<(), PrefsError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        let temp_path = temp_path(&self.path);
        std::fs::write(&temp_path, json).map_err(|source| PrefsError::Io {
            path: temp_path.clone(),
            source,
        })?;
        std::fs::rename(&temp_path, &self.path).map_err(|source| PrefsError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Raw stored value, if any.
    pub fn get(&self, key: &str) -> Option<&PrefValue> {
        self.entries.get(key)
    }

    /// Store a raw value and persist.
    pub fn set(&mut self, key: &str, value: PrefValue) -> Result<(), PrefsError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    /// Drop a key and persist. Returns whether the key existed.
    pub fn remove(&mut self, key: &str) -> Result<bool, PrefsError> {
        let existed = self.entries.remove(key).is_some();
        if existed {
            self.flush()?;
        }
        Ok(existed)
    }

    /// All stored entries, in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &PrefValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.entries.get(key) {
            Some(PrefValue::Int(v)) => *v,
            Some(other) => mismatch(key, "int", other, default),
            None => default,
        }
    }

    pub fn set_int(&mut self, key: &str, value: i32) -> Result<(), PrefsError> {
        self.set(key, PrefValue::Int(value))
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.entries.get(key) {
            Some(PrefValue::Bool(v)) => *v,
            Some(other) => mismatch(key, "bool", other, default),
            None => default,
        }
    }

    pub fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PrefsError> {
        self.set(key, PrefValue::Bool(value))
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        match self.entries.get(key) {
            Some(PrefValue::Str(v)) => v.clone(),
            Some(other) => mismatch(key, "string", other, default.to_string()),
            None => default.to_string(),
        }
    }

    pub fn set_string(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.set(key, PrefValue::Str(value.to_string()))
    }

    /// Stored string set, or None when absent or stored with another type.
    pub fn get_string_set(&self, key: &str) -> Option<BTreeSet<String>> {
        match self.entries.get(key) {
            Some(PrefValue::StrSet(v)) => Some(v.clone()),
            Some(other) => mismatch(key, "set", other, None),
            None => None,
        }
    }

    pub fn set_string_set<I, S>(&mut self, key: &str, values: I) -> Result<(), PrefsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = values.into_iter().map(Into::into).collect();
        self.set(key, PrefValue::StrSet(set))
    }

    /// Integer stored as a string.
    ///
    /// Absent keys yield `default`. A stored string that does not parse, or a
    /// value stored under another type, yields `default` and is overwritten
    /// with `default_str`; a failed rewrite is logged, not returned.
    pub fn get_int_from_string(&mut self, key: &str, default_str: &str, default: i32) -> i32 {
        match self.entries.get(key) {
            None => return default,
            Some(PrefValue::Str(s)) => match s.trim().parse::<i32>() {
                Ok(v) => return v,
                Err(_) => tracing::warn!(
                    key,
                    "stored value is not an integer, restoring default {}",
                    default_str
                ),
            },
            Some(other) => {
                mismatch(key, "string", other, ());
            }
        }

        if let Err(e) = self.set_string(key, default_str) {
            tracing::warn!(key, "could not persist restored default: {}", e);
        }
        default
    }
}

/// Decode the stored document entry by entry.
fn parse_entries(path: &Path, bytes: &[u8]) -> BTreeMap<String, PrefValue> {
    let raw = match serde_json::from_slice::<BTreeMap<String, serde_json::Value>>(bytes) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(path = %path.display(), "discarding unreadable preferences: {}", e);
            return BTreeMap::new();
        }
    };

    raw.into_iter()
        .filter_map(|(key, value)| match PrefValue::deserialize(value) {
            Ok(v) => Some((key, v)),
            Err(e) => {
                tracing::warn!(key = %key, "dropping unreadable preference: {}", e);
                None
            }
        })
        .collect()
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn mismatch<T>(key: &str, wanted: &str, found: &PrefValue, default: T) -> T {
    tracing::debug!(
        key,
        wanted,
        found = found.kind(),
        "preference type mismatch, using default"
    );
    default
}
