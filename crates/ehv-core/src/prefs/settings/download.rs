//! Download location and worker settings.

use super::super::keys::*;
use super::super::{Preferences, PrefsError};

impl Preferences {
    /// Root directory for downloaded galleries.
    pub fn download_path(&self) -> String {
        self.get_string(DOWNLOAD_PATH, self.download_dir_default())
    }

    pub fn set_download_path(&mut self, path: &str) -> Result<(), PrefsError> {
        self.set_string(DOWNLOAD_PATH, path)
    }

    pub fn media_scan(&self) -> bool {
        self.get_bool(MEDIA_SCAN, DEFAULT_MEDIA_SCAN)
    }

    /// Concurrent image downloads per gallery.
    pub fn download_thread(&mut self) -> i32 {
        self.get_int_from_string(
            DOWNLOAD_THREAD,
            DEFAULT_DOWNLOAD_THREAD_STR,
            DEFAULT_DOWNLOAD_THREAD,
        )
    }
}
