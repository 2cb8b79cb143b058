//! Gallery directory and per-page image filenames.
//!
//! Pages are numbered from 1 on disk (`00000001.jpg`) while callers index from 0.

mod sanitize;

pub use sanitize::standardize_filename;

use std::path::{Path, PathBuf};

/// Marker file written into every downloaded gallery directory.
pub const DOWNLOAD_INFO_FILENAME: &str = ".ehviewer";

/// Image extensions probed for an existing page, in priority order.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Filename for page `index` (0-based) with the given extension.
///
/// `image_filename(0, "jpg")` → `"00000001.jpg"`.
pub fn image_filename(index: u32, extension: &str) -> String {
    format!("{:08}.{}", u64::from(index) + 1, extension)
}

/// Every filename page `index` may have been saved under, in probe order.
pub fn candidate_image_filenames(index: u32) -> Vec<String> {
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| image_filename(index, ext))
        .collect()
}

/// First existing file for page `index` inside `dir`.
pub fn find_existing_image(dir: &Path, index: u32) -> Option<PathBuf> {
    candidate_image_filenames(index)
        .into_iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Directory for a gallery: `<download_path>/<gid>` when it already exists,
/// otherwise the name produced by [`generate_gallery_dir`].
pub fn gallery_dir(download_path: &Path, gid: u64, title: &str) -> PathBuf {
    let by_gid = download_path.join(standardize_filename(&gid.to_string()));
    if by_gid.is_dir() {
        return by_gid;
    }
    generate_gallery_dir(download_path, gid, title)
}

/// `<download_path>/<gid>-<title>`, sanitized.
pub fn generate_gallery_dir(download_path: &Path, gid: u64, title: &str) -> PathBuf {
    download_path.join(standardize_filename(&format!("{gid}-{title}")))
}
