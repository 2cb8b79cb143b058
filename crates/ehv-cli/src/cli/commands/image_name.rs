//! `ehv image-name` and `ehv gallery-dir`.

use anyhow::Result;
use ehv_core::filename::{
    candidate_image_filenames, find_existing_image, gallery_dir, image_filename,
};
use ehv_core::prefs::Preferences;
use std::path::Path;

pub fn run_image_name(index: u32, ext: Option<&str>, dir: Option<&Path>) {
    if let Some(dir) = dir {
        match find_existing_image(dir, index) {
            Some(path) => println!("{}", path.display()),
            None => println!("No image for page {index} in {}", dir.display()),
        }
        return;
    }
    match ext {
        Some(ext) => println!("{}", image_filename(index, ext)),
        None => {
            for name in candidate_image_filenames(index) {
                println!("{name}");
            }
        }
    }
}

pub fn run_gallery_dir(prefs: Preferences, gid: u64, title: &str) -> Result<()> {
    let root = prefs.download_path();
    println!("{}", gallery_dir(Path::new(&root), gid, title).display());
    prefs.close()?;
    Ok(())
}
