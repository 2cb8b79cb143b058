//! CLI command handlers, one file per command group.

mod category;
mod image_name;
mod labels;
mod prefs;

pub use category::run_category;
pub use image_name::{run_gallery_dir, run_image_name};
pub use labels::{run_add_label, run_labels, run_move_label, run_swipe_label};
pub use prefs::{run_get_pref, run_set_pref, run_settings};
