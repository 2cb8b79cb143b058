pub mod config;
pub mod logging;

pub mod category;
pub mod filename;
pub mod labels;
pub mod prefs;
