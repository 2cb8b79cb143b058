//! Persisted key-value preferences.
//!
//! A `Preferences` handle is opened explicitly with [`Preferences::init`] and
//! released with [`Preferences::close`]; callers pass it by reference instead of
//! reaching for a global. Values live in memory and every write is flushed to a
//! JSON document on disk, so reads never block on I/O.
//!
//! Numeric settings that are stored as strings (thread counts, timeouts, list
//! mode, ...) fail closed: an unparsable value yields the built-in default and
//! the stored entry is rewritten with the default string.

mod error;
pub mod keys;
mod settings;
mod store;
mod value;

pub use error::PrefsError;
pub use settings::{PreviewMode, ScreenOrientation, UpdateServer};
pub use store::Preferences;
pub use value::PrefValue;
