//! Typed accessors over the raw preference map, grouped by settings screen.

mod advanced;
mod display;
mod download;
mod general;
mod reader;

/// Requested screen orientation for the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenOrientation {
    Portrait,
    Landscape,
    Unspecified,
}

impl ScreenOrientation {
    /// Map the stored menu index; unknown indices fall back to portrait.
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => ScreenOrientation::Landscape,
            2 => ScreenOrientation::Unspecified,
            _ => ScreenOrientation::Portrait,
        }
    }
}

/// Mirror used for update checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateServer {
    Google,
    Qiniu,
}

impl UpdateServer {
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => UpdateServer::Qiniu,
            _ => UpdateServer::Google,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UpdateServer::Google => "google",
            UpdateServer::Qiniu => "qiniu",
        }
    }
}

/// Thumbnail size on the gallery detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMode {
    Normal,
    Large,
}

impl PreviewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PreviewMode::Normal => super::keys::PREVIEW_MODE_NORMAL,
            PreviewMode::Large => super::keys::PREVIEW_MODE_LARGE,
        }
    }
}
