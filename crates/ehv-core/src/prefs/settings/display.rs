//! Gallery list layout, site mode and search filter settings.

use super::super::keys::*;
use super::super::{Preferences, PrefsError};
use super::PreviewMode;

impl Preferences {
    /// Gallery list layout index (0 = detail list, 1 = thumbnails).
    pub fn list_mode(&mut self) -> i32 {
        self.get_int_from_string(LIST_MODE, DEFAULT_LIST_MODE_STR, DEFAULT_LIST_MODE)
    }

    pub fn set_list_mode(&mut self, mode: i32) -> Result<(), PrefsError> {
        self.set_string(LIST_MODE, &mode.to_string())
    }

    pub fn list_thumb_columns_portrait(&self) -> i32 {
        self.get_int(LIST_THUMB_COLUMNS_PORTRAIT, DEFAULT_LIST_THUMB_COLUMNS_PORTRAIT)
    }

    pub fn list_thumb_columns_landscape(&self) -> i32 {
        self.get_int(LIST_THUMB_COLUMNS_LANDSCAPE, DEFAULT_LIST_THUMB_COLUMNS_LANDSCAPE)
    }

    pub fn preview_columns_portrait(&self) -> i32 {
        self.get_int(PREVIEW_COLUMNS_PORTRAIT, DEFAULT_PREVIEW_COLUMNS_PORTRAIT)
    }

    pub fn preview_columns_landscape(&self) -> i32 {
        self.get_int(PREVIEW_COLUMNS_LANDSCAPE, DEFAULT_PREVIEW_COLUMNS_LANDSCAPE)
    }

    pub fn version_code(&self) -> i32 {
        self.get_int(VERSION_CODE, DEFAULT_VERSION_CODE)
    }

    pub fn set_version_code(&mut self, code: i32) -> Result<(), PrefsError> {
        self.set_int(VERSION_CODE, code)
    }

    pub fn gallery_first(&self) -> bool {
        self.get_bool(GALLERY_FIRST, DEFAULT_GALLERY_FIRST)
    }

    pub fn set_gallery_first(&mut self, value: bool) -> Result<(), PrefsError> {
        self.set_bool(GALLERY_FIRST, value)
    }

    pub fn mode(&self) -> i32 {
        self.get_int(MODE, MODE_G)
    }

    pub fn set_mode(&mut self, mode: i32) -> Result<(), PrefsError> {
        self.set_int(MODE, mode)
    }

    pub fn api_mode(&self) -> i32 {
        self.get_int(API_MODE, MODE_G)
    }

    pub fn set_api_mode(&mut self, mode: i32) -> Result<(), PrefsError> {
        self.set_int(API_MODE, mode)
    }

    pub fn lofi_resolution(&self) -> i32 {
        self.get_int(LOFI_RESOLUTION, DEFAULT_LOFI_RESOLUTION)
    }

    pub fn set_lofi_resolution(&mut self, resolution: i32) -> Result<(), PrefsError> {
        self.set_int(LOFI_RESOLUTION, resolution)
    }

    /// Category bit mask preselected in search.
    pub fn default_category(&self) -> i32 {
        self.get_int(DEFAULT_CAT, DEFAULT_DEFAULT_CAT)
    }

    pub fn set_default_category(&mut self, mask: i32) -> Result<(), PrefsError> {
        self.set_int(DEFAULT_CAT, mask)
    }

    /// Unrecognized stored values read as `Large`.
    pub fn preview_mode(&self) -> PreviewMode {
        match self.get_string(PREVIEW_MODE, PREVIEW_MODE_LARGE).as_str() {
            PREVIEW_MODE_NORMAL => PreviewMode::Normal,
            _ => PreviewMode::Large,
        }
    }

    pub fn set_preview_mode(&mut self, mode: PreviewMode) -> Result<(), PrefsError> {
        self.set_string(PREVIEW_MODE, mode.as_str())
    }

    pub fn exclude_tag_group(&self) -> i32 {
        self.get_int(EXCLUDE_TAG_GROUP, DEFAULT_EXCLUDE_TAG_GROUP)
    }

    pub fn set_exclude_tag_group(&mut self, mask: i32) -> Result<(), PrefsError> {
        self.set_int(EXCLUDE_TAG_GROUP, mask)
    }

    /// Comma-separated language codes hidden from results.
    pub fn exclude_language(&self) -> String {
        self.get_string(EXCLUDE_LANGUAGE, DEFAULT_EXCLUDE_LANGUAGE)
    }

    pub fn set_exclude_language(&mut self, value: &str) -> Result<(), PrefsError> {
        self.set_string(EXCLUDE_LANGUAGE, value)
    }

    pub fn preview_per_row(&mut self) -> i32 {
        self.get_int_from_string(
            PREVIEW_PER_ROW,
            DEFAULT_PREVIEW_PER_ROW_STR,
            DEFAULT_PREVIEW_PER_ROW,
        )
    }
}
