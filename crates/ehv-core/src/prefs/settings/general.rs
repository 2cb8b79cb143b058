//! First-run, update, theme, favorites and analytics settings.

use super::super::keys::*;
use super::super::{Preferences, PrefsError};
use super::{ScreenOrientation, UpdateServer};

impl Preferences {
    /// Whether the user accepted the launch notice.
    pub fn is_allowed(&self) -> bool {
        self.get_bool(ALLOWED, false)
    }

    pub fn set_allowed(&mut self) -> Result<(), PrefsError> {
        self.set_bool(ALLOWED, true)
    }

    pub fn is_first_time(&self) -> bool {
        self.get_bool(FIRST_TIME, true)
    }

    pub fn set_first_time_done(&mut self) -> Result<(), PrefsError> {
        self.set_bool(FIRST_TIME, false)
    }

    /// Cover disk cache size in MB.
    pub fn cover_disk_cache_size_mb(&mut self) -> i32 {
        self.get_int_from_string(CACHE_SIZE, DEFAULT_CACHE_SIZE_STR, DEFAULT_CACHE_SIZE)
    }

    pub fn screen_orientation(&mut self) -> ScreenOrientation {
        let index = self.get_int_from_string(
            SCREEN_ORIENTATION,
            DEFAULT_SCREEN_ORIENTATION_STR,
            DEFAULT_SCREEN_ORIENTATION,
        );
        ScreenOrientation::from_index(index)
    }

    pub fn auto_check_for_update(&self) -> bool {
        self.get_bool(AUTO_CHECK_FOR_UPDATE, DEFAULT_AUTO_CHECK_FOR_UPDATE)
    }

    pub fn set_auto_check_for_update(&mut self, value: bool) -> Result<(), PrefsError> {
        self.set_bool(AUTO_CHECK_FOR_UPDATE, value)
    }

    /// Date of the last update check, as `yyyymmdd`.
    pub fn update_date(&self) -> i32 {
        self.get_int(UPDATE_DATE, 0)
    }

    pub fn set_update_date(&mut self, date: i32) -> Result<(), PrefsError> {
        self.set_int(UPDATE_DATE, date)
    }

    pub fn update_server(&mut self) -> UpdateServer {
        let index =
            self.get_int_from_string(UPDATE_SERVER, DEFAULT_UPDATE_SERVER_STR, DEFAULT_UPDATE_SERVER);
        UpdateServer::from_index(index)
    }

    pub fn random_theme_color(&self) -> bool {
        self.get_bool(RANDOM_THEME_COLOR, DEFAULT_RANDOM_THEME_COLOR)
    }

    /// Theme color as packed ARGB.
    pub fn theme_color(&self) -> i32 {
        self.get_int(THEME_COLOR, DEFAULT_THEME_COLOR)
    }

    pub fn set_theme_color(&mut self, argb: i32) -> Result<(), PrefsError> {
        self.set_int(THEME_COLOR, argb)
    }

    /// Favorite slot used by one-tap favoriting; negative values mean "ask".
    pub fn default_favorite(&mut self) -> i32 {
        self.get_int_from_string(
            DEFAULT_FAVORITE,
            DEFAULT_DEFAULT_FAVORITE_STR,
            DEFAULT_DEFAULT_FAVORITE,
        )
    }

    pub fn set_default_favorite(&mut self, slot: i32) -> Result<(), PrefsError> {
        self.set_string(DEFAULT_FAVORITE, &slot.to_string())
    }

    /// Whether the user has answered the analytics prompt.
    pub fn analytics_asked(&self) -> bool {
        self.get_bool(SET_ANALYTICS, DEFAULT_SET_ANALYTICS)
    }

    pub fn set_analytics_asked(&mut self, value: bool) -> Result<(), PrefsError> {
        self.set_bool(SET_ANALYTICS, value)
    }

    pub fn allow_analytics(&self) -> bool {
        self.get_bool(ALLOW_ANALYTICS, DEFAULT_ALLOW_ANALYTICS)
    }

    /// Turning analytics off re-arms the popular-list warning.
    pub fn set_allow_analytics(&mut self, value: bool) -> Result<(), PrefsError> {
        self.set_bool(ALLOW_ANALYTICS, value)?;
        if !value {
            self.set_popular_warning(true)?;
        }
        Ok(())
    }

    pub fn popular_warning(&self) -> bool {
        self.get_bool(POPULAR_WARNING, DEFAULT_POPULAR_WARNING)
    }

    pub fn set_popular_warning(&mut self, value: bool) -> Result<(), PrefsError> {
        self.set_bool(POPULAR_WARNING, value)
    }

    pub fn show_popular_update_time(&self) -> bool {
        self.get_bool(SHOW_POPULAR_UPDATE_TIME, DEFAULT_SHOW_POPULAR_UPDATE_TIME)
    }

    pub fn traditional_chinese_warning(&self) -> bool {
        self.get_bool(TRADITIONAL_CHINESE_WARNING, DEFAULT_TRADITIONAL_CHINESE_WARNING)
    }

    pub fn set_traditional_chinese_warning(&mut self, value: bool) -> Result<(), PrefsError> {
        self.set_bool(TRADITIONAL_CHINESE_WARNING, value)
    }
}
