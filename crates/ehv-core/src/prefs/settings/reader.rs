use super::super::keys::*;
use super::super::Preferences;

impl Preferences {
    pub fn page_scaling_mode(&mut self) -> i32 {
        self.get_int_from_string(PAGE_SCALING, DEFAULT_PAGE_SCALING_STR, DEFAULT_PAGE_SCALING)
    }

    pub fn start_position(&mut self) -> i32 {
        self.get_int_from_string(START_POSITION, DEFAULT_START_POSITION_STR, DEFAULT_START_POSITION)
    }

    pub fn gallery_show_clock(&self) -> bool {
        self.get_bool(GALLERY_SHOW_CLOCK, DEFAULT_GALLERY_SHOW_CLOCK)
    }

    pub fn gallery_show_battery(&self) -> bool {
        self.get_bool(GALLERY_SHOW_BATTERY, DEFAULT_GALLERY_SHOW_BATTERY)
    }

    pub fn custom_codec(&self) -> bool {
        self.get_bool(CUSTOM_CODEC, DEFAULT_CUSTOM_CODEC)
    }

    pub fn decode_format(&mut self) -> i32 {
        self.get_int_from_string(DECODE_FORMAT, DEFAULT_DECODE_FORMAT_STR, DEFAULT_DECODE_FORMAT)
    }
}
