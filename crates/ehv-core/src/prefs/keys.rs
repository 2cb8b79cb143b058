//! Preference keys and their built-in defaults.
//!
//! Key strings are part of the on-disk format; several keep historical
//! spellings (`set_analyics`, `exculde_language`) so existing files still load.

use crate::category::ALL_CATEGORY;

// General
pub const ALLOWED: &str = "allowed";
pub const FIRST_TIME: &str = "first_time";

pub const CACHE_SIZE: &str = "cache_size";
pub const DEFAULT_CACHE_SIZE_STR: &str = "25";
pub const DEFAULT_CACHE_SIZE: i32 = 25;

pub const SCREEN_ORIENTATION: &str = "screen_orientation";
pub const DEFAULT_SCREEN_ORIENTATION_STR: &str = "0";
pub const DEFAULT_SCREEN_ORIENTATION: i32 = 0;

pub const AUTO_CHECK_FOR_UPDATE: &str = "auto_check_for_update";
pub const DEFAULT_AUTO_CHECK_FOR_UPDATE: bool = true;

pub const UPDATE_DATE: &str = "update_date";

pub const UPDATE_SERVER: &str = "update_server";
pub const DEFAULT_UPDATE_SERVER_STR: &str = "2";
pub const DEFAULT_UPDATE_SERVER: i32 = 2;

pub const RANDOM_THEME_COLOR: &str = "random_theme_color";
pub const DEFAULT_RANDOM_THEME_COLOR: bool = true;
pub const THEME_COLOR: &str = "theme_color";
pub const DEFAULT_THEME_COLOR: i32 = 0xff0099cc_u32 as i32;

pub const DEFAULT_FAVORITE: &str = "default_favorite";
pub const DEFAULT_DEFAULT_FAVORITE_STR: &str = "-2";
pub const DEFAULT_DEFAULT_FAVORITE: i32 = -2;

pub const SET_ANALYTICS: &str = "set_analyics";
pub const DEFAULT_SET_ANALYTICS: bool = false;
pub const ALLOW_ANALYTICS: &str = "allow_analyics";
pub const DEFAULT_ALLOW_ANALYTICS: bool = false;
pub const POPULAR_WARNING: &str = "popular_warning";
pub const DEFAULT_POPULAR_WARNING: bool = true;
pub const SHOW_POPULAR_UPDATE_TIME: &str = "show_popular_update_time";
pub const DEFAULT_SHOW_POPULAR_UPDATE_TIME: bool = false;

pub const TRADITIONAL_CHINESE_WARNING: &str = "traditional_chinese_warning";
pub const DEFAULT_TRADITIONAL_CHINESE_WARNING: bool = true;

// Display
pub const LIST_MODE: &str = "list_mode";
pub const DEFAULT_LIST_MODE_STR: &str = "0";
pub const DEFAULT_LIST_MODE: i32 = 0;

pub const LIST_THUMB_COLUMNS_PORTRAIT: &str = "list_thumb_columns_portrait";
pub const DEFAULT_LIST_THUMB_COLUMNS_PORTRAIT: i32 = 3;
pub const LIST_THUMB_COLUMNS_LANDSCAPE: &str = "list_thumb_columns_landscape";
pub const DEFAULT_LIST_THUMB_COLUMNS_LANDSCAPE: i32 = 5;
pub const PREVIEW_COLUMNS_PORTRAIT: &str = "preview_columns_portrait";
pub const DEFAULT_PREVIEW_COLUMNS_PORTRAIT: i32 = 3;
pub const PREVIEW_COLUMNS_LANDSCAPE: &str = "preview_columns_landscape";
pub const DEFAULT_PREVIEW_COLUMNS_LANDSCAPE: i32 = 5;

pub const VERSION_CODE: &str = "version_code";
pub const DEFAULT_VERSION_CODE: i32 = i32::MAX;

pub const GALLERY_FIRST: &str = "gallery_first";
pub const DEFAULT_GALLERY_FIRST: bool = true;

// Site mode
/// Client mode for the main gallery site.
pub const MODE_G: i32 = 0;
pub const MODE: &str = "mode";
pub const API_MODE: &str = "api_mode";
pub const LOFI_RESOLUTION: &str = "lofi_resolution";
pub const DEFAULT_LOFI_RESOLUTION: i32 = 1;

// Site config
pub const DEFAULT_CAT: &str = "default_cat";
pub const DEFAULT_DEFAULT_CAT: i32 = ALL_CATEGORY as i32;

pub const PREVIEW_MODE: &str = "preview_mode";
pub const PREVIEW_MODE_NORMAL: &str = "m";
pub const PREVIEW_MODE_LARGE: &str = "l";

/// Bit mask of excluded tag namespaces:
/// reclass 0x1, language 0x2, parody 0x4, character 0x8,
/// group 0x10, artist 0x20, male 0x40, female 0x80.
pub const EXCLUDE_TAG_GROUP: &str = "exculde_tag_group";
pub const DEFAULT_EXCLUDE_TAG_GROUP: i32 = 0;
pub const EXCLUDE_LANGUAGE: &str = "exculde_language";
pub const DEFAULT_EXCLUDE_LANGUAGE: &str = "";

pub const PREVIEW_PER_ROW: &str = "preview_per_row";
pub const DEFAULT_PREVIEW_PER_ROW_STR: &str = "3";
pub const DEFAULT_PREVIEW_PER_ROW: i32 = 3;

// Reader
pub const PAGE_SCALING: &str = "page_scaling";
pub const DEFAULT_PAGE_SCALING_STR: &str = "3";
pub const DEFAULT_PAGE_SCALING: i32 = 3;

pub const START_POSITION: &str = "start_position";
pub const DEFAULT_START_POSITION_STR: &str = "1";
pub const DEFAULT_START_POSITION: i32 = 1;

pub const GALLERY_SHOW_CLOCK: &str = "gallery_show_clock";
pub const DEFAULT_GALLERY_SHOW_CLOCK: bool = true;
pub const GALLERY_SHOW_BATTERY: &str = "gallery_show_battery";
pub const DEFAULT_GALLERY_SHOW_BATTERY: bool = true;

pub const CUSTOM_CODEC: &str = "custom_codec";
pub const DEFAULT_CUSTOM_CODEC: bool = true;

pub const DECODE_FORMAT: &str = "decode_format";
pub const DEFAULT_DECODE_FORMAT_STR: &str = "0";
pub const DEFAULT_DECODE_FORMAT: i32 = 0;

// Download
pub const DOWNLOAD_PATH: &str = "download_path";

pub const MEDIA_SCAN: &str = "media_scan";
pub const DEFAULT_MEDIA_SCAN: bool = false;

pub const DOWNLOAD_THREAD: &str = "download_thread";
pub const DEFAULT_DOWNLOAD_THREAD_STR: &str = "3";
pub const DEFAULT_DOWNLOAD_THREAD: i32 = 3;

// Advanced
pub const HTTP_RETRY: &str = "http_retry";
pub const DEFAULT_HTTP_RETRY_STR: &str = "3";
pub const DEFAULT_HTTP_RETRY: i32 = 3;

pub const HTTP_CONNECT_TIMEOUT: &str = "http_connect_timeout";
pub const DEFAULT_HTTP_CONNECT_TIMEOUT_STR: &str = "5000";
pub const DEFAULT_HTTP_CONNECT_TIMEOUT: i32 = 5000;

pub const HTTP_READ_TIMEOUT: &str = "http_read_timeout";
pub const DEFAULT_HTTP_READ_TIMEOUT_STR: &str = "5000";
pub const DEFAULT_HTTP_READ_TIMEOUT: i32 = 5000;

pub const EH_MIN_INTERVAL: &str = "eh_min_interval";
pub const DEFAULT_EH_MIN_INTERVAL_STR: &str = "0";
pub const DEFAULT_EH_MIN_INTERVAL: i32 = 0;

pub const PROXY_URLS: &str = "proxy_urls";
pub const DEFAULT_PROXY_URLS: [&str; 16] = [
    "http://proxyy0000.appsp0t.com/proxy",
    "http://proxyy0001.appsp0t.com/proxy",
    "http://proxyy0002.appsp0t.com/proxy",
    "http://proxyy0003.appsp0t.com/proxy",
    "http://proxyy0004.appsp0t.com/proxy",
    "http://proxyy0005.appsp0t.com/proxy",
    "http://proxyy0006.appsp0t.com/proxy",
    "http://proxyy0007.appsp0t.com/proxy",
    "http://proxyy0008.appsp0t.com/proxy",
    "http://proxyy0009.appsp0t.com/proxy",
    "http://proxyy000a.appsp0t.com/proxy",
    "http://proxyy000b.appsp0t.com/proxy",
    "http://proxyy000c.appsp0t.com/proxy",
    "http://proxyy000d.appsp0t.com/proxy",
    "http://proxyy000e.appsp0t.com/proxy",
    "http://proxyy000f.appsp0t.com/proxy",
];

/// Every integer-from-string key with its canonical default string and value.
pub const NUMERIC_STRING_KEYS: &[(&str, &str, i32)] = &[
    (CACHE_SIZE, DEFAULT_CACHE_SIZE_STR, DEFAULT_CACHE_SIZE),
    (SCREEN_ORIENTATION, DEFAULT_SCREEN_ORIENTATION_STR, DEFAULT_SCREEN_ORIENTATION),
    (UPDATE_SERVER, DEFAULT_UPDATE_SERVER_STR, DEFAULT_UPDATE_SERVER),
    (DEFAULT_FAVORITE, DEFAULT_DEFAULT_FAVORITE_STR, DEFAULT_DEFAULT_FAVORITE),
    (LIST_MODE, DEFAULT_LIST_MODE_STR, DEFAULT_LIST_MODE),
    (PREVIEW_PER_ROW, DEFAULT_PREVIEW_PER_ROW_STR, DEFAULT_PREVIEW_PER_ROW),
    (PAGE_SCALING, DEFAULT_PAGE_SCALING_STR, DEFAULT_PAGE_SCALING),
    (START_POSITION, DEFAULT_START_POSITION_STR, DEFAULT_START_POSITION),
    (DECODE_FORMAT, DEFAULT_DECODE_FORMAT_STR, DEFAULT_DECODE_FORMAT),
    (DOWNLOAD_THREAD, DEFAULT_DOWNLOAD_THREAD_STR, DEFAULT_DOWNLOAD_THREAD),
    (HTTP_RETRY, DEFAULT_HTTP_RETRY_STR, DEFAULT_HTTP_RETRY),
    (HTTP_CONNECT_TIMEOUT, DEFAULT_HTTP_CONNECT_TIMEOUT_STR, DEFAULT_HTTP_CONNECT_TIMEOUT),
    (HTTP_READ_TIMEOUT, DEFAULT_HTTP_READ_TIMEOUT_STR, DEFAULT_HTTP_READ_TIMEOUT),
    (EH_MIN_INTERVAL, DEFAULT_EH_MIN_INTERVAL_STR, DEFAULT_EH_MIN_INTERVAL),
];
