//! HTTP tuning and proxy endpoints.

use super::super::keys::*;
use super::super::{Preferences, PrefsError};

impl Preferences {
    pub fn http_retry(&mut self) -> i32 {
        self.get_int_from_string(HTTP_RETRY, DEFAULT_HTTP_RETRY_STR, DEFAULT_HTTP_RETRY)
    }

    pub fn http_connect_timeout_ms(&mut self) -> i32 {
        self.get_int_from_string(
            HTTP_CONNECT_TIMEOUT,
            DEFAULT_HTTP_CONNECT_TIMEOUT_STR,
            DEFAULT_HTTP_CONNECT_TIMEOUT,
        )
    }

    pub fn http_read_timeout_ms(&mut self) -> i32 {
        self.get_int_from_string(
            HTTP_READ_TIMEOUT,
            DEFAULT_HTTP_READ_TIMEOUT_STR,
            DEFAULT_HTTP_READ_TIMEOUT,
        )
    }

    /// Minimum delay between site requests, in ms.
    pub fn eh_min_interval(&mut self) -> i32 {
        self.get_int_from_string(
            EH_MIN_INTERVAL,
            DEFAULT_EH_MIN_INTERVAL_STR,
            DEFAULT_EH_MIN_INTERVAL,
        )
    }

    /// Stored proxy endpoints, or the built-in list when none are stored.
    pub fn proxy_urls(&self) -> Vec<String> {
        match self.get_string_set(PROXY_URLS) {
            Some(set) if !set.is_empty() => set.into_iter().collect(),
            _ => DEFAULT_PROXY_URLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn set_proxy_urls<I, S>(&mut self, urls: I) -> Result<(), PrefsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_string_set(PROXY_URLS, urls)
    }
}
