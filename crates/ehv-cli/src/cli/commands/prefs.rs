//! `ehv get-pref`, `set-pref`, `settings`.

use anyhow::{bail, Context, Result};
use ehv_core::prefs::{keys, PrefValue, Preferences};

use super::super::PrefKind;

pub fn run_get_pref(prefs: Preferences, key: &str) -> Result<()> {
    match prefs.get(key) {
        Some(value) => println!("{key} = {value} ({})", value.kind()),
        None => println!("{key} is unset"),
    }
    prefs.close()?;
    Ok(())
}

fn parse_value(raw: &str, kind: PrefKind) -> Result<PrefValue> {
    Ok(match kind {
        PrefKind::Int => PrefValue::Int(
            raw.trim()
                .parse()
                .with_context(|| format!("not an integer: {raw:?}"))?,
        ),
        PrefKind::Bool => match raw.trim() {
            "true" | "1" | "yes" | "on" => PrefValue::Bool(true),
            "false" | "0" | "no" | "off" => PrefValue::Bool(false),
            other => bail!("not a boolean: {other:?}"),
        },
        PrefKind::String => PrefValue::Str(raw.to_string()),
        PrefKind::Set => PrefValue::StrSet(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        ),
    })
}

/// Keys read through the numeric-string accessors.
fn is_numeric_string_key(key: &str) -> bool {
    keys::NUMERIC_STRING_KEYS.iter().any(|(k, _, _)| *k == key)
}

pub fn run_set_pref(mut prefs: Preferences, key: &str, raw: &str, kind: PrefKind) -> Result<()> {
    if kind != PrefKind::String && is_numeric_string_key(key) {
        eprintln!("warning: {key} is read as a numeric string; use --kind string");
    }
    let value = parse_value(raw, kind)?;
    prefs.set(key, value.clone())?;
    println!("{key} = {value}");
    prefs.close()?;
    Ok(())
}

pub fn run_settings(mut prefs: Preferences) -> Result<()> {
    let rows: Vec<(&str, String)> = vec![
        ("allowed", prefs.is_allowed().to_string()),
        ("first_time", prefs.is_first_time().to_string()),
        ("cover_cache_mb", prefs.cover_disk_cache_size_mb().to_string()),
        ("screen_orientation", format!("{:?}", prefs.screen_orientation())),
        ("auto_check_for_update", prefs.auto_check_for_update().to_string()),
        ("update_server", prefs.update_server().as_str().to_string()),
        ("theme_color", format!("{:#010x}", prefs.theme_color())),
        ("default_favorite", prefs.default_favorite().to_string()),
        ("list_mode", prefs.list_mode().to_string()),
        ("default_category", format!("{:#x}", prefs.default_category())),
        ("preview_mode", prefs.preview_mode().as_str().to_string()),
        ("preview_per_row", prefs.preview_per_row().to_string()),
        ("page_scaling", prefs.page_scaling_mode().to_string()),
        ("start_position", prefs.start_position().to_string()),
        ("decode_format", prefs.decode_format().to_string()),
        ("download_path", prefs.download_path()),
        ("download_thread", prefs.download_thread().to_string()),
        ("http_retry", prefs.http_retry().to_string()),
        ("http_connect_timeout_ms", prefs.http_connect_timeout_ms().to_string()),
        ("http_read_timeout_ms", prefs.http_read_timeout_ms().to_string()),
        ("eh_min_interval", prefs.eh_min_interval().to_string()),
        ("proxy_urls", prefs.proxy_urls().len().to_string()),
    ];
    for (name, value) in rows {
        println!("{name:<24} {value}");
    }
    prefs.close()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_and_set_values() {
        assert_eq!(parse_value("yes", PrefKind::Bool).unwrap(), PrefValue::Bool(true));
        assert!(parse_value("maybe", PrefKind::Bool).is_err());
        assert!(parse_value("x", PrefKind::Int).is_err());
        let PrefValue::StrSet(set) = parse_value("b, a,,a", PrefKind::Set).unwrap() else {
            panic!("expected set");
        };
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn numeric_string_keys_are_recognized() {
        assert!(is_numeric_string_key("list_mode"));
        assert!(is_numeric_string_key(keys::DOWNLOAD_THREAD));
        assert!(!is_numeric_string_key(keys::THEME_COLOR));
    }
}
