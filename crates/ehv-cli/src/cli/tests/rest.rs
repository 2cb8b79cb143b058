//! Tests for preference, category and filename subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand, PrefKind};
use clap::CommandFactory;

#[test]
fn cli_parse_get_pref() {
    match parse(&["ehv", "get-pref", "download_thread"]) {
        CliCommand::GetPref { key } => assert_eq!(key, "download_thread"),
        _ => panic!("expected GetPref"),
    }
}

#[test]
fn cli_parse_set_pref_default_kind_is_string() {
    match parse(&["ehv", "set-pref", "http_retry", "5"]) {
        CliCommand::SetPref { key, value, kind } => {
            assert_eq!(key, "http_retry");
            assert_eq!(value, "5");
            assert_eq!(kind, PrefKind::String);
        }
        _ => panic!("expected SetPref"),
    }
}

#[test]
fn set_pref_help_says_numeric_keys_take_strings() {
    let cmd = Cli::command();
    let set_pref = cmd.find_subcommand("set-pref").unwrap();
    let help = set_pref.get_long_about().unwrap().to_string();
    assert!(help.contains("--kind string"), "{help}");
}

#[test]
fn cli_parse_set_pref_kind() {
    match parse(&["ehv", "set-pref", "media_scan", "true", "--kind", "bool"]) {
        CliCommand::SetPref { kind, .. } => assert_eq!(kind, PrefKind::Bool),
        _ => panic!("expected SetPref"),
    }
}

#[test]
fn cli_parse_settings() {
    assert!(matches!(parse(&["ehv", "settings"]), CliCommand::Settings));
}

#[test]
fn cli_parse_category() {
    match parse(&["ehv", "category", "0x8"]) {
        CliCommand::Category { query } => assert_eq!(query, "0x8"),
        _ => panic!("expected Category"),
    }
}

#[test]
fn cli_parse_image_name() {
    match parse(&["ehv", "image-name", "99", "--ext", "png"]) {
        CliCommand::ImageName { index, ext, dir } => {
            assert_eq!(index, 99);
            assert_eq!(ext.as_deref(), Some("png"));
            assert!(dir.is_none());
        }
        _ => panic!("expected ImageName"),
    }
}

#[test]
fn cli_parse_gallery_dir() {
    match parse(&["ehv", "gallery-dir", "618395", "Some Title"]) {
        CliCommand::GalleryDir { gid, title } => {
            assert_eq!(gid, 618395);
            assert_eq!(title, "Some Title");
        }
        _ => panic!("expected GalleryDir"),
    }
}
