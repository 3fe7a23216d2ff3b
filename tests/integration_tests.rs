//! Integration tests for syskit end-to-end functionality.

use std::fs;
use syskit::error::Error;
use syskit::stream;
use syskit::sys::{OsFamily, Sys};
use tempfile::TempDir;

/// Helper to build a host identity over a scratch home directory.
fn simulated_sys(os_name: &str) -> (TempDir, Sys) {
    let home = TempDir::new().expect("Failed to create temp home");
    let sys = Sys::from_parts(os_name, home.path());
    (home, sys)
}

#[test]
fn test_file_round_trip_across_block_sizes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("payload.bin");
    let data: Vec<u8> = (0..4097u32).map(|x| (x % 251) as u8).collect();

    // 1, a divisor of the length, and a non-divisor
    for block_size in [1, 241, 1024] {
        stream::write_to_file_blocks(&data, &path, block_size).expect("Failed to write file");
        let contents =
            stream::read_whole_file_blocks(&path, block_size).expect("Failed to read file");
        assert_eq!(contents.len(), data.len());
        assert_eq!(contents, data);
    }
}

#[test]
fn test_text_file_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("notes.txt");
    let text = "line one\nline two\nline three";

    stream::write_to_file(text, &path).expect("Failed to write file");
    let read_back = stream::read_whole_file_string(&path).expect("Failed to read file");

    assert_eq!(read_back, text);
}

#[test]
fn test_write_truncates_previous_contents() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("state.dat");

    stream::write_to_file(b"a much longer first payload", &path).expect("Failed to write file");
    stream::write_to_file(b"short", &path).expect("Failed to overwrite file");

    let contents = stream::read_whole_file(&path).expect("Failed to read file");
    assert_eq!(contents, b"short");
}

#[test]
fn test_read_whole_file_missing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("does-not-exist.bin");

    let err = stream::read_whole_file(&missing).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_windows_private_dir_layout() {
    let (home, sys) = simulated_sys("Windows 10");
    assert_eq!(sys.family(), OsFamily::Windows);
    assert!(!sys.is_unix());

    let dir = sys.private_dir("MyApp").expect("Failed to create private dir");
    assert_eq!(dir, home.path().join("AppData/Roaming").join("MyApp"));
    assert!(dir.is_dir());
}

#[test]
fn test_other_private_dir_is_hidden() {
    let (home, sys) = simulated_sys("Haiku");
    assert_eq!(sys.family(), OsFamily::Other);
    assert!(sys.is_unix());

    let dir = sys.private_dir("MyApp").expect("Failed to create private dir");
    assert_eq!(dir, home.path().join(".MyApp"));
    assert!(dir.is_dir());
}

#[test]
fn test_mac_private_file_path() {
    let (home, sys) = simulated_sys("Mac OS X");

    let file = sys
        .private_file("MyApp", "config.json")
        .expect("Failed to build private file path");

    assert_eq!(
        file,
        home.path()
            .join("Library/Application Support/MyApp/config.json")
    );
    assert!(!file.exists());
}

#[test]
fn test_private_dir_survives_repeat_calls() {
    let (home, sys) = simulated_sys("Linux");

    sys.private_dir("MyApp").expect("First call failed");
    sys.private_dir("MyApp").expect("Second call failed");

    let data_root = home.path().join(".local/share");
    let entries: Vec<_> = fs::read_dir(&data_root)
        .expect("Failed to list data root")
        .collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_private_dir_occupied_path_fails() {
    let (home, sys) = simulated_sys("Linux");
    let data_root = home.path().join(".local/share");
    fs::create_dir_all(&data_root).expect("Failed to create data root");
    fs::write(data_root.join("MyApp"), b"occupied").expect("Failed to plant file");

    let err = sys.private_dir("MyApp").unwrap_err();
    assert!(matches!(err, Error::DirUnavailable(_)));

    // The occupant is untouched
    let contents = fs::read(data_root.join("MyApp")).expect("Failed to read occupant");
    assert_eq!(contents, b"occupied");
}

#[test]
fn test_config_file_workflow() {
    // End to end: derive a private file path, write a config there in
    // blocks, read it back whole.
    let (_home, sys) = simulated_sys("Linux");

    let config_path = sys
        .private_file("MyApp", "config.json")
        .expect("Failed to build config path");
    let config = r#"{"theme":"dark","block_size":1024}"#;

    stream::write_to_file(config, &config_path).expect("Failed to write config");
    let read_back = stream::read_whole_file_string(&config_path).expect("Failed to read config");

    assert_eq!(read_back, config);
}
