// mfinfo-core/tests/discovery_tests.rs

use mfinfo_core::discovery::{default_extensions, find_supported_files, is_supported_video_file};
use mfinfo_core::error::CoreError;
use std::fs::{self, File};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_find_supported_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    File::create(input_dir.join("b_movie.MOV"))?; // Case insensitivity
    File::create(input_dir.join("a_clip.mp4"))?;
    File::create(input_dir.join("broadcast.m2t"))?;
    File::create(input_dir.join("episode.mkv"))?; // Not in the allowlist
    File::create(input_dir.join("notes.txt"))?;
    fs::create_dir(input_dir.join("subdir.mp4"))?; // Directories never match
    File::create(input_dir.join("subdir.mp4").join("nested.mp4"))?;

    let files = find_supported_files(input_dir, &default_extensions())?;
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    // Sorted by path, original case preserved
    assert_eq!(names, vec!["a_clip.mp4", "b_movie.MOV", "broadcast.m2t"]);

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_supported_files_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("document.txt"))?;

    match find_supported_files(dir.path(), &default_extensions()) {
        Err(CoreError::NoFilesFound) => {}
        other => panic!("Unexpected result: {:?}", other),
    }

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_supported_files_nonexistent_dir() {
    let non_existent_path = PathBuf::from("surely_this_does_not_exist_42_integration");
    match find_supported_files(&non_existent_path, &default_extensions()) {
        Err(CoreError::Io(_)) => {}
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn test_custom_allowlist() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let mkv = dir.path().join("episode.mkv");
    let mp4 = dir.path().join("clip.mp4");
    File::create(&mkv)?;
    File::create(&mp4)?;

    let only_mkv = vec!["mkv".to_string()];
    assert!(is_supported_video_file(&mkv, &only_mkv));
    assert!(!is_supported_video_file(&mp4, &only_mkv));
    assert_eq!(find_supported_files(dir.path(), &only_mkv)?, vec![mkv]);

    // Missing files are never supported
    assert!(!is_supported_video_file(&dir.path().join("ghost.mp4"), &default_extensions()));

    dir.close()?;
    Ok(())
}
