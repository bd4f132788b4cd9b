use std::path::Path;

use super::*;
use tempfile::TempDir;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn should_include(&self, _path: &Path) -> bool {
        true
    }
}

struct HeaderOnlyFilter;

impl FileFilter for HeaderOnlyFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "h")
    }
}

fn names(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn scanner_finds_files_in_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("meter.h"), "class Meter {};").unwrap();
    std::fs::write(temp_dir.path().join("gauge.h"), "class Gauge {};").unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(names(&files), vec!["gauge.h", "meter.h"]);
}

#[test]
fn scanner_finds_files_in_subdirectories() {
    let temp_dir = TempDir::new().unwrap();
    let sub_dir = temp_dir.path().join("include");
    std::fs::create_dir(&sub_dir).unwrap();
    std::fs::write(sub_dir.join("meter.h"), "").unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("include/meter.h"));
}

#[test]
fn scanner_respects_filter() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("meter.h"), "").unwrap();
    std::fs::write(temp_dir.path().join("meter.cpp"), "").unwrap();

    let scanner = DirectoryScanner::new(HeaderOnlyFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(names(&files), vec!["meter.h"]);
}

#[test]
fn collect_files_walks_directories_with_config() {
    let temp_dir = TempDir::new().unwrap();
    let build = temp_dir.path().join("build");
    std::fs::create_dir(&build).unwrap();
    std::fs::write(build.join("config.h"), "").unwrap();
    std::fs::write(temp_dir.path().join("meter.hpp"), "").unwrap();
    std::fs::write(temp_dir.path().join("meter.cpp"), "").unwrap();

    let config = ScannerConfig {
        exclude: vec!["**/build/**".to_string()],
        ..ScannerConfig::default()
    };
    let files = collect_files(&[temp_dir.path().to_path_buf()], &config).unwrap();

    assert_eq!(names(&files), vec!["meter.hpp"]);
}

#[test]
fn collect_files_keeps_explicit_file_with_other_extension() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("meter.inl");
    std::fs::write(&file, "").unwrap();

    let files = collect_files(std::slice::from_ref(&file), &ScannerConfig::default()).unwrap();

    assert_eq!(files, vec![file]);
}

#[test]
fn collect_files_missing_path_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.h");

    let result = collect_files(&[missing.clone()], &ScannerConfig::default());

    assert!(matches!(
        result,
        Err(DoxyGuardError::FileRead { path, .. }) if path == missing
    ));
}

#[test]
fn collect_files_invalid_exclude_is_error() {
    let config = ScannerConfig {
        exclude: vec!["[bad".to_string()],
        ..ScannerConfig::default()
    };

    let result = collect_files(&[], &config);

    assert!(matches!(result, Err(DoxyGuardError::InvalidPattern { .. })));
}
