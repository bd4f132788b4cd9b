//! Tests for explicit-path loading and parse failures.

use std::path::{Path, PathBuf};

use crate::config::{ConfigLoader, FileConfigLoader};
use crate::error::DoxyGuardError;

use super::mock_fs::MockFileSystem;

#[test]
fn load_from_path_reads_explicit_file() {
    let fs = MockFileSystem::new().with_file(
        "/configs/ci.toml",
        "[generator]\noffline = true\ncontext_lines = 2\n",
    );

    let result = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/configs/ci.toml"))
        .unwrap();

    assert!(result.config.generator.offline);
    assert_eq!(result.config.generator.context_lines, 2);
    assert_eq!(result.source, Some(PathBuf::from("/configs/ci.toml")));
}

#[test]
fn missing_explicit_file_is_a_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader
        .load_from_path(Path::new("/nowhere/config.toml"))
        .unwrap_err();

    assert!(matches!(err, DoxyGuardError::FileRead { .. }));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.doxy-guard.toml", "[checker\n");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, DoxyGuardError::TomlParse(_)));
    assert_eq!(err.error_type(), "Config");
}

#[test]
fn unknown_section_is_rejected() {
    let fs = MockFileSystem::new().with_file("/project/.doxy-guard.toml", "[content]\nmax_lines = 1\n");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, DoxyGuardError::TomlParse(_)));
}

#[test]
fn relative_reference_example_resolves_against_config_dir() {
    let fs = MockFileSystem::new().with_file(
        "/repo/tools/doxy.toml",
        "[generator]\nreference_example = \"style/angle_set.h\"\n",
    );

    let result = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/repo/tools/doxy.toml"))
        .unwrap();

    assert_eq!(
        result.config.generator.reference_example,
        Some(PathBuf::from("/repo/tools/style/angle_set.h"))
    );
}

#[test]
fn absolute_reference_example_is_kept() {
    let fs = MockFileSystem::new().with_file(
        "/project/.doxy-guard.toml",
        "[generator]\nreference_example = \"/opt/style/ref.h\"\n",
    );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(
        result.config.generator.reference_example,
        Some(PathBuf::from("/opt/style/ref.h"))
    );
}
