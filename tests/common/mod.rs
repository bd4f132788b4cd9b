#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the doxy-guard binary.
#[macro_export]
macro_rules! doxy_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("doxy-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Reads a file from the temp directory.
    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a doxy-guard config file in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".doxy-guard.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Offline config so `fix` never reaches the network.
pub const OFFLINE_CONFIG: &str = r#"
[scanner]
extensions = ["h", "hpp"]
exclude = ["**/third_party/**"]

[generator]
offline = true
"#;

/// A header where every entity is documented in the house style.
pub const DOCUMENTED_HEADER: &str = "\
/// Store a running total.
class Counter {
 public:
  /**
   * Add a value to the total.
   * \\param value Amount to add.
   */
  void Add(int value);

  /// Get the current total.
  int Total() const;

 private:
  /// Sum of all added values.
  int total_;
};
";

/// A header with no documentation at all.
pub const UNDOCUMENTED_HEADER: &str = "\
class Meter {
 public:
  int GetValue() const;
  void SetLimit(int limit);

 private:
  int count_;
};
";

/// A header whose only issue is a third-person method brief.
pub const WARNING_HEADER: &str = "\
/// Measure a value.
class Gauge {
 public:
  /// Gets the value.
  int GetValue() const;
};
";
