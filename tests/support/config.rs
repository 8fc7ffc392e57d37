use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A config file written into its own temporary directory.
pub struct TempConfig {
    dir: TempDir,
    path: PathBuf,
}

impl TempConfig {
    pub fn write(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).expect("write temp config");
        Self { dir, path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// A path inside the config's directory, for databases or fixtures.
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
