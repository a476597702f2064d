//! In-memory mock filesystem for testing collectors without real `/proc`.

use crate::collector::traits::FileSystem;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory filesystem for testing.
///
/// Stores file contents keyed by absolute path, so tests can simulate any
/// `/proc` state on any host.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    files: HashMap<PathBuf, String>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given content, replacing any previous content.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.files.insert(path.as_ref().to_path_buf(), content.into());
    }

    /// Removes a file, simulating a kernel that does not expose it.
    pub fn remove_file(&mut self, path: impl AsRef<Path>) {
        self.files.remove(path.as_ref());
    }

    /// Loads a mock filesystem from a directory snapshot.
    ///
    /// Every regular file directly inside `dir` is mounted under `/proc`, so a
    /// directory holding copies of `cpuinfo`, `meminfo` and `stat` from another
    /// machine can be replayed in regression tests.
    pub fn from_snapshot(dir: &Path) -> io::Result<Self> {
        let mut fs = Self::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            // skip binary files
            if let Ok(content) = std::fs::read_to_string(entry.path()) {
                fs.add_file(Path::new("/proc").join(entry.file_name()), content);
            }
        }
        Ok(fs)
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {:?}", path),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_read_file() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/stat", "ctxt 1\n");

        assert_eq!(fs.read_to_string(Path::new("/proc/stat")).unwrap(), "ctxt 1\n");
    }

    #[test]
    fn test_remove_file() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/stat", "ctxt 1\n");
        fs.remove_file("/proc/stat");

        let err = fs.read_to_string(Path::new("/proc/stat")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_from_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("meminfo"), "MemTotal:  42 kB\n").unwrap();
        std::fs::write(dir.path().join("stat"), "cpu  1 2 3 4 5 6 7 8 9 10\n").unwrap();
        std::fs::create_dir(dir.path().join("net")).unwrap();
        std::fs::write(dir.path().join("binary"), [0xff, 0xfe, 0x00]).unwrap();

        let fs = MockFs::from_snapshot(dir.path()).unwrap();

        assert_eq!(
            fs.read_to_string(Path::new("/proc/meminfo")).unwrap(),
            "MemTotal:  42 kB\n"
        );
        assert!(fs.read_to_string(Path::new("/proc/stat")).is_ok());
        assert!(fs.read_to_string(Path::new("/proc/net")).is_err());
        assert!(fs.read_to_string(Path::new("/proc/binary")).is_err());
    }

    #[test]
    fn test_from_snapshot_missing_dir() {
        assert!(MockFs::from_snapshot(Path::new("/nonexistent/snapshot")).is_err());
    }
}
