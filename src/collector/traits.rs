//! Filesystem seam between the collectors and `/proc`.
//!
//! Collectors read pseudo-files through `FileSystem`, so the same code runs
//! against the live kernel (`RealFs`) or an in-memory fixture (`MockFs`).

use std::io;
use std::path::Path;

/// Read-only access to pseudo-files.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a string.
    ///
    /// # Arguments
    /// * `path` - Path to the file to read
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Real filesystem implementation that delegates to `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    /// Creates a new `RealFs` instance.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_real_fs_read_to_string() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "MemTotal:       16384000 kB").unwrap();

        let content = RealFs::new().read_to_string(file.path()).unwrap();
        assert_eq!(content, "MemTotal:       16384000 kB\n");
    }

    #[test]
    fn test_real_fs_missing_file() {
        let err = RealFs::new()
            .read_to_string(Path::new("/nonexistent/path/12345"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_borrowed_fs_delegates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stat");
        std::fs::write(&path, "ctxt 1\n").unwrap();

        fn read_via<F: FileSystem>(fs: F, path: &Path) -> String {
            fs.read_to_string(path).unwrap()
        }

        let fs = RealFs::new();
        assert_eq!(read_via(&fs, &path), "ctxt 1\n");
    }
}
