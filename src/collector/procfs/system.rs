//! System collector reading `/proc/cpuinfo`, `/proc/meminfo` and `/proc/stat`.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::collector::procfs::cpuinfo::{ProcessorInfo, parse_cpuinfo};
use crate::collector::procfs::meminfo::{MemInfo, parse_meminfo};
use crate::collector::procfs::parser::ParseError;
use crate::collector::procfs::stat::{StatInfo, parse_stat};
use crate::collector::traits::{FileSystem, RealFs};

/// Default mount point of the proc filesystem.
pub const DEFAULT_PROC_PATH: &str = "/proc";

/// Error type for collection failures.
#[derive(Debug)]
pub enum CollectError {
    /// The pseudo-file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The pseudo-file was read but a value did not convert.
    Parse { path: PathBuf, source: ParseError },
}

impl CollectError {
    /// Path of the pseudo-file the error relates to.
    pub fn path(&self) -> &Path {
        match self {
            CollectError::Io { path, .. } | CollectError::Parse { path, .. } => path,
        }
    }
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            CollectError::Parse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::Io { source, .. } => Some(source),
            CollectError::Parse { source, .. } => Some(source),
        }
    }
}

/// Collects CPU, memory and scheduler information from `/proc/`.
///
/// Every call re-reads the pseudo-file and returns a fresh snapshot; nothing
/// is cached between calls.
pub struct SystemCollector<F: FileSystem> {
    fs: F,
    proc_path: PathBuf,
}

impl SystemCollector<RealFs> {
    /// Collector over the live `/proc` filesystem.
    pub fn real() -> Self {
        Self::new(RealFs::new(), DEFAULT_PROC_PATH)
    }
}

impl<F: FileSystem> SystemCollector<F> {
    /// Creates a new system collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
        }
    }

    /// Base path this collector reads from.
    pub fn proc_path(&self) -> &Path {
        &self.proc_path
    }

    fn collect<T>(
        &self,
        file: &str,
        parse: impl FnOnce(&str) -> Result<T, ParseError>,
    ) -> Result<T, CollectError> {
        let path = self.proc_path.join(file);

        let content = self.fs.read_to_string(&path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "failed to read pseudo-file");
            CollectError::Io {
                path: path.clone(),
                source,
            }
        })?;

        parse(&content).map_err(|source| {
            warn!(path = %path.display(), error = %source, "failed to parse pseudo-file");
            CollectError::Parse { path, source }
        })
    }

    /// Collects per-processor information from `/proc/cpuinfo`.
    pub fn collect_cpuinfo(&self) -> Result<Vec<ProcessorInfo>, CollectError> {
        let processors = self.collect("cpuinfo", parse_cpuinfo)?;
        debug!(processors = processors.len(), "collected cpuinfo");
        Ok(processors)
    }

    /// Collects memory counters from `/proc/meminfo`.
    pub fn collect_meminfo(&self) -> Result<MemInfo, CollectError> {
        let info = self.collect("meminfo", parse_meminfo)?;
        debug!(mem_total_kb = info.mem_total_kb, "collected meminfo");
        Ok(info)
    }

    /// Collects CPU time and scheduler counters from `/proc/stat`.
    pub fn collect_stat(&self) -> Result<StatInfo, CollectError> {
        let stat = self.collect("stat", parse_stat)?;
        debug!(cpus = stat.cpus.len(), "collected stat");
        Ok(stat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;
    use std::error::Error;

    #[test]
    fn test_collect_cpuinfo() {
        let fs = MockFs::typical_system();
        let collector = SystemCollector::new(fs, "/proc");

        let processors = collector.collect_cpuinfo().unwrap();

        assert_eq!(processors.len(), 8);
        assert_eq!(processors[5].processor, 5);
        assert_eq!(processors[5].apicid, 3);
        assert!(processors[0].has_bug("cpu_meltdown"));
    }

    #[test]
    fn test_collect_meminfo() {
        let fs = MockFs::typical_system();
        let collector = SystemCollector::new(fs, "/proc");

        let info = collector.collect_meminfo().unwrap();

        assert_eq!(info.mem_total_kb, 7600292);
        assert_eq!(info.mem_free_kb, 2097360);
        assert_eq!(info.mem_available_kb, 4028236);
    }

    #[test]
    fn test_collect_stat() {
        let fs = MockFs::typical_system();
        let collector = SystemCollector::new(fs, "/proc");

        let stat = collector.collect_stat().unwrap();

        assert_eq!(stat.cpus.len(), 4);
        assert_eq!(stat.boot_time, 1062961309);
    }

    #[test]
    fn test_custom_proc_path() {
        let mut fs = MockFs::new();
        fs.add_file("/host/proc/meminfo", "MemTotal:  1024 kB\n");
        let collector = SystemCollector::new(fs, "/host/proc");

        assert_eq!(collector.proc_path(), Path::new("/host/proc"));
        assert_eq!(collector.collect_meminfo().unwrap().mem_total_kb, 1024);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let collector = SystemCollector::new(MockFs::new(), "/proc");

        let err = collector.collect_stat().unwrap_err();

        assert!(matches!(err, CollectError::Io { .. }));
        assert_eq!(err.path(), Path::new("/proc/stat"));
        assert!(err.to_string().contains("/proc/stat"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let collector = SystemCollector::new(MockFs::corrupted_meminfo(), "/proc");

        let err = collector.collect_meminfo().unwrap_err();

        match &err {
            CollectError::Parse { path, source } => {
                assert_eq!(path, Path::new("/proc/meminfo"));
                assert!(source.message.contains("MemFree"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(err.to_string().starts_with("failed to parse /proc/meminfo"));
    }

    #[test]
    fn test_legacy_kernel_stat_fails() {
        // 2.6.24-era kernels print only eight tick columns
        let collector = SystemCollector::new(MockFs::legacy_kernel(), "/proc");

        let err = collector.collect_stat().unwrap_err();
        assert!(matches!(err, CollectError::Parse { .. }));

        // its meminfo lacks newer fields, which simply stay zero
        let info = collector.collect_meminfo().unwrap();
        assert_eq!(info.mem_available_kb, 0);
        assert_eq!(info.mem_total_kb, 2055920);
    }

    #[test]
    fn test_borrowed_filesystem() {
        let fs = MockFs::typical_system();
        let collector = SystemCollector::new(&fs, "/proc");

        assert_eq!(collector.collect_cpuinfo().unwrap().len(), 8);
        assert_eq!(collector.collect_cpuinfo().unwrap().len(), 8);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let fs = MockFs::typical_system();
        let collector = SystemCollector::new(fs, "/proc");

        let mut first = collector.collect_stat().unwrap();
        first.cpus.clear();
        let second = collector.collect_stat().unwrap();

        assert_eq!(second.cpus.len(), 4);
    }
}
