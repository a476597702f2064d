//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic `/proc` filesystem states
//! for testing various system conditions.

use super::filesystem::MockFs;
use super::fixtures::{
    CPUINFO_I7_3630QM, CPUINFO_PENTIUM_D, MEMINFO_47_FIELDS, MEMINFO_LEGACY, STAT_FOUR_CORES,
    STAT_LEGACY,
};

impl MockFs {
    /// Creates a typical x86_64 laptop: 8 logical CPUs, 7.6 GB RAM, 4 cores in `/proc/stat`.
    pub fn typical_system() -> Self {
        let mut fs = Self::new();
        fs.add_file("/proc/cpuinfo", CPUINFO_I7_3630QM);
        fs.add_file("/proc/meminfo", MEMINFO_47_FIELDS);
        fs.add_file("/proc/stat", STAT_FOUR_CORES);
        fs
    }

    /// Creates a 2.6.18-era system.
    ///
    /// Its `/proc/stat` has only eight tick columns per cpu line, which this
    /// crate does not accept; cpuinfo and meminfo parse with missing fields left at 0.
    pub fn legacy_kernel() -> Self {
        let mut fs = Self::new();
        fs.add_file("/proc/cpuinfo", CPUINFO_PENTIUM_D);
        fs.add_file("/proc/meminfo", MEMINFO_LEGACY);
        fs.add_file("/proc/stat", STAT_LEGACY);
        fs
    }

    /// Creates a typical system whose `/proc/meminfo` has a value without its unit.
    pub fn corrupted_meminfo() -> Self {
        let mut fs = Self::typical_system();
        fs.add_file(
            "/proc/meminfo",
            MEMINFO_47_FIELDS.replace("MemFree:         2097360 kB", "MemFree:         2097360"),
        );
        fs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::traits::FileSystem;
    use std::path::Path;

    #[test]
    fn test_typical_system_has_all_files() {
        let fs = MockFs::typical_system();

        for file in ["/proc/cpuinfo", "/proc/meminfo", "/proc/stat"] {
            assert!(fs.read_to_string(Path::new(file)).is_ok(), "{}", file);
        }
    }

    #[test]
    fn test_corrupted_meminfo_differs() {
        let fs = MockFs::corrupted_meminfo();
        let content = fs.read_to_string(Path::new("/proc/meminfo")).unwrap();

        assert_ne!(content, MEMINFO_47_FIELDS);
        assert!(content.contains("MemFree:         2097360\n"));
    }
}
