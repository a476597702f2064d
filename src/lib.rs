//! procsys - typed access to Linux CPU and memory telemetry.
//!
//! Parses `/proc/cpuinfo`, `/proc/meminfo` and `/proc/stat` into plain
//! records. Each call reads the pseudo-file again and returns an independent
//! snapshot; unknown fields from newer kernels are ignored, malformed values
//! fail the whole call.
//!
//! ```no_run
//! let mem = procsys::mem_info().unwrap();
//! let stat = procsys::stat_info().unwrap();
//! println!("{} kB free, booted at {:?}", mem.mem_free_kb, stat.boot_time_utc());
//! ```

pub mod collector;

pub use collector::procfs::{
    CollectError, CpuTimeSpentFragments, MemInfo, ParseError, ProcessorInfo, StatInfo,
    parse_cpuinfo, parse_meminfo, parse_stat,
};

use collector::SystemCollector;

/// Reads `/proc/cpuinfo`, one record per logical processor in file order.
pub fn cpu_info() -> Result<Vec<ProcessorInfo>, CollectError> {
    SystemCollector::real().collect_cpuinfo()
}

/// Reads `/proc/meminfo`.
pub fn mem_info() -> Result<MemInfo, CollectError> {
    SystemCollector::real().collect_meminfo()
}

/// Reads `/proc/stat`.
pub fn stat_info() -> Result<StatInfo, CollectError> {
    SystemCollector::real().collect_stat()
}
