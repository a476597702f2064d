//! Parsers and collector for Linux `/proc` pseudo-files.
//!
//! The parsers are pure functions over file content; `SystemCollector` adds
//! the read from `/proc` in front of them.

pub mod cpuinfo;
pub mod meminfo;
pub mod parser;
pub mod stat;
pub mod system;

pub use cpuinfo::{ProcessorInfo, parse_cpuinfo};
pub use meminfo::{MemInfo, parse_meminfo};
pub use parser::ParseError;
pub use stat::{CpuTimeSpentFragments, StatInfo, parse_stat};
pub use system::{CollectError, DEFAULT_PROC_PATH, SystemCollector};
