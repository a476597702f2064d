//! Collectors for Linux CPU and memory telemetry.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               SystemCollector                │
//! │  - /proc/cpuinfo  → parse_cpuinfo            │
//! │  - /proc/meminfo  → parse_meminfo            │
//! │  - /proc/stat     → parse_stat               │
//! └──────────────────────┬───────────────────────┘
//!                        │
//!                 ┌──────▼──────┐
//!                 │  FileSystem │ (trait)
//!                 └──────┬──────┘
//!              ┌─────────┴─────────┐
//!       ┌──────▼──────┐     ┌──────▼──────┐
//!       │   RealFs    │     │   MockFs    │
//!       │  (Linux)    │     │  (Testing)  │
//!       └─────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ## Production (Linux)
//!
//! ```no_run
//! use procsys::collector::SystemCollector;
//!
//! let collector = SystemCollector::real();
//! let stat = collector.collect_stat().unwrap();
//! println!("{} cores", stat.cpus.len());
//! ```
//!
//! ## Testing (with MockFs)
//!
//! ```
//! use procsys::collector::{MockFs, SystemCollector};
//!
//! let collector = SystemCollector::new(MockFs::typical_system(), "/proc");
//! let processors = collector.collect_cpuinfo().unwrap();
//! assert_eq!(processors.len(), 8);
//! ```

pub mod mock;
pub mod procfs;
pub mod traits;

pub use mock::MockFs;
pub use procfs::{CollectError, SystemCollector};
pub use traits::{FileSystem, RealFs};
