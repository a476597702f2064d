//! Parser for `/proc/stat`.
//!
//! The file starts with the aggregate `cpu` line, followed by one `cpuN` line
//! per core, followed by `key value...` counter lines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::parser::{FieldSetter, ParseError, dispatch, parse_u32, parse_u64};

/// Cumulative time a CPU spent in each state since boot, in USER_HZ ticks
/// (1/100ths of a second on most architectures).
///
/// The kernel prints these as unlabeled columns, so the field order here is
/// the column order and must not change.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct CpuTimeSpentFragments {
    /// Time spent in user mode.
    pub user: u64,
    /// Time spent in user mode with low priority (nice).
    pub nice: u64,
    /// Time spent in system mode.
    pub system: u64,
    /// Time spent in the idle task.
    pub idle: u64,
    /// Time waiting for I/O to complete. (since Linux 2.5.41)
    pub iowait: u64,
    /// Time servicing interrupts. (since Linux 2.6.0)
    pub irq: u64,
    /// Time servicing softirqs. (since Linux 2.6.0)
    pub softirq: u64,
    /// Time stolen by other operating systems when running virtualized. (since Linux 2.6.11)
    pub steal: u64,
    /// Time running a virtual CPU for guests. (since Linux 2.6.24)
    pub guest: u64,
    /// Time running a niced guest. (since Linux 2.6.33)
    pub guest_nice: u64,
}

impl CpuTimeSpentFragments {
    /// Number of tick columns on a `cpu` line.
    pub const COLUMNS: usize = 10;

    /// Sum of all ten counters, saturating at `u64::MAX`.
    ///
    /// `guest` and `guest_nice` are already included in `user` and `nice` by
    /// the kernel, so this overcounts guest time; it matches what a plain sum
    /// of the columns gives.
    pub fn total(&self) -> u64 {
        [
            self.user,
            self.nice,
            self.system,
            self.idle,
            self.iowait,
            self.irq,
            self.softirq,
            self.steal,
            self.guest,
            self.guest_nice,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Kernel and scheduler counters from `/proc/stat`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct StatInfo {
    /// Totals over all cores (the `cpu` line).
    pub cpu_total: CpuTimeSpentFragments,
    /// One entry per `cpuN` line, in file order.
    pub cpus: Vec<CpuTimeSpentFragments>,
    /// Interrupts serviced since boot (first column of `intr`).
    pub total_interrupts: u64,
    /// Context switches since boot.
    pub context_switches: u64,
    /// Boot time in seconds since the Epoch.
    pub boot_time: u64,
    /// Forks since boot.
    pub processes: u64,
    /// Processes in runnable state.
    pub procs_running: u32,
    /// Processes blocked waiting for I/O.
    pub procs_blocked: u32,
    /// Softirqs serviced since boot (first column of `softirq`).
    pub total_softirqs: u64,
}

impl StatInfo {
    /// Boot time as a UTC timestamp, or `None` if `btime` is out of range.
    pub fn boot_time_utc(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.boot_time).ok()?;
        DateTime::from_timestamp(secs, 0)
    }
}

static STAT_FIELDS: &[(&str, FieldSetter<StatInfo>)] = &[
    ("intr", |s, v| parse_u64(v).map(|n| s.total_interrupts = n)),
    ("ctxt", |s, v| parse_u64(v).map(|n| s.context_switches = n)),
    ("btime", |s, v| parse_u64(v).map(|n| s.boot_time = n)),
    ("processes", |s, v| parse_u64(v).map(|n| s.processes = n)),
    ("procs_running", |s, v| parse_u32(v).map(|n| s.procs_running = n)),
    ("procs_blocked", |s, v| parse_u32(v).map(|n| s.procs_blocked = n)),
    ("softirq", |s, v| parse_u64(v).map(|n| s.total_softirqs = n)),
];

/// Parses one `cpu` / `cpuN` line into its ten tick counters.
///
/// Columns are separated by runs of whitespace; the aggregate line is padded
/// with two spaces after the label.
pub fn parse_cpu_line(line: &str) -> Result<CpuTimeSpentFragments, ParseError> {
    let mut parts = line.split_whitespace();
    let label = parts.next().unwrap_or_default();

    let mut ticks = [0u64; CpuTimeSpentFragments::COLUMNS];
    for (column, tick) in ticks.iter_mut().enumerate() {
        let raw = parts.next().ok_or_else(|| {
            ParseError::new(format!(
                "{:?}: expected {} tick columns, found {}",
                label,
                CpuTimeSpentFragments::COLUMNS,
                column
            ))
        })?;
        *tick = parse_u64(raw).map_err(|e| e.in_field(label))?;
    }

    let [user, nice, system, idle, iowait, irq, softirq, steal, guest, guest_nice] = ticks;
    Ok(CpuTimeSpentFragments {
        user,
        nice,
        system,
        idle,
        iowait,
        irq,
        softirq,
        steal,
        guest,
        guest_nice,
    })
}

/// Parses `/proc/stat` content.
pub fn parse_stat(content: &str) -> Result<StatInfo, ParseError> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty()).peekable();
    let mut stat = StatInfo::default();

    let first = lines
        .next()
        .ok_or_else(|| ParseError::new("empty stat content"))?;
    if first.split_whitespace().next() != Some("cpu") {
        return Err(ParseError::new(format!(
            "first stat line is not the aggregate cpu line: {:?}",
            first
        )));
    }
    stat.cpu_total = parse_cpu_line(first)?;

    while let Some(line) = lines.next_if(|line| line.starts_with("cpu")) {
        stat.cpus.push(parse_cpu_line(line)?);
    }

    for line in lines {
        // "intr 1000000 50 0 ..." keeps only the first column
        let mut parts = line.split(' ');
        let (Some(name), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };

        if !dispatch(STAT_FIELDS, &mut stat, name, value)? {
            trace!(field = name, "ignoring unknown stat field");
        }
    }

    Ok(stat)
}
