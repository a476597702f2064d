//! Parser for `/proc/meminfo`.
//!
//! A single record of `Name:   value kB` lines. Values are kilobytes except
//! the `HugePages_*` counters, which are page counts without a unit.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::parser::{FieldSetter, ParseError, dispatch, parse_kb, parse_u64};

/// System memory counters from `/proc/meminfo`.
///
/// Fields missing from the file (older kernels, disabled config options) stay 0.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct MemInfo {
    pub mem_total_kb: u64,
    pub mem_free_kb: u64,
    pub mem_available_kb: u64,
    pub buffers_kb: u64,
    pub cached_kb: u64,
    pub swap_cached_kb: u64,
    pub active_kb: u64,
    pub inactive_kb: u64,
    /// Source: `Active(anon)`
    pub active_anon_kb: u64,
    /// Source: `Inactive(anon)`
    pub inactive_anon_kb: u64,
    /// Source: `Active(file)`
    pub active_file_kb: u64,
    /// Source: `Inactive(file)`
    pub inactive_file_kb: u64,
    pub unevictable_kb: u64,
    pub mlocked_kb: u64,
    pub swap_total_kb: u64,
    pub swap_free_kb: u64,
    pub dirty_kb: u64,
    pub writeback_kb: u64,
    pub anon_pages_kb: u64,
    pub mapped_kb: u64,
    pub shmem_kb: u64,
    /// Source: `KReclaimable` (Linux 4.20+)
    pub k_reclaimable_kb: u64,
    pub slab_kb: u64,
    pub s_reclaimable_kb: u64,
    pub s_unreclaim_kb: u64,
    pub kernel_stack_kb: u64,
    pub page_tables_kb: u64,
    pub nfs_unstable_kb: u64,
    pub bounce_kb: u64,
    pub writeback_tmp_kb: u64,
    pub commit_limit_kb: u64,
    /// Source: `Committed_AS`
    pub committed_as_kb: u64,
    pub vmalloc_total_kb: u64,
    pub vmalloc_used_kb: u64,
    pub vmalloc_chunk_kb: u64,
    /// Source: `Percpu` (Linux 4.16+)
    pub percpu_kb: u64,
    pub hardware_corrupted_kb: u64,
    pub anon_huge_pages_kb: u64,
    pub shmem_huge_pages_kb: u64,
    pub shmem_pmd_mapped_kb: u64,
    /// Source: `FileHugePages` (Linux 5.4+)
    pub file_huge_pages_kb: u64,
    /// Source: `FilePmdMapped` (Linux 5.4+)
    pub file_pmd_mapped_kb: u64,
    pub cma_total_kb: u64,
    pub cma_free_kb: u64,
    /// Source: `Zswap` (Linux 6.5+)
    pub zswap_kb: u64,
    /// Source: `Zswapped` (Linux 6.5+)
    pub zswapped_kb: u64,
    /// Page count, no unit.
    pub huge_pages_total: u64,
    /// Page count, no unit.
    pub huge_pages_free: u64,
    /// Page count, no unit.
    pub huge_pages_rsvd: u64,
    /// Page count, no unit.
    pub huge_pages_surp: u64,
    /// Source: `Hugepagesize`
    pub huge_page_size_kb: u64,
    /// Source: `Hugetlb` (Linux 4.17+)
    pub hugetlb_kb: u64,
    pub direct_map_4k_kb: u64,
    pub direct_map_2m_kb: u64,
    pub direct_map_1g_kb: u64,
}

static MEMINFO_FIELDS: &[(&str, FieldSetter<MemInfo>)] = &[
    ("MemTotal", |m, v| parse_kb(v).map(|n| m.mem_total_kb = n)),
    ("MemFree", |m, v| parse_kb(v).map(|n| m.mem_free_kb = n)),
    ("MemAvailable", |m, v| parse_kb(v).map(|n| m.mem_available_kb = n)),
    ("Buffers", |m, v| parse_kb(v).map(|n| m.buffers_kb = n)),
    ("Cached", |m, v| parse_kb(v).map(|n| m.cached_kb = n)),
    ("SwapCached", |m, v| parse_kb(v).map(|n| m.swap_cached_kb = n)),
    ("Active", |m, v| parse_kb(v).map(|n| m.active_kb = n)),
    ("Inactive", |m, v| parse_kb(v).map(|n| m.inactive_kb = n)),
    ("Active(anon)", |m, v| parse_kb(v).map(|n| m.active_anon_kb = n)),
    ("Inactive(anon)", |m, v| parse_kb(v).map(|n| m.inactive_anon_kb = n)),
    ("Active(file)", |m, v| parse_kb(v).map(|n| m.active_file_kb = n)),
    ("Inactive(file)", |m, v| parse_kb(v).map(|n| m.inactive_file_kb = n)),
    ("Unevictable", |m, v| parse_kb(v).map(|n| m.unevictable_kb = n)),
    ("Mlocked", |m, v| parse_kb(v).map(|n| m.mlocked_kb = n)),
    ("SwapTotal", |m, v| parse_kb(v).map(|n| m.swap_total_kb = n)),
    ("SwapFree", |m, v| parse_kb(v).map(|n| m.swap_free_kb = n)),
    ("Dirty", |m, v| parse_kb(v).map(|n| m.dirty_kb = n)),
    ("Writeback", |m, v| parse_kb(v).map(|n| m.writeback_kb = n)),
    ("AnonPages", |m, v| parse_kb(v).map(|n| m.anon_pages_kb = n)),
    ("Mapped", |m, v| parse_kb(v).map(|n| m.mapped_kb = n)),
    ("Shmem", |m, v| parse_kb(v).map(|n| m.shmem_kb = n)),
    ("KReclaimable", |m, v| parse_kb(v).map(|n| m.k_reclaimable_kb = n)),
    ("Slab", |m, v| parse_kb(v).map(|n| m.slab_kb = n)),
    ("SReclaimable", |m, v| parse_kb(v).map(|n| m.s_reclaimable_kb = n)),
    ("SUnreclaim", |m, v| parse_kb(v).map(|n| m.s_unreclaim_kb = n)),
    ("KernelStack", |m, v| parse_kb(v).map(|n| m.kernel_stack_kb = n)),
    ("PageTables", |m, v| parse_kb(v).map(|n| m.page_tables_kb = n)),
    ("NFS_Unstable", |m, v| parse_kb(v).map(|n| m.nfs_unstable_kb = n)),
    ("Bounce", |m, v| parse_kb(v).map(|n| m.bounce_kb = n)),
    ("WritebackTmp", |m, v| parse_kb(v).map(|n| m.writeback_tmp_kb = n)),
    ("CommitLimit", |m, v| parse_kb(v).map(|n| m.commit_limit_kb = n)),
    ("Committed_AS", |m, v| parse_kb(v).map(|n| m.committed_as_kb = n)),
    ("VmallocTotal", |m, v| parse_kb(v).map(|n| m.vmalloc_total_kb = n)),
    ("VmallocUsed", |m, v| parse_kb(v).map(|n| m.vmalloc_used_kb = n)),
    ("VmallocChunk", |m, v| parse_kb(v).map(|n| m.vmalloc_chunk_kb = n)),
    ("Percpu", |m, v| parse_kb(v).map(|n| m.percpu_kb = n)),
    ("HardwareCorrupted", |m, v| {
        parse_kb(v).map(|n| m.hardware_corrupted_kb = n)
    }),
    ("AnonHugePages", |m, v| parse_kb(v).map(|n| m.anon_huge_pages_kb = n)),
    ("ShmemHugePages", |m, v| {
        parse_kb(v).map(|n| m.shmem_huge_pages_kb = n)
    }),
    ("ShmemPmdMapped", |m, v| {
        parse_kb(v).map(|n| m.shmem_pmd_mapped_kb = n)
    }),
    ("FileHugePages", |m, v| parse_kb(v).map(|n| m.file_huge_pages_kb = n)),
    ("FilePmdMapped", |m, v| parse_kb(v).map(|n| m.file_pmd_mapped_kb = n)),
    ("CmaTotal", |m, v| parse_kb(v).map(|n| m.cma_total_kb = n)),
    ("CmaFree", |m, v| parse_kb(v).map(|n| m.cma_free_kb = n)),
    ("Zswap", |m, v| parse_kb(v).map(|n| m.zswap_kb = n)),
    ("Zswapped", |m, v| parse_kb(v).map(|n| m.zswapped_kb = n)),
    ("HugePages_Total", |m, v| parse_u64(v).map(|n| m.huge_pages_total = n)),
    ("HugePages_Free", |m, v| parse_u64(v).map(|n| m.huge_pages_free = n)),
    ("HugePages_Rsvd", |m, v| parse_u64(v).map(|n| m.huge_pages_rsvd = n)),
    ("HugePages_Surp", |m, v| parse_u64(v).map(|n| m.huge_pages_surp = n)),
    ("Hugepagesize", |m, v| parse_kb(v).map(|n| m.huge_page_size_kb = n)),
    ("Hugetlb", |m, v| parse_kb(v).map(|n| m.hugetlb_kb = n)),
    ("DirectMap4k", |m, v| parse_kb(v).map(|n| m.direct_map_4k_kb = n)),
    ("DirectMap2M", |m, v| parse_kb(v).map(|n| m.direct_map_2m_kb = n)),
    ("DirectMap1G", |m, v| parse_kb(v).map(|n| m.direct_map_1g_kb = n)),
];

/// Parses `/proc/meminfo` content.
///
/// Each line is split on its first `:`; lines without one are skipped. A key
/// that appears twice keeps the last value.
pub fn parse_meminfo(content: &str) -> Result<MemInfo, ParseError> {
    let mut info = MemInfo::default();

    for line in content.lines() {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };

        let name = name.trim();
        if !dispatch(MEMINFO_FIELDS, &mut info, name, value.trim())? {
            trace!(field = name, "ignoring unknown meminfo field");
        }
    }

    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::fixtures::MEMINFO_47_FIELDS;

    #[test]
    fn test_parse_meminfo_full_sample() {
        let info = parse_meminfo(MEMINFO_47_FIELDS).unwrap();

        assert_eq!(
            info,
            MemInfo {
                mem_total_kb: 7600292,
                mem_free_kb: 2097360,
                mem_available_kb: 4028236,
                buffers_kb: 168084,
                cached_kb: 2113548,
                swap_cached_kb: 0,
                active_kb: 3476088,
                inactive_kb: 1665228,
                active_anon_kb: 2680536,
                inactive_anon_kb: 367648,
                active_file_kb: 795552,
                inactive_file_kb: 1297580,
                unevictable_kb: 96,
                mlocked_kb: 96,
                swap_total_kb: 4002812,
                swap_free_kb: 4002812,
                dirty_kb: 712,
                writeback_kb: 0,
                anon_pages_kb: 2859776,
                mapped_kb: 614792,
                shmem_kb: 379840,
                slab_kb: 178200,
                s_reclaimable_kb: 116308,
                s_unreclaim_kb: 61892,
                kernel_stack_kb: 16896,
                page_tables_kb: 79124,
                nfs_unstable_kb: 0,
                bounce_kb: 0,
                writeback_tmp_kb: 0,
                commit_limit_kb: 7802956,
                committed_as_kb: 13007596,
                vmalloc_total_kb: 34359738367,
                vmalloc_used_kb: 0,
                vmalloc_chunk_kb: 0,
                hardware_corrupted_kb: 0,
                anon_huge_pages_kb: 0,
                shmem_huge_pages_kb: 0,
                shmem_pmd_mapped_kb: 0,
                cma_total_kb: 0,
                cma_free_kb: 0,
                huge_pages_total: 0,
                huge_pages_free: 0,
                huge_pages_rsvd: 0,
                huge_pages_surp: 0,
                huge_page_size_kb: 2048,
                direct_map_4k_kb: 282496,
                direct_map_2m_kb: 7530496,
                ..MemInfo::default()
            }
        );
    }

    #[test]
    fn test_newer_kernel_fields() {
        let content = "\
KReclaimable:     215340 kB
Percpu:            19456 kB
FileHugePages:         0 kB
FilePmdMapped:         0 kB
Zswap:              1024 kB
Zswapped:           4096 kB
Hugetlb:         4194304 kB
DirectMap1G:    10485760 kB
";
        let info = parse_meminfo(content).unwrap();

        assert_eq!(info.k_reclaimable_kb, 215340);
        assert_eq!(info.percpu_kb, 19456);
        assert_eq!(info.zswap_kb, 1024);
        assert_eq!(info.zswapped_kb, 4096);
        assert_eq!(info.hugetlb_kb, 4194304);
        assert_eq!(info.direct_map_1g_kb, 10485760);
    }

    #[test]
    fn test_huge_pages_counts_have_no_unit() {
        let content = "\
HugePages_Total:     512
HugePages_Free:      500
HugePages_Rsvd:        3
HugePages_Surp:        1
Hugepagesize:       2048 kB
";
        let info = parse_meminfo(content).unwrap();

        assert_eq!(info.huge_pages_total, 512);
        assert_eq!(info.huge_pages_free, 500);
        assert_eq!(info.huge_pages_rsvd, 3);
        assert_eq!(info.huge_pages_surp, 1);
        assert_eq!(info.huge_page_size_kb, 2048);

        // a unit on a count is a conversion failure
        assert!(parse_meminfo("HugePages_Total:  512 kB\n").is_err());
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let content = format!("{}SecretSauce:        42 kB\nWeird line\n", MEMINFO_47_FIELDS);
        let info = parse_meminfo(&content).unwrap();

        assert_eq!(info, parse_meminfo(MEMINFO_47_FIELDS).unwrap());
    }

    #[test]
    fn test_last_occurrence_wins() {
        let content = "MemFree:  100 kB\nMemFree:  200 kB\n";
        let info = parse_meminfo(content).unwrap();

        assert_eq!(info.mem_free_kb, 200);
    }

    #[test]
    fn test_split_on_first_colon() {
        // the remainder after the first colon is the value, so a second colon makes it invalid
        let err = parse_meminfo("MemTotal: 1:2 kB\n").unwrap_err();
        assert!(err.message.contains("MemTotal"));

        // unknown keys with extra colons are still ignored
        assert!(parse_meminfo("Some:Thing: 1 kB\n").is_ok());
    }

    #[test]
    fn test_missing_unit_fails() {
        let err = parse_meminfo("MemTotal:        7600292\n").unwrap_err();

        assert!(err.message.contains("MemTotal"));
        assert!(err.message.contains("7600292"));
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(parse_meminfo("").unwrap(), MemInfo::default());
    }

    #[test]
    fn test_parse_is_idempotent() {
        assert_eq!(
            parse_meminfo(MEMINFO_47_FIELDS).unwrap(),
            parse_meminfo(MEMINFO_47_FIELDS).unwrap()
        );
    }
}
