//! Raw `/proc` samples captured from real machines.
//!
//! Used by the mock scenarios and as golden inputs for the parser tests.

/// `/proc/cpuinfo` of an 8-thread Intel Core i7-3630QM (4 cores, HT), kernel 4.x.
pub const CPUINFO_I7_3630QM: &str = "\
processor\t: 0
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 58
model name\t: Intel(R) Core(TM) i7-3630QM CPU @ 2.40GHz
stepping\t: 9
microcode\t: 0x21
cpu MHz\t\t: 1197.410
cache size\t: 6144 KB
physical id\t: 0
siblings\t: 8
core id\t\t: 0
cpu cores\t: 4
apicid\t\t: 0
initial apicid\t: 0
fpu\t\t: yes
fpu_exception\t: yes
cpuid level\t: 13
wp\t\t: yes
flags\t\t: fpu vme de pse tsc msr pae mce cx8 apic sep mtrr pge mca cmov pat pse36 clflush dts acpi mmx fxsr sse sse2 ss ht tm pbe syscall nx rdtscp lm constant_tsc arch_perfmon pebs bts rep_good nopl xtopology nonstop_tsc cpuid aperfmperf pni pclmulqdq dtes64 monitor ds_cpl vmx est tm2 ssse3 cx16 xtpr pdcm pcid sse4_1 sse4_2 x2apic popcnt tsc_deadline_timer aes xsave avx f16c rdrand lahf_lm cpuid_fault epb pti ssbd ibrs ibpb stibp tpr_shadow vnmi flexpriority ept vpid fsgsbase smep erms xsaveopt dtherm ida arat pln pts md_clear flush_l1d
bugs\t\t: cpu_meltdown spectre_v1 spectre_v2 spec_store_bypass l1tf mds
bogomips\t: 4789.12
clflush size\t: 64
cache_alignment\t: 64
address sizes\t: 36 bits physical, 48 bits virtual
power management:

processor\t: 1
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 58
model name\t: Intel(R) Core(TM) i7-3630QM CPU @ 2.40GHz
stepping\t: 9
microcode\t: 0x21
cpu MHz\t\t: 1359.970
cache size\t: 6144 KB
physical id\t: 0
siblings\t: 8
core id\t\t: 1
cpu cores\t: 4
apicid\t\t: 2
initial apicid\t: 2
fpu\t\t: yes
fpu_exception\t: yes
cpuid level\t: 13
wp\t\t: yes
flags\t\t: fpu vme de pse tsc msr pae mce cx8 apic sep mtrr pge mca cmov pat pse36 clflush dts acpi mmx fxsr sse sse2 ss ht tm pbe syscall nx rdtscp lm constant_tsc arch_perfmon pebs bts rep_good nopl xtopology nonstop_tsc cpuid aperfmperf pni pclmulqdq dtes64 monitor ds_cpl vmx est tm2 ssse3 cx16 xtpr pdcm pcid sse4_1 sse4_2 x2apic popcnt tsc_deadline_timer aes xsave avx f16c rdrand lahf_lm cpuid_fault epb pti ssbd ibrs ibpb stibp tpr_shadow vnmi flexpriority ept vpid fsgsbase smep erms xsaveopt dtherm ida arat pln pts md_clear flush_l1d
bugs\t\t: cpu_meltdown spectre_v1 spectre_v2 spec_store_bypass l1tf mds
bogomips\t: 4789.12
clflush size\t: 64
cache_alignment\t: 64
address sizes\t: 36 bits physical, 48 bits virtual
power management:

processor\t: 2
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 58
model name\t: Intel(R) Core(TM) i7-3630QM CPU @ 2.40GHz
stepping\t: 9
microcode\t: 0x21
cpu MHz\t\t: 1249.090
cache size\t: 6144 KB
physical id\t: 0
siblings\t: 8
core id\t\t: 2
cpu cores\t: 4
apicid\t\t: 4
initial apicid\t: 4
fpu\t\t: yes
fpu_exception\t: yes
cpuid level\t: 13
wp\t\t: yes
flags\t\t: fpu vme de pse tsc msr pae mce cx8 apic sep mtrr pge mca cmov pat pse36 clflush dts acpi mmx fxsr sse sse2 ss ht tm pbe syscall nx rdtscp lm constant_tsc arch_perfmon pebs bts rep_good nopl xtopology nonstop_tsc cpuid aperfmperf pni pclmulqdq dtes64 monitor ds_cpl vmx est tm2 ssse3 cx16 xtpr pdcm pcid sse4_1 sse4_2 x2apic popcnt tsc_deadline_timer aes xsave avx f16c rdrand lahf_lm cpuid_fault epb pti ssbd ibrs ibpb stibp tpr_shadow vnmi flexpriority ept vpid fsgsbase smep erms xsaveopt dtherm ida arat pln pts md_clear flush_l1d
bugs\t\t: cpu_meltdown spectre_v1 spectre_v2 spec_store_bypass l1tf mds
bogomips\t: 4789.12
clflush size\t: 64
cache_alignment\t: 64
address sizes\t: 36 bits physical, 48 bits virtual
power management:

processor\t: 3
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 58
model name\t: Intel(R) Core(TM) i7-3630QM CPU @ 2.40GHz
stepping\t: 9
microcode\t: 0x21
cpu MHz\t\t: 1197.407
cache size\t: 6144 KB
physical id\t: 0
siblings\t: 8
core id\t\t: 3
cpu cores\t: 4
apicid\t\t: 6
initial apicid\t: 6
fpu\t\t: yes
fpu_exception\t: yes
cpuid level\t: 13
wp\t\t: yes
flags\t\t: fpu vme de pse tsc msr pae mce cx8 apic sep mtrr pge mca cmov pat pse36 clflush dts acpi mmx fxsr sse sse2 ss ht tm pbe syscall nx rdtscp lm constant_tsc arch_perfmon pebs bts rep_good nopl xtopology nonstop_tsc cpuid aperfmperf pni pclmulqdq dtes64 monitor ds_cpl vmx est tm2 ssse3 cx16 xtpr pdcm pcid sse4_1 sse4_2 x2apic popcnt tsc_deadline_timer aes xsave avx f16c rdrand lahf_lm cpuid_fault epb pti ssbd ibrs ibpb stibp tpr_shadow vnmi flexpriority ept vpid fsgsbase smep erms xsaveopt dtherm ida arat pln pts md_clear flush_l1d
bugs\t\t: cpu_meltdown spectre_v1 spectre_v2 spec_store_bypass l1tf mds
bogomips\t: 4789.12
clflush size\t: 64
cache_alignment\t: 64
address sizes\t: 36 bits physical, 48 bits virtual
power management:

processor\t: 4
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 58
model name\t: Intel(R) Core(TM) i7-3630QM CPU @ 2.40GHz
stepping\t: 9
microcode\t: 0x21
cpu MHz\t\t: 1206.451
cache size\t: 6144 KB
physical id\t: 0
siblings\t: 8
core id\t\t: 0
cpu cores\t: 4
apicid\t\t: 1
initial apicid\t: 1
fpu\t\t: yes
fpu_exception\t: yes
cpuid level\t: 13
wp\t\t: yes
flags\t\t: fpu vme de pse tsc msr pae mce cx8 apic sep mtrr pge mca cmov pat pse36 clflush dts acpi mmx fxsr sse sse2 ss ht tm pbe syscall nx rdtscp lm constant_tsc arch_perfmon pebs bts rep_good nopl xtopology nonstop_tsc cpuid aperfmperf pni pclmulqdq dtes64 monitor ds_cpl vmx est tm2 ssse3 cx16 xtpr pdcm pcid sse4_1 sse4_2 x2apic popcnt tsc_deadline_timer aes xsave avx f16c rdrand lahf_lm cpuid_fault epb pti ssbd ibrs ibpb stibp tpr_shadow vnmi flexpriority ept vpid fsgsbase smep erms xsaveopt dtherm ida arat pln pts md_clear flush_l1d
bugs\t\t: cpu_meltdown spectre_v1 spectre_v2 spec_store_bypass l1tf mds
bogomips\t: 4789.12
clflush size\t: 64
cache_alignment\t: 64
address sizes\t: 36 bits physical, 48 bits virtual
power management:

processor\t: 5
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 58
model name\t: Intel(R) Core(TM) i7-3630QM CPU @ 2.40GHz
stepping\t: 9
microcode\t: 0x21
cpu MHz\t\t: 1220.188
cache size\t: 6144 KB
physical id\t: 0
siblings\t: 8
core id\t\t: 1
cpu cores\t: 4
apicid\t\t: 3
initial apicid\t: 3
fpu\t\t: yes
fpu_exception\t: yes
cpuid level\t: 13
wp\t\t: yes
flags\t\t: fpu vme de pse tsc msr pae mce cx8 apic sep mtrr pge mca cmov pat pse36 clflush dts acpi mmx fxsr sse sse2 ss ht tm pbe syscall nx rdtscp lm constant_tsc arch_perfmon pebs bts rep_good nopl xtopology nonstop_tsc cpuid aperfmperf pni pclmulqdq dtes64 monitor ds_cpl vmx est tm2 ssse3 cx16 xtpr pdcm pcid sse4_1 sse4_2 x2apic popcnt tsc_deadline_timer aes xsave avx f16c rdrand lahf_lm cpuid_fault epb pti ssbd ibrs ibpb stibp tpr_shadow vnmi flexpriority ept vpid fsgsbase smep erms xsaveopt dtherm ida arat pln pts md_clear flush_l1d
bugs\t\t: cpu_meltdown spectre_v1 spectre_v2 spec_store_bypass l1tf mds
bogomips\t: 4789.12
clflush size\t: 64
cache_alignment\t: 64
address sizes\t: 36 bits physical, 48 bits virtual
power management:

processor\t: 6
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 58
model name\t: Intel(R) Core(TM) i7-3630QM CPU @ 2.40GHz
stepping\t: 9
microcode\t: 0x21
cpu MHz\t\t: 1272.328
cache size\t: 6144 KB
physical id\t: 0
siblings\t: 8
core id\t\t: 2
cpu cores\t: 4
apicid\t\t: 5
initial apicid\t: 5
fpu\t\t: yes
fpu_exception\t: yes
cpuid level\t: 13
wp\t\t: yes
flags\t\t: fpu vme de pse tsc msr pae mce cx8 apic sep mtrr pge mca cmov pat pse36 clflush dts acpi mmx fxsr sse sse2 ss ht tm pbe syscall nx rdtscp lm constant_tsc arch_perfmon pebs bts rep_good nopl xtopology nonstop_tsc cpuid aperfmperf pni pclmulqdq dtes64 monitor ds_cpl vmx est tm2 ssse3 cx16 xtpr pdcm pcid sse4_1 sse4_2 x2apic popcnt tsc_deadline_timer aes xsave avx f16c rdrand lahf_lm cpuid_fault epb pti ssbd ibrs ibpb stibp tpr_shadow vnmi flexpriority ept vpid fsgsbase smep erms xsaveopt dtherm ida arat pln pts md_clear flush_l1d
bugs\t\t: cpu_meltdown spectre_v1 spectre_v2 spec_store_bypass l1tf mds
bogomips\t: 4789.12
clflush size\t: 64
cache_alignment\t: 64
address sizes\t: 36 bits physical, 48 bits virtual
power management:

processor\t: 7
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 58
model name\t: Intel(R) Core(TM) i7-3630QM CPU @ 2.40GHz
stepping\t: 9
microcode\t: 0x21
cpu MHz\t\t: 1281.631
cache size\t: 6144 KB
physical id\t: 0
siblings\t: 8
core id\t\t: 3
cpu cores\t: 4
apicid\t\t: 7
initial apicid\t: 7
fpu\t\t: yes
fpu_exception\t: yes
cpuid level\t: 13
wp\t\t: yes
flags\t\t: fpu vme de pse tsc msr pae mce cx8 apic sep mtrr pge mca cmov pat pse36 clflush dts acpi mmx fxsr sse sse2 ss ht tm pbe syscall nx rdtscp lm constant_tsc arch_perfmon pebs bts rep_good nopl xtopology nonstop_tsc cpuid aperfmperf pni pclmulqdq dtes64 monitor ds_cpl vmx est tm2 ssse3 cx16 xtpr pdcm pcid sse4_1 sse4_2 x2apic popcnt tsc_deadline_timer aes xsave avx f16c rdrand lahf_lm cpuid_fault epb pti ssbd ibrs ibpb stibp tpr_shadow vnmi flexpriority ept vpid fsgsbase smep erms xsaveopt dtherm ida arat pln pts md_clear flush_l1d
bugs\t\t: cpu_meltdown spectre_v1 spectre_v2 spec_store_bypass l1tf mds
bogomips\t: 4789.12
clflush size\t: 64
cache_alignment\t: 64
address sizes\t: 36 bits physical, 48 bits virtual
power management:

";

/// The `flags` line shared by every processor in `CPUINFO_I7_3630QM`.
pub const I7_3630QM_FLAGS: &str = "fpu vme de pse tsc msr pae mce cx8 apic sep mtrr pge mca cmov pat pse36 clflush dts acpi mmx fxsr sse sse2 ss ht tm pbe syscall nx rdtscp lm constant_tsc arch_perfmon pebs bts rep_good nopl xtopology nonstop_tsc cpuid aperfmperf pni pclmulqdq dtes64 monitor ds_cpl vmx est tm2 ssse3 cx16 xtpr pdcm pcid sse4_1 sse4_2 x2apic popcnt tsc_deadline_timer aes xsave avx f16c rdrand lahf_lm cpuid_fault epb pti ssbd ibrs ibpb stibp tpr_shadow vnmi flexpriority ept vpid fsgsbase smep erms xsaveopt dtherm ida arat pln pts md_clear flush_l1d";

/// `/proc/meminfo` with the 47 fields a 4.x kernel prints on x86_64.
pub const MEMINFO_47_FIELDS: &str = "\
MemTotal:        7600292 kB
MemFree:         2097360 kB
MemAvailable:    4028236 kB
Buffers:          168084 kB
Cached:          2113548 kB
SwapCached:            0 kB
Active:          3476088 kB
Inactive:        1665228 kB
Active(anon):    2680536 kB
Inactive(anon):   367648 kB
Active(file):     795552 kB
Inactive(file):  1297580 kB
Unevictable:          96 kB
Mlocked:              96 kB
SwapTotal:       4002812 kB
SwapFree:        4002812 kB
Dirty:               712 kB
Writeback:             0 kB
AnonPages:       2859776 kB
Mapped:           614792 kB
Shmem:            379840 kB
Slab:             178200 kB
SReclaimable:     116308 kB
SUnreclaim:        61892 kB
KernelStack:       16896 kB
PageTables:        79124 kB
NFS_Unstable:          0 kB
Bounce:                0 kB
WritebackTmp:          0 kB
CommitLimit:     7802956 kB
Committed_AS:   13007596 kB
VmallocTotal:   34359738367 kB
VmallocUsed:           0 kB
VmallocChunk:          0 kB
HardwareCorrupted:     0 kB
AnonHugePages:         0 kB
ShmemHugePages:        0 kB
ShmemPmdMapped:        0 kB
CmaTotal:              0 kB
CmaFree:               0 kB
HugePages_Total:       0
HugePages_Free:        0
HugePages_Rsvd:        0
HugePages_Surp:        0
Hugepagesize:       2048 kB
DirectMap4k:      282496 kB
DirectMap2M:     7530496 kB
";

/// `/proc/stat` of a four core machine.
pub const STAT_FOUR_CORES: &str = "\
cpu  10132153 290696 3084719 46828483 16683 0 25195 0 175628 0
cpu0 1393280 32966 572056 13343292 6130 0 17875 0 23933 0
cpu1 1335255 37302 549839 13513577 3914 0 4178 0 0 0
cpu2 4691187 89413 1140289 10049017 3392 0 1650 0 0 0
cpu3 2712431 131015 822535 9922597 3247 0 1492 0 175628 0
intr 199292 45 3 0 0 0 0 0 0 1 0 0 0 130 0 0 0 0 0 0 0 0 0 0 0 0
ctxt 1990473
btime 1062961309
processes 2915
procs_running 1
procs_blocked 0
softirq 229245889 94 60001584 13619 5175704 2471304 28 51212741 59130143 0 51240672
";

/// `/proc/cpuinfo` of a dual core Pentium D on a 2.6.18 kernel (no `bugs`, no `address sizes`).
pub const CPUINFO_PENTIUM_D: &str = "\
processor\t: 0
vendor_id\t: GenuineIntel
cpu family\t: 15
model\t\t: 4
model name\t: Intel(R) Pentium(R) D CPU 3.00GHz
stepping\t: 7
cpu MHz\t\t: 2992.604
cache size\t: 2048 KB
physical id\t: 0
siblings\t: 2
core id\t\t: 0
cpu cores\t: 2
fpu\t\t: yes
fpu_exception\t: yes
cpuid level\t: 6
wp\t\t: yes
flags\t\t: fpu vme de pse tsc msr pae mce cx8 apic sep mtrr pge mca cmov pat pse36 clflush dts acpi mmx fxsr sse sse2 ss ht tm pbe nx lm constant_tsc pni monitor ds_cpl cid cx16 xtpr lahf_lm
bogomips\t: 5988.97
clflush size\t: 64

processor\t: 1
vendor_id\t: GenuineIntel
cpu family\t: 15
model\t\t: 4
model name\t: Intel(R) Pentium(R) D CPU 3.00GHz
stepping\t: 7
cpu MHz\t\t: 2992.604
cache size\t: 2048 KB
physical id\t: 0
siblings\t: 2
core id\t\t: 1
cpu cores\t: 2
fpu\t\t: yes
fpu_exception\t: yes
cpuid level\t: 6
wp\t\t: yes
flags\t\t: fpu vme de pse tsc msr pae mce cx8 apic sep mtrr pge mca cmov pat pse36 clflush dts acpi mmx fxsr sse sse2 ss ht tm pbe nx lm constant_tsc pni monitor ds_cpl cid cx16 xtpr lahf_lm
bogomips\t: 5985.26
clflush size\t: 64

";

/// `/proc/meminfo` of a 2.6.18 kernel: no `MemAvailable`, extra `High*`/`Low*` fields.
pub const MEMINFO_LEGACY: &str = "\
MemTotal:        2055920 kB
MemFree:          116168 kB
Buffers:          124236 kB
Cached:          1304584 kB
SwapCached:        40620 kB
Active:           977308 kB
Inactive:         717492 kB
HighTotal:       1179584 kB
HighFree:           1520 kB
LowTotal:         876336 kB
LowFree:          114648 kB
SwapTotal:       2096472 kB
SwapFree:        1983544 kB
Dirty:               116 kB
Writeback:             0 kB
AnonPages:        258928 kB
Mapped:            56964 kB
Slab:             211404 kB
PageTables:         4432 kB
NFS_Unstable:          0 kB
Bounce:                0 kB
CommitLimit:     3124432 kB
Committed_AS:     610476 kB
VmallocTotal:     114680 kB
VmallocUsed:        6420 kB
VmallocChunk:     107752 kB
HugePages_Total:       0
HugePages_Free:        0
HugePages_Rsvd:        0
Hugepagesize:       4096 kB
";

/// `/proc/stat` of a 2.6.18 kernel: eight tick columns, no `guest`/`guest_nice`.
pub const STAT_LEGACY: &str = "\
cpu  79242 0 74306 842486413 756859 6140 67701 0
cpu0 38166 0 36963 421321834 376497 3085 33802 0
cpu1 41076 0 37343 421164579 380362 3055 33899 0
intr 114930548 113199788 3 0 5 263 0 4 [0 0]
ctxt 1990473
btime 1062961309
processes 2915
procs_running 1
procs_blocked 0
";
