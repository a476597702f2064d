//! Parser for `/proc/cpuinfo`.
//!
//! The file holds one section per logical processor, separated by a blank line.
//! Each line inside a section is `name<tabs>: value`.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::parser::{
    FieldSetter, ParseError, dispatch, parse_f32, parse_kb, parse_prefixed_u32, parse_u32,
};

/// One logical processor as described by `/proc/cpuinfo`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct ProcessorInfo {
    /// Source: `processor`
    pub processor: u32,
    /// Source: `vendor_id`, e.g. `GenuineIntel`
    pub vendor_id: String,
    /// Source: `cpu family`
    pub cpu_family: u32,
    pub model: u32,
    /// Source: `model name`
    pub model_name: String,
    pub stepping: u32,
    /// Microcode revision; the kernel prints it in hex.
    pub microcode: u32,
    /// Current clock speed in MHz.
    pub cpu_mhz: f32,
    /// Source: `cache size`, e.g. `6144 KB`
    pub cache_size_kb: u64,
    /// Source: `physical id`, the socket index
    pub physical_id: u32,
    /// Logical processors on the same socket.
    pub siblings: u32,
    /// Source: `core id`
    pub core_id: u32,
    /// Source: `cpu cores`, physical cores on the socket
    pub cpu_cores: u32,
    pub apicid: u32,
    /// Source: `initial apicid`, the APIC id assigned at reset
    pub initial_apicid: u32,
    pub fpu: bool,
    /// Source: `fpu_exception`
    pub fpu_exception: bool,
    /// Source: `cpuid level`, highest standard CPUID leaf
    pub cpuid_level: u32,
    /// Source: `wp`, write protection honored in supervisor mode
    pub wp: bool,
    /// Feature flags in kernel order.
    pub flags: Vec<String>,
    /// Hardware bugs the kernel mitigates, in kernel order.
    pub bugs: Vec<String>,
    pub bogomips: f32,
    /// Source: `clflush size`, in bytes
    pub clflush_size: u32,
    /// Source: `cache_alignment`, in bytes
    pub cache_alignment: u32,
    /// Source: `address sizes`, first number
    pub physical_address_bits: u32,
    /// Source: `address sizes`, second number
    pub virtual_address_bits: u32,
    /// Always empty; the kernel leaves `power management` blank on x86.
    pub power_management: String,
}

impl ProcessorInfo {
    /// Returns true if the processor advertises `flag` (e.g. `avx`).
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }

    /// Returns true if the kernel lists `bug` for this processor (e.g. `spectre_v2`).
    pub fn has_bug(&self, bug: &str) -> bool {
        self.bugs.iter().any(|b| b == bug)
    }
}

fn split_tokens(value: &str) -> Vec<String> {
    value
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_address_sizes(info: &mut ProcessorInfo, value: &str) -> Result<(), ParseError> {
    // "36 bits physical, 48 bits virtual"
    let parts: Vec<&str> = value.split(' ').collect();
    let (Some(physical), Some(virt)) = (parts.first(), parts.get(3)) else {
        return Err(ParseError::invalid("address sizes", value));
    };
    info.physical_address_bits = parse_u32(physical)?;
    info.virtual_address_bits = parse_u32(virt)?;
    Ok(())
}

static CPUINFO_FIELDS: &[(&str, FieldSetter<ProcessorInfo>)] = &[
    ("processor", |p, v| parse_u32(v).map(|n| p.processor = n)),
    ("vendor_id", |p, v| {
        p.vendor_id = v.to_string();
        Ok(())
    }),
    ("cpu family", |p, v| parse_u32(v).map(|n| p.cpu_family = n)),
    ("model", |p, v| parse_u32(v).map(|n| p.model = n)),
    ("model name", |p, v| {
        p.model_name = v.to_string();
        Ok(())
    }),
    ("stepping", |p, v| parse_u32(v).map(|n| p.stepping = n)),
    ("microcode", |p, v| {
        parse_prefixed_u32(v).map(|n| p.microcode = n)
    }),
    ("cpu MHz", |p, v| parse_f32(v).map(|n| p.cpu_mhz = n)),
    ("cache size", |p, v| parse_kb(v).map(|n| p.cache_size_kb = n)),
    ("physical id", |p, v| parse_u32(v).map(|n| p.physical_id = n)),
    ("siblings", |p, v| parse_u32(v).map(|n| p.siblings = n)),
    ("core id", |p, v| parse_u32(v).map(|n| p.core_id = n)),
    ("cpu cores", |p, v| parse_u32(v).map(|n| p.cpu_cores = n)),
    ("apicid", |p, v| parse_u32(v).map(|n| p.apicid = n)),
    ("initial apicid", |p, v| {
        parse_u32(v).map(|n| p.initial_apicid = n)
    }),
    ("fpu", |p, v| {
        p.fpu = v == "yes";
        Ok(())
    }),
    ("fpu_exception", |p, v| {
        p.fpu_exception = v == "yes";
        Ok(())
    }),
    ("cpuid level", |p, v| parse_u32(v).map(|n| p.cpuid_level = n)),
    ("wp", |p, v| {
        p.wp = v == "yes";
        Ok(())
    }),
    ("flags", |p, v| {
        p.flags = split_tokens(v);
        Ok(())
    }),
    ("bugs", |p, v| {
        p.bugs = split_tokens(v);
        Ok(())
    }),
    ("bogomips", |p, v| parse_f32(v).map(|n| p.bogomips = n)),
    ("clflush size", |p, v| parse_u32(v).map(|n| p.clflush_size = n)),
    ("cache_alignment", |p, v| {
        parse_u32(v).map(|n| p.cache_alignment = n)
    }),
    ("address sizes", parse_address_sizes),
    ("power management", |_, _| Ok(())),
];

/// Parses `/proc/cpuinfo` content into one record per processor section.
///
/// Sections are returned in file order. Lines that do not split on `:` into
/// exactly two parts are skipped, as are field names this parser does not know.
pub fn parse_cpuinfo(content: &str) -> Result<Vec<ProcessorInfo>, ParseError> {
    let mut processors = Vec::new();

    for section in content.split("\n\n") {
        // the trailing blank line leaves an empty section behind
        if section.trim().is_empty() {
            continue;
        }

        let mut info = ProcessorInfo::default();
        for line in section.lines() {
            let parts: Vec<&str> = line.split(':').collect();
            if parts.len() != 2 {
                continue;
            }

            let (name, value) = (parts[0].trim(), parts[1].trim());
            if !dispatch(CPUINFO_FIELDS, &mut info, name, value)? {
                trace!(field = name, "ignoring unknown cpuinfo field");
            }
        }
        processors.push(info);
    }

    Ok(processors)
}
