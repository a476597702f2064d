//! Value converters shared by the `/proc` record parsers.
//!
//! Every converter takes an already trimmed string and either returns the
//! typed value or a `ParseError` naming the raw input. There are no fallbacks:
//! a value that does not fully parse fails the whole record.

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }

    /// Builds the error for a value that is not a valid `expected`.
    pub(crate) fn invalid(expected: &str, raw: &str) -> Self {
        Self::new(format!("cannot convert {:?} to {}", raw, expected))
    }

    /// Prefixes the message with the field the value belonged to.
    pub(crate) fn in_field(self, field: &str) -> Self {
        Self::new(format!("field {:?}: {}", field, self.message))
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Setter stored in a field dispatch table: converts `value` and stores it in the record.
pub(crate) type FieldSetter<T> = fn(&mut T, &str) -> Result<(), ParseError>;

/// Looks `name` up in a dispatch table and applies the matching setter.
///
/// Returns `Ok(false)` when the name is not in the table; callers ignore those
/// fields so that newer kernels with extra keys keep working.
pub(crate) fn dispatch<T>(
    table: &[(&str, FieldSetter<T>)],
    record: &mut T,
    name: &str,
    value: &str,
) -> Result<bool, ParseError> {
    match table.iter().find(|(key, _)| *key == name) {
        Some((_, setter)) => {
            setter(record, value).map_err(|e| e.in_field(name))?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Parses a plain decimal integer.
pub fn parse_u32(value: &str) -> Result<u32, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::invalid("integer", value))
}

/// Parses a plain decimal 64-bit integer.
pub fn parse_u64(value: &str) -> Result<u64, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::invalid("64-bit integer", value))
}

/// Parses an integer whose base is given by its prefix.
///
/// `0x` is hexadecimal, `0o` or a bare leading `0` is octal, `0b` is binary,
/// anything else is decimal. Used for `microcode`, which the kernel prints as `0x21`.
pub fn parse_prefixed_u32(value: &str) -> Result<u32, ParseError> {
    let lower = value.to_ascii_lowercase();
    let (digits, radix) = if let Some(hex) = lower.strip_prefix("0x") {
        (hex, 16)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        (oct, 8)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        (bin, 2)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (&lower[1..], 8)
    } else {
        (lower.as_str(), 10)
    };

    // from_str_radix tolerates a sign after the prefix ("0x+5"), the kernel never prints one
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(ParseError::invalid("prefixed integer", value));
    }

    u32::from_str_radix(digits, radix).map_err(|_| ParseError::invalid("prefixed integer", value))
}

/// Parses a 32-bit float such as `cpu MHz` or `bogomips`.
pub fn parse_f32(value: &str) -> Result<f32, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::invalid("float", value))
}

/// Parses a `"<number> kB"` value into the number of kilobytes.
///
/// The value must split on a single space into exactly two tokens. The unit
/// token is not checked: meminfo prints `kB` while cpuinfo's `cache size` prints `KB`.
pub fn parse_kb(value: &str) -> Result<u64, ParseError> {
    let parts: Vec<&str> = value.split(' ').collect();
    if parts.len() != 2 {
        return Err(ParseError::invalid("kilobyte value", value));
    }

    parts[0]
        .parse()
        .map_err(|_| ParseError::invalid("kilobyte value", value))
}
