//! Size formatting utilities.
//!
//! This module renders byte counts into the fixed-width, 1024-based column
//! used by the line output. Values below one KiB are shown as whole bytes;
//! larger values are divided by the largest fitting power of 1024 and shown
//! with two decimal places.

/// One kibibyte.
pub const KB: u64 = 1 << 10;

/// One mebibyte.
pub const MB: u64 = 1 << 20;

/// One gibibyte.
pub const GB: u64 = 1 << 30;

/// One tebibyte.
pub const TB: u64 = 1 << 40;

/// One pebibyte.
pub const PB: u64 = 1 << 50;

/// Format a byte count as a right-aligned, width-7 numeric field plus unit.
///
/// The unit suffix is one of `b`, `KB`, `MB`, `GB`, `TB` or `PB`. The result
/// is always at least 10 characters wide so that columns line up.
///
/// # Examples
///
/// ```
/// # use dua::utils::format_bytes;
/// assert_eq!(format_bytes(512), "    512  b");
/// assert_eq!(format_bytes(1536), "   1.50 KB");
/// ```
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    let (divisor, unit) = match bytes {
        b if b < KB => return format!("{b:7}  b"),
        b if b < MB => (KB, "KB"),
        b if b < GB => (MB, "MB"),
        b if b < TB => (GB, "GB"),
        b if b < PB => (TB, "TB"),
        _ => (PB, "PB"),
    };

    format!("{:7.2} {unit}", scaled(bytes, divisor))
}

/// Divide `bytes` by `divisor` as a float.
#[allow(clippy::cast_precision_loss)]
fn scaled(bytes: u64, divisor: u64) -> f64 {
    bytes as f64 / divisor as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_below_one_kib() {
        assert_eq!(format_bytes(0), "      0  b");
        assert_eq!(format_bytes(1), "      1  b");
        assert_eq!(format_bytes(1023), "   1023  b");
    }

    #[test]
    fn test_format_bytes_unit_boundaries() {
        assert_eq!(format_bytes(KB), "   1.00 KB");
        assert_eq!(format_bytes(MB), "   1.00 MB");
        assert_eq!(format_bytes(GB), "   1.00 GB");
        assert_eq!(format_bytes(TB), "   1.00 TB");
        assert_eq!(format_bytes(PB), "   1.00 PB");
    }

    #[test]
    fn test_format_bytes_fractional_values() {
        assert_eq!(format_bytes(1536), "   1.50 KB");
        assert_eq!(format_bytes(MB + MB / 4), "   1.25 MB");
        assert_eq!(format_bytes(MB - 1), "1024.00 KB");
    }

    #[test]
    fn test_format_bytes_stays_in_petabytes() {
        assert_eq!(format_bytes(2048 * PB), "2048.00 PB");
        assert!(format_bytes(u64::MAX).ends_with(" PB"));
    }

    #[test]
    fn test_format_bytes_width_is_stable() {
        for bytes in [0, 999, KB, 10 * MB, 100 * GB, 3 * TB] {
            assert_eq!(format_bytes(bytes).len(), 10, "width for {bytes}");
        }
    }
}
