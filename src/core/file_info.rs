// StegoSight - core/file_info.rs
//
// Human-readable file sizes and the placeholder payload capacity estimate.

use crate::util::constants::CAPACITY_PERCENT;

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with two decimals and a base-1024 unit.
///
/// TB is the largest unit; anything beyond it is still expressed in TB.
pub fn format_file_size(size: u64) -> String {
    let mut value = size as f64;
    for (i, unit) in SIZE_UNITS.iter().enumerate() {
        if value < 1024.0 || i == SIZE_UNITS.len() - 1 {
            return format!("{value:.2} {unit}");
        }
        value /= 1024.0;
    }
    unreachable!("the last unit always returns")
}

/// Estimated hideable payload in bytes: `CAPACITY_PERCENT` of `size`,
/// rounded down.
pub fn estimate_capacity_bytes(size: u64) -> u64 {
    (u128::from(size) * u128::from(CAPACITY_PERCENT) / 100) as u64
}

/// Capacity estimate as displayed in the cover file info card.
pub fn estimate_capacity(size: u64) -> String {
    format!(
        "~{} of secret data",
        format_file_size(estimate_capacity_bytes(size))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const KB: u64 = 1024;
    const GB: u64 = KB * KB * KB;

    #[test]
    fn test_format_reference_values() {
        assert_eq!(format_file_size(0), "0.00 B");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(1_048_576), "1.00 MB");
    }

    #[test]
    fn test_format_unit_boundaries() {
        assert_eq!(format_file_size(1023), "1023.00 B");
        assert_eq!(format_file_size(KB), "1.00 KB");
        assert_eq!(format_file_size(GB), "1.00 GB");
        assert_eq!(format_file_size(1023 * GB), "1023.00 GB");
    }

    #[test]
    fn test_format_rolls_over_to_terabytes() {
        assert_eq!(format_file_size(1024 * GB), "1.00 TB");
        assert_eq!(format_file_size(2048 * 1024 * GB), "2048.00 TB");
    }

    #[test]
    fn test_capacity_is_fifteen_percent_rounded_down() {
        assert_eq!(estimate_capacity_bytes(0), 0);
        assert_eq!(estimate_capacity_bytes(10), 1); // 1.5 -> 1
        assert_eq!(estimate_capacity_bytes(1000), 150);
        assert_eq!(estimate_capacity_bytes(1_048_576), 157_286); // 157286.4
        for size in [1u64, 7, 99, 12_345, 987_654_321] {
            let cap = estimate_capacity_bytes(size);
            assert!(cap * 100 <= size * 15 && (cap + 1) * 100 > size * 15);
        }
    }

    #[test]
    fn test_capacity_does_not_overflow() {
        assert_eq!(estimate_capacity_bytes(u64::MAX), u64::MAX / 100 * 15 + 2);
    }

    #[test]
    fn test_capacity_text_formats_rounded_bytes() {
        assert_eq!(estimate_capacity(1000), "~150.00 B of secret data");
        assert_eq!(estimate_capacity(10 * KB), "~1.50 KB of secret data");
    }
}
