const KIB: u64 = 1024;

const BINARY_UNITS: [(&str, u32); 4] = [("TB", 4), ("GB", 3), ("MB", 2), ("KB", 1)];

/// Formats a byte count with 1024-based units and two decimals, e.g. `1.50 MB`.
/// Counts below one kilobyte are printed as whole bytes.
pub fn format_bytes(bytes: u64) -> String {
    match BINARY_UNITS
        .iter()
        .find(|(_, exponent)| bytes >= KIB.pow(*exponent))
    {
        Some((unit, exponent)) => {
            format!("{:.2} {}", bytes as f64 / KIB.pow(*exponent) as f64, unit)
        }
        None => format!("{} B", bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_below_one_kilobyte_are_whole_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1), "1 B");
        assert_eq!(format_bytes(1023), "1023 B");
    }

    #[test]
    fn unit_switches_at_each_power_of_1024() {
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1024 * 1024 - 1), "1024.00 KB");
        assert_eq!(format_bytes(1_572_864), "1.50 MB");
        assert_eq!(format_bytes(1024u64.pow(3)), "1.00 GB");
        assert_eq!(format_bytes(3 * 1024u64.pow(4) / 2), "1.50 TB");
    }

    #[test]
    fn terabytes_are_the_largest_unit() {
        assert_eq!(format_bytes(2048 * 1024u64.pow(4)), "2048.00 TB");
    }
}
