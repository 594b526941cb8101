// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Misc utility functions.

use std::time::Duration;

/// Format a number of bytes into a pretty String.
/// e.g. 1048576 is 1 MiB
pub fn format_byte_count(num_bytes: u64) -> String {
    // 2**30 = 1073741824
    if num_bytes > 1073741824 {
        format!("{:.2} GiB", (num_bytes as f64 / 1073741824.0))
    // 2**20 = 1048576
    } else if num_bytes > 1048576 {
        format!("{:.2} MiB", (num_bytes as f64 / 1048576.0))
    // 2**10 = 1024
    } else if num_bytes > 1024 {
        format!("{:.2} KiB", (num_bytes as f64 / 1024.0))
    } else {
        format!("{:.2} B", num_bytes as f64)
    }
}

/// Format a duration as h/m/s with millisecond precision.
pub fn format_elapsed_time(elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis();
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms / 60_000) % 60;
    let seconds = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;
    if hours > 0 {
        format!("{}h {:02}m {:02}.{:03}s", hours, minutes, seconds, millis)
    } else if minutes > 0 {
        format!("{}m {:02}.{:03}s", minutes, seconds, millis)
    } else {
        format!("{}.{:03}s", seconds, millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_counts() {
        assert_eq!(format_byte_count(512), "512.00 B");
        assert_eq!(format_byte_count(2048), "2.00 KiB");
        assert_eq!(format_byte_count(3 * 1048576), "3.00 MiB");
        assert_eq!(format_byte_count(32_000_000_000), "29.80 GiB");
    }

    #[test]
    fn elapsed_times() {
        assert_eq!(format_elapsed_time(Duration::from_millis(1_250)), "1.250s");
        assert_eq!(format_elapsed_time(Duration::from_millis(61_005)), "1m 01.005s");
        assert_eq!(
            format_elapsed_time(Duration::from_secs(3 * 3600 + 4 * 60 + 5)),
            "3h 04m 05.000s"
        );
    }
}
