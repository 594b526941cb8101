// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Statistics over a finished frequency table.

use statrs::statistics::Statistics;

use crate::digest::DIGEST_SIZE;
use crate::frequency::{FrequencyTable, BUCKETS};

/// Occurrences per bucket under a perfectly uniform distribution.
/// Real valued, never rounded.
pub fn expected_count(iterations: u64) -> f64 {
    iterations as f64 * DIGEST_SIZE as f64 / BUCKETS as f64
}

/// One table row.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BucketRow {
    pub byte: u8,
    pub count: u64,
    /// |count - expected|
    pub difference: f64,
}

/// Derived view of a frequency table, computed once after the run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub iterations: u64,
    pub expected: f64,
    /// All 256 buckets in byte order.
    pub rows: Vec<BucketRow>,
    pub average_difference: f64,
    pub min_difference: f64,
    pub max_difference: f64,
    pub total: u64,
    /// Buckets never observed.
    pub zero_hits: Vec<u8>,
    /// Buckets whose difference is exactly 0.0.
    pub exact_hits: Vec<u8>,
}

impl Report {
    pub fn from_table(table: &FrequencyTable, iterations: u64) -> Self {
        let expected = expected_count(iterations);
        let rows: Vec<BucketRow> = table
            .counts()
            .iter()
            .enumerate()
            .map(|(byte, &count)| BucketRow {
                byte: byte as u8,
                count,
                difference: (count as f64 - expected).abs(),
            })
            .collect();

        let differences: Vec<f64> = rows.iter().map(|row| row.difference).collect();
        let total_difference: f64 = differences.iter().sum();
        let zero_hits = rows
            .iter()
            .filter(|row| row.count == 0)
            .map(|row| row.byte)
            .collect();
        let exact_hits = rows
            .iter()
            .filter(|row| row.difference == 0.0)
            .map(|row| row.byte)
            .collect();

        Report {
            iterations,
            expected,
            average_difference: total_difference / BUCKETS as f64,
            min_difference: Statistics::min(&differences),
            max_difference: Statistics::max(&differences),
            total: table.total(),
            zero_hits,
            exact_hits,
            rows,
        }
    }

    /// Observations the table must hold for this many iterations.
    pub fn expected_total(&self) -> u64 {
        self.iterations.saturating_mul(DIGEST_SIZE as u64)
    }

    /// Sum of all counters equals `iterations * 32`.
    pub fn is_conserved(&self) -> bool {
        self.total == self.expected_total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_from(digests: &[[u8; DIGEST_SIZE]]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for digest in digests {
            table.observe(digest);
        }
        table
    }

    fn sequential_digest(start: u8) -> [u8; DIGEST_SIZE] {
        let mut digest = [0u8; DIGEST_SIZE];
        for (i, by) in digest.iter_mut().enumerate() {
            *by = start.wrapping_add(i as u8);
        }
        digest
    }

    #[test]
    fn expected_count_formula() {
        assert_eq!(expected_count(4), 0.5);
        assert_eq!(expected_count(8), 1.0);
        assert_eq!(expected_count(100_000_000), 12_500_000.0);
        assert_eq!(expected_count(3), 0.375);
    }

    #[test]
    fn report_covers_every_bucket_in_order() {
        let report = Report::from_table(&table_from(&[[0u8; DIGEST_SIZE]]), 1);
        assert_eq!(report.rows.len(), BUCKETS);
        for (i, row) in report.rows.iter().enumerate() {
            assert_eq!(row.byte as usize, i);
        }
    }

    #[test]
    fn zero_hits_match_empty_buckets() {
        let table = table_from(&[sequential_digest(0), sequential_digest(0)]);
        let report = Report::from_table(&table, 2);
        let empty: Vec<u8> = (0..BUCKETS)
            .filter(|&b| table.counts()[b] == 0)
            .map(|b| b as u8)
            .collect();
        assert_eq!(report.zero_hits, empty);
        assert_eq!(report.zero_hits.len(), 224);
        assert_eq!(report.zero_hits[0], 32);
    }

    #[test]
    fn exact_hits_use_the_same_expected_value() {
        // Eight digests covering each byte value exactly once: expected == 1.0.
        let digests: Vec<_> = (0..8).map(|i| sequential_digest(i * 32)).collect();
        let report = Report::from_table(&table_from(&digests), 8);
        assert_eq!(report.expected, 1.0);
        assert_eq!(report.exact_hits.len(), BUCKETS);
        assert!(report.zero_hits.is_empty());
        assert_eq!(report.average_difference, 0.0);
        assert_eq!(report.max_difference, 0.0);
        for row in &report.rows {
            assert_eq!(
                report.exact_hits.contains(&row.byte),
                (row.count as f64 - report.expected).abs() == 0.0
            );
        }
    }

    #[test]
    fn non_integer_expected_never_hits_exactly() {
        let report = Report::from_table(&table_from(&[sequential_digest(0); 3]), 3);
        assert_eq!(report.expected, 0.375);
        assert!(report.exact_hits.is_empty());
    }

    #[test]
    fn min_max_average_from_known_histogram() {
        let report = Report::from_table(&table_from(&[sequential_digest(0); 4]), 4);
        // 32 buckets at 4 (diff 3.5), 224 buckets at 0 (diff 0.5).
        assert_eq!(report.min_difference, 0.5);
        assert_eq!(report.max_difference, 3.5);
        assert_eq!(report.average_difference, 0.875);
        assert_eq!(report.total, 128);
        assert!(report.is_conserved());
    }

    #[test]
    fn conservation_detects_mismatched_iterations() {
        let report = Report::from_table(&table_from(&[sequential_digest(0); 4]), 5);
        assert_eq!(report.expected_total(), 160);
        assert!(!report.is_conserved());
    }

    #[test]
    fn expected_total_saturates() {
        let report = Report::from_table(&FrequencyTable::new(), u64::MAX);
        assert_eq!(report.expected_total(), u64::MAX);
        assert!(!report.is_conserved());
    }
}
