// 🧮 Statistics Aggregator - Summary figures over the active view
//
// Four figures shown above the report table: distinct purchase order
// count, row count, and the arithmetic means of the two derived metrics.
// Averages over an empty view are 0, not NaN - the division guard is part
// of the contract.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::records::EnrichedRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub distinct_order_count: usize,
    pub record_count: usize,
    pub average_fulfillment_ratio: f64,
    pub average_elapsed_days: f64,
}

/// Compute summary statistics over a view.
pub fn summarize(records: &[EnrichedRecord]) -> Summary {
    let record_count = records.len();

    let distinct_orders: HashSet<&str> = records
        .iter()
        .map(|r| r.record.purchase_order_number.as_str())
        .collect();

    let (average_fulfillment_ratio, average_elapsed_days) = if record_count == 0 {
        (0.0, 0.0)
    } else {
        let ratio_sum: f64 = records.iter().map(|r| r.fulfillment_ratio).sum();
        let days_sum: i64 = records.iter().map(|r| r.elapsed_days).sum();
        (
            ratio_sum / record_count as f64,
            days_sum as f64 / record_count as f64,
        )
    };

    Summary {
        distinct_order_count: distinct_orders.len(),
        record_count,
        average_fulfillment_ratio,
        average_elapsed_days,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::enrich;
    use crate::records::Record;

    fn make_record(po: &str, order_value: f64, received_value: f64, days: (&str, &str)) -> EnrichedRecord {
        enrich(Record {
            purchase_order_number: po.to_string(),
            order_value,
            received_value,
            purchase_order_date: days.0.to_string(),
            received_date: days.1.to_string(),
            ..Record::default()
        })
    }

    #[test]
    fn test_summarize_empty_is_all_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.distinct_order_count, 0);
        assert_eq!(summary.record_count, 0);
        assert_eq!(summary.average_fulfillment_ratio, 0.0);
        assert_eq!(summary.average_elapsed_days, 0.0);
    }

    #[test]
    fn test_summarize_distinct_orders() {
        let records = vec![
            make_record("PO1", 100.0, 50.0, ("", "")),
            make_record("PO1", 100.0, 100.0, ("", "")),
            make_record("PO2", 100.0, 80.0, ("", "")),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.distinct_order_count, 2);
        assert_eq!(summary.record_count, 3);
    }

    #[test]
    fn test_summarize_averages() {
        let records = vec![
            make_record("PO1", 100.0, 60.0, ("01/01/2024", "03/01/2024")), // 60%, 2d
            make_record("PO2", 100.0, 80.0, ("01/01/2024", "05/01/2024")), // 80%, 4d
        ];

        let summary = summarize(&records);
        assert_eq!(summary.average_fulfillment_ratio, 70.0);
        assert_eq!(summary.average_elapsed_days, 3.0);
    }

    #[test]
    fn test_summarize_single_record() {
        let records = vec![make_record("PO1", 100.0, 80.0, ("01/01/2024", "05/01/2024"))];

        let summary = summarize(&records);
        assert_eq!(summary.distinct_order_count, 1);
        assert_eq!(summary.record_count, 1);
        assert_eq!(summary.average_fulfillment_ratio, 80.0);
        assert_eq!(summary.average_elapsed_days, 4.0);
    }
}
